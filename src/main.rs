use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use qti_metadata::config::Config;
use qti_metadata::constants::{EDITABLE_KEYS, TEMPLATE_INFO_EDITABLE_KEY};
use qti_metadata::input::read_entries;
use qti_metadata::logging;
use qti_metadata::{ApplySummary, AssessmentRecord, ItemRecord, MetaDataList};

#[derive(Parser)]
#[command(name = "qti-metadata")]
#[command(about = "Apply extracted KEY|VALUE metadata entries to item and assessment records")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply entries to an item record (keys are not normalized)
    Item {
        /// JSON file holding an array of entry strings ("-" reads stdin)
        #[arg(long)]
        input: Option<String>,
        /// Entries given directly, e.g. "TEXT_FORMAT|HTML"
        entries: Vec<String>,
    },
    /// Apply entries to an assessment record, normalizing legacy keys
    Assessment {
        /// JSON file holding an array of entry strings ("-" reads stdin)
        #[arg(long)]
        input: Option<String>,
        /// Skip seeding the instructor-editable flags
        #[arg(long)]
        no_defaults: bool,
        /// Entries given directly, e.g. "AUTHORS|Jane Doe"
        entries: Vec<String>,
    },
    /// List the flags seeded as instructor-editable on import
    EditableKeys,
}

#[derive(Serialize)]
struct Output<R: Serialize> {
    summary: ApplySummary,
    defaults_seeded: usize,
    record: R,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Parse arguments first so --help and usage errors never depend on config
    let cli = Cli::parse();

    let config = Config::load().context("loading configuration")?;
    let _guard = logging::init_logging(&config.logging);

    match cli.command {
        Commands::Item { input, entries } => {
            let list = MetaDataList::from(read_entries(input.as_deref(), entries)?);
            let mut record = ItemRecord::new();
            let summary = list.add_to_item(&mut record);

            let output = Output {
                summary,
                defaults_seeded: 0,
                record,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Assessment {
            input,
            no_defaults,
            entries,
        } => {
            let list = MetaDataList::from(read_entries(input.as_deref(), entries)?);
            let mut record = AssessmentRecord::new();

            // Seed first so imported values can override the defaults
            let defaults_seeded = if config.import.seed_editability_defaults && !no_defaults {
                list.set_defaults(&mut record)
            } else {
                info!("skipping instructor-editable defaults");
                0
            };
            let summary = list.add_to_assessment(&mut record);

            let output = Output {
                summary,
                defaults_seeded,
                record,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::EditableKeys => {
            println!("{} (seeded false)", TEMPLATE_INFO_EDITABLE_KEY);
            for key in EDITABLE_KEYS {
                println!("{}", key);
            }
        }
    }

    Ok(())
}
