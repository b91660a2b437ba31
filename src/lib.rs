pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod sink;

pub use error::{MetadataError, Result};
pub use pipeline::{
    apply_to_assessment, apply_to_item, parse_entry, seed_defaults, ApplySummary, MetaDataList,
    MetadataEntry,
};
pub use sink::{AssessmentMetadataSink, AssessmentRecord, ItemMetadataSink, ItemRecord};
