//! Metadata import pipeline: raw `KEY|VALUE` entries are parsed, normalized
//! (assessment path only) and applied to a record through its sink.

pub mod apply;
pub mod defaults;
pub mod normalize;
pub mod parser;

pub use apply::{apply_to_assessment, apply_to_item, ApplySummary, MetaDataList};
pub use defaults::seed_defaults;
pub use normalize::{canonical_key, fixup_released_to, normalize_entry, NormalizedEntry};
pub use parser::{parse_entry, MetadataEntry};
