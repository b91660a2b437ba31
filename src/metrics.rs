//! Import metrics
//!
//! Counters for the metadata pipeline, recorded through the `metrics` facade.
//! They are no-ops until the embedding application installs a recorder.

use crate::pipeline::apply::ApplySummary;

pub const ENTRIES_APPLIED: &str = "qti_metadata_entries_applied_total";
pub const ENTRIES_SKIPPED: &str = "qti_metadata_entries_skipped_total";
pub const KEYS_RENAMED: &str = "qti_metadata_keys_renamed_total";
pub const VALUE_FIXUPS: &str = "qti_metadata_value_fixups_total";
pub const DEFAULTS_SEEDED: &str = "qti_metadata_defaults_seeded_total";

/// Metrics collection for metadata imports
pub struct ImportMetrics;

impl ImportMetrics {
    /// Record the outcome of one apply call against a target ("item" or "assessment")
    pub fn record_apply(target: &'static str, summary: &ApplySummary) {
        ::metrics::counter!(ENTRIES_APPLIED, "target" => target).increment(summary.applied as u64);
        ::metrics::counter!(ENTRIES_SKIPPED, "target" => target).increment(summary.skipped as u64);
        if summary.renamed > 0 {
            ::metrics::counter!(KEYS_RENAMED, "target" => target).increment(summary.renamed as u64);
        }
        if summary.value_fixups > 0 {
            ::metrics::counter!(VALUE_FIXUPS, "target" => target)
                .increment(summary.value_fixups as u64);
        }
    }

    /// Record the flags written by one default-seeding pass
    pub fn record_defaults_seeded(writes: usize) {
        ::metrics::counter!(DEFAULTS_SEEDED).increment(writes as u64);
    }
}
