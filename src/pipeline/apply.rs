use serde::Serialize;
use tracing::{debug, info};

use crate::constants::{TARGET_ASSESSMENT, TARGET_ITEM};
use crate::metrics::ImportMetrics;
use crate::pipeline::defaults::seed_defaults;
use crate::pipeline::normalize::normalize_entry;
use crate::pipeline::parser::parse_entry;
use crate::sink::{AssessmentMetadataSink, ItemMetadataSink};

/// Counts from one apply call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplySummary {
    /// Entries written to the record
    pub applied: usize,
    /// Entries dropped as empty or key-only
    pub skipped: usize,
    /// Applied entries whose legacy key was rewritten to a canonical name
    pub renamed: usize,
    /// Applied entries whose released-to value was rewritten to the anonymous audience
    pub value_fixups: usize,
}

/// Add extracted `KEY|VALUE` entries to an item record, in input order.
///
/// Item keys are never normalized. Entries without a value are skipped and a
/// missing list is treated as no metadata.
pub fn apply_to_item<S, I>(entries: Option<&[S]>, item: &mut I) -> ApplySummary
where
    S: AsRef<str>,
    I: ItemMetadataSink + ?Sized,
{
    let mut summary = ApplySummary::default();
    let Some(entries) = entries else {
        return summary;
    };

    for raw in entries {
        match parse_entry(raw.as_ref()) {
            Some(entry) => match entry.value {
                Some(value) => {
                    item.add_item_metadata(entry.key, value);
                    summary.applied += 1;
                }
                None => {
                    debug!(key = entry.key, "skipping item metadata entry without a value");
                    summary.skipped += 1;
                }
            },
            None => summary.skipped += 1,
        }
    }

    info!(
        applied = summary.applied,
        skipped = summary.skipped,
        "applied item metadata"
    );
    ImportMetrics::record_apply(TARGET_ITEM, &summary);
    summary
}

/// Add extracted `KEY|VALUE` entries to an assessment record, in input order.
///
/// Legacy keys are renamed and obsolete released-to values rewritten before
/// the entry is written. Entries without a value are skipped and a missing
/// list is treated as no metadata.
pub fn apply_to_assessment<S, A>(entries: Option<&[S]>, assessment: &mut A) -> ApplySummary
where
    S: AsRef<str>,
    A: AssessmentMetadataSink + ?Sized,
{
    let mut summary = ApplySummary::default();
    let Some(entries) = entries else {
        return summary;
    };

    for raw in entries {
        let Some(entry) = parse_entry(raw.as_ref()) else {
            summary.skipped += 1;
            continue;
        };

        let normalized = normalize_entry(entry);

        match normalized.entry.value {
            Some(value) => {
                // Renames and fixups only count once the entry reaches the record
                if let Some(legacy) = normalized.renamed_from {
                    debug!(legacy, canonical = normalized.entry.key, "renamed legacy metadata key");
                    summary.renamed += 1;
                }
                if normalized.value_fixed {
                    summary.value_fixups += 1;
                }
                assessment.add_assessment_metadata(normalized.entry.key, value);
                summary.applied += 1;
            }
            None => {
                debug!(
                    key = normalized.entry.key,
                    "skipping assessment metadata entry without a value"
                );
                summary.skipped += 1;
            }
        }
    }

    info!(
        applied = summary.applied,
        skipped = summary.skipped,
        renamed = summary.renamed,
        value_fixups = summary.value_fixups,
        "applied assessment metadata"
    );
    ImportMetrics::record_apply(TARGET_ASSESSMENT, &summary);
    summary
}

/// The `KEY|VALUE` entries extracted for one item or assessment.
///
/// Holds `None` when extraction found no metadata at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaDataList {
    entries: Option<Vec<String>>,
}

impl MetaDataList {
    pub fn new(entries: Option<Vec<String>>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> Option<&[String]> {
        self.entries.as_deref()
    }

    pub fn set_entries(&mut self, entries: Option<Vec<String>>) {
        self.entries = entries;
    }

    pub fn add_to_item<I>(&self, item: &mut I) -> ApplySummary
    where
        I: ItemMetadataSink + ?Sized,
    {
        apply_to_item(self.entries(), item)
    }

    pub fn add_to_assessment<A>(&self, assessment: &mut A) -> ApplySummary
    where
        A: AssessmentMetadataSink + ?Sized,
    {
        apply_to_assessment(self.entries(), assessment)
    }

    /// Seed editability flags; independent of the held entries
    pub fn set_defaults<A>(&self, assessment: &mut A) -> usize
    where
        A: AssessmentMetadataSink + ?Sized,
    {
        seed_defaults(assessment)
    }
}

impl From<Vec<String>> for MetaDataList {
    fn from(entries: Vec<String>) -> Self {
        Self::new(Some(entries))
    }
}
