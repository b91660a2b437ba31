use tracing::debug;

use crate::constants::{EDITABLE_KEYS, FLAG_FALSE, FLAG_TRUE, TEMPLATE_INFO_EDITABLE_KEY};
use crate::metrics::ImportMetrics;
use crate::sink::AssessmentMetadataSink;

/// Seed the instructor-editable flags on an imported assessment.
///
/// Editability policy from the exporting system cannot be trusted on import,
/// so every setting is opened to the receiving instructor except template
/// info, which is forced off. Always performs `1 + EDITABLE_KEYS.len()`
/// writes and returns that count.
pub fn seed_defaults<S>(sink: &mut S) -> usize
where
    S: AssessmentMetadataSink + ?Sized,
{
    sink.add_assessment_metadata(TEMPLATE_INFO_EDITABLE_KEY, FLAG_FALSE);

    for key in EDITABLE_KEYS {
        sink.add_assessment_metadata(key, FLAG_TRUE);
    }

    let writes = 1 + EDITABLE_KEYS.len();
    debug!(writes, "seeded instructor-editable defaults");
    ImportMetrics::record_defaults_seeded(writes);
    writes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::AssessmentRecord;

    #[test]
    fn test_seed_defaults_writes_template_off_and_rest_on() {
        let mut record = AssessmentRecord::new();
        let writes = seed_defaults(&mut record);

        assert_eq!(writes, 1 + EDITABLE_KEYS.len());
        assert_eq!(record.metadata.len(), writes);
        assert_eq!(record.get(TEMPLATE_INFO_EDITABLE_KEY), Some("false"));
        for key in EDITABLE_KEYS {
            assert_eq!(record.get(key), Some("true"), "{key} should be editable");
        }
    }

    #[test]
    fn test_seed_defaults_overrides_prior_state() {
        let mut record = AssessmentRecord::new();
        record.add_assessment_metadata(TEMPLATE_INFO_EDITABLE_KEY, "true");
        record.add_assessment_metadata("dueDate_isInstructorEditable", "false");

        seed_defaults(&mut record);

        assert_eq!(record.get(TEMPLATE_INFO_EDITABLE_KEY), Some("false"));
        assert_eq!(record.get("dueDate_isInstructorEditable"), Some("true"));
    }
}
