use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Capability of an item record to accept a named metadata value.
/// Repeated keys are the sink's business; the in-memory record overwrites.
pub trait ItemMetadataSink {
    fn add_item_metadata(&mut self, key: &str, value: &str);
}

/// Capability of an assessment record to accept a named metadata value.
///
/// Kept separate from [`ItemMetadataSink`] because the two paths normalize
/// keys differently; a type may implement both.
pub trait AssessmentMetadataSink {
    fn add_assessment_metadata(&mut self, key: &str, value: &str);
}

/// In-memory item record holding metadata with last-write-wins semantics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub metadata: BTreeMap<String, String>,
}

impl ItemRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

impl ItemMetadataSink for ItemRecord {
    fn add_item_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

/// In-memory assessment record holding metadata with last-write-wins semantics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub metadata: BTreeMap<String, String>,
}

impl AssessmentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

impl AssessmentMetadataSink for AssessmentRecord {
    fn add_assessment_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}
