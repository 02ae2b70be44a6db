use serde::{Deserialize, Serialize};

/// A single roster entry.
///
/// Records are plain values: the roster owns the canonical sequence and
/// callers receive borrows or clones. Identity is carried by `id` alone;
/// `name` is display data and may repeat across records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub id: String,
}

impl Record {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Whether two records denote the same entity. Name equality is
    /// irrelevant: ids decide.
    pub fn same_entity(&self, other: &Record) -> bool {
        self.id == other.id
    }
}
