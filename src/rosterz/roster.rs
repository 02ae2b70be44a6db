//! The ordered record collection and its structural change notifications.
//!
//! Every mutation returns a [`Delta`] describing what moved. Dependent
//! state (the expanded-row tracker, any list view) learns of changes only
//! through that delta; no operation mutates the sequence without emitting
//! one.

use serde::Serialize;

use crate::error::{Result, RosterError};
use crate::model::Record;
use crate::validation;

/// How a mutating operation changed the roster's structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Delta {
    /// A record now occupies this index; rows at or after it moved down.
    Inserted(usize),
    /// The record at this index is gone; rows after it moved up.
    Removed(usize),
    /// The record at this index was overwritten in place.
    Replaced(usize),
    /// The whole list was emptied; carries the previous length.
    RangeReset(usize),
}

impl Delta {
    /// The index the change applies to, or the previous length for a
    /// range reset.
    pub fn position(&self) -> usize {
        match self {
            Delta::Inserted(i) | Delta::Removed(i) | Delta::Replaced(i) | Delta::RangeReset(i) => {
                *i
            }
        }
    }
}

/// An ordered sequence of records with unique ids.
///
/// Display order is insertion order. After every successful operation no
/// two records share an id; an operation that would break that fails
/// before touching the sequence.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Index of the record holding `id`. By the uniqueness invariant the
    /// first match is the only one.
    pub fn find_by_id(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.records.len() {
            return Err(RosterError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    /// Appends `record` after running the full insertion policy.
    pub fn insert(&mut self, record: Record) -> Result<Delta> {
        validation::validate_for_insert(&record.name, &record.id, self.ids())?;
        self.records.push(record);
        Ok(Delta::Inserted(self.records.len() - 1))
    }

    /// Removes the record at `index`, returning it so a caller can capture
    /// it for restoration.
    pub fn remove_at(&mut self, index: usize) -> Result<(Record, Delta)> {
        self.check_index(index)?;
        let record = self.records.remove(index);
        Ok((record, Delta::Removed(index)))
    }

    /// Overwrites the record at `index` in place. The edit policy excludes
    /// the record itself from the duplicate check, so it may keep its id.
    pub fn replace_at(&mut self, index: usize, record: Record) -> Result<Delta> {
        self.check_index(index)?;
        let other_ids = self
            .records
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, r)| r.id.as_str());
        validation::validate_for_edit(&record.name, &record.id, other_ids)?;
        self.records[index] = record;
        Ok(Delta::Replaced(index))
    }

    /// Reinserts a previously removed record at `index`, which may equal
    /// the current length.
    ///
    /// The record already passed full validation when it first entered, so
    /// only the duplicate check runs: another record may have taken the id
    /// since the removal.
    pub fn insert_at(&mut self, index: usize, record: Record) -> Result<Delta> {
        if index > self.records.len() {
            return Err(RosterError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        if self.find_by_id(&record.id).is_some() {
            return Err(RosterError::DuplicateId(record.id.clone()));
        }
        self.records.insert(index, record);
        Ok(Delta::Inserted(index))
    }

    /// Empties the roster. Always succeeds.
    pub fn clear(&mut self) -> Delta {
        let previous = self.records.len();
        self.records.clear();
        Delta::RangeReset(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Field, ValidationError};

    fn roster_of(entries: &[(&str, &str)]) -> Roster {
        let mut roster = Roster::new();
        for (name, id) in entries {
            roster.insert(Record::new(*name, *id)).unwrap();
        }
        roster
    }

    #[test]
    fn insert_appends_and_reports_index() {
        let mut roster = Roster::new();
        let delta = roster.insert(Record::new("Alice", "1")).unwrap();
        assert_eq!(delta, Delta::Inserted(0));

        let delta = roster.insert(Record::new("Bob", "2")).unwrap();
        assert_eq!(delta, Delta::Inserted(1));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(1).unwrap().name, "Bob");
    }

    #[test]
    fn insert_rejects_duplicate_id_and_leaves_state() {
        let mut roster = roster_of(&[("Alice", "1"), ("Bob", "2")]);
        let err = roster.insert(Record::new("Carl", "2")).unwrap_err();
        assert_eq!(err, RosterError::DuplicateId("2".into()));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(1).unwrap().name, "Bob");
    }

    #[test]
    fn insert_allows_duplicate_names() {
        let mut roster = roster_of(&[("Alice", "1")]);
        assert!(roster.insert(Record::new("Alice", "2")).is_ok());
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn insert_validates_name_before_id() {
        let mut roster = Roster::new();
        let err = roster.insert(Record::new("", "abc")).unwrap_err();
        match err {
            RosterError::Validation(v) => assert_eq!(v.field(), Field::Name),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(roster.is_empty());
    }

    #[test]
    fn remove_at_returns_record_and_delta() {
        let mut roster = roster_of(&[("Alice", "1"), ("Bob", "2")]);
        let (record, delta) = roster.remove_at(0).unwrap();
        assert_eq!(record, Record::new("Alice", "1"));
        assert_eq!(delta, Delta::Removed(0));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(0).unwrap().name, "Bob");
    }

    #[test]
    fn remove_at_out_of_range() {
        let mut roster = roster_of(&[("Alice", "1")]);
        assert_eq!(
            roster.remove_at(1),
            Err(RosterError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn replace_at_keeps_index_and_size() {
        let mut roster = roster_of(&[("Alice", "1"), ("Bob", "2")]);
        let delta = roster.replace_at(0, Record::new("Al", "1")).unwrap();
        assert_eq!(delta, Delta::Replaced(0));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(0).unwrap(), &Record::new("Al", "1"));
    }

    #[test]
    fn replace_at_may_change_id_to_a_free_one() {
        let mut roster = roster_of(&[("Alice", "1"), ("Bob", "2")]);
        assert!(roster.replace_at(0, Record::new("Alice", "9")).is_ok());
        assert_eq!(roster.find_by_id("9"), Some(0));
        assert_eq!(roster.find_by_id("1"), None);
    }

    #[test]
    fn replace_at_rejects_another_records_id() {
        let mut roster = roster_of(&[("Alice", "1"), ("Bob", "2")]);
        let err = roster.replace_at(0, Record::new("Alice", "2")).unwrap_err();
        assert_eq!(err, RosterError::DuplicateId("2".into()));
        assert_eq!(roster.get(0).unwrap().id, "1");
    }

    #[test]
    fn replace_at_rejects_bad_name() {
        let mut roster = roster_of(&[("Alice", "1")]);
        let err = roster.replace_at(0, Record::new("A", "1")).unwrap_err();
        assert_eq!(
            err,
            RosterError::Validation(ValidationError::NameTooShort(1))
        );
        assert_eq!(roster.get(0).unwrap().name, "Alice");
    }

    #[test]
    fn replace_at_out_of_range() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.replace_at(0, Record::new("Alice", "1")),
            Err(RosterError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn insert_at_restores_into_the_middle() {
        let mut roster = roster_of(&[("Alice", "1"), ("Carl", "3")]);
        let delta = roster.insert_at(1, Record::new("Bob", "2")).unwrap();
        assert_eq!(delta, Delta::Inserted(1));
        let names: Vec<_> = roster.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "Carl"]);
    }

    #[test]
    fn insert_at_accepts_index_equal_to_len() {
        let mut roster = roster_of(&[("Alice", "1")]);
        assert!(roster.insert_at(1, Record::new("Bob", "2")).is_ok());
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn insert_at_rejects_index_past_len() {
        let mut roster = roster_of(&[("Alice", "1")]);
        assert_eq!(
            roster.insert_at(2, Record::new("Bob", "2")),
            Err(RosterError::IndexOutOfRange { index: 2, len: 1 })
        );
    }

    #[test]
    fn insert_at_rejects_id_taken_in_the_meantime() {
        let mut roster = roster_of(&[("Alice", "1")]);
        let (removed, _) = roster.remove_at(0).unwrap();
        roster.insert(Record::new("Imposter", "1")).unwrap();

        let err = roster.insert_at(0, removed).unwrap_err();
        assert_eq!(err, RosterError::DuplicateId("1".into()));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(0).unwrap().name, "Imposter");
    }

    #[test]
    fn clear_reports_previous_size() {
        let mut roster = roster_of(&[("Alice", "1"), ("Bob", "2")]);
        assert_eq!(roster.clear(), Delta::RangeReset(2));
        assert!(roster.is_empty());
        // Clearing an empty roster still succeeds.
        assert_eq!(roster.clear(), Delta::RangeReset(0));
    }

    #[test]
    fn find_by_id_scans_in_order() {
        let roster = roster_of(&[("Alice", "1"), ("Bob", "2")]);
        assert_eq!(roster.find_by_id("2"), Some(1));
        assert_eq!(roster.find_by_id("7"), None);
    }

    #[test]
    fn ids_stay_unique_across_mixed_operations() {
        let mut roster = roster_of(&[("Alice", "1"), ("Bob", "2"), ("Carl", "3")]);
        let (removed, _) = roster.remove_at(1).unwrap();
        roster.replace_at(0, Record::new("Alma", "4")).unwrap();
        roster.insert_at(1, removed).unwrap();
        roster.insert(Record::new("Dana", "5")).unwrap();

        let mut ids: Vec<_> = roster.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), roster.len());
    }
}
