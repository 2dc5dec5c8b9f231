use std::io::Write;
use tracing::{debug, info};

use crate::error::BookResult;
use crate::model::Record;

/// The address book: records keyed by contact name.
///
/// Records are kept in insertion order. Each key is read from the record's
/// own name, so a key can never disagree with its record.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any record with the same name.
    /// A replaced record keeps its original position.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!(name = %record.name(), "replacing record");
                self.records[index] = record;
            }
            None => {
                debug!(name = %record.name(), "adding record");
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Removes the record for `name`. A missing name is not an error: a notice
    /// is written to `out` and the book is left as it was.
    pub fn delete<W: Write>(&mut self, name: &str, out: &mut W) -> BookResult<()> {
        match self.position(name) {
            Some(index) => {
                debug!(name, "deleting record");
                self.records.remove(index);
            }
            None => {
                info!(name, "delete requested for missing record");
                writeln!(out, "The record '{}' does not exist in the address book.", name)?;
            }
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|r| (r.name().as_str(), r))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a str, &'a Record);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Record)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
