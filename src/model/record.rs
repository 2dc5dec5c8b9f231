use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::name::Name;
use super::phone::Phone;
use crate::error::{BookError, BookResult};

/// One contact: a name plus its phone numbers in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validates and appends a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, value: &str) -> BookResult<()> {
        let phone = Phone::new(value)?;
        debug!(name = %self.name, phone = %phone, "adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Removes the first phone equal to `value`. Missing phones are ignored.
    pub fn remove_phone(&mut self, value: &str) -> Option<Phone> {
        let index = self.position(value)?;
        debug!(name = %self.name, phone = value, "removing phone");
        Some(self.phones.remove(index))
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its position.
    ///
    /// The lookup happens before validation: a missing `old` is reported as
    /// `PhoneNotFound` even when `new` is also invalid.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self.position(old).ok_or_else(|| BookError::PhoneNotFound {
            phone: old.to_string(),
        })?;
        self.phones[index].set_value(new)?;
        debug!(name = %self.name, old, new, "edited phone");
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == value)
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
