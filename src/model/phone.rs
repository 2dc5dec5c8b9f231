use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BookError, BookResult};
use crate::validation;

/// A phone number of exactly ten decimal digits.
///
/// The only way to obtain a `Phone` is through validation, so every value
/// in a record upholds the digit rule, including deserialized ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone {
    value: String,
}

impl Phone {
    pub fn new(value: &str) -> BookResult<Self> {
        Ok(Self {
            value: validation::phone_digits(value)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Replace the digits in place. On failure the old value is kept.
    pub(crate) fn set_value(&mut self, value: &str) -> BookResult<()> {
        self.value = validation::phone_digits(value)?;
        Ok(())
    }
}

impl TryFrom<String> for Phone {
    type Error = BookError;

    fn try_from(value: String) -> BookResult<Self> {
        Self::new(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.value
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
