use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const COUNTRY_PREFIX: &str = "+380";
pub const SUBSCRIBER_DIGITS: usize = 9;
const NATIONAL_PREFIX: char = '0';

/// A phone number that has passed [`normalize_phone`].
///
/// Stored in the international `+380XXXXXXXXX` form. Deserializing runs the
/// normalizer again, so a hand-edited book file cannot smuggle in a value
/// that `Phone::parse` would reject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let normalized = normalize_phone(raw)?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring match against a pattern already passed through
    /// [`phone_search_key`].
    pub fn contains_key(&self, key: &str) -> bool {
        !key.is_empty() && self.0.contains(key)
    }
}

impl TryFrom<String> for Phone {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize_phone(raw: &str) -> Result<String, CoreError> {
    let stripped = phone_search_key(raw);

    let subscriber = if let Some(rest) = stripped.strip_prefix(COUNTRY_PREFIX) {
        rest
    } else if let Some(rest) = stripped.strip_prefix(NATIONAL_PREFIX) {
        rest
    } else {
        return Err(CoreError::InvalidPhoneFormat(raw.trim().to_string()));
    };

    if subscriber.len() != SUBSCRIBER_DIGITS || !subscriber.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidPhoneFormat(raw.trim().to_string()));
    }

    Ok(format!("{}{}", COUNTRY_PREFIX, subscriber))
}

/// Drops `-` and whitespace separators. Used both before validation and to
/// turn a free-form search pattern into something comparable with stored
/// phones.
pub fn phone_search_key(raw: &str) -> String {
    raw.chars()
        .filter(|ch| *ch != '-' && !ch.is_whitespace())
        .collect()
}
