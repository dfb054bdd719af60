use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactName(String);

impl ContactName {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn key(&self) -> String {
        name_key(&self.0)
    }
}

impl TryFrom<String> for ContactName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ContactName> for String {
    fn from(value: ContactName) -> Self {
        value.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case-insensitive lookup key for a contact name.
pub fn name_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{name_key, ContactName};

    #[test]
    fn contact_name_trims() {
        let name = ContactName::new("  John ").unwrap();
        assert_eq!(name.as_str(), "John");
        assert_eq!(name.key(), "john");
    }

    #[test]
    fn contact_name_rejects_blank() {
        assert!(ContactName::new("   ").is_err());
    }

    #[test]
    fn name_key_folds_non_ascii_case() {
        assert_eq!(name_key("ОЛЕНА"), name_key("олена"));
    }
}
