use crate::domain::name::{name_key, ContactName};
use crate::domain::phone::{phone_search_key, Phone};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: ContactName,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl ContactRecord {
    pub fn new(name: &str) -> Result<Self, CoreError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn with_phone(name: &str, phone: &str) -> Result<Self, CoreError> {
        let mut record = Self::new(name)?;
        record.add_phone(phone)?;
        Ok(record)
    }

    pub fn key(&self) -> String {
        self.name.key()
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<&Phone, CoreError> {
        let phone = Phone::parse(raw)?;
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    /// Replaces the first phone equal to `old`. The replacement is validated
    /// before the lookup, so a bad `new` leaves the record untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<&Phone, CoreError> {
        let replacement = Phone::parse(new)?;
        let index = self.position_of(old)?;
        self.phones[index] = replacement;
        Ok(&self.phones[index])
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<Phone, CoreError> {
        let index = self.position_of(raw)?;
        Ok(self.phones.remove(index))
    }

    pub fn search_phone(&self, query: &str) -> Result<&Phone, CoreError> {
        let key = phone_search_key(query);
        self.phones
            .iter()
            .find(|phone| phone.contains_key(&key))
            .ok_or_else(|| CoreError::PhoneNotFound(query.trim().to_string()))
    }

    /// Overwrites the first phone, or stores one if the record has none yet.
    pub fn set_primary_phone(&mut self, raw: &str) -> Result<&Phone, CoreError> {
        let phone = Phone::parse(raw)?;
        match self.phones.first_mut() {
            Some(slot) => *slot = phone,
            None => self.phones.push(phone),
        }
        Ok(&self.phones[0])
    }

    pub fn matches(&self, pattern: &str) -> bool {
        let needle = name_key(pattern);
        if needle.is_empty() {
            return false;
        }
        if name_key(self.name.as_str()).contains(&needle) {
            return true;
        }
        let key = phone_search_key(pattern);
        self.phones.iter().any(|phone| phone.contains_key(&key))
    }

    fn position_of(&self, raw: &str) -> Result<usize, CoreError> {
        // An unparseable `old` can never be stored, so it is simply not found.
        let target = Phone::parse(raw)
            .map_err(|_| CoreError::PhoneNotFound(raw.trim().to_string()))?;
        self.phones
            .iter()
            .position(|phone| *phone == target)
            .ok_or_else(|| CoreError::PhoneNotFound(raw.trim().to_string()))
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "-".to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join("; ")
        };
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = self.birthday.as_deref() {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
