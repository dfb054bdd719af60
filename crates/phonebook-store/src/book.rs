use crate::error::{Result, StoreError};
use indexmap::IndexMap;
use phonebook_core::domain::{name_key, ContactRecord};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    #[default]
    ByName,
    Insertion,
}

impl ListOrder {
    pub fn from_sorted(sorted: bool) -> Self {
        if sorted {
            ListOrder::ByName
        } else {
            ListOrder::Insertion
        }
    }
}

/// Contacts keyed by lowercase name, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, ContactRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn add_record(&mut self, record: ContactRecord) -> Result<&ContactRecord> {
        let key = record.key();
        if self.records.contains_key(&key) {
            return Err(StoreError::DuplicateContact(record.name.to_string()));
        }
        let (index, _) = self.records.insert_full(key, record);
        Ok(&self.records[index])
    }

    pub fn find_record(&self, name: &str) -> Result<&ContactRecord> {
        self.records
            .get(&name_key(name))
            .ok_or_else(|| not_found(name))
    }

    pub fn find_record_mut(&mut self, name: &str) -> Result<&mut ContactRecord> {
        self.records
            .get_mut(&name_key(name))
            .ok_or_else(|| not_found(name))
    }

    pub fn delete_record(&mut self, name: &str) -> Result<ContactRecord> {
        self.records
            .shift_remove(&name_key(name))
            .ok_or_else(|| not_found(name))
    }

    /// Replaces the contact's first phone. The name is resolved before the
    /// phone is validated.
    pub fn change_phone(&mut self, name: &str, new_phone: &str) -> Result<&ContactRecord> {
        let record = self.find_record_mut(name)?;
        record.set_primary_phone(new_phone)?;
        Ok(&*record)
    }

    pub fn search(&self, pattern: &str) -> Result<Vec<&ContactRecord>> {
        let found: Vec<&ContactRecord> = self
            .records
            .values()
            .filter(|record| record.matches(pattern))
            .collect();
        if found.is_empty() {
            return Err(StoreError::NoMatch(pattern.trim().to_string()));
        }
        Ok(found)
    }

    /// Every call recomputes the ordering from the current contents.
    pub fn list(&self, order: ListOrder) -> Listing<'_> {
        match order {
            ListOrder::Insertion => Listing::Insertion(self.records.values()),
            ListOrder::ByName => {
                let mut entries: Vec<(&String, &ContactRecord)> = self.records.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                let sorted: Vec<&ContactRecord> =
                    entries.into_iter().map(|(_, record)| record).collect();
                Listing::ByName(sorted.into_iter())
            }
        }
    }
}

fn not_found(name: &str) -> StoreError {
    StoreError::ContactNotFound(name.trim().to_string())
}

pub enum Listing<'a> {
    Insertion(indexmap::map::Values<'a, String, ContactRecord>),
    ByName(std::vec::IntoIter<&'a ContactRecord>),
}

impl<'a> Iterator for Listing<'a> {
    type Item = &'a ContactRecord;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Listing::Insertion(values) => values.next(),
            Listing::ByName(sorted) => sorted.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Listing::Insertion(values) => values.size_hint(),
            Listing::ByName(sorted) => sorted.size_hint(),
        }
    }
}

impl ExactSizeIterator for Listing<'_> {}

impl Serialize for AddressBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.records
                .values()
                .map(|record| (record.name.as_str(), record)),
        )
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = IndexMap::<String, ContactRecord>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for (key, record) in entries {
            if name_key(&key) != record.key() {
                return Err(D::Error::custom(format!(
                    "entry {key:?} holds contact {:?}",
                    record.name.as_str()
                )));
            }
            book.add_record(record).map_err(D::Error::custom)?;
        }
        Ok(book)
    }
}
