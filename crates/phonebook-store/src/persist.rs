use crate::book::AddressBook;
use crate::error::{Result, StoreError};
use crate::paths;
use phonebook_core::domain::{name_key, ContactRecord};
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Which on-disk shape an address book was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSource {
    /// No file yet; the book starts empty.
    Missing,
    /// Object mapping each name to its record.
    Canonical,
    /// Flat `[{"name": ..., "phone": ...}]` list, upgraded on the next save.
    Legacy,
}

#[derive(Debug, Deserialize)]
struct LegacyEntry {
    name: String,
    phone: String,
}

pub fn load(path: &Path) -> Result<(AddressBook, BookSource)> {
    if !path.exists() {
        return Ok((AddressBook::new(), BookSource::Missing));
    }

    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok((AddressBook::new(), BookSource::Canonical));
    }

    match contents.trim_start().as_bytes().first() {
        Some(b'{') => {
            let book = serde_json::from_str(&contents)?;
            Ok((book, BookSource::Canonical))
        }
        Some(b'[') => {
            let entries: Vec<LegacyEntry> = serde_json::from_str(&contents)?;
            Ok((upgrade_legacy(entries)?, BookSource::Legacy))
        }
        _ => Err(StoreError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Writes through a temp file in the target directory and renames it into
/// place, so a crash never leaves a half-written book behind.
pub fn save(book: &AddressBook, path: &Path) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut temp, book)?;
    temp.write_all(b"\n")?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|err| StoreError::Io(err.error))?;
    Ok(())
}

fn upgrade_legacy(entries: Vec<LegacyEntry>) -> Result<AddressBook> {
    let mut book = AddressBook::new();
    for entry in entries {
        let key = name_key(&entry.name);
        if book.find_record(&key).is_ok() {
            book.find_record_mut(&key)?.add_phone(&entry.phone)?;
        } else {
            book.add_record(ContactRecord::with_phone(&entry.name, &entry.phone)?)?;
        }
    }
    Ok(book)
}
