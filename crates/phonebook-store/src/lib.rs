pub mod book;
pub mod error;
pub mod paths;
pub mod persist;

pub use book::{AddressBook, ListOrder, Listing};
pub use persist::BookSource;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// An address book bound to the file it is loaded from and saved back to.
pub struct Store {
    path: PathBuf,
    book: AddressBook,
    source: BookSource,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let (book, source) = persist::load(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            book,
            source,
        })
    }

    pub fn save(&self) -> Result<()> {
        persist::save(&self.book, &self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> BookSource {
        self.source
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }
}
