use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("contact name is required")]
    EmptyName,
    #[error("invalid phone format: {0} (expected 0XXXXXXXXX or +380XXXXXXXXX)")]
    InvalidPhoneFormat(String),
    #[error("phone not found: {0}")]
    PhoneNotFound(String),
}
