pub mod name;
pub mod phone;
pub mod record;

pub use name::{name_key, ContactName};
pub use phone::{normalize_phone, phone_search_key, Phone};
pub use record::ContactRecord;
