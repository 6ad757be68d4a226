pub mod contact_extractor;
pub mod types;

pub use contact_extractor::ContactScraper;
pub use types::{ContactRecord, NOT_FOUND};
