// src/web_scraper/types.rs
use serde::Serialize;
use std::collections::BTreeMap;

/// Sentinel shown for single-valued fields that were not found on the page.
pub const NOT_FOUND: &str = "Not found";

/// Everything the scraper could learn from one page. Built once per call and
/// immutable afterwards; `None` and the empty map mean "not found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social_links: BTreeMap<String, String>,
    pub contact_page: Option<String>,
    pub title: String,
    pub description: String,
}

impl ContactRecord {
    /// The degraded-but-valid record returned when the page could not be
    /// fetched or parsed.
    pub fn not_found() -> Self {
        Self {
            email: None,
            phone: None,
            social_links: BTreeMap::new(),
            contact_page: None,
            title: NOT_FOUND.to_string(),
            description: NOT_FOUND.to_string(),
        }
    }
}
