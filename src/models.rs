use serde::Deserialize;

use crate::{config::Config, resolver::WebsiteResolver, web_scraper::ContactScraper};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// One entry from the search provider. Untrusted input: ordering and
/// content are whatever the provider returned.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// Sender identity collected once per session and reused for every draft.
#[derive(Debug, Clone)]
pub struct SenderProfile {
    pub name: String,
    pub title: String,
}

pub struct CliApp {
    pub config: Config,
    pub resolver: WebsiteResolver,
    pub scraper: ContactScraper,
}
