// src/web_scraper/contact_extractor.rs
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::ScrapingConfig;
use crate::models::Result;
use crate::web_scraper::types::{ContactRecord, NOT_FOUND};

/// Social platforms recognized by exact domain match (after `www.` strip).
const SOCIAL_PLATFORMS: &[(&str, &str)] = &[
    ("linkedin.com", "LinkedIn"),
    ("twitter.com", "Twitter"),
    ("facebook.com", "Facebook"),
    ("instagram.com", "Instagram"),
    ("youtube.com", "YouTube"),
];

pub struct ContactScraper {
    client: Client,
    email_regex: Regex,
    phone_regex: Regex,
}

impl ContactScraper {
    pub fn new(config: &ScrapingConfig) -> Result<Self> {
        // Browser-like identification: plenty of sites reject unidentified
        // clients outright.
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.page_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            email_regex: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap(),
            phone_regex: Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap(),
        })
    }

    /// Fetches one page and derives a contact record from it. Never fails
    /// outward: any transport or HTTP error degrades to the all-sentinel
    /// record with a non-fatal warning.
    pub async fn extract(&self, url: &str) -> ContactRecord {
        let url = normalize_url(url);
        match self.fetch_page(&url).await {
            Ok(html) => self.extract_from_html(&html, &url),
            Err(e) => {
                warn!("Could not scrape {}: {}", url, e);
                ContactRecord::not_found()
            }
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        debug!("Fetching: {}", url);
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }
        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }

    /// Pure HTML-to-record step, kept separate from the fetch so it can run
    /// on static documents.
    pub fn extract_from_html(&self, html: &str, page_url: &str) -> ContactRecord {
        let document = Html::parse_document(html);
        let base = base_url(page_url);

        let title_selector = Selector::parse("title").unwrap();
        let title = document
            .select(&title_selector)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| NOT_FOUND.to_string());

        let meta_selector = Selector::parse(r#"meta[name="description"]"#).unwrap();
        let description = document
            .select(&meta_selector)
            .next()
            .and_then(|m| m.value().attr("content"))
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| NOT_FOUND.to_string());

        let mut emails = BTreeSet::new();
        let mut phones = BTreeSet::new();
        let mut contact_pages = BTreeSet::new();
        let mut social_links = BTreeMap::new();

        let link_selector = Selector::parse("a[href]").unwrap();
        for element in document.select(&link_selector) {
            let href = match element.value().attr("href") {
                Some(href) => href,
                None => continue,
            };

            if let Some(address) = href.strip_prefix("mailto:") {
                if !address.is_empty() {
                    emails.insert(address.to_string());
                }
                continue;
            }

            let full_url = match resolve_href(base.as_ref(), href) {
                Some(url) => url,
                None => continue,
            };
            let host = match full_url.host_str() {
                Some(host) => host.to_lowercase(),
                None => continue,
            };
            let domain = host.trim_start_matches("www.");
            let path = full_url.path().to_lowercase();

            if let Some((_, platform)) = SOCIAL_PLATFORMS.iter().find(|(d, _)| *d == domain) {
                // First link per platform wins.
                social_links
                    .entry(platform.to_string())
                    .or_insert_with(|| full_url.to_string());
            }

            if path.contains("/contact") || path.contains("/help") {
                contact_pages.insert(full_url.to_string());
            }
        }

        // Second line of defense: addresses and numbers rendered as body
        // copy, with no mailto or tel link anywhere.
        let page_text = visible_text(&document);
        for m in self.email_regex.find_iter(&page_text) {
            emails.insert(m.as_str().to_string());
        }
        for m in self.phone_regex.find_iter(&page_text) {
            phones.insert(m.as_str().to_string());
        }

        debug!(
            "Extracted {} emails, {} phones, {} social links from {}",
            emails.len(),
            phones.len(),
            social_links.len(),
            page_url
        );

        ContactRecord {
            email: emails.into_iter().next(),
            phone: phones.into_iter().next(),
            social_links,
            contact_page: contact_pages.into_iter().next(),
            title,
            description,
        }
    }
}

fn normalize_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// `scheme://host` of the page, used to absolutize relative hrefs.
fn base_url(page_url: &str) -> Option<Url> {
    let parsed = Url::parse(page_url).ok()?;
    let host = parsed.host_str()?;
    Url::parse(&format!("{}://{}", parsed.scheme(), host)).ok()
}

fn resolve_href(base: Option<&Url>, href: &str) -> Option<Url> {
    match Url::parse(href) {
        Ok(url) => Some(url),
        Err(_) => base?.join(href).ok(),
    }
}

fn visible_text(document: &Html) -> String {
    document.root_element().text().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn scraper() -> ContactScraper {
        ContactScraper::new(&Config::default().scraping).unwrap()
    }

    const PAGE_URL: &str = "https://acme.com";

    #[test]
    fn mailto_link_yields_email() {
        let html = r#"<html><body><a href="mailto:info@acme.com">Email us</a></body></html>"#;
        let record = scraper().extract_from_html(html, PAGE_URL);
        assert_eq!(record.email.as_deref(), Some("info@acme.com"));
    }

    #[test]
    fn plain_text_phone_is_matched() {
        let html = "<html><body><p>Call 555-123-4567 today</p></body></html>";
        let record = scraper().extract_from_html(html, PAGE_URL);
        assert_eq!(record.phone.as_deref(), Some("555-123-4567"));
    }

    #[test]
    fn plain_text_email_is_a_fallback_for_missing_mailto() {
        let html = "<html><body><p>Reach us at sales@acme.com any time.</p></body></html>";
        let record = scraper().extract_from_html(html, PAGE_URL);
        assert_eq!(record.email.as_deref(), Some("sales@acme.com"));
    }

    #[test]
    fn first_social_link_per_platform_wins() {
        let html = r#"<html><body>
            <a href="https://linkedin.com/acme">LinkedIn</a>
            <a href="https://linkedin.com/acme2">Other LinkedIn</a>
            <a href="https://www.twitter.com/acme">Twitter</a>
        </body></html>"#;
        let record = scraper().extract_from_html(html, PAGE_URL);
        assert_eq!(
            record.social_links.get("LinkedIn").map(String::as_str),
            Some("https://linkedin.com/acme")
        );
        assert_eq!(
            record.social_links.get("Twitter").map(String::as_str),
            Some("https://www.twitter.com/acme")
        );
        assert_eq!(record.social_links.len(), 2);
    }

    #[test]
    fn relative_contact_link_resolves_against_page_host() {
        let html = r#"<html><body><a href="/contact-us">Contact</a></body></html>"#;
        let record = scraper().extract_from_html(html, PAGE_URL);
        assert_eq!(record.contact_page.as_deref(), Some("https://acme.com/contact-us"));
    }

    #[test]
    fn help_path_counts_as_contact_page() {
        let html = r#"<html><body><a href="https://acme.com/help/faq">Help</a></body></html>"#;
        let record = scraper().extract_from_html(html, PAGE_URL);
        assert_eq!(record.contact_page.as_deref(), Some("https://acme.com/help/faq"));
    }

    #[test]
    fn title_and_description_are_trimmed() {
        let html = r#"<html><head>
            <title> Acme Robotics </title>
            <meta name="description" content=" Robots for everyone ">
        </head><body></body></html>"#;
        let record = scraper().extract_from_html(html, PAGE_URL);
        assert_eq!(record.title, "Acme Robotics");
        assert_eq!(record.description, "Robots for everyone");
    }

    #[test]
    fn empty_document_is_all_sentinel() {
        let record = scraper().extract_from_html("", PAGE_URL);
        assert_eq!(record, ContactRecord::not_found());
    }

    #[test]
    fn identical_html_yields_identical_records() {
        let html = r#"<html><head><title>Acme</title></head><body>
            <a href="mailto:info@acme.com">Email</a>
            <a href="https://facebook.com/acme">FB</a>
            <p>Call (555) 123-4567</p>
        </body></html>"#;
        let s = scraper();
        assert_eq!(
            s.extract_from_html(html, PAGE_URL),
            s.extract_from_html(html, PAGE_URL)
        );
    }

    #[test]
    fn scheme_is_prepended_when_missing() {
        assert_eq!(normalize_url("acme.com"), "https://acme.com");
        assert_eq!(normalize_url("http://acme.com"), "http://acme.com");
    }

    #[tokio::test]
    async fn unreachable_host_degrades_to_sentinel_record() {
        let record = scraper().extract("http://127.0.0.1:9").await;
        assert_eq!(record, ContactRecord::not_found());
    }
}
