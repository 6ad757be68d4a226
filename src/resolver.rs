// src/resolver.rs - Pick the most likely official website from search hits
use tracing::debug;
use url::Url;

use crate::models::SearchHit;

/// Non-corporate domains (news, directories, aggregators) that search
/// providers love to rank above the actual company site. Social media is
/// handled by the scraper, so it is not listed here.
const NON_CORPORATE_BLACKLIST: &[&str] = &[
    "wikipedia",
    "crunchbase",
    "bloomberg",
    "reuters",
    "github",
    "zoominfo",
    "forbes",
    "techcrunch",
    "medium",
    "news",
    "jobs",
    "careers",
    "owler",
    "apollo.io",
];

/// Legal-entity suffixes stripped from company names before matching.
/// Longest first so "corporation" never degrades to "oration".
const LEGAL_SUFFIXES: &[&str] = &["corporation", "corp", "gmbh", "inc", "llc", "ltd"];

#[derive(Debug)]
struct ScoredCandidate {
    url: String,
    score: i32,
}

pub struct WebsiteResolver {
    blacklist: &'static [&'static str],
}

impl WebsiteResolver {
    pub fn new() -> Self {
        Self {
            blacklist: NON_CORPORATE_BLACKLIST,
        }
    }

    /// Scores every hit and returns the highest-scoring URL, or `None` when
    /// the hit list is empty or nothing parses. Ties keep the first hit seen;
    /// a later candidate must score strictly higher to replace the leader.
    pub fn resolve(&self, company_name: &str, hits: &[SearchHit]) -> Option<String> {
        let key = comparison_key(company_name);
        let mut best: Option<ScoredCandidate> = None;

        for hit in hits {
            // Malformed URLs are skipped, never fatal.
            let domain = match registrable_domain(&hit.url) {
                Some(d) => d,
                None => continue,
            };

            let mut score = 0i32;

            if self.blacklist.iter().any(|token| domain.contains(token)) {
                score -= 100;
            }
            // Dominant signal: official sites almost always embed the brand
            // in the domain.
            if domain.contains(&key) {
                score += 100;
            }
            // Small tie-breaker bonus.
            if hit.title.to_lowercase().contains(&key) {
                score += 10;
            }

            debug!("Scored {} ({}): {}", hit.url, domain, score);

            match &best {
                Some(leader) if score <= leader.score => {}
                _ => {
                    best = Some(ScoredCandidate {
                        url: hit.url.clone(),
                        score,
                    })
                }
            }
        }

        best.map(|candidate| candidate.url)
    }
}

/// Normalizes a company name into the key used for substring containment:
/// lowercase, legal suffixes removed wherever they occur, whitespace and
/// `.,-` stripped. "Acme, Inc." becomes "acme". Never used for equality.
pub fn comparison_key(company_name: &str) -> String {
    let mut key = company_name.to_lowercase();
    for suffix in LEGAL_SUFFIXES {
        key = key.replace(suffix, "");
    }
    key.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '.' | ',' | '-'))
        .collect()
}

/// Host with any leading `www.` removed, lowercased. `None` for URLs that do
/// not parse or have no host.
fn registrable_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    Some(host.trim_start_matches("www.").to_string())
}

/// Reduces a resolved URL to `scheme://host` so the scraper always lands on
/// the homepage rather than whatever deep link the search provider returned.
pub fn canonical_base_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(format!("{}://{}", parsed.scheme(), host))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(url: &str, title: &str) -> SearchHit {
        SearchHit {
            url: url.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn comparison_key_strips_suffixes_and_punctuation() {
        assert_eq!(comparison_key("Acme, Inc."), "acme");
        assert_eq!(comparison_key("Globex Corporation"), "globex");
        assert_eq!(comparison_key("Initech GmbH"), "initech");
        assert_eq!(comparison_key("Foo-Bar Ltd."), "foobar");
    }

    #[test]
    fn prefers_brand_domain_over_blacklisted_hit() {
        let resolver = WebsiteResolver::new();
        let hits = vec![
            hit("https://wikipedia.org/Acme", "Acme"),
            hit("https://acme.com", "Acme Corp"),
        ];
        // 100 + 10 beats -100 + 10
        assert_eq!(
            resolver.resolve("Acme Inc", &hits),
            Some("https://acme.com".to_string())
        );
    }

    #[test]
    fn empty_hit_list_resolves_to_none() {
        let resolver = WebsiteResolver::new();
        assert_eq!(resolver.resolve("Acme", &[]), None);
    }

    #[test]
    fn malformed_urls_are_skipped() {
        let resolver = WebsiteResolver::new();
        let hits = vec![
            hit("not a url at all", "Acme"),
            hit("https://acme.com", "Acme"),
        ];
        assert_eq!(
            resolver.resolve("Acme", &hits),
            Some("https://acme.com".to_string())
        );
    }

    #[test]
    fn all_malformed_resolves_to_none() {
        let resolver = WebsiteResolver::new();
        let hits = vec![hit("%%%", "Acme"), hit("", "Acme")];
        assert_eq!(resolver.resolve("Acme", &hits), None);
    }

    #[test]
    fn all_blacklisted_still_returns_the_best_candidate() {
        let resolver = WebsiteResolver::new();
        let hits = vec![
            hit("https://forbes.com/companies/acme", "Forbes"),
            hit("https://en.wikipedia.org/wiki/Acme", "Acme - Wikipedia"),
        ];
        // With no clean candidate the least-bad hit wins: the Wikipedia
        // title carries the +10 bonus.
        assert_eq!(
            resolver.resolve("Acme", &hits),
            Some("https://en.wikipedia.org/wiki/Acme".to_string())
        );
    }

    #[test]
    fn first_seen_wins_on_tied_scores() {
        let resolver = WebsiteResolver::new();
        let hits = vec![
            hit("https://acme.com", "Acme"),
            hit("https://acme.io", "Acme"),
        ];
        assert_eq!(
            resolver.resolve("Acme", &hits),
            Some("https://acme.com".to_string())
        );
    }

    #[test]
    fn blacklisted_hit_never_beats_clean_candidate() {
        let resolver = WebsiteResolver::new();
        let hits = vec![
            hit("https://www.crunchbase.com/organization/acme", "Acme profile"),
            hit("https://somewhere-else.com", "Unrelated"),
        ];
        // Neither domain contains the key, but the directory hit carries the
        // blacklist penalty and must lose.
        assert_eq!(
            resolver.resolve("Acme", &hits),
            Some("https://somewhere-else.com".to_string())
        );
    }

    #[test]
    fn title_bonus_breaks_domain_ties() {
        let resolver = WebsiteResolver::new();
        let hits = vec![
            hit("https://example.org", "Some directory"),
            hit("https://example.net", "Acme official homepage"),
        ];
        assert_eq!(
            resolver.resolve("Acme", &hits),
            Some("https://example.net".to_string())
        );
    }

    #[test]
    fn www_prefix_does_not_hide_the_brand() {
        let resolver = WebsiteResolver::new();
        let hits = vec![hit("https://www.acme.com/about", "About us")];
        assert_eq!(
            resolver.resolve("Acme, Inc.", &hits),
            Some("https://www.acme.com/about".to_string())
        );
    }

    #[test]
    fn canonical_base_url_drops_path_and_query() {
        assert_eq!(
            canonical_base_url("https://acme.com/contact?ref=search"),
            Some("https://acme.com".to_string())
        );
        assert_eq!(canonical_base_url("not a url"), None);
    }
}
