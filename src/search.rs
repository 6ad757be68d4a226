// src/search.rs - Search provider collaborator behind a trait
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::SearchConfig;
use crate::models::{Result, SearchHit};

const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>>;
}

/// Query shape used for website discovery.
pub fn company_query(company_name: &str) -> String {
    format!("official website homepage for {}", company_name)
}

pub struct TavilySearch {
    client: reqwest::Client,
    api_key: String,
    max_results: usize,
}

#[derive(Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

#[derive(Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

impl TavilySearch {
    pub fn new(api_key: String, config: &SearchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            api_key,
            max_results: config.max_results,
        })
    }
}

#[async_trait]
impl SearchProvider for TavilySearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let request = TavilyRequest {
            api_key: &self.api_key,
            query,
            max_results: self.max_results,
        };

        let response = self.client.post(TAVILY_ENDPOINT).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(format!("Search API error: {}", response.status()).into());
        }

        let body: TavilyResponse = response.json().await?;
        debug!("Search returned {} hits for {:?}", body.results.len(), query);
        Ok(body.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_query_embeds_the_name() {
        assert_eq!(
            company_query("Acme Inc"),
            "official website homepage for Acme Inc"
        );
    }

    #[test]
    fn hits_deserialize_with_missing_titles() {
        let json = r#"{"results": [{"url": "https://acme.com"}, {"url": "https://acme.io", "title": "Acme"}]}"#;
        let body: TavilyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.results.len(), 2);
        assert_eq!(body.results[0].title, "");
        assert_eq!(body.results[1].title, "Acme");
    }
}
