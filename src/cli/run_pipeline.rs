// src/cli/run_pipeline.rs - One research-and-draft run for a single company
use tracing::info;

use crate::{
    config::ToneConfig,
    models::{CliApp, Result, SenderProfile},
    pitch::{PitchContext, PitchGenerator},
    resolver::canonical_base_url,
    search::{company_query, SearchProvider},
    web_scraper::ContactRecord,
};

pub struct PipelineOutcome {
    pub website_url: String,
    pub findings: ContactRecord,
    pub email_text: String,
}

impl CliApp {
    /// One full research pass for a company. All state is local to the
    /// call; nothing survives into the next run.
    pub async fn run_pipeline(
        &self,
        search: &dyn SearchProvider,
        generator: &PitchGenerator,
        company_name: &str,
        sender: &SenderProfile,
        tone: &ToneConfig,
    ) -> Result<PipelineOutcome> {
        println!("\nStep 1: Finding official website...");
        let hits = search.search(&company_query(company_name)).await?;
        info!("Search returned {} hits for '{}'", hits.len(), company_name);

        // No viable website is terminal for this run: nothing to scrape.
        let website_url = self
            .resolver
            .resolve(company_name, &hits)
            .ok_or_else(|| format!("Could not find a reliable website for '{}'", company_name))?;
        let website_url = canonical_base_url(&website_url).unwrap_or(website_url);
        println!("Found and cleaned URL: {}", website_url);

        println!("Step 2: Scraping page for context and contacts...");
        let findings = self.scraper.extract(&website_url).await;

        println!("Step 3: Drafting personalized email...");
        let context = PitchContext {
            company_name,
            website_title: &findings.title,
            website_description: &findings.description,
            sender_name: &sender.name,
            sender_title: &sender.title,
            tone_style: &tone.style,
        };
        let email_text = generator.draft_email(&context).await?;

        Ok(PipelineOutcome {
            website_url,
            findings,
            email_text,
        })
    }
}
