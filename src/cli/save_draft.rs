// src/cli/save_draft.rs - Export one draft plus its findings to the out dir
use serde_json::json;

use crate::{
    cli::PipelineOutcome,
    models::{CliApp, Result},
};

impl CliApp {
    pub async fn save_draft(&self, company_name: &str, outcome: &PipelineOutcome) -> Result<()> {
        tokio::fs::create_dir_all(&self.config.output.directory).await?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let slug = company_slug(company_name);

        let email_path = format!(
            "{}/{}_{}_email.txt",
            self.config.output.directory, slug, timestamp
        );
        tokio::fs::write(&email_path, &outcome.email_text).await?;

        let findings = json!({
            "company": company_name,
            "website_url": outcome.website_url,
            "findings": outcome.findings,
        });
        let findings_json = if self.config.output.pretty_json {
            serde_json::to_string_pretty(&findings)?
        } else {
            serde_json::to_string(&findings)?
        };
        let findings_path = format!(
            "{}/{}_{}_findings.json",
            self.config.output.directory, slug, timestamp
        );
        tokio::fs::write(&findings_path, findings_json).await?;

        println!("✅ Draft saved:");
        println!("  📄 Email: {}", email_path);
        println!("  🔎 Findings: {}", findings_path);

        Ok(())
    }
}

/// Filesystem-safe version of the company name.
fn company_slug(company_name: &str) -> String {
    let slug: String = company_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    slug.trim_matches('_').to_string()
}
