use crate::{cli::PipelineOutcome, models::CliApp, web_scraper::NOT_FOUND};

impl CliApp {
    pub fn display_findings(&self, company_name: &str, outcome: &PipelineOutcome) {
        println!("\n📬 Email Draft for {}", company_name);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("{}", outcome.email_text.trim());

        let findings = &outcome.findings;

        println!("\n🔎 Agent Findings");
        println!("━━━━━━━━━━━━━━━━━━━━━");
        println!("🌐 Website: {}", outcome.website_url);
        println!("🏷️  Title: {}", findings.title);
        println!("📝 Description: {}", findings.description);
        println!("📧 Email: {}", findings.email.as_deref().unwrap_or(NOT_FOUND));
        println!("📞 Phone: {}", findings.phone.as_deref().unwrap_or(NOT_FOUND));
        println!(
            "📇 Contact page: {}",
            findings.contact_page.as_deref().unwrap_or(NOT_FOUND)
        );

        if findings.social_links.is_empty() {
            println!("🔗 Social media: {}", NOT_FOUND);
        } else {
            println!("🔗 Social media:");
            for (platform, url) in &findings.social_links {
                println!("  • {}: {}", platform, url);
            }
        }
    }
}
