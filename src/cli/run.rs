use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};
use tracing::error;

use crate::{
    config::{Config, ToneConfig},
    models::{CliApp, Result, SenderProfile},
    pitch::PitchGenerator,
    resolver::WebsiteResolver,
    search::TavilySearch,
    web_scraper::ContactScraper,
};

impl CliApp {
    pub fn new(config: Config) -> Result<Self> {
        let scraper = ContactScraper::new(&config.scraping)?;
        Ok(Self {
            config,
            resolver: WebsiteResolver::new(),
            scraper,
        })
    }

    pub async fn run(&self) -> Result<()> {
        println!("\n🚀 Welcome to Sales Agent!");
        println!("═══════════════════════════════════════");

        let tavily_key = read_secret("TAVILY_API_KEY", "Tavily API key")?;
        let gemini_key = read_secret("GEMINI_API_KEY", "Gemini API key")?;

        let search = TavilySearch::new(tavily_key, &self.config.search)?;
        let generator = PitchGenerator::new(gemini_key, &self.config.pitch)?;

        let sender = self.prompt_sender_profile()?;

        loop {
            let company_name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Company name to research")
                .interact_text()?;

            let tone = self.prompt_tone()?;

            match self
                .run_pipeline(&search, &generator, &company_name, &sender, &tone)
                .await
            {
                Ok(outcome) => {
                    self.display_findings(&company_name, &outcome);

                    if Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt("Save this draft?")
                        .default(true)
                        .interact()?
                    {
                        if let Err(e) = self.save_draft(&company_name, &outcome).await {
                            error!("Failed to save draft: {}", e);
                        }
                    }
                }
                // Degraded runs are reported and the session continues.
                Err(e) => error!("Workflow failed for '{}': {}", company_name, e),
            }

            if !Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Research another company?")
                .default(true)
                .interact()?
            {
                break;
            }
        }

        println!("\n👋 Thanks for using Sales Agent!");
        Ok(())
    }

    fn prompt_sender_profile(&self) -> Result<SenderProfile> {
        println!("\n✍️  Your Information");
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Your name (e.g., Jane Doe)")
            .interact_text()?;
        let title: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Your company/title (e.g., Founder, Innovate Inc.)")
            .interact_text()?;
        Ok(SenderProfile { name, title })
    }

    fn prompt_tone(&self) -> Result<ToneConfig> {
        let names: Vec<&str> = self
            .config
            .pitch
            .tones
            .iter()
            .map(|t| t.name.as_str())
            .collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select pitch tone")
            .default(0)
            .items(&names)
            .interact()?;

        Ok(self.config.pitch.tones[selection].clone())
    }
}

/// Reads a credential from the environment, falling back to a hidden prompt.
fn read_secret(var: &str, prompt: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => {
            let value = Password::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .interact()?;
            Ok(value)
        }
    }
}
