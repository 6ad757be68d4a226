// src/pitch.rs - Cold-email drafting via the Gemini generateContent API
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::config::PitchConfig;
use crate::models::Result;

/// Everything the prompt needs for one draft.
#[derive(Debug)]
pub struct PitchContext<'a> {
    pub company_name: &'a str,
    pub website_title: &'a str,
    pub website_description: &'a str,
    pub sender_name: &'a str,
    pub sender_title: &'a str,
    pub tone_style: &'a str,
}

pub struct PitchGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl PitchGenerator {
    pub fn new(api_key: String, config: &PitchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    pub async fn draft_email(&self, context: &PitchContext<'_>) -> Result<String> {
        let prompt = build_prompt(context);
        debug!("Prompt is {} chars for {}", prompt.len(), context.company_name);

        let endpoint = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {"temperature": self.temperature},
        });

        let response = self.client.post(&endpoint).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(format!("Generation API error: {}", response.status()).into());
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or("Generation API returned no text")?;

        Ok(text)
    }
}

fn build_prompt(context: &PitchContext<'_>) -> String {
    format!(
        r#"**TASK:** Generate a complete, ready-to-send cold email pitching an invented B2B AI automation service.

**CORE INSTRUCTIONS:**
1. **HYPER-PERSONALIZE THE OPENING:** Your first sentence MUST be a specific, compelling observation based on the "Website Title" and "Website Description" provided below. Do NOT use generic openings like "I was looking at your website." Instead, connect their stated mission to a problem your invented service can solve.
2. **INVENT A RELEVANT AUTOMATION SERVICE:** Create a plausible AI service that solves a problem relevant to the target company. Do NOT use generic placeholders.
3. **WRITE IN PROSE ONLY (NO BULLET POINTS):** The entire email body must be in natural paragraphs. Do NOT use lists. Weave the benefits smoothly into the text.
4. **SIGN-OFF CORRECTLY:** Use the provided sender name and title.
5. **FORMAT:** Start with a compelling subject line: 'Subject: Your Subject Here'.

**CONTEXT FOR PERSONALIZATION:**
- **Website Title:** {website_title}
- **Website Description:** {website_description}

**EMAIL DETAILS:**
- **Target Company:** {company_name}
- **Sender Name:** {sender_name}
- **Sender Title/Company:** {sender_title}
- **Desired Tone:** {tone_style}

Execute the task now."#,
        website_title = context.website_title,
        website_description = context.website_description,
        company_name = context.company_name,
        sender_name = context.sender_name,
        sender_title = context.sender_title,
        tone_style = context.tone_style,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_all_context_fields() {
        let context = PitchContext {
            company_name: "Acme",
            website_title: "Acme Robotics",
            website_description: "Robots for everyone",
            sender_name: "Jane Doe",
            sender_title: "Founder, Innovate Inc.",
            tone_style: "a friendly, approachable tone",
        };
        let prompt = build_prompt(&context);
        assert!(prompt.contains("Acme Robotics"));
        assert!(prompt.contains("Robots for everyone"));
        assert!(prompt.contains("Jane Doe"));
        assert!(prompt.contains("Founder, Innovate Inc."));
        assert!(prompt.contains("a friendly, approachable tone"));
    }

    #[test]
    fn response_text_parses_from_candidates() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Subject: Hello"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "Subject: Hello");
    }
}
