use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scraping: ScrapingConfig,
    pub search: SearchConfig,
    pub pitch: PitchConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapingConfig {
    pub page_timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub api_timeout_seconds: u64,
    pub max_results: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PitchConfig {
    pub model: String,
    pub temperature: f32,
    pub api_timeout_seconds: u64,
    pub tones: Vec<ToneConfig>,
}

/// A selectable pitch tone: `name` is shown in the menu, `style` is the
/// phrase handed to the prompt.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToneConfig {
    pub name: String,
    pub style: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraping: ScrapingConfig {
                page_timeout_seconds: 100,
                user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                             (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                    .to_string(),
            },
            search: SearchConfig {
                api_timeout_seconds: 30,
                max_results: 5,
            },
            pitch: PitchConfig {
                model: "gemini-2.0-flash".to_string(),
                temperature: 0.7,
                api_timeout_seconds: 60,
                tones: vec![
                    ToneConfig {
                        name: "Formal".to_string(),
                        style: "a professional and respectful tone".to_string(),
                    },
                    ToneConfig {
                        name: "Casual".to_string(),
                        style: "a friendly, approachable tone".to_string(),
                    },
                    ToneConfig {
                        name: "Direct & Punchy".to_string(),
                        style: "a direct, to-the-point tone with a sense of urgency".to_string(),
                    },
                    ToneConfig {
                        name: "Follow-up".to_string(),
                        style: "a gentle, concise follow-up tone".to_string(),
                    },
                ],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            output: OutputConfig {
                directory: "out".to_string(),
                pretty_json: true,
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
