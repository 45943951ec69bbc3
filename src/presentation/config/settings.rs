use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub recognizer: RecognizerSettings,
    pub sentiment: SentimentSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognizerSettings {
    pub provider: RecognizerProviderSetting,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognizerProviderSetting {
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentSettings {
    pub provider: SentimentProviderSetting,
    pub url: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentProviderSetting {
    Remote,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Assembles settings from the environment. Everything downstream takes
    /// these values explicitly; nothing else reads env vars after startup.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            recognizer: RecognizerSettings {
                provider: match std::env::var("RECOGNIZER_PROVIDER").as_deref() {
                    Ok("mock") => RecognizerProviderSetting::Mock,
                    _ => RecognizerProviderSetting::OpenAi,
                },
                api_key: std::env::var("OPENAI_API_KEY").ok(),
                base_url: std::env::var("RECOGNIZER_BASE_URL").ok(),
                model: std::env::var("RECOGNIZER_MODEL")
                    .unwrap_or_else(|_| "whisper-1".to_string()),
                timeout_secs: std::env::var("RECOGNIZER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            },
            sentiment: SentimentSettings {
                provider: match std::env::var("SENTIMENT_PROVIDER").as_deref() {
                    Ok("remote") => SentimentProviderSetting::Remote,
                    _ => SentimentProviderSetting::Mock,
                },
                url: std::env::var("SENTIMENT_URL").ok(),
                timeout_secs: std::env::var("SENTIMENT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            },
            logging: LoggingSettings {
                level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                enable_json: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        }
    }
}
