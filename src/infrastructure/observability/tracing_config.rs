/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub default_level: String,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            default_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}

impl TracingConfig {
    /// Filter directive used when `RUST_LOG` is not set: the configured
    /// default level globally, with this crate and tower-http at debug.
    pub fn fallback_filter(&self) -> String {
        format!(
            "{},orato=debug,tower_http=debug",
            self.default_level
        )
    }
}
