use std::env;

/// Application configuration loaded from environment variables.
///
/// The API key is the one credential: its absence switches search to the
/// unauthenticated HTML fallback and disables comment fetching entirely.
#[derive(Debug, Clone)]
pub struct Config {
    // YouTube Data API
    pub youtube_api_key: Option<String>,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables. The credential is
    /// optional; everything else has a default.
    pub fn from_env() -> Self {
        Self {
            youtube_api_key: env::var("YOUTUBE_API_KEY").ok().filter(|k| !k.is_empty()),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }

    /// Log which credentials are present without printing their values.
    pub fn log_redacted(&self) {
        tracing::info!(
            youtube_api_key = self.youtube_api_key.is_some(),
            "Config loaded"
        );
        if self.youtube_api_key.is_none() {
            tracing::warn!(
                "YOUTUBE_API_KEY not set: search falls back to HTML scraping and \
                 comment fetching is disabled"
            );
        }
    }
}
