use anyhow::{Context, Result};

/// Port used when neither the CLI nor the environment names one.
pub const DEFAULT_PORT: u16 = 2022;

/// Model used for availability conversion unless overridden.
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Runtime configuration, read once from the process environment at
/// startup. There is no other persisted local state.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub supabase_url: String,
    pub supabase_key: String,
    pub gemini_key: String,
    pub gemini_model: String,
    /// Identity key callers must present, if configured.
    pub service_api_key: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a port number, got {value:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            supabase_url: std::env::var("SUPABASE_URL").context("SUPABASE_URL is not set")?,
            supabase_key: std::env::var("SUPABASE_KEY").context("SUPABASE_KEY is not set")?,
            gemini_key: std::env::var("GEMINI_KEY").context("GEMINI_KEY is not set")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            service_api_key: std::env::var("DAIN_API_KEY").ok(),
        })
    }
}
