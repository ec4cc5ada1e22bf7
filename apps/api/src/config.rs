use anyhow::{bail, Context, Result};

const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "https://biz-sherpa-assignment.vercel.app",
];

/// Where transcripts and icebreakers are persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreConfig {
    /// Direct SQL against the hosted Postgres instance.
    Postgres { database_url: String },
    /// The hosted project's REST endpoint (PostgREST), keyed by the anon key.
    Rest { project_url: String, api_key: String },
}

impl StoreConfig {
    pub fn backend_name(&self) -> &'static str {
        match self {
            StoreConfig::Postgres { .. } => "postgres",
            StoreConfig::Rest { .. } => "rest",
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub openai_api_key: String,
    pub openai_api_base: String,
    pub cors_allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests never touch
    /// the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let store = match lookup("DATABASE_URL") {
            Some(database_url) => StoreConfig::Postgres { database_url },
            None => match (lookup("SUPABASE_URL"), lookup("SUPABASE_ANON_KEY")) {
                (Some(project_url), Some(api_key)) => StoreConfig::Rest {
                    project_url: project_url.trim_end_matches('/').to_string(),
                    api_key,
                },
                _ => bail!(
                    "No record store configured: set DATABASE_URL, or both SUPABASE_URL and SUPABASE_ANON_KEY"
                ),
            },
        };

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Ok(Config {
            store,
            openai_api_key: require("OPENAI_API_KEY")?,
            openai_api_base: lookup("OPENAI_API_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string()),
            cors_allowed_origins,
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
