use foliomate_cms::config::CmsConfig;
use foliomate_core::view::DisplayPolicy;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Public storefront origin, used for preview links.
    pub frontend_url: String,
    /// Maximum templates listed on the home page (default: `100`).
    pub home_template_limit: u32,
    /// Maximum categories in the home page filter (default: `100`).
    pub home_category_limit: u32,
    /// Truncate card descriptions to this many characters (default: unset).
    pub card_description_max_chars: Option<usize>,
    /// CMS connection settings.
    pub cms: CmsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                    |
    /// |------------------------------|----------------------------|
    /// | `HOST`                       | `0.0.0.0`                  |
    /// | `PORT`                       | `3001`                     |
    /// | `CORS_ORIGINS`               | `http://localhost:3001`    |
    /// | `REQUEST_TIMEOUT_SECS`       | `30`                       |
    /// | `FRONTEND_URL`               | `http://localhost:3001`    |
    /// | `HOME_TEMPLATE_LIMIT`        | `100`                      |
    /// | `HOME_CATEGORY_LIMIT`        | `100`                      |
    /// | `CARD_DESCRIPTION_MAX_CHARS` | unset                      |
    ///
    /// CMS settings are read by [`CmsConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let frontend_url = std::env::var("FRONTEND_URL")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .trim_end_matches('/')
            .to_string();

        let home_template_limit: u32 = std::env::var("HOME_TEMPLATE_LIMIT")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .expect("HOME_TEMPLATE_LIMIT must be a valid u32");

        let home_category_limit: u32 = std::env::var("HOME_CATEGORY_LIMIT")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .expect("HOME_CATEGORY_LIMIT must be a valid u32");

        let card_description_max_chars: Option<usize> = std::env::var("CARD_DESCRIPTION_MAX_CHARS")
            .ok()
            .map(|v| {
                v.parse()
                    .expect("CARD_DESCRIPTION_MAX_CHARS must be a valid usize")
            });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            frontend_url,
            home_template_limit,
            home_category_limit,
            card_description_max_chars,
            cms: CmsConfig::from_env(),
        }
    }

    /// Display policy for the view model assembler.
    pub fn display_policy(&self) -> DisplayPolicy {
        DisplayPolicy {
            card_description_max_chars: self.card_description_max_chars,
            media_base_url: self.cms.media_base_url.clone(),
            ..DisplayPolicy::default()
        }
    }
}
