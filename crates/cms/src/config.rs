use std::time::Duration;

/// Connection settings for the CMS REST API.
///
/// Built once at startup and handed to [`crate::client::CmsClient`]; the
/// query layer never reads the environment itself.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// CMS origin, e.g. `http://localhost:3000` (no trailing slash).
    pub server_url: String,
    /// Origin used to absolutize root-relative media URLs.
    pub media_base_url: Option<String>,
    /// Per-request timeout for CMS calls.
    pub timeout: Duration,
    /// How long published content may be reused.
    pub revalidate: Duration,
    /// Relationship expansion depth for detail and listing queries.
    pub depth: u8,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3000".into(),
            media_base_url: Some("http://localhost:3000".into()),
            timeout: Duration::from_secs(10),
            revalidate: Duration::from_secs(60),
            depth: 2,
        }
    }
}

impl CmsConfig {
    /// Build a config pointing at `server_url`, other fields at defaults.
    pub fn for_server(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self {
            media_base_url: Some(server_url.clone()),
            server_url,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                    |
    /// |-----------------------------|----------------------------|
    /// | `CMS_SERVER_URL`            | `PAYLOAD_PUBLIC_SERVER_URL`, then `http://localhost:3000` |
    /// | `CMS_MEDIA_BASE_URL`        | the server URL             |
    /// | `CMS_TIMEOUT_SECS`          | `10`                       |
    /// | `CMS_REVALIDATE_SECS`       | `60`                       |
    /// | `CMS_QUERY_DEPTH`           | `2`                        |
    pub fn from_env() -> Self {
        let server_url = std::env::var("CMS_SERVER_URL")
            .or_else(|_| std::env::var("PAYLOAD_PUBLIC_SERVER_URL"))
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let media_base_url = std::env::var("CMS_MEDIA_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| server_url.clone());

        let timeout_secs: u64 = std::env::var("CMS_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("CMS_TIMEOUT_SECS must be a valid u64");

        let revalidate_secs: u64 = std::env::var("CMS_REVALIDATE_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("CMS_REVALIDATE_SECS must be a valid u64");

        let depth: u8 = std::env::var("CMS_QUERY_DEPTH")
            .unwrap_or_else(|_| "2".into())
            .parse()
            .expect("CMS_QUERY_DEPTH must be a valid u8");

        Self {
            server_url,
            media_base_url: Some(media_base_url),
            timeout: Duration::from_secs(timeout_secs),
            revalidate: Duration::from_secs(revalidate_secs),
            depth,
        }
    }
}
