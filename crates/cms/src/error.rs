/// Errors from the CMS REST layer.
///
/// These never reach the page API: [`crate::repository::ContentRepo`]
/// logs them and degrades to empty results.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The CMS returned a non-2xx status code.
    #[error("CMS API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body was not the expected envelope.
    #[error("Failed to decode CMS response: {0}")]
    Decode(#[from] serde_json::Error),
}
