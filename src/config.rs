use serde_derive::{Deserialize, Serialize};

/// Email addresses must contain this marker to count as institutional.
pub const DEFAULT_EMAIL_DOMAIN: &str = "sece.ac.in";

/// Path appended to the base URL for the registration call.
pub const DEFAULT_REGISTER_PATH: &str = "/register";

/// Client-side configuration for the registration workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormConfig {
    /// Base URL of the authentication service, e.g. `https://auth.example.edu`.
    pub base_url: String,
    pub register_path: String,
    /// Substring an email must contain to pass the domain rule.
    pub email_domain: String,
}

impl FormConfig {
    /// Config pointing at `base_url` with the default path and domain marker.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            register_path: DEFAULT_REGISTER_PATH.to_string(),
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}
