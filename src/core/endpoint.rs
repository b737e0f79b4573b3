use crate::utils::error::{Result, WurError};
use url::Url;

/// WordPress REST route listing the site's authors.
pub const USERS_PATH: &str = "/wp-json/wp/v2/users/";

/// Turns a bare domain from the input list into the users endpoint.
#[derive(Debug, Clone)]
pub struct ApiEndpoint {
    scheme: String,
}

impl ApiEndpoint {
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
        }
    }

    pub fn https() -> Self {
        Self::new("https")
    }

    /// Textual endpoint, used for links in the HTML report.
    pub fn link_for(&self, domain: &str) -> String {
        format!("{}://{}{}", self.scheme, domain, USERS_PATH)
    }

    pub fn users_url(&self, domain: &str) -> Result<Url> {
        let invalid = |reason: String| WurError::InvalidTargetError {
            domain: domain.to_string(),
            reason,
        };

        if domain.trim().is_empty() {
            return Err(invalid("domain is empty".to_string()));
        }
        if domain.contains("://") {
            return Err(invalid(
                "expected a bare host, remove the scheme prefix".to_string(),
            ));
        }

        let url = Url::parse(&self.link_for(domain)).map_err(|e| invalid(e.to_string()))?;

        // 網域裡夾帶 ? 或 # 會讓 REST 路徑被截斷
        if url.query().is_some() || url.fragment().is_some() || url.host_str().is_none() {
            return Err(invalid("domain must not contain a query or fragment".to_string()));
        }

        Ok(url)
    }
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self::https()
    }
}
