use crate::core::endpoint::ApiEndpoint;
use crate::core::normalize::{json_kind, normalize_users};
use crate::core::{ConfigProvider, FetchOutcome, UserRecord, UserSource};
use crate::utils::error::{Result, WurError};
use reqwest::Client;
use std::time::Duration;

/// Reads `/wp-json/wp/v2/users/` from WordPress sites.
pub struct WpUserFetcher {
    client: Client,
    endpoint: ApiEndpoint,
}

impl WpUserFetcher {
    pub fn new(endpoint: ApiEndpoint, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn with_client(client: Client, endpoint: ApiEndpoint) -> Self {
        Self { client, endpoint }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(
            ApiEndpoint::new(config.scheme()),
            config.timeout_seconds().map(Duration::from_secs),
        )
    }

    /// Strict variant of [`UserSource::fetch`]: every failure is returned.
    pub async fn try_fetch(&self, domain: &str) -> Result<Vec<UserRecord>> {
        let url = self.endpoint.users_url(domain)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(WurError::HttpStatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let payload: serde_json::Value = serde_json::from_slice(&body)?;

        // 只接受陣列；WP 關閉 REST 時常回傳 {"code": ...} 物件
        match payload {
            serde_json::Value::Array(items) => Ok(normalize_users(domain, &items)),
            other => Err(WurError::MalformedResponseError {
                message: format!("expected a JSON array of users, got {}", json_kind(&other)),
            }),
        }
    }
}

#[async_trait::async_trait]
impl UserSource for WpUserFetcher {
    async fn fetch(&self, domain: &str) -> FetchOutcome {
        match self.try_fetch(domain).await {
            Ok(records) => {
                tracing::info!("{}: {} users", domain, records.len());
                FetchOutcome::success(records)
            }
            Err(e) => {
                tracing::warn!("Error fetching data from {}: {}", domain, e);
                FetchOutcome::failed(e.to_string())
            }
        }
    }
}
