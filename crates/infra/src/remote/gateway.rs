//! REST implementation of the user gateway port

use async_trait::async_trait;
use reqwest::Method;
use roster_core::UserGateway;
use roster_domain::config::RemoteConfig;
use roster_domain::{Result, RosterError, UserDraft, UserRecord};
use tracing::{debug, instrument};

use super::types::{CreatedUser, RemoteUser};
use crate::http::HttpClient;

/// Gateway to the remote users collection.
///
/// Paths follow the collection layout the consuming UI was built against:
/// `GET/POST {base}/users` and `PUT/DELETE {base}/users/{id}`.
pub struct RestUserGateway {
    http: HttpClient,
    base_url: String,
}

impl RestUserGateway {
    /// Create a gateway from remote settings.
    ///
    /// # Errors
    /// Returns `RosterError::Config` if the base URL is malformed or the
    /// HTTP client cannot be built.
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)
            .map_err(|err| RosterError::Config(format!("invalid base URL: {err}")))?;

        let mut builder = HttpClient::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(seconds));
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a gateway over an already-configured HTTP client.
    pub fn with_http_client(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { http, base_url: base_url.trim_end_matches('/').to_string() }
    }

    fn collection_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn resource_url(&self, id: u64) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    /// Turn a non-2xx response into an error, keeping any body text as the
    /// diagnostic message.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        let message = if message.is_empty() {
            status.canonical_reason().unwrap_or("unknown status").to_string()
        } else {
            message
        };
        Err(RosterError::RemoteStatus { status: status.as_u16(), message })
    }
}

#[async_trait]
impl UserGateway for RestUserGateway {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<UserRecord>> {
        let url = self.collection_url();
        debug!(%url, "listing remote users");

        let response = self.http.send(self.http.request(Method::GET, &url)).await?;
        let response = Self::check_status(response).await?;

        let remote: Vec<RemoteUser> = response
            .json()
            .await
            .map_err(|err| RosterError::Decode(format!("failed to parse user listing: {err}")))?;

        Ok(remote.into_iter().map(UserRecord::from).collect())
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: &UserDraft) -> Result<Option<u64>> {
        let url = self.collection_url();
        debug!(%url, "creating remote user");

        let response =
            self.http.send(self.http.request(Method::POST, &url).json(draft)).await?;
        let response = Self::check_status(response).await?;

        let created: CreatedUser = response.json().await.map_err(|err| {
            RosterError::Decode(format!("failed to parse create response: {err}"))
        })?;

        Ok(created.id)
    }

    #[instrument(skip(self, record), fields(user_id = record.id))]
    async fn update(&self, record: &UserRecord) -> Result<()> {
        let url = self.resource_url(record.id);
        debug!(%url, "updating remote user");

        let response =
            self.http.send(self.http.request(Method::PUT, &url).json(record)).await?;
        Self::check_status(response).await?;
        // Response body is ignored; the caller refreshes to observe state.
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: u64) -> Result<()> {
        let url = self.resource_url(id);
        debug!(%url, "deleting remote user");

        let response = self.http.send(self.http.request(Method::DELETE, &url)).await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
