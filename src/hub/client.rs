use anyhow::anyhow;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::config::HubConfig;
use crate::error::{DockhubError, Result};
use crate::hub::types::{ImageSummary, Page, RepositoryDetail, TagSummary, UserSummary};
use crate::reference::ImageReference;

/// Builds the shared HTTP client with pooling and bounded timeouts.
pub fn build_http_client(config: &HubConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(90))
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| DockhubError::Other(anyhow!("failed to build HTTP client: {}", e)))
}

/// Read-only client for the Docker Hub v2 API.
///
/// A non-success status is always surfaced as `DockhubError::HubStatus`;
/// "no results" is an empty list only on a successful response.
#[derive(Clone)]
pub struct HubClient {
    client: reqwest::Client,
    config: HubConfig,
}

impl HubClient {
    pub fn new(config: HubConfig) -> Result<Self> {
        let client = build_http_client(&config)?;
        Ok(Self { client, config })
    }

    pub fn with_client(client: reqwest::Client, config: HubConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    #[instrument(skip(self))]
    pub async fn search_repositories(&self, query: &str, limit: u32) -> Result<Vec<ImageSummary>> {
        let endpoint = format!("{}/search/repositories", self.config.hub_base_url);
        let page: Page<ImageSummary> = self
            .get_json(&endpoint, &[("query", query), ("page_size", &limit.to_string())])
            .await?;
        Ok(page.results)
    }

    #[instrument(skip(self, reference), fields(repository = %reference.repository_path()))]
    pub async fn list_tags(
        &self,
        reference: &ImageReference,
        limit: u32,
    ) -> Result<Vec<TagSummary>> {
        let endpoint = format!(
            "{}/repositories/{}/{}/tags",
            self.config.hub_base_url, reference.namespace, reference.repository
        );
        let page: Page<TagSummary> = self
            .get_json(&endpoint, &[("page_size", &limit.to_string())])
            .await?;
        Ok(page.results)
    }

    #[instrument(skip(self))]
    pub async fn search_users(&self, query: &str, limit: u32) -> Result<Vec<UserSummary>> {
        let endpoint = format!("{}/search/users", self.config.hub_base_url);
        let page: Page<UserSummary> = self
            .get_json(&endpoint, &[("query", query), ("page_size", &limit.to_string())])
            .await?;
        Ok(page.results)
    }

    #[instrument(skip(self, reference), fields(repository = %reference.repository_path()))]
    pub async fn repository_detail(&self, reference: &ImageReference) -> Result<RepositoryDetail> {
        let endpoint = format!(
            "{}/repositories/{}/{}",
            self.config.hub_base_url, reference.namespace, reference.repository
        );
        self.get_json(&endpoint, &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let mut request = self.client.get(endpoint);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request
            .send()
            .await
            .map_err(|e| DockhubError::Other(anyhow!("hub request `{}` failed: {}", endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DockhubError::HubStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DockhubError::Serialization(format!("`{}`: {}", endpoint, e)))
    }
}
