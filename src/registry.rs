use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::HubConfig;
use crate::error::{DockhubError, Result};
use crate::hub::build_http_client;
use crate::reference::ImageReference;

const MANIFEST_V2_MEDIA_TYPE: &str = "application/vnd.docker.distribution.manifest.v2+json";
const REGISTRY_SERVICE: &str = "registry.docker.io";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ManifestConfig {
    #[serde(default)]
    pub digest: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ManifestLayer {
    #[serde(default)]
    pub digest: Option<String>,
    #[serde(default)]
    pub size: u64,
}

/// A v2 image manifest, reduced to the fields the reports consume.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImageManifest {
    #[serde(default)]
    pub config: Option<ManifestConfig>,
    #[serde(default)]
    pub layers: Vec<ManifestLayer>,
}

impl ImageManifest {
    pub fn total_size(&self) -> u64 {
        self.layers.iter().map(|layer| layer.size).sum()
    }

    pub fn config_digest(&self) -> &str {
        self.config
            .as_ref()
            .and_then(|config| config.digest.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImageLayer {
    pub digest: String,
    pub size: u64,
}

/// Layer breakdown for one `name:tag`, derived from its manifest.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImageDetail {
    pub name: String,
    pub tag: String,
    pub digest: String,
    pub layers: Vec<ImageLayer>,
    pub total_size: u64,
}

impl ImageDetail {
    pub fn from_manifest(reference: &ImageReference, manifest: &ImageManifest) -> Self {
        let layers: Vec<ImageLayer> = manifest
            .layers
            .iter()
            .map(|layer| ImageLayer {
                digest: layer.digest.clone().unwrap_or_default(),
                size: layer.size,
            })
            .collect();
        Self {
            name: reference.repository_path(),
            tag: reference.tag.clone(),
            digest: manifest.config_digest().to_string(),
            layers,
            total_size: manifest.total_size(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// Client for the Docker Registry v2 manifest API.
///
/// Performs an anonymous pull-scope token exchange per call; tokens are not
/// kept across invocations. Unlike the Hub search endpoints, a non-success
/// response here is a hard error.
#[derive(Clone)]
pub struct RegistryClient {
    client: reqwest::Client,
    config: HubConfig,
}

impl RegistryClient {
    pub fn new(config: HubConfig) -> Result<Self> {
        let client = build_http_client(&config)?;
        Ok(Self { client, config })
    }

    pub fn with_client(client: reqwest::Client, config: HubConfig) -> Self {
        Self { client, config }
    }

    async fn fetch_token(&self, repository: &str) -> Result<String> {
        let endpoint = format!(
            "{}/token?service={}&scope=repository:{}:pull",
            self.config.auth_base_url, REGISTRY_SERVICE, repository
        );
        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| DockhubError::Other(anyhow!("token request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DockhubError::Registry(format!(
                "failed to authenticate ({}): {}",
                status, body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| DockhubError::Serialization(format!("token response: {}", e)))?;
        Ok(token.token)
    }

    #[instrument(skip(self))]
    pub async fn manifest(&self, repository: &str, tag: &str) -> Result<ImageManifest> {
        let token = self.fetch_token(repository).await?;
        let endpoint = format!(
            "{}/v2/{}/manifests/{}",
            self.config.registry_base_url, repository, tag
        );
        let response = self
            .client
            .get(&endpoint)
            .header("Accept", MANIFEST_V2_MEDIA_TYPE)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| DockhubError::Other(anyhow!("manifest request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DockhubError::Registry(format!(
                "failed to get manifest for `{}:{}` ({}): {}",
                repository, tag, status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DockhubError::Serialization(format!("manifest response: {}", e)))
    }

    pub async fn image_detail(&self, reference: &ImageReference) -> Result<ImageDetail> {
        let manifest = self
            .manifest(&reference.repository_path(), &reference.tag)
            .await?;
        Ok(ImageDetail::from_manifest(reference, &manifest))
    }
}
