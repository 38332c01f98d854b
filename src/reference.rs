use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DockhubError, Result};

pub const DEFAULT_NAMESPACE: &str = "library";
pub const DEFAULT_TAG: &str = "latest";

/// A parsed `(namespace, repository, tag)` triple identifying an image.
///
/// Bare names resolve to the `library` namespace, matching how Docker Hub
/// addresses official images.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageReference {
    pub namespace: String,
    pub repository: String,
    pub tag: String,
}

impl ImageReference {
    pub fn new(
        namespace: impl Into<String>,
        repository: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            repository: repository.into(),
            tag: tag.into(),
        }
    }

    /// Parses a bare (`nginx`) or slash-qualified (`user/repo`) image name.
    /// Only the first `/` separates namespace from repository.
    pub fn from_name(name: &str, tag: &str) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DockhubError::InvalidReference(name.to_string()));
        }
        let (namespace, repository) = match trimmed.split_once('/') {
            Some((namespace, repository)) => (namespace, repository),
            None => (DEFAULT_NAMESPACE, trimmed),
        };
        if namespace.is_empty() || repository.is_empty() {
            return Err(DockhubError::InvalidReference(name.to_string()));
        }
        Ok(Self::new(namespace, repository, normalize_tag(tag)))
    }

    /// Parses a Docker Hub web URL in either known layout:
    /// `https://hub.docker.com/repository/docker/{namespace}/{repo}/...` or
    /// `https://hub.docker.com/r/{namespace}/{repo}`.
    pub fn from_url(url: &str, tag: &str) -> Result<Self> {
        if !url.contains("docker.com") {
            return Err(DockhubError::InvalidReference(url.to_string()));
        }

        let marker = if url.contains("repository/docker") {
            "docker"
        } else {
            "r"
        };

        let segments: Vec<&str> = url.split('/').collect();
        let located = segments
            .iter()
            .position(|segment| *segment == marker)
            .and_then(|index| match (segments.get(index + 1), segments.get(index + 2)) {
                (Some(namespace), Some(repository))
                    if !namespace.is_empty() && !repository.is_empty() =>
                {
                    Some((*namespace, *repository))
                }
                _ => None,
            });

        match located {
            Some((namespace, repository)) => {
                Ok(Self::new(namespace, repository, normalize_tag(tag)))
            }
            None => Err(DockhubError::InvalidReference(url.to_string())),
        }
    }

    /// Accepts either a name or a Hub URL, dispatching on the scheme prefix.
    pub fn parse(input: &str, tag: &str) -> Result<Self> {
        if input.contains("://") || input.contains("docker.com") {
            Self::from_url(input, tag)
        } else {
            Self::from_name(input, tag)
        }
    }

    /// `namespace/repository`, the form the Hub and registry APIs expect.
    pub fn repository_path(&self) -> String {
        format!("{}/{}", self.namespace, self.repository)
    }

    /// Service name for generated compose manifests.
    pub fn service_name(&self) -> String {
        self.repository.to_lowercase().replace('-', "_")
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.namespace, self.repository, self.tag)
    }
}

fn normalize_tag(tag: &str) -> &str {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        DEFAULT_TAG
    } else {
        trimmed
    }
}
