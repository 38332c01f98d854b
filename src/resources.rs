use tracing::error;

use crate::error::{DockhubError, Result};
use crate::reference::ImageReference;
use crate::report;
use crate::tools::ToolClients;

const SCHEME: &str = "docker://";
const LISTING_LIMIT: u32 = 5;

/// A templated read-only URI the host can subscribe to.
#[derive(Clone, Debug)]
pub struct ResourceTemplate {
    pub uri_template: &'static str,
    pub description: &'static str,
}

pub static RESOURCE_TEMPLATES: &[ResourceTemplate] = &[
    ResourceTemplate {
        uri_template: "docker://images/{query}",
        description: "Information about Docker images matching a query",
    },
    ResourceTemplate {
        uri_template: "docker://user/{username}",
        description: "Information about a Docker Hub user/organization",
    },
    ResourceTemplate {
        uri_template: "docker://image/{name}/{tag}",
        description: "Detailed information about a specific Docker image and tag",
    },
];

/// Resolves `docker://` URIs against the Hub and registry clients. Every
/// handler renders Markdown; fetch failures become error documents rather
/// than propagated errors.
pub struct ResourceRegistry {
    clients: ToolClients,
}

impl ResourceRegistry {
    pub fn new(clients: ToolClients) -> Self {
        Self { clients }
    }

    pub fn templates() -> &'static [ResourceTemplate] {
        RESOURCE_TEMPLATES
    }

    pub async fn read(&self, uri: &str) -> Result<String> {
        let path = uri
            .strip_prefix(SCHEME)
            .ok_or_else(|| DockhubError::ResourceNotRecognized(uri.to_string()))?;

        match path.split_once('/') {
            Some(("images", query)) if !query.is_empty() => Ok(self.images(query).await),
            Some(("user", username)) if !username.is_empty() => Ok(user_profile(username)),
            Some(("image", rest)) => {
                let (name, tag) = match rest.rsplit_once('/') {
                    Some((name, tag)) if !name.is_empty() && !tag.is_empty() => (name, tag),
                    _ => return Err(DockhubError::ResourceNotRecognized(uri.to_string())),
                };
                Ok(self.image(name, tag).await)
            }
            _ => Err(DockhubError::ResourceNotRecognized(uri.to_string())),
        }
    }

    async fn images(&self, query: &str) -> String {
        match self
            .clients
            .hub
            .search_repositories(query, LISTING_LIMIT)
            .await
        {
            Ok(results) => report::image_listing(query, &results),
            Err(err) => {
                error!(%err, query, "image listing failed");
                format!("# Docker Images for '{query}'\n\nError retrieving images: {err}")
            }
        }
    }

    async fn image(&self, name: &str, tag: &str) -> String {
        let reference = match ImageReference::from_name(name, tag) {
            Ok(reference) => reference,
            Err(err) => return format!("# {name}:{tag}\n\n{err}"),
        };
        match self
            .clients
            .registry
            .manifest(&reference.repository_path(), &reference.tag)
            .await
        {
            Ok(manifest) => report::manifest_summary(&reference, &manifest),
            Err(err) => {
                error!(%err, name, tag, "manifest fetch failed");
                format!(
                    "# {}:{}\n\nError retrieving image details.",
                    reference.repository_path(),
                    reference.tag
                )
            }
        }
    }
}

fn user_profile(username: &str) -> String {
    format!(
        "# Docker Hub User: {username}\n\nUser profile information would be displayed here.\n\n\
         This is a placeholder for the actual user profile data that would be retrieved from Docker Hub."
    )
}
