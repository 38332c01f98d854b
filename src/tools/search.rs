use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::hub::{HubClient, TagSummary};
use crate::reference::{ImageReference, DEFAULT_TAG};
use crate::tools::manifest::{ToolManifest, ToolPort, ToolPortSchema};
use crate::tools::tool::{extract_input, Tool, ToolInvocation, ToolResponse};
use crate::utils::validation::InputValidator;

fn string_port(name: &str, description: &str) -> ToolPort {
    ToolPort::new(name)
        .with_description(description)
        .with_schema(ToolPortSchema::new().with_type("String"))
}

fn limit_port(default: u32) -> ToolPort {
    ToolPort::new("limit")
        .with_description("Maximum number of results to return")
        .with_default(default.into())
        .with_schema(ToolPortSchema::new().with_type("Integer"))
}

pub(crate) fn json_output() -> ToolPort {
    ToolPort::new("results")
        .with_description("JSON-encoded result list")
        .with_schema(ToolPortSchema::new().with_type("Json"))
}

/// Searches Docker Hub repositories by free-text query.
pub struct SearchImagesTool {
    hub: Arc<HubClient>,
}

impl SearchImagesTool {
    pub fn new(hub: Arc<HubClient>) -> Self {
        Self { hub }
    }

    pub fn manifest() -> ToolManifest {
        ToolManifest::builder("search_images")
            .description("Search for Docker images across registries")
            .input(string_port("query", "Search query for Docker images").required())
            .input(limit_port(10))
            .output(json_output())
            .capability("hub.search")
            .build()
    }
}

#[derive(Deserialize)]
struct SearchImagesArgs {
    query: String,
    #[serde(default = "default_search_limit")]
    limit: u32,
}

fn default_search_limit() -> u32 {
    10
}

#[async_trait]
impl Tool for SearchImagesTool {
    fn name(&self) -> &'static str {
        "search_images"
    }

    async fn call(&self, invocation: ToolInvocation) -> Result<ToolResponse> {
        let args: SearchImagesArgs = extract_input(invocation.input)?;
        InputValidator::validate_limit(args.limit)?;
        let results = self.hub.search_repositories(&args.query, args.limit).await?;
        ToolResponse::json(self.name(), &results)
    }
}

/// Lists the tags of one image, optionally filtered by a substring pattern.
pub struct SearchTagsTool {
    hub: Arc<HubClient>,
}

impl SearchTagsTool {
    pub fn new(hub: Arc<HubClient>) -> Self {
        Self { hub }
    }

    pub fn manifest() -> ToolManifest {
        ToolManifest::builder("search_tags")
            .description("Search for specific tags of a Docker image")
            .input(string_port("image_name", "Name of the Docker image").required())
            .input(
                string_port("tag_pattern", "Pattern to match tags against")
                    .with_default("".into()),
            )
            .input(limit_port(25))
            .output(json_output())
            .capability("hub.tags")
            .build()
    }
}

#[derive(Deserialize)]
struct SearchTagsArgs {
    image_name: String,
    #[serde(default)]
    tag_pattern: String,
    #[serde(default = "default_tag_limit")]
    limit: u32,
}

fn default_tag_limit() -> u32 {
    25
}

#[async_trait]
impl Tool for SearchTagsTool {
    fn name(&self) -> &'static str {
        "search_tags"
    }

    async fn call(&self, invocation: ToolInvocation) -> Result<ToolResponse> {
        let args: SearchTagsArgs = extract_input(invocation.input)?;
        InputValidator::validate_limit(args.limit)?;
        let reference = ImageReference::from_name(&args.image_name, DEFAULT_TAG)?;
        let tags = self.hub.list_tags(&reference, args.limit).await?;
        let tags = filter_tags(tags, &args.tag_pattern);
        ToolResponse::json(self.name(), &tags)
    }
}

/// Keeps the tags whose name contains `pattern`; an empty pattern keeps
/// everything.
pub fn filter_tags(mut tags: Vec<TagSummary>, pattern: &str) -> Vec<TagSummary> {
    if !pattern.is_empty() {
        tags.retain(|tag| tag.name.contains(pattern));
    }
    tags
}


/// Searches Docker Hub users and organizations.
pub struct SearchUsersTool {
    hub: Arc<HubClient>,
}

impl SearchUsersTool {
    pub fn new(hub: Arc<HubClient>) -> Self {
        Self { hub }
    }

    pub fn manifest() -> ToolManifest {
        ToolManifest::builder("search_users")
            .description("Search for Docker Hub users/organizations")
            .input(string_port("query", "Search query for Docker Hub users").required())
            .input(limit_port(10))
            .output(json_output())
            .capability("hub.search")
            .build()
    }
}

#[derive(Deserialize)]
struct SearchUsersArgs {
    query: String,
    #[serde(default = "default_search_limit")]
    limit: u32,
}

#[async_trait]
impl Tool for SearchUsersTool {
    fn name(&self) -> &'static str {
        "search_users"
    }

    async fn call(&self, invocation: ToolInvocation) -> Result<ToolResponse> {
        let args: SearchUsersArgs = extract_input(invocation.input)?;
        InputValidator::validate_limit(args.limit)?;
        let results = self.hub.search_users(&args.query, args.limit).await?;
        ToolResponse::json(self.name(), &results)
    }
}
