use std::sync::Arc;

use async_trait::async_trait;
use futures::try_join;
use serde::Deserialize;

use crate::error::Result;
use crate::hub::HubClient;
use crate::reference::{ImageReference, DEFAULT_TAG};
use crate::report;
use crate::tools::manifest::{ToolManifest, ToolPort, ToolPortSchema};
use crate::tools::tool::{extract_input, Tool, ToolInvocation, ToolResponse};

const RECENT_TAG_COUNT: u32 = 5;
const SIZE_LOOKUP_TAG_COUNT: u32 = 10;

fn url_port() -> ToolPort {
    ToolPort::new("repository_url")
        .with_description("Full URL to a Docker Hub repository")
        .required()
        .with_schema(ToolPortSchema::new().with_type("String").with_format("url"))
}

fn name_port() -> ToolPort {
    ToolPort::new("image_name")
        .with_description("Name of the Docker image (e.g., 'nginx' or 'user/repo')")
        .required()
        .with_schema(ToolPortSchema::new().with_type("String"))
}

fn tag_port() -> ToolPort {
    ToolPort::new("tag")
        .with_description("Tag of the Docker image")
        .with_default(DEFAULT_TAG.into())
        .with_schema(ToolPortSchema::new().with_type("String"))
}

fn report_output() -> ToolPort {
    ToolPort::new("report")
        .with_description("Markdown report")
        .with_schema(ToolPortSchema::new().with_type("String").with_format("markdown"))
}

#[derive(Deserialize)]
struct UrlArgs {
    repository_url: String,
    #[serde(default = "default_tag")]
    tag: String,
}

#[derive(Deserialize)]
struct NameArgs {
    image_name: String,
    #[serde(default = "default_tag")]
    tag: String,
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

/// Fetches repository detail and recent tags, and renders the overview
/// report.
pub struct AnalyzeRepositoryTool {
    hub: Arc<HubClient>,
}

impl AnalyzeRepositoryTool {
    pub fn new(hub: Arc<HubClient>) -> Self {
        Self { hub }
    }

    pub fn manifest() -> ToolManifest {
        ToolManifest::builder("analyze_repository")
            .description("Analyze a Docker Hub repository and provide detailed information about it")
            .input(url_port())
            .output(report_output())
            .capability("hub.repositories")
            .capability("hub.tags")
            .build()
    }

    async fn analyze(&self, url: &str) -> Result<String> {
        let reference = ImageReference::from_url(url, DEFAULT_TAG)?;
        let (detail, tags) = try_join!(
            self.hub.repository_detail(&reference),
            self.hub.list_tags(&reference, RECENT_TAG_COUNT)
        )?;
        Ok(report::repository_analysis(&reference, &detail, &tags))
    }
}

#[async_trait]
impl Tool for AnalyzeRepositoryTool {
    fn name(&self) -> &'static str {
        "analyze_repository"
    }

    async fn call(&self, invocation: ToolInvocation) -> Result<ToolResponse> {
        let args: UrlArgs = extract_input(invocation.input)?;
        let content = self
            .analyze(&args.repository_url)
            .await
            .unwrap_or_else(|err| format!("Error analyzing repository: {err}"));
        Ok(ToolResponse::text(self.name(), content))
    }
}

/// Renders the estimated-Dockerfile report for a repository URL.
pub struct AnalyzeDockerfileTool;

impl AnalyzeDockerfileTool {
    pub fn manifest() -> ToolManifest {
        ToolManifest::builder("analyze_dockerfile")
            .description("Attempt to analyze the Dockerfile used to create a Docker image")
            .input(url_port())
            .input(tag_port())
            .output(report_output())
            .build()
    }
}

#[async_trait]
impl Tool for AnalyzeDockerfileTool {
    fn name(&self) -> &'static str {
        "analyze_dockerfile"
    }

    async fn call(&self, invocation: ToolInvocation) -> Result<ToolResponse> {
        let args: UrlArgs = extract_input(invocation.input)?;
        let content = ImageReference::from_url(&args.repository_url, &args.tag)
            .map(|reference| report::dockerfile_estimate(&reference))
            .unwrap_or_else(|err| format!("Error analyzing Dockerfile: {err}"));
        Ok(ToolResponse::text(self.name(), content))
    }
}

/// Looks up the requested tag's size and renders the size-optimization
/// advice.
pub struct OptimizeImageSizeTool {
    hub: Arc<HubClient>,
}

impl OptimizeImageSizeTool {
    pub fn new(hub: Arc<HubClient>) -> Self {
        Self { hub }
    }

    pub fn manifest() -> ToolManifest {
        ToolManifest::builder("optimize_image_size")
            .description("Analyze a Docker image and suggest ways to reduce its size")
            .input(url_port())
            .input(tag_port())
            .output(report_output())
            .capability("hub.repositories")
            .capability("hub.tags")
            .build()
    }

    async fn analyze(&self, url: &str, tag: &str) -> Result<String> {
        let reference = ImageReference::from_url(url, tag)?;
        // The detail fetch doubles as an existence check for the repository.
        let (_, tags) = try_join!(
            self.hub.repository_detail(&reference),
            self.hub.list_tags(&reference, SIZE_LOOKUP_TAG_COUNT)
        )?;

        let target = tags.iter().find(|candidate| candidate.name == reference.tag);
        if target.is_none() {
            return Ok(format!(
                "Could not find tag '{}' for repository {}",
                reference.tag,
                reference.repository_path()
            ));
        }
        Ok(report::size_optimization(&reference, target))
    }
}

#[async_trait]
impl Tool for OptimizeImageSizeTool {
    fn name(&self) -> &'static str {
        "optimize_image_size"
    }

    async fn call(&self, invocation: ToolInvocation) -> Result<ToolResponse> {
        let args: UrlArgs = extract_input(invocation.input)?;
        let content = self
            .analyze(&args.repository_url, &args.tag)
            .await
            .unwrap_or_else(|err| format!("Error optimizing image size: {err}"));
        Ok(ToolResponse::text(self.name(), content))
    }
}

/// Renders the fixed-catalog security report for an image name.
pub struct ScanSecurityTool;

impl ScanSecurityTool {
    pub fn manifest() -> ToolManifest {
        ToolManifest::builder("scan_security")
            .description("Perform a basic security scan of a Docker image")
            .input(name_port())
            .input(tag_port())
            .output(report_output())
            .build()
    }
}

#[async_trait]
impl Tool for ScanSecurityTool {
    fn name(&self) -> &'static str {
        "scan_security"
    }

    async fn call(&self, invocation: ToolInvocation) -> Result<ToolResponse> {
        let args: NameArgs = extract_input(invocation.input)?;
        let content = ImageReference::from_name(&args.image_name, &args.tag)
            .map(|reference| report::security_report(&reference))
            .unwrap_or_else(|err| format!("Error scanning image: {err}"));
        Ok(ToolResponse::text(self.name(), content))
    }
}

/// Renders the runtime behavior prediction for an image and app type.
pub struct AnalyzeRuntimeTool;

impl AnalyzeRuntimeTool {
    pub fn manifest() -> ToolManifest {
        ToolManifest::builder("analyze_runtime")
            .description("Analyze how a container might behave at runtime and provide optimization tips")
            .input(name_port())
            .input(tag_port())
            .input(
                ToolPort::new("app_type")
                    .with_description("Application type (web, database, cache, api, batch)")
                    .with_default("web".into())
                    .with_schema(ToolPortSchema::new().with_type("String")),
            )
            .output(report_output())
            .build()
    }
}

#[derive(Deserialize)]
struct RuntimeArgs {
    image_name: String,
    #[serde(default = "default_tag")]
    tag: String,
    #[serde(default = "default_app_type")]
    app_type: String,
}

fn default_app_type() -> String {
    "web".to_string()
}

#[async_trait]
impl Tool for AnalyzeRuntimeTool {
    fn name(&self) -> &'static str {
        "analyze_runtime"
    }

    async fn call(&self, invocation: ToolInvocation) -> Result<ToolResponse> {
        let args: RuntimeArgs = extract_input(invocation.input)?;
        let content = ImageReference::from_name(&args.image_name, &args.tag)
            .map(|reference| report::runtime_analysis(&reference, &args.app_type))
            .unwrap_or_else(|err| format!("Error analyzing runtime behavior: {err}"));
        Ok(ToolResponse::text(self.name(), content))
    }
}
