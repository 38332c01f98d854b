use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::reference::{ImageReference, DEFAULT_TAG};
use crate::registry::RegistryClient;
use crate::report;
use crate::tools::manifest::{ToolManifest, ToolPort, ToolPortSchema};
use crate::tools::search::json_output;
use crate::tools::tool::{extract_input, Tool, ToolInvocation, ToolResponse};

fn tag_port() -> ToolPort {
    ToolPort::new("tag")
        .with_description("Tag of the Docker image")
        .with_default(DEFAULT_TAG.into())
        .with_schema(ToolPortSchema::new().with_type("String"))
}

/// Resolves a manifest through the registry API and reports the image's
/// layers and total size.
pub struct GetImageDetailsTool {
    registry: Arc<RegistryClient>,
}

impl GetImageDetailsTool {
    pub fn new(registry: Arc<RegistryClient>) -> Self {
        Self { registry }
    }

    pub fn manifest() -> ToolManifest {
        ToolManifest::builder("get_image_details")
            .description("Get detailed information about a Docker image")
            .input(
                ToolPort::new("image_name")
                    .with_description("Name of the Docker image")
                    .required()
                    .with_schema(ToolPortSchema::new().with_type("String")),
            )
            .input(tag_port())
            .output(json_output())
            .capability("registry.pull")
            .build()
    }
}

#[derive(Deserialize)]
struct ImageDetailsArgs {
    image_name: String,
    #[serde(default = "default_tag")]
    tag: String,
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

#[async_trait]
impl Tool for GetImageDetailsTool {
    fn name(&self) -> &'static str {
        "get_image_details"
    }

    async fn call(&self, invocation: ToolInvocation) -> Result<ToolResponse> {
        let args: ImageDetailsArgs = extract_input(invocation.input)?;
        let reference = ImageReference::from_name(&args.image_name, &args.tag)?;
        let detail = self.registry.image_detail(&reference).await?;
        ToolResponse::json(self.name(), &detail)
    }
}

/// Compares the fixture port and environment lists of two images.
pub struct CompareImagesTool;

impl CompareImagesTool {
    pub fn manifest() -> ToolManifest {
        ToolManifest::builder("compare_images")
            .description("Compare the exposed ports and environment of two Docker images")
            .input(
                ToolPort::new("image_a")
                    .with_description("First image name (e.g., 'nginx' or 'user/repo')")
                    .required()
                    .with_schema(ToolPortSchema::new().with_type("String")),
            )
            .input(
                ToolPort::new("image_b")
                    .with_description("Second image name to compare against")
                    .required()
                    .with_schema(ToolPortSchema::new().with_type("String")),
            )
            .output(
                ToolPort::new("report")
                    .with_description("Markdown comparison report")
                    .with_schema(ToolPortSchema::new().with_type("String").with_format("markdown")),
            )
            .build()
    }
}

#[derive(Deserialize)]
struct CompareImagesArgs {
    image_a: String,
    image_b: String,
    #[serde(default = "default_tag")]
    tag_a: String,
    #[serde(default = "default_tag")]
    tag_b: String,
}

#[async_trait]
impl Tool for CompareImagesTool {
    fn name(&self) -> &'static str {
        "compare_images"
    }

    async fn call(&self, invocation: ToolInvocation) -> Result<ToolResponse> {
        let args: CompareImagesArgs = extract_input(invocation.input)?;
        let content = compare(&args).unwrap_or_else(|err| format!("Error comparing images: {err}"));
        Ok(ToolResponse::text(self.name(), content))
    }
}

fn compare(args: &CompareImagesArgs) -> Result<String> {
    let left = ImageReference::from_name(&args.image_a, &args.tag_a)?;
    let right = ImageReference::from_name(&args.image_b, &args.tag_b)?;
    Ok(report::image_comparison(&left, &right))
}
