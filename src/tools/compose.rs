use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::reference::{ImageReference, DEFAULT_TAG};
use crate::report::{self, ComposeOptions};
use crate::tools::manifest::{ToolManifest, ToolPort, ToolPortSchema};
use crate::tools::tool::{extract_input, Tool, ToolInvocation, ToolResponse};
use crate::utils::validation::InputValidator;

/// Generates a docker-compose manifest for a repository URL, optionally with
/// port mappings, environment variables, and a companion database service.
pub struct GenerateComposeTool;

impl GenerateComposeTool {
    pub fn manifest() -> ToolManifest {
        ToolManifest::builder("generate_docker_compose")
            .description("Generate a docker-compose.yml file based on an image or repository")
            .input(
                ToolPort::new("repository_url")
                    .with_description("Full URL to a Docker Hub repository")
                    .required()
                    .with_schema(ToolPortSchema::new().with_type("String").with_format("url")),
            )
            .input(
                ToolPort::new("tag")
                    .with_description("Tag of the Docker image to use")
                    .with_default(DEFAULT_TAG.into())
                    .with_schema(ToolPortSchema::new().with_type("String")),
            )
            .input(
                ToolPort::new("port_mapping")
                    .with_description("Optional port mapping (e.g., '8080:80')")
                    .with_default("".into())
                    .with_schema(ToolPortSchema::new().with_type("String")),
            )
            .input(
                ToolPort::new("environment_variables")
                    .with_description("Optional environment variables (e.g., 'DB_NAME=mydb,DB_USER=user')")
                    .with_default("".into())
                    .with_schema(ToolPortSchema::new().with_type("String")),
            )
            .input(
                ToolPort::new("include_db")
                    .with_description("Whether to include a database service for web applications")
                    .with_default(false.into())
                    .with_schema(ToolPortSchema::new().with_type("Boolean")),
            )
            .output(
                ToolPort::new("report")
                    .with_description("Markdown-fenced docker-compose manifest")
                    .with_schema(ToolPortSchema::new().with_type("String").with_format("markdown")),
            )
            .build()
    }
}

#[derive(Deserialize)]
struct ComposeArgs {
    repository_url: String,
    #[serde(default = "default_tag")]
    tag: String,
    #[serde(default)]
    port_mapping: String,
    #[serde(default)]
    environment_variables: String,
    #[serde(default)]
    include_db: bool,
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

#[async_trait]
impl Tool for GenerateComposeTool {
    fn name(&self) -> &'static str {
        "generate_docker_compose"
    }

    async fn call(&self, invocation: ToolInvocation) -> Result<ToolResponse> {
        let args: ComposeArgs = extract_input(invocation.input)?;
        let content =
            generate(&args).unwrap_or_else(|err| format!("Error generating docker-compose.yml: {err}"));
        Ok(ToolResponse::text(self.name(), content))
    }
}

fn generate(args: &ComposeArgs) -> Result<String> {
    let reference = ImageReference::from_url(&args.repository_url, &args.tag)?;
    InputValidator::validate_port_mappings(&args.port_mapping)?;
    InputValidator::validate_environment_variables(&args.environment_variables)?;

    let options = ComposeOptions {
        port_mapping: args.port_mapping.clone(),
        environment_variables: args.environment_variables.clone(),
        include_db: args.include_db,
    };
    Ok(report::compose_manifest(&reference, &options))
}
