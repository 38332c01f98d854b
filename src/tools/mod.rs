pub mod analysis;
pub mod compose;
pub mod factory;
pub mod image;
pub mod manifest;
pub mod registry;
pub mod search;
pub mod tool;

use std::sync::Arc;

pub use factory::{register_builtin_tool_factories, ToolFactory, ToolFactoryRegistry};
pub use manifest::{ToolManifest, ToolManifestBuilder, ToolPort, ToolPortSchema};
pub use registry::ToolRegistry;
pub use tool::{extract_input, Tool, ToolInvocation, ToolResponse};

use crate::config::HubConfig;
use crate::error::Result;
use crate::hub::{build_http_client, HubClient};
use crate::registry::RegistryClient;

/// The injected collaborators every network-facing tool shares: one Hub
/// client and one registry client over a single pooled HTTP client.
#[derive(Clone)]
pub struct ToolClients {
    pub hub: Arc<HubClient>,
    pub registry: Arc<RegistryClient>,
}

impl ToolClients {
    pub fn from_config(config: HubConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self {
            hub: Arc::new(HubClient::with_client(http.clone(), config.clone())),
            registry: Arc::new(RegistryClient::with_client(http, config)),
        })
    }
}

/// Registers every builtin tool with its manifest.
pub fn register_builtin_tools(registry: &mut ToolRegistry, clients: &ToolClients) -> Result<()> {
    registry.register_with_manifest(
        Arc::new(search::SearchImagesTool::new(Arc::clone(&clients.hub))),
        search::SearchImagesTool::manifest(),
    )?;
    registry.register_with_manifest(
        Arc::new(search::SearchTagsTool::new(Arc::clone(&clients.hub))),
        search::SearchTagsTool::manifest(),
    )?;
    registry.register_with_manifest(
        Arc::new(search::SearchUsersTool::new(Arc::clone(&clients.hub))),
        search::SearchUsersTool::manifest(),
    )?;
    registry.register_with_manifest(
        Arc::new(image::GetImageDetailsTool::new(Arc::clone(&clients.registry))),
        image::GetImageDetailsTool::manifest(),
    )?;
    registry.register_with_manifest(
        Arc::new(analysis::AnalyzeRepositoryTool::new(Arc::clone(&clients.hub))),
        analysis::AnalyzeRepositoryTool::manifest(),
    )?;
    registry.register_with_manifest(
        Arc::new(analysis::AnalyzeDockerfileTool),
        analysis::AnalyzeDockerfileTool::manifest(),
    )?;
    registry.register_with_manifest(
        Arc::new(analysis::OptimizeImageSizeTool::new(Arc::clone(&clients.hub))),
        analysis::OptimizeImageSizeTool::manifest(),
    )?;
    registry.register_with_manifest(
        Arc::new(compose::GenerateComposeTool),
        compose::GenerateComposeTool::manifest(),
    )?;
    registry.register_with_manifest(
        Arc::new(analysis::ScanSecurityTool),
        analysis::ScanSecurityTool::manifest(),
    )?;
    registry.register_with_manifest(
        Arc::new(analysis::AnalyzeRuntimeTool),
        analysis::AnalyzeRuntimeTool::manifest(),
    )?;
    registry.register_with_manifest(
        Arc::new(image::CompareImagesTool),
        image::CompareImagesTool::manifest(),
    )?;
    Ok(())
}
