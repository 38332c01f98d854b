pub mod cli;
pub mod config;
pub mod error;
pub mod hub;
pub mod reference;
pub mod registry;
pub mod report;
pub mod resources;
pub mod tools;
pub mod utils;

pub use cli::{manifest_exports, ManifestExportEntry};
pub use config::HubConfig;
pub use error::{DockhubError, Result};
pub use hub::{HubClient, ImageSummary, RepositoryDetail, TagSummary, UserSummary};
pub use reference::ImageReference;
pub use registry::{ImageDetail, ImageLayer, ImageManifest, RegistryClient};
pub use resources::{ResourceRegistry, ResourceTemplate};
pub use tools::{
    register_builtin_tools, Tool, ToolClients, ToolFactoryRegistry, ToolInvocation, ToolManifest,
    ToolManifestBuilder, ToolPort, ToolPortSchema, ToolRegistry, ToolResponse,
};
pub use utils::{logging, validation};
