use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::tools::tool::Tool;
use crate::tools::ToolClients;

pub type ToolFactory = Arc<dyn Fn(Option<Value>) -> Result<Arc<dyn Tool>> + Send + Sync>;

/// Builds tools by name from optional JSON config, so hosts can assemble a
/// registry from declarative plugin manifests.
#[derive(Default)]
pub struct ToolFactoryRegistry {
    factories: HashMap<String, ToolFactory>,
}

impl ToolFactoryRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub fn register_factory<T: Into<String>>(&mut self, name: T, factory: ToolFactory) {
        self.factories.insert(name.into(), factory);
    }

    pub fn build(&self, factory_name: &str, config: Option<Value>) -> Result<Arc<dyn Tool>> {
        let factory = self.factories.get(factory_name).ok_or_else(|| {
            crate::error::DockhubError::ToolNotRegistered(factory_name.to_string())
        })?;
        factory(config)
    }
}

pub fn register_builtin_tool_factories(registry: &mut ToolFactoryRegistry, clients: &ToolClients) {
    let hub = Arc::clone(&clients.hub);
    registry.register_factory(
        "search_images",
        Arc::new(move |_config| {
            Ok(Arc::new(super::search::SearchImagesTool::new(Arc::clone(&hub))) as Arc<dyn Tool>)
        }),
    );

    let hub = Arc::clone(&clients.hub);
    registry.register_factory(
        "search_tags",
        Arc::new(move |_config| {
            Ok(Arc::new(super::search::SearchTagsTool::new(Arc::clone(&hub))) as Arc<dyn Tool>)
        }),
    );

    let hub = Arc::clone(&clients.hub);
    registry.register_factory(
        "search_users",
        Arc::new(move |_config| {
            Ok(Arc::new(super::search::SearchUsersTool::new(Arc::clone(&hub))) as Arc<dyn Tool>)
        }),
    );

    let registry_client = Arc::clone(&clients.registry);
    registry.register_factory(
        "get_image_details",
        Arc::new(move |_config| {
            Ok(Arc::new(super::image::GetImageDetailsTool::new(Arc::clone(&registry_client)))
                as Arc<dyn Tool>)
        }),
    );

    let hub = Arc::clone(&clients.hub);
    registry.register_factory(
        "analyze_repository",
        Arc::new(move |_config| {
            Ok(Arc::new(super::analysis::AnalyzeRepositoryTool::new(Arc::clone(&hub)))
                as Arc<dyn Tool>)
        }),
    );

    registry.register_factory(
        "analyze_dockerfile",
        Arc::new(|_config| Ok(Arc::new(super::analysis::AnalyzeDockerfileTool) as Arc<dyn Tool>)),
    );

    let hub = Arc::clone(&clients.hub);
    registry.register_factory(
        "optimize_image_size",
        Arc::new(move |_config| {
            Ok(Arc::new(super::analysis::OptimizeImageSizeTool::new(Arc::clone(&hub)))
                as Arc<dyn Tool>)
        }),
    );

    registry.register_factory(
        "generate_docker_compose",
        Arc::new(|_config| Ok(Arc::new(super::compose::GenerateComposeTool) as Arc<dyn Tool>)),
    );

    registry.register_factory(
        "scan_security",
        Arc::new(|_config| Ok(Arc::new(super::analysis::ScanSecurityTool) as Arc<dyn Tool>)),
    );

    registry.register_factory(
        "analyze_runtime",
        Arc::new(|_config| Ok(Arc::new(super::analysis::AnalyzeRuntimeTool) as Arc<dyn Tool>)),
    );

    registry.register_factory(
        "compare_images",
        Arc::new(|_config| Ok(Arc::new(super::image::CompareImagesTool) as Arc<dyn Tool>)),
    );
}
