use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DockhubError, Result};
use crate::tools::manifest::ToolManifest;
use crate::tools::tool::{Tool, ToolInvocation, ToolResponse};

#[derive(Clone)]
struct ToolEntry {
    tool: Arc<dyn Tool>,
    manifest: Option<Arc<ToolManifest>>,
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolEntry>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let _ = self.insert(tool, None);
    }

    pub fn register_with_manifest(
        &mut self,
        tool: Arc<dyn Tool>,
        manifest: ToolManifest,
    ) -> Result<()> {
        self.insert(tool, Some(manifest))
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).map(|entry| Arc::clone(&entry.tool))
    }

    pub fn manifest(&self, name: &str) -> Option<Arc<ToolManifest>> {
        self.tools
            .get(name)
            .and_then(|entry| entry.manifest.as_ref().map(Arc::clone))
    }

    /// Registered tool names, sorted for stable listings.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn manifests(&self) -> Vec<Arc<ToolManifest>> {
        let mut manifests: Vec<Arc<ToolManifest>> = self
            .tools
            .values()
            .filter_map(|entry| entry.manifest.as_ref().map(Arc::clone))
            .collect();
        manifests.sort_by(|a, b| a.name.cmp(&b.name));
        manifests
    }

    /// Looks a tool up by the invocation's name and calls it.
    pub async fn dispatch(&self, invocation: ToolInvocation) -> Result<ToolResponse> {
        let tool = self
            .get(&invocation.name)
            .ok_or_else(|| DockhubError::ToolNotRegistered(invocation.name.clone()))?;
        tool.call(invocation).await
    }

    fn insert(&mut self, tool: Arc<dyn Tool>, manifest: Option<ToolManifest>) -> Result<()> {
        if let Some(ref manifest) = manifest {
            if manifest.name != tool.name() {
                return Err(DockhubError::ManifestMismatch {
                    kind: "tool",
                    name: tool.name().to_string(),
                });
            }
        }

        self.tools.insert(
            tool.name().to_string(),
            ToolEntry {
                tool,
                manifest: manifest.map(Arc::new),
            },
        );
        Ok(())
    }
}
