use serde::Serialize;

use crate::tools::{ToolManifest, ToolRegistry};

#[derive(Clone, Debug, Serialize)]
pub struct ManifestExportEntry {
    pub name: String,
    pub manifest: ToolManifest,
}

/// Snapshot of every registered manifest, for `manifests export`.
pub fn manifest_exports(registry: &ToolRegistry) -> Vec<ManifestExportEntry> {
    registry
        .manifests()
        .into_iter()
        .map(|manifest| ManifestExportEntry {
            name: manifest.name.clone(),
            manifest: (*manifest).clone(),
        })
        .collect()
}
