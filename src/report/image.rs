use crate::reference::ImageReference;
use crate::registry::ImageManifest;
use crate::report::bytes_to_mb;

/// Renders a manifest as the `docker://image/{name}/{tag}` document: digest,
/// total size, and a per-layer breakdown in MB.
pub fn manifest_summary(reference: &ImageReference, manifest: &ImageManifest) -> String {
    let mut out = format!("# {}:{}\n\n", reference.repository_path(), reference.tag);

    out.push_str(&format!("**Digest:** {}\n", manifest.config_digest()));
    out.push_str(&format!(
        "**Size:** {:.2} MB\n",
        bytes_to_mb(manifest.total_size())
    ));
    out.push_str(&format!("**Layers:** {}\n\n", manifest.layers.len()));

    out.push_str("## Layers\n\n");
    for (index, layer) in manifest.layers.iter().enumerate() {
        out.push_str(&format!("### Layer {}\n", index + 1));
        out.push_str(&format!(
            "**Digest:** {}\n",
            layer.digest.as_deref().unwrap_or_default()
        ));
        out.push_str(&format!("**Size:** {:.2} MB\n\n", bytes_to_mb(layer.size)));
    }

    out
}
