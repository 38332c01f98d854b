use crate::reference::ImageReference;
use crate::report::knowledge::{dockerfile_template, GENERIC_DOCKERFILE};

/// Renders the estimated-Dockerfile report. A repository with a known
/// template gets it verbatim; everything else falls back to the generic
/// placeholder.
pub fn dockerfile_estimate(reference: &ImageReference) -> String {
    let template = dockerfile_template(&reference.repository).unwrap_or(GENERIC_DOCKERFILE);

    let mut out = format!(
        "# Dockerfile Analysis for {}:{}\n\n",
        reference.repository_path(),
        reference.tag
    );

    out.push_str("## Estimated Dockerfile\n\n");
    out.push_str(&format!("```dockerfile\n{template}\n```\n\n"));

    out.push_str("## Layer Analysis\n\n");
    out.push_str("1. **Base Image Layer**: Sets up the core operating system and runtime\n");
    out.push_str("2. **Dependency Layer**: Installs required system packages and libraries\n");
    out.push_str("3. **Application Layer**: Adds the application code and configuration\n");
    out.push_str("4. **Configuration Layer**: Sets up final runtime configuration\n\n");

    out.push_str("## Recommendations\n\n");
    out.push_str("- Consider using multi-stage builds to reduce image size\n");
    out.push_str("- Clean up package manager caches to reduce layer size\n");
    out.push_str("- Use specific version tags instead of 'latest' for better reproducibility\n");

    out
}
