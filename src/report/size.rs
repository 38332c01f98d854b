use crate::hub::TagSummary;
use crate::reference::ImageReference;
use crate::report::bytes_to_mb;
use crate::report::knowledge::size_family;

/// Renders the size-optimization advice for a tag. The current-size line
/// depends on the tag actually carrying a size; the family section is added
/// only for repositories in the node/python/java keyword families.
pub fn size_optimization(reference: &ImageReference, tag: Option<&TagSummary>) -> String {
    let full_name = reference.repository_path();
    let mut out = format!("# Size Optimization for {}:{}\n\n", full_name, reference.tag);

    out.push_str("## Current Image Information\n\n");
    out.push_str(&format!("**Repository:** {full_name}\n"));
    out.push_str(&format!("**Tag:** {}\n", reference.tag));
    match tag.and_then(|tag| tag.size) {
        Some(size) => {
            out.push_str(&format!("**Current Size:** {:.2} MB\n\n", bytes_to_mb(size)));
        }
        None => out.push_str("**Current Size:** Size information not available\n\n"),
    }

    out.push_str("## Size Optimization Recommendations\n\n");

    out.push_str("### 1. Use Smaller Base Images\n\n");
    out.push_str("- Consider using Alpine-based images which are significantly smaller\n");
    out.push_str("- For example, replace `python:3.9` (900MB+) with `python:3.9-alpine` (45MB+)\n");
    out.push_str(
        "- If using Ubuntu/Debian, consider slim variants like `debian:slim` or `ubuntu:22.04-minimal`\n\n",
    );

    out.push_str("### 2. Implement Multi-stage Builds\n\n");
    out.push_str(
        "- Use multi-stage builds to separate build-time dependencies from runtime dependencies\n",
    );
    out.push_str("- Example:\n");
    out.push_str("```dockerfile\n");
    out.push_str("# Build stage\n");
    out.push_str("FROM node:16 AS build\n");
    out.push_str("WORKDIR /app\n");
    out.push_str("COPY package*.json ./\n");
    out.push_str("RUN npm install\n");
    out.push_str("COPY . .\n");
    out.push_str("RUN npm run build\n\n");
    out.push_str("# Production stage\n");
    out.push_str("FROM node:16-alpine\n");
    out.push_str("WORKDIR /app\n");
    out.push_str("COPY --from=build /app/dist ./dist\n");
    out.push_str("COPY --from=build /app/package*.json ./\n");
    out.push_str("RUN npm install --production\n");
    out.push_str("CMD [\"node\", \"dist/index.js\"]\n");
    out.push_str("```\n\n");

    out.push_str("### 3. Optimize Dockerfile Instructions\n\n");
    out.push_str("- Combine related RUN commands to reduce layer count\n");
    out.push_str("- Clean up package manager caches in the same layer they're created\n");
    out.push_str("- Example:\n");
    out.push_str("```dockerfile\n");
    out.push_str("# Instead of:\n");
    out.push_str("RUN apt-get update\n");
    out.push_str("RUN apt-get install -y package1 package2\n\n");
    out.push_str("# Use:\n");
    out.push_str("RUN apt-get update && \\\n");
    out.push_str("    apt-get install -y package1 package2 && \\\n");
    out.push_str("    rm -rf /var/lib/apt/lists/*\n");
    out.push_str("```\n\n");

    out.push_str("### 4. Remove Unnecessary Files\n\n");
    out.push_str("- Use .dockerignore to exclude files not needed in the image\n");
    out.push_str("- Remove temporary files, logs, and caches\n");
    out.push_str(
        "- Consider using tools like docker-slim or dive to analyze and reduce image size\n\n",
    );

    if let Some(family) = size_family(&reference.repository) {
        out.push_str(&format!("### 5. {}\n\n", family.heading));
        for tip in family.tips.iter() {
            out.push_str(&format!("- {tip}\n"));
        }
        out.push('\n');
    }

    out.push_str("## Estimated Size Savings\n\n");
    out.push_str(
        "By implementing these recommendations, you could potentially reduce your image size by:\n\n",
    );
    out.push_str("- **Base Image Optimization:** 60-80% reduction\n");
    out.push_str("- **Multi-stage Builds:** 40-70% reduction\n");
    out.push_str("- **Layer Optimization:** 10-30% reduction\n");
    out.push_str("- **Removing Unnecessary Files:** 5-20% reduction\n\n");
    out.push_str(
        "Overall, these techniques could reduce your image size by 50-90% depending on the current configuration.",
    );

    out
}
