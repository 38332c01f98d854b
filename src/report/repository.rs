use crate::hub::{ImageSummary, RepositoryDetail, TagSummary};
use crate::reference::ImageReference;

/// Renders the repository overview: description, counters, the most recent
/// tags, and a pull command.
pub fn repository_analysis(
    reference: &ImageReference,
    detail: &RepositoryDetail,
    tags: &[TagSummary],
) -> String {
    let full_name = reference.repository_path();
    let mut out = format!("# Docker Repository: {full_name}\n\n");

    out.push_str("## Overview\n\n");
    out.push_str(&format!(
        "**Description:** {}\n\n",
        detail
            .description
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or("No description provided")
    ));
    out.push_str(&format!("**Stars:** {}\n", detail.stars));
    out.push_str(&format!("**Pulls:** {}\n", detail.pulls));
    out.push_str(&format!(
        "**Last Updated:** {}\n\n",
        detail.last_updated.as_deref().unwrap_or("Unknown")
    ));

    out.push_str("## Latest Tags\n\n");
    if tags.is_empty() {
        out.push_str("No tags found for this repository.\n");
    } else {
        for tag in tags {
            out.push_str(&format!(
                "- **{}** (Last Updated: {})\n",
                tag.name,
                tag.last_updated.as_deref().unwrap_or("Unknown")
            ));
        }
    }

    let pull_tag = tags.first().map(|tag| tag.name.as_str()).unwrap_or("latest");
    out.push_str("\n## Usage\n\n");
    out.push_str(&format!(
        "To pull this image:\n\n```\ndocker pull {full_name}:{pull_tag}\n```\n"
    ));

    out
}

/// Renders a short search listing for the `docker://images/{query}` resource.
pub fn image_listing(query: &str, results: &[ImageSummary]) -> String {
    let mut out = format!("# Docker Images for '{query}'\n\n");

    if results.is_empty() {
        out.push_str("No results found.");
        return out;
    }

    for result in results {
        out.push_str(&format!("## {}\n", result.name));
        out.push_str(&format!(
            "**Stars:** {} | **Pulls:** {}\n\n",
            result.stars.unwrap_or(0),
            result.pulls.unwrap_or(0)
        ));
        out.push_str(&format!(
            "{}\n\n",
            result
                .description
                .as_deref()
                .filter(|text| !text.is_empty())
                .unwrap_or("No description")
        ));
    }

    out
}
