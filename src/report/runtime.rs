use crate::reference::ImageReference;
use crate::report::knowledge::runtime_profile;

/// Renders the runtime behavior prediction for an image. Unknown `app_type`
/// values fall back to the `web` profile.
pub fn runtime_analysis(reference: &ImageReference, app_type: &str) -> String {
    let profile = runtime_profile(app_type);

    let mut out = format!(
        "## Runtime Analysis for {}:{}\n\n",
        reference.repository_path(),
        reference.tag
    );

    out.push_str("### Resource Usage Prediction\n\n");
    out.push_str(&format!("- CPU Usage: {}\n", profile.cpu));
    out.push_str(&format!("- Memory Usage: {}\n", profile.memory));
    out.push_str(&format!("- I/O Operations: {}\n", profile.io));
    out.push_str(&format!("- Network Traffic: {}\n\n", profile.network));

    out.push_str("### Orchestration Recommendations\n\n");
    for tip in profile.orchestration.iter() {
        out.push_str(&format!("- {tip}\n"));
    }

    out.push_str("\n### Recommended Resource Limits\n\n");
    out.push_str(&format!("```yaml\n{}\n```\n", profile.limits));

    out
}
