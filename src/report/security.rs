use crate::reference::ImageReference;
use crate::report::knowledge::{LATEST_TAG_ISSUE, SECURITY_CATALOG};

/// Renders the fixed-catalog security report. The "Latest tag" entry is
/// included only when the reference actually uses the `latest` tag.
pub fn security_report(reference: &ImageReference) -> String {
    let mut out = format!(
        "Security scan for {}:{}\n\n",
        reference.repository_path(),
        reference.tag
    );

    let relevant: Vec<_> = SECURITY_CATALOG
        .iter()
        .filter(|issue| issue.issue != LATEST_TAG_ISSUE || reference.tag == "latest")
        .collect();

    if relevant.is_empty() {
        out.push_str("No security issues found.\n");
    } else {
        out.push_str("Security Issues:\n\n");
        for issue in relevant {
            out.push_str(&format!("[{}] {}\n", issue.severity, issue.issue));
            out.push_str(&format!("  {}\n\n", issue.recommendation));
        }
    }

    out.push_str("\nGeneral Recommendations:\n\n");
    out.push_str("1. Scan with vulnerability scanners (e.g., Trivy, Clair)\n");
    out.push_str("2. Use multi-stage builds to reduce attack surface\n");
    out.push_str("3. Keep base images updated regularly\n");

    out
}
