use dockhub::hub::{ImageSummary, RepositoryDetail, TagSummary};
use dockhub::registry::{ImageManifest, ManifestConfig, ManifestLayer};
use dockhub::report::{
    dockerfile_estimate, image_comparison, image_listing, manifest_summary, repository_analysis,
    runtime_analysis, security_report, size_optimization,
};
use dockhub::ImageReference;

fn reference(name: &str, tag: &str) -> ImageReference {
    ImageReference::from_name(name, tag).expect("valid reference")
}

fn issue_count(report: &str) -> usize {
    report.lines().filter(|line| line.starts_with('[')).count()
}

#[test]
fn security_report_includes_latest_tag_issue_only_for_latest() {
    let latest = security_report(&reference("nginx", "latest"));
    assert_eq!(issue_count(&latest), 4);
    assert!(latest.contains("[MEDIUM] Latest tag"));

    let pinned = security_report(&reference("nginx", "1.25"));
    assert_eq!(issue_count(&pinned), 3);
    assert!(!pinned.contains("Latest tag"));
    assert!(pinned.starts_with("Security scan for library/nginx:1.25"));
}

#[test]
fn runtime_report_falls_back_to_web_profile() {
    let reference = reference("nginx", "latest");
    let unknown = runtime_analysis(&reference, "spreadsheet");
    let web = runtime_analysis(&reference, "web");
    assert_eq!(unknown, web);
}

#[test]
fn runtime_report_is_case_insensitive_on_app_type() {
    let reference = reference("postgres", "16");
    let upper = runtime_analysis(&reference, "DATABASE");
    assert!(upper.contains("- I/O Operations: Very High"));
    assert!(upper.contains("StatefulSets"));
    assert!(upper.contains("memory: 2Gi"));
}

#[test]
fn dockerfile_report_uses_known_template_for_drupal() {
    let report = dockerfile_estimate(&reference("jar285/drupal", "latest"));
    assert!(report.contains("FROM php:8.1-apache"));
    assert!(report.contains("## Layer Analysis"));
}

#[test]
fn dockerfile_report_uses_generic_template_otherwise() {
    let report = dockerfile_estimate(&reference("nginx", "latest"));
    assert!(report.contains("FROM base-image:version"));
    assert!(!report.contains("php:8.1-apache"));
}

#[test]
fn size_report_renders_tag_size_in_mb() {
    let tag = TagSummary {
        name: "latest".to_string(),
        size: Some(50 * 1024 * 1024),
        last_updated: None,
    };
    let report = size_optimization(&reference("nginx", "latest"), Some(&tag));
    assert!(report.contains("**Current Size:** 50.00 MB"));
    assert!(!report.contains("### 5."));
}

#[test]
fn size_report_handles_missing_size_and_family_section() {
    let tag = TagSummary {
        name: "latest".to_string(),
        size: None,
        last_updated: None,
    };
    let report = size_optimization(&reference("python", "latest"), Some(&tag));
    assert!(report.contains("Size information not available"));
    assert!(report.contains("### 5. Python Specific Recommendations"));
}

#[test]
fn repository_report_lists_tags_and_pull_command() {
    let detail = RepositoryDetail {
        description: Some("Official build of Nginx.".to_string()),
        stars: 20000,
        pulls: 1_000_000_000,
        last_updated: Some("2026-01-01T00:00:00Z".to_string()),
    };
    let tags = vec![
        TagSummary {
            name: "1.25".to_string(),
            size: None,
            last_updated: Some("2026-01-01T00:00:00Z".to_string()),
        },
        TagSummary {
            name: "1.24".to_string(),
            size: None,
            last_updated: None,
        },
    ];
    let report = repository_analysis(&reference("nginx", "latest"), &detail, &tags);
    assert!(report.starts_with("# Docker Repository: library/nginx"));
    assert!(report.contains("- **1.25** (Last Updated: 2026-01-01T00:00:00Z)"));
    assert!(report.contains("- **1.24** (Last Updated: Unknown)"));
    assert!(report.contains("docker pull library/nginx:1.25"));
}

#[test]
fn repository_report_handles_empty_tag_list() {
    let detail = RepositoryDetail {
        description: None,
        stars: 0,
        pulls: 0,
        last_updated: None,
    };
    let report = repository_analysis(&reference("acme/empty", "latest"), &detail, &[]);
    assert!(report.contains("**Description:** No description provided"));
    assert!(report.contains("No tags found for this repository."));
    assert!(report.contains("docker pull acme/empty:latest"));
}

#[test]
fn image_listing_reports_empty_result() {
    let listing = image_listing("nosuchthing", &[]);
    assert!(listing.starts_with("# Docker Images for 'nosuchthing'"));
    assert!(listing.ends_with("No results found."));
}

#[test]
fn image_listing_renders_counters_and_descriptions() {
    let results = vec![ImageSummary {
        name: "nginx".to_string(),
        description: Some("Web server".to_string()),
        stars: Some(20000),
        pulls: Some(42),
        official: true,
        automated: false,
    }];
    let listing = image_listing("nginx", &results);
    assert!(listing.contains("## nginx"));
    assert!(listing.contains("**Stars:** 20000 | **Pulls:** 42"));
    assert!(listing.contains("Web server"));
}

#[test]
fn comparison_report_renders_additions_and_removals() {
    let left = reference("nginx", "latest");
    let right = reference("redis", "latest");
    let report = image_comparison(&left, &right);
    assert!(report.starts_with("# Image Comparison: library/nginx:latest vs library/redis:latest"));
    assert!(report.contains("- 6379/tcp"));
    assert!(report.contains("- 443/tcp"));
    assert!(report.contains("### Added in library/redis:latest"));
    assert!(report.contains("### Removed from library/nginx:latest"));
}

#[test]
fn comparison_report_of_identical_images_has_no_differences() {
    let report = image_comparison(&reference("nginx", "1.0"), &reference("nginx", "2.0"));
    assert_eq!(report.matches("No differences.").count(), 2);
}

#[test]
fn manifest_summary_reports_layers_and_total_size() {
    let manifest = ImageManifest {
        config: Some(ManifestConfig {
            digest: Some("sha256:abc".to_string()),
            size: Some(7023),
        }),
        layers: vec![
            ManifestLayer {
                digest: Some("sha256:layer1".to_string()),
                size: 10 * 1024 * 1024,
            },
            ManifestLayer {
                digest: Some("sha256:layer2".to_string()),
                size: 5 * 1024 * 1024,
            },
        ],
    };
    let summary = manifest_summary(&reference("nginx", "latest"), &manifest);
    assert!(summary.starts_with("# library/nginx:latest"));
    assert!(summary.contains("**Digest:** sha256:abc"));
    assert!(summary.contains("**Size:** 15.00 MB"));
    assert!(summary.contains("**Layers:** 2"));
    assert!(summary.contains("### Layer 2"));
}
