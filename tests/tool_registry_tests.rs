use serde_json::json;

use dockhub::tools::factory::register_builtin_tool_factories;
use dockhub::{
    register_builtin_tools, DockhubError, HubConfig, ToolClients, ToolFactoryRegistry,
    ToolInvocation, ToolRegistry,
};

fn builtin_registry() -> (ToolRegistry, ToolClients) {
    let clients = ToolClients::from_config(HubConfig::default()).expect("clients build");
    let mut registry = ToolRegistry::new();
    register_builtin_tools(&mut registry, &clients).expect("builtins register");
    (registry, clients)
}

#[test]
fn builtin_registry_lists_every_tool_with_a_manifest() {
    let (registry, _clients) = builtin_registry();
    let names = registry.names();
    assert_eq!(names.len(), 11);
    for name in [
        "search_images",
        "search_tags",
        "search_users",
        "get_image_details",
        "analyze_repository",
        "analyze_dockerfile",
        "optimize_image_size",
        "generate_docker_compose",
        "scan_security",
        "analyze_runtime",
        "compare_images",
    ] {
        assert!(names.contains(&name.to_string()), "missing tool {name}");
        assert!(registry.manifest(name).is_some(), "missing manifest {name}");
    }
}

#[tokio::test]
async fn dispatch_unknown_tool_returns_typed_error() {
    let (registry, _clients) = builtin_registry();
    let err = registry
        .dispatch(ToolInvocation::new("no_such_tool", json!({})))
        .await
        .expect_err("should fail");
    assert!(matches!(err, DockhubError::ToolNotRegistered(name) if name == "no_such_tool"));
}

#[tokio::test]
async fn scan_security_reports_through_the_registry() {
    let (registry, _clients) = builtin_registry();
    let response = registry
        .dispatch(ToolInvocation::new(
            "scan_security",
            json!({"image_name": "nginx", "tag": "1.25"}),
        ))
        .await
        .expect("dispatch succeeds");
    assert_eq!(response.tool, "scan_security");
    assert!(response.content.starts_with("Security scan for library/nginx:1.25"));
    assert!(!response.content.contains("Latest tag"));
}

#[tokio::test]
async fn analyze_runtime_defaults_app_type_to_web() {
    let (registry, _clients) = builtin_registry();
    let response = registry
        .dispatch(ToolInvocation::new(
            "analyze_runtime",
            json!({"image_name": "nginx"}),
        ))
        .await
        .expect("dispatch succeeds");
    assert!(response
        .content
        .starts_with("## Runtime Analysis for library/nginx:latest"));
    assert!(response.content.contains("- CPU Usage: Medium"));
}

#[tokio::test]
async fn report_tools_render_parse_failures_as_text() {
    let (registry, _clients) = builtin_registry();
    let response = registry
        .dispatch(ToolInvocation::new(
            "analyze_dockerfile",
            json!({"repository_url": "https://example.com/r/user/repo"}),
        ))
        .await
        .expect("dispatch succeeds");
    assert!(response.content.starts_with("Error analyzing Dockerfile:"));
}

#[tokio::test]
async fn compose_generation_renders_invalid_ports_as_text() {
    let (registry, _clients) = builtin_registry();
    let response = registry
        .dispatch(ToolInvocation::new(
            "generate_docker_compose",
            json!({
                "repository_url": "https://hub.docker.com/r/library/drupal",
                "port_mapping": "web:eighty"
            }),
        ))
        .await
        .expect("dispatch succeeds");
    assert!(response
        .content
        .starts_with("Error generating docker-compose.yml:"));
}

#[tokio::test]
async fn compare_images_uses_fixture_tables() {
    let (registry, _clients) = builtin_registry();
    let response = registry
        .dispatch(ToolInvocation::new(
            "compare_images",
            json!({"image_a": "nginx", "image_b": "redis"}),
        ))
        .await
        .expect("dispatch succeeds");
    assert!(response.content.contains("6379/tcp"));
    assert!(response.content.contains("## Environment Variables"));
}

#[tokio::test]
async fn missing_required_input_is_a_typed_error() {
    let (registry, _clients) = builtin_registry();
    let err = registry
        .dispatch(ToolInvocation::new("search_images", json!({})))
        .await
        .expect_err("should fail");
    assert!(matches!(err, DockhubError::InvalidInput(_)));
}

#[test]
fn factory_registry_builds_builtins_by_name() {
    let (_registry, clients) = builtin_registry();
    let mut factories = ToolFactoryRegistry::new();
    register_builtin_tool_factories(&mut factories, &clients);

    let tool = factories
        .build("scan_security", None)
        .expect("factory builds");
    assert_eq!(tool.name(), "scan_security");

    let err = factories
        .build("no_such_factory", None)
        .expect_err("should fail");
    assert!(matches!(err, DockhubError::ToolNotRegistered(_)));
}
