//! Tests that hit the real Docker Hub and registry endpoints. Ignored by
//! default; run with `cargo test -- --ignored` when network access is
//! available.

use dockhub::{HubConfig, ImageReference, ToolClients};

fn clients() -> ToolClients {
    ToolClients::from_config(HubConfig::from_env()).expect("clients build")
}

#[tokio::test]
#[ignore]
async fn searching_nginx_returns_the_official_image() {
    let clients = clients();
    let results = clients
        .hub
        .search_repositories("nginx", 10)
        .await
        .expect("search succeeds");
    assert!(!results.is_empty());
    assert!(results.iter().any(|image| image.name == "nginx"));
}

#[tokio::test]
#[ignore]
async fn listing_nginx_tags_includes_latest() {
    let clients = clients();
    let reference = ImageReference::from_name("nginx", "latest").expect("parses");
    let tags = clients
        .hub
        .list_tags(&reference, 25)
        .await
        .expect("listing succeeds");
    assert!(tags.iter().any(|tag| tag.name == "latest"));
}

#[tokio::test]
#[ignore]
async fn fetching_a_manifest_yields_layers() {
    let clients = clients();
    let reference = ImageReference::from_name("nginx", "latest").expect("parses");
    let detail = clients
        .registry
        .image_detail(&reference)
        .await
        .expect("manifest fetch succeeds");
    assert!(!detail.layers.is_empty());
    assert!(detail.total_size > 0);
}
