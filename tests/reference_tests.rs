use dockhub::{DockhubError, ImageReference};

#[test]
fn bare_name_defaults_to_library_namespace() {
    let reference = ImageReference::from_name("nginx", "latest").expect("parses");
    assert_eq!(reference.namespace, "library");
    assert_eq!(reference.repository, "nginx");
    assert_eq!(reference.tag, "latest");
}

#[test]
fn slash_qualified_name_splits_on_first_slash() {
    let reference = ImageReference::from_name("user/repo", "1.0").expect("parses");
    assert_eq!(reference.namespace, "user");
    assert_eq!(reference.repository, "repo");
    assert_eq!(reference.tag, "1.0");
}

#[test]
fn empty_tag_falls_back_to_latest() {
    let reference = ImageReference::from_name("nginx", "").expect("parses");
    assert_eq!(reference.tag, "latest");
}

#[test]
fn short_url_form_yields_namespace_and_repository() {
    let reference =
        ImageReference::from_url("https://hub.docker.com/r/library/drupal", "latest")
            .expect("parses");
    assert_eq!(reference.namespace, "library");
    assert_eq!(reference.repository, "drupal");
}

#[test]
fn repository_docker_url_form_yields_same_triple() {
    let reference = ImageReference::from_url(
        "https://hub.docker.com/repository/docker/library/drupal/general",
        "latest",
    )
    .expect("parses");
    assert_eq!(reference.namespace, "library");
    assert_eq!(reference.repository, "drupal");
}

#[test]
fn url_without_docker_host_is_a_parse_failure() {
    let err = ImageReference::from_url("https://example.com/r/user/repo", "latest")
        .expect_err("should fail");
    assert!(matches!(err, DockhubError::InvalidReference(_)));
}

#[test]
fn url_without_known_layout_is_a_parse_failure() {
    let err = ImageReference::from_url("https://hub.docker.com/search?q=nginx", "latest")
        .expect_err("should fail");
    assert!(matches!(err, DockhubError::InvalidReference(_)));
}

#[test]
fn url_with_trailing_marker_is_a_parse_failure() {
    assert!(ImageReference::from_url("https://hub.docker.com/r", "latest").is_err());
    assert!(ImageReference::from_url("https://hub.docker.com/r/onlyns", "latest").is_err());
}

#[test]
fn parse_dispatches_between_names_and_urls() {
    let from_name = ImageReference::parse("redis", "7.2").expect("parses");
    assert_eq!(from_name.repository_path(), "library/redis");

    let from_url =
        ImageReference::parse("https://hub.docker.com/r/bitnami/redis", "7.2").expect("parses");
    assert_eq!(from_url.repository_path(), "bitnami/redis");
}

#[test]
fn display_renders_full_reference() {
    let reference = ImageReference::from_name("user/repo", "1.0").expect("parses");
    assert_eq!(reference.to_string(), "user/repo:1.0");
}

#[test]
fn service_name_normalizes_dashes() {
    let reference = ImageReference::from_name("acme/my-app", "latest").expect("parses");
    assert_eq!(reference.service_name(), "my_app");
}
