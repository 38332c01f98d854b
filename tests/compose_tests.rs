use dockhub::report::{compose_manifest, ComposeOptions};
use dockhub::ImageReference;

fn reference() -> ImageReference {
    ImageReference::from_url("https://hub.docker.com/r/library/drupal", "10").expect("parses")
}

#[test]
fn minimal_manifest_has_single_service() {
    let content = compose_manifest(&reference(), &ComposeOptions::default());
    assert!(content.starts_with("# Docker Compose for library/drupal:10"));
    assert!(content.contains("```yaml\nversion: '3'\n"));
    assert!(content.contains("  drupal:\n    image: library/drupal:10\n"));
    assert!(content.contains("restart: unless-stopped"));
    assert!(!content.contains("ports:"));
    assert!(!content.contains("environment:"));
    assert!(!content.contains("networks:"));
    assert!(content.ends_with("Run with: `docker-compose up -d`"));
}

#[test]
fn port_mappings_are_emitted_in_input_order() {
    let options = ComposeOptions {
        port_mapping: "8080:80,443:443".to_string(),
        ..ComposeOptions::default()
    };
    let content = compose_manifest(&reference(), &options);
    let first = content.find("- \"8080:80\"").expect("first mapping present");
    let second = content.find("- \"443:443\"").expect("second mapping present");
    assert!(first < second);
}

#[test]
fn environment_variables_are_emitted_in_input_order() {
    let options = ComposeOptions {
        environment_variables: "DB_NAME=mydb, DB_USER=user".to_string(),
        ..ComposeOptions::default()
    };
    let content = compose_manifest(&reference(), &options);
    let first = content.find("- DB_NAME=mydb").expect("first variable present");
    let second = content.find("- DB_USER=user").expect("second variable present");
    assert!(first < second);
}

#[test]
fn database_branch_adds_service_network_and_volume() {
    let options = ComposeOptions {
        include_db: true,
        ..ComposeOptions::default()
    };
    let content = compose_manifest(&reference(), &options);
    assert!(content.contains("    depends_on:\n      - db\n"));
    assert!(content.contains("  db:\n    image: mysql:5.7\n"));
    // one network block per service plus the top-level definition
    assert_eq!(content.matches("app_network").count(), 3);
    assert!(content.contains("\nnetworks:\n  app_network:\n    driver: bridge\n"));
    assert!(content.contains("- db_data:/var/lib/mysql"));
    assert!(content.contains("\nvolumes:\n  db_data:\n"));
}
