use std::fs;

use dockhub::{manifest_exports, register_builtin_tools, HubConfig, ToolClients, ToolRegistry};
use serde_json::Value;

#[test]
fn manifest_exports_round_trip_through_json() {
    let clients = ToolClients::from_config(HubConfig::default()).expect("clients build");
    let mut registry = ToolRegistry::new();
    register_builtin_tools(&mut registry, &clients).expect("builtins register");

    let entries = manifest_exports(&registry);
    assert_eq!(entries.len(), 11);
    assert!(entries.windows(2).all(|pair| pair[0].name <= pair[1].name));

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("manifests.json");
    let content = serde_json::to_string_pretty(&entries).expect("serializes");
    fs::write(&path, &content).expect("writes");

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&path).expect("reads"))
        .expect("parses");
    let array = parsed.as_array().expect("array");
    assert_eq!(array.len(), 11);
    let search = array
        .iter()
        .find(|entry| entry["name"] == "search_images")
        .expect("search_images exported");
    assert_eq!(
        search["manifest"]["inputs"][0]["name"],
        Value::String("query".to_string())
    );
}
