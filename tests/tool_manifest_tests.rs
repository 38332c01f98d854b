use std::sync::Arc;

use dockhub::{ToolManifest, ToolPort, ToolPortSchema, ToolRegistry};

struct SimpleTool;

#[async_trait::async_trait]
impl dockhub::Tool for SimpleTool {
    fn name(&self) -> &'static str {
        "simple"
    }

    async fn call(
        &self,
        invocation: dockhub::ToolInvocation,
    ) -> dockhub::Result<dockhub::ToolResponse> {
        let payload = invocation.input.to_string();
        Ok(dockhub::ToolResponse::text("simple", payload))
    }
}

#[test]
fn tool_manifest_builder_populates_fields() {
    let manifest = ToolManifest::builder("simple")
        .description("echo-like tool")
        .input(
            ToolPort::new("query")
                .required()
                .with_description("input payload")
                .with_schema(ToolPortSchema::new().with_type("String").with_format("text")),
        )
        .input(ToolPort::new("limit").with_default(10.into()))
        .output(ToolPort::new("result").with_schema(ToolPortSchema::new().with_type("String")))
        .capability("hub.search")
        .build();

    assert_eq!(manifest.name, "simple");
    assert_eq!(manifest.description.as_deref(), Some("echo-like tool"));
    assert_eq!(manifest.inputs.len(), 2);
    assert!(manifest.inputs[0].required);
    assert_eq!(manifest.inputs[1].default, Some(10.into()));
    assert_eq!(manifest.outputs.len(), 1);
    assert_eq!(manifest.capabilities, vec!["hub.search"]);
}

#[test]
fn tool_registry_registers_and_returns_manifest() -> dockhub::Result<()> {
    let tool: Arc<dyn dockhub::Tool> = Arc::new(SimpleTool);
    let manifest = ToolManifest::builder("simple")
        .description("echo-like tool")
        .build();

    let mut registry = ToolRegistry::new();
    registry.register_with_manifest(Arc::clone(&tool), manifest.clone())?;

    let fetched_tool = registry.get("simple").expect("tool registered");
    assert_eq!(fetched_tool.name(), "simple");
    let fetched_manifest = registry.manifest("simple").expect("manifest registered");
    assert_eq!(fetched_manifest.description, manifest.description);
    Ok(())
}

#[test]
fn tool_registry_manifest_mismatch_returns_error() {
    let tool: Arc<dyn dockhub::Tool> = Arc::new(SimpleTool);
    let manifest = ToolManifest::builder("other").build();

    let mut registry = ToolRegistry::new();
    let err = registry
        .register_with_manifest(tool, manifest)
        .expect_err("should fail");
    match err {
        dockhub::DockhubError::ManifestMismatch { kind, name } => {
            assert_eq!(kind, "tool");
            assert_eq!(name, "simple");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
