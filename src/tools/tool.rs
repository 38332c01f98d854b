use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DockhubError, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub name: String,
    pub input: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl ToolInvocation {
    pub fn new<T: Into<String>>(name: T, input: Value) -> Self {
        Self {
            name: name.into(),
            input,
            metadata: None,
        }
    }
}

/// What a tool hands back to the host: rendered text plus, for the
/// list-returning tools, the structured payload the text was built from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolResponse {
    pub id: String,
    pub tool: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ToolResponse {
    pub fn text(tool: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: response_id(),
            tool: tool.into(),
            content: content.into(),
            data: None,
        }
    }

    pub fn json<T: Serialize>(tool: impl Into<String>, value: &T) -> Result<Self> {
        let data = serde_json::to_value(value)
            .map_err(|e| DockhubError::Serialization(e.to_string()))?;
        let content = serde_json::to_string_pretty(&data)
            .map_err(|e| DockhubError::Serialization(e.to_string()))?;
        Ok(Self {
            id: response_id(),
            tool: tool.into(),
            content,
            data: Some(data),
        })
    }
}

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    async fn call(&self, invocation: ToolInvocation) -> Result<ToolResponse>;
}

impl std::fmt::Debug for dyn Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool").field("name", &self.name()).finish()
    }
}

/// Deserializes a tool's input object into its typed argument struct;
/// `null` is treated as an empty object so every field default applies.
pub fn extract_input<T: DeserializeOwned>(input: Value) -> Result<T> {
    let normalized = if input.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        input
    };
    serde_json::from_value(normalized).map_err(|e| DockhubError::InvalidInput(e.to_string()))
}

pub fn response_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("res-{}-{}", now.as_secs(), now.subsec_nanos())
}
