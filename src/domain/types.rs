//! # Domain Types
//!
//! Data passed between the session runner and whatever serves the tools.

use anyhow::{Result, bail};
use serde_json::{Map, Value};

/// A tool advertised by the remote server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityDescriptor {
    pub name: String,
    /// Empty when the server sent no description.
    pub description: String,
}

impl CapabilityDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A single tool call: the tool name and its JSON arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    pub name: String,
    pub arguments: Map<String, Value>,
}

impl InvocationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }
}

/// One item of a tool result.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Text(String),
    /// Non-text payload, labelled by its content type (`image`, `audio`, ...).
    Other(String),
}

/// What a tool call returned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvocationResult {
    pub items: Vec<ContentItem>,
    /// Set when the server reports the tool itself failed.
    pub is_error: bool,
}

impl InvocationResult {
    /// Text of the first item. Fails if the result is empty or the first
    /// item is not text.
    pub fn first_text(&self) -> Result<&str> {
        match self.items.first() {
            Some(ContentItem::Text(text)) => Ok(text.as_str()),
            Some(ContentItem::Other(kind)) => bail!("first result item is {kind} content, not text"),
            None => bail!("tool returned an empty result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_arguments() {
        let request = InvocationRequest::new("get_weather_forecast")
            .with_arg("latitude", 34.05)
            .with_arg("longitude", -118.25);

        assert_eq!(request.name, "get_weather_forecast");
        assert_eq!(
            Value::Object(request.arguments),
            json!({"latitude": 34.05, "longitude": -118.25})
        );
    }

    #[test]
    fn test_first_text() {
        let result = InvocationResult {
            items: vec![
                ContentItem::Text("No active alerts".to_string()),
                ContentItem::Text("ignored".to_string()),
            ],
            is_error: false,
        };
        assert_eq!(result.first_text().unwrap(), "No active alerts");
    }

    #[test]
    fn test_first_text_rejects_empty_and_non_text() {
        let empty = InvocationResult::default();
        assert!(empty.first_text().unwrap_err().to_string().contains("empty"));

        let image = InvocationResult {
            items: vec![ContentItem::Other("image".to_string())],
            is_error: false,
        };
        assert!(image.first_text().unwrap_err().to_string().contains("image"));
    }
}
