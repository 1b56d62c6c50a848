//! Conversions from rmcp wire types to the domain types.

use rmcp::model::{CallToolResult, Content, Tool};

use crate::domain::types::{CapabilityDescriptor, ContentItem, InvocationResult};

pub fn descriptor_from_tool(tool: Tool) -> CapabilityDescriptor {
    CapabilityDescriptor::new(tool.name, tool.description.unwrap_or_default())
}

pub fn result_from_call(result: CallToolResult) -> InvocationResult {
    InvocationResult {
        items: result.content.iter().map(content_item).collect(),
        is_error: result.is_error.unwrap_or(false),
    }
}

/// Text content keeps its text; anything else is labelled with its
/// serialized `type` tag.
pub fn content_item(content: &Content) -> ContentItem {
    if let Some(text) = content.as_text() {
        return ContentItem::Text(text.text.clone());
    }

    let kind = serde_json::to_value(content)
        .ok()
        .and_then(|value| value.get("type").and_then(|t| t.as_str()).map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string());
    ContentItem::Other(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::JsonObject;
    use std::sync::Arc;

    #[test]
    fn test_descriptor_from_tool() {
        let tool = Tool::new(
            "get_weather_alerts",
            "Get weather alerts for a US state.",
            Arc::new(JsonObject::new()),
        );

        let descriptor = descriptor_from_tool(tool);
        assert_eq!(descriptor.name, "get_weather_alerts");
        assert_eq!(descriptor.description, "Get weather alerts for a US state.");
    }

    #[test]
    fn test_missing_description_is_empty() {
        let mut tool = Tool::new("ping", "", Arc::new(JsonObject::new()));
        tool.description = None;

        assert_eq!(descriptor_from_tool(tool).description, "");
    }

    #[test]
    fn test_result_from_call() {
        let result = CallToolResult::success(vec![
            Content::text("Sunny, 75°F"),
            Content::image("aGVsbG8=", "image/png"),
        ]);

        let converted = result_from_call(result);
        assert!(!converted.is_error);
        assert_eq!(
            converted.items,
            vec![
                ContentItem::Text("Sunny, 75°F".to_string()),
                ContentItem::Other("image".to_string()),
            ]
        );
    }

    #[test]
    fn test_error_flag_carried() {
        let converted = result_from_call(CallToolResult::error(vec![Content::text(
            "Unknown state code",
        )]));

        assert!(converted.is_error);
        assert_eq!(converted.first_text().unwrap(), "Unknown state code");
    }
}
