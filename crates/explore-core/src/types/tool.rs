//! Tool descriptor types

use serde::{Deserialize, Serialize};

/// A single entry in the tool catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Display title
    pub title: String,
    /// Short description shown on the card
    #[serde(default)]
    pub description: String,
    /// Link to the tool
    pub url: String,
    /// Optional image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Tags, in catalog order; duplicates are allowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Single lifecycle label, e.g. "experimental"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<String>,
}

impl ToolDescriptor {
    /// Create a descriptor with no image, tags or lifecycle
    pub fn new(title: impl Into<String>, description: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            image: None,
            tags: None,
            lifecycle: None,
        }
    }

    /// Set the image URL
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the lifecycle
    pub fn with_lifecycle(mut self, lifecycle: impl Into<String>) -> Self {
        self.lifecycle = Some(lifecycle.into());
        self
    }

    /// Tags as a slice (empty when the tool has none)
    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

/// Response body of the catalog `tools` endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsResponse {
    #[serde(default)]
    pub tools: Vec<ToolDescriptor>,
}

impl ToolsResponse {
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_tool() {
        let json = r#"{"tools":[{"title":"Lighthouse","url":"/lighthouse"}]}"#;
        let response: ToolsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.tools.len(), 1);
        let tool = &response.tools[0];
        assert_eq!(tool.title, "Lighthouse");
        assert_eq!(tool.description, "");
        assert!(tool.tags.is_none());
        assert!(tool.tag_list().is_empty());
        assert!(tool.lifecycle.is_none());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let tool = ToolDescriptor::new("Tech Radar", "Radar", "/tech-radar")
            .with_tags(["standards"]);
        let value = serde_json::to_value(&tool).unwrap();

        assert_eq!(value["tags"], serde_json::json!(["standards"]));
        assert!(value.get("image").is_none());
        assert!(value.get("lifecycle").is_none());
    }
}
