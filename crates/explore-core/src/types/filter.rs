//! Filter selection and derived filter options

use serde::{Deserialize, Serialize};

/// The user's current tag and lifecycle choice
///
/// Both sides are plain ordered sequences. Nothing here de-duplicates or
/// validates; whatever the presentation surface hands in is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    pub tags: Vec<String>,
    pub lifecycle: Vec<String>,
}

impl FilterSelection {
    pub fn new(tags: Vec<String>, lifecycle: Vec<String>) -> Self {
        Self { tags, lifecycle }
    }

    /// True when neither tags nor lifecycle narrow the result set
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.lifecycle.is_empty()
    }

    /// The filter object sent to the catalog
    ///
    /// Always built, even for an empty selection; catalogs treat empty sets
    /// as "no filter".
    pub fn to_filter(&self) -> ToolsFilter {
        ToolsFilter {
            tags: Some(self.tags.clone()),
            lifecycle: Some(self.lifecycle.clone()),
        }
    }
}

/// Filter argument of the catalog `get_tools` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Vec<String>>,
}

impl ToolsFilter {
    /// Tags to match, empty when unset
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// Lifecycles to match, empty when unset
    pub fn lifecycle(&self) -> &[String] {
        self.lifecycle.as_deref().unwrap_or(&[])
    }

    /// True when the filter would not narrow anything
    pub fn is_unrestricted(&self) -> bool {
        self.tags().is_empty() && self.lifecycle().is_empty()
    }
}

/// Every tag and lifecycle value available for filtering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub tags: Vec<String>,
    pub lifecycles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_still_builds_filter() {
        let selection = FilterSelection::default();
        assert!(selection.is_empty());

        let filter = selection.to_filter();
        assert_eq!(filter.tags, Some(vec![]));
        assert_eq!(filter.lifecycle, Some(vec![]));
        assert!(filter.is_unrestricted());
    }

    #[test]
    fn test_selection_keeps_duplicates() {
        let selection = FilterSelection::new(
            vec!["web".into(), "web".into()],
            vec!["experimental".into()],
        );
        let filter = selection.to_filter();
        assert_eq!(filter.tags(), ["web", "web"]);
        assert_eq!(filter.lifecycle(), ["experimental"]);
        assert!(!filter.is_unrestricted());
    }
}
