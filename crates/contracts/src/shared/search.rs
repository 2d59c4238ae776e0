use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// One entry of the sort drop-down
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub label: String,
    pub value: String,
}

impl SortOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Parameters of the search bar of a list page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    #[serde(default)]
    pub place_holder: String,
    /// Must not be empty; the first entry is the fallback sort order
    pub sort_options: Vec<SortOption>,
    #[serde(default)]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub show_search_icon: bool,
    /// When present the platform filter is shown
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
}

/// Default configuration embedded in the binary
pub const DEFAULT_SEARCH_CONFIG: &str = r#"
{
    "placeHolder": "Search packages",
    "sortOptions": [
        { "label": "Name", "value": "name" },
        { "label": "Author", "value": "namespace" },
        { "label": "Downloads", "value": "-download_count" },
        { "label": "Last Imported", "value": "-modified" }
    ],
    "sortOrder": "name",
    "showSearchIcon": true,
    "platforms": ["Debian", "EL", "Fedora", "Ubuntu"]
}
"#;

impl SearchConfig {
    /// Rejects configurations the search bar cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.sort_options.is_empty() {
            bail!("sortOptions must contain at least one option");
        }
        Ok(())
    }
}

/// Parse and validate a JSON search configuration
pub fn parse_search_config(json: &str) -> anyhow::Result<SearchConfig> {
    let config: SearchConfig =
        serde_json::from_str(json).context("search config is not valid JSON")?;
    config.validate()?;
    Ok(config)
}

/// Load the search configuration
///
/// Uses `source` when given, otherwise the embedded default.
pub fn load_search_config(source: Option<&str>) -> anyhow::Result<SearchConfig> {
    match source {
        Some(json) => parse_search_config(json),
        None => parse_search_config(DEFAULT_SEARCH_CONFIG),
    }
}
