use contracts::shared::search::{load_search_config, SearchConfig};

/// Id of the `<script type="application/json">` block holding the search config
pub const SEARCH_CONFIG_ELEMENT_ID: &str = "search-config";

/// Read the raw config JSON embedded in the host page, if any
fn read_page_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(SEARCH_CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

/// Load the search bar configuration.
///
/// Search order:
/// 1. JSON block in the host page
/// 2. Falls back to the embedded default config
pub fn load_config() -> SearchConfig {
    let page_config = read_page_config();
    if page_config.is_some() {
        log::info!("Loading search config from #{}", SEARCH_CONFIG_ELEMENT_ID);
    } else {
        log::info!("Using default embedded search configuration");
    }
    resolve_config(page_config.as_deref())
}

/// Parse the page config; invalid JSON or an empty option list yields the default
pub fn resolve_config(page_config: Option<&str>) -> SearchConfig {
    match load_search_config(page_config) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid search config, using default: {:#}", err);
            default_config()
        }
    }
}

fn default_config() -> SearchConfig {
    match load_search_config(None) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Embedded search config is invalid: {:#}", err);
            SearchConfig {
                place_holder: String::new(),
                sort_options: contracts::enums::PackageSortOrder::sort_options(),
                sort_order: None,
                show_search_icon: true,
                platforms: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_json_uses_default() {
        assert_eq!(resolve_config(Some("{ not json")), default_config());
    }

    #[test]
    fn test_empty_sort_options_use_default() {
        let config = resolve_config(Some(r#"{"sortOptions":[]}"#));
        assert_eq!(config, default_config());
        assert_eq!(config.sort_options.len(), 4);
    }

    #[test]
    fn test_valid_page_config_kept() {
        let json = r#"{
            "placeHolder": "Search roles",
            "sortOptions": [{ "label": "Date", "value": "-created" }],
            "sortOrder": "-created",
            "showSearchIcon": false
        }"#;
        let config = resolve_config(Some(json));
        assert_eq!(config.place_holder, "Search roles");
        assert_eq!(config.sort_options.len(), 1);
        assert_eq!(config.sort_options[0].value, "-created");
        assert_eq!(config.sort_order.as_deref(), Some("-created"));
        assert!(!config.show_search_icon);
        assert_eq!(config.platforms, None);
    }

    #[test]
    fn test_missing_page_config_uses_default() {
        assert_eq!(resolve_config(None).place_holder, "Search packages");
    }
}
