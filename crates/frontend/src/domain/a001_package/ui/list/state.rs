use crate::shared::config::load_config;
use crate::shared::list_utils::{filter_list, sort_list, SortKey};
use crate::shared::search_state::{ListData, SearchState};
use contracts::domain::a001_package::aggregate::Package;
use leptos::prelude::*;

use super::catalog::load_catalog;

#[derive(Clone, Debug)]
pub struct PackageListData {
    catalog: Vec<Package>,

    // Filters
    pub list_filter: Option<String>,
    pub platform: Option<String>,

    // Sorting
    pub sort_order: String,

    /// Rows after the last refresh
    pub rows: Vec<Package>,

    is_empty: fn(Option<&str>) -> bool,
}

impl PackageListData {
    pub fn new(
        catalog: Vec<Package>,
        sort_order: String,
        is_empty: fn(Option<&str>) -> bool,
    ) -> Self {
        let mut data = Self {
            catalog,
            list_filter: None,
            platform: None,
            sort_order,
            rows: Vec::new(),
            is_empty,
        };
        data.refresh();
        data
    }
}

impl ListData for PackageListData {
    fn list_filter(&self) -> Option<&str> {
        self.list_filter.as_deref()
    }

    fn set_list_filter(&mut self, filter: Option<String>) {
        self.list_filter = filter;
    }

    fn refresh(&mut self) {
        let mut rows = filter_list(
            self.catalog.clone(),
            self.list_filter.as_deref(),
            self.is_empty,
        );
        if let Some(platform) = &self.platform {
            rows.retain(|p| p.supports_platform(platform));
        }
        sort_list(&mut rows, SortKey::parse(&self.sort_order));
        log::debug!(
            "package list refreshed: {} of {} rows, sort '{}'",
            rows.len(),
            self.catalog.len(),
            self.sort_order
        );
        self.rows = rows;
    }
}

pub fn create_state() -> (RwSignal<SearchState>, RwSignal<PackageListData>) {
    let mut search = SearchState::from_config(load_config());
    let list = PackageListData::new(load_catalog(), search.sort_order(), search.empty_check());
    (RwSignal::new(search), RwSignal::new(list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::search::{SearchConfig, SortOption};
    use crate::shared::empty::is_empty;
    use crate::shared::search_state::ENTER_KEY_CODE;

    fn names(list: &PackageListData) -> Vec<String> {
        list.rows.iter().map(Package::full_name).collect()
    }

    fn list(sort_order: &str) -> PackageListData {
        PackageListData::new(load_catalog(), sort_order.to_string(), is_empty)
    }

    #[test]
    fn test_initial_refresh_sorts_by_name() {
        let list = list("name");
        assert_eq!(list.rows.len(), 6);
        assert_eq!(list.rows[0].name, "elasticsearch");
    }

    #[test]
    fn test_descending_downloads() {
        let list = list("-download_count");
        assert_eq!(list.rows[0].full_name(), "geerlingguy.nginx");
        assert_eq!(list.rows[5].full_name(), "bennojoy.ntp");
    }

    #[test]
    fn test_filter_and_platform() {
        let mut list = list("namespace");
        list.set_list_filter(Some("NGINX".to_string()));
        list.refresh();
        assert_eq!(names(&list), vec!["geerlingguy.nginx", "jdauphant.nginx"]);

        list.platform = Some("fedora".to_string());
        list.refresh();
        assert_eq!(names(&list), vec!["jdauphant.nginx"]);
    }

    #[test]
    fn test_search_predicate_reaches_list() {
        fn short_is_empty(value: Option<&str>) -> bool {
            value.map_or(true, |v| v.trim().len() < 3)
        }
        let mut search = SearchState::new(
            SearchConfig {
                place_holder: String::new(),
                sort_options: vec![SortOption::new("Name", "name")],
                sort_order: None,
                show_search_icon: true,
                platforms: None,
            },
            short_is_empty,
        );
        let mut list =
            PackageListData::new(load_catalog(), search.sort_order(), search.empty_check());

        list.set_list_filter(Some("ng".to_string()));
        search.apply_filter(ENTER_KEY_CODE, &mut list);
        assert!(search.show_search_icon);
        assert_eq!(list.rows.len(), 6);
    }

    #[test]
    fn test_search_bar_drives_list() {
        let mut search = SearchState::from_config(SearchConfig {
            place_holder: "Search".to_string(),
            sort_options: vec![SortOption::new("Name", "name")],
            sort_order: None,
            show_search_icon: true,
            platforms: None,
        });
        let mut list = list("name");

        list.set_list_filter(Some("mysql".to_string()));
        search.apply_filter(ENTER_KEY_CODE, &mut list);
        assert_eq!(names(&list), vec!["geerlingguy.mysql"]);
        assert!(!search.show_search_icon);

        search.toggle_search_icon(&mut list);
        assert!(search.show_search_icon);
        assert_eq!(list.list_filter, None);
        assert_eq!(list.rows.len(), 6);
    }
}
