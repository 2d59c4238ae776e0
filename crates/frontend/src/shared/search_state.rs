use crate::shared::empty;
use crate::shared::sort_selector::SortSelector;
use contracts::shared::search::{SearchConfig, SortOption};

/// `keyCode` of the Enter key
pub const ENTER_KEY_CODE: u32 = 13;

/// List collaborator driven by the search bar
pub trait ListData {
    /// Text typed into the search box
    fn list_filter(&self) -> Option<&str>;

    fn set_list_filter(&mut self, filter: Option<String>);

    /// Re-apply filter and sort order to the list
    fn refresh(&mut self);
}

/// View state of the search bar of a list page
#[derive(Debug, Clone)]
pub struct SearchState {
    pub search_place_holder: String,
    pub sort: SortSelector,
    pub show_search_icon: bool,
    pub platforms: Vec<String>,
    pub show_platforms: bool,
    /// Selected platform filter, `None` means all platforms
    pub platform: Option<String>,
    is_empty: fn(Option<&str>) -> bool,
}

impl SearchState {
    pub fn new(config: SearchConfig, is_empty: fn(Option<&str>) -> bool) -> Self {
        let sort = SortSelector::new(config.sort_options, config.sort_order.as_deref());
        let show_platforms = config.platforms.is_some();

        Self {
            search_place_holder: config.place_holder,
            sort,
            show_search_icon: config.show_search_icon,
            platforms: config.platforms.unwrap_or_default(),
            show_platforms,
            platform: None,
            is_empty,
        }
    }

    pub fn from_config(config: SearchConfig) -> Self {
        Self::new(config, empty::is_empty)
    }

    /// Blank check this state was built with, for list filtering
    pub fn empty_check(&self) -> fn(Option<&str>) -> bool {
        self.is_empty
    }

    /// Select the sort option matching `value`; `false` when there is none
    pub fn set_sort_order(&mut self, value: &str) -> bool {
        let found = self.sort.set_current(value);
        if !found {
            log::debug!("sort order '{}' is not one of the sort options", value);
        }
        found
    }

    /// Current sort order value, never empty while options exist
    pub fn sort_order(&mut self) -> String {
        self.sort.current().to_string()
    }

    pub fn sort_options(&self) -> &[SortOption] {
        self.sort.options()
    }

    /// Select a platform filter; a blank value clears it
    pub fn set_platform(&mut self, platform: Option<String>) {
        let is_empty = self.is_empty;
        self.platform = platform.filter(|p| !is_empty(Some(p.as_str())));
    }

    /// Search/clear icon clicked
    pub fn toggle_search_icon<L: ListData + ?Sized>(&mut self, list: &mut L) {
        if self.show_search_icon && !(self.is_empty)(list.list_filter()) {
            // typed a value and clicked search
            self.show_search_icon = false;
        } else if !self.show_search_icon {
            // clicked clear
            list.set_list_filter(None);
            self.show_search_icon = true;
        }
        list.refresh();
    }

    /// Key pressed in the search box; only Enter starts the search
    pub fn apply_filter<L: ListData + ?Sized>(&mut self, key_code: u32, list: &mut L) {
        if key_code != ENTER_KEY_CODE {
            return;
        }
        list.refresh();
        // a value was entered: show clear instead of search
        self.show_search_icon = (self.is_empty)(list.list_filter());
    }
}
