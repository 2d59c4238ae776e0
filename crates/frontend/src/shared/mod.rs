pub mod components;
pub mod config;
pub mod empty;
pub mod icons;
pub mod list_utils;
pub mod search_state;
pub mod sort_selector;
