pub mod search_bar;
pub mod ui;

pub use search_bar::SearchBar;
