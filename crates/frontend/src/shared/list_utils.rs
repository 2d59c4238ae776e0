/// List helpers shared by list pages: search, sort and match highlighting
use leptos::prelude::*;
use std::cmp::Ordering;

/// Rows that can be matched against the search box text
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Rows that can be ordered by a named field
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort order value split into field and direction.
///
/// `"-modified"` sorts by `modified` descending, `"name"` by `name` ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<'a> {
    pub field: &'a str,
    pub ascending: bool,
}

impl<'a> SortKey<'a> {
    pub fn parse(value: &'a str) -> Self {
        match value.strip_prefix('-') {
            Some(field) => Self {
                field,
                ascending: false,
            },
            None => Self {
                field: value,
                ascending: true,
            },
        }
    }
}

/// Stable sort by the given key
pub fn sort_list<T: Sortable>(items: &mut [T], key: SortKey<'_>) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, key.field);
        if key.ascending { cmp } else { cmp.reverse() }
    });
}

/// Keep rows matching the filter; a filter `is_empty` calls blank keeps everything
pub fn filter_list<T: Searchable>(
    items: Vec<T>,
    filter: Option<&str>,
    is_empty: fn(Option<&str>) -> bool,
) -> Vec<T> {
    match filter {
        Some(f) if !is_empty(Some(f)) => {
            let f = f.trim();
            items.into_iter().filter(|item| item.matches_filter(f)).collect()
        }
        _ => items,
    }
}

/// Highlight occurrences of the filter in text (case-insensitive, ASCII folding)
pub fn highlight_matches(text: &str, filter: Option<&str>) -> AnyView {
    let filter = match filter.map(str::trim) {
        Some(f) if !f.is_empty() => f,
        _ => return view! { <span>{text.to_string()}</span> }.into_any(),
    };

    // ASCII lowering keeps byte offsets of `text` and `text_lower` aligned
    let filter_lower = filter.to_ascii_lowercase();
    let text_lower = text.to_ascii_lowercase();

    if !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <span class="search-highlight">{text[actual_pos..match_end].to_string()}</span>
        }.into_any());

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::empty::is_empty;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, u32);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.contains(filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.0.cmp(other.0),
                "count" => self.1.cmp(&other.1),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![Row("nginx", 3), Row("apache", 10), Row("mysql", 1)]
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(
            SortKey::parse("-modified"),
            SortKey {
                field: "modified",
                ascending: false,
            }
        );
        assert_eq!(
            SortKey::parse("name"),
            SortKey {
                field: "name",
                ascending: true,
            }
        );
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let mut items = rows();
        sort_list(&mut items, SortKey::parse("name"));
        assert_eq!(items[0].0, "apache");

        sort_list(&mut items, SortKey::parse("-count"));
        assert_eq!(items.iter().map(|r| r.1).collect::<Vec<_>>(), vec![10, 3, 1]);
    }

    #[test]
    fn test_unknown_field_keeps_order() {
        let mut items = rows();
        sort_list(&mut items, SortKey::parse("bogus"));
        assert_eq!(items, rows());
    }

    #[test]
    fn test_filter_list() {
        assert_eq!(filter_list(rows(), Some("sql"), is_empty), vec![Row("mysql", 1)]);
        assert_eq!(filter_list(rows(), Some("  "), is_empty).len(), 3);
        assert_eq!(filter_list(rows(), None, is_empty).len(), 3);
    }

    #[test]
    fn test_filter_list_uses_given_predicate() {
        fn short_is_empty(value: Option<&str>) -> bool {
            value.map_or(true, |v| v.trim().len() < 3)
        }
        assert_eq!(filter_list(rows(), Some("sq"), short_is_empty).len(), 3);
        assert_eq!(
            filter_list(rows(), Some("sql"), short_is_empty),
            vec![Row("mysql", 1)]
        );
    }
}
