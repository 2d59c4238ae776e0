/// Blank check used by the search bar for the list filter.
///
/// `None`, `""` and whitespace-only strings are empty.
pub fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(is_empty(None));
        assert!(is_empty(Some("")));
        assert!(is_empty(Some("   ")));
        assert!(is_empty(Some("\t\n")));
    }

    #[test]
    fn test_non_blank_values() {
        assert!(!is_empty(Some("nginx")));
        assert!(!is_empty(Some("  a  ")));
    }
}
