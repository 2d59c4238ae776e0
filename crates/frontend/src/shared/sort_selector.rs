use contracts::shared::search::SortOption;

/// Current sort order of a list, chosen from a fixed option list.
///
/// The selection is either unset or the index of one option. Reading it with
/// [`SortSelector::current`] never yields "nothing": an unset selection falls
/// back to the first option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSelector {
    options: Vec<SortOption>,
    selected: Option<usize>,
}

impl SortSelector {
    /// Build the selector and try to select `desired`.
    ///
    /// An unknown or missing `desired` value leaves the selection unset.
    pub fn new(options: Vec<SortOption>, desired: Option<&str>) -> Self {
        let mut selector = Self {
            options,
            selected: None,
        };
        if let Some(value) = desired {
            selector.set_current(value);
        }
        selector
    }

    /// Select the first option whose value equals `value`.
    ///
    /// Returns `false` and keeps the previous selection when nothing matches.
    pub fn set_current(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// Value of the current option, forcing the first option when unset.
    ///
    /// Returns an empty string only for an empty option list.
    pub fn current(&mut self) -> &str {
        let index = match self.selected {
            Some(index) if !self.options[index].value.is_empty() => index,
            _ => {
                if self.options.is_empty() {
                    return "";
                }
                self.selected = Some(0);
                0
            }
        };
        &self.options[index].value
    }

    /// Selected option without applying the fallback
    pub fn selected(&self) -> Option<&SortOption> {
        self.selected.map(|index| &self.options[index])
    }

    pub fn options(&self) -> &[SortOption] {
        &self.options
    }
}
