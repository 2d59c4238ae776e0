use crate::shared::search::SortOption;

/// Sort orders offered by the package search page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageSortOrder {
    Name,
    Namespace,
    Downloads,
    LastImported,
}

impl PackageSortOrder {
    /// Sort key sent to the list; a leading `-` means descending
    pub fn code(&self) -> &'static str {
        match self {
            PackageSortOrder::Name => "name",
            PackageSortOrder::Namespace => "namespace",
            PackageSortOrder::Downloads => "-download_count",
            PackageSortOrder::LastImported => "-modified",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PackageSortOrder::Name => "Name",
            PackageSortOrder::Namespace => "Author",
            PackageSortOrder::Downloads => "Downloads",
            PackageSortOrder::LastImported => "Last Imported",
        }
    }

    pub fn all() -> Vec<PackageSortOrder> {
        vec![
            PackageSortOrder::Name,
            PackageSortOrder::Namespace,
            PackageSortOrder::Downloads,
            PackageSortOrder::LastImported,
        ]
    }

    /// Default option list for the sort drop-down, in display order
    pub fn sort_options() -> Vec<SortOption> {
        Self::all()
            .into_iter()
            .map(|order| SortOption::new(order.display_name(), order.code()))
            .collect()
    }
}
