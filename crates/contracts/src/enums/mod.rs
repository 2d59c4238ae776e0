pub mod package_sort_order;

pub use package_sort_order::PackageSortOrder;
