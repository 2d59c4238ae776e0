mod catalog;
pub mod state;

use crate::shared::components::SearchBar;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, Searchable, Sortable};
use crate::shared::search_state::ListData;
use contracts::domain::a001_package::aggregate::Package;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Package {
    fn matches_filter(&self, filter: &str) -> bool {
        // same folding as `highlight_matches`
        let filter_lower = filter.to_ascii_lowercase();

        self.namespace.to_ascii_lowercase().contains(&filter_lower)
            || self.name.to_ascii_lowercase().contains(&filter_lower)
            || self.description.to_ascii_lowercase().contains(&filter_lower)
    }
}

impl Sortable for Package {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self
                .name
                .to_lowercase()
                .cmp(&other.name.to_lowercase())
                .then_with(|| self.namespace.to_lowercase().cmp(&other.namespace.to_lowercase())),
            "namespace" => self
                .namespace
                .to_lowercase()
                .cmp(&other.namespace.to_lowercase())
                .then_with(|| self.name.to_lowercase().cmp(&other.name.to_lowercase())),
            "download_count" => self.download_count.cmp(&other.download_count),
            // ISO timestamps order lexicographically
            "modified" => self.modified.cmp(&other.modified),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn PackageListPage() -> impl IntoView {
    let (search, list) = state::create_state();

    let on_sort_change = Callback::new(move |sort_order: String| {
        list.update(|l| {
            l.sort_order = sort_order;
            l.refresh();
        });
    });

    let on_platform_change = Callback::new(move |platform: Option<String>| {
        list.update(|l| {
            l.platform = platform;
            l.refresh();
        });
    });

    // highlight only what the current rows were filtered by
    let applied_filter = Memo::new(move |_| list.with(|l| l.list_filter.clone()));

    view! {
        <div class="page">
            <div class="page__header">
                {icon("package")}
                <h2>"Packages"</h2>
            </div>
            <SearchBar
                state=search
                list=list
                on_sort_change=on_sort_change
                on_platform_change=on_platform_change
            />
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Platforms"</th>
                        <th class="table__cell--right">"Downloads"</th>
                        <th>"Last Imported"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.with(|l| l.rows.clone())
                        key=|p| p.full_name()
                        children=move |p: Package| {
                            let full_name = p.full_name();
                            let description = p.description.clone();
                            let modified = p.modified.split('T').next().unwrap_or_default().to_string();
                            view! {
                                <tr>
                                    <td>{move || highlight_matches(&full_name, applied_filter.get().as_deref())}</td>
                                    <td>{move || highlight_matches(&description, applied_filter.get().as_deref())}</td>
                                    <td>{p.platforms.join(", ")}</td>
                                    <td class="table__cell--right">{p.download_count}</td>
                                    <td>{modified}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || list.with(|l| l.rows.is_empty())>
                <p class="page__empty">"No packages match your search."</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str) -> Package {
        Package {
            namespace: "acme".to_string(),
            name: name.to_string(),
            description: "Demo role".to_string(),
            download_count: 0,
            platforms: Vec::new(),
            modified: "2018-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_matches_ignore_ascii_case() {
        let p = package("Nginx");
        assert!(p.matches_filter("NGINX"));
        assert!(p.matches_filter("acme"));
        assert!(p.matches_filter("demo ROLE"));
        assert!(!p.matches_filter("mysql"));
    }

    #[test]
    fn test_non_ascii_case_matches_like_highlighting() {
        let p = package("Über");
        assert!(!p.matches_filter("über"));
        assert!(p.matches_filter("Über"));
        assert!(p.matches_filter("ÜBER"));
    }
}
