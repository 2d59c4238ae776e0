use crate::domain::a001_package::ui::list::PackageListPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <PackageListPage />
    }
}
