use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::search_state::{ListData, SearchState, ENTER_KEY_CODE};
use leptos::prelude::*;

/// Search box with search/clear icon, sort drop-down and optional platform filter
///
/// Typing only edits the list filter; the list is refreshed on Enter or when
/// the icon is clicked.
#[component]
pub fn SearchBar<L>(
    /// Search bar state
    state: RwSignal<SearchState>,
    /// List driven by the search box
    list: RwSignal<L>,
    /// Called with the new sort order after the drop-down changed
    #[prop(optional)]
    on_sort_change: Option<Callback<String>>,
    /// Called with the selected platform (`None` for all platforms)
    #[prop(optional)]
    on_platform_change: Option<Callback<Option<String>>>,
) -> impl IntoView
where
    L: ListData + Send + Sync + 'static,
{
    let placeholder = move || state.with(|s| s.search_place_holder.clone());
    let filter_value = move || list.with(|l| l.list_filter().unwrap_or_default().to_string());

    let sort_options = Signal::derive(move || {
        state.with(|s| {
            s.sort_options()
                .iter()
                .map(|o| (o.value.clone(), o.label.clone()))
                .collect::<Vec<_>>()
        })
    });
    let sort_value = Signal::derive(move || {
        state.with(|s| s.sort.selected().map(|o| o.value.clone()).unwrap_or_default())
    });

    let platform_options = Signal::derive(move || {
        state.with(|s| {
            s.platforms
                .iter()
                .map(|p| (p.clone(), p.clone()))
                .collect::<Vec<_>>()
        })
    });
    let platform_value =
        Signal::derive(move || state.with(|s| s.platform.clone().unwrap_or_default()));

    let handle_sort_change = Callback::new(move |value: String| {
        let mut sort_order = None;
        state.update(|s| {
            if s.set_sort_order(&value) {
                sort_order = Some(s.sort_order());
            }
        });
        if let (Some(order), Some(handler)) = (sort_order, on_sort_change) {
            handler.run(order);
        }
    });

    let handle_platform_change = Callback::new(move |value: String| {
        state.update(|s| s.set_platform(Some(value)));
        if let Some(handler) = on_platform_change {
            handler.run(state.with_untracked(|s| s.platform.clone()));
        }
    });

    let toggle_search_icon = move |_| {
        list.update(|l| state.update(|s| s.toggle_search_icon(l)));
    };

    view! {
        <div class="search-bar">
            <div class="search-bar__input">
                <input
                    type="text"
                    class="form__input"
                    placeholder=placeholder
                    prop:value=filter_value
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        // the list itself only changes on refresh
                        list.update_untracked(|l| l.set_list_filter(Some(value)));
                    }
                    on:keydown=move |ev| {
                        let key_code = ev.key_code();
                        if key_code == ENTER_KEY_CODE {
                            list.update(|l| state.update(|s| s.apply_filter(key_code, l)));
                        }
                    }
                />
                <button
                    type="button"
                    class="search-bar__icon"
                    title=move || if state.with(|s| s.show_search_icon) { "Search" } else { "Clear" }
                    on:click=toggle_search_icon
                >
                    {move || if state.with(|s| s.show_search_icon) { icon("search") } else { icon("x") }}
                </button>
            </div>
            <Select
                label="Sort by"
                value=sort_value
                options=sort_options
                on_change=handle_sort_change
                class="search-bar__sort"
            />
            <Show when=move || state.with(|s| s.show_platforms)>
                <Select
                    label="Platform"
                    value=platform_value
                    options=platform_options
                    on_change=handle_platform_change
                    empty_option="All platforms"
                    class="search-bar__platforms"
                />
            </Show>
        </div>
    }
}
