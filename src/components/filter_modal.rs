//! Filter Modal Component
//!
//! Toggles the tag (number) selection of the tasks table.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterModal(
    /// Distinct tags of the current list
    #[prop(into)] tags: Signal<Vec<i64>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let filter = use_app_store().task_filter();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h2>"Filter by number"</h2>
                <div class="filter-bulk">
                    <button type="button" on:click=move |_| filter.update(|f| f.select_all(&tags.get_untracked()))>
                        "Select all"
                    </button>
                    <button type="button" class="secondary" on:click=move |_| filter.update(|f| f.clear_all())>
                        "Clear all"
                    </button>
                </div>
                <Show
                    when=move || !tags.with(|t| t.is_empty())
                    fallback=|| view! { <p class="empty">"No numbers to filter by"</p> }
                >
                    <div class="filter-tags">
                        <For
                            each=move || tags.get()
                            key=|tag| *tag
                            children=move |tag| {
                                let selected = move || filter.with(|f| f.is_selected(tag));
                                view! {
                                    <button
                                        type="button"
                                        class=move || if selected() { "filter-tag active" } else { "filter-tag" }
                                        on:click=move |_| filter.update(|f| f.toggle(tag))
                                    >
                                        {tag}
                                    </button>
                                }
                            }
                        />
                    </div>
                </Show>
                <div class="modal-actions">
                    <button type="button" on:click=move |_| on_close.run(())>"Done"</button>
                </div>
            </div>
        </div>
    }
}
