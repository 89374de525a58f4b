//! Delete Button Component
//!
//! Row-level delete action. The confirmation dialog is raised by the
//! resource handle, so a click alone never deletes anything.

use leptos::prelude::*;

/// Delete button for a table row
///
/// # Arguments
/// * `title` - Tooltip text
/// * `on_delete` - Callback that asks for confirmation and deletes
#[component]
pub fn DeleteButton(
    #[prop(into)] title: String,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="icon-btn delete"
            title=title
            on:click=move |ev| {
                ev.stop_propagation();
                on_delete.run(());
            }
        >
            "🗑"
        </button>
    }
}
