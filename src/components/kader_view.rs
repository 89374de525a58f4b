//! Kader Page
//!
//! Roster of one parent. The list endpoint returns every entry, so the
//! parent filter runs on the client.

use leptos::prelude::*;

use crate::components::{DateBadge, DeleteButton, NameBadge, PageHeader, RosterForm};
use crate::context::AppContext;
use crate::models::RosterEntry;
use crate::resource::ResourceHandle;
use crate::route::Route;
use crate::store::use_app_store;

#[component]
pub fn KaderView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let handle = ResourceHandle::<RosterEntry>::new(use_app_store(), ctx, "Entry");

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if let Route::Kader(parent_id) = ctx.route.get() {
            handle.load(&parent_id);
        }
    });

    let row = move |entry: RosterEntry| {
        let name = entry.name_label().to_string();
        let badge_name = name.clone();
        let color = Signal::derive(move || handle.color_for(&badge_name));
        let id = entry.id.clone();
        let tasks = entry.tasks_label().to_string();
        view! {
            <tr>
                <td><NameBadge name=name color=color /></td>
                <td class="cell-text">{tasks}</td>
                <td class="cell-actions">
                    <button class="icon-btn" title="Edit" on:click=move |_| handle.open_edit(&entry)>"✏"</button>
                    <DeleteButton title="Delete" on_delete=move |_: ()| handle.delete(&id) />
                </td>
            </tr>
        }
    };

    view! {
        <section class="resource-page">
            <PageHeader title=Signal::derive(move || handle.title()) heading="Kader">
                <DateBadge date=handle.date on_save=move |date: String| handle.set_date(date) />
                <button class="primary" on:click=move |_| handle.open_create()>"Add entry"</button>
            </PageHeader>

            <Show when=move || handle.is_loading()>
                <p class="loading">"Loading…"</p>
            </Show>

            <table class="resource-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Tasks"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = handle.records();
                        if rows.is_empty() {
                            view! { <tr><td colspan="3" class="empty">"No entries yet"</td></tr> }.into_any()
                        } else {
                            rows.into_iter().map(row).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>

            <RosterForm handle=handle />
        </section>
    }
}
