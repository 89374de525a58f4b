//! Tasks Page
//!
//! Task table of one parent with tag filter, export and saved date.

use leptos::prelude::*;
use resource_sync::distinct_tags;

use crate::components::{DateBadge, DeleteButton, FilterModal, NameBadge, PageHeader, TaskForm};
use crate::context::AppContext;
use crate::models::Task;
use crate::resource::ResourceHandle;
use crate::route::Route;
use crate::store::{prune_task_filter, use_app_store, AppStateStoreFields};

#[component]
pub fn TasksView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let handle = ResourceHandle::<Task>::new(store, ctx, "Task");
    let (show_filter, set_show_filter) = signal(false);

    // Load when the parent changes or a reload is requested
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if let Route::Tasks(parent_id) = ctx.route.get() {
            handle.load(&parent_id);
        }
    });

    // Keep the selection within the tags still present
    Effect::new(move |_| prune_task_filter(&store));

    let tags = Signal::derive(move || store.tasks().with(|t| distinct_tags(t.records())));
    let visible = move || {
        let records = handle.records();
        store.task_filter().with(|f| f.visible(&records))
    };
    let filter_active = move || store.task_filter().with(|f| f.is_active());
    let filter_label = move || {
        if filter_active() {
            format!("Filter ({})", store.task_filter().with(|f| f.len()))
        } else {
            "Filter".to_string()
        }
    };

    let row = move |task: Task| {
        let name = task.username_label().to_string();
        let badge_name = name.clone();
        let color = Signal::derive(move || handle.color_for(&badge_name));
        let id = task.id.clone();
        let tasks = task.tasks_label().to_string();
        let notes = task.notes_label().to_string();
        let notes_title = notes.clone();
        let number = task.number_label();
        let remaining = task.remaining_work_label().to_string();
        view! {
            <tr>
                <td><NameBadge name=name color=color /></td>
                <td class="cell-text">{tasks}</td>
                <td class="cell-text notes" title=notes_title>{notes}</td>
                <td class="cell-number">{number}</td>
                <td class="cell-text">{remaining}</td>
                <td class="cell-actions">
                    <button class="icon-btn" title="Edit" on:click=move |_| handle.open_edit(&task)>"✏"</button>
                    <DeleteButton title="Delete" on_delete=move |_: ()| handle.delete(&id) />
                </td>
            </tr>
        }
    };

    view! {
        <section class="resource-page">
            <PageHeader title=Signal::derive(move || handle.title()) heading="Tasks">
                <DateBadge date=handle.date on_save=move |date: String| handle.set_date(date) />
                <button class="primary" on:click=move |_| handle.open_create()>"Add task"</button>
                <button on:click=move |_| set_show_filter.set(true)>{filter_label}</button>
                <button on:click=move |_| handle.export()>"Export"</button>
            </PageHeader>

            <Show when=move || handle.is_loading()>
                <p class="loading">"Loading…"</p>
            </Show>

            <Show when=filter_active>
                <div class="filter-chips">
                    <span class="filter-chips-label">"Filtered numbers:"</span>
                    <For
                        each=move || store.task_filter().with(|f| f.selection())
                        key=|tag| *tag
                        children=move |tag| view! {
                            <span class="filter-chip">
                                {tag}
                                <button
                                    class="icon-btn"
                                    title="Remove"
                                    on:click=move |_| store.task_filter().update(|f| f.toggle(tag))
                                >"×"</button>
                            </span>
                        }
                    />
                    <button class="link-btn" on:click=move |_| store.task_filter().update(|f| f.clear_all())>
                        "Clear all filters"
                    </button>
                </div>
            </Show>

            <table class="resource-table">
                <thead>
                    <tr>
                        <th>"Employee"</th>
                        <th>"Tasks"</th>
                        <th>"Notes"</th>
                        <th>"Number"</th>
                        <th>"Remaining work"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = visible();
                        if rows.is_empty() {
                            view! { <tr><td colspan="6" class="empty">"No tasks to show"</td></tr> }.into_any()
                        } else {
                            rows.into_iter().map(row).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>

            <TaskForm handle=handle />

            <Show when=move || show_filter.get()>
                <FilterModal tags=tags on_close=Callback::new(move |_| set_show_filter.set(false)) />
            </Show>
        </section>
    }
}
