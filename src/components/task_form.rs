//! Task Form Component
//!
//! Add / edit modal for a task row.

use leptos::prelude::*;

use crate::models::{Task, TaskField};
use crate::resource::ResourceHandle;
use crate::components::ColorPicker;

#[component]
pub fn TaskForm(handle: ResourceHandle<Task>) -> impl IntoView {
    let form = handle.form;
    let value = move |field: TaskField| form.with(|f| f.field(field));
    let username = Signal::derive(move || value(TaskField::Username).trim().to_string());
    let username_color = Signal::derive(move || handle.color_for(&username.get()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        handle.submit();
    };

    let text_input = move |field: TaskField, label: &'static str, placeholder: &'static str| {
        view! {
            <label class="field-label">{label}</label>
            <textarea
                rows="3"
                placeholder=placeholder
                prop:value=move || value(field)
                on:input=move |ev| handle.set_field(field, event_target_value(&ev))
            ></textarea>
        }
    };

    view! {
        <Show when=move || form.with(|f| f.is_open())>
            <div class="modal-backdrop" on:click=move |_| handle.close()>
                <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=submit>
                    <h2>{move || if form.with(|f| f.is_editing()) { "Edit task" } else { "Add task" }}</h2>

                    <label class="field-label">"Date"</label>
                    <input
                        type="date"
                        prop:value=move || value(TaskField::Date)
                        on:input=move |ev| handle.set_field(TaskField::Date, event_target_value(&ev))
                    />

                    <label class="field-label">"Employee name"</label>
                    <div class="name-row">
                        <input
                            type="text"
                            list="usernames-list"
                            placeholder="Enter employee name"
                            prop:value=move || value(TaskField::Username)
                            on:input=move |ev| handle.set_field(TaskField::Username, event_target_value(&ev))
                        />
                        <datalist id="usernames-list">
                            {move || handle.names().into_iter().map(|name| view! { <option value=name></option> }).collect_view()}
                        </datalist>
                        <ColorPicker
                            name=username
                            current=username_color
                            on_pick=move |color: String| handle.set_color(&username.get_untracked(), &color)
                        />
                    </div>

                    {text_input(TaskField::Tasks, "Tasks", "Enter the required tasks")}
                    {text_input(TaskField::Notes, "Notes", "Enter any additional notes")}

                    <label class="field-label">"Number"</label>
                    <input
                        type="number"
                        step="1"
                        placeholder="Enter the sequence number"
                        prop:value=move || value(TaskField::Number)
                        on:input=move |ev| handle.set_field(TaskField::Number, event_target_value(&ev))
                    />

                    {text_input(TaskField::RemainingWork, "Remaining work", "Enter the remaining work on site")}

                    <div class="modal-actions">
                        <button type="button" class="secondary" on:click=move |_| handle.close()>"Cancel"</button>
                        <button type="submit" disabled=move || form.with(|f| f.is_submitting())>
                            {move || if form.with(|f| f.is_submitting()) { "Saving…" } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
