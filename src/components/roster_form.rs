//! Roster Form Component
//!
//! Add / edit modal for a Kader entry.

use leptos::prelude::*;

use crate::models::{RosterEntry, RosterField};
use crate::resource::ResourceHandle;
use crate::components::ColorPicker;

#[component]
pub fn RosterForm(handle: ResourceHandle<RosterEntry>) -> impl IntoView {
    let form = handle.form;
    let value = move |field: RosterField| form.with(|f| f.field(field));
    let name = Signal::derive(move || value(RosterField::Name).trim().to_string());
    let name_color = Signal::derive(move || handle.color_for(&name.get()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        handle.submit();
    };

    view! {
        <Show when=move || form.with(|f| f.is_open())>
            <div class="modal-backdrop" on:click=move |_| handle.close()>
                <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=submit>
                    <h2>{move || if form.with(|f| f.is_editing()) { "Edit entry" } else { "Add entry" }}</h2>

                    <label class="field-label">"Name"</label>
                    <div class="name-row">
                        <input
                            type="text"
                            placeholder="Enter a name"
                            prop:value=move || value(RosterField::Name)
                            on:input=move |ev| handle.set_field(RosterField::Name, event_target_value(&ev))
                        />
                        <ColorPicker
                            name=name
                            current=name_color
                            on_pick=move |color: String| handle.set_color(&name.get_untracked(), &color)
                        />
                    </div>

                    <label class="field-label">"Tasks"</label>
                    <textarea
                        rows="4"
                        placeholder="Enter the tasks"
                        prop:value=move || value(RosterField::Tasks)
                        on:input=move |ev| handle.set_field(RosterField::Tasks, event_target_value(&ev))
                    ></textarea>

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
