//! Date Badge Component
//!
//! Shows the date saved for the current parent and edits it in a small modal.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn DateBadge(
    #[prop(into)] date: Signal<String>,
    #[prop(into)] on_save: Callback<String>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let open = move |_| {
        set_draft.set(date.get_untracked());
        set_editing.set(true);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run(draft.get_untracked());
        set_editing.set(false);
    };

    view! {
        <div class="date-badge">
            <span class="date-text">{move || date.get()}</span>
            <button class="icon-btn" title="Edit date" on:click=open>"📅"</button>
        </div>
        <Show when=move || editing.get()>
            <div class="modal-backdrop" on:click=move |_| set_editing.set(false)>
                <form class="modal small" on:click=|ev| ev.stop_propagation() on:submit=save>
                    <h2>"Edit date"</h2>
                    <label class="field-label">"Date"</label>
                    <input
                        type="date"
                        required
                        prop:value=move || draft.get()
                        on:input=move |ev| {
                            if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                                set_draft.set(input.value());
                            }
                        }
                    />
                    <div class="modal-actions">
                        <button type="button" class="secondary" on:click=move |_| set_editing.set(false)>"Cancel"</button>
                        <button type="submit">"Save"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
