//! Color Picker Component
//!
//! Palette buttons assigning a badge color to the name being edited.

use leptos::prelude::*;
use resource_sync::{contrast_color, PALETTE};

#[component]
pub fn ColorPicker(
    /// Name the color is stored under
    #[prop(into)] name: Signal<String>,
    /// Currently stored color for `name`
    #[prop(into)] current: Signal<String>,
    #[prop(into)] on_pick: Callback<String>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let disabled = move || name.with(|n| n.trim().is_empty());

    view! {
        <div class="color-picker">
            <button
                type="button"
                class="color-toggle"
                title="Pick a name color"
                disabled=disabled
                style=move || format!("background-color: {};", current.get())
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "🎨"
            </button>
            <Show when=move || open.get() && !disabled()>
                <div class="color-options">
                    {PALETTE.iter().map(|color| {
                        let hex = color.hex;
                        view! {
                            <button
                                type="button"
                                class=move || if current.get() == hex { "color-swatch active" } else { "color-swatch" }
                                title=color.label
                                style=format!("background-color: {}; color: {};", hex, contrast_color(hex))
                                on:click=move |_| {
                                    on_pick.run(hex.to_string());
                                    set_open.set(false);
                                }
                            >
                                {color.label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
