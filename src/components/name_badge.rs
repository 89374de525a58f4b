//! Name Badge Component

use leptos::prelude::*;
use resource_sync::contrast_color;

/// Name on a colored background with readable text
#[component]
pub fn NameBadge(
    #[prop(into)] name: String,
    #[prop(into)] color: Signal<String>,
) -> impl IntoView {
    let style = move || {
        let background = color.get();
        format!("background-color: {}; color: {};", background, contrast_color(&background))
    };

    view! {
        <span class="name-badge" style=style>{name}</span>
    }
}
