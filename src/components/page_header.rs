//! Page Header Component
//!
//! Parent title plus the page's action buttons.

use leptos::prelude::*;

/// Header bar shown above a resource table
#[component]
pub fn PageHeader(
    /// Resolved parent title (empty while loading)
    #[prop(into)] title: Signal<String>,
    #[prop(into)] heading: String,
    children: Children,
) -> impl IntoView {
    let title_text = move || {
        let title = title.get();
        if title.is_empty() { "…".to_string() } else { title }
    };

    view! {
        <header class="page-header">
            <div class="page-header-titles">
                <h1 class="page-heading">{heading}</h1>
                <span class="page-subtitle">{title_text}</span>
            </div>
            <div class="page-header-actions">
                {children()}
            </div>
        </header>
    }
}
