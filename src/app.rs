//! Taskboard Frontend App
//!
//! Picks the Tasks or Kader page from the location hash.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::browser;
use crate::components::{KaderView, TasksView, ToastStack};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::route::Route;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = HttpApi::new(&config, &browser::origin());
    let ctx = AppContext::new(config, api, Route::parse(&browser::location_hash()));

    // Provide context to all children
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        let route = Route::parse(&browser::location_hash());
        log::debug!("Navigated to {:?}", route);
        ctx.navigate(route);
    });

    view! {
        <main class="app-layout">
            {move || match ctx.route.get() {
                Route::Tasks(_) => view! { <TasksView /> }.into_any(),
                Route::Kader(_) => view! { <KaderView /> }.into_any(),
                Route::NotFound => view! {
                    <div class="not-found">
                        <h1>"Page not found"</h1>
                        <p>"Open " <code>"#/tasks/{id}"</code> " or " <code>"#/kader/{id}"</code> "."</p>
                    </div>
                }.into_any(),
            }}
            <ToastStack />
        </main>
    }
}
