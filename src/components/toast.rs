//! Toast Notifications

use leptos::prelude::*;

use crate::context::{AppContext, ToastKind};

/// Stack of transient notifications; entries dismiss themselves
#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.with(|t| t.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| ctx.toasts.update(|t| t.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
