//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use resource_sync::SyncError;

use crate::api::HttpApi;
use crate::config::AppConfig;
use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible notifications, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toasts {
    next_id: u32,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to refetch the current view
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Current hash route
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    pub toasts: RwSignal<Toasts>,
    pub api: StoredValue<HttpApi>,
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig, api: HttpApi, route: Route) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (route, set_route) = signal(route);
        Self {
            reload_trigger,
            set_reload_trigger,
            route,
            set_route,
            toasts: RwSignal::new(Toasts::default()),
            api: StoredValue::new(api),
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of the current view
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    fn notify(&self, kind: ToastKind, message: String) {
        let id = self.toasts.try_update(|t| t.push(kind, message)).unwrap_or_default();
        let toasts = self.toasts;
        let delay = self.config.with_value(|c| c.toast_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            // Page may be gone by now
            toasts.try_update(|t| t.dismiss(id));
        });
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message.into());
    }

    pub fn notify_error(&self, err: &SyncError) {
        log::error!("{}", err);
        self.notify(ToastKind::Error, err.user_message());
    }
}
