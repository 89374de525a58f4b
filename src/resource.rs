//! Resource Handle
//!
//! Glues one record kind to the app store, its form and its preferences.
//! Network flows run in `spawn_local`; every failure ends in a toast and
//! leaves the list as it was.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use resource_sync::{
    load_page, today, ApplyOutcome, ConfirmedDelete, Draft, FormController, Mutation, MutationExecutor,
    MutationKind, Preferences, DEFAULT_BADGE_COLOR,
};

use crate::api::{export_filename, HttpApi};
use crate::browser::{self, LocalStoragePreferences};
use crate::context::AppContext;
use crate::store::{AppStore, StoredResource};

/// Toast text for a completed mutation; `None` when its result was
/// discarded because the parent changed
fn success_message(noun: &str, kind: MutationKind, outcome: ApplyOutcome) -> Option<String> {
    if outcome == ApplyOutcome::Discarded {
        return None;
    }
    let verb = match kind {
        MutationKind::Created => "added",
        MutationKind::Updated => "updated",
        MutationKind::Deleted => "deleted",
    };
    Some(format!("{} {} successfully", noun, verb))
}

pub struct ResourceHandle<R: StoredResource> {
    store: AppStore,
    ctx: AppContext,
    /// Singular label used in messages ("Task")
    noun: &'static str,
    pub form: RwSignal<FormController<R>>,
    pub name_colors: RwSignal<BTreeMap<String, String>>,
    /// Date saved for the current parent (`YYYY-MM-DD`)
    pub date: RwSignal<String>,
}

impl<R: StoredResource> Clone for ResourceHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: StoredResource> Copy for ResourceHandle<R> {}

impl<R: StoredResource> ResourceHandle<R> {
    pub fn new(store: AppStore, ctx: AppContext, noun: &'static str) -> Self {
        Self {
            store,
            ctx,
            noun,
            form: RwSignal::new(FormController::new()),
            name_colors: RwSignal::new(BTreeMap::new()),
            date: RwSignal::new(String::new()),
        }
    }

    fn prefs() -> Preferences<LocalStoragePreferences> {
        Preferences::new(LocalStoragePreferences, R::RESOURCE)
    }

    fn parent_id(&self) -> Option<String> {
        R::field(self.store).with_untracked(|s| s.parent_id().map(String::from))
    }

    /// Fetch title and list for `parent_id`, superseding any running load
    pub fn load(&self, parent_id: &str) {
        let prefs = Self::prefs();
        self.date.set(prefs.get_date(parent_id));
        self.name_colors.set(prefs.name_colors());

        let field = R::field(self.store);
        let ticket = field.write().begin_load(parent_id);
        let api = self.ctx.api();
        let ctx = self.ctx;
        spawn_local(async move {
            match load_page::<R, HttpApi>(&api, &ticket).await {
                Ok(page) => {
                    if !field.write().finish_load(&ticket, page) {
                        log::debug!("Dropped stale {} load for {}", R::RESOURCE, ticket.parent_id());
                    }
                }
                Err(e) => {
                    if field.write().fail_load(&ticket) {
                        ctx.notify_error(&e);
                    }
                }
            }
        });
    }

    pub fn open_create(&self) {
        if let Some(parent_id) = self.parent_id() {
            self.form.update(|f| f.open_for_create(&parent_id, today()));
        }
    }

    pub fn open_edit(&self, record: &R) {
        if let Some(parent_id) = self.parent_id() {
            self.form.update(|f| f.open_for_edit(record, &parent_id, today()));
        }
    }

    pub fn set_field(&self, field: <R::Draft as Draft>::Field, value: String) {
        self.form.update(|f| {
            f.update_field(field, value);
        });
    }

    pub fn close(&self) {
        self.form.update(|f| f.close());
    }

    /// Fold a mutation into the list and toast it
    fn apply(&self, mutation: Mutation<R>) {
        let parent_id = mutation.parent_id.clone();
        let kind = mutation.kind;
        let outcome = R::field(self.store).write().apply(mutation);
        match outcome {
            ApplyOutcome::Applied => {}
            ApplyOutcome::ReloadNeeded => self.ctx.reload(),
            ApplyOutcome::Discarded => log::debug!("Discarded {} result for {}", R::RESOURCE, parent_id),
        }
        if let Some(message) = success_message(self.noun, kind, outcome) {
            self.ctx.notify_success(message);
        }
    }

    /// Submit the open form; no-op while a submit is running
    pub fn submit(&self) {
        let Some(parent_id) = self.parent_id() else { return };
        let Some(submission) = self.form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let handle = *self;
        spawn_local(async move {
            let api = handle.ctx.api();
            let result = MutationExecutor::<R, HttpApi>::new(&api, &parent_id)
                .submit(&submission)
                .await;
            handle.form.update(|f| f.finish_submit(result.is_ok()));
            match result {
                Ok(mutation) => handle.apply(mutation),
                Err(e) => handle.ctx.notify_error(&e),
            }
        });
    }

    /// Ask, then delete; nothing is sent when the user declines
    pub fn delete(&self, id: &str) {
        let Some(parent_id) = self.parent_id() else { return };
        let prompt = format!("Are you sure you want to delete this {}?", self.noun.to_lowercase());
        let Some(confirmed) = ConfirmedDelete::ask(id, &prompt, browser::confirm) else {
            return;
        };
        let handle = *self;
        spawn_local(async move {
            let api = handle.ctx.api();
            match MutationExecutor::<R, HttpApi>::new(&api, &parent_id).delete(confirmed).await {
                Ok(mutation) => handle.apply(mutation),
                Err(e) => handle.ctx.notify_error(&e),
            }
        });
    }

    /// Download the server-side spreadsheet for the current parent
    pub fn export(&self) {
        let Some(parent_id) = self.parent_id() else { return };
        let ctx = self.ctx;
        spawn_local(async move {
            let bytes = ctx.api().export(R::RESOURCE, &parent_id).await;
            let downloaded =
                bytes.and_then(|b| browser::download_bytes(&b, &export_filename(R::RESOURCE, &parent_id)));
            if let Err(e) = downloaded {
                ctx.notify_error(&e);
            }
        });
    }

    pub fn set_date(&self, date: String) {
        let Some(parent_id) = self.parent_id() else { return };
        match Self::prefs().set_date(&parent_id, &date) {
            Ok(()) => self.date.set(date),
            Err(e) => self.ctx.notify_error(&e),
        }
    }

    pub fn set_color(&self, name: &str, color: &str) {
        let prefs = Self::prefs();
        match prefs.set_color(name, color) {
            Ok(()) => self.name_colors.set(prefs.name_colors()),
            Err(e) => self.ctx.notify_error(&e),
        }
    }

    /// Badge color for `name` (tracked)
    pub fn color_for(&self, name: &str) -> String {
        self.name_colors
            .with(|colors| colors.get(name).cloned())
            .unwrap_or_else(|| DEFAULT_BADGE_COLOR.to_string())
    }

    pub fn records(&self) -> Vec<R> {
        R::field(self.store).with(|s| s.records().to_vec())
    }

    pub fn title(&self) -> String {
        R::field(self.store).with(|s| s.title().to_string())
    }

    pub fn is_loading(&self) -> bool {
        R::field(self.store).with(|s| s.is_loading())
    }

    pub fn names(&self) -> Vec<String> {
        R::field(self.store).with(|s| s.names())
    }

    pub fn get(&self, id: &str) -> Option<R> {
        R::field(self.store).with_untracked(|s| s.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message() {
        assert_eq!(
            success_message("Task", MutationKind::Created, ApplyOutcome::Applied).as_deref(),
            Some("Task added successfully")
        );
        assert_eq!(
            success_message("Entry", MutationKind::Updated, ApplyOutcome::ReloadNeeded).as_deref(),
            Some("Entry updated successfully")
        );
    }

    #[test]
    fn test_no_toast_for_former_parent() {
        assert_eq!(success_message("Task", MutationKind::Deleted, ApplyOutcome::Discarded), None);
    }
}
