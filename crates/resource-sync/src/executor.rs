//! Mutation Executor
//!
//! Issues create / update / delete calls against a `ResourceApi` and turns
//! the server's answer into a `Mutation` the store can fold in. Nothing is
//! retried here; a failed call leaves the store untouched.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SyncResult;
use crate::form::{FormMode, Submission};
use crate::record::{Draft, ListSource, Record};
use crate::store::{LoadTicket, LoadedPage, Mutation, MutationKind, Reconciliation};

/// Remote REST collaborator for one record kind
///
/// Futures are `?Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait ResourceApi<R: Record> {
    /// Display title of the parent entity
    async fn fetch_title(&self, parent_id: &str) -> SyncResult<String>;

    /// Records per `R::LIST_SOURCE` (all records for `ListSource::All`)
    async fn fetch_records(&self, parent_id: &str) -> SyncResult<Vec<R>>;

    /// `None` when the answer carries no decodable record
    async fn create(&self, body: Value) -> SyncResult<Option<R>>;

    async fn update(&self, id: &str, body: Value) -> SyncResult<Option<R>>;

    async fn delete(&self, id: &str) -> SyncResult<()>;
}

/// Fetch title and list for the ticket's parent
pub async fn load_page<R, A>(api: &A, ticket: &LoadTicket) -> SyncResult<LoadedPage<R>>
where
    R: Record,
    A: ResourceApi<R> + ?Sized,
{
    let parent_id = ticket.parent_id();
    let title = api.fetch_title(parent_id).await?;
    let mut records = api.fetch_records(parent_id).await?;
    if R::LIST_SOURCE == ListSource::All {
        records.retain(|r| r.parent_id() == Some(parent_id));
    }
    log::info!("Loaded {} {} for {}", records.len(), R::RESOURCE, parent_id);
    Ok(LoadedPage { title, records })
}

/// Proof that the user agreed to a deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedDelete {
    id: String,
}

impl ConfirmedDelete {
    /// Runs `confirm` with `prompt`; `None` when the user declines
    pub fn ask(id: &str, prompt: &str, confirm: impl FnOnce(&str) -> bool) -> Option<Self> {
        if confirm(prompt) {
            Some(Self { id: id.to_string() })
        } else {
            log::debug!("Deletion of {} declined", id);
            None
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

pub struct MutationExecutor<'a, R, A: ?Sized> {
    api: &'a A,
    parent_id: String,
    _record: PhantomData<R>,
}

impl<'a, R, A> MutationExecutor<'a, R, A>
where
    R: Record,
    A: ResourceApi<R> + ?Sized,
{
    pub fn new(api: &'a A, parent_id: &str) -> Self {
        Self {
            api,
            parent_id: parent_id.to_string(),
            _record: PhantomData,
        }
    }

    fn mutation(&self, kind: MutationKind, reconciliation: Reconciliation<R>) -> Mutation<R> {
        Mutation {
            parent_id: self.parent_id.clone(),
            kind,
            reconciliation,
        }
    }

    /// Dispatch a form submission to create or update
    pub async fn submit(&self, submission: &Submission<R>) -> SyncResult<Mutation<R>> {
        match &submission.mode {
            FormMode::Create => self.create(&submission.draft).await,
            FormMode::Edit(original) => self.update(original, &submission.draft).await,
        }
    }

    pub async fn create(&self, draft: &R::Draft) -> SyncResult<Mutation<R>> {
        let body = draft.create_body(&self.parent_id)?;
        log::debug!("Creating {} with {:?}", R::RESOURCE, body);
        let reconciliation = match self.api.create(Value::Object(body)).await? {
            Some(record) => Reconciliation::Inserted(record),
            None => {
                log::warn!("Create of {} returned no record, reloading", R::RESOURCE);
                Reconciliation::Reload
            }
        };
        Ok(self.mutation(MutationKind::Created, reconciliation))
    }

    pub async fn update(&self, original: &R, draft: &R::Draft) -> SyncResult<Mutation<R>> {
        let body = draft.update_body(&self.parent_id)?;
        log::debug!("Updating {} {} with {:?}", R::RESOURCE, original.id(), body);
        let reconciliation = match self.api.update(original.id(), body.into_value()).await? {
            Some(record) if record.id() == original.id() => Reconciliation::Replaced(record),
            _ => {
                log::warn!("Update of {} {} gave no usable record, reloading", R::RESOURCE, original.id());
                Reconciliation::Reload
            }
        };
        Ok(self.mutation(MutationKind::Updated, reconciliation))
    }

    pub async fn delete(&self, confirmed: ConfirmedDelete) -> SyncResult<Mutation<R>> {
        self.api.delete(confirmed.id()).await?;
        log::info!("Deleted {} {}", R::RESOURCE, confirmed.id());
        Ok(self.mutation(MutationKind::Deleted, Reconciliation::Removed(confirmed.id)))
    }
}
