//! Resource Store
//!
//! In-memory list of records for the current parent id, plus the rules for
//! folding load and mutation results back into it.

use crate::record::Record;

/// Records and title for one parent id
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceStore<R> {
    parent_id: Option<String>,
    title: String,
    records: Vec<R>,
    /// Bumped by every `begin_load`; only the newest ticket may land
    generation: u64,
    loading: bool,
}

impl<R> Default for ResourceStore<R> {
    fn default() -> Self {
        Self {
            parent_id: None,
            title: String::new(),
            records: Vec::new(),
            generation: 0,
            loading: false,
        }
    }
}

/// Handle for one in-flight load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    parent_id: String,
    generation: u64,
}

impl LoadTicket {
    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }
}

/// Result of a successful load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage<R> {
    pub title: String,
    pub records: Vec<R>,
}

/// How a server answer folds into the local list
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation<R> {
    Inserted(R),
    Replaced(R),
    Removed(String),
    /// Answer was not conclusive, refetch the list
    Reload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Created,
    Updated,
    Deleted,
}

/// Outcome of a mutation, tagged with the parent id it was issued for
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<R> {
    pub parent_id: String,
    pub kind: MutationKind,
    pub reconciliation: Reconciliation<R>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    ReloadNeeded,
    /// Parent changed since the request was issued
    Discarded,
}

impl<R: Record> ResourceStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Distinct non-empty display names, in list order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self.records.iter().filter_map(|r| r.display_name()) {
            let name = name.trim();
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Start a load for `parent_id`, superseding any earlier one
    pub fn begin_load(&mut self, parent_id: &str) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.parent_id = Some(parent_id.to_string());
        LoadTicket {
            parent_id: parent_id.to_string(),
            generation: self.generation,
        }
    }

    fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation && self.parent_id.as_deref() == Some(ticket.parent_id.as_str())
    }

    /// Replace title and list; returns false for a superseded ticket
    pub fn finish_load(&mut self, ticket: &LoadTicket, page: LoadedPage<R>) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "Dropping stale {} load for {} (generation {})",
                R::RESOURCE, ticket.parent_id, ticket.generation
            );
            return false;
        }
        self.title = page.title;
        self.records = page.records;
        self.loading = false;
        true
    }

    /// Failed load leaves the previous list in place
    pub fn fail_load(&mut self, ticket: &LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn apply(&mut self, mutation: Mutation<R>) -> ApplyOutcome {
        if self.parent_id.as_deref() != Some(mutation.parent_id.as_str()) {
            log::debug!("Discarding {:?} for former parent {}", mutation.kind, mutation.parent_id);
            return ApplyOutcome::Discarded;
        }
        match mutation.reconciliation {
            Reconciliation::Inserted(record) => {
                match self.records.iter_mut().find(|r| r.id() == record.id()) {
                    Some(existing) => *existing = record,
                    None => self.records.push(record),
                }
                ApplyOutcome::Applied
            }
            Reconciliation::Replaced(record) => {
                match self.records.iter_mut().find(|r| r.id() == record.id()) {
                    Some(existing) => {
                        *existing = record;
                        ApplyOutcome::Applied
                    }
                    None => ApplyOutcome::ReloadNeeded,
                }
            }
            Reconciliation::Removed(id) => {
                self.records.retain(|r| r.id() != id);
                ApplyOutcome::Applied
            }
            Reconciliation::Reload => ApplyOutcome::ReloadNeeded,
        }
    }
}
