//! Form / Edit Controller
//!
//! Owns the single draft and the modal lifecycle around it:
//! `Closed -> Open -> Submitting -> Closed`, or back to `Open` on failure.

use chrono::NaiveDate;

use crate::record::{Draft, Record};

/// Create vs. update intent
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<R> {
    Create,
    /// Carries the record as it was when the edit started
    Edit(R),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<R> {
    Closed,
    Open(FormMode<R>),
    Submitting(FormMode<R>),
}

/// Snapshot handed to the mutation executor
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<R: Record> {
    pub mode: FormMode<R>,
    pub draft: R::Draft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormController<R: Record> {
    state: ModalState<R>,
    draft: Option<R::Draft>,
}

impl<R: Record> Default for FormController<R> {
    fn default() -> Self {
        Self {
            state: ModalState::Closed,
            draft: None,
        }
    }
}

impl<R: Record> FormController<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_for_create(&mut self, parent_id: &str, today: NaiveDate) {
        self.draft = Some(R::Draft::blank(parent_id, today));
        self.state = ModalState::Open(FormMode::Create);
    }

    /// Replaces any open draft entirely
    pub fn open_for_edit(&mut self, record: &R, parent_id: &str, today: NaiveDate) {
        self.draft = Some(R::Draft::from_record(record, parent_id, today));
        self.state = ModalState::Open(FormMode::Edit(record.clone()));
    }

    /// Returns false when there is no editable draft
    pub fn update_field(&mut self, field: <R::Draft as Draft>::Field, value: String) -> bool {
        if !matches!(self.state, ModalState::Open(_)) {
            return false;
        }
        match self.draft.as_mut() {
            Some(draft) => {
                draft.set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.draft = None;
    }

    /// Moves `Open -> Submitting`; `None` if a submit is already running
    pub fn begin_submit(&mut self) -> Option<Submission<R>> {
        let mode = match &self.state {
            ModalState::Open(mode) => mode.clone(),
            _ => return None,
        };
        let draft = self.draft.clone()?;
        self.state = ModalState::Submitting(mode.clone());
        Some(Submission { mode, draft })
    }

    /// Closes on success, reopens for correction on failure.
    /// Ignored when the user already closed the modal.
    pub fn finish_submit(&mut self, succeeded: bool) {
        let mode = match &self.state {
            ModalState::Submitting(mode) => mode.clone(),
            _ => return,
        };
        if succeeded {
            self.close();
        } else {
            self.state = ModalState::Open(mode);
        }
    }

    pub fn state(&self) -> &ModalState<R> {
        &self.state
    }

    pub fn draft(&self) -> Option<&R::Draft> {
        self.draft.as_ref()
    }

    pub fn field(&self, field: <R::Draft as Draft>::Field) -> String {
        self.draft.as_ref().map(|d| d.get(field).to_string()).unwrap_or_default()
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, ModalState::Submitting(_))
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target().is_some()
    }

    pub fn edit_target(&self) -> Option<&R> {
        match &self.state {
            ModalState::Open(FormMode::Edit(r)) | ModalState::Submitting(FormMode::Edit(r)) => Some(r),
            _ => None,
        }
    }
}
