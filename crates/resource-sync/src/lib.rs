//! Resource Synchronization
//!
//! Generic store / filter / form / mutation layer shared by every
//! resource kind of the board. Nothing in here touches the DOM, so the
//! whole crate is testable natively.

mod error;
mod record;
mod field_update;
mod store;
mod filter;
mod form;
mod executor;
mod preferences;
mod color;

#[cfg(test)]
mod fixtures;

pub use error::{SyncError, SyncResult};
pub use record::{Draft, ListSource, Record};
pub use field_update::{Clearing, FieldSpec, FieldUpdate, UpdateBody};
pub use store::{ApplyOutcome, LoadTicket, LoadedPage, Mutation, MutationKind, Reconciliation, ResourceStore};
pub use filter::{distinct_tags, TagFilter};
pub use form::{FormController, FormMode, ModalState, Submission};
pub use executor::{load_page, ConfirmedDelete, MutationExecutor, ResourceApi};
pub use preferences::{today, MemoryPreferences, PreferenceStore, Preferences};
pub use color::{contrast_color, NamedColor, BLACK_TEXT, DEFAULT_BADGE_COLOR, PALETTE, WHITE_TEXT};
