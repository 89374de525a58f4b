//! Record Contract
//!
//! What a resource kind must provide to be synchronized.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::SyncResult;
use crate::field_update::UpdateBody;

/// Where the list for one parent comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// `GET /api/{resource}/getby-parent/{parentId}`
    ByParent,
    /// `GET /api/{resource}`, narrowed to the parent on the client
    All,
}

/// A persisted entity identified by a server-assigned id
pub trait Record: Clone + std::fmt::Debug + PartialEq + DeserializeOwned + 'static {
    /// Edit buffer for this record kind
    type Draft: Draft<Record = Self>;

    /// Path segment under `/api/`
    const RESOURCE: &'static str;

    const LIST_SOURCE: ListSource;

    fn id(&self) -> &str;

    fn parent_id(&self) -> Option<&str>;

    /// Optional numeric tag used by the filter
    fn tag(&self) -> Option<i64> {
        None
    }

    /// Name-like field shown as a colored badge
    fn display_name(&self) -> Option<&str> {
        None
    }
}

/// Locally held edit buffer for a record
pub trait Draft: Clone + std::fmt::Debug + PartialEq {
    type Record: Record<Draft = Self>;

    /// Form field identifier
    type Field: Copy + Eq + std::fmt::Debug;

    /// Empty draft for "add" (date fields default to `today`)
    fn blank(parent_id: &str, today: NaiveDate) -> Self;

    /// Copy of a record's editable fields, absent values as ""
    fn from_record(record: &Self::Record, parent_id: &str, today: NaiveDate) -> Self;

    fn get(&self, field: Self::Field) -> &str;

    fn set(&mut self, field: Self::Field, value: String);

    /// Body for `POST .../create`: only the fields that carry a value
    fn create_body(&self, parent_id: &str) -> SyncResult<Map<String, Value>>;

    /// Body for `PATCH .../{id}`: every editable field, clears flagged
    fn update_body(&self, parent_id: &str) -> SyncResult<UpdateBody>;
}
