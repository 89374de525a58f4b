//! REST paths and response envelopes

use resource_sync::{ListSource, Record, SyncError, SyncResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parent titles are always served by the tasks resource
const TITLE_RESOURCE: &str = "tasks";

pub fn title_path(parent_id: &str) -> String {
    format!("/api/{}/get-name/{}", TITLE_RESOURCE, parent_id)
}

pub fn list_path<R: Record>(parent_id: &str) -> String {
    match R::LIST_SOURCE {
        ListSource::ByParent => format!("/api/{}/getby-parent/{}", R::RESOURCE, parent_id),
        ListSource::All => format!("/api/{}", R::RESOURCE),
    }
}

pub fn create_path(resource: &str) -> String {
    format!("/api/{}/create", resource)
}

pub fn record_path(resource: &str, id: &str) -> String {
    format!("/api/{}/{}", resource, id)
}

pub fn export_path(resource: &str, parent_id: &str) -> String {
    format!("/api/{}/export-data/{}", resource, parent_id)
}

pub fn export_filename(resource: &str, parent_id: &str) -> String {
    format!("{}_{}.xlsx", resource, parent_id)
}

/// Envelope keys to try for a list, in order
fn list_keys(source: ListSource) -> &'static [&'static str] {
    match source {
        ListSource::ByParent => &["records", "tasks", "data"],
        ListSource::All => &["data", "records"],
    }
}

pub fn decode_title(body: &Value) -> SyncResult<String> {
    match body.get("data") {
        Some(Value::String(title)) => Ok(title.clone()),
        Some(Value::Object(obj)) => obj
            .get("name")
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| SyncError::Decode("title object without name".into())),
        _ => Err(SyncError::Decode("missing title".into())),
    }
}

/// List envelope; individual records that fail to decode are skipped
pub fn decode_list<R: Record>(body: &Value) -> SyncResult<Vec<R>> {
    let items = list_keys(R::LIST_SOURCE)
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_array))
        .or_else(|| body.as_array())
        .ok_or_else(|| SyncError::Decode(format!("no {} list in response", R::RESOURCE)))?;

    Ok(items
        .iter()
        .filter_map(|item| match serde_json::from_value::<R>(item.clone()) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping undecodable {} entry: {}", R::RESOURCE, e);
                None
            }
        })
        .collect())
}

/// Single record from a create or update answer, if there is one
pub fn decode_record<R: DeserializeOwned>(body: &Value) -> Option<R> {
    ["record", "task", "data"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find_map(|value| serde_json::from_value(value.clone()).ok())
}

/// `message` field of an error body
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RosterEntry, Task};
    use serde_json::json;

    #[test]
    fn test_paths() {
        assert_eq!(title_path("p1"), "/api/tasks/get-name/p1");
        assert_eq!(list_path::<Task>("p1"), "/api/tasks/getby-parent/p1");
        assert_eq!(list_path::<RosterEntry>("p1"), "/api/kader");
        assert_eq!(create_path("kader"), "/api/kader/create");
        assert_eq!(record_path("tasks", "t1"), "/api/tasks/t1");
        assert_eq!(export_path("tasks", "p1"), "/api/tasks/export-data/p1");
        assert_eq!(export_filename("tasks", "p1"), "tasks_p1.xlsx");
    }

    #[test]
    fn test_decode_title() {
        assert_eq!(decode_title(&json!({ "data": "Main board" })).unwrap(), "Main board");
        assert_eq!(decode_title(&json!({ "data": { "name": "Main" } })).unwrap(), "Main");
        assert!(decode_title(&json!({})).is_err());
    }

    #[test]
    fn test_decode_list_envelopes() {
        let tasks: Vec<Task> = decode_list(&json!({ "records": [{ "_id": "t1" }, { "bad": 1 }] })).unwrap();
        assert_eq!(tasks.len(), 1);

        let roster: Vec<RosterEntry> =
            decode_list(&json!({ "data": [{ "_id": "k1", "submainId": "p1", "name": "Ali" }] })).unwrap();
        assert_eq!(roster[0].name.as_deref(), Some("Ali"));

        assert!(decode_list::<Task>(&json!({ "message": "ok" })).is_err());
    }

    #[test]
    fn test_decode_record_keys() {
        let created: Option<Task> = decode_record(&json!({ "record": { "_id": "t9" } }));
        assert_eq!(created.unwrap().id, "t9");

        let updated: Option<RosterEntry> = decode_record(&json!({ "message": "ok", "data": { "_id": "k1" } }));
        assert_eq!(updated.unwrap().id, "k1");

        assert!(decode_record::<Task>(&json!({ "message": "ok" })).is_none());
        assert!(decode_record::<Task>(&json!({ "data": "done" })).is_none());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"message":"Not allowed"}"#).as_deref(), Some("Not allowed"));
        assert_eq!(error_message(r#"{"message":" "}"#), None);
        assert_eq!(error_message("<html>"), None);
    }
}
