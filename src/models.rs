//! Frontend Models
//!
//! Records served by the REST API and the drafts the forms edit.

use chrono::NaiveDate;
use resource_sync::{Clearing, Draft, FieldSpec, FieldUpdate, ListSource, Record, SyncError, SyncResult, UpdateBody};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Label a cleared name-like field falls back to
pub const UNSPECIFIED: &str = "Unspecified";

// ========================
// Wire helpers
// ========================

/// `submainId` arrives as an id string or as the populated parent object
fn parent_ref<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(id)) => Some(id),
        Some(Value::Object(obj)) => obj.get("_id").and_then(Value::as_str).map(String::from),
        _ => None,
    })
}

/// Tag as number, numeric string, "" or null
fn tag_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Trimmed value, `None` when blank
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Insert the trimmed `value` unless it is blank
fn put_text(body: &mut Map<String, Value>, key: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        body.insert(key.to_string(), Value::from(value));
    }
}

fn parse_tag(raw: &str) -> SyncResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| SyncError::Validation(format!("Number must be a whole number, got {:?}", raw)))
}

// ========================
// Task
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "submainId", default, deserialize_with = "parent_ref")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub tasks: Option<String>,
    #[serde(rename = "remainingWork", default)]
    pub remaining_work: Option<String>,
    #[serde(default, deserialize_with = "tag_number")]
    pub number: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Task {
    pub fn username_label(&self) -> &str {
        present(&self.username).unwrap_or(UNSPECIFIED)
    }

    pub fn tasks_label(&self) -> &str {
        present(&self.tasks).unwrap_or("No tasks")
    }

    pub fn notes_label(&self) -> &str {
        present(&self.notes).unwrap_or("No notes")
    }

    pub fn remaining_work_label(&self) -> &str {
        present(&self.remaining_work).unwrap_or("No remaining work")
    }

    pub fn number_label(&self) -> String {
        self.number.unwrap_or(0).to_string()
    }

    /// `YYYY-MM-DD` part of the stored date
    pub fn day(&self) -> Option<&str> {
        present(&self.date).map(|d| d.split('T').next().unwrap_or(d))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Username,
    Date,
    Tasks,
    RemainingWork,
    Number,
    Notes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub parent_id: String,
    pub username: String,
    pub date: String,
    pub tasks: String,
    pub remaining_work: String,
    pub number: String,
    pub notes: String,
}

const TASK_USERNAME: FieldSpec = FieldSpec::new("username", Clearing::Placeholder(UNSPECIFIED));
const TASK_DATE: FieldSpec = FieldSpec::new("date", Clearing::Blank);
const TASK_TASKS: FieldSpec = FieldSpec::new("tasks", Clearing::Empty);
const TASK_REMAINING: FieldSpec = FieldSpec::new("remainingWork", Clearing::Empty);
const TASK_NUMBER: FieldSpec = FieldSpec::new("number", Clearing::Blank);
const TASK_NOTES: FieldSpec = FieldSpec::new("notes", Clearing::Empty);

impl Record for Task {
    type Draft = TaskDraft;
    const RESOURCE: &'static str = "tasks";
    const LIST_SOURCE: ListSource = ListSource::ByParent;

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    fn tag(&self) -> Option<i64> {
        self.number
    }

    fn display_name(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

impl Draft for TaskDraft {
    type Record = Task;
    type Field = TaskField;

    fn blank(parent_id: &str, today: NaiveDate) -> Self {
        Self {
            parent_id: parent_id.to_string(),
            username: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            tasks: String::new(),
            remaining_work: String::new(),
            number: String::new(),
            notes: String::new(),
        }
    }

    fn from_record(task: &Task, parent_id: &str, today: NaiveDate) -> Self {
        Self {
            parent_id: task.parent_id.clone().unwrap_or_else(|| parent_id.to_string()),
            username: task.username.clone().unwrap_or_default(),
            date: task
                .day()
                .map(String::from)
                .unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
            tasks: task.tasks.clone().unwrap_or_default(),
            remaining_work: task.remaining_work.clone().unwrap_or_default(),
            number: task.number.map(|n| n.to_string()).unwrap_or_default(),
            notes: task.notes.clone().unwrap_or_default(),
        }
    }

    fn get(&self, field: TaskField) -> &str {
        match field {
            TaskField::Username => &self.username,
            TaskField::Date => &self.date,
            TaskField::Tasks => &self.tasks,
            TaskField::RemainingWork => &self.remaining_work,
            TaskField::Number => &self.number,
            TaskField::Notes => &self.notes,
        }
    }

    fn set(&mut self, field: TaskField, value: String) {
        match field {
            TaskField::Username => self.username = value,
            TaskField::Date => self.date = value,
            TaskField::Tasks => self.tasks = value,
            TaskField::RemainingWork => self.remaining_work = value,
            TaskField::Number => self.number = value,
            TaskField::Notes => self.notes = value,
        }
    }

    fn create_body(&self, parent_id: &str) -> SyncResult<Map<String, Value>> {
        let mut body = Map::new();
        body.insert("submainId".into(), parent_id.into());
        put_text(&mut body, "username", &self.username);
        put_text(&mut body, "date", &self.date);
        put_text(&mut body, "tasks", &self.tasks);
        put_text(&mut body, "remainingWork", &self.remaining_work);
        if !self.number.trim().is_empty() {
            body.insert("number".into(), parse_tag(&self.number)?.into());
        }
        put_text(&mut body, "notes", &self.notes);
        Ok(body)
    }

    fn update_body(&self, parent_id: &str) -> SyncResult<UpdateBody> {
        let number = match self.number.trim() {
            "" => FieldUpdate::Clear,
            raw => FieldUpdate::SetTo(parse_tag(raw)?),
        };
        Ok(UpdateBody::new()
            .with("submainId", parent_id)
            .field(TASK_USERNAME, FieldUpdate::from_input(&self.username))
            .field(TASK_DATE, FieldUpdate::from_input(&self.date))
            .field(TASK_TASKS, FieldUpdate::from_input(&self.tasks))
            .field(TASK_REMAINING, FieldUpdate::from_input(&self.remaining_work))
            .field(TASK_NUMBER, number)
            .field(TASK_NOTES, FieldUpdate::from_input(&self.notes)))
    }
}

// ========================
// Roster entry (Kader)
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "submainId", default, deserialize_with = "parent_ref")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tasks: Option<String>,
}

impl RosterEntry {
    pub fn name_label(&self) -> &str {
        present(&self.name).unwrap_or(UNSPECIFIED)
    }

    pub fn tasks_label(&self) -> &str {
        present(&self.tasks).unwrap_or("No tasks")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterField {
    Name,
    Tasks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterDraft {
    pub parent_id: String,
    pub name: String,
    pub tasks: String,
}

const ROSTER_NAME: FieldSpec = FieldSpec::new("name", Clearing::Placeholder(UNSPECIFIED));
const ROSTER_TASKS: FieldSpec = FieldSpec::new("tasks", Clearing::Empty);

impl Record for RosterEntry {
    type Draft = RosterDraft;
    const RESOURCE: &'static str = "kader";
    const LIST_SOURCE: ListSource = ListSource::All;

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Draft for RosterDraft {
    type Record = RosterEntry;
    type Field = RosterField;

    fn blank(parent_id: &str, _today: NaiveDate) -> Self {
        Self {
            parent_id: parent_id.to_string(),
            name: String::new(),
            tasks: String::new(),
        }
    }

    fn from_record(entry: &RosterEntry, parent_id: &str, _today: NaiveDate) -> Self {
        Self {
            parent_id: parent_id.to_string(),
            name: entry.name.clone().unwrap_or_default(),
            tasks: entry.tasks.clone().unwrap_or_default(),
        }
    }

    fn get(&self, field: RosterField) -> &str {
        match field {
            RosterField::Name => &self.name,
            RosterField::Tasks => &self.tasks,
        }
    }

    fn set(&mut self, field: RosterField, value: String) {
        match field {
            RosterField::Name => self.name = value,
            RosterField::Tasks => self.tasks = value,
        }
    }

    fn create_body(&self, parent_id: &str) -> SyncResult<Map<String, Value>> {
        if self.name.trim().is_empty() && self.tasks.trim().is_empty() {
            return Err(SyncError::Validation("Enter a name or tasks".into()));
        }
        let mut body = Map::new();
        body.insert("submainId".into(), parent_id.into());
        put_text(&mut body, "name", &self.name);
        put_text(&mut body, "tasks", &self.tasks);
        Ok(body)
    }

    fn update_body(&self, _parent_id: &str) -> SyncResult<UpdateBody> {
        Ok(UpdateBody::new()
            .field(ROSTER_NAME, FieldUpdate::from_input(&self.name))
            .field(ROSTER_TASKS, FieldUpdate::from_input(&self.tasks)))
    }
}
