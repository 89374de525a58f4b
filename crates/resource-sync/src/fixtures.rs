//! Test fixtures: a small record kind and an in-memory API.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{SyncError, SyncResult};
use crate::executor::ResourceApi;
use crate::field_update::{Clearing, FieldSpec, FieldUpdate, UpdateBody};
use crate::record::{Draft, ListSource, Record};

const TITLE: FieldSpec = FieldSpec::new("title", Clearing::Placeholder("Untitled"));
const RANK: FieldSpec = FieldSpec::new("rank", Clearing::Blank);

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "submainId")]
    pub parent_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub rank: Option<i64>,
}

pub fn note(id: &str, parent: &str, title: &str, rank: Option<i64>) -> Note {
    Note {
        id: id.to_string(),
        parent_id: parent.to_string(),
        title: title.to_string(),
        rank,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteField {
    Title,
    Rank,
    Day,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteDraft {
    pub parent_id: String,
    pub title: String,
    pub rank: String,
    pub day: String,
}

impl Record for Note {
    type Draft = NoteDraft;
    const RESOURCE: &'static str = "notes";
    const LIST_SOURCE: ListSource = ListSource::All;

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.parent_id)
    }

    fn tag(&self) -> Option<i64> {
        self.rank
    }

    fn display_name(&self) -> Option<&str> {
        Some(&self.title)
    }
}

impl Draft for NoteDraft {
    type Record = Note;
    type Field = NoteField;

    fn blank(parent_id: &str, today: NaiveDate) -> Self {
        Self {
            parent_id: parent_id.to_string(),
            title: String::new(),
            rank: String::new(),
            day: today.to_string(),
        }
    }

    fn from_record(record: &Note, parent_id: &str, today: NaiveDate) -> Self {
        Self {
            parent_id: parent_id.to_string(),
            title: record.title.clone(),
            rank: record.rank.map(|r| r.to_string()).unwrap_or_default(),
            day: today.to_string(),
        }
    }

    fn get(&self, field: NoteField) -> &str {
        match field {
            NoteField::Title => &self.title,
            NoteField::Rank => &self.rank,
            NoteField::Day => &self.day,
        }
    }

    fn set(&mut self, field: NoteField, value: String) {
        match field {
            NoteField::Title => self.title = value,
            NoteField::Rank => self.rank = value,
            NoteField::Day => self.day = value,
        }
    }

    fn create_body(&self, parent_id: &str) -> SyncResult<Map<String, Value>> {
        if self.title.trim().is_empty() {
            return Err(SyncError::Validation("title required".into()));
        }
        let mut body = Map::new();
        body.insert("submainId".into(), parent_id.into());
        body.insert("title".into(), self.title.clone().into());
        if !self.rank.trim().is_empty() {
            let rank: i64 = self
                .rank
                .trim()
                .parse()
                .map_err(|_| SyncError::Validation("rank must be a number".into()))?;
            body.insert("rank".into(), rank.into());
        }
        Ok(body)
    }

    fn update_body(&self, parent_id: &str) -> SyncResult<UpdateBody> {
        let rank = match self.rank.trim() {
            "" => FieldUpdate::Clear,
            raw => FieldUpdate::SetTo(
                raw.parse::<i64>()
                    .map_err(|_| SyncError::Validation("rank must be a number".into()))?,
            ),
        };
        Ok(UpdateBody::new()
            .with("submainId", parent_id)
            .field(TITLE, FieldUpdate::from_input(&self.title))
            .field(RANK, rank))
    }
}

/// In-memory stand-in for the REST API
#[derive(Default)]
pub struct FakeApi {
    pub title: String,
    pub records: RefCell<Vec<Note>>,
    pub fail: Cell<bool>,
    /// Answer mutations without a record body
    pub ambiguous: Cell<bool>,
    pub next_id: Cell<u32>,
    pub calls: RefCell<Vec<String>>,
    pub bodies: RefCell<Vec<Value>>,
}

impl FakeApi {
    pub fn with_records(records: Vec<Note>) -> Self {
        Self {
            title: "Board".to_string(),
            records: RefCell::new(records),
            ..Default::default()
        }
    }

    fn call(&self, name: String) -> SyncResult<()> {
        self.calls.borrow_mut().push(name);
        if self.fail.get() {
            return Err(SyncError::Http { status: 500, message: Some("boom".into()) });
        }
        Ok(())
    }

    fn answer(&self, note: Note) -> Option<Note> {
        if self.ambiguous.get() {
            None
        } else {
            Some(note)
        }
    }
}

fn text(body: &Value, key: &str) -> String {
    body.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

#[async_trait(?Send)]
impl ResourceApi<Note> for FakeApi {
    async fn fetch_title(&self, parent_id: &str) -> SyncResult<String> {
        self.call(format!("title {}", parent_id))?;
        Ok(self.title.clone())
    }

    async fn fetch_records(&self, parent_id: &str) -> SyncResult<Vec<Note>> {
        self.call(format!("list {}", parent_id))?;
        Ok(self.records.borrow().clone())
    }

    async fn create(&self, body: Value) -> SyncResult<Option<Note>> {
        self.call("create".to_string())?;
        self.bodies.borrow_mut().push(body.clone());
        self.next_id.set(self.next_id.get() + 1);
        let created = Note {
            id: format!("n{}", self.next_id.get()),
            parent_id: text(&body, "submainId"),
            title: text(&body, "title"),
            rank: body.get("rank").and_then(Value::as_i64),
        };
        self.records.borrow_mut().push(created.clone());
        Ok(self.answer(created))
    }

    async fn update(&self, id: &str, body: Value) -> SyncResult<Option<Note>> {
        self.call(format!("update {}", id))?;
        self.bodies.borrow_mut().push(body.clone());
        let mut records = self.records.borrow_mut();
        let record = records
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(SyncError::Http { status: 404, message: None })?;
        record.title = text(&body, "title");
        record.rank = body.get("rank").and_then(Value::as_i64);
        let updated = record.clone();
        drop(records);
        Ok(self.answer(updated))
    }

    async fn delete(&self, id: &str) -> SyncResult<()> {
        self.call(format!("delete {}", id))?;
        self.records.borrow_mut().retain(|n| n.id != id);
        Ok(())
    }
}
