//! Read-only view over the browser key-value store.
//!
//! The engine never writes to the store. A caller takes a snapshot (for
//! instance an export of `localStorage`) and the engine reads meetings from
//! it. Browser storage only holds strings, so a value may be either JSON or
//! a string containing JSON; both are accepted.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::types::{Meeting, ResponseRecord};
use crate::{Error, Result};

/// Key holding archived meetings.
pub const PAST_MEETINGS_KEY: &str = "pastMeetings";

/// Key holding saved (most recent) meetings.
pub const SAVED_MEETINGS_KEY: &str = "savedMeetings";

/// Key holding the responses of the previous meeting, keyed by isolation id.
pub const PREVIOUS_RESPONSES_KEY: &str = "previousMeetingResponses";

/// Supplies meetings to the engine.
pub trait MeetingSource {
    /// Returns every meeting the source knows about.
    fn meetings(&self) -> Result<Vec<Meeting>>;
}

impl MeetingSource for Vec<Meeting> {
    fn meetings(&self) -> Result<Vec<Meeting>> {
        Ok(self.clone())
    }
}

/// A point-in-time copy of the key-value store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    entries: Map<String, Value>,
}

impl StoreSnapshot {
    /// Parses a snapshot from a JSON object of key → value.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Wraps an already-parsed JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(Error::store(
                "<root>",
                format!("expected an object, found {}", kind(&other)),
            )),
        }
    }

    /// Keys present in the snapshot.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Stores a value under a key, replacing any previous value.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Decodes the value under `key`. A missing key or a `null` value is
    /// `Ok(None)`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let value = match self.entries.get(key) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::String(raw)) => serde_json::from_str(raw)
                .map_err(|e| Error::store(key, format!("stored string is not JSON: {e}")))?,
            Some(value) => value.clone(),
        };
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| Error::store(key, e.to_string()))
    }

    /// Meetings stored under one key, empty if the key is absent.
    ///
    /// The value must be an array. Elements that are not meetings are
    /// skipped with a warning.
    pub fn meetings_under(&self, key: &str) -> Result<Vec<Meeting>> {
        let items = self.get::<Vec<Value>>(key)?.unwrap_or_default();
        Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(meeting) => Some(meeting),
                Err(e) => {
                    tracing::warn!(key, index, error = %e, "skipping unreadable meeting");
                    None
                }
            })
            .collect())
    }

    /// Archived meetings.
    pub fn past_meetings(&self) -> Result<Vec<Meeting>> {
        self.meetings_under(PAST_MEETINGS_KEY)
    }

    /// Saved meetings, most recent first.
    pub fn saved_meetings(&self) -> Result<Vec<Meeting>> {
        self.meetings_under(SAVED_MEETINGS_KEY)
    }

    /// The previous meeting's responses, if recorded. Entries that are not
    /// responses are skipped.
    pub fn previous_responses(&self) -> Result<BTreeMap<String, ResponseRecord>> {
        let entries = self
            .get::<Map<String, Value>>(PREVIOUS_RESPONSES_KEY)?
            .unwrap_or_default();
        Ok(entries
            .into_iter()
            .filter_map(|(id, item)| serde_json::from_value(item).ok().map(|r| (id, r)))
            .collect())
    }
}

impl MeetingSource for StoreSnapshot {
    /// Archived meetings followed by saved meetings.
    fn meetings(&self) -> Result<Vec<Meeting>> {
        let mut meetings = self.past_meetings()?;
        meetings.extend(self.saved_meetings()?);
        tracing::debug!(count = meetings.len(), "loaded meetings from snapshot");
        Ok(meetings)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
