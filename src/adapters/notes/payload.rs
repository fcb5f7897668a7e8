//! JSON payload shared by the Apple Notes and snapshot stores
//!
//! A payload is an array of notes. Each field is captured on its own so a
//! failure to read one field of one note survives the trip through JSON:
//!
//! ```json
//! [
//!   {
//!     "id": "x-coredata://0F1E/ICNote/p12",
//!     "name": { "value": "Grocery List" },
//!     "body": { "error": "Error: note is locked" },
//!     "modificationDate": { "value": "2026-10-18T07:05:03.000Z" }
//!   }
//! ]
//! ```

use crate::domain::{NoteAccessError, NoteId, NotesTodayError, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of reading one field in the source application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawField {
    /// The field was read
    Value(String),
    /// The source raised an error reading it
    Error(String),
}

/// One note as it appears in the payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNote {
    /// Store-side identifier; position-based when absent
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<RawField>,

    #[serde(default)]
    pub body: Option<RawField>,

    #[serde(default)]
    pub modification_date: Option<RawField>,
}

impl RawNote {
    /// Convenience constructor for a fully readable note
    pub fn readable(
        id: impl Into<String>,
        name: impl Into<String>,
        body: impl Into<String>,
        modification_date: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(RawField::Value(name.into())),
            body: Some(RawField::Value(body.into())),
            modification_date: Some(RawField::Value(modification_date.into())),
        }
    }
}

/// Parsed payload, addressable by [`NoteId`]
#[derive(Debug, Clone, Default)]
pub struct NoteIndex {
    order: Vec<NoteId>,
    notes: HashMap<NoteId, RawNote>,
}

impl NoteIndex {
    /// Builds an index from payload notes, keeping their order
    ///
    /// Notes without an id get `#<position>` (1-based). A repeated id gets
    /// `#<position>` appended until it no longer clashes with any other key.
    pub fn from_notes(raw: Vec<RawNote>) -> Self {
        let mut order = Vec::with_capacity(raw.len());
        let mut notes = HashMap::with_capacity(raw.len());

        for (i, note) in raw.into_iter().enumerate() {
            let position = i + 1;
            let mut id = match note.id.as_deref().map(str::trim) {
                Some(id) if !id.is_empty() => NoteId::from(id),
                _ => NoteId::from(format!("#{position}")),
            };
            if notes.contains_key(&id) {
                tracing::warn!(note_id = %id, position, "Duplicate note id in payload");
                while notes.contains_key(&id) {
                    id = NoteId::from(format!("{id}#{position}"));
                }
            }
            order.push(id.clone());
            notes.insert(id, note);
        }

        Self { order, notes }
    }

    /// Ids in payload order
    pub fn ids(&self) -> &[NoteId] {
        &self.order
    }

    /// Number of notes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the payload held no notes
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reads the title field
    pub fn name(&self, id: &NoteId) -> std::result::Result<String, NoteAccessError> {
        let note = self.get(id)?;
        field_value(id, "name", note.name.as_ref())
    }

    /// Reads the body field
    pub fn body(&self, id: &NoteId) -> std::result::Result<String, NoteAccessError> {
        let note = self.get(id)?;
        field_value(id, "body", note.body.as_ref())
    }

    /// Reads and parses the modification date field
    pub fn modification_date(
        &self,
        id: &NoteId,
    ) -> std::result::Result<DateTime<FixedOffset>, NoteAccessError> {
        let note = self.get(id)?;
        let raw = field_value(id, "modificationDate", note.modification_date.as_ref())?;
        parse_modification_date(&raw).ok_or_else(|| NoteAccessError::InvalidTimestamp {
            id: id.clone(),
            value: raw,
        })
    }

    /// Store-side id of a note, `None` when the payload had none
    pub fn source_id(&self, id: &NoteId) -> std::result::Result<Option<&str>, NoteAccessError> {
        let note = self.get(id)?;
        Ok(note.id.as_deref().map(str::trim).filter(|s| !s.is_empty()))
    }

    /// Whether title or body came with the payload
    pub fn has_details(&self, id: &NoteId) -> std::result::Result<bool, NoteAccessError> {
        let note = self.get(id)?;
        Ok(note.name.is_some() || note.body.is_some())
    }

    /// Stores a title and body fetched after the listing
    pub fn set_details(
        &mut self,
        id: &NoteId,
        name: RawField,
        body: RawField,
    ) -> std::result::Result<(), NoteAccessError> {
        let note = self
            .notes
            .get_mut(id)
            .ok_or_else(|| NoteAccessError::NotFound(id.clone()))?;
        note.name = Some(name);
        note.body = Some(body);
        Ok(())
    }

    fn get(&self, id: &NoteId) -> std::result::Result<&RawNote, NoteAccessError> {
        self.notes
            .get(id)
            .ok_or_else(|| NoteAccessError::NotFound(id.clone()))
    }
}

fn field_value(
    id: &NoteId,
    field: &'static str,
    raw: Option<&RawField>,
) -> std::result::Result<String, NoteAccessError> {
    match raw {
        Some(RawField::Value(v)) => Ok(v.clone()),
        Some(RawField::Error(message)) => Err(NoteAccessError::Field {
            id: id.clone(),
            field,
            message: message.clone(),
        }),
        None => Err(NoteAccessError::Field {
            id: id.clone(),
            field,
            message: "field missing from payload".to_string(),
        }),
    }
}

/// Parses a payload document
///
/// # Errors
///
/// Malformed JSON is a [`NotesTodayError::StoreAccess`]: the store answered
/// with something we can't enumerate.
pub fn parse_payload(json: &str) -> Result<NoteIndex> {
    let raw: Vec<RawNote> = serde_json::from_str(json.trim()).map_err(|e| {
        NotesTodayError::StoreAccess(format!("Unreadable notes payload: {e}"))
    })?;
    Ok(NoteIndex::from_notes(raw))
}

/// Parses a modification date
///
/// Accepts RFC 3339 (what `Date.toISOString()` produces) and the AppleScript
/// style `Y-M-D H:M:S` with un-padded components, which is taken as local
/// time.
pub fn parse_modification_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts);
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|ts| ts.fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    const PAYLOAD: &str = r#"[
        {
            "id": "n1",
            "name": { "value": "Grocery List" },
            "body": { "value": "milk\neggs" },
            "modificationDate": { "value": "2026-10-18T07:05:03.000Z" }
        },
        {
            "id": "n2",
            "name": { "value": "Locked" },
            "body": { "error": "Error: note is password protected" },
            "modificationDate": { "value": "2026-10-18T08:00:00Z" }
        },
        {
            "name": { "value": "No id" }
        }
    ]"#;

    #[test]
    fn test_parse_payload() {
        let index = parse_payload(PAYLOAD).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(
            index.ids(),
            &[NoteId::from("n1"), NoteId::from("n2"), NoteId::from("#3")]
        );

        let n1 = NoteId::from("n1");
        assert_eq!(index.name(&n1).unwrap(), "Grocery List");
        assert_eq!(index.body(&n1).unwrap(), "milk\neggs");
        let ts = index.modification_date(&n1).unwrap();
        assert_eq!(ts, DateTime::parse_from_rfc3339("2026-10-18T07:05:03Z").unwrap());
    }

    #[test]
    fn test_field_error_is_per_field() {
        let index = parse_payload(PAYLOAD).unwrap();
        let n2 = NoteId::from("n2");

        assert_eq!(index.name(&n2).unwrap(), "Locked");
        let err = index.body(&n2).unwrap_err();
        assert!(matches!(err, NoteAccessError::Field { field: "body", .. }));
        assert!(index.modification_date(&n2).is_ok());
    }

    #[test]
    fn test_missing_field() {
        let index = parse_payload(PAYLOAD).unwrap();
        let err = index.modification_date(&NoteId::from("#3")).unwrap_err();
        assert!(err.to_string().contains("field missing"));
    }

    #[test]
    fn test_unknown_note() {
        let index = parse_payload("[]").unwrap();
        assert!(index.is_empty());
        let err = index.name(&NoteId::from("ghost")).unwrap_err();
        assert_eq!(err, NoteAccessError::NotFound(NoteId::from("ghost")));
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let index = NoteIndex::from_notes(vec![
            RawNote::readable("dup", "first", "", "2026-10-18T01:00:00Z"),
            RawNote::readable("dup", "second", "", "2026-10-18T02:00:00Z"),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.name(&NoteId::from("dup")).unwrap(), "first");
        assert_eq!(index.name(&NoteId::from("dup#2")).unwrap(), "second");
    }

    #[test]
    fn test_renamed_duplicate_does_not_replace_existing_id() {
        let index = NoteIndex::from_notes(vec![
            RawNote::readable("x#3", "first", "", "2026-10-18T01:00:00Z"),
            RawNote::readable("x", "second", "", "2026-10-18T02:00:00Z"),
            RawNote::readable("x", "third", "", "2026-10-18T03:00:00Z"),
        ]);

        assert_eq!(index.len(), 3);
        let names: Vec<String> = index.ids().iter().map(|id| index.name(id).unwrap()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(index.ids()[2], NoteId::from("x#3#3"));
    }

    #[test]
    fn test_explicit_id_colliding_with_positional_id() {
        let index = NoteIndex::from_notes(vec![
            RawNote {
                id: None,
                ..RawNote::readable("", "anonymous", "", "2026-10-18T01:00:00Z")
            },
            RawNote::readable("#1", "named", "", "2026-10-18T02:00:00Z"),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.name(&index.ids()[0]).unwrap(), "anonymous");
        assert_eq!(index.name(&index.ids()[1]).unwrap(), "named");
    }

    #[test]
    fn test_details_filled_after_listing() {
        let mut index = parse_payload(
            r#"[{"id": " n1 ", "modificationDate": {"value": "2026-10-18T07:00:00Z"}}, {}]"#,
        )
        .unwrap();
        let n1 = NoteId::from("n1");

        assert_eq!(index.source_id(&n1).unwrap(), Some("n1"));
        assert_eq!(index.source_id(&NoteId::from("#2")).unwrap(), None);
        assert!(!index.has_details(&n1).unwrap());

        index
            .set_details(
                &n1,
                RawField::Value("Standup".to_string()),
                RawField::Error("Error: -1728".to_string()),
            )
            .unwrap();
        assert!(index.has_details(&n1).unwrap());
        assert_eq!(index.name(&n1).unwrap(), "Standup");
        assert!(index.body(&n1).is_err());
    }

    #[test]
    fn test_malformed_payload_is_store_error() {
        let err = parse_payload("execution error: Notes got an error (-600)").unwrap_err();
        assert!(matches!(err, NotesTodayError::StoreAccess(_)));
    }

    #[test]
    fn test_invalid_timestamp() {
        let index = NoteIndex::from_notes(vec![RawNote::readable("n", "t", "b", "yesterday-ish")]);
        let err = index.modification_date(&NoteId::from("n")).unwrap_err();
        assert!(matches!(err, NoteAccessError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_parse_modification_date_rfc3339() {
        let ts = parse_modification_date("2026-10-18T09:30:00+02:00").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(ts.hour(), 9);
    }

    #[test]
    fn test_parse_modification_date_applescript_form() {
        let ts = parse_modification_date("2026-1-5 14:3:7").unwrap();
        let expected = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(14, 3, 7)
            .unwrap();
        assert_eq!(ts.with_timezone(&Local).naive_local(), expected);
    }

    #[test]
    fn test_parse_modification_date_garbage() {
        assert!(parse_modification_date("").is_none());
        assert!(parse_modification_date("missing value").is_none());
    }
}
