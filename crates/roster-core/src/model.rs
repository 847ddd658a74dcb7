//! Record model.
//!
//! A [`Record`] is a single editable user entry. Its identity is the
//! [`RecordId`]; the remaining fields are the ones an operator can edit
//! inline through a [`RecordDraft`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParseFieldError;

// =============================================================================
// RECORD ID
// =============================================================================

/// Identifier of a record within the master collection.
///
/// Upstream sources send ids either as JSON strings (`"7"`) or as plain
/// numbers (`7`); both deserialize to the same textual id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// A user record as delivered by the load source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Record {
    /// Create a record from its four fields.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Read one editable field.
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Name => &self.name,
            RecordField::Email => &self.email,
            RecordField::Role => &self.role,
        }
    }

    /// Overwrite the editable fields with the values held by a draft.
    pub fn apply(&mut self, draft: &RecordDraft) {
        self.name.clone_from(&draft.name);
        self.email.clone_from(&draft.email);
        self.role.clone_from(&draft.role);
    }
}

// =============================================================================
// EDITABLE FIELDS
// =============================================================================

/// The fields an operator may edit inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Name,
    Email,
    Role,
}

impl RecordField {
    /// All editable fields in column order.
    pub const ALL: [RecordField; 3] = [Self::Name, Self::Email, Self::Role];

    /// Column header label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
        }
    }
}

impl FromStr for RecordField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "role" => Ok(Self::Role),
            _ => Err(ParseFieldError {
                input: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// EDIT DRAFT
// =============================================================================

/// Working copy of a record's editable fields.
///
/// Changes made here stay invisible to the master collection until the
/// draft is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl RecordDraft {
    /// Seed a draft from the committed values of a record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
        }
    }

    /// Read one field of the draft.
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Name => &self.name,
            RecordField::Email => &self.email,
            RecordField::Role => &self.role,
        }
    }

    /// Replace one field of the draft.
    pub fn set(&mut self, field: RecordField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RecordField::Name => self.name = value,
            RecordField::Email => self.email = value,
            RecordField::Role => self.role = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_string_and_number() {
        let records: Vec<Record> = serde_json::from_str(
            r#"[
                {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
                {"id": 2, "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "member"}
            ]"#,
        )
        .unwrap();

        assert_eq!(records[0].id, RecordId::from("1"));
        assert_eq!(records[1].id, RecordId::from("2"));
    }

    #[test]
    fn test_record_field_parse() {
        assert_eq!("name".parse::<RecordField>().unwrap(), RecordField::Name);
        assert_eq!(" EMAIL ".parse::<RecordField>().unwrap(), RecordField::Email);
        assert_eq!("Role".parse::<RecordField>().unwrap(), RecordField::Role);
        assert!("id".parse::<RecordField>().is_err());
    }

    #[test]
    fn test_apply_draft() {
        let mut record = Record::new("3", "Arvind Kumar", "arvind@mailinator.com", "admin");
        let mut draft = RecordDraft::from_record(&record);
        draft.set(RecordField::Name, "New Name");
        draft.set(RecordField::Role, "member");

        record.apply(&draft);

        assert_eq!(record.name, "New Name");
        assert_eq!(record.email, "arvind@mailinator.com");
        assert_eq!(record.role, "member");
        assert_eq!(record.id, RecordId::from("3"));
    }
}
