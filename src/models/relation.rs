//! Shape of the `timesheet_date` relation field inside a create payload.
//!
//! The caller states which form it is sending; hooks never guess from the
//! payload's keys.

use serde::Serialize;

/// Reference to an existing document, as used by connect/disconnect/set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationRef {
    pub id: i64,
    pub document_id: String,
    pub is_temporary: bool,
}

/// Structured instruction to attach or detach related documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationDirective {
    pub connect: Vec<RelationRef>,
    pub disconnect: Vec<RelationRef>,
    pub set: Vec<RelationRef>,
}

impl RelationDirective {
    /// Connect exactly one persisted document, disconnect nothing.
    pub fn connect_one(id: i64, document_id: String) -> Self {
        Self {
            connect: vec![RelationRef {
                id,
                document_id,
                is_temporary: false,
            }],
            ..Default::default()
        }
    }

    /// Replace the relation with the given documents.
    pub fn set(refs: Vec<RelationRef>) -> Self {
        Self {
            set: refs,
            ..Default::default()
        }
    }

    /// The document the relation ends up pointing to, if any.
    pub fn target(&self) -> Option<&RelationRef> {
        self.set.first().or_else(|| self.connect.first())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RelationInput {
    /// Raw dates typed by the user; the creation hook turns them into a record.
    RawInput {
        start_date: Option<String>,
        end_date: Option<String>,
    },
    /// Numeric id of a date record that already exists.
    AlreadyResolvedId(i64),
    /// connect/disconnect/set instruction, already resolved.
    RelationDirective(RelationDirective),
}

impl RelationInput {
    pub fn raw(start_date: &str, end_date: &str) -> Self {
        RelationInput::RawInput {
            start_date: Some(start_date.to_string()),
            end_date: Some(end_date.to_string()),
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, RelationInput::RawInput { .. })
    }

    /// Numeric id of the related record, once resolved.
    pub fn resolved_id(&self) -> Option<i64> {
        match self {
            RelationInput::RawInput { .. } => None,
            RelationInput::AlreadyResolvedId(id) => Some(*id),
            RelationInput::RelationDirective(d) => d.target().map(|r| r.id),
        }
    }
}
