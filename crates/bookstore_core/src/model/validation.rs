//! Short-form validation rules shared by every entity input.

use super::{EntityId, EntityKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection of a client-supplied short form.
///
/// `Display` output is the exact message returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field is missing, empty or whitespace only.
    BlankField {
        entity: EntityKind,
        field: &'static str,
    },
    /// Required foreign key is missing, zero or negative.
    NonPositiveId {
        entity: EntityKind,
        field: &'static str,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField { entity, field } => {
                write!(f, "{entity} must have a non-null and non-empty {field}")
            }
            Self::NonPositiveId { entity, field } => {
                write!(f, "{entity} must have a positive {field}")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(
    value: Option<String>,
    entity: EntityKind,
    field: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ValidationError::BlankField { entity, field }),
    }
}

pub(crate) fn require_positive_id(
    value: Option<EntityId>,
    entity: EntityKind,
    field: &'static str,
) -> Result<EntityId, ValidationError> {
    match value {
        Some(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::NonPositiveId { entity, field }),
    }
}
