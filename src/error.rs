// ⚠️ Error taxonomy for the park ledger
//
// Every failure is raised to the immediate caller before any state changes.

use crate::entities::{ParkId, VisitorId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParkError {
    /// A constructor argument failed its length constraint
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// Attempt to reassign a write-once field
    #[error("{field} is immutable and cannot be changed after instantiation")]
    ImmutableField { field: String },

    /// A derived query has no defined answer for an empty collection
    #[error("{what} is undefined: no trips recorded")]
    EmptyCollection { what: String },

    #[error("park not found: {0}")]
    UnknownPark(ParkId),

    #[error("visitor not found: {0}")]
    UnknownVisitor(VisitorId),

    #[error("report serialization failed: {0}")]
    Serialization(String),
}

impl ParkError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ParkError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ParkError::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, ParkError>;
