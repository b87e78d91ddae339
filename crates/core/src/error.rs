//! Domain error model.

use serde::Serialize;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A single schema violation, tied to the input field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl core::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found while validating one input, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldIssue>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, issue: FieldIssue) {
        self.0.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.0
    }

    /// Returns the first issue reported for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&FieldIssue> {
        self.0.iter().find(|i| i.field == field)
    }
}

impl From<FieldIssue> for ValidationErrors {
    fn from(issue: FieldIssue) -> Self {
        Self(vec![issue])
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            core::fmt::Display::fmt(issue, f)?;
        }
        Ok(())
    }
}

/// Domain-level error.
///
/// Both variants are recoverable at the request boundary; neither should
/// bring the process down.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed schema validation (missing field, bad date, bad CPF, ...).
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// No record exists at the requested position.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(issues: impl Into<ValidationErrors>) -> Self {
        Self::Validation(issues.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
