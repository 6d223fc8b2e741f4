//! Validation report types: structured parsing errors and gate outcomes.

use std::fmt;

/// A single structural error reported by a DTDL validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingError {
    /// Human-readable description of the problem.
    pub message: String,
    /// `@id` of the interface the error was found in.
    pub primary_id: Option<String>,
    /// Identifier of the offending element inside that interface: a content
    /// `name` or an `extends` entry.
    pub secondary_id: Option<String>,
    /// The offending field, e.g. `schema` or `@id`.
    pub property: Option<String>,
}

impl ParsingError {
    /// Creates an error with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            primary_id: None,
            secondary_id: None,
            property: None,
        }
    }

    /// Sets the primary identifier.
    #[must_use]
    pub fn with_primary_id(mut self, id: Option<String>) -> Self {
        self.primary_id = id;
        self
    }

    /// Sets the secondary identifier.
    #[must_use]
    pub fn with_secondary_id(mut self, id: Option<String>) -> Self {
        self.secondary_id = id;
        self
    }

    /// Sets the offending property name.
    #[must_use]
    pub fn with_property(mut self, property: Option<String>) -> Self {
        self.property = property;
        self
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_none = |v: &Option<String>| v.clone().unwrap_or_default();
        writeln!(f, "{}", self.message)?;
        writeln!(f, "Primary ID: {}", or_none(&self.primary_id))?;
        writeln!(f, "Secondary ID: {}", or_none(&self.secondary_id))?;
        write!(f, "Property: {}", or_none(&self.property))
    }
}

/// What the validation gate concluded about a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// The validator accepted the document.
    Valid,
    /// The validator rejected the document with these errors.
    Invalid(Vec<ParsingError>),
    /// The validator itself failed.
    Errored(String),
}

impl GateOutcome {
    /// Returns true if the document was accepted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, GateOutcome::Valid)
    }

    /// The reported parsing errors; empty unless [`GateOutcome::Invalid`].
    #[must_use]
    pub fn errors(&self) -> &[ParsingError] {
        match self {
            GateOutcome::Invalid(errors) => errors,
            _ => &[],
        }
    }
}
