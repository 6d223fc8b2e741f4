//! Conversion error taxonomy.

use thiserror::Error;

/// An identifier could not be assigned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The synthesized DTMI exceeds the length bound.
    #[error("{id} is {length} characters; a DTMI may be at most {max} characters")]
    TooLong {
        /// The rejected identifier.
        id: String,
        /// Its length in characters.
        length: usize,
        /// The bound that was exceeded.
        max: usize,
    },
}

/// A `schema` value that is not a DTDL primitive schema name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a DTDL primitive schema")]
pub struct UnknownSchema(pub String);

/// Failure while converting an ontology.
///
/// [`ConversionError::Identifier`] is raised per class and is recoverable:
/// the converter records the class as skipped and moves on. The other
/// variants abort the whole run.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The class's own identifier could not be assigned.
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
    /// A datatype property's range has no entry in the schema map.
    #[error("no primitive schema is mapped for range <{range}> of datatype property <{property}>")]
    SchemaMapping {
        /// The datatype property.
        property: String,
        /// Its first declared range.
        range: String,
    },
    /// A datatype property declares no range.
    #[error("datatype property <{property}> declares no range")]
    MissingRange {
        /// The datatype property.
        property: String,
    },
}
