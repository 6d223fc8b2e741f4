//! DTDL v2 structural validator.
//!
//! Compiles the bundled JSON Schema (`schema/dtdl-v2-interfaces.schema.json`)
//! and checks generated documents against it:
//! - DTMI syntax and length for `@id`, `extends` entries and `target`
//! - `@type` and `@context` constants, at most two `extends`
//! - content `@type`, required `name` / `schema`, primitive schema names
//! - `displayName` and `comment` length limits
//!
//! Each schema violation becomes a [`ParsingError`] located by interface
//! `@id`, content `name` (or `extends` entry) and field.

use anyhow::{anyhow, Result};
use jsonschema::error::ValidationErrorKind;
use jsonschema::{JSONSchema, ValidationError};
use serde_json::Value;

use crate::report::ParsingError;
use crate::{ModelValidator, ValidationFailure};

/// The bundled DTDL v2 interface-array schema.
pub const DTDL_V2_SCHEMA: &str = include_str!("../../schema/dtdl-v2-interfaces.schema.json");

/// Validates documents against [`DTDL_V2_SCHEMA`].
pub struct StructuralValidator {
    compiled: JSONSchema,
}

impl StructuralValidator {
    /// Compiles the bundled schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled schema does not parse or compile.
    pub fn new() -> Result<Self> {
        let schema: Value = serde_json::from_str(DTDL_V2_SCHEMA)
            .map_err(|e| anyhow!("Failed to parse bundled DTDL schema: {e}"))?;
        let compiled = JSONSchema::compile(&schema)
            .map_err(|e| anyhow!("Failed to compile bundled DTDL schema: {e}"))?;
        Ok(Self { compiled })
    }
}

impl ModelValidator for StructuralValidator {
    fn validate(&self, document: &str) -> Result<(), ValidationFailure> {
        let value: Value = serde_json::from_str(document).map_err(|e| {
            ValidationFailure::Invalid(vec![ParsingError::new(format!(
                "Document is not valid JSON: {e}"
            ))])
        })?;

        let errors: Vec<ParsingError> = match self.compiled.validate(&value) {
            Ok(()) => return Ok(()),
            Err(errors) => errors.map(|e| locate(&value, &e)).collect(),
        };
        Err(ValidationFailure::Invalid(errors))
    }
}

/// Maps a schema violation to a located [`ParsingError`].
fn locate(document: &Value, error: &ValidationError<'_>) -> ParsingError {
    let pointer = error.instance_path.to_string();
    let path: Vec<&str> = pointer.split('/').skip(1).collect();

    let interface = path
        .first()
        .and_then(|i| i.parse::<usize>().ok())
        .and_then(|i| document.get(i));
    let primary_id = interface
        .and_then(|i| i.get("@id"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let secondary_id = match (interface, path.get(1).copied(), path.get(2)) {
        (Some(i), Some("contents"), Some(j)) => j
            .parse::<usize>()
            .ok()
            .and_then(|j| i.get("contents")?.get(j)?.get("name")?.as_str())
            .map(str::to_string),
        (Some(i), Some("extends"), Some(j)) => j
            .parse::<usize>()
            .ok()
            .and_then(|j| i.get("extends")?.get(j)?.as_str())
            .map(str::to_string),
        _ => None,
    };

    let property = match &error.kind {
        ValidationErrorKind::Required { property } => property.as_str().map(str::to_string),
        ValidationErrorKind::AdditionalProperties { unexpected } => unexpected.first().cloned(),
        _ => path
            .iter()
            .rev()
            .find(|segment| segment.parse::<usize>().is_err())
            .map(|segment| segment.replace("~1", "/").replace("~0", "~")),
    };

    let location = if pointer.is_empty() { "/" } else { pointer.as_str() };
    ParsingError::new(format!("{error} (at {location})"))
        .with_primary_id(primary_id)
        .with_secondary_id(secondary_id)
        .with_property(property)
}
