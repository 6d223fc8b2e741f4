//! DTDL validation gate.
//!
//! Checks a generated DTDL document before it is reported as usable. The gate
//! is written against the [`ModelValidator`] trait so the bundled
//! [`StructuralValidator`] can be swapped for a full DTDL parser.
//!
//! # Conformance Scope
//!
//! | Check | Standard |
//! |-------|----------|
//! | Document shape | JSON array of DTDL v2 interfaces |
//! | Identifiers | DTMI syntax, at most 128 characters |
//! | Interfaces | `@type`, `@context`, at most 2 `extends`, at most 300 contents |
//! | Contents | `Property` / `Relationship`, primitive schemas, `displayName` ≤ 64 |
//!
//! # Entry Point
//!
//! ```
//! use dtdl_conformance::{gate, StructuralValidator};
//!
//! let validator = StructuralValidator::new().map_err(|e| e.to_string());
//! if let Ok(validator) = validator {
//!     assert!(gate(&validator, "[]").is_valid());
//! }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod tests;
pub mod validators;

use tracing::{error, info, warn};

pub use report::{GateOutcome, ParsingError};
pub use validators::dtdl::{StructuralValidator, DTDL_V2_SCHEMA};

/// Why a validator did not accept a document.
#[derive(Debug, thiserror::Error)]
pub enum ValidationFailure {
    /// The document was checked and found invalid.
    #[error("document is invalid ({} errors)", .0.len())]
    Invalid(Vec<ParsingError>),
    /// The validator failed for a reason unrelated to the document.
    #[error("validator failed: {0}")]
    Internal(String),
}

/// A DTDL model validator.
pub trait ModelValidator {
    /// Validates a serialized DTDL document.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure::Invalid`] with every structural error
    /// found, or [`ValidationFailure::Internal`] if validation could not run.
    fn validate(&self, document: &str) -> Result<(), ValidationFailure>;
}

/// Runs `validator` over `document` and classifies the result.
///
/// Never fails: validator errors become [`GateOutcome::Errored`].
pub fn gate(validator: &dyn ModelValidator, document: &str) -> GateOutcome {
    match validator.validate(document) {
        Ok(()) => {
            info!("DTDL validation passed");
            GateOutcome::Valid
        }
        Err(ValidationFailure::Invalid(errors)) => {
            warn!("DTDL validation failed with {} errors", errors.len());
            GateOutcome::Invalid(errors)
        }
        Err(ValidationFailure::Internal(message)) => {
            error!("DTDL validator failed: {message}");
            GateOutcome::Errored(message)
        }
    }
}
