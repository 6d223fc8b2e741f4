//! Digital Twin Model Identifier (DTMI) synthesis.
//!
//! Every IRI resource maps to `dtmi:{prefix}:{localName};{version}`. The
//! local name is taken verbatim (see [`local_name`]); characters the DTMI
//! grammar forbids are not filtered here and surface later in validation.

use std::fmt;

use dtdl_ontology::Node;
use serde::Serialize;

use crate::error::IdentifierError;
use crate::mapping::local_name;
use crate::ConversionConfig;

/// Maximum length of a DTMI, in characters.
pub const MAX_DTMI_LEN: usize = 128;

/// A length-checked DTMI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Dtmi(String);

impl Dtmi {
    /// Wraps `id`, rejecting it if it is longer than [`MAX_DTMI_LEN`].
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::TooLong`] for over-length identifiers.
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierError> {
        let id = id.into();
        let length = id.chars().count();
        if length > MAX_DTMI_LEN {
            return Err(IdentifierError::TooLong {
                id,
                length,
                max: MAX_DTMI_LEN,
            });
        }
        Ok(Self(id))
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dtmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Synthesizes the DTMI for a graph node.
///
/// Returns `Ok(None)` when the node is not an IRI; such resources have no
/// identifier and callers skip them.
///
/// # Errors
///
/// Returns [`IdentifierError::TooLong`] if the composed identifier exceeds
/// [`MAX_DTMI_LEN`] characters.
pub fn synthesize(node: &Node, config: &ConversionConfig) -> Result<Option<Dtmi>, IdentifierError> {
    let Some(iri) = node.as_iri() else {
        return Ok(None);
    };
    let id = format!(
        "dtmi:{}:{};{}",
        config.dtmi_prefix,
        local_name(iri),
        config.model_version
    );
    Dtmi::new(id).map(Some)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn config() -> ConversionConfig {
        ConversionConfig::new("com:example", 1)
    }

    #[test]
    fn hash_iri() {
        let node = Node::iri("http://ex.org/onto#Pump");
        let id = synthesize(&node, &config()).unwrap().unwrap();
        assert_eq!(id.as_str(), "dtmi:com:example:Pump;1");
    }

    #[test]
    fn slash_iri() {
        let node = Node::iri("http://webprotege.stanford.edu/Pizza");
        let config = ConversionConfig::new("org:pizza", 3);
        let id = synthesize(&node, &config).unwrap().unwrap();
        assert_eq!(id.as_str(), "dtmi:org:pizza:Pizza;3");
    }

    #[test]
    fn non_iri_nodes_have_no_identifier() {
        let blank = Node::BlankNode("b0".into());
        assert_eq!(synthesize(&blank, &config()), Ok(None));
        let literal = Node::Literal(dtdl_ontology::Literal::plain("Pump"));
        assert_eq!(synthesize(&literal, &config()), Ok(None));
    }

    #[test]
    fn exactly_max_length_is_accepted() {
        let fixed = "dtmi:com:example:;1".len();
        let local = "a".repeat(MAX_DTMI_LEN - fixed);
        let node = Node::iri(format!("http://ex.org/onto#{local}"));
        let id = synthesize(&node, &config()).unwrap().unwrap();
        assert_eq!(id.as_str().len(), MAX_DTMI_LEN);
    }

    #[test]
    fn over_length_is_rejected() {
        let local = "a".repeat(MAX_DTMI_LEN);
        let node = Node::iri(format!("http://ex.org/onto#{local}"));
        match synthesize(&node, &config()) {
            Err(IdentifierError::TooLong { length, max, .. }) => {
                assert_eq!(max, MAX_DTMI_LEN);
                assert!(length > MAX_DTMI_LEN);
            }
            other => panic!("expected TooLong, got {other:?}"),
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let id = format!("dtmi:x:{};1", "é".repeat(100));
        assert!(id.len() > MAX_DTMI_LEN);
        assert!(Dtmi::new(id).is_ok());
    }
}
