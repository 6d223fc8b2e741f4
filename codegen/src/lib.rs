//! RDF-to-DTDL mapping engine.
//!
//! Walks the classes of an [`OntologyGraph`] and produces one DTDL v2
//! [`Interface`](dtdl::Interface) per IRI class: a synthesized DTMI, display
//! name and comment from the first label/comment, up to two parents in
//! `extends`, and a relationship or property for every object or datatype
//! property whose domain includes the class.
//!
//! # Entry Point
//!
//! ```
//! use dtdl_codegen::{ConversionConfig, Converter, SchemaMap};
//!
//! let graph = dtdl_ontology::parse_turtle(
//!     "@prefix owl: <http://www.w3.org/2002/07/owl#> .
//!      <http://ex.org/onto#Pump> a owl:Class .",
//! )
//! .expect("valid Turtle");
//! let config = ConversionConfig::new("com:example", 1);
//! let schema_map = SchemaMap::xsd();
//! let conversion = Converter::new(&config, &schema_map).convert(&graph);
//! assert!(conversion.is_ok());
//! ```
//!
//! # Failure policy
//!
//! A class whose identifier cannot be assigned is skipped and recorded in
//! [`Conversion::skipped`]. A relationship whose target identifier cannot be
//! assigned is kept without a `target`. A datatype property with no range, or
//! with a range missing from the [`SchemaMap`], aborts the whole conversion.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod content;
pub mod document;
pub mod dtdl;
pub mod error;
pub mod identifier;
pub mod interface;
pub mod mapping;
pub mod metadata;

use dtdl_ontology::OntologyGraph;
use tracing::{info, warn};

pub use document::{write_artifact, Document};
pub use dtdl::{Content, Interface, DTDL_V2_CONTEXT};
pub use error::{ConversionError, IdentifierError, UnknownSchema};
pub use identifier::{synthesize, Dtmi, MAX_DTMI_LEN};
pub use mapping::{PrimitiveSchema, SchemaMap};

/// Namespace and version settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// DTMI path segments placed between `dtmi:` and the local name, e.g. `com:example`.
    pub dtmi_prefix: String,
    /// DTMI version suffix.
    pub model_version: u32,
    /// The `@context` written on every interface.
    pub context: String,
}

impl ConversionConfig {
    /// Creates a configuration targeting the DTDL v2 context.
    pub fn new(dtmi_prefix: impl Into<String>, model_version: u32) -> Self {
        Self {
            dtmi_prefix: dtmi_prefix.into(),
            model_version,
            context: DTDL_V2_CONTEXT.to_string(),
        }
    }
}

/// A class that produced no interface because its identifier was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedClass {
    /// The class IRI.
    pub class: String,
    /// Why it was skipped.
    pub error: IdentifierError,
}

/// Result of a conversion run.
#[derive(Debug, Default)]
pub struct Conversion {
    /// Interfaces in class visitation order.
    pub interfaces: Vec<Interface>,
    /// Classes skipped because of identifier failures.
    pub skipped: Vec<SkippedClass>,
}

impl Conversion {
    /// Number of relationships across all interfaces.
    #[must_use]
    pub fn relationship_count(&self) -> usize {
        self.contents()
            .filter(|c| matches!(c, Content::Relationship(_)))
            .count()
    }

    /// Number of properties across all interfaces.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.contents()
            .filter(|c| matches!(c, Content::Property(_)))
            .count()
    }

    /// Consumes the report, keeping the interfaces as a document.
    #[must_use]
    pub fn into_document(self) -> Document {
        Document::new(self.interfaces)
    }

    fn contents(&self) -> impl Iterator<Item = &Content> {
        self.interfaces.iter().flat_map(|i| i.contents.iter())
    }
}

/// Converts ontology classes to DTDL interfaces.
///
/// Holds only borrowed, read-only settings, so one converter can be reused
/// across graphs.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    config: &'a ConversionConfig,
    schema_map: &'a SchemaMap,
}

impl<'a> Converter<'a> {
    /// Creates a converter.
    #[must_use]
    pub fn new(config: &'a ConversionConfig, schema_map: &'a SchemaMap) -> Self {
        Self { config, schema_map }
    }

    /// Converts every `owl:Class` in `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::SchemaMapping`] or
    /// [`ConversionError::MissingRange`] on the first datatype property that
    /// cannot be given a schema. Identifier failures do not abort the run.
    pub fn convert(&self, graph: &OntologyGraph) -> Result<Conversion, ConversionError> {
        let mut conversion = Conversion::default();
        let classes = graph.classes();
        info!("Converting {} classes...", classes.len());

        for class in &classes {
            match self.map_class(class) {
                Ok(Some(interface)) => conversion.interfaces.push(interface),
                Ok(None) => {}
                Err(ConversionError::Identifier(error)) => {
                    warn!("Could not generate DTMI for {class}: {error}");
                    conversion.skipped.push(SkippedClass {
                        class: class.to_string(),
                        error,
                    });
                }
                Err(fatal) => return Err(fatal),
            }
        }

        Ok(conversion)
    }
}

/// Converts `graph` with the default XSD schema map.
///
/// # Errors
///
/// See [`Converter::convert`].
pub fn convert(
    graph: &OntologyGraph,
    config: &ConversionConfig,
) -> Result<Conversion, ConversionError> {
    Converter::new(config, &SchemaMap::xsd()).convert(graph)
}
