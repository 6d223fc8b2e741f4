//! OWL/RDFS ontology graph for the RDF-to-DTDL converter.
//!
//! The `dtdl-ontology` crate loads a Turtle or N-Triples document into an
//! in-memory [`OntologyGraph`] and exposes read-only views over its classes
//! and properties: labels, comments, direct super-classes, domains, ranges
//! and `rdf:type` assertions. It performs no inference.
//!
//! # Entry Point
//!
//! ```
//! let graph = dtdl_ontology::parse_turtle(
//!     "@prefix owl: <http://www.w3.org/2002/07/owl#> .
//!      <http://ex.org/onto#Pump> a owl:Class .",
//! )
//! .expect("valid Turtle");
//! assert_eq!(graph.classes().len(), 1);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod loader;
pub mod model;

pub use loader::{load, parse_ntriples, parse_turtle, LoadError, Syntax};
pub use model::{
    iris, Annotated, Literal, Node, NodeKind, OntologyClass, OntologyGraph, OntologyProperty,
    PropertyKind, Triple,
};
