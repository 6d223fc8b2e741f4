//! Ontology fixtures shared by the gate tests and the round-trip suite.

pub mod fixtures;
