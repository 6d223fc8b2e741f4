//! An ontology whose local names are not legal DTMI segments.
//!
//! Identifiers are not character-filtered, so the converter emits them and
//! the validation gate reports them.

/// Ontology with a hyphenated class name and a hyphenated relationship target.
pub const BAD_IDENTIFIER: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <http://example.org/plant#> .

ex:Heat-Exchanger a owl:Class .
ex:Valve a owl:Class .
ex:connectedTo a owl:ObjectProperty ;
    rdfs:domain ex:Valve ;
    rdfs:range ex:Heat-Exchanger .
"#;
