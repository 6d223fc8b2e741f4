//! An ontology whose datatype property ranges over `xsd:decimal`, which the
//! default schema map does not cover. Conversion must abort.

/// Ontology with an unmapped datatype range.
pub const UNMAPPED_DATATYPE: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix ex:   <http://example.org/meter#> .

ex:Meter a owl:Class .
ex:reading a owl:DatatypeProperty ;
    rdfs:domain ex:Meter ;
    rdfs:range xsd:decimal .
"#;
