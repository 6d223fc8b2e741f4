//! A small building ontology.
//!
//! Two classes linked by `rdfs:subClassOf`, one object property and one
//! `xsd:string` datatype property. Converts to a document with zero
//! validation errors.

/// Building ontology: `Space`, `Room ⊑ Space`, `adjacentTo`, `roomNumber`.
pub const BUILDING: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix bld:  <http://example.org/building#> .

<http://example.org/building> a owl:Ontology .

bld:Space a owl:Class ;
    rdfs:label "Space"@en ;
    rdfs:comment "A bounded region of a building." .

bld:Room a owl:Class ;
    rdfs:subClassOf bld:Space ;
    rdfs:label "Room"@en ;
    rdfs:comment "An enclosed space inside a building." .

bld:adjacentTo a owl:ObjectProperty ;
    rdfs:domain bld:Room ;
    rdfs:range bld:Space ;
    rdfs:label "adjacent to" .

bld:roomNumber a owl:DatatypeProperty ;
    rdfs:domain bld:Room ;
    rdfs:range xsd:string .
"#;
