//! A pizza ontology in slash-IRI style.
//!
//! Exercises slash local names, a class with three named parents, restriction
//! blank nodes among the super-classes, a relationship with no range and a
//! property shared by two domains.

/// Pizza ontology with slash IRIs and `owl:Restriction` super-classes.
pub const PIZZA: &str = r#"
@prefix rdfs:  <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:   <http://www.w3.org/2002/07/owl#> .
@prefix xsd:   <http://www.w3.org/2001/XMLSchema#> .
@prefix pizza: <http://example.org/pizza/> .

pizza:Food a owl:Class .
pizza:Pizza a owl:Class ;
    rdfs:subClassOf pizza:Food ;
    rdfs:subClassOf [ a owl:Restriction ;
                      owl:onProperty pizza:hasBase ;
                      owl:someValuesFrom pizza:PizzaBase ] .
pizza:PizzaBase a owl:Class ;
    rdfs:subClassOf pizza:Food .
pizza:Topping a owl:Class ;
    rdfs:subClassOf pizza:Food .
pizza:Spicy a owl:Class .
pizza:Vegetarian a owl:Class .
pizza:JalapenoTopping a owl:Class ;
    rdfs:subClassOf pizza:Topping , pizza:Spicy , pizza:Vegetarian ;
    rdfs:label "Jalapeño topping"@en , "Jalapeño"@es .

pizza:hasBase a owl:ObjectProperty ;
    rdfs:domain pizza:Pizza ;
    rdfs:range pizza:PizzaBase .
pizza:hasTopping a owl:ObjectProperty ;
    rdfs:domain pizza:Pizza .
pizza:calories a owl:DatatypeProperty ;
    rdfs:domain pizza:Pizza , pizza:Topping ;
    rdfs:range xsd:integer .
pizza:vegan a owl:DatatypeProperty ;
    rdfs:domain pizza:Topping ;
    rdfs:range xsd:boolean .
"#;
