//! Core ontology graph types.
//!
//! An [`OntologyGraph`] is an insertion-ordered, duplicate-free set of
//! [`Triple`]s. Classes and properties are not stored separately; they are
//! read through borrowed views ([`OntologyClass`], [`OntologyProperty`]) that
//! walk the subject/object indexes on demand. Iteration order is always the
//! order in which triples were first inserted, so a given input document
//! yields the same visitation order on every load.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// The kind of an RDF term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// An absolute IRI.
    Iri,
    /// A blank node (anonymous resource).
    BlankNode,
    /// A literal value.
    Literal,
}

/// A literal value: lexical form plus optional datatype or language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The lexical form, e.g. `"Pump"`.
    pub lexical: String,
    /// Datatype IRI, when the parser reported one.
    pub datatype: Option<String>,
    /// Language tag (e.g. `"en"`), for language-tagged strings.
    pub language: Option<String>,
}

impl Literal {
    /// Creates a plain literal with no datatype or language tag.
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }
}

/// A node of the ontology graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// An absolute IRI.
    Iri(String),
    /// A blank node, identified by its document-local label.
    BlankNode(String),
    /// A literal.
    Literal(Literal),
}

impl Node {
    /// Convenience constructor for an IRI node.
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    /// Returns the kind of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Iri(_) => NodeKind::Iri,
            Node::BlankNode(_) => NodeKind::BlankNode,
            Node::Literal(_) => NodeKind::Literal,
        }
    }

    /// Returns the IRI if this node is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this node is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => f.write_str(iri),
            Node::BlankNode(id) => write!(f, "_:{id}"),
            Node::Literal(lit) => f.write_str(&lit.lexical),
        }
    }
}

/// A single `subject predicate object` statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject node (IRI or blank node).
    pub subject: Node,
    /// Predicate IRI.
    pub predicate: String,
    /// Object node.
    pub object: Node,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: Node, predicate: impl Into<String>, object: Node) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// Whether a property is object-valued, datatype-valued, or something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `owl:ObjectProperty`: relates two resources.
    Object,
    /// `owl:DatatypeProperty`: relates a resource to a literal.
    Datatype,
    /// Any other first type assertion, or none at all.
    Other,
}

/// An in-memory ontology graph.
#[derive(Debug, Default)]
pub struct OntologyGraph {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
    by_subject: HashMap<Node, Vec<usize>>,
    by_object: HashMap<Node, Vec<usize>>,
}

impl OntologyGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a triple. Returns `false` if the graph already held it.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        let index = self.triples.len();
        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(index);
        self.by_object
            .entry(triple.object.clone())
            .or_default()
            .push(index);
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Returns the number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Objects of `subject predicate ?o`, in insertion order.
    pub fn objects<'g>(
        &'g self,
        subject: &Node,
        predicate: &'g str,
    ) -> impl Iterator<Item = &'g Node> + 'g {
        self.by_subject
            .get(subject)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&i| &self.triples[i])
            .filter(move |t| t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Subjects of `?s predicate object`, in insertion order.
    pub fn subjects<'g>(
        &'g self,
        predicate: &'g str,
        object: &Node,
    ) -> impl Iterator<Item = &'g Node> + 'g {
        self.by_object
            .get(object)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&i| &self.triples[i])
            .filter(move |t| t.predicate == predicate)
            .map(|t| &t.subject)
    }

    /// Every resource typed `owl:Class`, in first-seen order.
    #[must_use]
    pub fn classes(&self) -> Vec<OntologyClass<'_>> {
        let owl_class = Node::iri(iris::OWL_CLASS);
        let mut seen = HashSet::new();
        self.subjects(iris::RDF_TYPE, &owl_class)
            .filter(|node| seen.insert(*node))
            .map(|node| OntologyClass { graph: self, node })
            .collect()
    }

    /// Returns a class view over `node`.
    #[must_use]
    pub fn class<'g>(&'g self, node: &'g Node) -> OntologyClass<'g> {
        OntologyClass { graph: self, node }
    }

    /// Returns a property view over `node`.
    #[must_use]
    pub fn property<'g>(&'g self, node: &'g Node) -> OntologyProperty<'g> {
        OntologyProperty { graph: self, node }
    }

    fn literals<'g>(&'g self, subject: &Node, predicate: &'g str) -> Vec<&'g Literal> {
        self.objects(subject, predicate)
            .filter_map(Node::as_literal)
            .collect()
    }
}

/// A resource that carries `rdfs:label` and `rdfs:comment` annotations.
pub trait Annotated {
    /// The underlying graph node.
    fn node(&self) -> &Node;
    /// `rdfs:label` literals, in document order.
    fn labels(&self) -> Vec<&Literal>;
    /// `rdfs:comment` literals, in document order.
    fn comments(&self) -> Vec<&Literal>;
}

/// Read-only view of an ontology class.
#[derive(Debug, Clone, Copy)]
pub struct OntologyClass<'g> {
    graph: &'g OntologyGraph,
    node: &'g Node,
}

impl<'g> OntologyClass<'g> {
    /// Direct super-classes (`rdfs:subClassOf` objects), in document order.
    /// Restrictions and other anonymous classes appear as blank nodes.
    #[must_use]
    pub fn direct_super_classes(&self) -> Vec<OntologyClass<'g>> {
        self.graph
            .objects(self.node, iris::RDFS_SUB_CLASS_OF)
            .map(|node| self.graph.class(node))
            .collect()
    }

    /// Properties whose `rdfs:domain` includes this class, in document order.
    #[must_use]
    pub fn is_domain_of(&self) -> Vec<OntologyProperty<'g>> {
        let mut seen = HashSet::new();
        self.graph
            .subjects(iris::RDFS_DOMAIN, self.node)
            .filter(|node| seen.insert(*node))
            .map(|node| self.graph.property(node))
            .collect()
    }
}

impl Annotated for OntologyClass<'_> {
    fn node(&self) -> &Node {
        self.node
    }

    fn labels(&self) -> Vec<&Literal> {
        self.graph.literals(self.node, iris::RDFS_LABEL)
    }

    fn comments(&self) -> Vec<&Literal> {
        self.graph.literals(self.node, iris::RDFS_COMMENT)
    }
}

impl fmt::Display for OntologyClass<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node.fmt(f)
    }
}

/// Read-only view of an ontology property.
#[derive(Debug, Clone, Copy)]
pub struct OntologyProperty<'g> {
    graph: &'g OntologyGraph,
    node: &'g Node,
}

impl<'g> OntologyProperty<'g> {
    /// `rdf:type` objects, in document order.
    #[must_use]
    pub fn types(&self) -> Vec<&'g Node> {
        self.graph.objects(self.node, iris::RDF_TYPE).collect()
    }

    /// Classifies the property by its first type assertion only.
    ///
    /// A property typed `owl:FunctionalProperty` before `owl:ObjectProperty`
    /// is therefore [`PropertyKind::Other`].
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        match self.types().first().and_then(|t| t.as_iri()) {
            Some(iris::OWL_OBJECT_PROPERTY) => PropertyKind::Object,
            Some(iris::OWL_DATATYPE_PROPERTY) => PropertyKind::Datatype,
            _ => PropertyKind::Other,
        }
    }

    /// Declared `rdfs:range` nodes, in document order.
    #[must_use]
    pub fn ranges(&self) -> Vec<&'g Node> {
        self.graph.objects(self.node, iris::RDFS_RANGE).collect()
    }
}

impl Annotated for OntologyProperty<'_> {
    fn node(&self) -> &Node {
        self.node
    }

    fn labels(&self) -> Vec<&Literal> {
        self.graph.literals(self.node, iris::RDFS_LABEL)
    }

    fn comments(&self) -> Vec<&Literal> {
        self.graph.literals(self.node, iris::RDFS_COMMENT)
    }
}

impl fmt::Display for OntologyProperty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node.fmt(f)
    }
}

/// Standard vocabulary IRIs.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:domain`.
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`.
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";

    // XSD datatypes
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:date`.
    pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    /// `xsd:dateTime`.
    pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    /// `xsd:double`.
    pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    /// `xsd:duration`.
    pub const XSD_DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";
    /// `xsd:float`.
    pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    /// `xsd:int`.
    pub const XSD_INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:long`.
    pub const XSD_LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:time`.
    pub const XSD_TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
}
