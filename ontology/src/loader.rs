//! Turtle 1.1 / N-Triples loader.
//!
//! Parsing is delegated to `sophia_turtle`; each parsed triple is copied into
//! an owned [`Triple`] and inserted into an [`OntologyGraph`]. Quoted triples
//! and variables have no counterpart in the ontology model and are skipped.

use std::path::{Path, PathBuf};

use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::{nt, turtle};
use thiserror::Error;

use crate::model::{Literal, Node, OntologyGraph, Triple};

/// Input syntax of an ontology document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// Turtle 1.1 (also accepts N-Triples, which is a subset).
    Turtle,
    /// N-Triples.
    NTriples,
}

impl Syntax {
    /// Picks the syntax from a file extension: `.nt` is N-Triples, anything
    /// else is read as Turtle.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("nt") => Syntax::NTriples,
            _ => Syntax::Turtle,
        }
    }
}

/// Failure to load an ontology document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not well-formed.
    #[error("failed to parse {origin}: {message}")]
    Parse {
        /// File path, or `<string>` for in-memory input.
        origin: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// Loads an ontology file into a new graph.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Parse`] if it is not well-formed.
pub fn load(path: &Path) -> Result<OntologyGraph, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let syntax = Syntax::from_path(path);
    let graph = parse(&text, syntax, &path.display().to_string())?;
    tracing::debug!(
        path = %path.display(),
        triples = graph.len(),
        ?syntax,
        "loaded ontology"
    );
    Ok(graph)
}

/// Parses a Turtle document held in memory.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the text is not well-formed Turtle.
pub fn parse_turtle(text: &str) -> Result<OntologyGraph, LoadError> {
    parse(text, Syntax::Turtle, "<string>")
}

/// Parses an N-Triples document held in memory.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the text is not well-formed N-Triples.
pub fn parse_ntriples(text: &str) -> Result<OntologyGraph, LoadError> {
    parse(text, Syntax::NTriples, "<string>")
}

fn parse(text: &str, syntax: Syntax, origin: &str) -> Result<OntologyGraph, LoadError> {
    let mut graph = OntologyGraph::new();
    let result = match syntax {
        Syntax::Turtle => turtle::parse_str(text)
            .for_each_triple(|t| insert(&mut graph, t.s(), t.p(), t.o()))
            .map_err(|e| e.to_string()),
        Syntax::NTriples => nt::parse_str(text)
            .for_each_triple(|t| insert(&mut graph, t.s(), t.p(), t.o()))
            .map_err(|e| e.to_string()),
    };
    result.map_err(|message| LoadError::Parse {
        origin: origin.to_string(),
        message,
    })?;
    Ok(graph)
}

fn insert<S: Term, P: Term, O: Term>(graph: &mut OntologyGraph, s: S, p: P, o: O) {
    if let Some(triple) = convert(s, p, o) {
        graph.insert(triple);
    }
}

fn convert<S: Term, P: Term, O: Term>(s: S, p: P, o: O) -> Option<Triple> {
    let predicate = p.iri()?.as_str().to_string();
    Some(Triple::new(to_node(s)?, predicate, to_node(o)?))
}

fn to_node<T: Term>(term: T) -> Option<Node> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Node::Iri(iri.as_str().to_string())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Node::BlankNode(id.as_str().to_string())),
        TermKind::Literal => {
            let lexical = term.lexical_form()?.to_string();
            Some(Node::Literal(Literal {
                lexical,
                datatype: term.datatype().map(|dt| dt.as_str().to_string()),
                language: term.language_tag().map(|tag| tag.as_str().to_string()),
            }))
        }
        _ => None,
    }
}
