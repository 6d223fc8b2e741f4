//! DTDL v2 wire model.
//!
//! Field declaration order is the serialized order. Absent optional fields
//! are omitted rather than written as `null`.

use serde::Serialize;

use crate::identifier::Dtmi;
use crate::mapping::PrimitiveSchema;

/// The DTDL v2 context identifier.
pub const DTDL_V2_CONTEXT: &str = "dtmi:dtdl:context;2";

/// Maximum number of `extends` entries on an interface.
pub const MAX_EXTENDS: usize = 2;

/// The `@type` of an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InterfaceType {
    /// `"Interface"`
    Interface,
}

/// A DTDL interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    /// `@id`
    #[serde(rename = "@id")]
    pub id: Dtmi,
    /// `@type`, always `Interface`.
    #[serde(rename = "@type")]
    pub kind: InterfaceType,
    /// Relationships and properties, in the order their ontology properties
    /// were encountered.
    pub contents: Vec<Content>,
    /// `@context`
    #[serde(rename = "@context")]
    pub context: String,
    /// Parent interfaces, at most [`MAX_EXTENDS`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<Dtmi>,
    /// `displayName`
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// `comment`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Interface {
    /// Creates an interface with no contents, parents, or annotations.
    pub fn new(id: Dtmi, context: impl Into<String>) -> Self {
        Self {
            id,
            kind: InterfaceType::Interface,
            contents: Vec::new(),
            context: context.into(),
            extends: Vec::new(),
            display_name: None,
            comment: None,
        }
    }
}

/// An element of an interface's `contents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub enum Content {
    /// An edge to another interface.
    Relationship(Relationship),
    /// A scalar attribute.
    Property(Property),
}

impl Content {
    /// The `name` of this content element.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Content::Relationship(r) => &r.name,
            Content::Property(p) => &p.name,
        }
    }
}

/// A DTDL relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    /// The object property's full IRI.
    pub name: String,
    /// The target interface; absent means any interface may be targeted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Dtmi>,
    /// `comment`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// `displayName`
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// A DTDL property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// The datatype property's full IRI.
    pub name: String,
    /// Primitive schema mapped from the property's range.
    pub schema: PrimitiveSchema,
}
