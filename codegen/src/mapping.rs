//! Ontology → DTDL mapping tables.
//!
//! Deterministic mappings from XSD datatype IRIs to DTDL primitive schemas,
//! and from IRIs to their local names.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use dtdl_ontology::iris::*;
use serde::Serialize;

use crate::error::UnknownSchema;

/// A DTDL v2 primitive schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveSchema {
    /// `boolean`
    Boolean,
    /// `date`
    Date,
    /// `dateTime`
    DateTime,
    /// `double`
    Double,
    /// `duration`
    Duration,
    /// `float`
    Float,
    /// `integer`
    Integer,
    /// `long`
    Long,
    /// `string`
    String,
    /// `time`
    Time,
}

impl PrimitiveSchema {
    /// Every primitive schema, in DTDL documentation order.
    pub const ALL: [PrimitiveSchema; 10] = [
        PrimitiveSchema::Boolean,
        PrimitiveSchema::Date,
        PrimitiveSchema::DateTime,
        PrimitiveSchema::Double,
        PrimitiveSchema::Duration,
        PrimitiveSchema::Float,
        PrimitiveSchema::Integer,
        PrimitiveSchema::Long,
        PrimitiveSchema::String,
        PrimitiveSchema::Time,
    ];

    /// Returns the name used in the `schema` field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveSchema::Boolean => "boolean",
            PrimitiveSchema::Date => "date",
            PrimitiveSchema::DateTime => "dateTime",
            PrimitiveSchema::Double => "double",
            PrimitiveSchema::Duration => "duration",
            PrimitiveSchema::Float => "float",
            PrimitiveSchema::Integer => "integer",
            PrimitiveSchema::Long => "long",
            PrimitiveSchema::String => "string",
            PrimitiveSchema::Time => "time",
        }
    }
}

impl fmt::Display for PrimitiveSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveSchema {
    type Err = UnknownSchema;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveSchema::ALL
            .into_iter()
            .find(|schema| schema.as_str() == s)
            .ok_or_else(|| UnknownSchema(s.to_string()))
    }
}

/// Lookup table from datatype IRIs to primitive schemas.
///
/// Built once before conversion and only read afterwards.
#[derive(Debug, Clone)]
pub struct SchemaMap {
    entries: HashMap<String, PrimitiveSchema>,
}

impl SchemaMap {
    /// The default XSD → DTDL table.
    ///
    /// `xsd:int` and `xsd:integer` both map to `integer`.
    #[must_use]
    pub fn xsd() -> Self {
        let mut m = HashMap::new();
        m.insert(XSD_BOOLEAN.to_string(), PrimitiveSchema::Boolean);
        m.insert(XSD_DATE.to_string(), PrimitiveSchema::Date);
        m.insert(XSD_DATETIME.to_string(), PrimitiveSchema::DateTime);
        m.insert(XSD_DOUBLE.to_string(), PrimitiveSchema::Double);
        m.insert(XSD_DURATION.to_string(), PrimitiveSchema::Duration);
        m.insert(XSD_FLOAT.to_string(), PrimitiveSchema::Float);
        m.insert(XSD_INT.to_string(), PrimitiveSchema::Integer);
        m.insert(XSD_INTEGER.to_string(), PrimitiveSchema::Integer);
        m.insert(XSD_LONG.to_string(), PrimitiveSchema::Long);
        m.insert(XSD_STRING.to_string(), PrimitiveSchema::String);
        m.insert(XSD_TIME.to_string(), PrimitiveSchema::Time);
        Self { entries: m }
    }

    /// Adds or replaces the mapping for `datatype`.
    #[must_use]
    pub fn with_mapping(mut self, datatype: impl Into<String>, schema: PrimitiveSchema) -> Self {
        self.entries.insert(datatype.into(), schema);
        self
    }

    /// Looks up the primitive schema for a datatype IRI.
    #[must_use]
    pub fn lookup(&self, datatype: &str) -> Option<PrimitiveSchema> {
        self.entries.get(datatype).copied()
    }

    /// Number of mapped datatypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SchemaMap {
    fn default() -> Self {
        Self::xsd()
    }
}

/// Extracts the local name of an IRI: the text after the last `#`, or after
/// the last `/` when there is no `#`. An IRI with neither is returned whole.
///
/// No character filtering is applied.
#[must_use]
pub fn local_name(iri: &str) -> &str {
    match iri.rfind('#') {
        Some(i) => &iri[i + 1..],
        None => iri.rfind('/').map_or(iri, |i| &iri[i + 1..]),
    }
}
