//! Property classification: ontology property → relationship or property.

use dtdl_ontology::{OntologyProperty, PropertyKind};
use tracing::{debug, warn};

use crate::dtdl::{Content, Property, Relationship};
use crate::error::ConversionError;
use crate::identifier::{synthesize, Dtmi};
use crate::metadata;
use crate::Converter;

impl Converter<'_> {
    /// Builds the content element for one property of a class.
    ///
    /// Object properties become relationships and datatype properties become
    /// properties. Anything else yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::MissingRange`] for a datatype property without a range.
    /// - [`ConversionError::SchemaMapping`] for a datatype property whose range
    ///   is not in the schema map.
    pub fn classify(
        &self,
        property: &OntologyProperty<'_>,
    ) -> Result<Option<Content>, ConversionError> {
        match property.kind() {
            PropertyKind::Object => Ok(Some(self.relationship(property))),
            PropertyKind::Datatype => self.datatype_property(property).map(Some),
            PropertyKind::Other => Ok(None),
        }
    }

    fn relationship(&self, property: &OntologyProperty<'_>) -> Content {
        debug!("  found relationship: {property}");

        Content::Relationship(Relationship {
            name: property.to_string(),
            target: self.target(property),
            comment: metadata::comment(property),
            display_name: metadata::display_name(property),
        })
    }

    /// DTMI of the first range. `None` when there is no range, the range is
    /// anonymous, or its identifier is too long.
    fn target(&self, property: &OntologyProperty<'_>) -> Option<Dtmi> {
        let Some(range) = property.ranges().first().copied() else {
            debug!("    no target found");
            return None;
        };
        debug!("    found target: {range}");
        match synthesize(range, self.config) {
            Ok(target) => target,
            Err(error) => {
                warn!("  target of {property} omitted: {error}");
                None
            }
        }
    }

    fn datatype_property(
        &self,
        property: &OntologyProperty<'_>,
    ) -> Result<Content, ConversionError> {
        debug!("  found property: {property}");

        let range = property
            .ranges()
            .first()
            .map(|range| range.to_string())
            .ok_or_else(|| ConversionError::MissingRange {
                property: property.to_string(),
            })?;
        let schema = self
            .schema_map
            .lookup(&range)
            .ok_or_else(|| ConversionError::SchemaMapping {
                property: property.to_string(),
                range: range.clone(),
            })?;

        Ok(Content::Property(Property {
            name: property.to_string(),
            schema,
        }))
    }
}
