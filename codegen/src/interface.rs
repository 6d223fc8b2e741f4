//! Class → interface mapping.

use dtdl_ontology::{Annotated, OntologyClass};
use tracing::{debug, info, warn};

use crate::dtdl::{Interface, MAX_EXTENDS};
use crate::error::ConversionError;
use crate::identifier::{synthesize, Dtmi};
use crate::metadata;
use crate::Converter;

impl Converter<'_> {
    /// Builds the interface for one ontology class.
    ///
    /// Returns `Ok(None)` for classes that are not IRIs (blank-node class
    /// expressions); they have no identifier and are not converted.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::Identifier`] if the class's own DTMI is too long.
    /// - Any fatal error from [`Converter::classify`].
    pub fn map_class(
        &self,
        class: &OntologyClass<'_>,
    ) -> Result<Option<Interface>, ConversionError> {
        let Some(id) = synthesize(class.node(), self.config)? else {
            return Ok(None);
        };
        info!("{class} -> {id}");

        let mut interface = Interface::new(id, self.config.context.as_str());
        interface.display_name = metadata::display_name(class);
        interface.comment = metadata::comment(class);
        interface.extends = self.parents(class);

        for property in class.is_domain_of() {
            if let Some(content) = self.classify(&property)? {
                interface.contents.push(content);
            }
        }

        Ok(Some(interface))
    }

    /// DTMIs of the first [`MAX_EXTENDS`] direct super-classes.
    ///
    /// Super-classes past the window are ignored. A parent inside the window
    /// that has no identifier is dropped and not replaced.
    fn parents(&self, class: &OntologyClass<'_>) -> Vec<Dtmi> {
        let supers = class.direct_super_classes();
        if supers.len() > MAX_EXTENDS {
            debug!(
                "  {class} has {} super-classes; keeping the first {MAX_EXTENDS}",
                supers.len()
            );
        }
        supers
            .iter()
            .take(MAX_EXTENDS)
            .filter_map(|parent| match synthesize(parent.node(), self.config) {
                Ok(Some(id)) => Some(id),
                Ok(None) => {
                    debug!("  super-class {parent} of {class} is anonymous; not extended");
                    None
                }
                Err(error) => {
                    warn!("  super-class {parent} of {class} dropped: {error}");
                    None
                }
            })
            .collect()
    }
}
