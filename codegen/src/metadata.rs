//! Display name and comment extraction.
//!
//! Both read the first annotation in document order. A missing annotation is
//! `None`, not an error.

use dtdl_ontology::Annotated;

/// Maximum length of a DTDL `displayName`, in characters.
pub const MAX_DISPLAY_NAME_LEN: usize = 64;

/// The first `rdfs:label`, truncated to [`MAX_DISPLAY_NAME_LEN`] characters.
#[must_use]
pub fn display_name(resource: &impl Annotated) -> Option<String> {
    let label = resource.labels().first()?.lexical.clone();
    match label.char_indices().nth(MAX_DISPLAY_NAME_LEN) {
        Some((end, _)) => Some(label[..end].to_string()),
        None => Some(label),
    }
}

/// The first `rdfs:comment`, untruncated.
#[must_use]
pub fn comment(resource: &impl Annotated) -> Option<String> {
    resource.comments().first().map(|c| c.lexical.clone())
}
