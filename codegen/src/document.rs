//! Document assembly and output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::dtdl::Interface;

/// The ordered list of interfaces that makes up one DTDL document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    interfaces: Vec<Interface>,
}

impl Document {
    /// Creates a document from interfaces in conversion order.
    #[must_use]
    pub fn new(interfaces: Vec<Interface>) -> Self {
        Self { interfaces }
    }

    /// The interfaces, in document order.
    #[must_use]
    pub fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    /// Serializes the document as a compact JSON array.
    ///
    /// The output depends only on the interfaces, so the same input always
    /// yields the same bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.interfaces).context("Failed to serialize DTDL document")
    }

    /// Serializes the document as an indented JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.interfaces)
            .context("Failed to serialize DTDL document")
    }
}

/// Writes serialized DTDL text to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be written.
pub fn write_artifact(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
