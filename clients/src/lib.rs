//! Conversion pipeline shared by the `rdf-to-dtdl` binary and its tests.
//!
//! One run loads the ontology, converts it, writes the artifact and passes
//! the same text through the validation gate:
//!
//! ```text
//! load → convert → serialize → write → gate → summary
//! ```
//!
//! A fatal conversion error stops the run before anything is written.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use dtdl_codegen::{
    write_artifact, ConversionConfig, Converter, PrimitiveSchema, SchemaMap, SkippedClass,
};
use dtdl_conformance::{gate, GateOutcome, ModelValidator};
use tracing::info;

/// Inputs for one conversion run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Ontology to read (`.nt` as N-Triples, anything else as Turtle).
    pub rdf_file: PathBuf,
    /// Where the DTDL document is written.
    pub dtdl_file: PathBuf,
    /// DTMI prefix, version and context.
    pub config: ConversionConfig,
    /// Datatype → primitive schema table.
    pub schema_map: SchemaMap,
    /// Write indented JSON instead of compact JSON.
    pub pretty: bool,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// The written artifact.
    pub output: PathBuf,
    /// Interfaces written.
    pub interfaces: usize,
    /// Relationships across all interfaces.
    pub relationships: usize,
    /// Properties across all interfaces.
    pub properties: usize,
    /// Classes left out because no identifier could be assigned.
    pub skipped: Vec<SkippedClass>,
    /// The validation gate's verdict on the written document.
    pub validation: GateOutcome,
}

impl RunSummary {
    /// Whether the run should end with a non-zero exit status.
    ///
    /// A validator that could not run always fails the run. Validation
    /// errors fail it only when `strict` is set.
    #[must_use]
    pub fn failed(&self, strict: bool) -> bool {
        match self.validation {
            GateOutcome::Valid => false,
            GateOutcome::Invalid(_) => strict,
            GateOutcome::Errored(_) => true,
        }
    }
}

/// Runs the full pipeline.
///
/// # Errors
///
/// Returns an error if the ontology cannot be loaded, a datatype property has
/// no usable schema, or the artifact cannot be written. Validation errors are
/// not errors here; they are reported in [`RunSummary::validation`].
pub fn run(options: &RunOptions, validator: &dyn ModelValidator) -> Result<RunSummary> {
    let graph = dtdl_ontology::load(&options.rdf_file)
        .with_context(|| format!("Failed to load ontology {}", options.rdf_file.display()))?;
    info!(
        "Loaded {} triples from {}",
        graph.len(),
        options.rdf_file.display()
    );

    let conversion = Converter::new(&options.config, &options.schema_map)
        .convert(&graph)
        .context("Conversion aborted; no DTDL file was written")?;

    let relationships = conversion.relationship_count();
    let properties = conversion.property_count();
    let skipped = conversion.skipped.clone();
    let document = conversion.into_document();

    let text = if options.pretty {
        document.to_json_pretty()?
    } else {
        document.to_json()?
    };
    write_artifact(&options.dtdl_file, &text)?;
    info!("Wrote {}", options.dtdl_file.display());

    Ok(RunSummary {
        output: options.dtdl_file.clone(),
        interfaces: document.interfaces().len(),
        relationships,
        properties,
        skipped,
        validation: gate(validator, &text),
    })
}

/// Parses a `--map-datatype` value of the form `<IRI>=<schema>`.
///
/// # Errors
///
/// Returns a message if the `=` is missing, the IRI is empty, or the schema
/// is not a DTDL primitive schema name.
pub fn parse_mapping(value: &str) -> Result<(String, PrimitiveSchema), String> {
    let (iri, schema) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected <IRI>=<schema>, got `{value}`"))?;
    if iri.is_empty() {
        return Err(format!("missing datatype IRI in `{value}`"));
    }
    let schema = schema.parse::<PrimitiveSchema>().map_err(|e| e.to_string())?;
    Ok((iri.to_string(), schema))
}
