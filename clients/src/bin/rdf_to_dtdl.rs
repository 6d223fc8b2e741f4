//! `rdf-to-dtdl`: converts an RDF/OWL ontology into DTDL v2 interfaces and
//! validates the result.
//!
//! **Output:** a JSON array of DTDL v2 interfaces at `--dtdl-file`.
//!
//! **Usage:**
//! ```text
//! rdf-to-dtdl --rdf-file <path> --dtdl-file <path> --dtmi-prefix <prefix> \
//!     --model-version <n> [--dtdl-version 2] [--map-datatype <IRI>=<schema>]... \
//!     [--pretty] [--strict]
//! ```
//!
//! Diagnostics go to stderr (`RUST_LOG` controls verbosity, default `info`).
//! Exits non-zero on fatal conversion or I/O errors and when the validator
//! cannot run. With `--strict` it also exits non-zero when the validator
//! reports errors. Usage errors exit with status 2.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use dtdl_codegen::{ConversionConfig, PrimitiveSchema, SchemaMap};
use dtdl_conformance::{GateOutcome, StructuralValidator};
use dtdl_clients::{parse_mapping, run, RunOptions};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Convert an RDF/OWL ontology to DTDL v2.
#[derive(Debug, Parser)]
#[command(
    name = "rdf-to-dtdl",
    about = "Convert an RDF/OWL ontology into DTDL v2 interfaces"
)]
struct Args {
    /// Ontology file to convert (Turtle, or N-Triples for `.nt`).
    #[arg(long, value_parser = existing_file)]
    rdf_file: PathBuf,

    /// Output path for the generated DTDL document.
    #[arg(long)]
    dtdl_file: PathBuf,

    /// DTMI prefix, e.g. `com:example`.
    #[arg(long, value_parser = non_empty)]
    dtmi_prefix: String,

    /// Version suffix for every generated DTMI.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=999_999_999))]
    model_version: u32,

    /// DTDL language version. Only 2 is produced.
    #[arg(long, default_value_t = 2)]
    dtdl_version: u32,

    /// Extra datatype mapping `<IRI>=<schema>`; may be repeated.
    #[arg(long = "map-datatype", value_parser = parse_mapping)]
    map_datatype: Vec<(String, PrimitiveSchema)>,

    /// Write indented JSON.
    #[arg(long)]
    pretty: bool,

    /// Exit non-zero when the validator reports errors.
    #[arg(long)]
    strict: bool,
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("file not found: {value}"))
    }
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.dtdl_version != 2 {
        warn!(
            "DTDL version {} requested; generating DTDL v2",
            args.dtdl_version
        );
    }

    let schema_map = args
        .map_datatype
        .into_iter()
        .fold(SchemaMap::xsd(), |map, (iri, schema)| map.with_mapping(iri, schema));
    let options = RunOptions {
        rdf_file: args.rdf_file,
        dtdl_file: args.dtdl_file,
        config: ConversionConfig::new(args.dtmi_prefix, args.model_version),
        schema_map,
        pretty: args.pretty,
    };

    let validator = StructuralValidator::new()?;
    let summary = run(&options, &validator)?;

    println!(
        "DTDL written to {}: {} interfaces, {} relationships, {} properties",
        summary.output.display(),
        summary.interfaces,
        summary.relationships,
        summary.properties
    );
    for skipped in &summary.skipped {
        println!("  Skipped: {} ({})", skipped.class, skipped.error);
    }

    match &summary.validation {
        GateOutcome::Valid => println!("DTDL validation passed."),
        GateOutcome::Invalid(errors) => {
            println!("DTDL validation failed with {} errors:", errors.len());
            for (n, error) in errors.iter().enumerate() {
                println!("Error {}:", n + 1);
                println!("{error}");
            }
        }
        GateOutcome::Errored(message) => {
            println!("DTDL validation could not run: {message}");
        }
    }

    if summary.failed(args.strict) {
        process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(extra: &[&str]) -> Result<Args, clap::Error> {
        let input = tempfile::NamedTempFile::new().unwrap();
        let rdf_file = input.path().to_str().unwrap().to_string();
        let mut argv = vec![
            "rdf-to-dtdl",
            "--rdf-file",
            rdf_file.as_str(),
            "--dtdl-file",
            "out.json",
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv)
    }

    #[test]
    fn parses_full_command_line() {
        let args = parse(&[
            "--dtmi-prefix",
            "com:example",
            "--model-version",
            "3",
            "--map-datatype",
            "http://www.w3.org/2001/XMLSchema#decimal=double",
            "--map-datatype",
            "http://ex.org/dt#code=string",
            "--pretty",
        ])
        .unwrap();
        assert_eq!(args.dtmi_prefix, "com:example");
        assert_eq!(args.model_version, 3);
        assert_eq!(args.dtdl_version, 2);
        assert_eq!(args.map_datatype.len(), 2);
        assert_eq!(args.map_datatype[1].1, PrimitiveSchema::String);
        assert!(args.pretty);
        assert!(!args.strict);
    }

    #[test]
    fn missing_rdf_file_is_a_usage_error() {
        let err = Args::try_parse_from([
            "rdf-to-dtdl",
            "--dtdl-file",
            "out.json",
            "--dtmi-prefix",
            "com:example",
            "--model-version",
            "1",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn nonexistent_rdf_file_is_rejected() {
        let err = Args::try_parse_from([
            "rdf-to-dtdl",
            "--rdf-file",
            "/nonexistent/ontology.ttl",
            "--dtdl-file",
            "out.json",
            "--dtmi-prefix",
            "com:example",
            "--model-version",
            "1",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn model_version_zero_is_rejected() {
        let err = parse(&["--dtmi-prefix", "com:example", "--model-version", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn blank_dtmi_prefix_is_rejected() {
        for prefix in ["", "   "] {
            let err = parse(&["--dtmi-prefix", prefix, "--model-version", "1"]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation);
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn malformed_mapping_is_rejected() {
        let err = parse(&[
            "--dtmi-prefix",
            "com:example",
            "--model-version",
            "1",
            "--map-datatype",
            "http://ex.org/dt=decimal",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
