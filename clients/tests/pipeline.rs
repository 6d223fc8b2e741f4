//! Pipeline tests: ontology file in, DTDL file out.

use std::fs;
use std::path::Path;

use dtdl_clients::{run, RunOptions};
use dtdl_codegen::{ConversionConfig, ConversionError, PrimitiveSchema, SchemaMap};
use dtdl_conformance::tests::fixtures;
use dtdl_conformance::{GateOutcome, ModelValidator, StructuralValidator, ValidationFailure};
use tempfile::TempDir;

fn options(dir: &TempDir, ontology: &str, file_name: &str) -> RunOptions {
    let rdf_file = dir.path().join(file_name);
    fs::write(&rdf_file, ontology).unwrap();
    RunOptions {
        rdf_file,
        dtdl_file: dir.path().join("out").join("model.json"),
        config: ConversionConfig::new("com:example", 1),
        schema_map: SchemaMap::xsd(),
        pretty: false,
    }
}

fn validator() -> StructuralValidator {
    StructuralValidator::new().unwrap()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// A validator whose parser fails before it can judge the document.
struct Crashing;

impl ModelValidator for Crashing {
    fn validate(&self, _document: &str) -> Result<(), ValidationFailure> {
        Err(ValidationFailure::Internal("parser crashed".to_string()))
    }
}

#[test]
fn writes_valid_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir, fixtures::BUILDING, "building.ttl");

    let summary = run(&opts, &validator()).unwrap();
    assert_eq!(summary.interfaces, 2);
    assert_eq!(summary.relationships, 1);
    assert_eq!(summary.properties, 1);
    assert!(summary.validation.is_valid());
    assert!(!summary.failed(true));
    assert_eq!(summary.output, opts.dtdl_file);

    let written: serde_json::Value = serde_json::from_str(&read(&opts.dtdl_file)).unwrap();
    assert_eq!(written.as_array().map(Vec::len), Some(2));
}

#[test]
fn repeated_runs_write_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir, fixtures::PIZZA, "pizza.ttl");

    run(&opts, &validator()).unwrap();
    let first = read(&opts.dtdl_file);
    run(&opts, &validator()).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, read(&opts.dtdl_file));
}

#[test]
fn fatal_conversion_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir, fixtures::UNMAPPED_DATATYPE, "meter.ttl");

    let err = run(&opts, &validator()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConversionError>(),
        Some(ConversionError::SchemaMapping { .. })
    ));
    assert!(!opts.dtdl_file.exists());
}

#[test]
fn missing_range_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let ontology = r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex:   <http://ex.org/onto#> .

ex:Meter a owl:Class .
ex:reading a owl:DatatypeProperty ;
    rdfs:domain ex:Meter .
"#;
    let opts = options(&dir, ontology, "meter.ttl");

    let err = run(&opts, &validator()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConversionError>(),
        Some(ConversionError::MissingRange { .. })
    ));
    assert!(!opts.dtdl_file.exists());
    assert!(!opts.dtdl_file.parent().unwrap().exists());
}

#[test]
fn custom_mapping_rescues_unmapped_datatype() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(&dir, fixtures::UNMAPPED_DATATYPE, "meter.ttl");
    opts.schema_map = SchemaMap::xsd()
        .with_mapping("http://www.w3.org/2001/XMLSchema#decimal", PrimitiveSchema::Double);

    let summary = run(&opts, &validator()).unwrap();
    assert_eq!(summary.properties, 1);
    assert!(read(&opts.dtdl_file).contains(r#""schema":"double""#));
}

#[test]
fn validation_errors_fail_only_strict_runs() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir, fixtures::BAD_IDENTIFIER, "plant.ttl");

    let summary = run(&opts, &validator()).unwrap();
    assert_eq!(summary.validation.errors().len(), 2);
    assert!(opts.dtdl_file.exists());
    assert!(!summary.failed(false));
    assert!(summary.failed(true));
}

#[test]
fn crashed_validator_always_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir, fixtures::BUILDING, "building.ttl");

    let summary = run(&opts, &Crashing).unwrap();
    assert_eq!(summary.validation, GateOutcome::Errored("parser crashed".to_string()));
    assert!(opts.dtdl_file.exists());
    assert!(summary.failed(false));
    assert!(summary.failed(true));
}

#[test]
fn reads_ntriples_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let ontology = concat!(
        "<http://ex.org/onto#Pump> ",
        "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type> ",
        "<http://www.w3.org/2002/07/owl#Class> .\n",
    );
    let mut opts = options(&dir, ontology, "pump.nt");
    opts.pretty = true;

    let summary = run(&opts, &validator()).unwrap();
    assert_eq!(summary.interfaces, 1);
    let text = read(&opts.dtdl_file);
    assert!(text.contains("\"@id\": \"dtmi:com:example:Pump;1\""));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(&dir, "", "empty.ttl");
    opts.rdf_file = dir.path().join("absent.ttl");

    assert!(run(&opts, &validator()).is_err());
    assert!(!opts.dtdl_file.exists());
}
