use std::io::Write;
use std::path::Path;

use dagforge::config::load_and_validate;
use dagforge::errors::DagError;
use dagforge::fs::mock::MockFileSystem;
use dagforge::{Generator, generate_dag, seeded_rng};
use tempfile::{NamedTempFile, tempdir};

#[test]
fn probability_outside_unit_interval_is_invalid_argument() {
    let dir = tempdir().unwrap();
    let text = dir.path().join("t.txt");
    let image = dir.path().join("i.png");

    for p in [-0.5, 1.0001, f64::NAN] {
        match generate_dag(4, p, &text, &image, &mut seeded_rng(Some(1))) {
            Err(DagError::InvalidArgument(msg)) => assert!(msg.contains("probability")),
            other => panic!("p = {p}: expected InvalidArgument, got {other:?}"),
        }
    }
    assert!(!text.exists(), "nothing is written for invalid input");
}

#[test]
fn unwritable_text_path_is_io_error() {
    let dir = tempdir().unwrap();
    // The directory itself cannot be opened as a file.
    let err = generate_dag(3, 0.5, dir.path(), dir.path().join("i.png"), &mut seeded_rng(Some(1)))
        .unwrap_err();
    match err {
        DagError::Io { path, .. } => assert_eq!(path, dir.path()),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn image_write_failure_propagates_after_text_report() {
    let fs = MockFileSystem::new();
    fs.fail_writes_to("dag.png");

    let err = Generator::new(Box::new(fs.clone()))
        .generate(5, 0.3, "dag_info.txt", "dag.png", &mut seeded_rng(Some(9)))
        .unwrap_err();

    assert!(matches!(err, DagError::Io { .. }));
    assert!(fs.file(Path::new("dag_info.txt")).is_some());
    assert!(fs.file(Path::new("dag.png")).is_none());
}

#[test]
fn config_with_bad_probability_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[generator]
vertices = 10
probability = 1.5
"#
    )
    .unwrap();

    match load_and_validate(file.path()) {
        Err(DagError::ConfigError(msg)) => {
            assert!(msg.contains("probability"));
            assert!(msg.contains("1.5"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn malformed_toml_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[generator\nvertices = 3\n").unwrap();

    let result = load_and_validate(file.path());
    assert!(matches!(result, Err(DagError::TomlError(_))), "got {result:?}");
}
