//! Integration tests for the CPD tokens pipeline
//!
//! YAML config → resolver → use case → in-memory duplication index

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use codegraph_cpd::config::{ConfigError, CpdConfig};
use codegraph_cpd::errors::CpdError;
use codegraph_cpd::features::cpd_tokens::{
    CpdTokensInput, CpdTokensUseCase, CpdTokensUseCaseImpl, InMemoryTokenLineIndex, SaveOutcome,
};
use codegraph_cpd::shared::models::InputFile;
use common::{init_tracing, token_at, TokenStreamBuilder};
use pretty_assertions::assert_eq;

const CONFIG: &str = r#"
version: 1
skip: false
languages:
  js:
    skip: true
exclusions:
  - "**/generated/**"
"#;

fn write_config(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("cpd.yaml");
    std::fs::write(&path, CONFIG).unwrap();
    path
}

fn java_method(body: &str) -> Vec<codegraph_cpd::features::cpd_tokens::Token> {
    TokenStreamBuilder::new()
        .tokens(&["public", "void", "run", "(", ")", "{"])
        .newline()
        .tokens(&[body, ";"])
        .newline()
        .token("}")
        .build()
}

#[test]
fn test_pipeline_from_yaml_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let config = CpdConfig::from_yaml(write_config(&dir)).unwrap();

    let index = Arc::new(InMemoryTokenLineIndex::new());
    let usecase = CpdTokensUseCaseImpl::from_config(&config, index.clone()).unwrap();

    let batch = usecase.tokenize_files(vec![
        CpdTokensInput {
            file: InputFile::detect("src/A.java"),
            tokens: java_method("doWork()"),
        },
        CpdTokensInput {
            file: InputFile::detect("src/B.java"),
            tokens: java_method("doOther()"),
        },
        CpdTokensInput {
            file: InputFile::detect("web/app.js"),
            tokens: java_method("ignored()"),
        },
        CpdTokensInput {
            file: InputFile::detect("src/generated/C.java"),
            tokens: java_method("doWork()"),
        },
    ]);

    assert!(batch.failures.is_empty());
    assert_eq!(batch.stats.files, 4);
    assert_eq!(batch.stats.stored, 2);
    assert_eq!(batch.stats.excluded, 2);
    assert_eq!(batch.stats.lines_emitted, 6);
    assert_eq!(batch.outputs[2].outcome, SaveOutcome::Excluded);

    assert!(index.contains("src/A.java"));
    assert!(!index.contains("web/app.js"));
    assert!(!index.contains("src/generated/C.java"));

    // Signature and closing brace repeat across A and B; bodies differ
    let stats = index.stats();
    assert_eq!(stats.files, 2);
    assert_eq!(stats.lines, 6);
    assert_eq!(stats.unique_hashes, 4);
    assert_eq!(stats.hash_collisions, 2);

    let a_lines = index.lines_for("src/A.java").unwrap();
    assert_eq!(a_lines[0].value(), "publicvoidrun(){");
    let occurrences = index.occurrences(a_lines[0].hash_code());
    let mut paths: Vec<&str> = occurrences.iter().map(|o| &*o.path).collect();
    paths.sort_unstable();
    assert_eq!(paths, vec!["src/A.java", "src/B.java"]);
}

#[test]
fn test_single_file_stats() {
    let index = Arc::new(InMemoryTokenLineIndex::new());
    let usecase =
        CpdTokensUseCaseImpl::from_config(&CpdConfig::from_yaml_str(CONFIG).unwrap(), index)
            .unwrap();

    let output = usecase
        .tokenize_file(CpdTokensInput {
            file: InputFile::detect("src/A.java"),
            tokens: java_method("x()"),
        })
        .unwrap();

    assert_eq!(output.path, "src/A.java");
    assert_eq!(output.stats.tokens_submitted, 9);
    assert_eq!(output.stats.lines_emitted, 3);
    assert!(!output.stats.excluded);
}

#[test]
fn test_excluded_file_stats() {
    let index = Arc::new(InMemoryTokenLineIndex::new());
    let usecase =
        CpdTokensUseCaseImpl::from_config(&CpdConfig::from_yaml_str(CONFIG).unwrap(), index)
            .unwrap();

    let output = usecase
        .tokenize_file(CpdTokensInput {
            file: InputFile::detect("lib/util.js"),
            tokens: vec![token_at(3, 0, "b"), token_at(1, 0, "a")],
        })
        .unwrap();

    assert_eq!(output.outcome, SaveOutcome::Excluded);
    assert!(output.stats.excluded);
    assert_eq!(output.stats.lines_emitted, 0);
}

#[test]
fn test_second_store_of_same_file_fails() {
    let index = Arc::new(InMemoryTokenLineIndex::new());
    let usecase = CpdTokensUseCaseImpl::from_config(&CpdConfig::default(), index).unwrap();

    let input = CpdTokensInput {
        file: InputFile::detect("A.java"),
        tokens: java_method("x()"),
    };
    usecase.tokenize_file(input.clone()).unwrap();

    let err = usecase.tokenize_file(input).unwrap_err();
    assert!(matches!(err, CpdError::Sink(_)));
}

#[test]
fn test_invalid_config_rejected_by_use_case() {
    let config = CpdConfig::default().with_exclusion("src/[a-");
    let err = CpdTokensUseCaseImpl::from_config(&config, Arc::new(InMemoryTokenLineIndex::new()))
        .err()
        .unwrap();

    assert!(matches!(
        err,
        CpdError::Config(ConfigError::InvalidPattern { .. })
    ));
}

#[test]
fn test_batch_keeps_input_order() {
    let index = Arc::new(InMemoryTokenLineIndex::new());
    let usecase = CpdTokensUseCaseImpl::from_config(&CpdConfig::default(), index).unwrap();

    let inputs: Vec<CpdTokensInput> = (0..64)
        .map(|i| CpdTokensInput {
            file: InputFile::detect(format!("src/F{i}.java")),
            tokens: java_method(&format!("call{i}()")),
        })
        .collect();

    let batch = usecase.tokenize_files(inputs);
    let paths: Vec<String> = batch.outputs.iter().map(|o| o.path.clone()).collect();
    let expected: Vec<String> = (0..64).map(|i| format!("src/F{i}.java")).collect();

    assert_eq!(paths, expected);
    assert_eq!(batch.stats.stored, 64);
}
