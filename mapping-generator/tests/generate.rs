//! Integration tests for the end-to-end generation run.
//!
//! Each test writes into its own directory under the system temp dir.

use std::fs;
use std::path::{Path, PathBuf};

use mapping_generator::{
    generate, GeneratorConfig, MappingConfig, MappingError, UnresolvedFieldPolicy,
};
use mapping_generator_shared::IndexSettings;
use serde_json::{json, Value};
use uuid::Uuid;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/address_book.json")
}

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("mapping-generator-{}", Uuid::new_v4()))
}

fn read_json(path: &Path) -> Value {
    let contents = fs::read_to_string(path).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn test_generate_writes_one_file_per_entity() {
    let output_dir = temp_dir();
    let config = GeneratorConfig::new(fixture_path(), &output_dir);

    let written = generate(&config).unwrap();

    assert_eq!(written.len(), 14);
    for path in &written {
        assert!(path.exists(), "{} not written", path.display());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
    }

    let point = read_json(&output_dir.join("org.tree_ware.meta_model.geo__point.json"));
    assert_eq!(
        point,
        json!({
            "mappings": {
                "properties": {
                    "accuracy": { "type": "float" },
                    "latitude": { "type": "double" },
                    "longitude": { "type": "double" }
                }
            }
        })
    );

    let root = read_json(
        &output_dir.join("org.tree_ware.test.address_book.main__address_book_root.json"),
    );
    assert_eq!(
        root["mappings"]["properties"]["last_updated"],
        json!({ "type": "date", "format": "epoch_millis" })
    );
    assert_eq!(
        root["mappings"]["properties"]["person"],
        json!({ "type": "nested" })
    );

    fs::remove_dir_all(&output_dir).unwrap();
}

#[test]
fn test_generate_is_stable() {
    let first_dir = temp_dir();
    let second_dir = temp_dir();

    let first = generate(&GeneratorConfig::new(fixture_path(), &first_dir)).unwrap();
    let second = generate(&GeneratorConfig::new(fixture_path(), &second_dir)).unwrap();

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.file_name(), b.file_name());
        assert_eq!(fs::read_to_string(a).unwrap(), fs::read_to_string(b).unwrap());
    }

    fs::remove_dir_all(&first_dir).unwrap();
    fs::remove_dir_all(&second_dir).unwrap();
}

#[test]
fn test_generate_with_settings() {
    let output_dir = temp_dir();
    let mapping = MappingConfig::with_policy(UnresolvedFieldPolicy::Fail)
        .with_settings(IndexSettings::new(Some(1), Some(1)));
    let config = GeneratorConfig::new(fixture_path(), &output_dir).with_mapping(mapping);

    generate(&config).unwrap();

    let group = read_json(&output_dir.join("org.tree_ware.test.address_book.main__group.json"));
    assert_eq!(
        group["settings"],
        json!({ "number_of_shards": 1, "number_of_replicas": 1 })
    );

    fs::remove_dir_all(&output_dir).unwrap();
}

#[test]
fn test_generate_strict_writes_nothing_on_unresolved_field() {
    let work_dir = temp_dir();
    fs::create_dir_all(&work_dir).unwrap();
    let model_path = work_dir.join("meta_model.json");
    fs::write(
        &model_path,
        r#"{"packages": [{"name": "p1", "entities": [{"name": "e1", "fields": [{"name": "a"}]}]}]}"#,
    )
    .unwrap();
    let output_dir = work_dir.join("mappings");
    let config = GeneratorConfig::new(&model_path, &output_dir).with_mapping(MappingConfig::strict());

    let result = generate(&config);

    assert_eq!(result, Err(MappingError::unresolved_field_type("p1__e1", "a")));
    assert!(!output_dir.exists());

    fs::remove_dir_all(&work_dir).unwrap();
}

#[test]
fn test_generate_missing_meta_model() {
    let output_dir = temp_dir();
    let config = GeneratorConfig::new(output_dir.join("missing.json"), &output_dir);

    let result = generate(&config);

    assert!(matches!(result, Err(MappingError::IoError(_))));
}
