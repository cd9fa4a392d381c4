mod common;

use candle_core::Device;

use sentr::config::{ArtifactConfig, Side};
use sentr::loader::exceeds_embedding;
use sentr::{load_artifacts, PreprocessConfig, Predictor, Sentiment};

fn artifact_config(dir: &std::path::Path) -> ArtifactConfig {
    ArtifactConfig {
        model_path: dir.join("lstm_model.safetensors"),
        model_config_path: None,
        tokenizer_path: dir.join("lstm_tokenizer.json"),
    }
}

#[test]
fn loads_artifacts_and_predicts() {
    let dir = tempfile::tempdir().unwrap();
    common::write_artifacts(dir.path(), [0.0, 3.0, 0.0]);

    let artifacts = load_artifacts(&artifact_config(dir.path()), &Device::Cpu).unwrap();
    assert_eq!(artifacts.model.config(), &common::config());
    assert_eq!(artifacts.tokenizer.oov_token(), Some("<OOV>"));

    let predictor = Predictor::from_artifacts(artifacts, PreprocessConfig::default()).unwrap();
    let predictions = predictor.predict(&["great product", "meh"]).unwrap();

    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0].comment, "great product");
    assert!(predictions.iter().all(|p| p.sentiment == Sentiment::Neutral));
}

#[test]
fn encodes_like_the_fitted_tokenizer() {
    let dir = tempfile::tempdir().unwrap();
    common::write_artifacts(dir.path(), [0.0, 0.0, 0.0]);

    let artifacts = load_artifacts(&artifact_config(dir.path()), &Device::Cpu).unwrap();
    let predictor = Predictor::from_artifacts(artifacts, PreprocessConfig::default()).unwrap();

    let rows = predictor.encode(&["The product is GREAT!"]);
    assert_eq!(rows[0].len(), 100);
    // "is" is unknown and maps to the OOV id
    assert_eq!(&rows[0][..5], &[2, 3, 1, 4, 0]);
    assert!(rows[0][4..].iter().all(|&id| id == 0));
}

#[test]
fn long_comments_are_truncated_on_the_right() {
    let dir = tempfile::tempdir().unwrap();
    common::write_artifacts(dir.path(), [0.0, 0.0, 0.0]);

    let artifacts = load_artifacts(&artifact_config(dir.path()), &Device::Cpu).unwrap();
    let predictor = Predictor::from_artifacts(artifacts, PreprocessConfig::default()).unwrap();

    let comment = format!("{} awful", "great ".repeat(120));
    let rows = predictor.encode(&[comment.as_str()]);
    assert_eq!(rows[0].len(), 100);
    assert!(rows[0].iter().all(|&id| id == 4));

    let tail_config = PreprocessConfig {
        truncating: Side::Pre,
        ..Default::default()
    };
    let artifacts = load_artifacts(&artifact_config(dir.path()), &Device::Cpu).unwrap();
    let predictor = Predictor::from_artifacts(artifacts, tail_config).unwrap();
    let rows = predictor.encode(&[comment.as_str()]);
    assert_eq!(rows[0][99], 5);
}

#[test]
fn explicit_model_config_is_checked() {
    let dir = tempfile::tempdir().unwrap();
    common::write_artifacts(dir.path(), [0.0, 0.0, 0.0]);
    let dims = dir.path().join("dims.json");
    std::fs::write(
        &dims,
        r#"{"vocab_size": 20, "embedding_dim": 4, "lstm_units": 8}"#,
    )
    .unwrap();

    let config = ArtifactConfig {
        model_config_path: Some(dims),
        ..artifact_config(dir.path())
    };
    let err = load_artifacts(&config, &Device::Cpu).err().unwrap();
    assert!(format!("{:#}", err).contains("does not match stored weights"));
}

#[test]
fn missing_artifacts_are_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_artifacts(&artifact_config(dir.path()), &Device::Cpu)
        .err()
        .unwrap();
    assert!(err.to_string().starts_with("Model not found at "));

    common::write_artifacts(dir.path(), [0.0, 0.0, 0.0]);
    std::fs::remove_file(dir.path().join("lstm_tokenizer.json")).unwrap();
    let err = load_artifacts(&artifact_config(dir.path()), &Device::Cpu)
        .err()
        .unwrap();
    assert!(err.to_string().starts_with("Tokenizer not found at "));
}

#[test]
fn oversized_tokenizer_loads_but_is_flagged() {
    let dir = tempfile::tempdir().unwrap();
    common::write_artifacts(dir.path(), [0.0, 0.0, 0.0]);

    let artifacts = load_artifacts(&artifact_config(dir.path()), &Device::Cpu).unwrap();
    assert!(!exceeds_embedding(&artifacts.tokenizer, artifacts.model.config().vocab_size));

    std::fs::write(
        dir.path().join("lstm_tokenizer.json"),
        r#"{"word_index": {"great": 4, "rare": 25}}"#,
    )
    .unwrap();
    let artifacts = load_artifacts(&artifact_config(dir.path()), &Device::Cpu).unwrap();
    assert!(exceeds_embedding(&artifacts.tokenizer, artifacts.model.config().vocab_size));

    let predictor = Predictor::from_artifacts(artifacts, PreprocessConfig::default()).unwrap();
    assert!(predictor.predict(&["great"]).is_ok());
    assert!(predictor.predict(&["rare"]).is_err());
}
