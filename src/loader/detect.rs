//! Model source detection

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

/// Detected model source
#[derive(Debug, Clone)]
pub struct ModelSource {
    /// Path to the model weights
    pub weights_path: PathBuf,
    /// Path to the dimensions file, if one was found
    pub config_path: Option<PathBuf>,
}

/// Resolve the weights file and its optional config.
///
/// The path can be:
/// - A direct path to a .safetensors file
/// - A directory containing `model.safetensors`
///
/// The config is `explicit_config` if given, otherwise `<stem>.json` next to
/// the weights, otherwise `config.json` in the same directory.
pub fn detect_model_source<P: AsRef<Path>>(
    path: P,
    explicit_config: Option<&Path>,
) -> Result<ModelSource> {
    let path = path.as_ref();

    let weights_path = if path.is_file() {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "safetensors" {
            return Err(anyhow!("Unsupported model file format: .{}", ext));
        }
        path.to_path_buf()
    } else if path.is_dir() {
        let candidate = path.join("model.safetensors");
        if !candidate.is_file() {
            return Err(anyhow!(
                "No model.safetensors found in directory: {}",
                path.display()
            ));
        }
        candidate
    } else {
        return Err(anyhow!("Model not found at {}", path.display()));
    };

    let config_path = match explicit_config {
        Some(config) if config.is_file() => Some(config.to_path_buf()),
        Some(config) => {
            return Err(anyhow!("Model config not found at {}", config.display()));
        }
        None => find_config_for(&weights_path),
    };

    Ok(ModelSource {
        weights_path,
        config_path,
    })
}

/// Find a config file belonging to a weights file
fn find_config_for(weights: &Path) -> Option<PathBuf> {
    let sibling = weights.with_extension("json");
    if sibling.is_file() {
        return Some(sibling);
    }

    let in_dir = weights.parent()?.join("config.json");
    in_dir.is_file().then_some(in_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path() {
        let err = detect_model_source("/nonexistent/lstm_model.safetensors", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Model not found at /nonexistent/lstm_model.safetensors"
        );
    }

    #[test]
    fn test_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lstm_model.keras");
        std::fs::write(&path, b"").unwrap();
        assert!(detect_model_source(&path, None).is_err());
    }

    #[test]
    fn test_sibling_config_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let weights = dir.path().join("lstm_model.safetensors");
        std::fs::write(&weights, b"").unwrap();
        std::fs::write(dir.path().join("config.json"), b"{}").unwrap();
        std::fs::write(dir.path().join("lstm_model.json"), b"{}").unwrap();

        let source = detect_model_source(&weights, None).unwrap();
        assert_eq!(source.config_path, Some(dir.path().join("lstm_model.json")));
    }

    #[test]
    fn test_directory_with_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("model.safetensors"), b"").unwrap();
        std::fs::write(dir.path().join("config.json"), b"{}").unwrap();

        let source = detect_model_source(dir.path(), None).unwrap();
        assert_eq!(source.weights_path, dir.path().join("model.safetensors"));
        assert_eq!(source.config_path, Some(dir.path().join("config.json")));
    }

    #[test]
    fn test_no_config() {
        let dir = tempfile::tempdir().unwrap();
        let weights = dir.path().join("weights.safetensors");
        std::fs::write(&weights, b"").unwrap();

        let source = detect_model_source(&weights, None).unwrap();
        assert!(source.config_path.is_none());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let weights = dir.path().join("weights.safetensors");
        std::fs::write(&weights, b"").unwrap();

        let missing = dir.path().join("dims.json");
        assert!(detect_model_source(&weights, Some(&missing)).is_err());
    }
}
