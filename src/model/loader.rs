use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::{env, fs};

use tracing::info;

use crate::error::InferenceError;
use crate::model::artifact::PriceModel;

pub const MODEL_DIR: &str = "model";
pub const MODEL_FILE: &str = "house_price_model.json";

/// Artifact path derived from the executable's own deployment directory.
pub fn default_model_path() -> PathBuf {
    let base = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(MODEL_DIR).join(MODEL_FILE)
}

/// Reads and deserializes the model artifact.
///
/// A missing file is a legitimate degraded state and maps to `Ok(None)`;
/// any other read or deserialization failure is fatal and propagates.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Arc<PriceModel>>, InferenceError> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(InferenceError::ModelUnreadable {
                path: path.display().to_string(),
                source: e,
            })
        }
    };

    let model: PriceModel =
        serde_json::from_slice(&bytes).map_err(|e| InferenceError::ModelCorrupt {
            path: path.display().to_string(),
            source: e,
        })?;

    info!(path = %path.display(), columns = model.schema.len(), "loaded model");
    Ok(Some(Arc::new(model)))
}

/// Once-only model loader. The artifact is immutable after load, so the
/// first result (present or absent) is cached for the process lifetime and
/// every later `get` returns the same `Arc`.
pub struct ModelCache {
    path: PathBuf,
    cell: OnceLock<Option<Arc<PriceModel>>>,
}

impl ModelCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    pub fn from_deploy_dir() -> Self {
        Self::new(default_model_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> Result<Option<Arc<PriceModel>>, InferenceError> {
        if let Some(cached) = self.cell.get() {
            return Ok(cached.clone());
        }
        let loaded = load_from_path(&self.path)?;
        Ok(self.cell.get_or_init(|| loaded).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    use crate::features::frame::FEATURE_COLUMNS;

    fn artifact_json() -> String {
        let mut weights = HashMap::new();
        for column in &FEATURE_COLUMNS[..5] {
            weights.insert(column.to_string(), 1.0);
        }
        let mut neighborhood_effects = HashMap::new();
        neighborhood_effects.insert("NridgHt".to_string(), 0.0);
        let model = PriceModel {
            schema: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            intercept: 1000.0,
            weights,
            neighborhood_effects,
        };
        serde_json::to_string(&model).unwrap()
    }

    #[test]
    fn test_missing_file_is_absent_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_path(dir.path().join(MODEL_FILE));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_valid_artifact_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MODEL_FILE);
        fs::write(&path, artifact_json()).unwrap();

        let model = load_from_path(&path).unwrap().expect("model present");
        assert_eq!(model.intercept, 1000.0);
    }

    #[test]
    fn test_corrupt_artifact_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MODEL_FILE);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"not json at all").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, InferenceError::ModelCorrupt { .. }));
    }

    #[test]
    fn test_cache_returns_the_identical_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MODEL_FILE);
        fs::write(&path, artifact_json()).unwrap();

        let cache = ModelCache::new(&path);
        let first = cache.get().unwrap().expect("model present");
        let second = cache.get().unwrap().expect("model present");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cache_memoizes_the_absent_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MODEL_FILE);

        let cache = ModelCache::new(&path);
        assert!(cache.get().unwrap().is_none());

        // The artifact appearing later does not trigger a reload.
        fs::write(&path, artifact_json()).unwrap();
        assert!(cache.get().unwrap().is_none());
    }

    #[test]
    fn test_default_path_ends_with_fixed_subpath() {
        let path = default_model_path();
        assert!(path.ends_with(Path::new(MODEL_DIR).join(MODEL_FILE)));
    }
}
