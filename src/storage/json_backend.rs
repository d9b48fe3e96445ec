use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::{BlobStore, Result};

const DEFAULT_DIR_NAME: &str = ".almacen_core";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application data directory, defaulting to `~/.almacen_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("ALMACEN_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// One pretty-printed JSON file per key beneath the store root.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn record_file(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl BlobStore for JsonStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let path = self.record_file(key);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let path = self.record_file(key);
        let json = serde_json::to_string_pretty(records)?;
        let tmp = tmp_path(&path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        debug!(key, path = %path.display(), "record list saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::RecordId;
    use crate::domain::customer::Customer;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("json store");
        (store, temp)
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (store, _guard) = store_with_temp_dir();
        let customers = vec![Customer::new(RecordId(1), "Ana")];
        store.save("customers", &customers).expect("save");
        let loaded: Vec<Customer> = store.load("customers").expect("load");
        assert_eq!(loaded, customers);
    }

    #[test]
    fn missing_key_loads_empty() {
        let (store, _guard) = store_with_temp_dir();
        let loaded: Vec<Customer> = store.load("never_written").expect("load");
        assert!(loaded.is_empty());
    }
}
