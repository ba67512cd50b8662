use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    domain::FinanceProfile,
    utils::{app_data_dir, ensure_dir},
};

use super::{KeyValueStore, Result};

const PREFERENCES_FILE: &str = "preferences.json";
const PROFILE_FILE: &str = "finance.json";
const TMP_SUFFIX: &str = "tmp";

/// Key-value store persisted as a single JSON document on disk.
///
/// Each write re-reads the file, applies the change, and replaces the file
/// atomically, so a crash mid-write never leaves a torn document behind.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `root`, defaulting to the app data dir.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self {
            path: root.join(PREFERENCES_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(BTreeMap::new())
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut items = self.read_items()?;
        Ok(items.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_items()?;
        items.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&items)?;
        write_atomic(&self.path, &json)
    }
}

/// Persists the finance profile document next to the preference file.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Opens a store rooted at `root`, defaulting to the app data dir.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self {
            path: root.join(PROFILE_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored profile, or a fresh one when none exists yet.
    pub fn load(&self) -> Result<FinanceProfile> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(FinanceProfile::new())
        }
    }

    pub fn save(&self, profile: &FinanceProfile) -> Result<()> {
        let json = serde_json::to_string_pretty(profile)?;
        write_atomic(&self.path, &json)
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

/// Stages the payload to a sibling temp file, then renames over the target.
fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
