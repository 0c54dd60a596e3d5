use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// The one fixed key the client persists.
const DISPLAY_NAME_KEY: &str = "display_name";

#[derive(Debug, Serialize, Deserialize, Default)]
struct ProfileData {
    #[serde(flatten)]
    data: HashMap<String, String>,
}

/// TOML-backed key-value store for per-user state. Today that is just
/// the display name; the flat format leaves room without needing a
/// schema version.
pub struct ProfileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            values: HashMap::new(),
        }
    }

    pub fn load(&mut self) -> Result<()> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            let data: ProfileData = toml::from_str(&content)?;
            self.values = data.data;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = ProfileData {
            data: self.values.clone(),
        };
        let content = toml::to_string_pretty(&data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// The saved display name, or an empty string when none was ever set.
    pub fn display_name(&self) -> String {
        self.values
            .get(DISPLAY_NAME_KEY)
            .cloned()
            .unwrap_or_default()
    }

    /// Store `name` as-is. Callers trim and reject empty input first.
    pub fn set_display_name(&mut self, name: &str) {
        self.values
            .insert(DISPLAY_NAME_KEY.to_string(), name.to_string());
    }

    pub fn clear_display_name(&mut self) {
        self.values.remove(DISPLAY_NAME_KEY);
    }
}
