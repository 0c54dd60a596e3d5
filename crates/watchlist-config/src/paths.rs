use anyhow::Result;
use std::path::{Path, PathBuf};

/// Resolves where the client keeps its two files: `config.toml` and
/// `profile.toml`, both under the platform config directory
/// (e.g. `~/.config/reelclub` on Linux).
pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("reelclub");
        Ok(Self { config_dir })
    }

    /// Root the manager at an explicit directory. Used by tests.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: base.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn profile_file(&self) -> PathBuf {
        self.config_dir.join("profile.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_under_the_base_directory() {
        let manager = PathManager::with_base("/tmp/reelclub-test");
        assert_eq!(
            manager.config_file(),
            PathBuf::from("/tmp/reelclub-test/config.toml")
        );
        assert_eq!(
            manager.profile_file(),
            PathBuf::from("/tmp/reelclub-test/profile.toml")
        );
    }
}
