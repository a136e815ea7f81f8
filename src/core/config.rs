use crate::core::error::{ResultExt, UpdateResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for updatemgr
/// Searched in order: updatemgr.toml, .updatemgr.toml, .config/updatemgr.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateConfig {
  #[serde(default)]
  pub storage: StorageConfig,
}

/// Where the distribution directory (and the channel indexes) live
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
  /// Storage root; relative paths resolve against the config file's directory
  #[serde(default)]
  pub root: Option<PathBuf>,
}

impl UpdateConfig {
  /// Find config file in search order
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("updatemgr.toml"),
      path.join(".updatemgr.toml"),
      path.join(".config").join("updatemgr.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from `path`, or the default config when no file exists
  pub fn load(path: &Path) -> UpdateResult<Self> {
    let Some(config_path) = Self::find_config_path(path) else {
      log::debug!("no updatemgr config found under {}", path.display());
      return Ok(Self::default());
    };

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let mut config: UpdateConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    // Anchor relative roots at the directory holding the config file
    if let Some(root) = config.storage.root.take() {
      let base = config_path.parent().unwrap_or(path);
      config.storage.root = Some(if root.is_absolute() { root } else { base.join(root) });
    }

    log::debug!("loaded config from {}", config_path.display());
    Ok(config)
  }

  /// Resolve the storage root: explicit override, then config, then `cwd`
  pub fn storage_root(&self, dir_override: Option<PathBuf>, cwd: &Path) -> PathBuf {
    dir_override
      .or_else(|| self.storage.root.clone())
      .unwrap_or_else(|| cwd.to_path_buf())
  }
}
