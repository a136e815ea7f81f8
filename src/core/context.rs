//! Distribution context - build once, pass everywhere
//!
//! ```text
//! main.rs:
//!   DistContext::build() -> &DistContext
//!   |
//!   v
//! commands/release.rs, prerelease.rs, scan.rs:
//!   fn run_*(ctx: &DistContext, ...)
//! ```

use crate::core::config::UpdateConfig;
use crate::core::error::UpdateResult;
use crate::registry::{Registry, ReleasedComponent};
use std::path::{Path, PathBuf};

/// Shared state for one invocation
#[derive(Debug, Clone)]
pub struct DistContext {
  /// Distribution directory holding versioned files and channel indexes
  pub storage_dir: PathBuf,
}

impl DistContext {
  /// Build the context from the working directory and an optional `--dir`
  ///
  /// The storage root comes from `--dir`, then updatemgr.toml, then `cwd`.
  /// The config file is not read at all when `--dir` is given.
  pub fn build(cwd: &Path, dir_override: Option<PathBuf>) -> UpdateResult<Self> {
    let storage_dir = match dir_override {
      Some(dir) => dir,
      None => UpdateConfig::load(cwd)?.storage_root(None, cwd),
    };
    log::debug!("storage root: {}", storage_dir.display());

    Ok(Self { storage_dir })
  }

  /// Scan the storage root and export components in precedence order
  pub fn export(&self) -> UpdateResult<Vec<ReleasedComponent>> {
    let mut registry = Registry::scan(&self.storage_dir)?;
    registry.select_versions();
    log::debug!("exporting registry at {}", registry.storage_dir().display());
    registry.export()
  }
}
