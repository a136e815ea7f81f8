//! Filesystem-backed version registry
//!
//! Scans a distribution directory for versioned files and groups them into
//! components. Versions must be sorted with [`Registry::select_versions`]
//! before [`Registry::export`] hands out the precedence-ordered snapshot.

pub mod version;

pub use version::{ReleasedComponent, VersionEntry};

use crate::core::error::{RegistryError, ResultExt, UpdateResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Registry of every versioned file under a storage root
pub struct Registry {
  storage_dir: PathBuf,
  components: BTreeMap<String, ReleasedComponent>,
  sorted: bool,
}

impl Registry {
  /// Scan `storage_dir` recursively and build the registry
  pub fn scan(storage_dir: &Path) -> UpdateResult<Self> {
    if !storage_dir.is_dir() {
      return Err(
        RegistryError::StorageNotFound {
          path: storage_dir.to_path_buf(),
        }
        .into(),
      );
    }

    let mut registry = Self {
      storage_dir: storage_dir.to_path_buf(),
      components: BTreeMap::new(),
      sorted: false,
    };

    let mut files = Vec::new();
    collect_files(storage_dir, &mut files)?;
    for path in files {
      registry.add_file(path)?;
    }

    log::debug!(
      "scanned {}: {} components",
      storage_dir.display(),
      registry.components.len()
    );
    Ok(registry)
  }

  fn add_file(&mut self, path: PathBuf) -> UpdateResult<()> {
    let relative = path.strip_prefix(&self.storage_dir).unwrap_or(&path);
    let Some((identifier, version)) = version::parse_versioned_path(relative)? else {
      log::debug!("skipping unversioned file {}", path.display());
      return Ok(());
    };

    self
      .components
      .entry(identifier.clone())
      .or_insert_with(|| ReleasedComponent::new(identifier))
      .versions
      .push(VersionEntry::new(version, path));
    self.sorted = false;
    Ok(())
  }

  /// Sort every component's versions by descending precedence
  pub fn select_versions(&mut self) {
    for component in self.components.values_mut() {
      component.sort_by_precedence();
    }
    self.sorted = true;
  }

  /// Precedence-ordered snapshot of all components, ordered by identifier
  pub fn export(&self) -> UpdateResult<Vec<ReleasedComponent>> {
    if !self.sorted {
      return Err(RegistryError::NotSorted.into());
    }
    Ok(self.components.values().cloned().collect())
  }

  /// Root directory holding the versioned files and the channel indexes
  pub fn storage_dir(&self) -> &Path {
    &self.storage_dir
  }
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> UpdateResult<()> {
  let mut entries = std::fs::read_dir(dir)
    .with_context(|| format!("Failed to read directory {}", dir.display()))?
    .collect::<Result<Vec<_>, _>>()
    .with_context(|| format!("Failed to read directory {}", dir.display()))?;
  entries.sort_by_key(|e| e.file_name());

  for entry in entries {
    let path = entry.path();
    let file_type = entry.file_type()?;

    if file_type.is_dir() {
      collect_files(&path, files)?;
    } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
      files.push(path);
    }
  }

  Ok(())
}
