//! Versioned file names and the per-component version snapshot
//!
//! A distributable file carries its version in its name:
//! `all/ui/modules/portmaster_v0-1-2-beta.zip` is version `0.1.2-beta` of the
//! component `all/ui/modules/portmaster.zip`.

use crate::core::error::RegistryError;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Grammar of a channel tag inside a versioned file name
const CHANNEL_TAG: &str = "[a-z][a-z0-9]*";

static VERSIONED_NAME: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(
    r"^(?P<stem>.+)_v(?P<major>\d+)-(?P<minor>\d+)-(?P<patch>\d+)(?:-(?P<pre>{}))?(?P<ext>\..*)?$",
    CHANNEL_TAG
  ))
  .expect("versioned file name pattern is valid")
});

static CHANNEL_NAME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(&format!("^{}$", CHANNEL_TAG)).expect("channel tag pattern is valid"));

/// Whether `name` can appear as the channel tag of a versioned file
pub fn is_channel_tag(name: &str) -> bool {
  CHANNEL_NAME.is_match(name)
}

/// One stored version of a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionEntry {
  /// Canonical semver string, e.g. `1.5.0-beta`
  pub version_number: String,
  /// Pre-release tag; empty for stable
  pub channel_tag: String,
  /// Location of the stored file
  pub path: PathBuf,
  #[serde(skip)]
  semver: semver::Version,
}

impl VersionEntry {
  pub fn new(version: semver::Version, path: PathBuf) -> Self {
    Self {
      version_number: version.to_string(),
      channel_tag: version.pre.as_str().to_string(),
      path,
      semver: version,
    }
  }

  pub fn is_stable(&self) -> bool {
    self.channel_tag.is_empty()
  }
}

/// A component and its stored versions
///
/// Once the registry has sorted versions, `versions` is ordered by descending
/// precedence (newest first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleasedComponent {
  pub identifier: String,
  pub versions: Vec<VersionEntry>,
}

impl ReleasedComponent {
  pub fn new(identifier: impl Into<String>) -> Self {
    Self {
      identifier: identifier.into(),
      versions: Vec::new(),
    }
  }

  /// Sort versions newest first
  pub fn sort_by_precedence(&mut self) {
    self.versions.sort_by(|a, b| b.semver.cmp(&a.semver));
  }
}

/// Split a storage-relative file path into its component identifier and version
///
/// Returns `Ok(None)` for files without a version segment.
pub fn parse_versioned_path(relative: &Path) -> Result<Option<(String, semver::Version)>, RegistryError> {
  let Some(file_name) = relative.file_name().and_then(|n| n.to_str()) else {
    return Ok(None);
  };
  let Some(caps) = VERSIONED_NAME.captures(file_name) else {
    return Ok(None);
  };

  let mut version_str = format!("{}.{}.{}", &caps["major"], &caps["minor"], &caps["patch"]);
  if let Some(pre) = caps.name("pre") {
    version_str.push('-');
    version_str.push_str(pre.as_str());
  }
  let version = semver::Version::parse(&version_str).map_err(|e| RegistryError::InvalidVersion {
    path: relative.to_path_buf(),
    reason: e.to_string(),
  })?;

  let ext = caps.name("ext").map(|m| m.as_str()).unwrap_or("");
  let name = format!("{}{}", &caps["stem"], ext);

  // Identifiers always use forward slashes, regardless of platform
  let mut parts: Vec<String> = relative
    .parent()
    .map(|p| p.components().map(|c| c.as_os_str().to_string_lossy().into_owned()).collect())
    .unwrap_or_default();
  parts.push(name);

  Ok(Some((parts.join("/"), version)))
}
