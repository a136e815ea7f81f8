//! Per-channel version selection over a registry export

use crate::registry::ReleasedComponent;
use crate::release::channel::Channel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a selected version resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
  /// Canonical version string, for publishing an index
  VersionNumber,
  /// Path of the stored file, for pruning
  StoragePath,
}

/// Component identifier -> selected version number or storage path
///
/// A missing key means no version of that component belongs to the channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelSelection(BTreeMap<String, String>);

impl ChannelSelection {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, identifier: impl Into<String>, value: impl Into<String>) {
    self.0.insert(identifier.into(), value.into());
  }

  pub fn get(&self, identifier: &str) -> Option<&str> {
    self.0.get(identifier).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Entries in identifier order
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  /// Selected values in identifier order
  pub fn values(&self) -> impl Iterator<Item = &str> {
    self.0.values().map(String::as_str)
  }
}

impl FromIterator<(String, String)> for ChannelSelection {
  fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

/// Select the newest version of each component that belongs to `channel`
///
/// `components` must be ordered by descending precedence, as exported by the
/// registry. A stable version ends the scan of its component: older
/// pre-releases behind it are never selected.
pub fn select_channel_versions(components: &[ReleasedComponent], channel: &Channel, mode: ResolveMode) -> ChannelSelection {
  let wanted = channel.tag();
  let mut selection = ChannelSelection::new();

  for component in components {
    for version in &component.versions {
      if version.channel_tag == wanted {
        let value = match mode {
          ResolveMode::VersionNumber => version.version_number.clone(),
          ResolveMode::StoragePath => version.path.to_string_lossy().into_owned(),
        };
        selection.insert(component.identifier.clone(), value);
        break;
      } else if version.is_stable() {
        log::debug!(
          "{}: stable {} precedes any {} version",
          component.identifier,
          version.version_number,
          channel
        );
        break;
      }
      // Unrelated pre-release channel, keep scanning
    }
  }

  selection
}
