use crate::core::error::{ConfigError, UpdateResult};
use crate::registry::version::is_channel_tag;
use std::fmt;

/// Index name used for the stable channel
pub const STABLE_INDEX_NAME: &str = "stable";

/// A named release track
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Channel {
  /// Versions without a pre-release tag
  Stable,
  /// Versions tagged with this pre-release name, e.g. `beta`
  PreRelease(String),
}

impl Channel {
  /// Build a pre-release channel from a user supplied name
  pub fn pre_release(name: impl Into<String>) -> UpdateResult<Self> {
    let name = name.into();

    if name.is_empty() {
      return Err(
        ConfigError::InvalidChannel {
          name,
          reason: "channel name must not be empty".to_string(),
        }
        .into(),
      );
    }
    if name == STABLE_INDEX_NAME {
      return Err(
        ConfigError::InvalidChannel {
          name,
          reason: "'stable' is reserved for the stable index".to_string(),
        }
        .into(),
      );
    }
    // Anything else could never match a versioned file name
    if !is_channel_tag(&name) {
      return Err(
        ConfigError::InvalidChannel {
          reason: "must be lowercase letters and digits, starting with a letter".to_string(),
          name,
        }
        .into(),
      );
    }

    Ok(Channel::PreRelease(name))
  }

  /// Pre-release tag versions of this channel carry (empty for stable)
  pub fn tag(&self) -> &str {
    match self {
      Channel::Stable => "",
      Channel::PreRelease(name) => name,
    }
  }

  /// Name of the index artifact, without extension
  pub fn index_name(&self) -> &str {
    match self {
      Channel::Stable => STABLE_INDEX_NAME,
      Channel::PreRelease(name) => name,
    }
  }
}

impl fmt::Display for Channel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.index_name())
  }
}
