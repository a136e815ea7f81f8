//! Channel index artifacts
//!
//! An index is `<storage root>/<channel>.json`: a pretty-printed JSON object
//! mapping component identifiers to the selected version number. Publishing
//! always replaces the whole file: the new index is written next to it and
//! renamed into place, so a failed write leaves the previous index intact.

use crate::core::error::{ResultExt, UpdateResult};
use crate::release::Outcome;
use crate::release::channel::Channel;
use crate::release::selector::ChannelSelection;
use crate::ui::Confirm;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes channel indexes into a storage root
pub struct IndexWriter {
  storage_dir: PathBuf,
}

impl IndexWriter {
  pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
    Self {
      storage_dir: storage_dir.into(),
    }
  }

  /// Destination of the index for `channel`
  pub fn index_path(&self, channel: &Channel) -> PathBuf {
    self.storage_dir.join(format!("{}.json", channel.index_name()))
  }

  /// Preview the index for `channel`, then write it once confirmed
  ///
  /// Serialization happens before the prompt, so a serialization failure is
  /// reported without asking anything.
  pub fn publish(&self, channel: &Channel, selection: &ChannelSelection, gate: &mut dyn Confirm) -> UpdateResult<Outcome> {
    let data = serialize_index(selection)?;
    let index_path = self.index_path(channel);

    println!("{} ({}):", channel, index_path.display());
    println!("{}", String::from_utf8_lossy(&data));
    print_changes(&index_path, selection);

    if !gate.confirm("\nDo you want to write this index?") {
      println!("aborted...");
      return Ok(Outcome::Aborted);
    }

    replace_file(&index_path, |file| file.write_all(&data)).with_context(|| format!("Failed to write index {}", index_path.display()))?;
    log::info!("wrote {} entries to {}", selection.len(), index_path.display());
    println!("written {}", index_path.display());

    Ok(Outcome::Applied)
  }
}

/// Serialize a selection the way indexes are stored: one-space indentation
pub fn serialize_index(selection: &ChannelSelection) -> UpdateResult<Vec<u8>> {
  let mut data = Vec::new();
  let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
  let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
  selection
    .serialize(&mut serializer)
    .context("Failed to serialize index")?;
  Ok(data)
}

/// Read a previously published index
pub fn read_index(path: &Path) -> UpdateResult<ChannelSelection> {
  let content = fs::read(path).with_context(|| format!("Failed to read index {}", path.display()))?;
  let selection: ChannelSelection = serde_json::from_slice(&content).with_context(|| format!("Failed to parse index {}", path.display()))?;
  Ok(selection)
}

/// Show how the pending index differs from the one on disk, if any
fn print_changes(index_path: &Path, selection: &ChannelSelection) {
  if !index_path.exists() {
    return;
  }
  let current = match read_index(index_path) {
    Ok(current) => current,
    Err(e) => {
      log::warn!("could not compare against existing index: {}", e);
      return;
    }
  };

  let mut lines = Vec::new();
  for (identifier, version) in selection.iter() {
    match current.get(identifier) {
      None => lines.push(format!("  + {} {}", identifier, version)),
      Some(old) if old != version => lines.push(format!("  ~ {} {} -> {}", identifier, old, version)),
      Some(_) => {}
    }
  }
  for (identifier, version) in current.iter() {
    if selection.get(identifier).is_none() {
      lines.push(format!("  - {} {}", identifier, version));
    }
  }

  if lines.is_empty() {
    println!("\nNo changes against the current index.");
  } else {
    println!("\nChanges against the current index:");
    for line in lines {
      println!("{}", line);
    }
  }
}

/// Atomically replace `path` with whatever `write` puts into a fresh file
fn replace_file(path: &Path, write: impl FnOnce(&mut fs::File) -> io::Result<()>) -> io::Result<()> {
  let dir = path
    .parent()
    .filter(|p| !p.as_os_str().is_empty())
    .unwrap_or_else(|| Path::new("."));

  let mut tmp = NamedTempFile::new_in(dir)?;
  write(tmp.as_file_mut())?;
  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt;
    tmp.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
  }
  tmp.as_file().sync_all()?;
  tmp.persist(path).map_err(|e| e.error)?;
  Ok(())
}
