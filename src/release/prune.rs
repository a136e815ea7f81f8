//! Removal of staged pre-release files
//!
//! Deletion is sequential and stops at the first failure. Files removed
//! before the failure stay removed; there is no rollback.

use crate::core::error::{ResultExt, UpdateResult};
use crate::release::Outcome;
use crate::release::selector::ChannelSelection;
use crate::ui::Confirm;
use std::fs;

/// Deletes the files named by a storage-path selection
pub struct IndexPruner;

impl IndexPruner {
  /// Preview every path, then delete them once confirmed
  pub fn prune(&self, selection: &ChannelSelection, gate: &mut dyn Confirm) -> UpdateResult<Outcome> {
    println!("To be deleted:");
    if selection.is_empty() {
      println!("(no staged files selected)");
    }
    for path in selection.values() {
      println!("{}", path);
    }

    if !gate.confirm("\nDo you want to delete these files?") {
      println!("aborted...");
      return Ok(Outcome::Aborted);
    }

    for (deleted, path) in selection.values().enumerate() {
      fs::remove_file(path).with_context(|| {
        format!(
          "Failed to delete {} ({} of {} files already deleted)",
          path,
          deleted,
          selection.len()
        )
      })?;
      log::debug!("deleted {}", path);
    }

    println!("deleted");
    Ok(Outcome::Applied)
  }
}
