//! Pre-release staging: publish `<channel>.json`, or prune with `--reset`

use crate::commands::channel_versions;
use crate::core::context::DistContext;
use crate::core::error::UpdateResult;
use crate::release::{Channel, IndexPruner, IndexWriter, ResolveMode};
use crate::ui::Confirm;

/// Run the prerelease command
pub fn run_prerelease(ctx: &DistContext, channel: String, reset: bool, gate: &mut dyn Confirm) -> UpdateResult<()> {
  let channel = Channel::pre_release(channel)?;

  if reset {
    let selection = channel_versions(ctx, &channel, ResolveMode::StoragePath)?;
    IndexPruner.prune(&selection, gate)?;
    return Ok(());
  }

  let selection = channel_versions(ctx, &channel, ResolveMode::VersionNumber)?;
  IndexWriter::new(&ctx.storage_dir).publish(&channel, &selection, gate)?;
  Ok(())
}
