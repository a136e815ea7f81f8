//! Stable release: publish `stable.json`

use crate::commands::channel_versions;
use crate::core::context::DistContext;
use crate::core::error::UpdateResult;
use crate::release::{Channel, IndexWriter, ResolveMode};
use crate::ui::Confirm;

/// Run the release command
pub fn run_release(ctx: &DistContext, gate: &mut dyn Confirm) -> UpdateResult<()> {
  let channel = Channel::Stable;
  let selection = channel_versions(ctx, &channel, ResolveMode::VersionNumber)?;

  IndexWriter::new(&ctx.storage_dir).publish(&channel, &selection, gate)?;
  Ok(())
}
