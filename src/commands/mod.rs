//! CLI commands for updatemgr
//!
//! - **release**: publish the stable channel index
//! - **prerelease**: publish a pre-release channel index, or prune its staged files
//! - **scan**: list components and versions found in the distribution directory
//!
//! All commands accept `&DistContext`; mutating commands also take the
//! confirmation gate so tests can script the answer.

pub mod prerelease;
pub mod release;
pub mod scan;

pub use prerelease::run_prerelease;
pub use release::run_release;
pub use scan::run_scan;

use crate::core::context::DistContext;
use crate::core::error::UpdateResult;
use crate::release::{Channel, ChannelSelection, ResolveMode, select_channel_versions};

/// Scan the registry and select the versions belonging to `channel`
fn channel_versions(ctx: &DistContext, channel: &Channel, mode: ResolveMode) -> UpdateResult<ChannelSelection> {
  let export = ctx.export()?;
  let selection = select_channel_versions(&export, channel, mode);
  log::debug!(
    "{}: selected {} of {} components",
    channel,
    selection.len(),
    export.len()
  );
  Ok(selection)
}
