//! Read-only listing of the distribution directory

use crate::core::context::DistContext;
use crate::core::error::UpdateResult;

/// Run the scan command
pub fn run_scan(ctx: &DistContext, json: bool) -> UpdateResult<()> {
  let export = ctx.export()?;

  if json {
    println!("{}", serde_json::to_string_pretty(&export)?);
    return Ok(());
  }

  if export.is_empty() {
    println!("⚠️  No versioned files found in {}", ctx.storage_dir.display());
    return Ok(());
  }

  println!("📦 {} components in {}", export.len(), ctx.storage_dir.display());
  for component in &export {
    println!();
    println!("{}", component.identifier);
    for version in &component.versions {
      let channel = if version.is_stable() { "stable" } else { version.channel_tag.as_str() };
      println!("  {:<20} {}", version.version_number, channel);
    }
  }

  Ok(())
}
