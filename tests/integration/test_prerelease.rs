//! Integration tests for `updatemgr prerelease`

use crate::helpers::{TestDist, run_updatemgr, run_updatemgr_interactive, run_updatemgr_ok};
use anyhow::Result;

fn staged_dist() -> Result<TestDist> {
  TestDist::with_files(&[
    // beta newer than stable
    "all/ui/app_v2-1-0-beta.zip",
    "all/ui/app_v2-0-0-beta.zip",
    "all/ui/app_v1-9-0.zip",
    // stable newer than the only beta
    "linux/core_v2-0-0",
    "linux/core_v1-5-0-beta",
    "linux/core_v1-4-0",
    // beta behind an unrelated alpha
    "linux/tool_v0-3-0-alpha",
    "linux/tool_v0-2-0-beta",
    // stable only
    "linux/lib_v1-0-0.so",
  ])
}

#[test]
fn test_prerelease_writes_channel_index() -> Result<()> {
  let dist = staged_dist()?;

  let stdout = run_updatemgr_ok(&dist.path, &["prerelease", "beta"], "y\n")?;
  assert!(stdout.contains("beta ("));

  let index = dist.read_index("beta")?;
  assert_eq!(index.get("all/ui/app.zip").map(String::as_str), Some("2.1.0-beta"));
  assert_eq!(index.get("linux/tool").map(String::as_str), Some("0.2.0-beta"));
  assert!(!index.contains_key("linux/core"), "stable 2.0.0 blocks 1.5.0-beta");
  assert!(!index.contains_key("linux/lib.so"));
  assert!(!dist.file_exists("stable.json"));

  Ok(())
}

#[test]
fn test_prerelease_unknown_channel_publishes_empty_index() -> Result<()> {
  let dist = staged_dist()?;

  run_updatemgr_ok(&dist.path, &["prerelease", "nightly"], "y\n")?;
  assert!(dist.read_index("nightly")?.is_empty());

  Ok(())
}

#[test]
fn test_prerelease_reset_deletes_selected_files() -> Result<()> {
  let dist = staged_dist()?;

  let stdout = run_updatemgr_ok(&dist.path, &["prerelease", "beta", "--reset"], "y\n")?;
  assert!(stdout.contains("To be deleted:"));
  assert!(stdout.contains("deleted"));

  // Only the newest eligible beta of each component is removed
  assert!(!dist.file_exists("all/ui/app_v2-1-0-beta.zip"));
  assert!(!dist.file_exists("linux/tool_v0-2-0-beta"));
  assert!(dist.file_exists("all/ui/app_v2-0-0-beta.zip"));
  assert!(dist.file_exists("linux/core_v1-5-0-beta"));
  assert!(dist.file_exists("linux/tool_v0-3-0-alpha"));
  assert!(!dist.file_exists("beta.json"), "reset never writes an index");

  Ok(())
}

#[test]
fn test_prerelease_reset_declined_keeps_files() -> Result<()> {
  let dist = staged_dist()?;

  let stdout = run_updatemgr_ok(&dist.path, &["prerelease", "beta", "--reset"], "\n")?;
  assert!(stdout.contains("aborted..."));
  assert!(dist.file_exists("all/ui/app_v2-1-0-beta.zip"));
  assert!(dist.file_exists("linux/tool_v0-2-0-beta"));

  Ok(())
}

#[test]
fn test_prerelease_rejects_reserved_channel() -> Result<()> {
  let dist = staged_dist()?;

  let output = run_updatemgr(&dist.path, &["prerelease", "stable"], "y\n")?;
  assert_eq!(output.status.code(), Some(1));
  assert!(!dist.file_exists("stable.json"));

  Ok(())
}

#[test]
fn test_prerelease_requires_channel_argument() -> Result<()> {
  let dist = staged_dist()?;

  let output = run_updatemgr(&dist.path, &["prerelease"], "")?;
  assert!(!output.status.success());

  Ok(())
}

#[test]
fn test_prerelease_reset_failed_deletion_exits_with_system_error() -> Result<()> {
  let dist = staged_dist()?;

  // Selection order is by identifier: all/ui/app.zip, then linux/tool
  let run = run_updatemgr_interactive(
    &dist.path,
    &["prerelease", "beta", "--reset"],
    "To be deleted:",
    || Ok(std::fs::remove_file(dist.path.join("linux/tool_v0-2-0-beta"))?),
    "y\n",
  )?;

  assert_eq!(run.status.code(), Some(2), "stderr: {}", run.stderr);
  assert!(run.stderr.contains("linux/tool_v0-2-0-beta"));
  assert!(run.stderr.contains("1 of 2"));
  // The first file was deleted before the failure and stays deleted
  assert!(!dist.file_exists("all/ui/app_v2-1-0-beta.zip"));

  Ok(())
}
