//! Integration tests for `updatemgr release`

use crate::helpers::{TestDist, run_updatemgr, run_updatemgr_interactive, run_updatemgr_ok};
use anyhow::Result;

#[test]
fn test_release_writes_stable_index() -> Result<()> {
  let dist = TestDist::with_files(&[
    "all/ui/app_v2-0-0.zip",
    "all/ui/app_v1-5-0-beta.zip",
    "all/ui/app_v1-4-0.zip",
    "linux/core_v1-0-0",
    "linux/core_v1-1-0-beta",
    "linux/tool_v0-1-0-beta",
  ])?;

  let stdout = run_updatemgr_ok(&dist.path, &["release"], "y\n")?;
  assert!(stdout.contains("stable ("), "preview header missing: {}", stdout);
  assert!(stdout.contains("written"));

  let index = dist.read_index("stable")?;
  assert_eq!(index.get("all/ui/app.zip").map(String::as_str), Some("2.0.0"));
  assert_eq!(index.get("linux/core").map(String::as_str), Some("1.0.0"));
  assert!(!index.contains_key("linux/tool"), "no stable version of linux/tool exists");
  assert_eq!(index.len(), 2);

  Ok(())
}

#[test]
fn test_release_index_format() -> Result<()> {
  let dist = TestDist::with_files(&["all/app_v1-0-0.zip"])?;

  run_updatemgr_ok(&dist.path, &["release"], "yes\n")?;

  let content = std::fs::read_to_string(dist.path.join("stable.json"))?;
  assert_eq!(content, "{\n \"all/app.zip\": \"1.0.0\"\n}");

  Ok(())
}

#[test]
fn test_release_declined_writes_nothing() -> Result<()> {
  let dist = TestDist::with_files(&["all/app_v1-0-0.zip"])?;

  let stdout = run_updatemgr_ok(&dist.path, &["release"], "n\n")?;
  assert!(stdout.contains("aborted..."));
  assert!(!dist.file_exists("stable.json"));

  // Empty input (EOF) is a decline too
  let stdout = run_updatemgr_ok(&dist.path, &["release"], "")?;
  assert!(stdout.contains("aborted..."));
  assert!(!dist.file_exists("stable.json"));

  Ok(())
}

#[test]
fn test_release_replaces_previous_index() -> Result<()> {
  let dist = TestDist::with_files(&["all/app_v1-0-0.zip"])?;
  std::fs::write(dist.path.join("stable.json"), "{\n \"gone/component\": \"0.1.0\"\n}")?;

  let stdout = run_updatemgr_ok(&dist.path, &["release"], "y\n")?;
  assert!(stdout.contains("- gone/component 0.1.0"));
  assert!(stdout.contains("+ all/app.zip 1.0.0"));

  let index = dist.read_index("stable")?;
  assert_eq!(index.len(), 1);
  assert_eq!(index.get("all/app.zip").map(String::as_str), Some("1.0.0"));

  Ok(())
}

#[test]
fn test_release_with_dir_flag() -> Result<()> {
  let dist = TestDist::with_files(&["dist/all/app_v3-1-4.zip"])?;

  run_updatemgr_ok(&dist.path, &["--dir", "dist", "release"], "y\n")?;
  assert!(dist.file_exists("dist/stable.json"));
  assert!(!dist.file_exists("stable.json"));

  Ok(())
}

#[test]
fn test_release_with_config_root() -> Result<()> {
  let dist = TestDist::with_files(&["releases/all/app_v3-1-4.zip"])?;
  std::fs::write(dist.path.join("updatemgr.toml"), "[storage]\nroot = \"releases\"\n")?;

  run_updatemgr_ok(&dist.path, &["release"], "y\n")?;
  let content = std::fs::read_to_string(dist.path.join("releases/stable.json"))?;
  assert!(content.contains("3.1.4"));

  Ok(())
}

#[test]
fn test_release_missing_storage_dir_fails() -> Result<()> {
  let dist = TestDist::new()?;

  let output = run_updatemgr(&dist.path, &["--dir", "missing", "release"], "y\n")?;
  assert_eq!(output.status.code(), Some(2));
  assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));

  Ok(())
}

#[test]
fn test_release_failed_write_exits_with_system_error() -> Result<()> {
  let dist = TestDist::with_files(&["dist/all/app_v1-0-0.zip"])?;

  // Remove the storage root after the preview so the index cannot be written
  let run = run_updatemgr_interactive(
    &dist.path,
    &["--dir", "dist", "release"],
    "stable (",
    || Ok(std::fs::remove_dir_all(dist.path.join("dist"))?),
    "y\n",
  )?;

  assert_eq!(run.status.code(), Some(2), "stderr: {}", run.stderr);
  assert!(run.stderr.contains("Failed to write index"));
  assert!(!run.stdout.contains("written"));

  Ok(())
}
