//! Integration tests for `updatemgr scan`

use crate::helpers::{TestDist, run_updatemgr_ok};
use anyhow::Result;

#[test]
fn test_scan_lists_versions_newest_first() -> Result<()> {
  let dist = TestDist::with_files(&["all/app_v1-0-0.zip", "all/app_v1-1-0-beta.zip", "all/app_v0-9-0.zip"])?;

  let stdout = run_updatemgr_ok(&dist.path, &["scan"], "")?;
  let newest = stdout.find("1.1.0-beta").expect("beta listed");
  let stable = stdout.find("1.0.0").expect("stable listed");
  let oldest = stdout.find("0.9.0").expect("old stable listed");
  assert!(newest < stable && stable < oldest, "unexpected order:\n{}", stdout);

  Ok(())
}

#[test]
fn test_scan_json() -> Result<()> {
  let dist = TestDist::with_files(&["all/app_v1-0-0.zip", "linux/core_v0-1-0-beta"])?;

  let stdout = run_updatemgr_ok(&dist.path, &["scan", "--json"], "")?;
  let export: serde_json::Value = serde_json::from_str(&stdout)?;
  let components = export.as_array().expect("array of components");
  assert_eq!(components.len(), 2);
  assert_eq!(components[0]["identifier"], "all/app.zip");
  assert_eq!(components[1]["versions"][0]["channel_tag"], "beta");

  Ok(())
}

#[test]
fn test_scan_empty_directory() -> Result<()> {
  let dist = TestDist::new()?;

  let stdout = run_updatemgr_ok(&dist.path, &["scan"], "")?;
  assert!(stdout.contains("No versioned files"));

  Ok(())
}
