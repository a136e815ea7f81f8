mod test_prerelease;
mod test_release;
mod test_scan;
