//! Build script for sluggers-site
//!
//! Generates a build version hash for asset cache busting.

use std::process::Command;

fn main() {
    // Rerun if CSS changes
    println!("cargo:rerun-if-changed=public/css");
    // Rerun if git HEAD changes (new commits)
    println!("cargo:rerun-if-changed=.git/HEAD");

    generate_build_version();
}

fn generate_build_version() {
    // Git short hash, falling back to the build timestamp
    let version = git_short_hash().unwrap_or_else(timestamp_version);
    println!("cargo:rustc-env=BUILD_VERSION={version}");
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "--short=8", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_string())
}

fn timestamp_version() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{:x}", d.as_secs()))
        .unwrap_or_else(|_| "unknown".to_string())
}
