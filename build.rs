//! Build script for pcrmix
//!
//! Bumps the local build counter and embeds build metadata for the banner.

use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=PCRMIX_BUILD_NUMBER");

    // CI can pin the build number; local builds count up in build_number.txt
    let build_number = match std::env::var("PCRMIX_BUILD_NUMBER") {
        Ok(pinned) => pinned.trim().parse().unwrap_or(0),
        Err(_) => next_local_build_number(Path::new("build_number.txt")),
    };

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=PCRMIX_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=PCRMIX_BUILD_TIMESTAMP={}", timestamp);
}

fn next_local_build_number(path: &Path) -> u64 {
    let current: u64 = fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);

    let next = current + 1;
    fs::write(path, next.to_string()).expect("Failed to write build number file");
    next
}
