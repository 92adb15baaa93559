//! Build script for the storefront crate.
//!
//! Hashes the static stylesheet and script so their URLs change whenever
//! their content does.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

const HASHED_ASSETS: [&str; 2] = ["static/css/main.css", "static/js/storefront.js"];

fn main() {
    hash_assets();
}

/// Sets `ASSET_HASH` for use with `env!("ASSET_HASH")`.
fn hash_assets() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");

    let mut hasher = Sha256::new();
    for asset in HASHED_ASSETS {
        let path = Path::new(&manifest_dir).join(asset);
        println!("cargo:rerun-if-changed={}", path.display());
        match fs::read(&path) {
            Ok(content) => hasher.update(&content),
            Err(e) => println!("cargo:warning=Could not read {asset}: {e}"),
        }
    }

    let hash = format!("{:x}", hasher.finalize());
    let short_hash = &hash[..8];
    println!("cargo:rustc-env=ASSET_HASH={short_hash}");
}
