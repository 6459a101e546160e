//! Shared integration test helpers for nerd-icons.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` attribute suppresses warnings when only a subset of
//! helpers is used per file.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small config using ASCII stand-ins for glyphs so assertions stay readable.
pub const BASIC_CONFIG: &str = r##"
config:
  fallback-icon: "?"
  prefer-host-icon: true
  icon-color: "#cdd6f4"

icons:
  zsh: Z
  ssh: S
  nvim:
    icon: N
    icon-color: "#57a143"
    ring-color: "#000000"
    title:
      "^git(hub)?": G
      '\.rs$': R
  python:
    icon-color: "#3776ab"
  Docker: D

title_icons:
  htop: H
  lazygit: L

sessions:
  alpha: A
  dotfiles: F

hosts:
  "*.local":
    icon: LOCAL
    index-color: "#fab387"
    alert-color: "#ff0000"
  prod-db: P
  "web-[0-9]*": W
"##;

/// Writes `body` to `config.yml` inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_config(body: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.yml");
    fs::write(&path, body).expect("Failed to write config");
    (dir, path)
}

/// Path of the realistic fixture shared with the config crate's tests.
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("nerd-icons-config")
        .join("tests")
        .join("fixtures")
        .join("config.yml")
}

/// A foreground lookup that always reports `argv`.
pub fn fixed_lookup(argv: &'static [&'static str]) -> impl Fn(u32) -> Vec<String> + Clone {
    move |_pid| argv.iter().map(|s| s.to_string()).collect()
}
