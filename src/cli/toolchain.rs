// ABOUTME: Go toolchain version detection for the init command
// ABOUTME: Runs `go version` and extracts the major.minor release

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use std::process::Command;
use tracing::{debug, warn};

pub const DEFAULT_GO_VERSION: &str = "1.21";

/// Extract "1.21" from output like "go version go1.21.5 darwin/amd64"
pub fn parse_go_version(output: &str) -> Option<String> {
    let version_regex = Regex::new(r"go(\d+\.\d+)").ok()?;
    version_regex
        .captures(output)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn detect_go_version() -> Result<String> {
    let output = Command::new("go")
        .arg("version")
        .output()
        .context("failed to execute 'go version'")?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_go_version(&stdout)
        .ok_or_else(|| anyhow!("could not parse Go version from: {}", stdout.trim()))
}

/// Detected version, or the default when detection fails
pub fn detect_go_version_or_default() -> String {
    match detect_go_version() {
        Ok(version) => {
            debug!("Detected Go version {}", version);
            version
        }
        Err(e) => {
            warn!(
                "Could not detect Go version, using default {}: {:#}",
                DEFAULT_GO_VERSION, e
            );
            DEFAULT_GO_VERSION.to_string()
        }
    }
}
