use super::ffmpeg_cmd::FFMPEG_BIN;
use anyhow::{Context, Result};
use std::process::Command;

/// Check that ffmpeg is on PATH and return the first line of `ffmpeg -version`
pub fn ffmpeg_version() -> Result<String> {
    let output = Command::new(FFMPEG_BIN)
        .arg("-version")
        .output()
        .context("Failed to execute ffmpeg. Is ffmpeg installed and in PATH?")?;

    if !output.status.success() {
        anyhow::bail!("ffmpeg command failed with status: {}", output.status);
    }

    Ok(parse_version_line(&String::from_utf8_lossy(&output.stdout)))
}

pub fn parse_version_line(version_output: &str) -> String {
    version_output
        .lines()
        .next()
        .unwrap_or("Unknown version")
        .to_string()
}
