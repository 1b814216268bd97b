//! Generic command existence and version extraction.

use std::process::Command;

use tracing::debug;

/// Check if a command exists in the system PATH (or at the given path).
pub fn command_exists(cmd: &str) -> bool {
    match which::which(cmd) {
        Ok(path) => {
            debug!("Found {} at {}", cmd, path.display());
            true
        }
        Err(_) => false,
    }
}

/// Get the first line of a command's version output.
pub fn get_command_version(cmd: &str, version_flag: &str) -> Option<String> {
    let output = Command::new(cmd).arg(version_flag).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Try stdout first, fall back to stderr (some tools output to stderr)
    let text = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };

    text.lines().next().map(|s| s.trim().to_string())
}

/// Get ffmpeg version.
pub fn get_ffmpeg_version(cmd: &str) -> Option<String> {
    let output = get_command_version(cmd, "-version")?;
    parse_ffmpeg_version(&output)
}

/// "ffmpeg version 6.1.1 Copyright (c) 2000-2023 ..." -> "6.1.1"
fn parse_ffmpeg_version(line: &str) -> Option<String> {
    let mut words = line.split_whitespace();
    words.find(|w| *w == "version")?;
    words.next().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ffmpeg_version() {
        assert_eq!(
            parse_ffmpeg_version("ffmpeg version 6.1.1 Copyright (c) 2000-2023 the FFmpeg developers"),
            Some("6.1.1".to_string())
        );
        assert_eq!(
            parse_ffmpeg_version("ffmpeg version n7.0-static https://johnvansickle.com"),
            Some("n7.0-static".to_string())
        );
        assert_eq!(parse_ffmpeg_version("not a version line"), None);
    }

    #[test]
    fn test_nonexistent_command() {
        assert!(!command_exists("nonexistent-command-12345"));
        assert!(get_command_version("nonexistent-command-12345", "--version").is_none());
    }
}
