//! Table formatting for voice listings and dependency checks.

use std::fmt::Write;

use robovoice_core::{Dependency, DependencyStatus, VoiceInfo};

use super::{BOLD, GREEN, RED, RESET, YELLOW};

/// Format voices as an aligned table, marking `current` with `*`.
pub fn format_voice_table(voices: &[VoiceInfo], current: &str) -> String {
    let name_width = voices
        .iter()
        .map(|v| v.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("VOICE".len());

    let mut out = String::new();
    let _ = writeln!(out, "{BOLD}  {:<name_width$}  {:<8}  SAMPLE{RESET}", "VOICE", "LOCALE");
    for voice in voices {
        let marker = if voice.name == current { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:<name_width$}  {:<8}  {}",
            voice.name,
            voice.locale,
            voice.sample.as_deref().unwrap_or("")
        );
    }
    out
}

/// Format a single dependency row in the status table.
pub fn format_dependency_row(dep: &Dependency) -> String {
    let status_str = match &dep.status {
        DependencyStatus::Present { version } => {
            if version.is_empty() {
                format!("{GREEN}✓ installed{RESET}")
            } else {
                format!("{GREEN}✓ v{version}{RESET}")
            }
        }
        DependencyStatus::Missing => {
            if dep.required {
                format!("{RED}✗ missing{RESET}")
            } else {
                format!("{YELLOW}○ missing{RESET}")
            }
        }
    };

    let req_indicator = if dep.required {
        format!("{RED}*{RESET}")
    } else {
        " ".to_string()
    };

    format!(
        "{}{:<19} {:<25} {}",
        req_indicator, dep.name, status_str, dep.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(name: &str, locale: &str) -> VoiceInfo {
        VoiceInfo {
            name: name.into(),
            locale: locale.into(),
            sample: Some(format!("Hello! My name is {name}.")),
        }
    }

    #[test]
    fn test_voice_table_marks_current() {
        let table = format_voice_table(&[voice("Albert", "en_US"), voice("Zarvox", "en_US")], "Zarvox");
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("  Albert"));
        assert!(lines[2].starts_with("* Zarvox"));
        assert!(lines[2].contains("Hello! My name is Zarvox."));
    }

    #[test]
    fn test_dependency_row_states() {
        let present = Dependency::optional("ffmpeg", "Converts AIFF output to WAV").with_status(
            DependencyStatus::Present {
                version: "6.1.1".into(),
            },
        );
        assert!(format_dependency_row(&present).contains("✓ v6.1.1"));

        let missing = Dependency::required("say", "Speech synthesis");
        let row = format_dependency_row(&missing);
        assert!(row.contains("✗ missing"));
        assert!(row.contains("Speech synthesis"));
    }
}
