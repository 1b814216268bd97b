//! Parser for `say -v ?` output.

use robovoice_core::VoiceInfo;

/// Parse the voice listing printed by `say -v ?`.
///
/// Each line looks like `Name   locale   # sample sentence`. Names may
/// contain spaces (`Eddy (English (UK))`), so the locale is taken as the
/// last token before `#` and everything in front of it is the name.
/// Lines that do not fit are skipped.
pub fn parse_voice_list(output: &str) -> Vec<VoiceInfo> {
    output.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<VoiceInfo> {
    let (head, sample) = match line.split_once('#') {
        Some((head, sample)) => (head, Some(sample.trim())),
        None => (line, None),
    };

    let head = head.trim_end();
    let (name, locale) = head.rsplit_once(char::is_whitespace)?;
    let name = name.trim();
    if name.is_empty() || locale.is_empty() {
        return None;
    }

    Some(VoiceInfo {
        name: name.to_string(),
        locale: locale.to_string(),
        sample: sample.filter(|s| !s.is_empty()).map(str::to_string),
    })
}
