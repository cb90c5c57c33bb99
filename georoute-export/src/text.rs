//! Text helpers for the standard PDF fonts.

/// Encode `text` for a WinAnsi-encoded standard font.
///
/// Printable Latin-1 characters map to their single byte; anything else,
/// including control characters, becomes `?`.
pub(crate) fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(byte) if (0x20..0x7F).contains(&byte) || byte >= 0xA0 => byte,
            _ => b'?',
        })
        .collect()
}

/// Format a duration in minutes as `Xh Ym`, or `N min` below one hour.
///
/// Fractional minutes are truncated.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "durations arrive as fractional minutes and are shown as whole units"
)]
pub(crate) fn format_duration(minutes: f64) -> String {
    let total = minutes.max(0.0).trunc();
    let hours = (total / 60.0).trunc() as u64;
    let mins = (total % 60.0) as u64;
    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins} min")
    }
}

/// Split `text` into lines of at most `max_chars` characters on word breaks.
///
/// Words longer than a line are kept whole on a line of their own.
pub(crate) fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}
