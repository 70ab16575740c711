//! Terminal styling for the prompt segment.
//!
//! Built on anstyle. Prompt strings carry one constraint ordinary
//! terminal output does not: every escape sequence must be bracketed in
//! the line editor's "invisible span" markers, otherwise readline counts
//! the escape bytes against the line width and cursor positioning breaks
//! on history recall.

use anstyle::{AnsiColor, Color, Style};

/// readline `RL_PROMPT_START_IGNORE`
pub const PROMPT_IGNORE_START: char = '\u{1}';
/// readline `RL_PROMPT_END_IGNORE`
pub const PROMPT_IGNORE_END: char = '\u{2}';

/// Default git cue (green)
pub const GIT: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Default hg cue (cyan)
pub const HG: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

/// Default svn cue (magenta)
pub const SVN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Magenta)));

/// Error cue (red)
pub const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Resolve a configured color name to a style. Unknown names keep
/// `fallback`, the compiled-in default for that slot.
pub fn parse_color(name: &str, fallback: Style) -> Style {
    let color = match name.trim().to_ascii_lowercase().as_str() {
        "black" => AnsiColor::Black,
        "red" => AnsiColor::Red,
        "green" => AnsiColor::Green,
        "yellow" => AnsiColor::Yellow,
        "blue" => AnsiColor::Blue,
        "magenta" => AnsiColor::Magenta,
        "cyan" => AnsiColor::Cyan,
        "white" => AnsiColor::White,
        "bright-black" => AnsiColor::BrightBlack,
        "bright-red" => AnsiColor::BrightRed,
        "bright-green" => AnsiColor::BrightGreen,
        "bright-yellow" => AnsiColor::BrightYellow,
        "bright-blue" => AnsiColor::BrightBlue,
        "bright-magenta" => AnsiColor::BrightMagenta,
        "bright-cyan" => AnsiColor::BrightCyan,
        "bright-white" => AnsiColor::BrightWhite,
        _ => return fallback,
    };
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// Wrap `text` in a style prefix and reset suffix, bracketing both escape
/// sequences in prompt-ignore markers. The reset is derived from the same
/// style, so a prefix is never emitted without its matching suffix.
pub fn prompt_wrap(style: Style, text: &str) -> String {
    format!(
        "{PROMPT_IGNORE_START}{}{PROMPT_IGNORE_END}{text}{PROMPT_IGNORE_START}{}{PROMPT_IGNORE_END}",
        style.render(),
        style.render_reset()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_known_names() {
        assert_eq!(parse_color("green", ERROR), GIT);
        assert_eq!(parse_color("  Cyan ", ERROR), HG);
        assert_eq!(
            parse_color("bright-magenta", ERROR),
            Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightMagenta)))
        );
    }

    #[test]
    fn test_parse_color_unknown_name_keeps_fallback() {
        assert_eq!(parse_color("chartreuse", SVN), SVN);
        assert_eq!(parse_color("", GIT), GIT);
    }

    #[test]
    fn test_prompt_wrap_pairs_markers_and_escapes() {
        let wrapped = prompt_wrap(GIT, "main");
        assert!(wrapped.contains("main"));
        // Two bracketed spans: one for the color prefix, one for the reset.
        assert_eq!(wrapped.matches(PROMPT_IGNORE_START).count(), 2);
        assert_eq!(wrapped.matches(PROMPT_IGNORE_END).count(), 2);
        assert!(wrapped.starts_with(PROMPT_IGNORE_START));
        assert!(wrapped.ends_with(PROMPT_IGNORE_END));
        // The payload itself sits outside the ignored spans.
        let after_prefix = wrapped.split(PROMPT_IGNORE_END).nth(1).unwrap();
        assert!(after_prefix.starts_with("main"));
    }
}
