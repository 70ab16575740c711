//! Record formatting: turning a [`PromptState`] into the decorated
//! segment handed back to the shell.

use anstyle::Style;
use std::path::PathBuf;

use crate::config::{Glyphs, PromptConfig};
use crate::styling;
use crate::vcs::{self, PromptState, StatusRecord, Vcs};

/// Render the prompt segment for the current directory.
///
/// This is the zero-argument entry point wired into the shell prompt.
/// It never fails: outside any working tree it returns the empty string,
/// and backend failures come back as error-colored text.
pub fn vcs_prompt() -> String {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    render(&vcs::scan(&dir), PromptConfig::get())
}

/// Map one prompt state to its decorated text.
pub fn render(state: &PromptState, config: &PromptConfig) -> String {
    match state {
        PromptState::NotInTree => String::new(),
        PromptState::Error(err) => {
            let style = styling::parse_color(&config.colors.error, styling::ERROR);
            decorate(config, style, "error", &err.message)
        }
        PromptState::Status(record) => {
            let body = format_record(record, &config.glyphs);
            decorate(
                config,
                backend_style(config, record.vcs),
                &record.vcs.to_string(),
                &body,
            )
        }
    }
}

fn backend_style(config: &PromptConfig, vcs: Vcs) -> Style {
    match vcs {
        Vcs::Git => styling::parse_color(&config.colors.git, styling::GIT),
        Vcs::Hg => styling::parse_color(&config.colors.hg, styling::HG),
        Vcs::Svn => styling::parse_color(&config.colors.svn, styling::SVN),
    }
}

/// Apply the visual cue: a marker-bracketed color prefix and reset suffix
/// in color mode, a literal name tag otherwise.
fn decorate(config: &PromptConfig, style: Style, tag: &str, body: &str) -> String {
    if config.color {
        styling::prompt_wrap(style, body)
    } else {
        format!("{tag}:{body}")
    }
}

/// Branch label with ahead/behind glyphs (each shown once, regardless of
/// magnitude), then either the clean glyph or the ordered
/// untracked → changed → staged indicators, each only when its count
/// is nonzero.
fn format_record(record: &StatusRecord, glyphs: &Glyphs) -> String {
    let mut body = String::new();

    if !record.branch.is_empty() {
        body.push_str(&record.branch);
        if record.ahead > 0 {
            body.push_str(&glyphs.ahead);
        }
        if record.behind > 0 {
            body.push_str(&glyphs.behind);
        }
    }

    let mut indicators = String::new();
    if record.is_clean() {
        indicators.push_str(&glyphs.clean);
    } else {
        for (glyph, count) in [
            (&glyphs.untracked, record.untracked),
            (&glyphs.changed, record.changed),
            (&glyphs.staged, record.staged),
        ] {
            if count > 0 {
                indicators.push_str(glyph);
                indicators.push_str(&count.to_string());
            }
        }
    }

    if !indicators.is_empty() {
        if !body.is_empty() {
            body.push(' ');
        }
        body.push_str(&indicators);
    }
    body
}
