//! `hg summary` probe and parser.
//!
//! The summary is an aggregated multi-line report; only the `branch:`
//! line and the `commit:` pending-changes line matter here. Mercurial
//! has no index and no ahead/behind concept in scope, so those counts
//! stay zero.

use std::path::Path;

use super::{CapturedOutput, ParseError, Probe, StatusRecord, Vcs, run_status};

const SUMMARY_ARGS: &[&str] = &["summary"];

const UNEXPECTED: &str = "unexpected hg summary output";

fn unexpected() -> ParseError {
    ParseError::new(Vcs::Hg, UNEXPECTED)
}

pub(crate) fn probe(dir: &Path) -> Probe {
    let Some(output) = run_status("hg", SUMMARY_ARGS, dir) else {
        return Probe::NotRepo;
    };
    classify(&output)
}

fn classify(output: &CapturedOutput) -> Probe {
    if output.success {
        Probe::Output(output.stdout.clone())
    } else if output.stderr.contains("no repository found") {
        Probe::NotRepo
    } else {
        Probe::Broken(unexpected())
    }
}

/// Reduce summary output to a status record.
pub fn parse(output: &str) -> Result<StatusRecord, ParseError> {
    let mut record = StatusRecord::new(Vcs::Hg);
    let mut saw_pending = false;

    for line in output.lines() {
        if let Some(branch) = line.strip_prefix("branch: ") {
            record.branch = branch.trim().to_string();
        } else if let Some(pending) = line.strip_prefix("commit: ") {
            parse_pending(pending.trim(), &mut record)?;
            saw_pending = true;
        }
    }

    // Both lines are mandatory; a summary without them is not a summary.
    if record.branch.is_empty() || !saw_pending {
        return Err(unexpected());
    }
    Ok(record)
}

/// The pending-changes line is either the clean phrasing — `(clean)`,
/// possibly with further parentheticals — or a comma-separated
/// enumeration like `1 modified, 2 unknown (new branch head)`.
fn parse_pending(pending: &str, record: &mut StatusRecord) -> Result<(), ParseError> {
    if pending.starts_with("(clean)") {
        return Ok(());
    }

    // Trailing parentheticals ("(merge)", "(new branch head)") are not counts.
    let counts = match pending.find(" (") {
        Some(idx) => &pending[..idx],
        None => pending,
    };
    if counts.is_empty() {
        return Err(unexpected());
    }

    for item in counts.split(", ") {
        let (count, kind) = item.split_once(' ').ok_or_else(unexpected)?;
        let count: usize = count.parse().map_err(|_| unexpected())?;
        match kind {
            "modified" | "added" | "removed" | "renamed" | "copied" | "unresolved" => {
                record.changed += count;
            }
            // "deleted" means missing from disk but never `hg remove`d;
            // with no index to stage the deletion it reads to the user as
            // an unresolved, untracked-style condition. "unknown" is the
            // untracked kind proper.
            "deleted" | "unknown" => record.untracked += count,
            _ => return Err(unexpected()),
        }
    }
    Ok(())
}
