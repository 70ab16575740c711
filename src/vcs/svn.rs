//! `svn status` probe and parser.
//!
//! One status line per affected path, classified by the leading item
//! column alone; the secondary property column is ignored. Subversion
//! has no index and no branch concept here, so `staged`, `ahead`,
//! `behind` stay zero and `branch` stays empty.

use std::path::Path;

use super::{CapturedOutput, ParseError, Probe, StatusRecord, Vcs, run_status};

const STATUS_ARGS: &[&str] = &["status", "--non-interactive"];

const UNEXPECTED: &str = "unexpected svn status output";

/// Literal message for the working-copy-format condition; distinct from
/// the generic parse error because the user can act on it directly.
pub const UPGRADE_NEEDED: &str = "'svn upgrade' needed";

/// Item codes a client may emit in the first column (untracked `?` is
/// handled separately).
const ITEM_CODES: &str = "ACDIMRX!~";

fn unexpected() -> ParseError {
    ParseError::new(Vcs::Svn, UNEXPECTED)
}

pub(crate) fn probe(dir: &Path) -> Probe {
    let Some(output) = run_status("svn", STATUS_ARGS, dir) else {
        return Probe::NotRepo;
    };
    classify(&output)
}

fn classify(output: &CapturedOutput) -> Probe {
    // The upgrade condition must be recognized before anything else: it
    // arrives as a failure, but has its own actionable wording.
    if output.stderr.contains("E155036") || output.stderr.contains("'svn upgrade'") {
        return Probe::Broken(ParseError::new(Vcs::Svn, UPGRADE_NEEDED));
    }
    // Depending on client version the warning may come with exit 0 or 1.
    if output.stderr.contains("is not a working copy") || output.stderr.contains("W155007") {
        return Probe::NotRepo;
    }
    if output.success {
        Probe::Output(output.stdout.clone())
    } else {
        Probe::Broken(unexpected())
    }
}

/// Reduce status output to a status record.
///
/// A rename arrives as two independent lines (an add and a delete) and
/// counts as two entries; unlike git and hg, no de-duplication applies.
pub fn parse(output: &str) -> Result<StatusRecord, ParseError> {
    let mut record = StatusRecord::new(Vcs::Svn);

    for line in output.lines() {
        let Some(code) = line.chars().next() else {
            continue;
        };
        match code {
            '?' => record.untracked += 1,
            // Blank item column: a property-only change, or one of the
            // indented `> moved to ...` detail lines newer clients put
            // under a move's add/delete pair. Neither carries a countable
            // path of its own.
            ' ' => {}
            c if ITEM_CODES.contains(c) => record.changed += 1,
            _ => return Err(unexpected()),
        }
    }
    Ok(record)
}
