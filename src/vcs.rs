//! Backend detection, status invocation, and the normalized data model.
//!
//! One blocking subprocess per candidate backend, tried in a fixed
//! priority order; the backend's own status command doubles as the
//! ownership probe, so a render spawns at most one process per candidate
//! and exactly one for the owning backend. No network, no retries, no
//! state across renders.

pub mod git;
pub mod hg;
pub mod svn;

use std::fmt;
use std::path::Path;
use std::process::Command;
use strum::IntoEnumIterator;

/// The supported backends, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Vcs {
    Git,
    Hg,
    Svn,
}

/// Normalized working-tree status, one shape for all backends.
///
/// Fields a backend has no concept of stay zero/empty: `staged`, `ahead`
/// and `behind` are always 0 for hg and svn, and `branch` is always
/// empty for svn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub vcs: Vcs,
    pub branch: String,
    pub untracked: usize,
    pub changed: usize,
    pub staged: usize,
    pub ahead: usize,
    pub behind: usize,
}

impl StatusRecord {
    pub fn new(vcs: Vcs) -> Self {
        Self {
            vcs,
            branch: String::new(),
            untracked: 0,
            changed: 0,
            staged: 0,
            ahead: 0,
            behind: 0,
        }
    }

    /// A tree is clean iff every count is zero.
    pub fn is_clean(&self) -> bool {
        self.untracked == 0
            && self.changed == 0
            && self.staged == 0
            && self.ahead == 0
            && self.behind == 0
    }
}

/// A recognized backend produced output we could not classify, or a
/// distinguished condition with its own literal wording (svn's
/// metadata-format upgrade). The message is exactly the text shown in
/// the prompt; failure stays in-band rather than aborting the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub vcs: Vcs,
    pub message: String,
}

impl ParseError {
    pub fn new(vcs: Vcs, message: impl Into<String>) -> Self {
        Self {
            vcs,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// What the prompt shows for one render. Exactly one case is active;
/// the value is built fresh every render and discarded after formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptState {
    /// No backend owns the directory. Not an error; renders as nothing.
    NotInTree,
    Status(StatusRecord),
    Error(ParseError),
}

/// Outcome of running one backend's status command.
pub(crate) enum Probe {
    /// The backend does not own this directory. Try the next one.
    NotRepo,
    /// Raw status output, ready for the backend's parser.
    Output(String),
    /// The backend owns the directory but its answer is unusable.
    Broken(ParseError),
}

/// Determine the prompt state for `dir`.
///
/// Backends are tried in declaration order (git, hg, svn); the first one
/// that claims the directory wins and its output is parsed. A "not a
/// working copy" answer falls through to the next backend.
pub fn scan(dir: &Path) -> PromptState {
    for vcs in Vcs::iter() {
        let probe = match vcs {
            Vcs::Git => git::probe(dir),
            Vcs::Hg => hg::probe(dir),
            Vcs::Svn => svn::probe(dir),
        };
        match probe {
            Probe::NotRepo => continue,
            Probe::Output(output) => {
                let parsed = match vcs {
                    Vcs::Git => git::parse(&output),
                    Vcs::Hg => hg::parse(&output),
                    Vcs::Svn => svn::parse(&output),
                };
                return match parsed {
                    Ok(record) => PromptState::Status(record),
                    Err(err) => PromptState::Error(err),
                };
            }
            Probe::Broken(err) => return PromptState::Error(err),
        }
    }
    PromptState::NotInTree
}

/// Run one status subprocess and capture its exit status and output.
///
/// A missing binary reads as "not installed, so not a working copy":
/// the prompt must stay usable on machines without hg or svn.
pub(crate) fn run_status(program: &str, args: &[&str], dir: &Path) -> Option<CapturedOutput> {
    log::debug!("$ {} {}", program, args.join(" "));
    match Command::new(program).args(args).current_dir(dir).output() {
        Ok(output) => Some(CapturedOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }),
        Err(err) => {
            log::debug!("{program}: {err}");
            None
        }
    }
}

/// Exit status plus both output streams of one status command. The
/// backends classify this triple into a [`Probe`]; keeping it a plain
/// struct keeps that classification unit-testable without spawning.
pub(crate) struct CapturedOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_labels() {
        assert_eq!(Vcs::Git.to_string(), "git");
        assert_eq!(Vcs::Hg.to_string(), "hg");
        assert_eq!(Vcs::Svn.to_string(), "svn");
    }

    #[test]
    fn test_detection_priority_order() {
        let order: Vec<Vcs> = Vcs::iter().collect();
        assert_eq!(order, vec![Vcs::Git, Vcs::Hg, Vcs::Svn]);
    }

    #[test]
    fn test_new_record_is_clean() {
        let record = StatusRecord::new(Vcs::Git);
        assert!(record.is_clean());
        assert!(record.branch.is_empty());
    }

    #[test]
    fn test_any_count_dirties_the_record() {
        for field in 0..5 {
            let mut record = StatusRecord::new(Vcs::Git);
            match field {
                0 => record.untracked = 1,
                1 => record.changed = 1,
                2 => record.staged = 1,
                3 => record.ahead = 1,
                _ => record.behind = 1,
            }
            assert!(!record.is_clean());
        }
    }

    #[test]
    fn test_parse_error_displays_its_message() {
        let err = ParseError::new(Vcs::Svn, "'svn upgrade' needed");
        assert_eq!(err.to_string(), "'svn upgrade' needed");
    }
}
