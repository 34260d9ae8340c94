//! Repository probe.

use crate::git::run_git;

/// Returns true if the current working directory is inside a git
/// working tree.
///
/// Invokes `git rev-parse --is-inside-work-tree` and requires both a
/// successful exit and a trimmed stdout of exactly `"true"`. Any
/// failure (git missing, not a repository) degrades silently to false;
/// no error reaches the caller.
#[must_use]
pub fn is_inside_work_tree() -> bool {
    match run_git(&["rev-parse", "--is-inside-work-tree"]) {
        Ok(output) => {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout).trim() == "true"
        }
        Err(_) => false,
    }
}
