//! Invocation of the git executable.
//!
//! Every interaction with version control goes through a subprocess;
//! this program never touches repository or config storage itself.

use std::process::{Command, Output};

use log::debug;

use crate::error::{Error, Result};
use crate::scope::Scope;

/// Name of the external executable everything is delegated to.
pub const GIT_PROGRAM: &str = "git";

/// Runs git with the given arguments, capturing stdout and stderr.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned (e.g. git is not
/// installed). A non-zero exit is not an error at this level; callers
/// inspect the returned [`Output`].
pub fn run_git(args: &[&str]) -> Result<Output> {
    debug!("Running `{GIT_PROGRAM} {}`", args.join(" "));

    Command::new(GIT_PROGRAM)
        .args(args)
        .output()
        .map_err(|original| Error::git_spawn(args, original))
}

/// The seam between the configuration flow and the git executable.
///
/// The flow only needs two answers from version control: whether the
/// current directory is inside a working tree, and whether a config
/// write succeeded. Tests substitute a recording fake.
pub trait ConfigSink {
    fn inside_work_tree(&self) -> bool;

    /// Applies `key = value` at the given scope.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be spawned or exits non-zero.
    /// The error carries git's trimmed stderr for the per-field report.
    fn set_config(&self, scope: Scope, key: &str, value: &str) -> Result<()>;
}

/// [`ConfigSink`] backed by the system git binary.
pub struct SystemGit;

impl ConfigSink for SystemGit {
    fn inside_work_tree(&self) -> bool {
        crate::repo::is_inside_work_tree()
    }

    fn set_config(&self, scope: Scope, key: &str, value: &str) -> Result<()> {
        let args = ["config", scope.flag(), key, value];
        let output = run_git(&args)?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(Error::git_exit(
            &args,
            output.status.code().unwrap_or(-1),
            stderr,
        ))
    }
}
