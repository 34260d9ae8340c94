//! The interactive identity-configuration flow.
//!
//! Orchestrates scope selection, the working-tree precondition, value
//! collection and the per-field `git config` writes. Every git failure
//! is converted to a printed message at the call site; no path through
//! this flow returns an error for a failed field, so the process exits
//! 0 on cancellation, skipped fields and failed writes alike.

use log::{debug, warn};

use gitfx_core::error::Result;
use gitfx_core::git::ConfigSink;
use gitfx_core::scope::Scope;

use crate::prompt::Prompter;

/// Config key for the user's name.
pub const NAME_KEY: &str = "user.name";
/// Config key for the user's email address.
pub const EMAIL_KEY: &str = "user.email";

/// Runs the whole flow: scope, precondition, prompts, apply, summary.
///
/// # Errors
///
/// Returns an error only if the prompter itself fails (terminal I/O);
/// that is treated by the caller as cancellation of the run.
pub fn run<G: ConfigSink, P: Prompter>(git: &G, prompter: &mut P) -> Result<()> {
    println!("🔧 gitfx config mode — set your git identity");

    let Some(scope) = prompter.select_scope()? else {
        println!("❌ Configuration cancelled.");
        return Ok(());
    };

    debug!("Selected scope: {scope}");

    // Early check: local config cannot apply outside a repository, so
    // bail before asking for any values
    if scope == Scope::Local && !git.inside_work_tree() {
        println!("❌ You are not inside a git repository. Local configuration requires an initialized repository.");
        println!("💡 Tip: run `git init` first if you want to use local config here.");
        return Ok(());
    }

    let name = prompter.prompt_value("Username (user.name)", "")?;
    let email = prompter.prompt_value("Email (user.email)", "")?;

    // The terminal prompter already trims, but the flow does not rely
    // on that: whitespace-only answers are skips regardless of source
    let name = name.trim();
    let email = email.trim();

    if name.is_empty() && email.is_empty() {
        println!("⚠️  No values entered. Git config was not changed.");
        return Ok(());
    }

    let name_set = apply_field(git, scope, NAME_KEY, name);
    let email_set = apply_field(git, scope, EMAIL_KEY, email);

    if name_set || email_set {
        println!("✅ Git identity updated using {} scope.", scope.label());
        println!("🔍 You can verify with: git config {} --list", scope.flag());
    }

    Ok(())
}

/// Applies one field, reporting the outcome. Returns true only when
/// the value was actually written. A failure here never blocks the
/// sibling field.
fn apply_field<G: ConfigSink>(git: &G, scope: Scope, key: &str, value: &str) -> bool {
    if value.is_empty() {
        println!("⚠️  Skipped setting {key}");
        return false;
    }

    match git.set_config(scope, key, value) {
        Ok(()) => {
            println!("✅ Set {key} = {value}");
            true
        }
        Err(e) => {
            warn!("Setting {key} failed: {e}");
            println!("❌ Failed to set {key}: {e}");
            false
        }
    }
}
