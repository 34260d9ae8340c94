//! Gitfx Core Library
//!
//! This crate provides the core functionality for gitfx, a friendlier
//! command-line front-end for git. It knows how to invoke the `git`
//! executable, probe whether the current directory is inside a working
//! tree, and map configuration scopes to their git flags.
//!
//! # Key Features
//!
//! - **Scope Mapping**: Deterministic mapping between config scopes and
//!   git's `--global` / `--local` / `--system` flags
//! - **Command Runner**: Invoke git with captured output and typed errors
//! - **Repository Probe**: Boolean check for being inside a working tree
//! - **Error Handling**: Error types for all failure modes
//!
//! # Examples
//!
//! Applying a configuration value through the system git binary:
//!
//! ```no_run
//! use gitfx_core::git::{ConfigSink, SystemGit};
//! use gitfx_core::scope::Scope;
//!
//! SystemGit.set_config(Scope::Global, "user.name", "Ada Lovelace")?;
//! # Ok::<(), gitfx_core::error::Error>(())
//! ```

pub mod error;
pub mod git;
pub mod repo;
pub mod scope;
