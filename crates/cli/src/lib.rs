//! Gitfx CLI Library
//!
//! This crate provides the command-line interface for gitfx, a
//! friendlier front-end for git. It handles subcommand dispatch, the
//! interactive scope menu and value prompts, and the identity
//! configuration flow.
//!
//! # Key Features
//!
//! - **Interactive Scope Selection**: Terminal menu for choosing the
//!   config scope (global, local, system)
//! - **Identity Flow**: Guided prompts for `user.name` and `user.email`
//!   with per-field success and failure reporting
//! - **Welcome Banner**: Colored banner and usage guidance when run
//!   with no subcommand
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and dispatch table
//! - [`prompt`]: Interactive terminal prompts (menu and line input)
//! - [`identity`]: The scope → precondition → prompt → apply flow
//! - [`banner`]: Welcome display
//!
//! # Examples
//!
//! ```bash
//! # Welcome banner
//! gitfx
//!
//! # Interactive identity configuration
//! gitfx config
//!
//! # Version string
//! gitfx -v
//! ```

pub mod banner;
pub mod cli_args;
pub mod identity;
pub mod prompt;
