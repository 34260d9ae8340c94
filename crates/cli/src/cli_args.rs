//! Command-line argument parsing and dispatch.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate. The [`TopCommand`] enum is the whole dispatch table:
//! it is constructed statically at parse time and mapped to handlers by
//! a single `match` in the binary, so there is no runtime command
//! registration anywhere.

use clap::{Parser, Subcommand};

/// Command-line arguments for the gitfx binary.
///
/// With no subcommand the binary prints the welcome banner. Version
/// information is available through `-v` / `--version`.
#[derive(Parser, Debug)]
#[command(
    name = "gitfx",
    about = "gitfx - a friendlier front-end for git",
    version,
    disable_version_flag = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<TopCommand>,

    /// Print version information.
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,
}

/// The fixed table of subcommands.
#[derive(Subcommand, Debug)]
pub enum TopCommand {
    /// Configure your git identity (name and email) interactively.
    ///
    /// Scopes:
    ///   Global - affects all repositories for the current user
    ///   Local  - affects only the current repository
    ///   System - affects all users on the system (rarely used)
    #[command(verbatim_doc_comment)]
    Config,
}
