use std::process::ExitCode;

use clap::Parser;

use gitfx_core::error::Result;
use gitfx_core::git::SystemGit;

mod banner;
mod cli_args;
mod identity;
mod prompt;

use cli_args::{Args, TopCommand};
use prompt::TerminalPrompter;

fn execute() -> Result<()> {
    let args = Args::parse();

    match args.command {
        None => banner::print_welcome(),
        Some(TopCommand::Config) => identity::run(&SystemGit, &mut TerminalPrompter),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
