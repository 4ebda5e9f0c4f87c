mod cli;
mod collect;
mod context;
mod error;
mod generate;
mod progress;
mod release;
mod tag;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use context::Settings;
use error::{CliError, Result};
use generate::GenArgs;
use notes::NotesConfig;
use std::path::Path;
use std::process;

fn run(cli: Cli) -> Result<()> {
    let config = NotesConfig::load(cli.config.as_deref(), Path::new("."))
        .map_err(|e| CliError::Notes(e).with_context("Failed to load notes configuration"))?;

    let settings = Settings {
        repo: cli.repo,
        from_tag: cli.from_tag,
        github_token: cli.github_access_token,
        config,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Gen {
            to_tag,
            file_name,
            text,
            markdown,
            html,
        } => generate::execute(
            &settings,
            GenArgs {
                to_tag,
                file_name,
                text,
                markdown,
                html,
            },
        ),
        Commands::Tag { new_tag } => tag::execute(&settings, &new_tag),
        Commands::Release { release_tag } => release::execute(&settings, &release_tag),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
