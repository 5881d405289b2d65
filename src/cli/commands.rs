//! Command dispatch

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{Outline, OutlineFormat, RenderOptions};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::config::Settings;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    debug!(?settings, "settings loaded");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &settings, &mut out)
}

/// Runs `cli` against `settings`, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> CliResult<()> {
    match &cli.command {
        Commands::Config => {
            write!(out, "{}", settings.to_toml()?)?;
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "nodetree", out);
        }
        command => {
            let outline = Outline::read(cli.file.as_deref(), OutlineFormat::from(settings))?;
            query(command, &outline, settings, out)?;
        }
    }
    Ok(())
}

/// Runs a tree query against an already loaded outline.
#[instrument(level = "debug", skip(outline, settings, out))]
pub fn query<W: Write>(
    command: &Commands,
    outline: &Outline,
    settings: &Settings,
    out: &mut W,
) -> CliResult<()> {
    match command {
        Commands::Show { at, keys_only } => {
            let mut options = RenderOptions::from(settings);
            options.show_values &= !keys_only;
            let rendered = match at {
                Some(path) => outline.render_at(outline.lookup(path)?, &options)?,
                None => outline.render(&options)?,
            };
            write!(out, "{}", rendered)?;
        }
        Commands::Find { path } => {
            let id = outline.lookup(path)?;
            for value in outline.tree().values(id).unwrap_or_default() {
                writeln!(out, "{}", value)?;
            }
        }
        Commands::Search { key, under } => {
            let id = outline.search(key, under.as_deref())?;
            writeln!(out, "{}", outline.path_string(id))?;
        }
        Commands::Paths => {
            for (id, node) in outline.tree() {
                writeln!(out, "{}\t{}", outline.path_string(id), node.value_count())?;
            }
        }
        Commands::Config | Commands::Completion { .. } => {
            return Err(CliError::InvalidArgs(
                "command does not operate on an outline".into(),
            ));
        }
    }
    Ok(())
}
