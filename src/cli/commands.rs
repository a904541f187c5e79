//! Command dispatch: each subcommand loads its inputs, drives a cursor and prints

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{load_or_sample, stock, Chain, Pipeline, Stage};
use crate::cli::args::{Cli, Commands, ConfigCommands, SourceArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{drive_with, Component, Container, CursorExt, Storage};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "effective settings");
    match &cli.command {
        Some(Commands::Process { source, stages }) => process(&settings, source, stages),
        Some(Commands::List { source }) => list(&settings, source),
        Some(Commands::Config { command }) => config(&settings, command),
        Some(Commands::Completion { shell }) => completion(*shell),
        None => Err(CliError::Usage("no command given, see --help".to_string())),
    }
}

/// Load the inventory into the requested container.
fn open_source(
    settings: &Settings,
    source: &SourceArgs,
) -> CliResult<(Storage, Box<dyn Container<Component>>)> {
    let inventory = source.inventory.as_deref().or(settings.inventory.as_deref());
    let components = load_or_sample(inventory)?;
    let storage = source.storage.unwrap_or(settings.storage);
    let capacity = source.capacity.unwrap_or(settings.array_capacity);
    let container = stock(storage, capacity, components)?;
    Ok((storage, container))
}

fn describe(stages: &[Stage]) -> String {
    if stages.is_empty() {
        "plain".to_string()
    } else {
        stages.iter().join(" -> ")
    }
}

#[instrument(level = "debug", skip(settings))]
fn process(settings: &Settings, source: &SourceArgs, stages: &[Stage]) -> CliResult<()> {
    let (storage, container) = open_source(settings, source)?;
    let pipeline =
        Pipeline::new(stages.to_vec(), settings.min_price).with_log_prefix(&settings.log_prefix);

    output::header(&format!(
        "{} components in {} container, chain: {}",
        container.len(),
        storage,
        describe(pipeline.stages())
    ));

    let Chain {
        cursor,
        journals,
        counters,
    } = pipeline.assemble(container.cursor());
    let flush = || {
        for journal in &journals {
            for line in journal.take() {
                output::log_line(&line);
            }
        }
    };

    let tally = drive_with(cursor, |component| {
        flush();
        output::detail(component);
    });
    flush();

    output::action("Total", &tally);
    if let Some(average) = tally.average() {
        output::action("Average", &format!("${average:.2}"));
    }
    for steps in &counters {
        output::action("Counted", &steps.get());
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn list(settings: &Settings, source: &SourceArgs) -> CliResult<()> {
    let (storage, container) = open_source(settings, source)?;
    output::header(&format!("{} container", storage));
    for (position, component) in container.cursor().iter().enumerate() {
        output::info(&format!("{:>3}. {}", position + 1, component));
    }
    Ok(())
}

fn config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(CliError::Usage(
                    "no home directory to derive a config path from".to_string(),
                ))
            }
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
