// file: src/cli/commands.rs
// version: 2.0.0
// guid: a8c0e2f4-6d7f-4a9b-b1d3-5f7b9d1f3a5c

//! Command implementations for the CLI

use super::args::{Cli, Commands, ConfigAction};
use crate::{
    config::{Config, ConfigLoader, ExecutionMode, OutputFormat},
    dispatch::{CommandGroup, Registry, Subcommand},
    executor::{build_executor, LocalExecutor},
    logging::logger::with_async_operation_span,
    DispatchError, Result,
};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// Run the parsed command line and return the process exit code
pub async fn dispatch(cli: Cli) -> Result<i32> {
    let config = effective_config(&cli)?;

    match cli.command {
        Commands::Run {
            group,
            subcommand,
            args,
        } => run_command(&config, &group, &subcommand, &args).await,
        Commands::Groups { group, json } => {
            groups_command(&config, group.as_deref(), json)?;
            Ok(0)
        }
        Commands::Config { action } => config_command(&config, action),
    }
}

/// Settings from files and environment, then global flags on top
pub fn effective_config(cli: &Cli) -> Result<Config> {
    let mut config = ConfigLoader::new().load(cli.config.as_deref())?;

    if cli.dry_run {
        config.execution.dry_run = true;
    }
    if cli.ssh {
        config.execution.mode = ExecutionMode::Ssh;
    }
    if let Some(output) = cli.output {
        config.hammer.output = Some(OutputFormat::from(output));
    }

    Ok(config)
}

/// Forward one subcommand and mirror hammer's output and exit status
pub async fn run_command(
    config: &Config,
    group: &str,
    subcommand: &str,
    args: &[String],
) -> Result<i32> {
    config.validate()?;

    let registry = Registry::with_defaults(build_executor(config)?);
    let operation = format!("{} {}", group, subcommand);

    let result = with_async_operation_span(&operation, || {
        registry.invoke(group, subcommand, args)
    })
    .await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(result.stdout.as_bytes())?;
    stdout.flush()?;
    let mut stderr = std::io::stderr().lock();
    stderr.write_all(result.stderr.as_bytes())?;
    stderr.flush()?;

    debug!("{} finished with {:?}", operation, result.status);
    // no exit code means hammer was killed by a signal
    Ok(result.status.unwrap_or(1))
}

#[derive(Serialize)]
struct GroupListing<'a> {
    base: &'a str,
    about: &'a str,
    subcommands: &'a [Subcommand],
}

/// Print registered groups and their subcommands
pub fn groups_command(config: &Config, only: Option<&str>, json: bool) -> Result<()> {
    // listing never executes anything
    let executor = Arc::new(LocalExecutor::from_config(config).with_dry_run(true));
    let registry = Registry::with_defaults(executor);

    let selected: Vec<&dyn CommandGroup> = match only {
        Some(name) => vec![registry
            .get(name)
            .ok_or_else(|| DispatchError::UnknownGroup(name.to_string()))?],
        None => registry.groups().collect(),
    };

    let mut out = std::io::stdout().lock();
    if json {
        let listing: Vec<GroupListing> = selected
            .iter()
            .map(|group| GroupListing {
                base: group.base(),
                about: group.about(),
                subcommands: group.subcommands(),
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        return Ok(());
    }

    for group in selected {
        writeln!(out, "{:<24} {}", group.base(), group.about())?;
        for sub in group.subcommands() {
            writeln!(out, "    {:<28} {}", sub.name, sub.about)?;
        }
    }
    Ok(())
}

/// Validate or show the effective configuration
pub fn config_command(config: &Config, action: ConfigAction) -> Result<i32> {
    match action {
        ConfigAction::Check => {
            config.validate()?;
            info!("Configuration is valid");
            println!("Configuration OK");
            Ok(0)
        }
        ConfigAction::Show => {
            let rendered = toml::to_string_pretty(&config.redacted())
                .map_err(|e| DispatchError::config(format!("Cannot render config: {}", e)))?;
            print!("{}", rendered);
            Ok(0)
        }
    }
}
