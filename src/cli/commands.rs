//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, PrintStyle};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::repl::Repl;
use crate::config::{global_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::ConsoleIo;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    if settings.trace.any() && cli.debug < 2 {
        output::warning("trace flags are set but only show with -dd");
    }
    let services = ServiceContainer::new(settings);

    match &cli.command {
        None => play(cli, &services),
        Some(Commands::Print { path, style }) => print_tree(&services, path, *style),
        Some(Commands::Config { command }) => config(&services, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

#[instrument(level = "debug", skip_all)]
fn play(cli: &Cli, services: &ServiceContainer) -> CliResult<()> {
    let settings = &services.settings;
    let mut console = ConsoleIo::stdio(settings.affirmative.clone(), settings.trace);
    let mut repl = Repl::new(services);

    if let Some(path) = cli.database.as_ref().or(settings.database.as_ref()) {
        repl.preload(path, &mut console)?;
    }
    repl.run(&mut console)
}

#[instrument(level = "debug", skip(services))]
fn print_tree(
    services: &ServiceContainer,
    path: &std::path::Path,
    style: PrintStyle,
) -> CliResult<()> {
    let tree = services.database.load(path)?;
    match style {
        PrintStyle::Indent => {
            output::header(&format!("{} ({} animals)", path.display(), tree.animals().len()));
            for line in tree.render() {
                output::info(&line);
            }
        }
        PrintStyle::Tree => output::info(&tree.to_termtree()),
        PrintStyle::Tokens => output::info(tree.to_token_file().trim_end()),
    }
    Ok(())
}

fn config(services: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&services.settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) if path.exists() => output::success(&path.display()),
            Some(path) => output::warning(&format!("{} (not created)", path.display())),
            None => {
                return Err(CliError::Usage(
                    "cannot determine config directory".to_string(),
                ))
            }
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
