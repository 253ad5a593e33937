//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::EntryManager;
use crate::application::{ApplicationError, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{LoadPolicy, TreeNodeConvert};
use crate::infrastructure::di::ServiceContainer;
use crate::util::path::PathExt;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `outline --help`".to_string(),
        ));
    };

    match command {
        Commands::Completion { shell } => {
            completion(*shell);
            return Ok(());
        }
        Commands::Config { command } => return config_command(command),
        _ => {}
    }

    let mut settings = Settings::load()?;
    if let Some(dir) = &cli.data_dir {
        settings.data_dir = dir.clone();
    }
    let container = ServiceContainer::new(settings);
    debug!("data dir: {}", container.data_dir().display());

    match command {
        Commands::Init => init(&container),
        Commands::List => list(&container),
        Commands::Show { title, pretty } => show(&container, title.as_deref(), *pretty),
        Commands::Add { path } => add(&container, path),
        Commands::Check => check(&container),
        Commands::Config { .. } | Commands::Completion { .. } => Ok(()),
    }
}

fn loaded_manager(container: &ServiceContainer) -> CliResult<EntryManager> {
    let mut manager = container.entry_manager();
    manager.load()?;
    Ok(manager)
}

#[instrument(skip(container))]
fn init(container: &ServiceContainer) -> CliResult<()> {
    let mut manager = container.entry_manager();
    let report = manager.load_with(LoadPolicy::BestEffort)?;
    if report.created {
        output::action("Created", &manager.data_path().display());
    } else {
        output::detail(&format!(
            "{} already exists ({} entries)",
            manager.data_path().display(),
            manager.len()
        ));
    }
    Ok(())
}

#[instrument(skip(container))]
fn list(container: &ServiceContainer) -> CliResult<()> {
    let manager = loaded_manager(container)?;
    if manager.is_empty() {
        output::warning(&format!("no entries in {}", manager.data_path().display()));
    }
    for entry in manager.entries() {
        output::info(entry);
    }
    Ok(())
}

#[instrument(skip(container))]
fn show(container: &ServiceContainer, title: Option<&str>, pretty: bool) -> CliResult<()> {
    let manager = loaded_manager(container)?;
    let entries = match title {
        Some(title) => vec![manager.require(title)?],
        None => manager.entries().iter().collect(),
    };

    for entry in entries {
        if pretty {
            output::info(&entry.to_tree_string());
        } else {
            entry.print_tree(0).with_context("write to stdout")?;
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn add(container: &ServiceContainer, path: &[String]) -> CliResult<()> {
    let (root_title, rest) = path
        .split_first()
        .ok_or_else(|| CliError::InvalidArgs("entry path is empty".to_string()))?;

    let mut manager = loaded_manager(container)?;
    let entry = manager.get_or_add(root_title);
    let mut current = entry.root();
    for title in rest {
        current = match entry.find_child(current, title) {
            Some(existing) => existing,
            None => entry
                .add_child(current, title.as_str())
                .map_err(ApplicationError::from)?,
        };
    }

    manager.save()?;
    output::action("Added", &path.join(" > "));
    Ok(())
}

#[instrument(skip(container))]
fn check(container: &ServiceContainer) -> CliResult<()> {
    let mut manager = container.entry_manager();
    let report = manager.load_with(LoadPolicy::BestEffort)?;

    for file in &report.loaded {
        output::success_detail(&file.stem_lossy());
    }
    for (file, reason) in &report.skipped {
        output::failure(&format!("{}: {}", file.display(), reason));
    }

    if report.skipped.is_empty() {
        output::success(&format!("{} entry files ok", report.loaded.len()));
        Ok(())
    } else {
        Err(CliError::Data(format!(
            "{} of {} entry files failed to load",
            report.skipped.len(),
            report.loaded.len() + report.skipped.len()
        )))
    }
}

fn config_command(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => return Err(CliError::Usage("no config directory available".to_string())),
        },
        ConfigCommands::Init { force } => {
            let path = global_config_path()
                .ok_or_else(|| CliError::Usage("no config directory available".to_string()))?;
            if path.exists() && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force)",
                    path.display()
                )));
            }
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir).with_path_context("create config directory", dir)?;
            }
            std::fs::write(&path, Settings::template())
                .with_path_context("write config file", &path)?;
            output::action("Created", &path.display());
        }
    }
    Ok(())
}

fn completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
