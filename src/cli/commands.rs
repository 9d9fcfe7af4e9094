//! Command dispatch

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{standard_definitions_text, standard_tree, DefinitionLoader, Session};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::{FileSystem, InfraError, RealFileSystem};

const REPL_COMMANDS: &[(&str, &str)] = &[
    ("<codes>", "decode space separated codes"),
    ("load <file>", "switch definition file"),
    ("tree", "show the lookup tree"),
    ("help", "show this help"),
    ("exit", "leave (as does the configured stop word)"),
];

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Decode { message }) => cmd_decode(cli, settings, message),
        Some(Commands::Tree) => cmd_tree(cli, settings),
        Some(Commands::Check) => cmd_check(cli, settings),
        Some(Commands::Table { output }) => cmd_table(output.as_deref()),
        Some(Commands::Config { command }) => cmd_config(command, settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Some(Commands::Repl) | None => {
            let mut session = open_session(cli, settings)?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_repl(&mut session, settings, stdin.lock(), stdout.lock())
        }
    }
}

/// Build a session from `--file`, the configured default file, or the
/// built-in table, in that order.
#[instrument(level = "debug", skip(settings))]
pub fn open_session(cli: &Cli, settings: &Settings) -> CliResult<Session> {
    let loader = DefinitionLoader::new(Arc::new(RealFileSystem));
    let path = match &cli.file {
        Some(file) => file.clone(),
        None if loader.exists(&settings.default_file) => settings.default_file.clone(),
        None => {
            output::warning(&format!(
                "{} not found, using built-in standard table",
                settings.default_file.display()
            ));
            return Ok(Session::with_tree(loader, standard_tree()?));
        }
    };
    let mut session = Session::new(loader);
    session.load(&path)?;
    debug!("session loaded from {}", path.display());
    Ok(session)
}

fn cmd_decode(cli: &Cli, settings: &Settings, message: &[String]) -> CliResult<()> {
    let session = open_session(cli, settings)?;
    let decoded = session.decode(&message.join(" "))?;
    output::action("Decoded Message", &decoded);
    Ok(())
}

fn cmd_tree(cli: &Cli, settings: &Settings) -> CliResult<()> {
    let session = open_session(cli, settings)?;
    output::info(&session.render());
    Ok(())
}

fn cmd_check(cli: &Cli, settings: &Settings) -> CliResult<()> {
    let session = open_session(cli, settings)?;
    let tree = session.tree();
    let source = session
        .loaded_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in table".to_string());
    output::success(&format!(
        "{}: {} bindings, depth {}, {} nodes",
        source,
        tree.len(),
        tree.depth(),
        tree.node_count()
    ));
    Ok(())
}

fn cmd_table(target: Option<&Path>) -> CliResult<()> {
    let text = standard_definitions_text();
    match target {
        Some(path) => {
            RealFileSystem
                .write(path, &text)
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::action("Written", &path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn cmd_config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => {
            output::header("Config files");
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unavailable)".to_string());
            output::detail(&format!("global: {}", global));
            output::detail(&format!(
                "local:  {}",
                local_config_path(Path::new(".")).display()
            ));
        }
    }
    Ok(())
}

/// Interactive loop: decode each line until the stop word or `exit`.
///
/// Announces the active tree first. Decode and load failures are reported and the loop continues.
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    settings: &Settings,
    input: R,
    mut out: W,
) -> CliResult<()> {
    let write_err = |e| CliError::from(InfraError::io("write output", e));
    writeln!(
        out,
        "Tree built successfully! ({} bindings)",
        session.tree().len()
    )
    .map_err(write_err)?;

    let mut lines = input.lines();
    loop {
        write!(out, "{} ", settings.prompt).map_err(write_err)?;
        out.flush().map_err(write_err)?;

        let line = match lines.next() {
            Some(line) => line.map_err(|e| InfraError::io("read input", e))?,
            None => break,
        };
        let line = line.trim_end_matches('\r');

        if line.eq_ignore_ascii_case(&settings.stop_word) || line.eq_ignore_ascii_case("exit") {
            break;
        }
        match line {
            "tree" => writeln!(out, "{}", session.render()).map_err(write_err)?,
            "help" => {
                let help = REPL_COMMANDS
                    .iter()
                    .map(|(cmd, what)| format!("  {:<12} {}", cmd, what))
                    .join("\n");
                writeln!(out, "{}", help).map_err(write_err)?;
            }
            _ => {
                if let Some(file) = line.strip_prefix("load ") {
                    match session.load(Path::new(file.trim())) {
                        Ok(count) => writeln!(out, "Tree built successfully! ({} bindings)", count)
                            .map_err(write_err)?,
                        Err(e) => output::error(&format!("Unable to build tree from file: {}", e)),
                    }
                } else {
                    match session.decode(line) {
                        Ok(decoded) => {
                            writeln!(out, "Decoded Message: {}", decoded).map_err(write_err)?
                        }
                        Err(e) => output::error(&e),
                    }
                }
            }
        }
    }
    Ok(())
}
