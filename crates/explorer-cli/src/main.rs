// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! polkadot-explorer: terminal front-end over the explorer core.
//!
//! Browse the ecosystem catalog, toggle layers, switch detail mode and walk the
//! guided tour, either one-shot (`run`) or interactively (`shell`).

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use explorer_app_core::config::ConfigService;
use explorer_app_core::config_port::ConfigPort;
use explorer_app_core::prefs::{ExplorerPrefs, PREFS_KEY};
use explorer_config_fs::FsConfigStore;
use explorer_core::{dataset, ViewMode};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod command;
mod render;
mod session;
mod ui_effects;

use command::{Command, HELP};
use session::Session;
use ui_effects::{TerminalEffects, UiEffectsRunner};

#[derive(Parser, Debug)]
#[command(name = "polkadot-explorer", author, version)]
#[command(about = "Explore the Polkadot relay chain, parachains and dApps from the terminal")]
struct Args {
    /// Start in this detail mode (overrides the saved preference)
    #[arg(long, global = true)]
    mode: Option<ViewMode>,
    /// Directory holding prefs.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    /// tracing filter directive (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log: Option<String>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List every node in the catalog
    Catalog {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the guided-tour script
    Tour,
    /// Apply commands in order and print the resulting frame
    Run {
        /// Commands, one per argument (e.g. "select moonbeam" "layer parachain")
        commands: Vec<String>,
        /// Emit the frame as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive session reading commands from stdin
    Shell,
    /// Write a default prefs.json
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn config_service(dir: Option<&PathBuf>) -> Result<ConfigService<FsConfigStore>> {
    let store = match dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new().context("failed to resolve config directory")?,
    };
    Ok(ConfigService::new(store))
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config_service(args.config_dir.as_ref())?;
    // Load before tracing exists; report only once the subscriber is up.
    let loaded = config.load::<ExplorerPrefs>(PREFS_KEY);
    let prefs = loaded.as_ref().ok().cloned().flatten().unwrap_or_default();
    init_tracing(args.log.as_deref().unwrap_or(&prefs.log_filter));
    match loaded {
        Ok(Some(_)) => debug!("loaded saved prefs"),
        Ok(None) => debug!("no saved prefs; using defaults"),
        Err(err) => warn!(?err, "ignoring unreadable prefs; using defaults"),
    }

    let catalog = dataset::polkadot().context("built-in catalog failed validation")?;
    let mut initial = prefs.initial_state();
    if let Some(mode) = args.mode {
        initial.view_mode = mode;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Cmd::Catalog { json } => {
            if json {
                serde_json::to_writer_pretty(&mut out, catalog.nodes())?;
                writeln!(out)?;
            } else {
                render::write_catalog(&mut out, &catalog)?;
            }
        }
        Cmd::Tour => render::write_tour(&mut out, &catalog)?,
        Cmd::Run { commands, json } => {
            let mut session = Session::new(catalog, initial, TerminalEffects::default());
            for line in &commands {
                match command::parse(line).with_context(|| format!("bad command {line:?}"))? {
                    Command::Event(ev) => session
                        .apply(ev)
                        .with_context(|| format!("command {line:?} rejected"))?,
                    Command::Quit => break,
                    Command::Show | Command::Help => {}
                }
            }
            debug!(state = ?session.state(), "final state");
            let frame = session.frame();
            if json {
                render::write_frame_json(&mut out, &frame)?;
            } else {
                render::write_frame(&mut out, &frame, session.effects().camera_target())?;
            }
        }
        Cmd::Shell => {
            let mut session = Session::new(catalog, initial, TerminalEffects::default());
            shell(&mut session, io::stdin().lock(), &mut out)?;
        }
        Cmd::InitConfig { force } => {
            let path = config.store().path_for(PREFS_KEY);
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            config
                .save_prefs(&ExplorerPrefs::default())
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(out, "wrote {}", path.display())?;
        }
    }
    Ok(())
}

/// Read-eval-draw loop. Bad commands are reported and the state is kept.
fn shell<R: UiEffectsRunner>(
    session: &mut Session<R>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    render::write_frame(out, &session.frame(), session.effects().camera_target())?;
    for line in input.lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::Show) => {
                render::write_frame(out, &session.frame(), session.effects().camera_target())?;
            }
            Ok(Command::Event(ev)) => match session.apply(ev) {
                Ok(()) => {
                    render::write_frame(out, &session.frame(), session.effects().camera_target())?;
                }
                Err(err) => {
                    warn!(%err, %line, "command rejected");
                    writeln!(out, "error: {err}")?;
                }
            },
            Err(err) => writeln!(out, "error: {err}")?,
        }
    }
    Ok(())
}
