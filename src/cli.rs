//! Command-line front-end: replay actions through a scoped store.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use viewstate::config::{Config, OutputFormat};
use viewstate::view::{ViewAction, ViewReducer, ViewState};
use viewstate::{get_dispatch, get_state, init_store_scope};

#[derive(Debug, Parser)]
#[command(
    name = "viewstate",
    version,
    about = "Replay view-state actions through a scoped store"
)]
pub struct Cli {
    /// Config file (default: <config dir>/viewstate/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (overrides output.format from config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the state after every dispatched action
    #[arg(long)]
    pub watch: bool,

    /// Actions to dispatch in order: set-count=N, set-text=S,
    /// set-color=red|orange|yellow, toggle-good
    #[arg(value_name = "ACTION")]
    pub actions: Vec<String>,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    viewstate::logging::init_tracing(&config.logging);

    // Decode everything before touching the store so a bad action
    // dispatches nothing.
    let actions = cli
        .actions
        .iter()
        .map(|raw| raw.parse::<ViewAction>())
        .collect::<Result<Vec<_>, _>>()?;

    let format = cli.format.unwrap_or(config.output.format);
    let watch = cli.watch || config.output.watch;
    tracing::debug!(actions = actions.len(), ?format, watch, "replaying actions");

    init_store_scope::<ViewReducer, _>(|scope| -> Result<()> {
        let dispatch = get_dispatch(scope)?;

        let _watcher = if watch {
            print_state(&get_state(scope)?, format)?;
            Some(scope.store()?.subscribe(move |state| {
                if let Err(e) = print_state(state, format) {
                    tracing::error!("failed to render state: {}", e);
                }
            }))
        } else {
            None
        };

        for action in actions {
            dispatch.dispatch(action);
        }

        if !watch {
            print_state(&get_state(scope)?, format)?;
        }
        Ok(())
    })
}

fn print_state(state: &ViewState, format: OutputFormat) -> Result<()> {
    println!("{}", render(state, format)?);
    Ok(())
}

fn render(state: &ViewState, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(state.to_string()),
        OutputFormat::Json => serde_json::to_string(state).context("failed to serialize state"),
    }
}
