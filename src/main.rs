#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod cli;
mod console;
mod http_handler;
mod keychain;
mod logger;
mod voyage_control;

use crate::cli::{Cli, Command};
use crate::console::{ConsoleError, ConsoleSurface};
use crate::http_handler::http_client::HTTPClient;
use crate::keychain::Keychain;
use clap::Parser;
use std::{env, process, time::Duration};

const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    let base_url_var = env::var("VOYAGE_API_BASE_URL");
    let base_url = args
        .api_url
        .as_deref()
        .unwrap_or_else(|| base_url_var.as_ref().map_or(DEFAULT_API_URL, |v| v.as_str()));
    let timeout = args
        .timeout_secs
        .or_else(|| env::var("VOYAGE_API_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()))
        .map_or(HTTPClient::DEFAULT_TIMEOUT, Duration::from_secs);

    info!("Voyage console targeting {base_url}");
    let surface = ConsoleSurface::new(Keychain::new(base_url, timeout));
    if let Err(err) = run_command(&surface, args.command).await {
        error!("{err}");
        process::exit(1);
    }
}

async fn run_command(surface: &ConsoleSurface, command: Command) -> Result<(), ConsoleError> {
    match command {
        Command::List => surface.run_list().await,
        Command::Create(args) => surface.run_create(args).await,
        Command::Delete { id } => surface.run_delete(&id).await,
        Command::Vessels => surface.run_vessels().await,
        Command::UnitTypes => surface.run_unit_types().await,
    }
}
