//! CLI interface for the voyage console.
//!
//! Each subcommand is non-interactive: arguments in, rendered tables and
//! notices out. `create` runs the whole creation workflow in one shot; the
//! reference lists are fetched first, so vessels and unit types can be
//! passed by backend id or by unique name.

use clap::{Args, Parser, Subcommand};

/// Terminal console for a voyage scheduling backend.
#[derive(Debug, Parser)]
#[command(name = "voyage-console", version)]
pub struct Cli {
    /// Base URL of the backend API. Falls back to `VOYAGE_API_BASE_URL`,
    /// then to `http://localhost:3000/api`.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds. Falls back to
    /// `VOYAGE_API_TIMEOUT_SECS`, then to 5.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the stored voyages with their permitted unit types.
    List,

    /// Validate a voyage draft locally and submit it.
    Create(CreateArgs),

    /// Delete one voyage by id.
    Delete {
        /// Backend id of the voyage, as shown by `list`.
        id: String,
    },

    /// List the selectable vessels.
    Vessels,

    /// List the selectable unit types.
    UnitTypes,
}

/// Arguments for `create`. Timestamps take `2024-01-01T10:00` style input,
/// seconds and an explicit UTC offset optional; zoneless input is read as
/// UTC.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Scheduled departure, e.g. `2024-01-01T10:00`.
    #[arg(long)]
    pub departure: String,

    /// Scheduled arrival; must lie strictly after the departure.
    #[arg(long)]
    pub arrival: String,

    /// Port of loading.
    #[arg(long)]
    pub loading_port: String,

    /// Port of discharge.
    #[arg(long)]
    pub discharge_port: String,

    /// Vessel, by backend id or unique name.
    #[arg(long)]
    pub vessel: String,

    /// Unit type, by backend id or unique name; repeat the flag at least
    /// five times.
    #[arg(long)]
    pub unit_type: Vec<String>,
}
