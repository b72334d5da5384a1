//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use uiconfig_storage::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Command-line interface for the UI configuration settings store.
///
/// Global options configure the storage connection; every option can also
/// come from the environment (or a `.env` file).
#[derive(Parser)]
#[command(name = "uiconfig")]
#[command(about = "Read and write UI configuration in the storage adapter")]
#[command(version)]
pub struct Cli {
    /// Base URL of the storage-adapter web service
    #[arg(
        long = "storage-url",
        env = "PCS_STORAGEADAPTER_WEBSERVICE_URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    pub storage_url: String,

    /// Map provider key injected into themes that lack one
    #[arg(long = "azure-maps-key", env = "PCS_AZUREMAPS_KEY", global = true)]
    pub azure_maps_key: Option<String>,

    /// Request timeout for the storage adapter, in seconds
    #[arg(
        long = "timeout-secs",
        env = "PCS_STORAGEADAPTER_TIMEOUT_SECS",
        default_value_t = 30,
        global = true
    )]
    pub timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
