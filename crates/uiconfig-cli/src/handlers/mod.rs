//! Command handlers that delegate to the settings facade.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Read and decode CLI input (files, stdin, flags)
//!   2. Call facade methods
//!   3. Print the result for the terminal
//!
//! Handlers should NOT hold business rules; defaulting and merging live in
//! the facade.

pub mod device_groups;
pub mod logo;
pub mod profiles;
pub mod status;
pub mod theme;
pub mod user_settings;

use crate::bootstrap::CliContext;
use crate::commands::Commands;
use crate::error::CliError;

/// Route a parsed command to its handler.
pub async fn dispatch(ctx: &CliContext, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Status => status::execute(ctx).await,
        Commands::Theme { command } => theme::execute(ctx, command).await,
        Commands::Logo { command } => logo::execute(ctx, command).await,
        Commands::UserSettings { command } => user_settings::execute(ctx, command).await,
        Commands::DeviceGroups { command } => device_groups::execute(ctx, command).await,
        Commands::Profiles { command } => profiles::execute(ctx, command).await,
    }
}
