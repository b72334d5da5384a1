//! User settings command handler.

use uiconfig_core::Document;

use crate::bootstrap::CliContext;
use crate::commands::UserSettingsCommand;
use crate::error::CliError;
use crate::presentation::print_json;
use crate::utils::input::read_document;

/// Execute a user-settings subcommand.
pub async fn execute(ctx: &CliContext, command: UserSettingsCommand) -> Result<(), CliError> {
    match command {
        UserSettingsCommand::Get { id } => {
            let setting = ctx.facade().get_user_setting(&id).await?;
            print_json(&setting)
        }
        UserSettingsCommand::Set { id, input } => {
            let setting: Document = read_document(&input)?;
            let stored = ctx.facade().set_user_setting(&id, &setting).await?;
            print_json(&stored)
        }
    }
}
