//! Profile command handler.

use tracing::info;
use uiconfig_core::ProfileData;

use crate::bootstrap::CliContext;
use crate::collection_commands::CollectionCommand;
use crate::error::CliError;
use crate::presentation::print_json;
use crate::utils::input::read_document;

/// Execute a profiles subcommand.
pub async fn execute(ctx: &CliContext, command: CollectionCommand) -> Result<(), CliError> {
    let facade = ctx.facade();
    match command {
        CollectionCommand::List => print_json(&facade.get_all_profiles().await?),
        CollectionCommand::Get { id } => print_json(&facade.get_profile(&id).await?),
        CollectionCommand::Create { input } => {
            let data: ProfileData = read_document(&input)?;
            let profile = facade.create_profile(&data).await?;
            info!(id = %profile.id, "Profile created");
            print_json(&profile)
        }
        CollectionCommand::Update { id, input, etag } => {
            let data: ProfileData = read_document(&input)?;
            let profile = facade.update_profile(&id, &data, &etag).await?;
            print_json(&profile)
        }
        CollectionCommand::Delete { id } => {
            facade.delete_profile(&id).await?;
            println!("Deleted profile '{id}'");
            Ok(())
        }
    }
}
