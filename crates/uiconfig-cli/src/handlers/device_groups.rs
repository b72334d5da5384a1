//! Device group command handler.

use tracing::info;
use uiconfig_core::DeviceGroupData;

use crate::bootstrap::CliContext;
use crate::collection_commands::CollectionCommand;
use crate::error::CliError;
use crate::presentation::print_json;
use crate::utils::input::read_document;

/// Execute a device-groups subcommand.
pub async fn execute(ctx: &CliContext, command: CollectionCommand) -> Result<(), CliError> {
    let facade = ctx.facade();
    match command {
        CollectionCommand::List => print_json(&facade.get_all_device_groups().await?),
        CollectionCommand::Get { id } => print_json(&facade.get_device_group(&id).await?),
        CollectionCommand::Create { input } => {
            let data: DeviceGroupData = read_document(&input)?;
            let group = facade.create_device_group(&data).await?;
            info!(id = %group.id, "Device group created");
            print_json(&group)
        }
        CollectionCommand::Update { id, input, etag } => {
            let data: DeviceGroupData = read_document(&input)?;
            let group = facade.update_device_group(&id, &data, &etag).await?;
            print_json(&group)
        }
        CollectionCommand::Delete { id } => {
            facade.delete_device_group(&id).await?;
            println!("Deleted device group '{id}'");
            Ok(())
        }
    }
}
