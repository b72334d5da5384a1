//! Status command handler.

use serde_json::json;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_json;

/// Execute the status command.
///
/// Prints the storage adapter's health and fails with `Unavailable` when
/// the service reports itself unhealthy.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let status = ctx.facade().storage_status().await?;
    print_json(&json!({"Healthy": status.healthy, "Message": status.message}))?;

    if !status.healthy {
        return Err(CliError::Unavailable(format!(
            "Storage adapter is unhealthy: {}",
            status.message
        )));
    }
    Ok(())
}
