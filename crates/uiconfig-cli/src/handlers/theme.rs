//! Theme command handler.

use tracing::info;
use uiconfig_core::Document;

use crate::bootstrap::CliContext;
use crate::commands::ThemeCommand;
use crate::error::CliError;
use crate::presentation::print_json;
use crate::utils::input::read_document;

/// Execute a theme subcommand.
pub async fn execute(ctx: &CliContext, command: ThemeCommand) -> Result<(), CliError> {
    match command {
        ThemeCommand::Get => {
            let theme = ctx.facade().get_theme().await?;
            print_json(&theme)
        }
        ThemeCommand::Set { input } => {
            let theme: Document = read_document(&input)?;
            let stored = ctx.facade().set_theme(&theme).await?;
            info!("Theme updated");
            print_json(&stored)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{MAPS_KEY, context, json_file, path_of};
    use serde_json::json;
    use uiconfig_core::MAP_PROVIDER_KEY_FIELD;

    #[tokio::test]
    async fn test_set_then_get_theme() {
        let (_, ctx) = context();
        let file = json_file(r##"{"Name": "Night", "Background": "#000"}"##);

        execute(&ctx, ThemeCommand::Set { input: path_of(&file) })
            .await
            .unwrap();
        execute(&ctx, ThemeCommand::Get).await.unwrap();

        let theme = ctx.facade().get_theme().await.unwrap();
        assert_eq!(theme.get("Background"), Some(&json!("#000")));
        assert_eq!(theme.get(MAP_PROVIDER_KEY_FIELD), Some(&json!(MAPS_KEY)));
    }

    #[tokio::test]
    async fn test_set_theme_rejects_non_object() {
        let (_, ctx) = context();
        let file = json_file("\"just a string\"");

        let err = execute(&ctx, ThemeCommand::Set { input: path_of(&file) })
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Data(_)));
    }
}
