//! Logo command handler.

use std::path::PathBuf;

use tracing::debug;
use uiconfig_core::Logo;

use crate::bootstrap::CliContext;
use crate::commands::LogoCommand;
use crate::error::CliError;
use crate::presentation::print_json;
use crate::utils::input::{encode_image_file, guess_content_type};

/// Execute a logo subcommand.
pub async fn execute(ctx: &CliContext, command: LogoCommand) -> Result<(), CliError> {
    match command {
        LogoCommand::Get => {
            let logo = ctx.facade().get_logo().await?;
            print_json(&logo)
        }
        LogoCommand::Set {
            name,
            image_file,
            content_type,
        } => {
            let logo = build_logo(name, image_file, content_type)?;
            let stored = ctx.facade().set_logo(logo).await?;
            print_json(&stored)
        }
    }
}

/// Assemble the logo update from the command-line flags.
///
/// With neither a name nor an image there is nothing to write.
fn build_logo(
    name: Option<String>,
    image_file: Option<PathBuf>,
    content_type: Option<String>,
) -> Result<Logo, CliError> {
    if name.is_none() && image_file.is_none() {
        return Err(CliError::Arguments(
            "logo set needs --name, --image-file, or both".to_string(),
        ));
    }

    let mut logo = Logo {
        name,
        ..Logo::default()
    };
    if let Some(path) = image_file {
        logo.image = Some(encode_image_file(&path)?);
        logo.content_type = content_type.or_else(|| guess_content_type(&path).map(str::to_string));
        debug!(path = %path.display(), content_type = ?logo.content_type, "Encoded logo image");
    }
    Ok(logo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use std::io::Write;

    fn image_file(suffix: &str, bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_build_logo_requires_something() {
        let err = build_logo(None, None, None).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_build_logo_guesses_type() {
        let file = image_file(".png", b"png");
        let logo = build_logo(None, Some(file.path().to_path_buf()), None).unwrap();
        assert_eq!(logo.image.as_deref(), Some("cG5n"));
        assert_eq!(logo.content_type.as_deref(), Some("image/png"));
        assert!(!logo.is_default);
    }

    #[test]
    fn test_build_logo_explicit_type_wins() {
        let file = image_file(".bin", b"svg");
        let logo = build_logo(
            Some("Contoso".to_string()),
            Some(file.path().to_path_buf()),
            Some("image/svg+xml".to_string()),
        )
        .unwrap();
        assert_eq!(logo.name.as_deref(), Some("Contoso"));
        assert_eq!(logo.content_type.as_deref(), Some("image/svg+xml"));
    }

    #[tokio::test]
    async fn test_rename_keeps_uploaded_image() {
        let (_, ctx) = context();
        let file = image_file(".gif", b"GIF89a");

        execute(
            &ctx,
            LogoCommand::Set {
                name: Some("First".to_string()),
                image_file: Some(file.path().to_path_buf()),
                content_type: None,
            },
        )
        .await
        .unwrap();
        execute(
            &ctx,
            LogoCommand::Set {
                name: Some("Second".to_string()),
                image_file: None,
                content_type: None,
            },
        )
        .await
        .unwrap();

        let logo = ctx.facade().get_logo().await.unwrap();
        assert_eq!(logo.name.as_deref(), Some("Second"));
        assert_eq!(logo.image.as_deref(), Some("R0lGODlh"));
        assert_eq!(logo.content_type.as_deref(), Some("image/gif"));
    }
}
