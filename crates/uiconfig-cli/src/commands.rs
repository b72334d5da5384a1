//! Main commands enum and the settings subcommands.

use std::path::PathBuf;

use clap::Subcommand;

use crate::collection_commands::CollectionCommand;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the storage adapter is reachable and healthy
    Status,

    /// Read or replace the solution theme
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },

    /// Read or replace the solution logo
    Logo {
        #[command(subcommand)]
        command: LogoCommand,
    },

    /// Read or replace a user's settings
    UserSettings {
        #[command(subcommand)]
        command: UserSettingsCommand,
    },

    /// Manage device groups
    DeviceGroups {
        #[command(subcommand)]
        command: CollectionCommand,
    },

    /// Manage profiles
    Profiles {
        #[command(subcommand)]
        command: CollectionCommand,
    },
}

/// Theme command variants.
#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Show the current theme (the default theme when none is stored)
    Get,
    /// Replace the theme with a JSON document
    Set {
        /// JSON file to read, or `-` for stdin
        input: String,
    },
}

/// Logo command variants.
#[derive(Subcommand, Debug)]
pub enum LogoCommand {
    /// Show the current logo (the default logo when none is stored)
    Get,
    /// Replace the logo; omitted parts are kept from the stored logo
    Set {
        /// Display name of the solution
        #[arg(long)]
        name: Option<String>,
        /// Image file to upload (stored base64-encoded)
        #[arg(long)]
        image_file: Option<PathBuf>,
        /// MIME type of the image (guessed from the file extension if omitted)
        #[arg(long = "type", requires = "image_file")]
        content_type: Option<String>,
    },
}

/// User settings command variants.
#[derive(Subcommand, Debug)]
pub enum UserSettingsCommand {
    /// Show a user's settings (empty when none are stored)
    Get {
        /// User setting id
        id: String,
    },
    /// Replace a user's settings with a JSON document
    Set {
        /// User setting id
        id: String,
        /// JSON file to read, or `-` for stdin
        input: String,
    },
}
