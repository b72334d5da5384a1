//! Subcommands shared by the store-keyed collections (device groups, profiles).

use clap::Subcommand;

/// Collection command variants.
#[derive(Subcommand, Debug)]
pub enum CollectionCommand {
    /// List every item
    List,
    /// Show one item
    Get {
        /// Item id
        id: String,
    },
    /// Create an item from a JSON document; the store assigns the id
    Create {
        /// JSON file to read, or `-` for stdin
        input: String,
    },
    /// Replace an item, provided it has not changed since `--etag`
    Update {
        /// Item id
        id: String,
        /// JSON file to read, or `-` for stdin
        input: String,
        /// ETag of the revision being replaced (`*` to overwrite unconditionally)
        #[arg(long)]
        etag: String,
    },
    /// Delete an item
    Delete {
        /// Item id
        id: String,
    },
}
