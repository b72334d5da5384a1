//! Output formatting.
//!
//! Results go to stdout as pretty-printed JSON so they can be piped into
//! other tools; diagnostics go to stderr through `tracing`.

use serde::Serialize;

use crate::error::CliError;

/// Render a value as pretty-printed JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::Protocol(e.to_string()))
}

/// Print a value to stdout as pretty-printed JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", render_json(value)?);
    Ok(())
}
