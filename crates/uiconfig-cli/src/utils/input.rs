//! Reading JSON documents and image files given on the command line.

use std::io::{self, Read};
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Source name that means "read from stdin".
pub const STDIN_SOURCE: &str = "-";

/// Read the text of `source`: a file path, or stdin for `-`.
pub fn read_source(source: &str) -> Result<String, CliError> {
    if source == STDIN_SOURCE {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(source).map_err(|e| CliError::Io(format!("{source}: {e}")))
}

/// Parse `text` as the JSON document expected by a command.
pub fn parse_document<T: DeserializeOwned>(text: &str) -> Result<T, CliError> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a JSON document from a file or stdin.
pub fn read_document<T: DeserializeOwned>(source: &str) -> Result<T, CliError> {
    parse_document(&read_source(source)?)
}

/// Read an image file and return it base64-encoded.
pub fn encode_image_file(path: &Path) -> Result<String, CliError> {
    let bytes =
        std::fs::read(path).map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    Ok(STANDARD.encode(bytes))
}

/// Guess an image MIME type from the file extension.
pub fn guess_content_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}
