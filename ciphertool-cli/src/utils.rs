//! Shared input/output plumbing for the command handlers.
//!
//! Every scheme works whole-buffer: read all input up front, run the
//! transform, write all output. Text-mode binary results travel as hex.

use std::error::Error;
use std::fs;
use std::path::Path;

/// Result alias for command handlers.
pub type CmdResult = Result<(), Box<dyn Error>>;

/// Resolve raw input bytes from `--text` or `--input`.
pub fn read_raw(text: Option<String>, input: Option<&Path>) -> Result<Vec<u8>, Box<dyn Error>> {
    match (text, input) {
        (Some(text), None) => Ok(text.into_bytes()),
        (None, Some(path)) => Ok(fs::read(path)?),
        _ => Err("provide exactly one of --text or --input".into()),
    }
}

/// Resolve binary input from `--text` (as hex) or `--input` (raw file).
pub fn read_binary(text: Option<String>, input: Option<&Path>) -> Result<Vec<u8>, Box<dyn Error>> {
    match (text, input) {
        (Some(hex), None) => Ok(ciphertool_core::decode_hex(hex.trim())?),
        (None, Some(path)) => Ok(fs::read(path)?),
        _ => Err("provide exactly one of --text or --input".into()),
    }
}

/// Write binary output to a file, or print it as hex.
pub fn write_binary(data: &[u8], output: Option<&Path>) -> CmdResult {
    match output {
        Some(path) => {
            fs::write(path, data)?;
            println!("Wrote {} bytes to {}", data.len(), path.display());
        }
        None => println!("{}", ciphertool_core::encode_hex(data)),
    }
    Ok(())
}

/// Write recovered output to a file, or print it as (lossy) text.
pub fn write_text(data: &[u8], output: Option<&Path>) -> CmdResult {
    match output {
        Some(path) => {
            fs::write(path, data)?;
            println!("Wrote {} bytes to {}", data.len(), path.display());
        }
        None => println!("{}", String::from_utf8_lossy(data)),
    }
    Ok(())
}
