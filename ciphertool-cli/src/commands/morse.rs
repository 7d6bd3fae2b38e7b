//! Morse subcommand implementation.

use crate::utils::{CmdResult, read_binary, read_raw, write_binary, write_text};
use std::path::Path;

pub fn cmd_encode(text: Option<String>, input: Option<&Path>, output: Option<&Path>) -> CmdResult {
    let data = read_raw(text, input)?;
    let framed = ciphertool_morse::encode(&data);
    write_binary(&framed, output)
}

pub fn cmd_decode(text: Option<String>, input: Option<&Path>, output: Option<&Path>) -> CmdResult {
    let framed = read_binary(text, input)?;
    let recovered = ciphertool_morse::decode(&framed)?;
    write_text(&recovered, output)
}
