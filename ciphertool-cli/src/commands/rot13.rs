//! ROT13+XOR subcommand implementation.

use crate::utils::{CmdResult, read_binary, read_raw, write_binary, write_text};
use std::path::Path;

pub fn cmd_encode(text: Option<String>, input: Option<&Path>, output: Option<&Path>) -> CmdResult {
    let data = read_raw(text, input)?;
    let encoded = ciphertool_rot13::encode(&data);
    write_binary(&encoded, output)
}

pub fn cmd_decode(text: Option<String>, input: Option<&Path>, output: Option<&Path>) -> CmdResult {
    let encoded = read_binary(text, input)?;
    let recovered = ciphertool_rot13::decode(&encoded);
    write_text(&recovered, output)
}
