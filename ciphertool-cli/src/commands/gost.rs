//! GOST-placeholder subcommand implementation.

use crate::utils::{CmdResult, read_binary, read_raw, write_binary, write_text};
use ciphertool_core::{decode_hex, encode_hex};
use std::error::Error;
use std::path::Path;

fn parse_key(key: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let key = decode_hex(key.trim())?;
    if key.len() != ciphertool_gost::KEY_LEN {
        return Err(format!(
            "key must be {} hex characters ({} bytes)",
            ciphertool_gost::KEY_LEN * 2,
            ciphertool_gost::KEY_LEN
        )
        .into());
    }
    Ok(key)
}

pub fn cmd_encrypt(
    text: Option<String>,
    input: Option<&Path>,
    output: Option<&Path>,
    key: &str,
    iv: Option<&str>,
) -> CmdResult {
    let data = read_raw(text, input)?;
    let key = parse_key(key)?;

    let iv = match iv {
        Some(iv) => decode_hex(iv.trim())?,
        None => {
            let iv = ciphertool_gost::random_iv();
            println!("Generated IV (keep it for decryption): {}", encode_hex(&iv));
            iv.to_vec()
        }
    };

    let ciphertext = ciphertool_gost::encrypt(&data, &key, &iv)?;
    write_binary(&ciphertext, output)
}

pub fn cmd_decrypt(
    text: Option<String>,
    input: Option<&Path>,
    output: Option<&Path>,
    key: &str,
    iv: &str,
) -> CmdResult {
    let ciphertext = read_binary(text, input)?;
    let key = parse_key(key)?;
    let iv = decode_hex(iv.trim())?;

    let plaintext = ciphertool_gost::decrypt(&ciphertext, &key, &iv)?;
    write_text(&plaintext, output)
}
