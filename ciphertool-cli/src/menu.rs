//! Interactive menu, shown when the CLI is run without arguments.

use crate::commands::{gost, morse, rot13};
use crate::utils::CmdResult;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::PathBuf;

const SCHEMES: &[&str] = &[
    "Morse bit codec",
    "GOST placeholder (NOT secure)",
    "ROT13 + XOR",
    "Quit",
];

const OPERATIONS: &[&str] = &[
    "Encode text",
    "Decode text (hex input)",
    "Encode file",
    "Decode file",
    "Back",
];

/// Run the menu loop until the user quits.
pub fn run() -> CmdResult {
    let theme = ColorfulTheme::default();

    loop {
        let scheme = Select::with_theme(&theme)
            .with_prompt("Choose a scheme")
            .items(SCHEMES)
            .default(0)
            .interact()?;
        if scheme == 3 {
            return Ok(());
        }

        let op = Select::with_theme(&theme)
            .with_prompt("Choose an operation")
            .items(OPERATIONS)
            .default(0)
            .interact()?;
        if op == 4 {
            continue;
        }

        // Keep the menu alive on per-operation errors (bad hex, missing
        // files); only report them.
        if let Err(e) = dispatch(&theme, scheme, op) {
            eprintln!("Error: {e}");
        }
    }
}

fn dispatch(theme: &ColorfulTheme, scheme: usize, op: usize) -> CmdResult {
    let encode = op % 2 == 0;
    let (text, input, output) = prompt_io(theme, op)?;

    match scheme {
        0 => {
            if encode {
                morse::cmd_encode(text, input.as_deref(), output.as_deref())
            } else {
                morse::cmd_decode(text, input.as_deref(), output.as_deref())
            }
        }
        1 => {
            let key: String = Input::with_theme(theme)
                .with_prompt("Key (64 hex characters)")
                .interact_text()?;
            if encode {
                let iv: String = Input::with_theme(theme)
                    .with_prompt("IV (16 hex characters, empty for random)")
                    .allow_empty(true)
                    .interact_text()?;
                let iv = if iv.trim().is_empty() {
                    None
                } else {
                    Some(iv)
                };
                gost::cmd_encrypt(text, input.as_deref(), output.as_deref(), &key, iv.as_deref())
            } else {
                let iv: String = Input::with_theme(theme)
                    .with_prompt("IV (16 hex characters)")
                    .interact_text()?;
                gost::cmd_decrypt(text, input.as_deref(), output.as_deref(), &key, &iv)
            }
        }
        _ => {
            if encode {
                rot13::cmd_encode(text, input.as_deref(), output.as_deref())
            } else {
                rot13::cmd_decode(text, input.as_deref(), output.as_deref())
            }
        }
    }
}

/// Gather text or file paths for the chosen operation.
#[allow(clippy::type_complexity)]
fn prompt_io(
    theme: &ColorfulTheme,
    op: usize,
) -> Result<(Option<String>, Option<PathBuf>, Option<PathBuf>), Box<dyn std::error::Error>> {
    if op < 2 {
        let prompt = if op == 0 { "Text" } else { "Hex data" };
        let text: String = Input::with_theme(theme)
            .with_prompt(prompt)
            .interact_text()?;
        Ok((Some(text), None, None))
    } else {
        let input: String = Input::with_theme(theme)
            .with_prompt("Input file")
            .interact_text()?;
        let output: String = Input::with_theme(theme)
            .with_prompt("Output file")
            .interact_text()?;
        Ok((None, Some(PathBuf::from(input)), Some(PathBuf::from(output))))
    }
}
