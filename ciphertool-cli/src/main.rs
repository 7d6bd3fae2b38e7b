//! ciphertool CLI - multi-scheme text/file encoder toolkit.
//!
//! Three independent transforms behind one interface: the binary Morse
//! framing codec, a GOST-shaped keyed XOR placeholder, and ROT13+XOR.
//! Run without arguments for an interactive menu.

mod commands;
mod menu;
mod utils;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ciphertool")]
#[command(author, version, about = "Multi-scheme text/file encoder toolkit")]
#[command(long_about = "
ciphertool encodes text or whole files with one of three schemes:
  morse  - binary Morse framing codec (self-describing bit stream)
  gost   - keyed XOR/CBC-shaped placeholder (NOT secure)
  rot13  - ROT13 substitution + fixed-key XOR

Run without arguments for an interactive menu.

Examples:
  ciphertool morse encode --text \"hello\"
  ciphertool morse decode --input message.morse --output message.txt
  ciphertool gost encrypt --text \"hello\" --key <64 hex chars>
  ciphertool gost decrypt --input secret.bin --output plain.txt --key <hex> --iv <16 hex chars>
  ciphertool rot13 encode --input notes.txt --output notes.enc
")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Binary Morse framing codec
    Morse {
        #[command(subcommand)]
        op: MorseOp,
    },

    /// Keyed XOR/CBC-shaped placeholder transform (NOT secure)
    Gost {
        #[command(subcommand)]
        op: GostOp,
    },

    /// ROT13 substitution + fixed-key XOR
    Rot13 {
        #[command(subcommand)]
        op: Rot13Op,
    },
}

#[derive(Subcommand)]
enum MorseOp {
    /// Encode text or a file into a framed Morse bit stream
    #[command(alias = "e")]
    Encode {
        /// Text to encode (mutually exclusive with --input)
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,

        /// Input file to encode
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (hex is printed to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode a framed Morse bit stream back to the original bytes
    #[command(alias = "d")]
    Decode {
        /// Hex representation of framed data (mutually exclusive with --input)
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,

        /// Input file to decode
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (text is printed to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum GostOp {
    /// Pad and encrypt with the placeholder keyed XOR transform
    #[command(alias = "e")]
    Encrypt {
        /// Text to encrypt (mutually exclusive with --input)
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,

        /// Input file to encrypt
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (hex is printed to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 256-bit key as 64 hex characters
        #[arg(short, long)]
        key: String,

        /// 64-bit IV as 16 hex characters (random if omitted)
        #[arg(long)]
        iv: Option<String>,
    },

    /// Decrypt and unpad with the placeholder keyed XOR transform
    #[command(alias = "d")]
    Decrypt {
        /// Hex ciphertext (mutually exclusive with --input)
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,

        /// Input file to decrypt
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (text is printed to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 256-bit key as 64 hex characters
        #[arg(short, long)]
        key: String,

        /// 64-bit IV as 16 hex characters
        #[arg(long)]
        iv: String,
    },
}

#[derive(Subcommand)]
enum Rot13Op {
    /// Apply ROT13 then XOR
    #[command(alias = "e")]
    Encode {
        /// Text to encode (mutually exclusive with --input)
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,

        /// Input file to encode
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (hex is printed to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Undo the XOR then ROT13
    #[command(alias = "d")]
    Decode {
        /// Hex representation of encoded data (mutually exclusive with --input)
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,

        /// Input file to decode
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (text is printed to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => menu::run(),
        Some(Commands::Morse { op }) => match op {
            MorseOp::Encode {
                text,
                input,
                output,
            } => commands::morse::cmd_encode(text, input.as_deref(), output.as_deref()),
            MorseOp::Decode {
                text,
                input,
                output,
            } => commands::morse::cmd_decode(text, input.as_deref(), output.as_deref()),
        },
        Some(Commands::Gost { op }) => match op {
            GostOp::Encrypt {
                text,
                input,
                output,
                key,
                iv,
            } => commands::gost::cmd_encrypt(
                text,
                input.as_deref(),
                output.as_deref(),
                &key,
                iv.as_deref(),
            ),
            GostOp::Decrypt {
                text,
                input,
                output,
                key,
                iv,
            } => commands::gost::cmd_decrypt(text, input.as_deref(), output.as_deref(), &key, &iv),
        },
        Some(Commands::Rot13 { op }) => match op {
            Rot13Op::Encode {
                text,
                input,
                output,
            } => commands::rot13::cmd_encode(text, input.as_deref(), output.as_deref()),
            Rot13Op::Decode {
                text,
                input,
                output,
            } => commands::rot13::cmd_decode(text, input.as_deref(), output.as_deref()),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
