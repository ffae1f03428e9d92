use anyhow::Result;
use clap::{Parser, Subcommand};

use cipherpad::cli;

#[derive(Parser)]
#[command(
    name = "cipherpad",
    version,
    about = "Password-based text encryption with self-contained base64 envelopes",
    long_about = "cipherpad encrypts text records under a password and a per-record \
                  salt, producing a single base64 envelope that carries its own IV. \
                  Keep the salt next to the ciphertext: decryption needs the exact \
                  salt used at encryption time."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text into a base64 envelope
    #[command(alias = "enc")]
    Encrypt {
        /// Text to encrypt
        text: String,

        /// Base64 salt for key derivation
        #[arg(short, long)]
        salt: String,

        /// Password; prompts interactively when omitted
        #[arg(short, long, env = "CIPHERPAD_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Decrypt a base64 envelope back to text
    #[command(alias = "dec")]
    Decrypt {
        /// Base64 envelope produced by `encrypt`
        ciphertext: String,

        /// Base64 salt used when the record was encrypted
        #[arg(short, long)]
        salt: String,

        /// Password; prompts interactively when omitted
        #[arg(short, long, env = "CIPHERPAD_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Generate a random base64 salt to store alongside a record
    #[command(alias = "salt")]
    GenSalt {
        /// Salt length in bytes
        #[arg(short, long, default_value_t = 16)]
        bytes: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt {
            text,
            salt,
            password,
        } => cli::handle_encrypt(&text, &salt, password),
        Commands::Decrypt {
            ciphertext,
            salt,
            password,
        } => cli::handle_decrypt(&ciphertext, &salt, password),
        Commands::GenSalt { bytes } => cli::handle_gen_salt(bytes),
    }
}
