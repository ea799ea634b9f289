use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::Args;
use veilkit_crypto::Key;

use crate::cli::{ask_for_key, ask_for_message};
use crate::{CliError, CliResult};

/// Encrypts a text message with AES-256-GCM, printed as hex or base64
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Key, 64 hex characters, asked for when omitted
    #[arg(short, long, value_name = "key")]
    pub key: Option<String>,

    /// Text to encrypt, asked for when omitted
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,

    /// Print base64 instead of hex
    #[arg(long)]
    pub base64: bool,
}

impl EncryptArgs {
    pub fn run(self) -> CliResult<()> {
        let key = match self.key {
            Some(key) => key,
            None => ask_for_key()?,
        };
        let key = Key::parse(key)?;
        let message = match self.message {
            Some(message) => message,
            None => ask_for_message()?,
        };

        let encrypted = veilkit_crypto::encrypt(message.as_bytes(), &key)?;
        if self.base64 {
            println!("{}", STANDARD.encode(encrypted));
        } else {
            println!("{}", hex::encode(encrypted));
        }

        Ok(())
    }
}

/// Decrypts a hex or base64 encoded message produced by `encrypt`
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Key, 64 hex characters, asked for when omitted
    #[arg(short, long, value_name = "key")]
    pub key: Option<String>,

    /// Encrypted message, asked for when omitted
    #[arg(short, long, value_name = "encrypted message")]
    pub message: Option<String>,

    /// The message is base64 instead of hex
    #[arg(long)]
    pub base64: bool,
}

impl DecryptArgs {
    pub fn run(self) -> CliResult<()> {
        let key = match self.key {
            Some(key) => key,
            None => ask_for_key()?,
        };
        let key = Key::parse(key)?;
        let message = match self.message {
            Some(message) => message,
            None => ask_for_message()?,
        };

        let data = decode(message.trim(), self.base64)?;
        println!("{}", veilkit_crypto::decrypt_to_string(&data, &key)?);

        Ok(())
    }
}

fn decode(message: &str, base64: bool) -> CliResult<Vec<u8>> {
    if base64 {
        STANDARD
            .decode(message)
            .map_err(|e| CliError::InvalidEncoding(e.to_string()))
    } else {
        hex::decode(message).map_err(|e| CliError::InvalidEncoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_and_base64_are_decoded() {
        assert_eq!(decode("00ff10", false).unwrap(), vec![0, 255, 16]);
        assert_eq!(decode("AP8Q", true).unwrap(), vec![0, 255, 16]);
    }

    #[test]
    fn broken_encodings_are_rejected() {
        assert!(matches!(decode("zz", false), Err(CliError::InvalidEncoding(_))));
        assert!(matches!(decode("***", true), Err(CliError::InvalidEncoding(_))));
    }
}
