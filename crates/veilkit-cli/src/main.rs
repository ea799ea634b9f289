mod cli;
mod commands;

use clap::Parser;
use log::debug;
use thiserror::Error;

use crate::cli::CliArgs;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Veil(#[from] veilkit_core::VeilError),

    #[error(transparent)]
    Crypto(#[from] veilkit_crypto::CryptoError),

    #[error("Input is neither valid hex nor base64: {0}")]
    InvalidEncoding(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    debug!("{:?}", args.command);

    args.run()
}
