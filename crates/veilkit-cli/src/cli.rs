use clap::{Args, Parser, Subcommand, ValueEnum};
use veilkit_core::{CodecOptions, DctCodecOptions, LsbCodecOptions, Terminator};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Capacity(capacity::CapacityArgs),
    Keygen(keygen::KeygenArgs),
    Encrypt(crypt::EncryptArgs),
    Decrypt(crypt::DecryptArgs),
    Seed(seed::SeedArgs),
}

impl CliArgs {
    pub fn run(self) -> CliResult<()> {
        match self.command {
            Commands::Hide(args) => args.run(),
            Commands::Unveil(args) => args.run(),
            Commands::UnveilRaw(args) => args.run(),
            Commands::Capacity(args) => args.run(),
            Commands::Keygen(args) => args.run(),
            Commands::Encrypt(args) => args.run(),
            Commands::Decrypt(args) => args.run(),
            Commands::Seed(args) => args.run(),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminatorArg {
    Zeros,
    Ones,
}

impl From<TerminatorArg> for Terminator {
    fn from(value: TerminatorArg) -> Self {
        match value {
            TerminatorArg::Zeros => Terminator::Zeros,
            TerminatorArg::Ones => Terminator::Ones,
        }
    }
}

/// Engine selection shared by the hiding and unveiling subcommands
#[derive(Args, Debug, Clone)]
pub struct CodecArgs {
    /// Hide in the DCT coefficients of the grayscale image instead of the least significant bits
    #[arg(long)]
    pub dct: bool,

    /// End of payload marker, defaults to `zeros` for LSB and `ones` for DCT
    #[arg(long, value_enum)]
    pub terminator: Option<TerminatorArg>,

    /// Experimental: image color channel step increment
    #[arg(long = "x-color-step-increment", default_value_t = 1)]
    pub color_step_increment: usize,

    /// Use the alpha channel of images too
    #[arg(long)]
    pub with_alpha: bool,
}

impl CodecArgs {
    pub fn options(&self) -> CodecOptions {
        let options = if self.dct {
            CodecOptions::Dct(DctCodecOptions::default())
        } else {
            CodecOptions::Lsb(LsbCodecOptions {
                color_channel_step_increment: self.color_step_increment,
                skip_alpha_channel: !self.with_alpha,
                ..LsbCodecOptions::default()
            })
        };

        match self.terminator {
            Some(terminator) => options.with_terminator(terminator.into()),
            None => options,
        }
    }
}

pub fn ask_for_key() -> CliResult<String> {
    Ok(dialoguer::Password::new()
        .with_prompt("Key (64 hex characters)")
        .interact()?)
}

pub fn ask_for_message() -> CliResult<String> {
    Ok(dialoguer::Password::new()
        .with_prompt("Message")
        .allow_empty_password(true)
        .interact()?)
}
