use clap::{Args, ValueEnum};

use crate::CliResult;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedType {
    Int,
    Float,
}

/// Prints a secure random number, usable as a keygen seed
#[derive(Args, Debug)]
pub struct SeedArgs {
    #[arg(short = 't', long = "type", value_enum, default_value_t = SeedType::Int)]
    pub seed_type: SeedType,

    /// Lower bound, inclusive
    #[arg(short, long, default_value_t = 14, allow_negative_numbers = true)]
    pub lower: i64,

    /// Upper bound, inclusive for integers
    #[arg(short, long, default_value_t = 100_000, allow_negative_numbers = true)]
    pub upper: i64,
}

impl SeedArgs {
    pub fn run(self) -> CliResult<()> {
        match self.seed_type {
            SeedType::Int => {
                let seed = veilkit_crypto::generate_secure_random_integer(self.lower, self.upper)?;
                println!("{seed}");
            }
            SeedType::Float => {
                let seed = veilkit_crypto::generate_secure_random_float(
                    self.lower as f64,
                    self.upper as f64,
                )?;
                println!("{seed}");
            }
        }

        Ok(())
    }
}
