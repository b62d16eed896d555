pub mod seed;

#[cfg(feature = "cli")]
use crate::utils::error::{ClinicError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{
    parse_time_of_day, validate_non_empty_string, validate_range, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "clinic-queries")]
#[command(about = "Runs the service and feedback-request queries over a seed file")]
pub struct CliConfig {
    /// Path to the TOML seed file
    #[arg(long, default_value = "fixtures/seed.toml")]
    pub seed: String,

    /// Month (1-12) for the exact-time request lookup
    #[arg(long, default_value = "1")]
    pub month: u32,

    /// Time of day (HH:MM) for the exact-time request lookup
    #[arg(long, default_value = "09:15")]
    pub time: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("seed", &self.seed)?;
        validate_range("month", self.month, 1, 12)?;
        parse_time_of_day("time", &self.time)
            .map_err(|_| {
                ClinicError::config(format!("time must be a valid HH:MM, got '{}'", self.time))
            })?;
        Ok(())
    }
}
