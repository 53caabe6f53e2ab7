//! Run-wide settings.

use std::ffi::OsString;
use std::path::PathBuf;

use fpdec::{Dec, Decimal};

/// The dataset read when no input file is given.
pub const DEFAULT_INPUT_PATH: &str = "ee_coding_challenge_dataset.csv";

/// Price per kWh on the flat rate tariff.
pub const FLAT_RATE: Decimal = Dec!(0.15);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub input_path: PathBuf,
    pub flat_rate: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            flat_rate: FLAT_RATE,
        }
    }
}

impl Settings {
    /// Build the settings from the process arguments, `argv[0]` included. An optional first
    /// argument replaces [DEFAULT_INPUT_PATH].
    pub fn from_args<I: IntoIterator<Item = OsString>>(args: I) -> Self {
        let mut settings = Self::default();
        if let Some(path) = args.into_iter().nth(1) {
            settings.input_path = PathBuf::from(path);
        }
        settings
    }
}
