use thiserror::Error;

use meter_usage::{clean, config::Settings, observability, run_filter_session};
use meter_usage::{LoadError, Prompter, Readings, SessionError};

/// Any kind of error in the pipeline CSV loading -> interactive filtering -> table output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not load readings: {0}")]
    Load(#[from] LoadError),
    #[error("filtering aborted: {0}")]
    Session(#[from] SessionError),
    #[error("error during CSV output: {0}")]
    CsvError(#[from] csv::Error),
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> Result<(), Error> {
    observability::init_tracing();

    let settings = Settings::from_args(std::env::args_os());
    let readings = clean(Readings::from_path(&settings.input_path)?);

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
    let filtered = run_filter_session(&mut prompter, readings)?;

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    filtered.dump_csv(&mut writer)?;
    writer.flush()?;

    Ok(())
}
