use thiserror::Error;

use meter_usage::{aggregate, aggregate_with_rate, clean, config::Settings, observability};
use meter_usage::{AggregateError, LoadError, Readings};

/// Any kind of error in the pipeline CSV loading -> cleaning -> aggregation -> table output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not load readings: {0}")]
    Load(#[from] LoadError),
    #[error("could not aggregate readings: {0}")]
    Aggregate(#[from] AggregateError),
    #[error("error during CSV output: {0}")]
    CsvError(#[from] csv::Error),
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> Result<(), Error> {
    observability::init_tracing();

    let settings = Settings::from_args(std::env::args_os());
    let readings = clean(Readings::from_path(&settings.input_path)?);
    let periods = aggregate_with_rate(&readings, settings.flat_rate)?;

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    aggregate::dump_csv(&periods, &mut writer)?;
    writer.flush()?;

    Ok(())
}
