//! The interactive filtering flow: meter, then months, then years.

use std::io::{BufRead, Write};

use crate::{
    filter_by_meter_id, filter_by_months, filter_by_years, Prompter, Readings, SessionError,
};

const METER_QUESTION: &str = "Would you like to filter by meter_id? [y/n]";
const METER_VALUE: &str = "Please enter the meter_id.";
const MONTH_QUESTION: &str = "Would you like to filter by month [y/n]?";
const MONTH_VALUE: &str = "Please enter the numbers of the months separated by commas.";
const YEAR_QUESTION: &str = "Would you like to filter by year? [y/n]";
const YEAR_VALUE: &str =
    "Please enter the numbers of the years separated by commas (data only exists for 2013).";

/// Ask which filters to apply and apply each one as soon as its value is known. Declined filters
/// leave the table unchanged. An invalid month or year list ends the session.
pub fn run_filter_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    mut readings: Readings,
) -> Result<Readings, SessionError> {
    if prompter.confirm(METER_QUESTION)? {
        let id = prompter.ask(METER_VALUE)?;
        readings = filter_by_meter_id(readings, &id);
        tracing::debug!(meter_id = %id, rows = readings.len(), "filtered by meter");
    }

    if prompter.confirm(MONTH_QUESTION)? {
        let months = prompter.ask(MONTH_VALUE)?;
        readings = filter_by_months(readings, &months)?;
        tracing::debug!(%months, rows = readings.len(), "filtered by month");
    }

    if prompter.confirm(YEAR_QUESTION)? {
        let years = prompter.ask(YEAR_VALUE)?;
        readings = filter_by_years(readings, &years)?;
        tracing::debug!(%years, rows = readings.len(), "filtered by year");
    }

    tracing::info!(rows = readings.len(), "filtered meter readings");
    Ok(readings)
}
