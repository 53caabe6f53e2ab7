//! Monthly totals per meter, priced at a flat rate.

use std::collections::BTreeMap;

use fpdec::Decimal;

use crate::{config::FLAT_RATE, AggregateError, Cost, Kwh, MeterId, Readings};

static MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of a month given its number, `1` being January.
pub fn month_name(month: u32) -> Result<&'static str, AggregateError> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .ok_or(AggregateError::UnknownMonth(month))
}

/// Consumption and estimated cost for one meter over one calendar month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregatedPeriod {
    pub meter_id: MeterId,
    pub month: &'static str,
    /// Four-digit calendar year.
    pub year: String,
    pub total_consumption: Kwh,
    pub estimated_cost: Cost,
}

type AggregateResult<T> = Result<T, AggregateError>;

/// Bucket `readings` by meter and calendar month, priced at [FLAT_RATE].
pub fn aggregate(readings: &Readings) -> AggregateResult<Vec<AggregatedPeriod>> {
    aggregate_with_rate(readings, FLAT_RATE)
}

/// Bucket `readings` by `(meter_id, month, year)` and sum their consumption. Missing consumption
/// values contribute nothing to a bucket's total.
///
/// Buckets are ordered by meter id, then month number, then year.
pub fn aggregate_with_rate(
    readings: &Readings,
    rate: Decimal,
) -> AggregateResult<Vec<AggregatedPeriod>> {
    let mut buckets: BTreeMap<(&MeterId, u32, String), Kwh> = BTreeMap::new();
    for reading in readings {
        let key = (
            &reading.meter_id,
            reading.month(),
            reading.timestamp.format("%Y").to_string(),
        );
        *buckets.entry(key).or_default() += reading.consumption.unwrap_or(Kwh::ZERO);
    }

    tracing::debug!(buckets = buckets.len(), %rate, "aggregated readings");
    buckets
        .into_iter()
        .map(|((meter_id, month, year), total_consumption)| {
            Ok(AggregatedPeriod {
                meter_id: meter_id.clone(),
                month: month_name(month)?,
                year,
                total_consumption,
                estimated_cost: total_consumption.priced_at(rate),
            })
        })
        .collect()
}

/// Serialize aggregated periods to CSV. Raw consumption totals are left out.
pub fn dump_csv<W: std::io::Write>(
    periods: &[AggregatedPeriod],
    writer: &mut csv::Writer<W>,
) -> csv::Result<()> {
    writer.write_record(["meter_id", "Month", "Year", "estimated_cost"])?;
    for period in periods {
        writer.write_record([
            period.meter_id.as_str(),
            period.month,
            period.year.as_str(),
            period.estimated_cost.to_string().as_str(),
        ])?
    }
    Ok(())
}
