//! The time-indexed table of meter readings, and how to load it from CSV.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::{Kwh, LoadError, MeterId};

const METER_ID: &str = "meter_id";
const DATE_TIME: &str = "DateTime";
const CONSUMPTION: &str = "consumption";
const REQUIRED_COLUMNS: [&str; 3] = [METER_ID, DATE_TIME, CONSUMPTION];

/// Day-first layouts accepted for the `DateTime` column, tried in order.
const DAY_FIRST_FORMATS: [&str; 2] = ["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"];
const DAY_FIRST_DATE_FORMAT: &str = "%d/%m/%Y";

/// How the time index is rendered when dumping a table.
const INDEX_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single consumption measurement for a meter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reading {
    pub meter_id: MeterId,
    pub timestamp: NaiveDateTime,
    /// `None` when the source cell was empty.
    pub consumption: Option<Kwh>,
    /// Values of the non-required columns, in the order of [Readings::extra_columns].
    pub extra: Vec<String>,
}

impl Reading {
    /// Calendar month of the reading, in `1..=12`.
    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    /// Calendar year of the reading.
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }
}

/// Readings in their original row order, indexed by timestamp, along with any columns the
/// pipeline carries through without interpreting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Readings {
    extra_columns: Vec<String>,
    rows: Vec<Reading>,
}

#[derive(Debug, Deserialize)]
struct RawReading {
    meter_id: MeterId,
    #[serde(rename = "DateTime")]
    date_time: String,
    consumption: Option<Kwh>,
}

/// Parse a `DD/MM/YYYY` timestamp with an optional `HH:MM[:SS]` time component.
pub fn parse_day_first(value: &str) -> Option<NaiveDateTime> {
    DAY_FIRST_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DAY_FIRST_DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

impl Readings {
    /// The CSV reader configuration used to load readings: headers are required, and whitespace
    /// around fields is ignored.
    pub fn configured_csv_reader_builder() -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder.has_headers(true).trim(csv::Trim::All);
        builder
    }

    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading meter readings");
        Self::load(Self::configured_csv_reader_builder().from_path(path)?)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, LoadError> {
        Self::load(Self::configured_csv_reader_builder().from_reader(reader))
    }

    fn load<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self, LoadError> {
        let headers = reader.headers()?.clone();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|header| header == **column))
        {
            return Err(LoadError::MissingColumn(*missing));
        }

        let extra_indices: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(_, header)| !REQUIRED_COLUMNS.contains(header))
            .map(|(index, _)| index)
            .collect();
        let extra_columns = extra_indices
            .iter()
            .map(|&index| headers[index].to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let raw: RawReading = record.deserialize(Some(&headers))?;
            let timestamp = parse_day_first(&raw.date_time).ok_or_else(|| {
                LoadError::InvalidTimestamp {
                    line: record.position().map_or(0, |pos| pos.line()),
                    value: raw.date_time.clone(),
                }
            })?;
            rows.push(Reading {
                meter_id: raw.meter_id,
                timestamp,
                consumption: raw.consumption,
                extra: extra_indices
                    .iter()
                    .map(|&index| record[index].to_string())
                    .collect(),
            });
        }

        tracing::info!(rows = rows.len(), "loaded meter readings");
        Ok(Self {
            extra_columns,
            rows,
        })
    }

    /// Headers of the columns carried through untouched.
    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    pub fn rows(&self) -> &[Reading] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only the rows matching `predicate`, preserving their order.
    pub fn retain<F: FnMut(&Reading) -> bool>(mut self, predicate: F) -> Self {
        self.rows.retain(predicate);
        self
    }

    /// Serialize a [Readings] table to CSV, time index first.
    pub fn dump_csv<W: std::io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        let mut header = vec![DATE_TIME, METER_ID, CONSUMPTION];
        header.extend(self.extra_columns.iter().map(String::as_str));
        writer.write_record(&header)?;
        for reading in &self.rows {
            let mut record = vec![
                reading.timestamp.format(INDEX_FORMAT).to_string(),
                reading.meter_id.to_string(),
                reading
                    .consumption
                    .map(|kwh| kwh.to_string())
                    .unwrap_or_default(),
            ];
            record.extend(reading.extra.iter().cloned());
            writer.write_record(&record)?
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Readings {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
