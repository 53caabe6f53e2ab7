//! Predicate filters over a [Readings] table.
//!
//! Each filter narrows the table independently of the others, so applying several of them yields
//! the intersection of their matches whatever the order.

use std::collections::BTreeSet;
use std::num::IntErrorKind;

use crate::{FilterError, Readings};

type FilterResult<T> = Result<T, FilterError>;

/// Parse a comma-separated list of integers such as `"2, 4,5"`. Integers too large for an `i64`
/// cannot match any reading and are left out of the set.
fn parse_list(list: &str) -> FilterResult<BTreeSet<i64>> {
    let mut values = BTreeSet::new();
    for token in list.split(',').map(str::trim) {
        match token.parse::<i64>() {
            Ok(value) => {
                values.insert(value);
            }
            Err(err)
                if matches!(
                    err.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) => {}
            Err(_) => return Err(FilterError::InvalidToken(token.to_string())),
        }
    }
    Ok(values)
}

/// Parse a list of month numbers. Numbers outside `1..=12` are accepted but match nothing.
pub fn parse_months(list: &str) -> FilterResult<BTreeSet<i64>> {
    parse_list(list)
}

/// Parse a list of calendar years.
pub fn parse_years(list: &str) -> FilterResult<BTreeSet<i64>> {
    parse_list(list)
}

/// Keep the readings of the meter whose id is exactly `id`.
pub fn filter_by_meter_id(readings: Readings, id: &str) -> Readings {
    readings.retain(|reading| reading.meter_id.as_str() == id)
}

/// Keep the readings taken during one of the months listed in `months`, e.g. `"2,4,5"`.
pub fn filter_by_months(readings: Readings, months: &str) -> FilterResult<Readings> {
    let months = parse_months(months)?;
    Ok(readings.retain(|reading| months.contains(&i64::from(reading.month()))))
}

/// Keep the readings taken during one of the years listed in `years`, e.g. `"2012, 2013"`.
pub fn filter_by_years(readings: Readings, years: &str) -> FilterResult<Readings> {
    let years = parse_years(years)?;
    Ok(readings.retain(|reading| years.contains(&i64::from(reading.year()))))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reading::fixtures::{check_readings, load};
    use expect_test::expect;

    fn six_months() -> Readings {
        load(inline_csv!(
            "meter_id, DateTime,         consumption",
            "1,        10/01/2013 00:00, 0.1",
            "2,        10/02/2013 00:00, 0.2",
            "1,        10/03/2013 00:00, 0.3",
            "2,        10/04/2013 00:00, 0.4",
            "1,        10/05/2013 00:00, 0.5",
            "2,        10/06/2013 00:00, 0.6",
        ))
    }

    fn mixed_years() -> Readings {
        load(inline_csv!(
            "meter_id, DateTime,         consumption",
            "1,        31/12/2012 23:30, 0.1",
            "2,        01/01/2013 00:00, 0.2",
            "1,        15/06/2013 12:00, 0.3",
            "1,        01/01/2014 00:00, 0.4",
        ))
    }

    #[test]
    fn parse_lists() {
        assert_eq!(parse_months("2,4,5"), Ok(BTreeSet::from([2, 4, 5])));
        assert_eq!(parse_years("2012, 2013"), Ok(BTreeSet::from([2012, 2013])));
        assert_eq!(
            parse_months("2,x"),
            Err(FilterError::InvalidToken("x".to_string()))
        );
        assert_eq!(
            parse_months("2,,4"),
            Err(FilterError::InvalidToken(String::new()))
        );
        assert_eq!(parse_months("-1"), Ok(BTreeSet::from([-1])));
        assert_eq!(
            parse_years("99999999999999999999"),
            Ok(BTreeSet::new())
        );
    }

    #[test]
    fn by_meter_id() {
        check_readings(
            &filter_by_meter_id(six_months(), "2"),
            expect![[r#"
                DateTime,meter_id,consumption
                2013-02-10 00:00:00,2,0.2
                2013-04-10 00:00:00,2,0.4
                2013-06-10 00:00:00,2,0.6
            "#]],
        );
        assert!(filter_by_meter_id(six_months(), "02").is_empty());
        assert!(filter_by_meter_id(six_months(), " 2").is_empty());
    }

    #[test]
    fn by_months() {
        check_readings(
            &filter_by_months(six_months(), "2,4,5").unwrap(),
            expect![[r#"
                DateTime,meter_id,consumption
                2013-02-10 00:00:00,2,0.2
                2013-04-10 00:00:00,2,0.4
                2013-05-10 00:00:00,1,0.5
            "#]],
        );
    }

    #[test]
    fn by_months_out_of_range_matches_nothing() {
        for months in ["13", "0", "-1", "4294967296", "99999999999999999999"] {
            assert!(filter_by_months(six_months(), months).unwrap().is_empty());
        }
        check_readings(
            &filter_by_months(six_months(), "1,-1").unwrap(),
            expect![[r#"
                DateTime,meter_id,consumption
                2013-01-10 00:00:00,1,0.1
            "#]],
        );
    }

    #[test]
    fn by_years_out_of_range_matches_nothing() {
        for years in ["-2013", "4294967296", "99999999999999999999"] {
            assert!(filter_by_years(mixed_years(), years).unwrap().is_empty());
        }
    }

    #[test]
    fn by_months_invalid_token() {
        assert_eq!(
            filter_by_months(six_months(), "feb"),
            Err(FilterError::InvalidToken("feb".to_string()))
        );
    }

    #[test]
    fn by_years() {
        check_readings(
            &filter_by_years(mixed_years(), "2013").unwrap(),
            expect![[r#"
                DateTime,meter_id,consumption
                2013-01-01 00:00:00,2,0.2
                2013-06-15 12:00:00,1,0.3
            "#]],
        );
        assert_eq!(
            filter_by_years(mixed_years(), "2012, 2014").unwrap().len(),
            2
        );
    }

    #[test]
    fn months_narrowing_is_idempotent() {
        let narrowed = filter_by_months(filter_by_months(six_months(), "2,4").unwrap(), "4");
        assert_eq!(narrowed, filter_by_months(six_months(), "4"));
    }

    #[test]
    fn meter_and_year_filters_commute() {
        let meter_then_year = filter_by_years(filter_by_meter_id(mixed_years(), "1"), "2013");
        let year_then_meter = filter_by_years(mixed_years(), "2013")
            .map(|readings| filter_by_meter_id(readings, "1"));
        assert_eq!(meter_then_year, year_then_meter);
        assert_eq!(meter_then_year.unwrap().len(), 1);
    }
}
