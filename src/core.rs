//! Core types used when reading and pricing meter consumption.

use fpdec::{Dec, Decimal};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// Meters are identified by an opaque string. Numeric-looking ids are *not* normalized: "07" and
/// "7" are different meters.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MeterId(pub String);

impl MeterId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MeterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for MeterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Consumption in kilowatt-hours, kept as an exact decimal so that monthly sums do not drift.
#[serde_as]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Kwh(#[serde_as(as = "DisplayFromStr")] pub Decimal);

impl Kwh {
    pub const ZERO: Self = Self(Dec!(0));

    /// Readings at or above this value are measurement errors.
    pub const PLAUSIBLE_MAX: Self = Self(Dec!(3));

    /// Whether this reading lies strictly between zero and [Kwh::PLAUSIBLE_MAX].
    pub fn is_plausible(&self) -> bool {
        Self::ZERO < *self && *self < Self::PLAUSIBLE_MAX
    }

    /// The cost of this much energy at a flat per-kWh `rate`.
    pub fn priced_at(self, rate: Decimal) -> Cost {
        Cost(self.0 * rate)
    }
}

impl std::fmt::Display for Kwh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::ops::Add<Kwh> for Kwh {
    type Output = Self;

    fn add(self, rhs: Kwh) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign<Kwh> for Kwh {
    fn add_assign(&mut self, rhs: Kwh) {
        *self = *self + rhs;
    }
}

/// An estimated cost, in whatever currency the tariff rate is expressed in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cost(pub Decimal);

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plausible_bounds_are_exclusive() {
        assert!(!Kwh::ZERO.is_plausible());
        assert!(!Kwh::PLAUSIBLE_MAX.is_plausible());
        assert!(!Kwh(-Dec!(1.0)).is_plausible());
        assert!(Kwh(Dec!(0.001)).is_plausible());
        assert!(Kwh(Dec!(2.999)).is_plausible());
    }

    #[test]
    fn addition_is_exact() {
        let mut total = Kwh::ZERO;
        for kwh in [Dec!(0.1), Dec!(0.2), Dec!(0.3)] {
            total += Kwh(kwh);
        }
        assert_eq!(total, Kwh(Dec!(0.6)));
    }

    #[test]
    fn priced_at_flat_rate() {
        assert_eq!(Kwh(Dec!(1.5)).priced_at(Dec!(0.15)), Cost(Dec!(0.225)));
    }

    #[test]
    fn meter_ids_compare_as_strings() {
        assert_ne!(MeterId::from("07"), MeterId::from("7"));
        assert_eq!(MeterId::from("7").to_string(), "7");
    }
}
