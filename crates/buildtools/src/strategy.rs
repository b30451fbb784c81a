//! The algorithms available for computing the build and revision numbers of a version.

#[cfg(test)]
#[path = "strategy_test.rs"]
mod strategy_test;

use std::str::FromStr;

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The algorithm used to compute the build number (third component) of a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum BuildStrategy {
    /// Keeps the previous build number.
    Fixed,
    /// Increments the previous build number by one.
    Increment,
    /// Years since the starting date (modulo 7), followed by the month and day: `YMMdd`.
    YearMonthDay,
    /// Months since the starting date, followed by the day of the month: `MMdd`.
    MonthDay,
    /// Years since the starting date, followed by the day of the year: `Yddd`.
    BuildDay,
}

/// The algorithm used to compute the revision number (fourth component) of a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum RevisionStrategy {
    /// Keeps the previous revision number.
    Fixed,
    /// Increments the previous revision number by one.
    Increment,
    /// Increments the previous revision number, or resets it to zero when the build number
    /// changed.
    BuildIncrement,
    /// The current UTC time as `HHmm`.
    HourMinute,
    /// Seconds since UTC midnight, divided by ten.
    DaySecond,
    /// The fraction of the UTC day that elapsed, scaled to `[0, 32767)`.
    DayFraction,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid {kind}. Expected one of: {expected}.")]
pub struct StrategyParseError {
    /// The name of the strategy enum that failed to parse.
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

macro_rules! impl_strategy_parsing {
    ($strategy:ident) => {
        impl FromStr for $strategy {
            type Err = StrategyParseError;

            /// Parses a strategy by its name, ignoring case.
            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                $strategy::iter()
                    .find(|strategy| <&'static str>::from(*strategy).eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| StrategyParseError {
                        kind: stringify!($strategy),
                        value: value.to_owned(),
                        expected: $strategy::iter()
                            .map(|strategy| strategy.to_string())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }

        impl Serialize for $strategy {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.into())
            }
        }

        impl<'de> Deserialize<'de> for $strategy {
            fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
                let raw_str: String = Deserialize::deserialize(de)?;
                raw_str.parse().map_err(D::Error::custom)
            }
        }
    };
}

impl_strategy_parsing!(BuildStrategy);
impl_strategy_parsing!(RevisionStrategy);
