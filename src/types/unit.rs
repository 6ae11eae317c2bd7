//! Display units for the raw kelvin-based source values.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A display unit for temperature values.
///
/// Source data stores raw kelvin. A unit is a pure display transform applied on the
/// way into a chart frame; the stored data is never mutated.
///
/// # Examples
///
/// ```
/// use thermomap::Unit;
///
/// assert_eq!(Unit::Celsius.convert(Some(290.0)), Some(290.0 - 273.15));
/// assert_eq!(Unit::Kelvin.convert(None), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// Raw source values, unchanged.
    #[default]
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl Unit {
    /// Converts a raw kelvin value into this unit.
    ///
    /// `None` marks a sensor or model gap and propagates untouched; no conversion
    /// is attempted on it.
    pub fn convert(self, raw_kelvin: Option<f64>) -> Option<f64> {
        raw_kelvin.map(|k| match self {
            Unit::Kelvin => k,
            Unit::Celsius => k - 273.15,
            Unit::Fahrenheit => (k - 273.15) * 9.0 / 5.0 + 32.0,
        })
    }

    /// Short symbol for axis and legend labels.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Kelvin => "K",
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Unit::Kelvin => "kelvin",
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
        }
    }
}

/// Formats a `Unit` using its lowercase name.
///
/// ```
/// use thermomap::Unit;
///
/// assert_eq!(Unit::Celsius.to_string(), "celsius");
/// ```
impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The unit string from a selector was not one of the three recognized units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized unit '{0}', expected kelvin, celsius or fahrenheit")]
pub struct ParseUnitError(pub String);

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kelvin" => Ok(Unit::Kelvin),
            "celsius" => Ok(Unit::Celsius),
            "fahrenheit" => Ok(Unit::Fahrenheit),
            other => Err(ParseUnitError(other.to_string())),
        }
    }
}
