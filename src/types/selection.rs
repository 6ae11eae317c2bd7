//! The user's current (date, variable, unit) choice, as an explicit value.

use crate::dataset::VariableId;
use crate::types::unit::Unit;
use bon::Builder;
use chrono::NaiveDate;

/// An immutable selection passed into projection and extraction.
///
/// The interaction layer owns the current selection and rebuilds it on every
/// selector change; the computation functions only ever read the value they are
/// handed. A selection cannot exist without a date and a variable, so "no date
/// picked yet" is a state of the interaction layer, not of this crate.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use thermomap::{Selection, Unit};
///
/// let selection = Selection::builder()
///     .date(NaiveDate::from_ymd_opt(1980, 6, 23).unwrap())
///     .variable("ta")
///     .unit(Unit::Celsius)
///     .build();
/// assert_eq!(selection.axis_label(), "Temperature (°C)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct Selection {
    /// The date to project the map for, and the upper bound of the series window.
    pub date: NaiveDate,
    #[builder(into)]
    pub variable: VariableId,
    /// Display unit; defaults to raw kelvin.
    #[builder(default)]
    pub unit: Unit,
}

impl Selection {
    /// Axis/legend label for charts of this selection, e.g. `Temperature (°C)`.
    pub fn axis_label(&self) -> String {
        format!("{} ({})", self.variable.display_name(), self.unit.symbol())
    }
}
