//! Month-window extraction for the time-series drilldown.

use crate::dataset::DateSeries;
use crate::types::unit::Unit;
use chrono::{Datelike, NaiveDate};

/// One point of a month-windowed series; `None` renders as a gap in the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// A single location's series cut to the calendar month ending at a reference
/// date, values converted into a display unit.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSeries {
    reference: NaiveDate,
    unit: Unit,
    points: Vec<SeriesPoint>,
}

impl MonthSeries {
    /// Extracts the `[first of month, reference]` window, both bounds inclusive,
    /// ascending by date.
    ///
    /// A null inside the window keeps its slot: the chart draws a gap there
    /// rather than shifting the following points left.
    pub fn extract(series: &DateSeries, reference: NaiveDate, unit: Unit) -> MonthSeries {
        let (start, end) = month_window(reference);
        let points = series
            .window(start, end)
            .map(|(date, raw)| SeriesPoint {
                date,
                value: unit.convert(raw),
            })
            .collect();
        MonthSeries {
            reference,
            unit,
            points,
        }
    }

    /// A series with no points, for a location that does not carry the variable.
    pub fn empty(reference: NaiveDate, unit: Unit) -> MonthSeries {
        MonthSeries {
            reference,
            unit,
            points: Vec::new(),
        }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The inclusive window from the first day of `reference`'s month through
/// `reference` itself. Time of day plays no part; these are calendar dates.
pub fn month_window(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    // unwrap safe: day 1 exists in every valid month.
    let first = NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1).unwrap();
    (first, reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_runs_from_the_first_of_the_month() {
        assert_eq!(
            month_window(date(1980, 6, 23)),
            (date(1980, 6, 1), date(1980, 6, 23))
        );
    }

    #[test]
    fn window_on_the_first_is_a_single_day() {
        assert_eq!(
            month_window(date(1980, 6, 1)),
            (date(1980, 6, 1), date(1980, 6, 1))
        );
    }

    #[test]
    fn bounds_are_inclusive_and_prior_month_is_out() {
        let series: DateSeries = [
            (date(1980, 5, 31), Some(270.0)),
            (date(1980, 6, 1), Some(280.0)),
            (date(1980, 6, 23), Some(290.0)),
            (date(1980, 6, 24), Some(291.0)),
        ]
        .into_iter()
        .collect();

        let month = MonthSeries::extract(&series, date(1980, 6, 23), Unit::Kelvin);
        let dates: Vec<_> = month.points().iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![date(1980, 6, 1), date(1980, 6, 23)],
            "1980-05-31 and 1980-06-24 fall outside the window"
        );
    }

    #[test]
    fn nulls_keep_their_slot_in_the_window() {
        let series: DateSeries = [
            (date(1980, 6, 1), Some(280.0)),
            (date(1980, 6, 2), None),
            (date(1980, 6, 3), Some(282.0)),
        ]
        .into_iter()
        .collect();

        let month = MonthSeries::extract(&series, date(1980, 6, 23), Unit::Kelvin);
        assert_eq!(month.len(), 3);
        assert_eq!(month.points()[1].date, date(1980, 6, 2));
        assert_eq!(month.points()[1].value, None, "gap, not a dropped point");
        assert_eq!(month.points()[2].value, Some(282.0));
    }

    #[test]
    fn values_are_converted_into_the_display_unit() {
        let series: DateSeries = [(date(1980, 6, 10), Some(290.0))].into_iter().collect();
        let month = MonthSeries::extract(&series, date(1980, 6, 23), Unit::Celsius);
        let value = month.points()[0].value.unwrap();
        assert!((value - 16.85).abs() < 1e-9);
    }

    #[test]
    fn ordering_is_ascending_regardless_of_insertion() {
        let series: DateSeries = [
            (date(1980, 6, 20), Some(288.0)),
            (date(1980, 6, 5), Some(281.0)),
            (date(1980, 6, 12), Some(284.0)),
        ]
        .into_iter()
        .collect();

        let month = MonthSeries::extract(&series, date(1980, 6, 23), Unit::Kelvin);
        let dates: Vec<_> = month.points().iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(1980, 6, 5), date(1980, 6, 12), date(1980, 6, 20)]);
    }

    #[test]
    fn series_without_window_entries_is_empty() {
        let series: DateSeries = [(date(1979, 1, 1), Some(270.0))].into_iter().collect();
        let month = MonthSeries::extract(&series, date(1980, 6, 23), Unit::Kelvin);
        assert!(month.is_empty());
    }
}
