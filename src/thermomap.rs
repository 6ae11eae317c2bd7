//! Main entry point for turning a loaded temperature dataset into chart frames.

use crate::dataset::{Dataset, DatasetLoader, LocationId, VariableId};
use crate::error::ThermomapError;
use crate::series::MonthSeries;
use crate::snapshot::Snapshot;
use crate::types::selection::Selection;
use std::path::Path;

/// Owns the session's one immutable [`Dataset`] and derives snapshots and month
/// series from it.
///
/// The dataset is loaded once at startup; everything after that is synchronous
/// recomputation driven by user events. There is no shared mutable state: the
/// interaction layer owns the current [`Selection`] and passes it in by
/// reference.
///
/// # Examples
///
/// ```no_run
/// # use thermomap::{GeoScatterFrame, Selection, Thermomap, ThermomapError, Unit};
/// # use chrono::NaiveDate;
/// # async fn run() -> Result<(), ThermomapError> {
/// let map = Thermomap::from_path("data.json").await?;
///
/// let selection = Selection::builder()
///     .date(NaiveDate::from_ymd_opt(1980, 6, 23).unwrap())
///     .variable("ta")
///     .unit(Unit::Celsius)
///     .build();
///
/// let snapshot = map.project(&selection);
/// let frame = GeoScatterFrame::from_snapshot(&snapshot, &selection);
/// println!("{} markers on the map", frame.len());
/// # Ok(())
/// # }
/// ```
pub struct Thermomap {
    dataset: Dataset,
}

impl Thermomap {
    /// Downloads and validates a dataset document from `url`.
    ///
    /// This is the session's single fallible setup step. On failure the caller
    /// logs the error and stays inert; there is no retry.
    ///
    /// # Errors
    ///
    /// [`ThermomapError::Dataset`] on network, HTTP, parse or validation
    /// failure.
    pub async fn from_url(url: &str) -> Result<Thermomap, ThermomapError> {
        let dataset = DatasetLoader::new().load_url(url).await?;
        Ok(Thermomap { dataset })
    }

    /// Reads and validates a dataset document from disk.
    ///
    /// # Errors
    ///
    /// [`ThermomapError::Dataset`] on read, parse or validation failure.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Thermomap, ThermomapError> {
        let dataset = DatasetLoader::new().load_path(path.as_ref()).await?;
        Ok(Thermomap { dataset })
    }

    /// Wraps an already-validated dataset.
    pub fn from_dataset(dataset: Dataset) -> Thermomap {
        Thermomap { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Variable ids present anywhere in the dataset, for driving a selector.
    pub fn variable_ids(&self) -> Vec<VariableId> {
        self.dataset.variable_ids()
    }

    /// Builds the per-location snapshot for `selection`.
    ///
    /// Locations without a value on the selected date are left out; an empty
    /// snapshot is a valid result and renders as an empty map.
    pub fn project(&self, selection: &Selection) -> Snapshot<'_> {
        Snapshot::project(&self.dataset, selection)
    }

    /// The month-window series for one location, for the click drilldown.
    ///
    /// A location that does not carry the selected variable yields an empty
    /// series rather than an error.
    ///
    /// # Errors
    ///
    /// [`ThermomapError::UnknownLocation`] if `id` does not index into the
    /// dataset.
    pub fn month_series(
        &self,
        selection: &Selection,
        id: LocationId,
    ) -> Result<MonthSeries, ThermomapError> {
        let location = self
            .dataset
            .location(id)
            .ok_or(ThermomapError::UnknownLocation(id))?;
        Ok(location
            .series(&selection.variable)
            .map(|series| MonthSeries::extract(series, selection.date, selection.unit))
            .unwrap_or_else(|| MonthSeries::empty(selection.date, selection.unit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DateSeries, Location};
    use crate::frames::LineSeriesFrame;
    use crate::types::unit::Unit;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(1980, 6, d).unwrap()
    }

    fn test_map() -> Thermomap {
        let series: DateSeries = [
            (date(1), Some(280.0)),
            (date(12), None),
            (date(23), Some(290.0)),
        ]
        .into_iter()
        .collect();
        let dataset = Dataset::new(vec![
            Location::new(
                52.52,
                13.40,
                [(VariableId::from("ta"), series)].into_iter().collect(),
            ),
            Location::new(48.85, 2.35, HashMap::new()),
        ])
        .unwrap();
        Thermomap::from_dataset(dataset)
    }

    fn celsius_selection() -> Selection {
        Selection::builder()
            .date(date(23))
            .variable("ta")
            .unit(Unit::Celsius)
            .build()
    }

    #[test]
    fn click_drilldown_round_trip() {
        let map = test_map();
        let selection = celsius_selection();

        let snapshot = map.project(&selection);
        assert_eq!(snapshot.len(), 1);

        // The id handed out through the frame comes back from the click.
        let clicked = snapshot.records()[0].id;
        let series = map.month_series(&selection, clicked).unwrap();
        assert_eq!(series.len(), 3, "the mid-month gap is retained");

        let frame = LineSeriesFrame::from_series(&series, &selection);
        assert_eq!(frame.values[1], None);
    }

    #[test]
    fn unknown_location_is_an_error() {
        let map = test_map();
        let err = map
            .month_series(&celsius_selection(), LocationId(99))
            .unwrap_err();
        assert!(matches!(err, ThermomapError::UnknownLocation(LocationId(99))));
    }

    #[test]
    fn location_without_the_variable_gets_an_empty_series() {
        let map = test_map();
        let series = map
            .month_series(&celsius_selection(), LocationId(1))
            .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn variable_ids_drive_the_selector() {
        let map = test_map();
        assert_eq!(map.variable_ids(), vec![VariableId::from("ta")]);
    }
}
