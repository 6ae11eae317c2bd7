//! Projection of one (date, variable, unit) selection over the dataset.

mod locate;

pub use locate::RecordLocator;

use crate::dataset::{Dataset, DateSeries, LocationId};
use crate::types::selection::Selection;
use crate::types::value_range::ValueRange;

/// One location's scalar for the selected date, variable and unit.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotRecord<'d> {
    pub id: LocationId,
    pub lat: f64,
    pub lon: f64,
    /// Value already converted into the selection's unit.
    pub value: f64,
    series: &'d DateSeries,
}

impl<'d> SnapshotRecord<'d> {
    /// The full raw series behind this record.
    ///
    /// Retained so a click on the marker can drill into the time series without
    /// another dataset lookup.
    pub fn series(&self) -> &'d DateSeries {
        self.series
    }
}

/// Per-location scalars for one selection, filtered to locations that actually
/// have a value on the selected date.
///
/// Transient: rebuilt on every selection change, discarded after rendering.
/// Recomputation is cheap at the expected dataset sizes, so nothing is cached.
pub struct Snapshot<'d> {
    records: Vec<SnapshotRecord<'d>>,
}

impl<'d> Snapshot<'d> {
    /// Projects `selection` over `dataset`.
    ///
    /// A location that misses the variable, misses the date key, or stores a null
    /// for it contributes no record. An empty result is a valid snapshot and
    /// renders as an empty map.
    pub fn project(dataset: &'d Dataset, selection: &Selection) -> Snapshot<'d> {
        let records = dataset
            .locations()
            .iter()
            .enumerate()
            .filter_map(|(index, location)| {
                let series = location.series(&selection.variable)?;
                let value = selection.unit.convert(series.scalar_on(selection.date))?;
                Some(SnapshotRecord {
                    id: LocationId(index),
                    lat: location.lat,
                    lon: location.lon,
                    value,
                    series,
                })
            })
            .collect();
        Snapshot { records }
    }

    pub fn records(&self) -> &[SnapshotRecord<'d>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact lookup by the stable id the frames hand out.
    pub fn record(&self, id: LocationId) -> Option<&SnapshotRecord<'d>> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Closed color-scale domain over the record values; `None` when empty, in
    /// which case rendering skips the color domain entirely.
    pub fn value_range(&self) -> Option<ValueRange> {
        ValueRange::over(self.records.iter().map(|record| record.value))
    }

    /// Spatial lookup helper for click positions reported as raw coordinates.
    pub fn locator(&self) -> RecordLocator {
        RecordLocator::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DateSeries, Location, VariableId};
    use crate::types::unit::Unit;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ta_location(lat: f64, lon: f64, entries: &[(NaiveDate, Option<f64>)]) -> Location {
        let series: DateSeries = entries.iter().copied().collect();
        Location::new(lat, lon, [(VariableId::from("ta"), series)].into_iter().collect())
    }

    fn selection(unit: Unit) -> Selection {
        Selection::builder()
            .date(date(1980, 6, 23))
            .variable("ta")
            .unit(unit)
            .build()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn projects_one_record_in_celsius() {
        let dataset = Dataset::new(vec![ta_location(
            1.0,
            1.0,
            &[
                (date(1980, 6, 1), Some(280.0)),
                (date(1980, 6, 23), Some(290.0)),
            ],
        )])
        .unwrap();

        let snapshot = Snapshot::project(&dataset, &selection(Unit::Celsius));
        assert_eq!(snapshot.len(), 1);
        assert_close(snapshot.records()[0].value, 16.85);
    }

    #[test]
    fn projects_in_fahrenheit() {
        let dataset = Dataset::new(vec![ta_location(
            1.0,
            1.0,
            &[(date(1980, 6, 23), Some(290.0))],
        )])
        .unwrap();

        let snapshot = Snapshot::project(&dataset, &selection(Unit::Fahrenheit));
        assert_close(snapshot.records()[0].value, 62.33);
    }

    #[test]
    fn null_values_are_excluded() {
        let dataset = Dataset::new(vec![
            ta_location(1.0, 1.0, &[(date(1980, 6, 23), None)]),
            ta_location(2.0, 2.0, &[(date(1980, 6, 23), Some(285.0))]),
        ])
        .unwrap();

        let snapshot = Snapshot::project(&dataset, &selection(Unit::Kelvin));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.records()[0].id, LocationId(1));
    }

    #[test]
    fn missing_date_keys_are_excluded() {
        let dataset = Dataset::new(vec![ta_location(
            1.0,
            1.0,
            &[(date(1980, 6, 1), Some(280.0))],
        )])
        .unwrap();

        let snapshot = Snapshot::project(&dataset, &selection(Unit::Kelvin));
        assert!(snapshot.is_empty());
    }

    #[test]
    fn locations_without_the_variable_are_excluded() {
        let dataset = Dataset::new(vec![Location::new(1.0, 1.0, HashMap::new())]).unwrap();
        let snapshot = Snapshot::project(&dataset, &selection(Unit::Kelvin));
        assert!(snapshot.is_empty());
    }

    #[test]
    fn empty_dataset_projects_to_an_empty_snapshot() {
        let dataset = Dataset::new(vec![]).unwrap();
        let snapshot = Snapshot::project(&dataset, &selection(Unit::Celsius));
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.value_range(), None, "no values, no color domain");
    }

    #[test]
    fn value_range_spans_the_filtered_records() {
        let dataset = Dataset::new(vec![
            ta_location(1.0, 1.0, &[(date(1980, 6, 23), Some(280.0))]),
            ta_location(2.0, 2.0, &[(date(1980, 6, 23), None)]),
            ta_location(3.0, 3.0, &[(date(1980, 6, 23), Some(295.0))]),
        ])
        .unwrap();

        let range = Snapshot::project(&dataset, &selection(Unit::Kelvin))
            .value_range()
            .unwrap();
        assert_eq!(range.min, 280.0);
        assert_eq!(range.max, 295.0);
    }

    #[test]
    fn record_lookup_uses_the_dataset_index() {
        let dataset = Dataset::new(vec![
            ta_location(1.0, 1.0, &[(date(1980, 6, 23), None)]),
            ta_location(2.0, 2.0, &[(date(1980, 6, 23), Some(285.0))]),
        ])
        .unwrap();

        let snapshot = Snapshot::project(&dataset, &selection(Unit::Kelvin));
        assert!(snapshot.record(LocationId(0)).is_none(), "filtered out");
        assert_eq!(snapshot.record(LocationId(1)).unwrap().lat, 2.0);
    }

    #[test]
    fn records_keep_the_raw_series_for_drilldown() {
        let entries = [
            (date(1980, 6, 1), Some(280.0)),
            (date(1980, 6, 23), Some(290.0)),
        ];
        let dataset = Dataset::new(vec![ta_location(1.0, 1.0, &entries)]).unwrap();

        let snapshot = Snapshot::project(&dataset, &selection(Unit::Celsius));
        let series = snapshot.records()[0].series();
        // The raw series is untouched by the display unit.
        assert_eq!(series.scalar_on(date(1980, 6, 1)), Some(280.0));
        assert_eq!(series.len(), 2);
    }
}
