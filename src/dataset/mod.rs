//! Typed model of the temperature dataset document.
//!
//! The wire format is a single JSON document: a list of locations, each carrying
//! `lat`/`lon` plus one date-keyed series per variable. Everything is validated
//! once here, at load time; downstream code works with parsed dates and never sees
//! the raw string keys.

mod error;
mod loader;

pub use error::DatasetError;
pub use loader::DatasetLoader;

use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

/// Identifier of a per-location variable series (e.g. `ta`, `pa`).
///
/// The variable set is open and configuration-defined; whatever keys the document
/// carries are the variables a selector can offer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct VariableId(String);

impl VariableId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable name for chart labels.
    ///
    /// Known ids get a proper name; anything else falls back to the raw id.
    pub fn display_name(&self) -> &str {
        match self.0.as_str() {
            "ta" => "Temperature",
            "pa" => "Pressure",
            other => other,
        }
    }
}

impl From<&str> for VariableId {
    fn from(id: &str) -> Self {
        VariableId(id.to_string())
    }
}

impl From<String> for VariableId {
    fn from(id: String) -> Self {
        VariableId(id)
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable index of a location within its dataset.
///
/// Carried through snapshots and frames so the interaction layer can name the
/// clicked record without ever comparing floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationId(pub usize);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "location {}", self.0)
    }
}

/// A date-keyed series of raw kelvin values; `None` is a sensor or model gap.
///
/// Stored ordered by date, which replaces the lexicographic key sort the raw
/// exports rely on (valid there only because the keys are ISO-formatted).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateSeries(BTreeMap<NaiveDate, Option<f64>>);

impl DateSeries {
    /// Scalar for a single date; a missing key and a stored null both come back
    /// as `None`.
    pub fn scalar_on(&self, date: NaiveDate) -> Option<f64> {
        self.0.get(&date).copied().flatten()
    }

    /// Entries within `[start, end]`, both bounds inclusive, ascending by date.
    /// Gap entries are included; an inverted range is empty.
    pub fn window(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = (NaiveDate, Option<f64>)> + '_ {
        let range = (start <= end).then(|| self.0.range(start..=end));
        range
            .into_iter()
            .flatten()
            .map(|(date, value)| (*date, *value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Option<f64>)> + '_ {
        self.0.iter().map(|(date, value)| (*date, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(NaiveDate, Option<f64>)> for DateSeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, Option<f64>)>>(entries: I) -> Self {
        DateSeries(entries.into_iter().collect())
    }
}

/// One geographic point and its variable series.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub variables: HashMap<VariableId, DateSeries>,
}

impl Location {
    pub fn new(lat: f64, lon: f64, variables: HashMap<VariableId, DateSeries>) -> Location {
        Location {
            lat,
            lon,
            variables,
        }
    }

    /// The series for `variable`, if this location carries it.
    pub fn series(&self, variable: &VariableId) -> Option<&DateSeries> {
        self.variables.get(variable)
    }
}

/// The loaded dataset: a set of locations, immutable for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    locations: Vec<Location>,
}

impl Dataset {
    /// Wraps `locations`, enforcing that no two share a `(lat, lon)` pair.
    pub fn new(locations: Vec<Location>) -> Result<Dataset, DatasetError> {
        let mut seen = HashSet::with_capacity(locations.len());
        for location in &locations {
            if !seen.insert((OrderedFloat(location.lat), OrderedFloat(location.lon))) {
                return Err(DatasetError::DuplicateLocation {
                    lat: location.lat,
                    lon: location.lon,
                });
            }
        }
        Ok(Dataset { locations })
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Every variable id present anywhere in the dataset, sorted, deduplicated.
    /// This is what a variable selector offers.
    pub fn variable_ids(&self) -> Vec<VariableId> {
        let ids: BTreeSet<&VariableId> = self
            .locations
            .iter()
            .flat_map(|location| location.variables.keys())
            .collect();
        ids.into_iter().cloned().collect()
    }
}

// --- Wire shape ---

#[derive(Debug, Deserialize)]
pub(crate) struct RawDataset {
    locations: Vec<RawLocation>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    lat: f64,
    lon: f64,
    #[serde(flatten)]
    variables: HashMap<String, HashMap<String, Option<f64>>>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = DatasetError;

    fn try_from(raw: RawDataset) -> Result<Dataset, DatasetError> {
        let locations = raw
            .locations
            .into_iter()
            .map(Location::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Dataset::new(locations)
    }
}

impl TryFrom<RawLocation> for Location {
    type Error = DatasetError;

    fn try_from(raw: RawLocation) -> Result<Location, DatasetError> {
        let mut variables = HashMap::with_capacity(raw.variables.len());
        for (name, entries) in raw.variables {
            let mut series = BTreeMap::new();
            for (key, value) in entries {
                // The raw exports carry a stray "" column; skip it.
                if key.is_empty() {
                    continue;
                }
                let date = NaiveDate::parse_from_str(&key, "%Y-%m-%d").map_err(|_| {
                    DatasetError::InvalidDateKey {
                        variable: name.clone(),
                        key,
                    }
                })?;
                series.insert(date, value);
            }
            variables.insert(VariableId(name), DateSeries(series));
        }
        Ok(Location::new(raw.lat, raw.lon, variables))
    }
}
