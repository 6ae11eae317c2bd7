mod dataset;
mod error;
mod frames;
mod series;
mod snapshot;
mod thermomap;
mod types;

pub use error::ThermomapError;
pub use thermomap::*;

pub use dataset::{
    Dataset, DatasetError, DatasetLoader, DateSeries, Location, LocationId, VariableId,
};
pub use frames::{ContourFrame, GeoScatterFrame, LineSeriesFrame};
pub use series::{month_window, MonthSeries, SeriesPoint};
pub use snapshot::{RecordLocator, Snapshot, SnapshotRecord};
pub use types::selection::Selection;
pub use types::unit::{ParseUnitError, Unit};
pub use types::value_range::{ColorScale, ValueRange};
