//! Chart frames handed to the rendering collaborator.
//!
//! A frame is a set of equal-length arrays plus the labels a chart needs. The
//! charting library consumes them as-is; nothing here renders anything.

mod contour;
mod geo_scatter;
mod line_series;

pub use contour::ContourFrame;
pub use geo_scatter::GeoScatterFrame;
pub use line_series::LineSeriesFrame;

use crate::types::unit::Unit;
use crate::types::value_range::ValueRange;

// Colorbar tick labels for the domain bounds, one decimal plus the unit name.
pub(crate) fn colorbar_ticks(range: ValueRange, unit: Unit) -> (String, String) {
    (
        format!("{:.1} {}", range.min, unit),
        format!("{:.1} {}", range.max, unit),
    )
}
