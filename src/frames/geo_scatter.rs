use crate::dataset::LocationId;
use crate::snapshot::Snapshot;
use crate::types::selection::Selection;
use crate::types::value_range::{ColorScale, ValueRange};

/// Marker frame for the geographic scatter map.
///
/// The per-record vectors run in parallel: entry `i` of `lat`, `lon`, `values`,
/// `hover_text` and `ids` all describe the same record. An empty frame is valid
/// and renders as an empty map.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoScatterFrame {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    /// Values already converted into the selection's unit.
    pub values: Vec<f64>,
    /// Per-marker hover text, value to two decimals.
    pub hover_text: Vec<String>,
    /// Stable ids the interaction layer hands back on click.
    pub ids: Vec<LocationId>,
    pub color_scale: ColorScale,
    /// Closed color domain; `None` for an empty frame, in which case the
    /// renderer draws no colorbar.
    pub color_domain: Option<ValueRange>,
    /// Tick labels for the colorbar bounds.
    pub colorbar_ticks: Option<(String, String)>,
    pub legend_label: String,
    pub title: String,
}

impl GeoScatterFrame {
    pub fn from_snapshot(snapshot: &Snapshot<'_>, selection: &Selection) -> GeoScatterFrame {
        let records = snapshot.records();
        let color_domain = snapshot.value_range();
        GeoScatterFrame {
            lat: records.iter().map(|r| r.lat).collect(),
            lon: records.iter().map(|r| r.lon).collect(),
            values: records.iter().map(|r| r.value).collect(),
            hover_text: records.iter().map(|r| format!("{:.2}", r.value)).collect(),
            ids: records.iter().map(|r| r.id).collect(),
            color_scale: ColorScale::default(),
            color_domain,
            colorbar_ticks: color_domain.map(|range| super::colorbar_ticks(range, selection.unit)),
            legend_label: selection.axis_label(),
            title: format!(
                "{} Map on {}",
                selection.variable.display_name(),
                selection.date
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.lat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }
}
