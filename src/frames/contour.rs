use crate::snapshot::Snapshot;
use crate::types::selection::Selection;
use crate::types::value_range::{ColorScale, ValueRange};

/// Contour frame over the same triples as the map: longitude on x, latitude on
/// y, the selected value as z. The charting collaborator does the gridding.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourFrame {
    /// Longitudes.
    pub x: Vec<f64>,
    /// Latitudes.
    pub y: Vec<f64>,
    /// Values already converted into the selection's unit.
    pub z: Vec<f64>,
    pub color_scale: ColorScale,
    /// Closed color domain; `None` for an empty frame.
    pub color_domain: Option<ValueRange>,
    pub colorbar_ticks: Option<(String, String)>,
    pub x_label: String,
    pub y_label: String,
    pub legend_label: String,
    pub title: String,
}

impl ContourFrame {
    pub fn from_snapshot(snapshot: &Snapshot<'_>, selection: &Selection) -> ContourFrame {
        let records = snapshot.records();
        let color_domain = snapshot.value_range();
        ContourFrame {
            x: records.iter().map(|r| r.lon).collect(),
            y: records.iter().map(|r| r.lat).collect(),
            z: records.iter().map(|r| r.value).collect(),
            color_scale: ColorScale::default(),
            color_domain,
            colorbar_ticks: color_domain.map(|range| super::colorbar_ticks(range, selection.unit)),
            x_label: "Longitude".to_string(),
            y_label: "Latitude".to_string(),
            legend_label: selection.axis_label(),
            title: format!("Contour Plot of {}", selection.variable.display_name()),
        }
    }

    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }
}
