use crate::series::MonthSeries;
use crate::types::selection::Selection;
use chrono::NaiveDate;

/// Line frame for one location's month of values ending at the reference date.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeriesFrame {
    pub dates: Vec<NaiveDate>,
    /// `None` entries are gaps. They hold their slot so the x axis stays
    /// aligned with the dates around them.
    pub values: Vec<Option<f64>>,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
}

impl LineSeriesFrame {
    pub fn from_series(series: &MonthSeries, selection: &Selection) -> LineSeriesFrame {
        LineSeriesFrame {
            dates: series.points().iter().map(|p| p.date).collect(),
            values: series.points().iter().map(|p| p.value).collect(),
            x_label: "Date".to_string(),
            // The series knows the unit its values were converted into.
            y_label: format!(
                "{} ({})",
                selection.variable.display_name(),
                series.unit().symbol()
            ),
            title: format!(
                "{} Time Series on {}",
                selection.variable.display_name(),
                series.reference()
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
