//! Color-scale domain and stops shared by the map and contour frames.

use ordered_float::OrderedFloat;

/// Closed `[min, max]` domain of a color scale, spanning a snapshot's values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Spans `values`, or `None` when there is nothing to span.
    ///
    /// Frame building short-circuits the color domain on `None` so an empty
    /// snapshot never produces NaN bounds.
    pub fn over<I>(values: I) -> Option<ValueRange>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter();
        let first = OrderedFloat(values.next()?);
        let (min, max) = values.fold((first, first), |(lo, hi), v| {
            let v = OrderedFloat(v);
            (lo.min(v), hi.max(v))
        });
        Some(ValueRange {
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }
}

/// Piecewise color scale, as normalized stop positions and CSS color names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    stops: &'static [(f64, &'static str)],
}

/// Blue through red, warm-biased above the midpoint.
const DEFAULT_STOPS: &[(f64, &'static str)] = &[
    (0.0, "blue"),
    (0.5, "lime"),
    (0.75, "yellow"),
    (1.0, "red"),
];

impl ColorScale {
    pub fn stops(&self) -> &'static [(f64, &'static str)] {
        self.stops
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        ColorScale {
            stops: DEFAULT_STOPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_range() {
        assert_eq!(ValueRange::over(std::iter::empty()), None);
    }

    #[test]
    fn single_value_collapses_to_a_point() {
        let range = ValueRange::over([16.85]).unwrap();
        assert_eq!(range.min, 16.85);
        assert_eq!(range.max, 16.85);
    }

    #[test]
    fn spans_unordered_values() {
        let range = ValueRange::over([3.0, -7.5, 12.25, 0.0]).unwrap();
        assert_eq!(range.min, -7.5);
        assert_eq!(range.max, 12.25);
    }

    #[test]
    fn default_scale_runs_blue_to_red() {
        let scale = ColorScale::default();
        let stops = scale.stops();
        assert_eq!(stops.len(), 4);
        assert_eq!(stops[0], (0.0, "blue"));
        assert_eq!(stops[3], (1.0, "red"));
    }
}
