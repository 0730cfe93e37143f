//! Population time series and the chart data derived from it

use serde::{Deserialize, Serialize};

/// A single population sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationPoint {
    pub year: i32,
    pub value: u64,
}

impl PopulationPoint {
    pub fn new(year: i32, value: u64) -> Self {
        Self { year, value }
    }
}

/// Population counts for one country.
///
/// The service may return no series at all, or an empty one; both collapse
/// into [`PopulationSeries::NoData`] so callers never index a missing sample.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "points", rename_all = "snake_case")]
pub enum PopulationSeries {
    #[default]
    NoData,
    Counts(Vec<PopulationPoint>),
}

impl PopulationSeries {
    /// Build a series, mapping an empty list to `NoData`
    pub fn from_points(points: Vec<PopulationPoint>) -> Self {
        if points.is_empty() {
            PopulationSeries::NoData
        } else {
            PopulationSeries::Counts(points)
        }
    }

    pub fn points(&self) -> &[PopulationPoint] {
        match self {
            PopulationSeries::NoData => &[],
            PopulationSeries::Counts(points) => points,
        }
    }

    pub fn has_data(&self) -> bool {
        !self.points().is_empty()
    }

    pub fn len(&self) -> usize {
        self.points().len()
    }

    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// Derive the chart for this series, `None` when there is nothing to plot
    pub fn chart(&self) -> Option<ChartData> {
        if self.has_data() {
            Some(ChartData::from_points(self.points()))
        } else {
            None
        }
    }
}

/// Line chart of population value vs. year.
///
/// Labels and values keep the order of the fetched series; nothing is
/// sorted or deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// X-axis labels, one per point (the years)
    pub labels: Vec<String>,
    /// Y values, one per point (the counts)
    pub values: Vec<u64>,
    /// (x, y) coordinates for plotting
    pub points: Vec<(f64, f64)>,
}

impl ChartData {
    pub fn from_points(points: &[PopulationPoint]) -> Self {
        Self {
            labels: points.iter().map(|p| p.year.to_string()).collect(),
            values: points.iter().map(|p| p.value).collect(),
            points: points
                .iter()
                .map(|p| (f64::from(p.year), p.value as f64))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Inclusive x range covering every point
    pub fn x_bounds(&self) -> [f64; 2] {
        bounds(self.points.iter().map(|(x, _)| *x))
    }

    /// Inclusive y range covering every point
    pub fn y_bounds(&self) -> [f64; 2] {
        bounds(self.points.iter().map(|(_, y)| *y))
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() {
        return [0.0, 1.0];
    }
    if min == max {
        // A single distinct value still needs a non-empty range
        return [min - 1.0, max + 1.0];
    }
    [min, max]
}
