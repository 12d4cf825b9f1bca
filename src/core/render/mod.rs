//! Render boundary: what the engine hands to a drawing backend.

pub mod json;

use chrono::{DateTime, Utc};

pub use json::JsonRenderer;

/// Line colours, cycled by line index.
pub const DARK_PALETTE: [&str; 7] = [
    "#ee2e2f", "#008c48", "#185aa9", "#f47d23", "#662c91", "#a21d21", "#b43894",
];

pub const PALETTE_SIZE: usize = DARK_PALETTE.len();

/// Ticks drawn along the time axis when the data spans a non-empty range.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// One drawable line. `points` are `(epoch nanoseconds, value)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLine {
    pub label: String,
    pub color_index: usize,
    pub points: Vec<(i64, f64)>,
}

impl PlotLine {
    pub fn color(&self) -> &'static str {
        DARK_PALETTE[self.color_index % PALETTE_SIZE]
    }
}

/// Ordered lines of one graph, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub lines: Vec<PlotLine>,
}

impl PlotData {
    /// Smallest and largest x value over all lines.
    pub fn x_range(&self) -> Option<(i64, i64)> {
        self.lines
            .iter()
            .flat_map(|l| l.points.iter().map(|(x, _)| *x))
            .fold(None, |acc, x| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
    }
}

pub trait Renderer {
    type Output;

    fn render(&self, plot: &PlotData) -> Self::Output;
}

/// Formats an x-axis value (epoch nanoseconds) for display.
pub fn format_tick(ns: i64) -> String {
    DateTime::from_timestamp_nanos(ns)
        .format("%d %b %y %H:%M UTC")
        .to_string()
}

/// `count` evenly spaced tick positions over `[min, max]`, both ends included.
pub fn date_ticks(min: i64, max: i64, count: usize) -> Vec<i64> {
    if count == 0 {
        return Vec::new();
    }
    if min >= max || count == 1 {
        return vec![min];
    }
    let span = max as i128 - min as i128;
    let steps = (count - 1) as i128;
    (0..count)
        .map(|i| (min as i128 + span * i as i128 / steps) as i64)
        .collect()
}
