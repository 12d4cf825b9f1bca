use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{date_ticks, format_tick, PlotData, Renderer, DEFAULT_TICK_COUNT};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub lines: Vec<RenderedLine>,
    pub x_ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedLine {
    pub label: String,
    pub color_index: usize,
    pub color: String,
    pub points: Vec<(i64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: i64,
    pub label: String,
}

/// Renders to a serializable document for clients that draw themselves.
#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    tick_count: usize,
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
        }
    }
}

impl JsonRenderer {
    pub fn with_tick_count(tick_count: usize) -> Self {
        Self { tick_count }
    }
}

impl Renderer for JsonRenderer {
    type Output = RenderedPlot;

    fn render(&self, plot: &PlotData) -> RenderedPlot {
        let x_ticks = match plot.x_range() {
            Some((min, max)) => date_ticks(min, max, self.tick_count)
                .into_iter()
                .map(|value| Tick {
                    value,
                    label: format_tick(value),
                })
                .collect(),
            None => Vec::new(),
        };

        RenderedPlot {
            start: plot.start,
            end: plot.end,
            lines: plot
                .lines
                .iter()
                .map(|l| RenderedLine {
                    label: l.label.clone(),
                    color_index: l.color_index,
                    color: l.color().to_string(),
                    points: l.points.clone(),
                })
                .collect(),
            x_ticks,
        }
    }
}
