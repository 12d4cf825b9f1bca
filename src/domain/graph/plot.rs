use tracing::debug;

use super::error::GraphError;
use super::group::{group, WindowedSource};
use super::model::Graph;
use crate::core::client::source::MetricSource;
use crate::core::render::{PlotData, PlotLine, PALETTE_SIZE};

/// Fetches, groups and flattens a graph into ordered plot lines.
///
/// Lines follow group order, then sub-series name order within a group.
/// Colour indices count lines across the whole graph. Legends are verbose
/// (`"<host> <identifier> <name>"`) as soon as the request listed more than
/// one metric, even if grouping folded them into a single series.
pub async fn plot(graph: &Graph, source: &dyn MetricSource) -> Result<PlotData, GraphError> {
    let windowed = WindowedSource::new(source, graph.start(), graph.end());
    let grouped = group(graph.metrics(), graph.group_by(), &windowed).await?;
    let verbose = graph.metrics().len() > 1;

    let mut lines = Vec::new();
    for labeled in &grouped {
        for (name, data) in &labeled.series.data {
            let points = data
                .iter()
                .map(|p| {
                    p.timestamp
                        .timestamp_nanos_opt()
                        .map(|x| (x, p.value))
                        .ok_or_else(|| GraphError::UnplottableSample {
                            hostname: labeled.hostname.clone(),
                            identifier: labeled.identifier.clone(),
                            name: name.clone(),
                            timestamp: p.timestamp,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            let label = if verbose {
                format!("{} {} {}", labeled.hostname, labeled.identifier, name)
            } else {
                name.clone()
            };

            lines.push(PlotLine {
                label,
                color_index: lines.len() % PALETTE_SIZE,
                points,
            });
        }
    }

    debug!(groups = grouped.len(), lines = lines.len(), "graph assembled");
    Ok(PlotData {
        start: graph.start(),
        end: graph.end(),
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::group::mock::MockSource;
    use crate::domain::graph::model::MetricDescriptor;
    use crate::domain::series::model::fixtures::{at, minute_series, minute_series_named};
    use crate::domain::series::{DataPoint, Series};
    use chrono::{TimeZone, Utc};

    fn labels(plot: &PlotData) -> Vec<&str> {
        plot.lines.iter().map(|l| l.label.as_str()).collect()
    }

    #[tokio::test]
    async fn single_metric_uses_short_labels() {
        let series = minute_series(4, 5, &[1.0, 2.0]).with_sub_series(
            "rx",
            vec![DataPoint::new(at(4, 5), 3.0), DataPoint::new(at(4, 6), 4.0)],
        );
        let source = MockSource::default().with("web01", "if", series);
        let graph = Graph::new(
            at(4, 0),
            at(5, 0),
            vec![MetricDescriptor::new("web01", "if")],
            vec![],
        )
        .unwrap();

        let plot = plot(&graph, &source).await.unwrap();

        assert_eq!(labels(&plot), vec!["rx", "value"]);
        assert_eq!(plot.lines[0].color_index, 0);
        assert_eq!(plot.lines[1].color_index, 1);
        assert_eq!(
            plot.lines[0].points[0],
            (at(4, 5).timestamp_nanos_opt().unwrap(), 3.0)
        );
        assert_eq!(plot.start, at(4, 0));
        assert_eq!(plot.end, at(5, 0));
    }

    #[tokio::test]
    async fn multiple_metrics_use_verbose_labels() {
        let source = MockSource::default()
            .with("web01", "cpu", minute_series(4, 5, &[1.0]))
            .with("web02", "cpu", minute_series(4, 5, &[2.0]));
        let graph = Graph::new(
            at(4, 0),
            at(5, 0),
            vec![
                MetricDescriptor::new("web01", "cpu"),
                MetricDescriptor::new("web02", "cpu"),
            ],
            vec![],
        )
        .unwrap();

        let plot = plot(&graph, &source).await.unwrap();

        assert_eq!(labels(&plot), vec!["web01 cpu value", "web02 cpu value"]);
    }

    #[tokio::test]
    async fn grouped_metrics_stay_verbose_and_colours_keep_counting() {
        let source = MockSource::default()
            .with("db01", "cpu", minute_series_named("user", 4, 5, &[1.0, 1.0]))
            .with("db02", "cpu", minute_series_named("user", 4, 5, &[2.0, 2.0]));
        let graph = Graph::new(
            at(4, 0),
            at(5, 0),
            vec![
                MetricDescriptor::new("db01", "cpu").with_attribute("role", "db"),
                MetricDescriptor::new("db02", "cpu").with_attribute("role", "db"),
            ],
            vec!["role".into()],
        )
        .unwrap();

        let plot = plot(&graph, &source).await.unwrap();

        assert_eq!(labels(&plot), vec![" db user"]);
        assert_eq!(plot.lines[0].points.len(), 2);
        assert_eq!(plot.lines[0].points[1].1, 3.0);
    }

    #[tokio::test]
    async fn colour_index_wraps_around_the_palette() {
        let mut source = MockSource::default();
        let mut metrics = Vec::new();
        for i in 0..(PALETTE_SIZE + 2) {
            let host = format!("web{:02}", i);
            source = source.with(&host, "cpu", minute_series(4, 5, &[i as f64]));
            metrics.push(MetricDescriptor::new(host, "cpu"));
        }
        let graph = Graph::new(at(4, 0), at(5, 0), metrics, vec![]).unwrap();

        let plot = plot(&graph, &source).await.unwrap();

        let indices: Vec<usize> = plot.lines.iter().map(|l| l.color_index).collect();
        assert_eq!(indices[PALETTE_SIZE], 0);
        assert_eq!(indices[PALETTE_SIZE + 1], 1);
    }

    #[tokio::test]
    async fn fetch_errors_propagate() {
        let source = MockSource::default();
        let graph = Graph::new(
            at(4, 0),
            at(5, 0),
            vec![MetricDescriptor::new("web01", "cpu")],
            vec![],
        )
        .unwrap();

        assert!(matches!(
            plot(&graph, &source).await,
            Err(GraphError::Fetch { .. })
        ));
    }

    #[tokio::test]
    async fn samples_beyond_nanosecond_range_are_rejected_as_data_errors() {
        let far = Utc.with_ymd_and_hms(2300, 1, 1, 0, 0, 0).unwrap();
        let series = Series::new(far, far).with_sub_series("value", vec![DataPoint::new(far, 1.0)]);
        let source = MockSource::default().with("web01", "cpu", series);
        let graph = Graph::new(
            at(4, 0),
            at(5, 0),
            vec![MetricDescriptor::new("web01", "cpu")],
            vec![],
        )
        .unwrap();

        let err = plot(&graph, &source).await.unwrap_err();
        assert_eq!(
            err,
            GraphError::UnplottableSample {
                hostname: "web01".into(),
                identifier: "cpu".into(),
                name: "value".into(),
                timestamp: far,
            }
        );
    }
}
