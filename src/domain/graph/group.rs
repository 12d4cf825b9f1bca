use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::error::GraphError;
use super::model::{GroupKey, LabeledSeries, MetricDescriptor};
use crate::core::client::source::MetricSource;
use crate::domain::series::{sum, Series};

/// A [`MetricSource`] bound to one render window.
pub struct WindowedSource<'a> {
    source: &'a dyn MetricSource,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl<'a> WindowedSource<'a> {
    pub fn new(source: &'a dyn MetricSource, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { source, start, end }
    }

    pub async fn fetch(&self, metric: &MetricDescriptor) -> Result<Series, GraphError> {
        debug!(
            hostname = %metric.hostname,
            identifier = %metric.identifier,
            "fetching time-series"
        );
        self.source
            .fetch(&metric.hostname, &metric.identifier, self.start, self.end)
            .await
            .map_err(|source| GraphError::Fetch {
                hostname: metric.hostname.clone(),
                identifier: metric.identifier.clone(),
                source,
            })
    }
}

/// Fetches every metric and, when `group_by` is non-empty, sums the members
/// of each group into one series.
///
/// Groups come out ordered by [`GroupKey`]; without grouping the input order
/// is kept. The first failure aborts the whole call.
pub async fn group(
    metrics: &[MetricDescriptor],
    group_by: &[String],
    source: &WindowedSource<'_>,
) -> Result<Vec<LabeledSeries>, GraphError> {
    if group_by.is_empty() {
        let mut out = Vec::with_capacity(metrics.len());
        for metric in metrics {
            out.push(LabeledSeries {
                hostname: metric.hostname.clone(),
                identifier: metric.identifier.clone(),
                series: source.fetch(metric).await?,
            });
        }
        return Ok(out);
    }

    let mut buckets: BTreeMap<GroupKey, Vec<&MetricDescriptor>> = BTreeMap::new();
    for metric in metrics {
        buckets
            .entry(GroupKey::for_metric(metric, group_by))
            .or_default()
            .push(metric);
    }

    let mut out = Vec::with_capacity(buckets.len());
    for (key, members) in buckets {
        let label = key.label();
        debug!(group = %label, members = members.len(), "aggregating group");

        // buckets are created on first insert, so never empty
        let (first, rest) = match members.split_first() {
            Some(split) => split,
            None => continue,
        };

        let mut acc = source.fetch(first).await?;
        for member in rest {
            let next = source.fetch(member).await?;
            acc = sum(acc, next).map_err(|source| GraphError::IncompatibleSeries {
                group: label.clone(),
                hostname: member.hostname.clone(),
                identifier: member.identifier.clone(),
                source,
            })?;
        }

        let hostname = if rest.iter().all(|m| m.hostname == first.hostname) {
            first.hostname.clone()
        } else {
            String::new()
        };

        out.push(LabeledSeries {
            hostname,
            identifier: label,
            series: acc,
        });
    }
    Ok(out)
}
