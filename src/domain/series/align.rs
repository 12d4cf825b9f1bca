use std::ops::RangeInclusive;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use super::error::AlignError;
use super::model::{nanos, Series};

/// Trims two series to their overlapping window on a common sampling grid.
///
/// Both series must carry the same sub-series names. Sub-series with more
/// than one point must share the same step; degenerate sub-series (zero or
/// one point) must have equal point counts and equal window lengths and are
/// left untouched. On success both returned series have the same
/// `start`/`end`.
pub fn align(a: Series, b: Series) -> Result<(Series, Series), AlignError> {
    let (mut a, mut b) = (a, b);
    align_in_place(&mut a, &mut b)?;
    Ok((a, b))
}

/// In-place variant used by the aggregator. Nothing is modified unless every
/// sub-series can be aligned.
pub(crate) fn align_in_place(a: &mut Series, b: &mut Series) -> Result<(), AlignError> {
    if !a.data.keys().eq(b.data.keys()) {
        return Err(AlignError::MismatchedSources {
            left: a.names(),
            right: b.names(),
        });
    }

    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    if end < start {
        return Err(AlignError::NonOverlappingRange {
            left_start: a.start,
            left_end: a.end,
            right_start: b.start,
            right_end: b.end,
        });
    }

    let range_a = nanos(a.span());
    let range_b = nanos(b.span());

    let mut trims: Vec<(String, RangeInclusive<usize>, RangeInclusive<usize>)> = Vec::new();
    for (name, points_a) in &a.data {
        let (l1, l2) = (points_a.len(), b.len_of(name));

        if l1 <= 1 || l2 <= 1 {
            if l1 == l2 && range_a == range_b {
                continue;
            }
            return Err(AlignError::InvalidValueCount {
                name: name.clone(),
                left: l1,
                right: l2,
            });
        }

        let step_a = range_a / (l1 as i64 - 1);
        let step_b = range_b / (l2 as i64 - 1);
        if step_a != step_b || step_a <= 0 {
            return Err(AlignError::MismatchedStep {
                name: name.clone(),
                left: TimeDelta::nanoseconds(step_a),
                right: TimeDelta::nanoseconds(step_b),
            });
        }

        let window_a = grid_window(name, a.start, start, end, step_a, l1)?;
        let window_b = grid_window(name, b.start, start, end, step_a, l2)?;
        trims.push((name.clone(), window_a, window_b));
    }

    for (name, window_a, window_b) in trims {
        if let Some(points) = a.data.get_mut(&name) {
            trim(points, window_a);
        }
        if let Some(points) = b.data.get_mut(&name) {
            trim(points, window_b);
        }
    }

    debug!(%start, %end, "aligned series window");
    a.start = start;
    b.start = start;
    a.end = end;
    b.end = end;
    Ok(())
}

/// Index range `[lo, hi]` of `[start, end]` on a grid anchored at `origin`.
fn grid_window(
    name: &str,
    origin: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step: i64,
    len: usize,
) -> Result<RangeInclusive<usize>, AlignError> {
    let lo = usize::try_from(nanos(start - origin) / step).unwrap_or(usize::MAX);
    let hi = usize::try_from(nanos(end - origin) / step).unwrap_or(usize::MAX);
    if hi >= len {
        return Err(AlignError::TruncatedSeries {
            name: name.to_string(),
            index: hi,
            available: len,
        });
    }
    Ok(lo..=hi)
}

fn trim<T>(points: &mut Vec<T>, window: RangeInclusive<usize>) {
    let (lo, hi) = window.into_inner();
    points.truncate(hi + 1);
    points.drain(..lo);
}
