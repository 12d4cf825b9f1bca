use super::align::align_in_place;
use super::error::SeriesError;
use super::model::Series;

/// Adds `other` into `acc` after aligning both onto their common window.
///
/// Values are summed positionally per sub-series. Every pair of points must
/// carry the same timestamp once aligned; a mismatch fails with
/// [`SeriesError::MisalignedSeries`] rather than summing unrelated samples.
pub fn sum(acc: Series, other: Series) -> Result<Series, SeriesError> {
    let (mut acc, mut other) = (acc, other);
    align_in_place(&mut acc, &mut other).map_err(SeriesError::IncompatibleSeries)?;

    for (name, points) in acc.data.iter_mut() {
        let addends = other.data.get(name).map(Vec::as_slice).unwrap_or_default();
        if points.len() != addends.len() {
            return Err(SeriesError::PointCountMismatch {
                name: name.clone(),
                left: points.len(),
                right: addends.len(),
            });
        }

        for (index, (point, addend)) in points.iter_mut().zip(addends).enumerate() {
            if point.timestamp != addend.timestamp {
                return Err(SeriesError::MisalignedSeries {
                    name: name.clone(),
                    index,
                    left: point.timestamp,
                    right: addend.timestamp,
                });
            }
            point.value += addend.value;
        }
    }

    Ok(acc)
}
