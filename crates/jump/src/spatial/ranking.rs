//! Nearest-first ranking of located records.

use std::cmp::Ordering;

use geo::Point;
use tracing::debug;

use crate::models::traits::Located;
use crate::spatial::queries::haversine_miles;

/// A record paired with its distance from the reference point
#[derive(Clone, Debug, PartialEq)]
pub struct Ranked<T> {
    pub item: T,
    pub distance_miles: f64,
}

/// Sort records by distance from `origin`, nearest first.
///
/// Records without a position are left out. Ties come back in no
/// particular order.
pub fn rank<T: Located>(origin: Point, items: impl IntoIterator<Item = T>) -> Vec<Ranked<T>> {
    let mut skipped = 0usize;
    let mut ranked: Vec<_> = items
        .into_iter()
        .filter_map(|item| match item.location() {
            Some(location) => Some(Ranked {
                distance_miles: haversine_miles(origin, location),
                item,
            }),
            None => {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        debug!("skipped {skipped} records without a position");
    }

    ranked.sort_unstable_by(|a, b| {
        a.distance_miles
            .partial_cmp(&b.distance_miles)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// The `n` records closest to `origin`, or all of them when there are fewer.
pub fn nearest<T: Located>(
    origin: Point,
    items: impl IntoIterator<Item = T>,
    n: usize,
) -> Vec<Ranked<T>> {
    let mut ranked = rank(origin, items);
    ranked.truncate(n);
    ranked
}
