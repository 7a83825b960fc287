//! Partitioning raw points into per-zone buckets.

use std::collections::BTreeMap;

use touchrelay_common::{Located, Rect, ZoneKey};
use tracing::trace;

use crate::surface::ZoneRef;

/// Points of one raw event, bucketed by zone.
///
/// Every zone in the registry and the host sentinel has a bucket, possibly
/// empty. A point matching several zones is present in each of them; a
/// point matching none is in the host bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneBuckets<P> {
    buckets: BTreeMap<ZoneKey, Vec<P>>,
}

impl<P> ZoneBuckets<P> {
    fn with_zones(zone_count: usize) -> Self {
        let buckets = std::iter::once(ZoneKey::Host)
            .chain((0..zone_count).map(ZoneKey::Zone))
            .map(|key| (key, Vec::new()))
            .collect();
        Self { buckets }
    }

    pub fn get(&self, key: ZoneKey) -> &[P] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All buckets, host first, then zones by index.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneKey, &[P])> {
        self.buckets.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = ZoneKey> + '_ {
        self.buckets.keys().copied()
    }

    /// Total number of placements; exceeds the point count when zones overlap.
    pub fn placements(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Bucket `points` by the zones that strictly contain them.
///
/// Zone bounds are read once per call, never across calls.
pub fn partition<P: Located + Clone>(points: &[P], zones: &[ZoneRef]) -> ZoneBuckets<P> {
    let rects: Vec<Rect> = zones.iter().map(|z| z.bounding_rect()).collect();
    let mut out = ZoneBuckets::with_zones(zones.len());

    for point in points {
        let position = point.position();
        let mut matched = false;
        for (index, rect) in rects.iter().enumerate() {
            if rect.contains_strict(position) {
                matched = true;
                out.buckets
                    .entry(ZoneKey::Zone(index))
                    .or_default()
                    .push(point.clone());
            }
        }
        if !matched {
            out.buckets
                .entry(ZoneKey::Host)
                .or_default()
                .push(point.clone());
        }
        trace!(x = position.x, y = position.y, matched, "partitioned point");
    }
    out
}

/// Single-point variant, used for clicks and pointer events.
pub fn partition_one<P: Located + Clone>(point: &P, zones: &[ZoneRef]) -> ZoneBuckets<P> {
    partition(std::slice::from_ref(point), zones)
}
