use crate::dataset::LocationId;
use crate::snapshot::Snapshot;
use haversine::{distance, Location as HaversineLocation, Units};
use ordered_float::OrderedFloat;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

// A snapshot record reduced to the point the R-tree indexes.
#[derive(Debug, Clone, Copy)]
struct RecordPoint {
    id: LocationId,
    lat: f64,
    lon: f64,
}

impl RTreeObject for RecordPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.lat, self.lon])
    }
}

impl PointDistance for RecordPoint {
    // Squared planar distance is enough to rank candidates; haversine settles it.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.lat - point[0];
        let dy = self.lon - point[1];
        dx * dx + dy * dy
    }
}

/// Resolves a clicked map position back to a snapshot record.
///
/// Rendering layers echo marker coordinates with reduced precision, so equality
/// on floats is not an option. The locator returns the nearest record within a
/// tolerance radius instead.
pub struct RecordLocator {
    rtree: RTree<RecordPoint>,
}

// Candidates taken from the R-tree before haversine ranking; planar and
// great-circle nearest rarely disagree beyond the first few.
const CANDIDATE_LIMIT: usize = 8;

impl RecordLocator {
    pub fn new(snapshot: &Snapshot<'_>) -> RecordLocator {
        let points = snapshot
            .records()
            .iter()
            .map(|record| RecordPoint {
                id: record.id,
                lat: record.lat,
                lon: record.lon,
            })
            .collect();
        RecordLocator {
            rtree: RTree::bulk_load(points),
        }
    }

    /// The record closest to `(lat, lon)` within `max_distance_km`, if any.
    pub fn nearest(&self, lat: f64, lon: f64, max_distance_km: f64) -> Option<LocationId> {
        self.rtree
            .nearest_neighbor_iter(&[lat, lon])
            .take(CANDIDATE_LIMIT)
            .map(|point| {
                let clicked = HaversineLocation {
                    latitude: lat,
                    longitude: lon,
                };
                let candidate = HaversineLocation {
                    latitude: point.lat,
                    longitude: point.lon,
                };
                (point.id, distance(clicked, candidate, Units::Kilometers))
            })
            .filter(|(_, dist_km)| *dist_km <= max_distance_km)
            .min_by_key(|(_, dist_km)| OrderedFloat(*dist_km))
            .map(|(id, _)| id)
    }
}
