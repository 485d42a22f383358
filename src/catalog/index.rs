//! Spatial index over country bounding boxes.

use geo_types::Rect;
use rstar::{RTree, RTreeObject, AABB};

use crate::models::CountryRecord;

/// Wrapper for R-tree indexing of catalog entries by position
#[derive(Debug, Clone)]
struct IndexedCountry {
    position: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedCountry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

fn to_aabb(rect: &Rect<f64>) -> AABB<[f64; 2]> {
    AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y])
}

/// R-tree of country envelopes, keyed by catalog position
pub(crate) struct EnvelopeIndex {
    tree: RTree<IndexedCountry>,
}

impl EnvelopeIndex {
    /// Records without a bounding box (empty geometry) are left out.
    pub fn build(records: &[CountryRecord]) -> Self {
        let indexed: Vec<IndexedCountry> = records
            .iter()
            .enumerate()
            .filter_map(|(position, record)| {
                let rect = record.region.bounding_rect()?;
                Some(IndexedCountry {
                    position,
                    envelope: to_aabb(&rect),
                })
            })
            .collect();

        Self {
            tree: RTree::bulk_load(indexed),
        }
    }

    /// Catalog positions whose envelope intersects `rect`, ascending
    pub fn candidates(&self, rect: &Rect<f64>) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&to_aabb(rect))
            .map(|ic| ic.position)
            .collect();
        positions.sort_unstable();
        positions
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }
}
