//! Static, read-only collection of country geometries.
//!
//! Built once at startup and shared behind an `Arc`; exposes no mutation.

mod index;
mod load;

use geo_types::Rect;
use tracing::info;

use crate::models::CountryRecord;
use index::EnvelopeIndex;

pub use load::{from_geojson_str, from_path, from_reader};

/// Country records in dataset order, with an envelope index for candidate lookup
pub struct CountryCatalog {
    records: Vec<CountryRecord>,
    index: EnvelopeIndex,
}

impl CountryCatalog {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        let index = EnvelopeIndex::build(&records);
        let sentinels = records.iter().filter(|r| r.is_sentinel()).count();
        info!(
            "Country catalog ready: {} records ({} non-country), {} indexed",
            records.len(),
            sentinels,
            index.len()
        );
        Self { records, index }
    }

    /// All records in the dataset's natural order
    pub fn all(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Find a record by ISO code
    pub fn get(&self, iso_code: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|r| r.iso_code == iso_code)
    }

    /// Positions of records whose bounding box intersects `rect`, in catalog order
    pub fn candidates(&self, rect: &Rect<f64>) -> Vec<usize> {
        self.index.candidates(rect)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl std::fmt::Debug for CountryCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryCatalog")
            .field("records", &self.records.len())
            .finish()
    }
}
