//! Country records held by the catalog and the projection returned to callers.

use geo::BoundingRect;
use geo_types::{MultiPolygon, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// `ISO_A3` value the dataset uses for disputed or unclaimed territories.
pub const NOT_A_COUNTRY_CODE: &str = "-99";

/// Territory of a single country.
#[derive(Debug, Clone, PartialEq)]
pub enum CountryRegion {
    /// One polygon, with whatever interior rings the dataset encodes
    Single(Polygon<f64>),
    /// Disjoint parts (islands, exclaves), each tested on its own
    Multi(MultiPolygon<f64>),
}

impl CountryRegion {
    /// Bounding rectangle of the whole region
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        match self {
            CountryRegion::Single(polygon) => polygon.bounding_rect(),
            CountryRegion::Multi(parts) => parts.bounding_rect(),
        }
    }

    /// Number of polygon parts in the region
    pub fn part_count(&self) -> usize {
        match self {
            CountryRegion::Single(_) => 1,
            CountryRegion::Multi(parts) => parts.0.len(),
        }
    }
}

/// A country entry from the static dataset
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-3 code, or [`NOT_A_COUNTRY_CODE`]
    pub iso_code: String,

    /// Display name (`ADMIN` in the dataset)
    pub name: String,

    pub region: CountryRegion,
}

impl CountryRecord {
    pub fn new(iso_code: impl Into<String>, name: impl Into<String>, region: CountryRegion) -> Self {
        Self {
            iso_code: iso_code.into(),
            name: name.into(),
            region,
        }
    }

    /// Whether this entry marks a non-country territory
    pub fn is_sentinel(&self) -> bool {
        self.iso_code == NOT_A_COUNTRY_CODE
    }

    pub fn info(&self) -> CountryInfo {
        CountryInfo::from(self)
    }
}

/// Name and code of a matching country
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryInfo {
    pub name: String,
    pub code: String,
}

impl From<&CountryRecord> for CountryInfo {
    fn from(record: &CountryRecord) -> Self {
        Self {
            name: record.name.clone(),
            code: record.iso_code.clone(),
        }
    }
}

impl std::fmt::Display for CountryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
