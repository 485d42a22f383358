//! Polygon-to-country matching service.

use std::sync::Arc;

use geo::{BoundingRect, Polygon};
use rayon::prelude::*;
use tracing::debug;

use crate::catalog::CountryCatalog;
use crate::error::{MatchError, PolygonError};
use crate::geometry::{intersects_region, validate};
use crate::models::{CountryInfo, CountryRecord};

/// Finds the countries a query polygon overlaps
#[derive(Debug, Clone)]
pub struct PolygonCountryMatcher {
    catalog: Arc<CountryCatalog>,
    parallel: bool,
}

impl PolygonCountryMatcher {
    /// Create a matcher over a shared catalog. Exact tests run on rayon by default.
    pub fn new(catalog: Arc<CountryCatalog>) -> Self {
        Self {
            catalog,
            parallel: true,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    /// Validate `coordinates` and return every intersecting country in catalog order.
    ///
    /// Returns an empty list when nothing intersects.
    pub fn find_countries_by_polygon<P: AsRef<[f64]>>(
        &self,
        coordinates: &[P],
    ) -> Result<Vec<CountryInfo>, PolygonError> {
        let query = validate(coordinates)?;
        Ok(self.find_countries_in(&query))
    }

    /// Same computation as [`Self::find_countries_by_polygon`], run on the blocking pool
    pub async fn find_countries_by_polygon_async(
        &self,
        coordinates: Vec<Vec<f64>>,
    ) -> Result<Vec<CountryInfo>, MatchError> {
        let matcher = self.clone();
        let result =
            tokio::task::spawn_blocking(move || matcher.find_countries_by_polygon(&coordinates))
                .await??;
        Ok(result)
    }

    /// Match an already validated polygon
    pub fn find_countries_in(&self, query: &Polygon<f64>) -> Vec<CountryInfo> {
        let Some(rect) = query.bounding_rect() else {
            return Vec::new();
        };

        let records = self.catalog.all();
        let candidates: Vec<&CountryRecord> = self
            .catalog
            .candidates(&rect)
            .into_iter()
            .map(|position| &records[position])
            .filter(|record| !record.is_sentinel())
            .collect();

        debug!(
            "Polygon query: {} candidates out of {} countries",
            candidates.len(),
            records.len()
        );

        // Both paths keep candidate order, which is catalog order
        let matches: Vec<CountryInfo> = if self.parallel {
            candidates
                .par_iter()
                .filter(|record| intersects_region(&record.region, query))
                .map(|record| record.info())
                .collect()
        } else {
            candidates
                .iter()
                .filter(|record| intersects_region(&record.region, query))
                .map(|record| record.info())
                .collect()
        };

        debug!("Polygon query matched {} countries", matches.len());
        matches
    }
}
