//! Country catalog loading from GeoJSON.
//!
//! Expects a FeatureCollection with one feature per country, `Polygon` or
//! `MultiPolygon` geometry, and string properties `ADMIN` and `ISO_A3`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use geo_types::{Coord, LineString, MultiPolygon, Polygon};
use geojson::{Feature, GeoJson, Value};
use tracing::info;

use super::CountryCatalog;
use crate::error::CatalogError;
use crate::models::{CountryRecord, CountryRegion};

const NAME_PROPERTY: &str = "ADMIN";
const CODE_PROPERTY: &str = "ISO_A3";

/// Load a catalog from a GeoJSON file; `.gz` files are decompressed first
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<CountryCatalog, CatalogError> {
    let path = path.as_ref();
    info!("Loading country catalog from {}", path.display());

    let file = File::open(path)?;
    let is_gzip = path.extension().map(|e| e == "gz").unwrap_or(false);

    if is_gzip {
        from_reader(GzDecoder::new(BufReader::new(file)))
    } else {
        from_reader(BufReader::new(file))
    }
}

pub fn from_reader<R: Read>(mut reader: R) -> Result<CountryCatalog, CatalogError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    from_geojson_str(&content)
}

pub fn from_geojson_str(content: &str) -> Result<CountryCatalog, CatalogError> {
    let features = match content.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(fc) => fc.features,
        _ => return Err(CatalogError::NotACollection),
    };

    let records = features
        .iter()
        .enumerate()
        .map(|(index, feature)| parse_feature(index, feature))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CountryCatalog::new(records))
}

fn parse_feature(index: usize, feature: &Feature) -> Result<CountryRecord, CatalogError> {
    let name = string_property(index, feature, NAME_PROPERTY)?;
    let iso_code = string_property(index, feature, CODE_PROPERTY)?;

    let geometry = feature
        .geometry
        .as_ref()
        .ok_or(CatalogError::MissingGeometry { index })?;

    let region = match &geometry.value {
        Value::Polygon(rings) => CountryRegion::Single(to_polygon(index, rings)?),
        Value::MultiPolygon(parts) => CountryRegion::Multi(MultiPolygon::new(
            parts
                .iter()
                .map(|rings| to_polygon(index, rings))
                .collect::<Result<Vec<_>, _>>()?,
        )),
        other => {
            return Err(CatalogError::UnsupportedGeometry {
                index,
                kind: geometry_kind(other).to_string(),
            })
        }
    };

    Ok(CountryRecord::new(iso_code, name, region))
}

fn string_property(
    index: usize,
    feature: &Feature,
    property: &'static str,
) -> Result<String, CatalogError> {
    feature
        .property(property)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or(CatalogError::MissingProperty { index, property })
}

/// First ring is the exterior, the rest are holes
fn to_polygon(index: usize, rings: &[Vec<Vec<f64>>]) -> Result<Polygon<f64>, CatalogError> {
    let mut rings = rings
        .iter()
        .map(|ring| to_line_string(index, ring))
        .collect::<Result<Vec<_>, _>>()?;

    if rings.is_empty() {
        return Ok(Polygon::new(LineString::new(vec![]), vec![]));
    }
    let exterior = rings.remove(0);
    Ok(Polygon::new(exterior, rings))
}

fn to_line_string(index: usize, ring: &[Vec<f64>]) -> Result<LineString<f64>, CatalogError> {
    ring.iter()
        .map(|position| {
            if position.len() < 2 {
                return Err(CatalogError::InvalidPosition { index });
            }
            Ok(Coord {
                x: position[0],
                y: position[1],
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(LineString::new)
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}
