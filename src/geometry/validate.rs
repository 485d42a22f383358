//! Validation of raw query coordinates.

use geo::{Coord, LineString, Polygon};

use crate::error::PolygonError;

/// Minimum number of positions a caller has to supply
pub const MIN_POSITIONS: usize = 4;

/// Turn raw `[lon, lat]` pairs into a polygon ready for intersection tests.
///
/// Fails when fewer than [`MIN_POSITIONS`] pairs are given, when a pair does
/// not hold exactly two values, or when a value is NaN or infinite. An open
/// ring is closed by repeating its first coordinate; the count check applies
/// to the pairs as given. Coordinate order and winding are preserved.
pub fn validate<P: AsRef<[f64]>>(coordinates: &[P]) -> Result<Polygon<f64>, PolygonError> {
    if coordinates.len() < MIN_POSITIONS {
        return Err(PolygonError::TooFewPoints {
            count: coordinates.len(),
        });
    }

    let mut ring = Vec::with_capacity(coordinates.len() + 1);
    for (index, pair) in coordinates.iter().enumerate() {
        let pair = pair.as_ref();
        if pair.len() != 2 {
            return Err(PolygonError::InvalidArity {
                index,
                len: pair.len(),
            });
        }
        if !pair[0].is_finite() || !pair[1].is_finite() {
            return Err(PolygonError::NonFinite { index });
        }
        ring.push(Coord {
            x: pair[0],
            y: pair[1],
        });
    }

    // Close the ring if needed
    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }

    Ok(Polygon::new(LineString::new(ring), vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_ring_kept() {
        let coords = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]];
        let polygon = validate(&coords).unwrap();
        assert_eq!(polygon.exterior().0.len(), 4);
        assert!(polygon.interiors().is_empty());
    }

    #[test]
    fn test_open_ring_closed() {
        let coords = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let polygon = validate(&coords).unwrap();
        let ring = &polygon.exterior().0;
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
        assert_eq!(ring[3], Coord { x: 0.0, y: 1.0 });
    }

    #[test]
    fn test_too_few_points() {
        let coords = [[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]];
        assert_eq!(
            validate(&coords),
            Err(PolygonError::TooFewPoints { count: 3 })
        );

        let empty: [[f64; 2]; 0] = [];
        assert_eq!(
            validate(&empty),
            Err(PolygonError::TooFewPoints { count: 0 })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let nan = [[0.0, 0.0], [f64::NAN, 0.0], [1.0, 1.0], [0.0, 0.0]];
        assert_eq!(validate(&nan), Err(PolygonError::NonFinite { index: 1 }));

        let inf = [[0.0, 0.0], [1.0, 0.0], [1.0, f64::NEG_INFINITY], [0.0, 0.0]];
        assert_eq!(validate(&inf), Err(PolygonError::NonFinite { index: 2 }));
    }

    #[test]
    fn test_arity_rejected() {
        let coords: Vec<Vec<f64>> = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0, 12.0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
        ];
        assert_eq!(
            validate(&coords),
            Err(PolygonError::InvalidArity { index: 1, len: 3 })
        );

        let short: Vec<Vec<f64>> = vec![vec![0.0, 0.0], vec![1.0], vec![1.0, 1.0], vec![0.0, 0.0]];
        assert_eq!(
            validate(&short),
            Err(PolygonError::InvalidArity { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_winding_preserved() {
        let clockwise = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
        let polygon = validate(&clockwise).unwrap();
        assert_eq!(polygon.exterior().0[1], Coord { x: 0.0, y: 1.0 });
    }
}
