//! Area-overlap tests between the query polygon and country regions.
//!
//! Two polygons intersect when their interiors share a point. Contact along
//! an edge or at a vertex only is not an intersection. Failures inside a
//! single test are recovered and count as "no intersection" for that part.
//!
//! A recovered panic still passes through the process panic hook, so the
//! default hook prints its message to stderr each time a malformed ring is
//! tested. The failure itself is only reported through `debug!`.

use std::panic::{self, AssertUnwindSafe};

use geo::kernels::{Kernel, Orientation, RobustKernel};
use geo::relate::IntersectionMatrix;
use geo::{BoundingRect, Coord, Intersects, Polygon, Relate};
use tracing::debug;

use crate::error::GeometryError;
use crate::models::CountryRegion;

/// Test whether two polygons share positive area.
///
/// Errors when either exterior ring is degenerate (all points on one line),
/// or when the relate computation panics on malformed input. Self-intersecting
/// rings are not degenerate: their lobes may cancel in the signed area but
/// still cover ground.
pub fn try_intersects(a: &Polygon<f64>, b: &Polygon<f64>) -> Result<bool, GeometryError> {
    if is_degenerate(a) || is_degenerate(b) {
        return Err(GeometryError::Degenerate);
    }

    // Cheap rejection before the DE-9IM computation
    match (a.bounding_rect(), b.bounding_rect()) {
        (Some(ra), Some(rb)) if ra.intersects(&rb) => {}
        _ => return Ok(false),
    }

    let matrix = guarded(|| a.relate(b))?;
    Ok(matrix.is_intersects() && !matrix.is_touches())
}

/// Like [`try_intersects`], with failures folded into `false`
pub fn intersects(a: &Polygon<f64>, b: &Polygon<f64>) -> bool {
    match try_intersects(a, b) {
        Ok(hit) => hit,
        Err(e) => {
            debug!("Skipping polygon in intersection test: {}", e);
            false
        }
    }
}

/// Test a country's region against the query polygon.
///
/// A multi-part region matches as soon as one part does.
pub fn intersects_region(region: &CountryRegion, query: &Polygon<f64>) -> bool {
    match region {
        CountryRegion::Single(polygon) => intersects(polygon, query),
        CountryRegion::Multi(parts) => parts.iter().any(|part| intersects(part, query)),
    }
}

/// An exterior ring with no two distinct points, or whose points all lie on one line
fn is_degenerate(polygon: &Polygon<f64>) -> bool {
    let ring = &polygon.exterior().0;
    let Some(&origin) = ring.first() else {
        return true;
    };
    let Some(&direction) = ring.iter().find(|c| **c != origin) else {
        return true;
    };
    ring.iter().all(|&c: &Coord<f64>| {
        <RobustKernel as Kernel<f64>>::orient2d(origin, direction, c) == Orientation::Collinear
    })
}

/// Run a relate computation, turning a panic into [`GeometryError::Computation`]
fn guarded<F: FnOnce() -> IntersectionMatrix>(f: F) -> Result<IntersectionMatrix, GeometryError> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .map_err(|payload| GeometryError::Computation(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
