//! Query polygon validation and polygon overlap tests.

mod intersect;
mod validate;

pub use intersect::{intersects, intersects_region, try_intersects};
pub use validate::{validate, MIN_POSITIONS};
