//! Algorithms over single geometries: structural reduction and bounds.

pub mod bounding_rect;
pub mod reduce;

pub use bounding_rect::{bounding_box, BoundingRect};
pub use reduce::{reduce, reduce_geometries, GeometryReducer};
