//! GeoJSON geometry objects as structured values.
//!
//! This crate models the seven GeoJSON geometry types as plain data: raw
//! coordinate input is normalized into a canonical nested-sequence tree at
//! construction time, and each geometry kind carries a structural validator
//! that reports the first problem with its coordinates. It is a data-model
//! and validation layer, not a geometric engine: no areas, intersections,
//! projections or spatial indexing.
//!
//! ```
//! use geojson_model::{Geometry, GeometryKind};
//! use serde_json::json;
//!
//! let point = Geometry::validated(GeometryKind::Point, json!([125.6, 10.1]))?;
//! assert!(point.is_valid());
//! assert_eq!(
//!     serde_json::to_value(&point)?,
//!     json!({"type": "Point", "coordinates": [125.6, 10.1]})
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod collection;
pub mod coordinates;
pub mod crs;
pub mod error;
pub mod geometry;
pub mod validate;

pub use collection::GeometryCollection;
pub use coordinates::{clean_coordinates, CoordinateTree, Coords};
pub use crs::Crs;
pub use error::GeoJsonModelError;
pub use geometry::{Geometry, GeometryKind};
