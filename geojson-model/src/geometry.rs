//! GeoJSON geometry objects.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::coordinates::{clean_coordinates, CoordinateTree, Coords};
use crate::crs::Crs;
use crate::error::GeoJsonModelError;
use crate::validate::check_coordinates;

/// The six coordinate-bearing GeoJSON geometry kinds.
///
/// The kind determines which structural rules apply to the coordinates and
/// how deep the coordinate tree nests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    /// A single position.
    Point,
    /// A list of positions.
    MultiPoint,
    /// A list of two or more positions.
    LineString,
    /// A list of line strings.
    MultiLineString,
    /// A list of linear rings.
    Polygon,
    /// A list of polygons.
    MultiPolygon,
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
        };
        write!(f, "{name}")
    }
}

/// A WGS84 geometry with normalized coordinates.
///
/// Construction normalizes the raw coordinate input into a canonical tree and
/// may fail if the input contains something that is not a number or a
/// sequence. Structural validation is opt-in: [`Geometry::new`] keeps its
/// coordinates even when they do not match the kind's rules and reports
/// problems through [`Geometry::errors`], while [`Geometry::validated`]
/// escalates the first problem to a construction failure.
///
/// The object is immutable after construction; serializing it produces the
/// conventional GeoJSON form with `"type"` and `"coordinates"` members and an
/// optional `"crs"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    kind: GeometryKind,
    coordinates: Vec<CoordinateTree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crs: Option<Crs>,
}

impl Geometry {
    /// Creates a geometry of `kind` from raw coordinate input.
    ///
    /// The input is normalized with
    /// [`clean_coordinates`](crate::clean_coordinates); its structure is not
    /// checked against the kind's rules.
    pub fn new(
        kind: GeometryKind,
        coordinates: impl Into<Coords>,
    ) -> Result<Self, GeoJsonModelError> {
        Ok(Self {
            kind,
            coordinates: clean_coordinates(&coordinates.into())?,
            crs: None,
        })
    }

    /// Same as [`Geometry::new`], but also rejects coordinates whose
    /// structure does not match `kind`.
    pub fn validated(
        kind: GeometryKind,
        coordinates: impl Into<Coords>,
    ) -> Result<Self, GeoJsonModelError> {
        let geometry = Self::new(kind, coordinates)?;
        match geometry.errors() {
            Some(message) => Err(GeoJsonModelError::Validation { kind, message }),
            None => Ok(geometry),
        }
    }

    /// Creates a `Point` geometry.
    pub fn point(coordinates: impl Into<Coords>) -> Result<Self, GeoJsonModelError> {
        Self::new(GeometryKind::Point, coordinates)
    }

    /// Creates a `MultiPoint` geometry.
    pub fn multi_point(coordinates: impl Into<Coords>) -> Result<Self, GeoJsonModelError> {
        Self::new(GeometryKind::MultiPoint, coordinates)
    }

    /// Creates a `LineString` geometry.
    pub fn line_string(coordinates: impl Into<Coords>) -> Result<Self, GeoJsonModelError> {
        Self::new(GeometryKind::LineString, coordinates)
    }

    /// Creates a `MultiLineString` geometry.
    pub fn multi_line_string(coordinates: impl Into<Coords>) -> Result<Self, GeoJsonModelError> {
        Self::new(GeometryKind::MultiLineString, coordinates)
    }

    /// Creates a `Polygon` geometry.
    pub fn polygon(coordinates: impl Into<Coords>) -> Result<Self, GeoJsonModelError> {
        Self::new(GeometryKind::Polygon, coordinates)
    }

    /// Creates a `MultiPolygon` geometry.
    pub fn multi_polygon(coordinates: impl Into<Coords>) -> Result<Self, GeoJsonModelError> {
        Self::new(GeometryKind::MultiPolygon, coordinates)
    }

    /// Attaches a CRS reference. The reference is stored as is and not
    /// interpreted.
    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    /// Normalized coordinates.
    pub fn coordinates(&self) -> &[CoordinateTree] {
        &self.coordinates
    }

    /// Attached CRS reference, if any.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Description of the first structural problem in the coordinates, or
    /// `None` when they are well formed for the kind. Read-only.
    pub fn errors(&self) -> Option<String> {
        check_coordinates(self.kind, &self.coordinates)
    }

    /// Whether the coordinates have the structure the kind requires.
    pub fn is_valid(&self) -> bool {
        self.errors().is_none()
    }
}
