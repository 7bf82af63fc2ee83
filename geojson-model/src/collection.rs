//! Collections of geometry objects.

use serde::{Deserialize, Serialize};

use crate::error::GeoJsonModelError;
use crate::geometry::Geometry;

/// An ordered collection of geometries, without coordinates of its own.
///
/// Validity of a collection is the union of its members' validities; see
/// [`GeometryCollection::errors`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct GeometryCollection {
    /// Member geometries, in insertion order.
    pub geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Creates a collection from `geometries`.
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self { geometries }
    }

    /// Same as [`GeometryCollection::new`], but rejects the collection if any
    /// member has invalid coordinates.
    pub fn validated(geometries: Vec<Geometry>) -> Result<Self, GeoJsonModelError> {
        let collection = Self::new(geometries);
        let errors = collection.errors();
        if errors.is_empty() {
            Ok(collection)
        } else {
            Err(GeoJsonModelError::CollectionValidation(errors))
        }
    }

    /// Collects the validation message of every invalid member, in member
    /// order.
    ///
    /// Unlike the per-kind checks this does not stop at the first problem;
    /// every member is inspected and each problem is also logged. An empty
    /// result means the whole collection is valid.
    pub fn errors(&self) -> Vec<String> {
        self.geometries
            .iter()
            .filter_map(|geometry| {
                let error = geometry.errors();
                if let Some(message) = &error {
                    log::warn!("invalid {} in collection: {message}", geometry.kind());
                }
                error
            })
            .collect()
    }
}

impl FromIterator<Geometry> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = Geometry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
