//! Error type used by the crate.

use serde_json::Value;
use thiserror::Error;

use crate::geometry::GeometryKind;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoJsonModelError {
    /// A coordinate leaf was not a JSON number. Raised during normalization;
    /// carries the offending value.
    #[error("{0} is not a JSON compliant number")]
    NotANumber(Value),

    /// The raw coordinate input itself could not be iterated as a sequence.
    #[error("{0} is not a sequence of coordinates")]
    NotASequence(Value),

    /// Coordinates do not have the structure the geometry kind requires.
    /// Only raised when validation is requested at construction time.
    #[error("invalid {kind} coordinates: {message}")]
    Validation {
        /// Kind of the geometry that failed validation.
        kind: GeometryKind,
        /// First structural problem found.
        message: String,
    },

    /// One or more members of a geometry collection failed validation.
    #[error("invalid geometries in collection: {}", .0.join("; "))]
    CollectionValidation(Vec<String>),
}
