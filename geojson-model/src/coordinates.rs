//! Coordinate trees and the normalization that produces them.
//!
//! A geometry stores its coordinates as a [`CoordinateTree`]: a nested
//! sequence whose leaves are JSON numbers. How deep the nesting goes depends
//! on the geometry kind (a point is a single position, a polygon is a list of
//! rings of positions), but the tree itself is untyped — structure is checked
//! separately by the [`validate`](crate::validate) module.
//!
//! Trees are produced from arbitrary raw input ([`Coords`]) by
//! [`clean_coordinates`], which walks the input depth first, splices in the
//! coordinates of embedded geometries and rejects anything that is not a
//! number or a sequence.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::GeoJsonModelError;
use crate::geometry::{Geometry, GeometryKind};

/// Canonical coordinates of a geometry.
///
/// After normalization every leaf is a [`Number`]; nothing else can appear in
/// the tree. The tree is never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateTree {
    /// A single numeric leaf.
    Number(Number),
    /// A nested sequence of coordinate trees.
    Sequence(Vec<CoordinateTree>),
}

impl CoordinateTree {
    /// Whether this node is a numeric leaf.
    pub fn is_number(&self) -> bool {
        matches!(self, CoordinateTree::Number(_))
    }

    /// Elements of this node, or `None` for a numeric leaf.
    pub fn as_sequence(&self) -> Option<&[CoordinateTree]> {
        match self {
            CoordinateTree::Sequence(items) => Some(items),
            CoordinateTree::Number(_) => None,
        }
    }

    /// Compares two trees by numeric value, so the integer `1` and the float
    /// `1.0` count as the same coordinate. This is the equality used for ring
    /// closure checks.
    pub fn value_eq(&self, other: &CoordinateTree) -> bool {
        match (self, other) {
            (CoordinateTree::Number(a), CoordinateTree::Number(b)) => numbers_eq(a, b),
            (CoordinateTree::Sequence(a), CoordinateTree::Sequence(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.value_eq(b))
            }
            _ => false,
        }
    }
}

fn numbers_eq(a: &Number, b: &Number) -> bool {
    // Same representation first; otherwise compare as floats so that mixed
    // integer/float rings still close.
    a == b
        || match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
}

/// Raw coordinate input accepted by geometry constructors.
///
/// Anything that ends up as [`Coords::Other`] is rejected by
/// [`clean_coordinates`] with the offending value in the error.
#[derive(Debug, Clone, PartialEq)]
pub enum Coords {
    /// A single number.
    Number(Number),
    /// A nested sequence of raw inputs.
    Sequence(Vec<Coords>),
    /// An embedded geometry whose stored coordinates are spliced into the
    /// output in its place.
    Geometry(Geometry),
    /// Any other JSON value.
    Other(Value),
}

impl Coords {
    /// Elements to scan during normalization.
    fn items(&self) -> Result<&[Coords], GeoJsonModelError> {
        match self {
            Coords::Sequence(items) => Ok(items),
            // A geometry has no elements of its own; a bare point is handled
            // by the pre-pass in `clean_coordinates`.
            Coords::Geometry(geometry) if geometry.kind() == GeometryKind::Point => Ok(&[]),
            Coords::Geometry(geometry) => Err(GeoJsonModelError::NotASequence(
                serde_json::to_value(geometry).unwrap_or(Value::Null),
            )),
            Coords::Number(number) => {
                Err(GeoJsonModelError::NotASequence(Value::Number(number.clone())))
            }
            Coords::Other(value) => Err(GeoJsonModelError::NotASequence(value.clone())),
        }
    }
}

impl From<Value> for Coords {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(number) => Coords::Number(number),
            Value::Array(items) => Coords::Sequence(items.into_iter().map(Coords::from).collect()),
            other => Coords::Other(other),
        }
    }
}

impl From<Geometry> for Coords {
    fn from(geometry: Geometry) -> Self {
        Coords::Geometry(geometry)
    }
}

impl From<Vec<Coords>> for Coords {
    fn from(items: Vec<Coords>) -> Self {
        Coords::Sequence(items)
    }
}

impl From<f64> for Coords {
    fn from(value: f64) -> Self {
        // NaN and infinities are not JSON numbers; `Value::from` turns them
        // into null, which normalization then rejects.
        Coords::from(Value::from(value))
    }
}

impl From<i64> for Coords {
    fn from(value: i64) -> Self {
        Coords::Number(value.into())
    }
}

impl From<CoordinateTree> for Coords {
    fn from(tree: CoordinateTree) -> Self {
        match tree {
            CoordinateTree::Number(number) => Coords::Number(number),
            CoordinateTree::Sequence(items) => {
                Coords::Sequence(items.into_iter().map(Coords::from).collect())
            }
        }
    }
}

impl From<Vec<CoordinateTree>> for Coords {
    fn from(items: Vec<CoordinateTree>) -> Self {
        Coords::Sequence(items.into_iter().map(Coords::from).collect())
    }
}

impl FromIterator<Coords> for Coords {
    fn from_iter<T: IntoIterator<Item = Coords>>(iter: T) -> Self {
        Coords::Sequence(iter.into_iter().collect())
    }
}

/// Normalizes raw coordinate input into canonical form.
///
/// The input is walked depth first, preserving order:
/// * a nested sequence is recursed into;
/// * an embedded geometry contributes its stored (already canonical)
///   coordinates, losing one level of wrapping;
/// * a number is kept as is;
/// * anything else fails with [`GeoJsonModelError::NotANumber`] carrying the
///   offending value.
///
/// As a compatibility pre-pass, raw input that is itself a point geometry
/// contributes that point's position as a single contained coordinate.
///
/// Empty input normalizes to an empty tree. The input is never mutated; a
/// fresh tree is built.
pub fn clean_coordinates(coords: &Coords) -> Result<Vec<CoordinateTree>, GeoJsonModelError> {
    let mut cleaned = Vec::new();

    // A bare point geometry stands in for its single position.
    if let Coords::Geometry(geometry) = coords {
        if geometry.kind() == GeometryKind::Point {
            cleaned.push(CoordinateTree::Sequence(geometry.coordinates().to_vec()));
        }
    }

    for item in coords.items()? {
        match item {
            Coords::Sequence(_) => {
                cleaned.push(CoordinateTree::Sequence(clean_coordinates(item)?));
            }
            Coords::Geometry(geometry) => {
                cleaned.push(CoordinateTree::Sequence(geometry.coordinates().to_vec()));
            }
            Coords::Number(number) => cleaned.push(CoordinateTree::Number(number.clone())),
            Coords::Other(value) => {
                return Err(GeoJsonModelError::NotANumber(value.clone()));
            }
        }
    }

    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn clean(value: Value) -> Result<Vec<CoordinateTree>, GeoJsonModelError> {
        clean_coordinates(&Coords::from(value))
    }

    #[test]
    fn numbers_pass_through_unchanged() {
        let cleaned = clean(json!([1, 2.5, -3])).unwrap();
        assert_eq!(
            serde_json::to_value(&cleaned).unwrap(),
            json!([1, 2.5, -3])
        );
    }

    #[test]
    fn empty_input_normalizes_to_empty_tree() {
        assert_eq!(clean(json!([])).unwrap(), vec![]);
    }

    #[test]
    fn nested_sequences_are_recursed() {
        let cleaned = clean(json!([[0, 0], [1, [2, 3]]])).unwrap();
        assert_eq!(
            serde_json::to_value(&cleaned).unwrap(),
            json!([[0, 0], [1, [2, 3]]])
        );
    }

    #[test]
    fn non_numbers_are_rejected_with_the_value() {
        assert_matches!(
            clean(json!(["abc"])),
            Err(GeoJsonModelError::NotANumber(Value::String(s))) if s == "abc"
        );
        assert_matches!(
            clean(json!([[1, true]])),
            Err(GeoJsonModelError::NotANumber(Value::Bool(true)))
        );
        assert_matches!(
            clean(json!([null])),
            Err(GeoJsonModelError::NotANumber(Value::Null))
        );
    }

    #[test]
    fn nan_is_not_a_json_number() {
        let coords = Coords::Sequence(vec![Coords::from(f64::NAN)]);
        assert_matches!(
            clean_coordinates(&coords),
            Err(GeoJsonModelError::NotANumber(Value::Null))
        );
    }

    #[test]
    fn top_level_scalar_is_not_a_sequence() {
        assert_matches!(
            clean(json!(7)),
            Err(GeoJsonModelError::NotASequence(_))
        );
        assert_matches!(
            clean(json!("coords")),
            Err(GeoJsonModelError::NotASequence(_))
        );
    }

    #[test]
    fn embedded_geometry_contributes_its_coordinates() {
        let point = Geometry::point(json!([1, 2])).unwrap();
        let coords = Coords::Sequence(vec![point.into(), Coords::from(json!([3, 4]))]);
        let cleaned = clean_coordinates(&coords).unwrap();
        assert_eq!(
            serde_json::to_value(&cleaned).unwrap(),
            json!([[1, 2], [3, 4]])
        );
    }

    #[test]
    fn bare_point_input_becomes_a_single_position() {
        let point = Geometry::point(json!([1, 2])).unwrap();
        let cleaned = clean_coordinates(&point.into()).unwrap();
        assert_eq!(serde_json::to_value(&cleaned).unwrap(), json!([[1, 2]]));
    }

    #[test]
    fn bare_non_point_geometry_is_rejected() {
        let line = Geometry::line_string(json!([[0, 0], [1, 1]])).unwrap();
        assert_matches!(
            clean_coordinates(&line.into()),
            Err(GeoJsonModelError::NotASequence(_))
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = clean(json!([[0, 0], [1.5, 2], [3, 4]])).unwrap();
        let twice = clean_coordinates(&Coords::from(once.clone())).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn value_eq_ignores_numeric_representation() {
        let int = clean(json!([[0, 0]])).unwrap();
        let float = clean(json!([[0.0, 0.0]])).unwrap();
        assert!(int[0].value_eq(&float[0]));
        assert_ne!(int, float);
    }

    #[test]
    fn value_eq_rejects_different_shapes() {
        let cleaned = clean(json!([[0, 0], 0, [0, 0, 0]])).unwrap();
        assert!(!cleaned[0].value_eq(&cleaned[1]));
        assert!(!cleaned[0].value_eq(&cleaned[2]));
    }
}
