//! Structural validators for coordinate trees.
//!
//! Each checker is a pure function over canonical coordinates that returns
//! the first problem it finds as a message, or `None` when the structure is
//! well formed for the geometry kind. Checkers never mutate the tree and
//! never construct errors themselves; escalating a message to a hard failure
//! is the caller's choice (see [`Geometry::validated`](crate::Geometry::validated)).

use crate::coordinates::CoordinateTree;
use crate::geometry::GeometryKind;

/// Checks `coordinates` against the structural rules of `kind`.
///
/// Returns a description of the first problem found, or `None` when the
/// coordinates are well formed.
pub fn check_coordinates(kind: GeometryKind, coordinates: &[CoordinateTree]) -> Option<String> {
    match kind {
        GeometryKind::Point => check_position_items(coordinates),
        GeometryKind::MultiPoint => check_list_errors(check_position, coordinates),
        GeometryKind::LineString => check_line_string_items(coordinates),
        GeometryKind::MultiLineString => check_list_errors(check_line_string, coordinates),
        GeometryKind::Polygon => check_polygon_items(coordinates),
        GeometryKind::MultiPolygon => check_list_errors(check_polygon, coordinates),
    }
}

/// Applies `check` to every element in order and returns the first non-empty
/// result. Scanning stops at the first problem.
fn check_list_errors<F>(check: F, items: &[CoordinateTree]) -> Option<String>
where
    F: Fn(&CoordinateTree) -> Option<String>,
{
    items.iter().find_map(check)
}

/// Checks that `coord` is a single position: a sequence of exactly 2 or 3
/// numbers.
pub fn check_position(coord: &CoordinateTree) -> Option<String> {
    match coord.as_sequence() {
        Some(items) => check_position_items(items),
        None => Some("each position must be a list".to_string()),
    }
}

fn check_position_items(items: &[CoordinateTree]) -> Option<String> {
    if !(items.len() == 2 || items.len() == 3) {
        return Some("a position must have exactly 2 or 3 values".to_string());
    }
    for item in items {
        if !item.is_number() {
            return Some("each value in a position must be a number".to_string());
        }
    }
    None
}

/// Checks that `coord` is a line: a sequence of two or more positions.
pub fn check_line_string(coord: &CoordinateTree) -> Option<String> {
    match coord.as_sequence() {
        Some(items) => check_line_string_items(items),
        None => Some("each line must be a list of positions".to_string()),
    }
}

fn check_line_string_items(items: &[CoordinateTree]) -> Option<String> {
    if items.len() < 2 {
        return Some(
            "the \"coordinates\" member must be an array of two or more positions".to_string(),
        );
    }
    check_list_errors(check_position, items)
}

/// Checks that `coord` is a sequence of linear rings, each with at least 4
/// positions and with equivalent first and last positions.
pub fn check_polygon(coord: &CoordinateTree) -> Option<String> {
    match coord.as_sequence() {
        Some(rings) => check_polygon_items(rings),
        None => Some("each polygon must be a list of linear rings".to_string()),
    }
}

fn check_polygon_items(rings: &[CoordinateTree]) -> Option<String> {
    // Ring length is reported before closure; the two reasons are never
    // combined.
    let lengths = rings
        .iter()
        .all(|ring| ring.as_sequence().is_some_and(|ring| ring.len() >= 4));
    if !lengths {
        return Some("a LinearRing must contain 4 or more positions".to_string());
    }

    let isring = rings.iter().all(|ring| match ring.as_sequence() {
        Some(items) => items
            .first()
            .zip(items.last())
            .is_some_and(|(first, last)| first.value_eq(last)),
        None => false,
    });
    if !isring {
        return Some("the first and last positions in a LinearRing must be equivalent".to_string());
    }

    None
}
