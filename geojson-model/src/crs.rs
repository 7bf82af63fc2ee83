//! Coordinate reference system references.
//!
//! A CRS is attached to a geometry as an opaque reference in the GeoJSON 2008
//! form. The crate stores and round-trips the reference; it does not
//! interpret it.

use serde::{Deserialize, Serialize};

/// Reference to a coordinate reference system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Crs {
    /// CRS identified by a well known name, e.g. an OGC URN.
    Name {
        /// Object holding the name.
        properties: NamedCrs,
    },
    /// CRS identified by a dereferenceable link to its definition.
    Link {
        /// Object holding the link target.
        properties: LinkedCrs,
    },
}

/// Properties of a named CRS reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCrs {
    /// Name of the CRS.
    pub name: String,
}

/// Properties of a linked CRS reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedCrs {
    /// URI of the CRS definition.
    pub href: String,
    /// Hint about the format of the definition, when known.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

impl Crs {
    /// Creates a named CRS reference.
    pub fn named(name: impl Into<String>) -> Self {
        Crs::Name {
            properties: NamedCrs { name: name.into() },
        }
    }

    /// Creates a linked CRS reference without a format hint.
    pub fn linked(href: impl Into<String>) -> Self {
        Crs::Link {
            properties: LinkedCrs {
                href: href.into(),
                link_type: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn named_crs_round_trips() {
        let crs = Crs::named("EPSG:3857");
        let value = serde_json::to_value(&crs).unwrap();
        assert_eq!(
            value,
            json!({"type": "name", "properties": {"name": "EPSG:3857"}})
        );
        assert_eq!(serde_json::from_value::<Crs>(value).unwrap(), crs);
    }

    #[test]
    fn linked_crs_omits_missing_format_hint() {
        let crs = Crs::linked("http://example.com/crs/42");
        assert_eq!(
            serde_json::to_value(&crs).unwrap(),
            json!({"type": "link", "properties": {"href": "http://example.com/crs/42"}})
        );
    }
}
