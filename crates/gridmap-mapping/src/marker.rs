use serde::Serialize;
use std::{collections::BTreeMap, ops::Not};

///
/// Marker
///
/// One marker applied to a class or property, with optional string
/// attributes. The scanning framework hands this layer the merged view;
/// meta-markers are already flattened into the set.
///

#[derive(Clone, Debug, Serialize)]
pub struct Marker {
    pub kind: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Marker {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn string_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

///
/// MarkerSet
///
/// Ordered collection of markers on one class or property.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct MarkerSet {
    pub markers: Vec<Marker>,
}

impl MarkerSet {
    // get
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.kind == kind)
    }

    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.get(kind).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl FromIterator<Marker> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self {
            markers: iter.into_iter().collect(),
        }
    }
}

///
/// ClassSource
///
/// Class-level input metadata: fully qualified path, simple name, and the
/// merged marker set.
///

#[derive(Clone, Debug, Serialize)]
pub struct ClassSource {
    pub path: String,
    pub ident: String,

    #[serde(default, skip_serializing_if = "MarkerSet::is_empty")]
    pub markers: MarkerSet,
}

impl ClassSource {
    /// Build a class source from its path; the ident defaults to the last
    /// path segment.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let ident = path.rsplit("::").next().unwrap_or(path.as_str()).to_string();

        Self {
            path,
            ident,
            markers: MarkerSet::default(),
        }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.markers.push(marker);
        self
    }
}

///
/// PropertySource
///
/// Property-level input metadata for one field/accessor pair.
/// `prefers_accessors` carries the host framework's generic access-mode
/// heuristic verdict for the property.
///

#[derive(Clone, Debug, Serialize)]
pub struct PropertySource {
    pub name: String,
    pub type_path: String,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub has_field: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub has_getter: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub has_setter: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub prefers_accessors: bool,

    #[serde(default, skip_serializing_if = "MarkerSet::is_empty")]
    pub markers: MarkerSet,
}

impl PropertySource {
    /// A property backed by a direct field.
    #[must_use]
    pub fn field(name: impl Into<String>, type_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_path: type_path.into(),
            has_field: true,
            has_getter: false,
            has_setter: false,
            prefers_accessors: false,
            markers: MarkerSet::default(),
        }
    }

    /// A property with no backing field, only a getter/setter pair.
    #[must_use]
    pub fn accessors(name: impl Into<String>, type_path: impl Into<String>) -> Self {
        let mut source = Self::field(name, type_path);
        source.has_field = false;
        source.has_getter = true;
        source.has_setter = true;

        source
    }

    #[must_use]
    pub fn with_getter(mut self) -> Self {
        self.has_getter = true;
        self
    }

    #[must_use]
    pub fn with_setter(mut self) -> Self {
        self.has_setter = true;
        self
    }

    #[must_use]
    pub fn with_getter_setter(self) -> Self {
        self.with_getter().with_setter()
    }

    /// Force accessor-based access regardless of field presence.
    #[must_use]
    pub fn prefer_accessors(mut self) -> Self {
        self.prefers_accessors = true;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.markers.push(marker);
        self
    }
}
