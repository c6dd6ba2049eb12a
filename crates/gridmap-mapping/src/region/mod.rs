use crate::marker::{Marker, MarkerSet};
use derive_more::FromStr;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(test)]
mod tests;

/// Marker attribute carrying the declared region name.
pub const VALUE_ATTRIBUTE: &str = "value";

///
/// RegionMarkerKind
///
/// Recognized region-declaring marker kinds. Variant order here is not
/// semantic; resolution priority comes from [`RegionMarkerRegistry`].
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum RegionMarkerKind {
    ClientRegion,
    LocalRegion,
    PartitionRegion,
    Region,
    ReplicateRegion,
}

impl RegionMarkerKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClientRegion => "ClientRegion",
            Self::LocalRegion => "LocalRegion",
            Self::PartitionRegion => "PartitionRegion",
            Self::Region => "Region",
            Self::ReplicateRegion => "ReplicateRegion",
        }
    }
}

impl fmt::Display for RegionMarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical resolution priority: the generic region marker first, then the
/// shortcut kinds in the order the grid client declares them.
pub const REGION_MARKER_PRIORITY: [RegionMarkerKind; 5] = [
    RegionMarkerKind::Region,
    RegionMarkerKind::ClientRegion,
    RegionMarkerKind::LocalRegion,
    RegionMarkerKind::PartitionRegion,
    RegionMarkerKind::ReplicateRegion,
];

///
/// RegionMarkerRegistry
///
/// Explicit, injectable ordered list of recognized region marker kinds.
/// The first kind present on a class wins; reordering the registry changes
/// resolution priority, not class metadata.
///

#[derive(Clone, Debug, Serialize)]
pub struct RegionMarkerRegistry {
    kinds: Vec<RegionMarkerKind>,
}

impl RegionMarkerRegistry {
    #[must_use]
    pub fn new(kinds: impl IntoIterator<Item = RegionMarkerKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn kinds(&self) -> &[RegionMarkerKind] {
        &self.kinds
    }

    /// Return the first recognized region marker present on the class.
    #[must_use]
    pub fn resolve<'a>(&self, markers: &'a MarkerSet) -> Option<(RegionMarkerKind, &'a Marker)> {
        self.kinds
            .iter()
            .find_map(|kind| markers.get(kind.as_str()).map(|marker| (*kind, marker)))
    }
}

impl Default for RegionMarkerRegistry {
    fn default() -> Self {
        Self::new(REGION_MARKER_PRIORITY)
    }
}

/// Resolve the effective region name for a class.
///
/// The marker's declared `value` wins when present and non-empty; an empty
/// declared value is identical to an absent marker and falls through to the
/// class ident.
#[must_use]
pub fn resolve_region_name(ident: &str, marker: Option<&Marker>) -> String {
    marker
        .and_then(|m| m.string_attribute(VALUE_ATTRIBUTE))
        .filter(|value| !value.is_empty())
        .map_or_else(|| ident.to_string(), ToString::to_string)
}
