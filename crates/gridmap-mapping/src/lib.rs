//! Mapping metadata layer binding a data-grid client's region/entity model
//! to a generic persistence-mapping framework.
//!
//! The external scanning framework supplies merged class and property
//! metadata; this crate resolves the storage region each entity maps to,
//! arbitrates which property is the entity identifier, and wraps each
//! field/accessor pair in a descriptor with grid-specific simple-type
//! rules. No reflection, I/O, or storage happens here.

pub mod entity;
pub mod error;
pub mod interest;
pub mod marker;
pub mod property;
pub mod region;
pub mod types;

///
/// CONSTANTS
///

/// Property names that qualify as a conventional identifier absent any
/// explicit identifier marker.
pub const RESERVED_ID_NAMES: &[&str] = &["id"];

/// Marker kind declaring a property as the explicit entity identifier.
pub const ID_MARKER_KIND: &str = "Id";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        entity::{EntityBuilder, EntityDescriptor, GridIdArbiter, IdArbitration, IdCandidateArbiter},
        error::MappingError,
        marker::{ClassSource, Marker, MarkerSet, PropertySource},
        property::{Association, PropertyDescriptor},
        region::{RegionMarkerKind, RegionMarkerRegistry},
        types::SimpleTypeHolder,
    };
}
