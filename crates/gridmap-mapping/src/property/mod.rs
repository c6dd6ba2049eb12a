use crate::{
    ID_MARKER_KIND, RESERVED_ID_NAMES, marker::PropertySource, types::SimpleTypeHolder,
};
use serde::Serialize;


///
/// PropertyDescriptor
///
/// Mapped metadata for one field/accessor pair of a persistent entity.
/// Marker data is static, so the identifier flags are fixed at
/// construction; the descriptor is immutable thereafter.
///

#[derive(Clone, Debug, Serialize)]
pub struct PropertyDescriptor {
    source: PropertySource,
    explicit_id: bool,
    simple_type: bool,
}

impl PropertyDescriptor {
    #[must_use]
    pub fn new(source: PropertySource, simple_types: &SimpleTypeHolder) -> Self {
        let explicit_id = source.markers.contains(ID_MARKER_KIND);
        let simple_type = simple_types.is_simple(&source.type_path);

        Self {
            source,
            explicit_id,
            simple_type,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.source.name
    }

    #[must_use]
    pub fn type_path(&self) -> &str {
        &self.source.type_path
    }

    #[must_use]
    pub const fn source(&self) -> &PropertySource {
        &self.source
    }

    /// True iff the property carries the explicit identifier marker.
    #[must_use]
    pub const fn is_explicit_id(&self) -> bool {
        self.explicit_id
    }

    /// True iff the property identifies the entity, explicitly or by
    /// reserved name.
    #[must_use]
    pub fn is_id(&self) -> bool {
        self.explicit_id || RESERVED_ID_NAMES.contains(&self.name())
    }

    /// True iff the property must be accessed through its accessor
    /// methods. A property with no backing field is never accessed
    /// directly, even when only one side of the accessor pair exists.
    #[must_use]
    pub const fn uses_accessor_methods(&self) -> bool {
        self.source.prefers_accessors
            || (!self.source.has_field && (self.source.has_getter || self.source.has_setter))
    }

    #[must_use]
    pub const fn is_simple_type(&self) -> bool {
        self.simple_type
    }

    /// One-to-one association view of the property. There is no
    /// target-side property; bidirectional and collection-valued
    /// associations are not modeled.
    #[must_use]
    pub const fn association(&self) -> Association<'_> {
        Association {
            source: self,
            target: None,
        }
    }
}

///
/// Association
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Association<'a> {
    pub source: &'a PropertyDescriptor,
    pub target: Option<&'a PropertyDescriptor>,
}
