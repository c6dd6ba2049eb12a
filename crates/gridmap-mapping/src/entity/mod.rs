use crate::{
    error::MappingError,
    marker::{ClassSource, Marker, PropertySource},
    property::PropertyDescriptor,
    region::{RegionMarkerKind, RegionMarkerRegistry, resolve_region_name},
    types::SimpleTypeHolder,
};
use serde::Serialize;


///
/// EntityDescriptor
///
/// Per-class mapping metadata: the resolved region, the registered
/// properties, and the arbitration-chosen identifier property.
///
/// Built serially by one [`EntityBuilder`] and immutable afterwards, so a
/// finished descriptor is safe for unsynchronized concurrent reads.
///

#[derive(Clone, Debug, Serialize)]
pub struct EntityDescriptor {
    path: String,
    ident: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    region_marker_kind: Option<RegionMarkerKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    region_marker: Option<Marker>,

    region_name: String,

    properties: Vec<PropertyDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    id_index: Option<usize>,
}

impl EntityDescriptor {
    /// Fully qualified path of the mapped class.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Simple (unqualified) name of the mapped class.
    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Name of the region this entity's instances are stored in.
    #[must_use]
    pub fn region_name(&self) -> &str {
        &self.region_name
    }

    /// The region marker found on the class, if any.
    #[must_use]
    pub const fn region_marker(&self) -> Option<&Marker> {
        self.region_marker.as_ref()
    }

    #[must_use]
    pub const fn region_marker_kind(&self) -> Option<RegionMarkerKind> {
        self.region_marker_kind
    }

    #[must_use]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    // get
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// The arbitration-chosen identifier property, if one was registered.
    #[must_use]
    pub fn id_property(&self) -> Option<&PropertyDescriptor> {
        self.id_index.and_then(|index| self.properties.get(index))
    }

    #[must_use]
    pub const fn has_id_property(&self) -> bool {
        self.id_index.is_some()
    }
}

///
/// IdArbitration
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IdArbitration {
    /// The candidate becomes the id property, replacing any current one.
    Accept,

    /// The current choice stands; the candidate is not recorded as id.
    Reject,
}

///
/// IdCandidateArbiter
///
/// Capability interface deciding whether a newly discovered property is a
/// better identifier candidate than the one currently recorded. Supplied
/// to [`EntityBuilder`] by composition; an `Err` is the fatal third
/// outcome.
///

pub trait IdCandidateArbiter {
    fn consider(
        &self,
        path: &str,
        current: Option<&PropertyDescriptor>,
        candidate: &PropertyDescriptor,
    ) -> Result<IdArbitration, MappingError>;
}

///
/// GridIdArbiter
///
/// Default policy: an explicit identifier marker is a stronger signal than
/// a reserved name, so it always outranks a conventional choice; two
/// explicit identifiers on one entity are an unresolvable ambiguity.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct GridIdArbiter;

impl IdCandidateArbiter for GridIdArbiter {
    fn consider(
        &self,
        path: &str,
        current: Option<&PropertyDescriptor>,
        candidate: &PropertyDescriptor,
    ) -> Result<IdArbitration, MappingError> {
        if !candidate.is_id() {
            return Ok(IdArbitration::Reject);
        }

        let Some(current) = current else {
            return Ok(IdArbitration::Accept);
        };

        if current.is_explicit_id() {
            if candidate.is_explicit_id() {
                return Err(MappingError::DuplicateExplicitId {
                    path: path.to_string(),
                    current: current.name().to_string(),
                    candidate: candidate.name().to_string(),
                });
            }

            return Ok(IdArbitration::Reject);
        }

        // current qualifies by name only; first conventional wins otherwise
        if candidate.is_explicit_id() {
            Ok(IdArbitration::Accept)
        } else {
            Ok(IdArbitration::Reject)
        }
    }
}

///
/// EntityBuilder
///
/// Serial, single-pass construction of one [`EntityDescriptor`]. Region
/// metadata is resolved once up front; properties are registered in
/// discovery order and arbitrated as they arrive.
///

pub struct EntityBuilder<A = GridIdArbiter> {
    descriptor: EntityDescriptor,
    simple_types: SimpleTypeHolder,
    arbiter: A,
}

impl EntityBuilder {
    #[must_use]
    pub fn new(class: &ClassSource, registry: &RegionMarkerRegistry) -> Self {
        Self::with_arbiter(class, registry, GridIdArbiter)
    }
}

impl<A: IdCandidateArbiter> EntityBuilder<A> {
    #[must_use]
    pub fn with_arbiter(class: &ClassSource, registry: &RegionMarkerRegistry, arbiter: A) -> Self {
        let resolved = registry.resolve(&class.markers);
        let region_marker_kind = resolved.map(|(kind, _)| kind);
        let region_marker = resolved.map(|(_, marker)| marker.clone());
        let region_name = resolve_region_name(&class.ident, region_marker.as_ref());

        Self {
            descriptor: EntityDescriptor {
                path: class.path.clone(),
                ident: class.ident.clone(),
                region_marker_kind,
                region_marker,
                region_name,
                properties: Vec::new(),
                id_index: None,
            },
            simple_types: SimpleTypeHolder::resolve(None),
            arbiter,
        }
    }

    /// Use the host framework's simple type holder instead of the default
    /// grid holder. The holder is grid-extended if it is not already.
    #[must_use]
    pub fn with_simple_types(mut self, source: SimpleTypeHolder) -> Self {
        self.simple_types = SimpleTypeHolder::resolve(Some(source));
        self
    }

    /// Register a newly discovered property, arbitrating it as an id
    /// candidate against the current choice.
    pub fn register(&mut self, source: PropertySource) -> Result<(), MappingError> {
        let candidate = PropertyDescriptor::new(source, &self.simple_types);
        let verdict = self.arbiter.consider(
            &self.descriptor.path,
            self.descriptor.id_property(),
            &candidate,
        )?;

        self.descriptor.properties.push(candidate);

        if verdict == IdArbitration::Accept {
            self.descriptor.id_index = Some(self.descriptor.properties.len() - 1);
        }

        Ok(())
    }

    #[must_use]
    pub fn finish(self) -> EntityDescriptor {
        self.descriptor
    }
}
