use thiserror::Error as ThisError;

///
/// MappingError
///
/// Fatal mapping-configuration failures surfaced at entity build time.
/// Never recoverable at this layer; the domain class's markers must be
/// corrected by the caller.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MappingError {
    #[error(
        "attempt to add explicit id property '{candidate}' but id property '{current}' is already registered as explicit; check the mapping configuration of '{path}'"
    )]
    DuplicateExplicitId {
        path: String,
        current: String,
        candidate: String,
    },
}
