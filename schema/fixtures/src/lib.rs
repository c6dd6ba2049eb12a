//! Shared domain-object and mapping-metadata fixtures for gridmap test
//! surfaces.

pub mod metadata;
pub mod model;
