use serde::Serialize;
use std::collections::BTreeSet;

/// Scalar type idents every holder treats as simple.
pub const DEFAULT_SIMPLE_TYPES: &[&str] = &[
    "Blob",
    "Bool",
    "Date",
    "Float32",
    "Float64",
    "Int8",
    "Int16",
    "Int32",
    "Int64",
    "Text",
    "Timestamp",
    "Uint8",
    "Uint16",
    "Uint32",
    "Uint64",
];

/// Grid-specific additions: the arbitrary-precision numerics the grid
/// stores natively.
pub const GRID_SIMPLE_TYPES: &[&str] = &["BigInt", "Decimal"];

///
/// SimpleTypeHolder
///
/// Set of type-path idents the grid treats as simple (directly storable).
/// Holders coming from the host framework are extended with the grid
/// additions exactly once; an already grid-extended holder passes through
/// untouched.
///

#[derive(Clone, Debug, Serialize)]
pub struct SimpleTypeHolder {
    types: BTreeSet<String>,
    grid_extended: bool,
}

impl SimpleTypeHolder {
    /// The default grid holder: base scalar idents plus the grid additions.
    #[must_use]
    pub fn new() -> Self {
        Self::of(DEFAULT_SIMPLE_TYPES.iter().copied()).into_grid_extended()
    }

    /// A bare holder over the given idents, without the grid additions.
    #[must_use]
    pub fn of(types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            grid_extended: false,
        }
    }

    /// Resolve the holder used for property construction.
    #[must_use]
    pub fn resolve(source: Option<Self>) -> Self {
        match source {
            Some(holder) if holder.grid_extended => holder,
            Some(holder) => holder.into_grid_extended(),
            None => Self::new(),
        }
    }

    #[must_use]
    pub fn is_simple(&self, type_path: &str) -> bool {
        self.types.contains(type_path)
    }

    #[must_use]
    pub const fn is_grid_extended(&self) -> bool {
        self.grid_extended
    }

    fn into_grid_extended(mut self) -> Self {
        self.types
            .extend(GRID_SIMPLE_TYPES.iter().map(ToString::to_string));
        self.grid_extended = true;

        self
    }
}

impl Default for SimpleTypeHolder {
    fn default() -> Self {
        Self::new()
    }
}
