//! Error types for layout validation.

/// Why a submitted layout was rejected.
///
/// Each variant carries enough context to render the human-readable
/// reason the API returns with a 400. Structural problems (wrong
/// dimensions, non-integer cells, out-of-range values) all collapse
/// into the deliberately generic [`LayoutError::MalformedGrid`] so the
/// response doesn't enumerate the grid format piecemeal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The submission is not a 10x10 grid of in-range ship ids.
    #[error("not a 10x10 grid of ships")]
    MalformedGrid,

    /// A ship type occupies the wrong number of cells.
    #[error("{ship} must be {expected} cells long, found {found}")]
    WrongLength {
        ship: &'static str,
        expected: usize,
        found: usize,
    },

    /// A ship's cells do not lie along exactly one row or one column.
    #[error("{ship} must lie along a single row or a single column")]
    MultiAxis { ship: &'static str },

    /// A ship's cells lie on one axis but are not consecutive.
    #[error("{ship} must occupy consecutive cells")]
    Discontinuous { ship: &'static str },
}
