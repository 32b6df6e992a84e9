//! The ship catalog: which ships a fleet contains and how long each is.

/// One ship type in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    /// Display name, used in validation error messages.
    pub name: &'static str,
    /// Number of cells the ship occupies.
    pub length: usize,
}

/// The fixed, process-wide fleet.
///
/// Order matters: a cell value of `n` in a submitted grid refers to the
/// ship at index `n - 1` here (0 denotes an empty cell). No ship has
/// length 1; the validator relies on that to tell a real axis from the
/// ambiguous single-cell case.
pub const SHIP_CATALOG: &[ShipSpec] = &[
    ShipSpec { name: "Carrier", length: 5 },
    ShipSpec { name: "Battleship", length: 4 },
    ShipSpec { name: "Destroyer", length: 3 },
    ShipSpec { name: "Submarine", length: 3 },
    ShipSpec { name: "Patrol Boat", length: 2 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_classic_fleet() {
        let lengths: Vec<usize> = SHIP_CATALOG.iter().map(|s| s.length).collect();
        assert_eq!(lengths, vec![5, 4, 3, 3, 2]);
    }

    #[test]
    fn test_catalog_has_no_length_one_ship() {
        assert!(SHIP_CATALOG.iter().all(|s| s.length >= 2));
    }
}
