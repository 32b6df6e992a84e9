//! The layout validator.
//!
//! Checks a submitted grid against a ship catalog: every catalog ship
//! present with its declared length, lying along exactly one axis, with
//! no gaps. The check order per ship is count → axis → contiguity; the
//! contiguity check (span == length) is only sound because the count
//! check has already pinned the number of cells, so don't reorder them.

use crate::{Grid, LayoutError, ShipSpec, BOARD_SIZE};

/// Validates a board against a catalog.
///
/// Pure and deterministic. Returns the first failure encountered, in
/// catalog order. Overlap is impossible by construction (one id per
/// cell) and adjacency between ships is not a rule, so neither is
/// checked.
pub fn validate_layout(grid: &Grid, catalog: &[ShipSpec]) -> Result<(), LayoutError> {
    // Group cell coordinates by ship id, row-major. The scan order
    // leaves each group sorted along its eventual axis: horizontal
    // ships by x, vertical ships by y.
    let mut groups: Vec<Vec<(usize, usize)>> = vec![Vec::new(); catalog.len()];
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let id = grid.cell(x, y) as usize;
            if id == 0 {
                continue;
            }
            if id > catalog.len() {
                return Err(LayoutError::MalformedGrid);
            }
            groups[id - 1].push((x, y));
        }
    }

    for (ship, cells) in catalog.iter().zip(&groups) {
        if cells.len() != ship.length {
            return Err(LayoutError::WrongLength {
                ship: ship.name,
                expected: ship.length,
                found: cells.len(),
            });
        }

        let (first_x, first_y) = cells[0];
        let horizontal = cells.iter().all(|&(_, y)| y == first_y);
        let vertical = cells.iter().all(|&(x, _)| x == first_x);

        // Exactly one axis must hold. Both true means a single cell
        // (ambiguous, rejected rather than picking an axis), both
        // false means the cells bend across rows and columns.
        if horizontal == vertical {
            return Err(LayoutError::MultiAxis { ship: ship.name });
        }

        let (last_x, last_y) = cells[cells.len() - 1];
        let span = if horizontal {
            last_x - first_x + 1
        } else {
            last_y - first_y + 1
        };
        if span != ship.length {
            return Err(LayoutError::Discontinuous { ship: ship.name });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SHIP_CATALOG;

    /// A catalog with a single five-cell ship, for focused scenarios.
    const CARRIER_ONLY: &[ShipSpec] = &[ShipSpec { name: "Carrier", length: 5 }];

    /// Builds a grid by placing `(id, x, y)` cells on an empty board.
    fn grid_with(cells: &[(u8, usize, usize)]) -> Grid {
        let mut grid = Grid::empty();
        for &(id, x, y) in cells {
            grid.0[y][x] = id;
        }
        grid
    }

    #[test]
    fn test_validate_horizontal_carrier_succeeds() {
        // Five contiguous cells in row 0, columns 0-4.
        let grid = grid_with(&[(1, 0, 0), (1, 1, 0), (1, 2, 0), (1, 3, 0), (1, 4, 0)]);
        assert_eq!(validate_layout(&grid, CARRIER_ONLY), Ok(()));
    }

    #[test]
    fn test_validate_vertical_carrier_succeeds() {
        let grid = grid_with(&[(1, 7, 2), (1, 7, 3), (1, 7, 4), (1, 7, 5), (1, 7, 6)]);
        assert_eq!(validate_layout(&grid, CARRIER_ONLY), Ok(()));
    }

    #[test]
    fn test_validate_gap_fails_with_discontinuity() {
        // Columns 0,1,2,3,5 with a gap at column 4.
        let grid = grid_with(&[(1, 0, 0), (1, 1, 0), (1, 2, 0), (1, 3, 0), (1, 5, 0)]);
        assert_eq!(
            validate_layout(&grid, CARRIER_ONLY),
            Err(LayoutError::Discontinuous { ship: "Carrier" })
        );
    }

    #[test]
    fn test_validate_l_shape_fails_with_multi_axis() {
        let catalog = &[ShipSpec { name: "Battleship", length: 4 }];
        // Three cells in a row plus one below the last: bent ship.
        let grid = grid_with(&[(1, 0, 0), (1, 1, 0), (1, 2, 0), (1, 2, 1)]);
        assert_eq!(
            validate_layout(&grid, catalog),
            Err(LayoutError::MultiAxis { ship: "Battleship" })
        );
    }

    #[test]
    fn test_validate_wrong_count_names_ship_and_lengths() {
        let grid = grid_with(&[(1, 0, 0), (1, 1, 0), (1, 2, 0)]);
        let err = validate_layout(&grid, CARRIER_ONLY).unwrap_err();
        assert_eq!(
            err,
            LayoutError::WrongLength {
                ship: "Carrier",
                expected: 5,
                found: 3
            }
        );
        assert!(err.to_string().contains("Carrier"));
        assert!(err.to_string().contains('5'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_validate_missing_ship_is_wrong_length_zero() {
        assert_eq!(
            validate_layout(&Grid::empty(), CARRIER_ONLY),
            Err(LayoutError::WrongLength {
                ship: "Carrier",
                expected: 5,
                found: 0
            })
        );
    }

    #[test]
    fn test_validate_single_cell_ship_is_ambiguous_not_accepted() {
        // A length-1 "ship" satisfies both axis tests at once; the
        // validator must reject the ambiguity rather than pick one.
        let catalog = &[ShipSpec { name: "Dinghy", length: 1 }];
        let grid = grid_with(&[(1, 4, 4)]);
        assert_eq!(
            validate_layout(&grid, catalog),
            Err(LayoutError::MultiAxis { ship: "Dinghy" })
        );
    }

    #[test]
    fn test_validate_out_of_range_id_is_malformed() {
        let grid = grid_with(&[(2, 0, 0)]);
        assert_eq!(
            validate_layout(&grid, CARRIER_ONLY),
            Err(LayoutError::MalformedGrid)
        );
    }

    #[test]
    fn test_validate_count_check_runs_before_contiguity() {
        // Six carrier cells: five contiguous plus a stray sharing the
        // same row. The count check must catch this before the span
        // arithmetic ever runs.
        let grid = grid_with(&[
            (1, 0, 0),
            (1, 1, 0),
            (1, 2, 0),
            (1, 3, 0),
            (1, 4, 0),
            (1, 8, 0),
        ]);
        assert!(matches!(
            validate_layout(&grid, CARRIER_ONLY),
            Err(LayoutError::WrongLength { found: 6, .. })
        ));
    }

    #[test]
    fn test_validate_full_catalog_layout_succeeds() {
        let grid = grid_with(&[
            // Carrier: row 0, columns 0-4.
            (1, 0, 0), (1, 1, 0), (1, 2, 0), (1, 3, 0), (1, 4, 0),
            // Battleship: column 9, rows 2-5.
            (2, 9, 2), (2, 9, 3), (2, 9, 4), (2, 9, 5),
            // Destroyer: row 7, columns 1-3.
            (3, 1, 7), (3, 2, 7), (3, 3, 7),
            // Submarine: column 5, rows 4-6.
            (4, 5, 4), (4, 5, 5), (4, 5, 6),
            // Patrol Boat: row 9, columns 6-7.
            (5, 6, 9), (5, 7, 9),
        ]);
        assert_eq!(validate_layout(&grid, SHIP_CATALOG), Ok(()));
    }

    #[test]
    fn test_accepted_grid_regroups_to_the_placed_cells() {
        // Re-scanning an accepted grid must reproduce, ship by ship,
        // exactly the coordinate sets it was built from: validation
        // looked at the real placements, not an artifact of scan order.
        let placements: [&[(usize, usize)]; 5] = [
            &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], // Carrier
            &[(9, 2), (9, 3), (9, 4), (9, 5)],         // Battleship
            &[(1, 7), (2, 7), (3, 7)],                 // Destroyer
            &[(5, 4), (5, 5), (5, 6)],                 // Submarine
            &[(6, 9), (7, 9)],                         // Patrol Boat
        ];
        let mut grid = Grid::empty();
        for (i, cells) in placements.iter().enumerate() {
            for &(x, y) in *cells {
                grid.0[y][x] = (i + 1) as u8;
            }
        }
        assert_eq!(validate_layout(&grid, SHIP_CATALOG), Ok(()));

        // The same row-major grouping pass the validator performs.
        let mut groups: Vec<Vec<(usize, usize)>> =
            vec![Vec::new(); SHIP_CATALOG.len()];
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let id = grid.cell(x, y) as usize;
                if id != 0 {
                    groups[id - 1].push((x, y));
                }
            }
        }
        for (ship, (cells, group)) in
            SHIP_CATALOG.iter().zip(placements.iter().zip(&groups))
        {
            assert_eq!(group.as_slice(), *cells, "{}", ship.name);
        }
    }

    #[test]
    fn test_validate_is_deterministic() {
        let grid = grid_with(&[(1, 0, 0), (1, 1, 0), (1, 2, 0), (1, 3, 0), (1, 5, 0)]);
        let first = validate_layout(&grid, CARRIER_ONLY);
        for _ in 0..10 {
            assert_eq!(validate_layout(&grid, CARRIER_ONLY), first);
        }
    }
}
