//! Grid types: the submitted board and the per-player shot record.

use serde::Serialize;

use crate::LayoutError;

/// Board edge length. Boards are always square.
pub const BOARD_SIZE: usize = 10;

/// A player's shot record: `true` where a shot has been fired.
///
/// Stored per slot and surfaced through the admin snapshot. No gameplay
/// operation writes to it yet; firing is an unimplemented extension
/// point.
pub type ShotGrid = [[bool; BOARD_SIZE]; BOARD_SIZE];

/// A 10x10 matrix of ship-type ids.
///
/// Cell values are 1-based indices into the ship catalog; 0 means empty.
/// Serializes as a plain array of arrays for the admin snapshot.
/// Inbound grids are never deserialized directly; they arrive as
/// untrusted JSON and go through [`Grid::from_json`] so shape problems
/// surface as [`LayoutError::MalformedGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid(pub [[u8; BOARD_SIZE]; BOARD_SIZE]);

impl Grid {
    /// An all-empty board.
    pub fn empty() -> Self {
        Self([[0; BOARD_SIZE]; BOARD_SIZE])
    }

    /// Builds a grid from an untrusted JSON value.
    ///
    /// The value must be an array of exactly [`BOARD_SIZE`] arrays of
    /// exactly [`BOARD_SIZE`] integers in `0..=255`. Anything else (wrong
    /// shape, floats, strings, negatives) is the one generic
    /// [`LayoutError::MalformedGrid`] failure. Range-checking against
    /// the catalog happens later, in the validator.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, LayoutError> {
        let rows = value.as_array().ok_or(LayoutError::MalformedGrid)?;
        if rows.len() != BOARD_SIZE {
            return Err(LayoutError::MalformedGrid);
        }

        let mut cells = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_array().ok_or(LayoutError::MalformedGrid)?;
            if row.len() != BOARD_SIZE {
                return Err(LayoutError::MalformedGrid);
            }
            for (x, cell) in row.iter().enumerate() {
                let v = cell.as_u64().ok_or(LayoutError::MalformedGrid)?;
                cells[y][x] = u8::try_from(v).map_err(|_| LayoutError::MalformedGrid)?;
            }
        }

        Ok(Self(cells))
    }

    /// Returns the cell at column `x`, row `y`.
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        self.0[y][x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_accepts_empty_board() {
        let value = json!(vec![vec![0u8; BOARD_SIZE]; BOARD_SIZE]);
        let grid = Grid::from_json(&value).expect("should parse");
        assert_eq!(grid, Grid::empty());
    }

    #[test]
    fn test_from_json_rejects_wrong_row_count() {
        let value = json!(vec![vec![0u8; BOARD_SIZE]; BOARD_SIZE - 1]);
        assert_eq!(Grid::from_json(&value), Err(LayoutError::MalformedGrid));
    }

    #[test]
    fn test_from_json_rejects_ragged_rows() {
        let mut rows = vec![vec![0u8; BOARD_SIZE]; BOARD_SIZE];
        rows[3].pop();
        assert_eq!(
            Grid::from_json(&json!(rows)),
            Err(LayoutError::MalformedGrid)
        );
    }

    #[test]
    fn test_from_json_rejects_non_integer_cells() {
        let mut rows = vec![vec![json!(0); BOARD_SIZE]; BOARD_SIZE];
        rows[0][0] = json!("Carrier");
        assert_eq!(
            Grid::from_json(&json!(rows)),
            Err(LayoutError::MalformedGrid)
        );

        rows[0][0] = json!(1.5);
        assert_eq!(
            Grid::from_json(&json!(rows)),
            Err(LayoutError::MalformedGrid)
        );
    }

    #[test]
    fn test_from_json_rejects_negative_and_oversized_values() {
        let mut rows = vec![vec![json!(0); BOARD_SIZE]; BOARD_SIZE];
        rows[0][0] = json!(-1);
        assert_eq!(
            Grid::from_json(&json!(rows)),
            Err(LayoutError::MalformedGrid)
        );

        rows[0][0] = json!(256);
        assert_eq!(
            Grid::from_json(&json!(rows)),
            Err(LayoutError::MalformedGrid)
        );
    }

    #[test]
    fn test_from_json_rejects_non_array_body() {
        assert_eq!(
            Grid::from_json(&json!({"board": []})),
            Err(LayoutError::MalformedGrid)
        );
    }
}
