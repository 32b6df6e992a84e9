//! Board rules for Flotilla: the ship catalog, the 10x10 grid, and the
//! layout validator.
//!
//! Everything in this crate is pure: no I/O, no clocks, no randomness.
//! The registry calls [`validate_layout`] before it stores a submitted
//! board, and the same grid/catalog always produce the same verdict.
//!
//! # Key types
//!
//! - [`ShipSpec`] / [`SHIP_CATALOG`]: the fixed fleet and its lengths
//! - [`Grid`]: a 10x10 matrix of ship-type ids (0 = empty)
//! - [`ShotGrid`]: per-player shot record (extension point, unused by
//!   the current rules)
//! - [`LayoutError`]: the human-readable rejection reasons

mod catalog;
mod error;
mod grid;
mod validate;

pub use catalog::{ShipSpec, SHIP_CATALOG};
pub use error::LayoutError;
pub use grid::{Grid, ShotGrid, BOARD_SIZE};
pub use validate::validate_layout;
