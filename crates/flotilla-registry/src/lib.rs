//! Game session registry for Flotilla.
//!
//! This crate owns everything about live games:
//!
//! 1. **Identity**: minting collision-free game codes and player tokens
//! 2. **Lifecycle**: create, join, board submission, removal
//! 3. **Phases**: the WAIT → LAYOUT → PLAYER0/PLAYER1 → END machine
//! 4. **Eviction**: sweeping games idle beyond the configured timeout
//!
//! # How it fits in the stack
//!
//! ```text
//! HTTP layer (above)  ← maps registry errors to status codes
//!     ↕
//! Registry (this crate)  ← owns the code and token indexes
//!     ↕
//! Board rules (below)  ← pure layout validation, no state
//! ```

mod error;
mod game;
mod ids;
mod phase;
mod registry;
mod types;

pub use error::RegistryError;
pub use game::{Game, GameSnapshot, PlayerStatus, RegistryConfig};
pub use phase::Phase;
pub use registry::GameRegistry;
pub use types::{GameCode, PlayerToken, Slot};
