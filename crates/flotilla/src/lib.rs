//! # Flotilla
//!
//! A server for hosting ephemeral multiplayer Battleship games.
//!
//! Players create a game, share its short decimal code out of band, and
//! poll a small REST API with the bearer token the server minted for
//! them. The registry, phase machine, and layout rules live in the
//! `flotilla-registry` and `flotilla-board` crates; this crate wires
//! them to HTTP, the CLI, the admin guard, and the eviction sweeper.

mod auth;
mod config;
mod error;
mod handlers;
mod server;
mod sweep;

pub use auth::{AdminGuard, RequireAdmin};
pub use config::Cli;
pub use error::AppError;
pub use server::{router, AppState, Server, ServerBuilder};
pub use sweep::run_eviction_loop;
