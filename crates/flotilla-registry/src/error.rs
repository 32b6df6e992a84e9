//! Error types for the registry.

use flotilla_board::LayoutError;

use crate::{GameCode, Phase};

/// Errors that can come out of registry operations.
///
/// The HTTP layer maps these onto status codes: capacity → 503, not
/// found → 404, unauthorized → 401, phase/placement/layout problems →
/// 400, internal invariants → 500.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The registry already holds `10^code_length` live games.
    /// Transient; resolves as games end or get evicted.
    #[error("game registry is at capacity ({0} live games)")]
    CapacityExceeded(usize),

    /// No live game has this code, or the game is past WAIT. The two
    /// cases are deliberately indistinguishable to callers: a joiner
    /// learns nothing about codes they don't hold a token for.
    #[error("no joinable game with code {0}")]
    NotFound(GameCode),

    /// The token isn't in the index: never minted, or its game was
    /// removed.
    #[error("unknown player token")]
    Unauthorized,

    /// The operation isn't allowed in the game's current phase, e.g.
    /// submitting ships before a second player joined.
    #[error("not allowed while the game is in phase {0}")]
    IllegalPhase(Phase),

    /// This slot already has an accepted board. Boards are immutable
    /// once stored.
    #[error("ships have already been placed for this player")]
    AlreadyPlaced,

    /// The submitted layout broke a placement rule.
    #[error(transparent)]
    Rejected(#[from] LayoutError),

    /// A programming-error signal, not user-recoverable: retry budget
    /// exhausted or an index inconsistency.
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),
}
