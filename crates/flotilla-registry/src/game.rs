//! Game types: the live session record, its config, and snapshots.

use std::time::{Duration, Instant};

use flotilla_board::{Grid, ShotGrid, BOARD_SIZE};
use serde::Serialize;

use crate::{GameCode, Phase, PlayerToken, Slot};

// ---------------------------------------------------------------------------
// RegistryConfig
// ---------------------------------------------------------------------------

/// Configuration for the registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Number of decimal digits in a game code. The capacity ceiling is
    /// `10^code_length`.
    pub code_length: usize,

    /// Seconds a game may sit untouched before the eviction sweep
    /// removes it. 0 means everything is stale on the next sweep.
    pub idle_timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            code_length: 4,
            idle_timeout_secs: 600,
        }
    }
}

impl RegistryConfig {
    /// Longest supported code. `10^9` sessions is already far past
    /// what a single process will hold; longer codes would overflow
    /// the capacity arithmetic on 32-bit targets.
    pub const MAX_CODE_LENGTH: usize = 9;

    /// Clamp out-of-range values so the config is safe to use.
    ///
    /// Called by [`GameRegistry::new`](crate::GameRegistry::new).
    /// `code_length` is forced into `1..=MAX_CODE_LENGTH`.
    pub fn validated(mut self) -> Self {
        if self.code_length == 0 {
            tracing::warn!("code_length 0 is unusable, clamping to 1");
            self.code_length = 1;
        }
        if self.code_length > Self::MAX_CODE_LENGTH {
            tracing::warn!(
                requested = self.code_length,
                max = Self::MAX_CODE_LENGTH,
                "code_length exceeds maximum, clamping"
            );
            self.code_length = Self::MAX_CODE_LENGTH;
        }
        self
    }

    /// The capacity ceiling: how many games may be live at once.
    pub fn capacity(&self) -> usize {
        10usize.pow(self.code_length as u32)
    }

    /// The idle timeout as a [`Duration`].
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// One live game session.
///
/// Owned exclusively by the registry; everything outside sees either
/// individual fields through registry operations or a [`GameSnapshot`].
#[derive(Debug)]
pub struct Game {
    /// Both players' bearer tokens, indexed by [`Slot::index`]. Minted
    /// together at creation, so the guest token exists before anyone has
    /// joined.
    tokens: [PlayerToken; 2],

    /// Current lifecycle phase. Advances forward only.
    phase: Phase,

    /// Last authenticated access, for idle eviction.
    last_activity: Instant,

    /// Accepted boards per slot. `None` until the slot's layout passes
    /// validation; immutable afterwards.
    boards: [Option<Grid>; 2],

    /// Per-slot shot records. Nothing fires yet; this is the data
    /// model's extension point for gameplay, kept so the admin snapshot
    /// shows the full session shape.
    shots: [ShotGrid; 2],
}

impl Game {
    /// Creates a fresh game in WAIT.
    pub(crate) fn new(tokens: [PlayerToken; 2]) -> Self {
        Self {
            tokens,
            phase: Phase::Wait,
            last_activity: Instant::now(),
            boards: [None, None],
            shots: [[[false; BOARD_SIZE]; BOARD_SIZE]; 2],
        }
    }

    /// The game's current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The token for one slot.
    pub fn token(&self, slot: Slot) -> &PlayerToken {
        &self.tokens[slot.index()]
    }

    /// Both tokens, host first.
    pub fn tokens(&self) -> &[PlayerToken; 2] {
        &self.tokens
    }

    /// Returns `true` if the slot has an accepted board.
    pub fn has_placed(&self, slot: Slot) -> bool {
        self.boards[slot.index()].is_some()
    }

    /// How long since the last authenticated access.
    pub fn idle(&self) -> Duration {
        self.last_activity.elapsed()
    }

    /// Refreshes the activity timestamp.
    pub(crate) fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    /// Moves the game forward to `next`.
    ///
    /// Callers are responsible for only requesting forward transitions;
    /// the debug assertion catches anything else during development.
    pub(crate) fn advance(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "illegal phase transition {} -> {}",
            self.phase,
            next
        );
        self.phase = next;
    }

    /// Stores an accepted board. The caller has already checked the
    /// phase, the slot, and the layout.
    pub(crate) fn set_board(&mut self, slot: Slot, grid: Grid) {
        self.boards[slot.index()] = Some(grid);
    }

    /// Builds the serializable admin view of this game.
    pub fn snapshot(&self, code: &GameCode) -> GameSnapshot {
        GameSnapshot {
            code: code.clone(),
            phase: self.phase,
            tokens: self.tokens.clone(),
            idle_secs: self.idle().as_secs(),
            boards: self.boards.clone(),
            shots: self.shots,
        }
    }
}

// ---------------------------------------------------------------------------
// Read views
// ---------------------------------------------------------------------------

/// What one player is allowed to know about their game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStatus {
    /// The game's phase.
    pub phase: Phase,
    /// Whether this player's board has been accepted.
    pub has_placed: bool,
}

/// A point-in-time copy of a game for the admin API.
///
/// Deliberately decoupled from [`Game`] so the internal representation
/// can change without moving the wire format. Exposing the tokens here
/// is intentional: the admin surface is the operator's debugging window
/// and is itself credential-guarded.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub code: GameCode,
    pub phase: Phase,
    pub tokens: [PlayerToken; 2],
    /// Seconds since the last authenticated access.
    pub idle_secs: u64,
    pub boards: [Option<Grid>; 2],
    pub shots: [ShotGrid; 2],
}
