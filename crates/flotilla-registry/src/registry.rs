//! The game registry: tracks every live game and every minted token.
//!
//! This is the central piece of the crate. It's responsible for:
//! - Minting collision-free codes and tokens under the capacity ceiling
//! - Mapping tokens back to (code, slot) for authenticated requests
//! - Driving the phase machine on join and on board submission
//! - Evicting games idle beyond the configured timeout
//!
//! # Concurrency note
//!
//! `GameRegistry` is NOT thread-safe by itself: plain `HashMap`s, no
//! locks. The server wraps one registry in a single `tokio::sync::Mutex`
//! shared by all handler tasks and the eviction sweeper. Every operation
//! is synchronous and O(1)-O(capacity), so one coarse lock is enough.

use std::collections::HashMap;

use flotilla_board::{validate_layout, Grid, SHIP_CATALOG};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    ids, Game, GameCode, GameSnapshot, Phase, PlayerStatus, PlayerToken, RegistryConfig,
    RegistryError, Slot,
};

/// How many draws a code mint may take before giving up. Generous on
/// purpose: a nearly full registry legitimately needs many draws, and
/// exhausting this budget with an honest random source is astronomically
/// unlikely.
const MAX_CODE_ATTEMPTS: u32 = 4096;

/// How many draws a token mint may take. In a 2^128 space a single
/// collision is already suspicious; sixteen means the random source is
/// broken.
const MAX_TOKEN_ATTEMPTS: u32 = 16;

/// Owns every live game and the global token index.
///
/// The two maps are kept in sync: a game's two tokens enter the index
/// when the game is created and leave it when the game is removed, and
/// never change in between.
///
/// Generic over the random source so tests can seed a deterministic
/// one; production uses [`GameRegistry::new`], which pulls entropy from
/// the OS.
pub struct GameRegistry<R: Rng = StdRng> {
    /// Live games, keyed by code.
    games: HashMap<GameCode, Game>,

    /// Token → (code, slot). The sole authentication mechanism: a
    /// token lookup both identifies the caller and proves membership.
    tokens: HashMap<PlayerToken, (GameCode, Slot)>,

    config: RegistryConfig,

    rng: R,
}

impl GameRegistry<StdRng> {
    /// Creates an empty registry with an OS-seeded random source.
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameRegistry<R> {
    /// Creates an empty registry with an explicit random source.
    pub fn with_rng(config: RegistryConfig, rng: R) -> Self {
        Self {
            games: HashMap::new(),
            tokens: HashMap::new(),
            config: config.validated(),
            rng,
        }
    }

    // -- Creation and joining ----------------------------------------------

    /// Creates a game: mints a unique code and both player tokens,
    /// stores the game in WAIT, and returns the code plus the host
    /// (slot 0) token.
    ///
    /// # Errors
    /// [`RegistryError::CapacityExceeded`] when `10^code_length` games
    /// are live; [`RegistryError::Internal`] if a mint retry budget is
    /// exhausted.
    pub fn create_game(&mut self) -> Result<(GameCode, PlayerToken), RegistryError> {
        let capacity = self.config.capacity();
        if self.games.len() >= capacity {
            return Err(RegistryError::CapacityExceeded(capacity));
        }

        let code = self.mint_code()?;
        let host = self.mint_token()?;
        // Index the host token before minting the guest token so the
        // guest mint retries against it too.
        self.tokens
            .insert(host.clone(), (code.clone(), Slot::Host));
        let guest = match self.mint_token() {
            Ok(token) => token,
            Err(e) => {
                self.tokens.remove(&host);
                return Err(e);
            }
        };
        self.tokens
            .insert(guest.clone(), (code.clone(), Slot::Guest));

        self.games
            .insert(code.clone(), Game::new([host.clone(), guest]));

        tracing::info!(%code, live = self.games.len(), "game created");
        Ok((code, host))
    }

    /// Joins the waiting game with `code`, advancing it to LAYOUT and
    /// returning the guest (slot 1) token.
    ///
    /// A game can be joined at most once: after the first join the
    /// phase guard excludes it, so a second attempt gets the same
    /// `NotFound` as a code that never existed.
    pub fn join_game(&mut self, code: &GameCode) -> Result<PlayerToken, RegistryError> {
        let game = self
            .games
            .get_mut(code)
            .filter(|game| game.phase().is_joinable())
            .ok_or_else(|| RegistryError::NotFound(code.clone()))?;

        game.touch();
        game.advance(Phase::Layout);
        tracing::info!(%code, "player joined, layout phase started");
        Ok(game.token(Slot::Guest).clone())
    }

    // -- Authenticated access ----------------------------------------------

    /// Resolves a bearer token to its (code, slot) and refreshes the
    /// game's activity timestamp. Every authenticated operation goes
    /// through here first.
    ///
    /// # Errors
    /// [`RegistryError::Unauthorized`] for tokens never minted or whose
    /// game has been removed.
    pub fn resolve_token(
        &mut self,
        token: &PlayerToken,
    ) -> Result<(GameCode, Slot), RegistryError> {
        let (code, slot) = self
            .tokens
            .get(token)
            .cloned()
            .ok_or(RegistryError::Unauthorized)?;

        let game = self
            .games
            .get_mut(&code)
            .ok_or(RegistryError::Internal("token index references a missing game"))?;
        game.touch();

        Ok((code, slot))
    }

    /// What one player may see of their game: the phase and whether
    /// their own board has been accepted.
    pub fn player_status(
        &self,
        code: &GameCode,
        slot: Slot,
    ) -> Result<PlayerStatus, RegistryError> {
        let game = self
            .games
            .get(code)
            .ok_or(RegistryError::Unauthorized)?;
        Ok(PlayerStatus {
            phase: game.phase(),
            has_placed: game.has_placed(slot),
        })
    }

    /// Validates and stores a board for one slot.
    ///
    /// Only legal while the game is in LAYOUT and the slot hasn't
    /// submitted yet; an accepted board is immutable. When the second
    /// board lands, one of PLAYER0/PLAYER1 is elected uniformly at
    /// random as the first to move.
    pub fn place_ships(
        &mut self,
        code: &GameCode,
        slot: Slot,
        grid: Grid,
    ) -> Result<(), RegistryError> {
        let game = self
            .games
            .get_mut(code)
            .ok_or(RegistryError::Unauthorized)?;

        if game.phase() != Phase::Layout {
            return Err(RegistryError::IllegalPhase(game.phase()));
        }
        if game.has_placed(slot) {
            return Err(RegistryError::AlreadyPlaced);
        }

        validate_layout(&grid, SHIP_CATALOG)?;
        game.set_board(slot, grid);
        tracing::info!(%code, slot = %slot, "ships placed");

        if game.has_placed(slot.opponent()) {
            let first = if self.rng.random_bool(0.5) {
                Phase::Player0
            } else {
                Phase::Player1
            };
            game.advance(first);
            tracing::info!(%code, first = %first, "both boards in, play started");
        }

        Ok(())
    }

    // -- Removal and eviction ----------------------------------------------

    /// Removes a game and de-indexes both of its tokens.
    ///
    /// This is the only path that deletes registry state; the eviction
    /// sweep goes through it too, so the two maps can't drift apart.
    pub fn remove_game(&mut self, code: &GameCode) -> Result<(), RegistryError> {
        let game = self
            .games
            .remove(code)
            .ok_or_else(|| RegistryError::NotFound(code.clone()))?;
        for token in game.tokens() {
            self.tokens.remove(token);
        }
        tracing::info!(%code, live = self.games.len(), "game removed");
        Ok(())
    }

    /// Removes every game idle longer than the configured timeout and
    /// returns their codes. Phase doesn't matter: an abandoned game
    /// holds a code and two tokens against the capacity ceiling whether
    /// it's waiting or mid-play.
    pub fn sweep_expired(&mut self) -> Vec<GameCode> {
        let timeout = self.config.idle_timeout();
        let stale: Vec<GameCode> = self
            .games
            .iter()
            .filter(|(_, game)| game.idle() > timeout)
            .map(|(code, _)| code.clone())
            .collect();

        for code in &stale {
            tracing::info!(%code, "evicting idle game");
            let _ = self.remove_game(code);
        }

        stale
    }

    // -- Introspection -------------------------------------------------------

    /// Codes of all live games, for the admin listing.
    pub fn live_codes(&self) -> Vec<GameCode> {
        self.games.keys().cloned().collect()
    }

    /// A serializable snapshot of one game, if it exists.
    pub fn snapshot(&self, code: &GameCode) -> Option<GameSnapshot> {
        self.games.get(code).map(|game| game.snapshot(code))
    }

    /// Number of live games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Returns `true` if no games are live.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// The capacity ceiling (`10^code_length`).
    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    // -- Minting -------------------------------------------------------------

    /// Draws codes until one isn't held by a live game.
    fn mint_code(&mut self) -> Result<GameCode, RegistryError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = ids::random_code(&mut self.rng, self.config.code_length);
            if !self.games.contains_key(&code) {
                return Ok(code);
            }
        }
        Err(RegistryError::Internal("game code retry budget exhausted"))
    }

    /// Draws tokens until one isn't in the global index. The retry is
    /// load-bearing for correctness even though a collision should
    /// never happen with a working random source.
    fn mint_token(&mut self) -> Result<PlayerToken, RegistryError> {
        for _ in 0..MAX_TOKEN_ATTEMPTS {
            let token = ids::random_token(&mut self.rng);
            if !self.tokens.contains_key(&token) {
                return Ok(token);
            }
        }
        Err(RegistryError::Internal("token retry budget exhausted"))
    }
}

// =========================================================================
// Tests
// =========================================================================
