//! Identity types: game codes, player tokens, and slots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A human-shareable game identifier: a fixed-length string of decimal
/// digits.
///
/// The code length drives the capacity ceiling: with `n` digits at
/// most `10^n` games can be live at once, because a code is never
/// reused while its game exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameCode(pub String);

impl fmt::Display for GameCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An unguessable bearer credential tying a caller to one slot of one
/// game.
///
/// 128 bits of randomness rendered as 32 lowercase hex characters. The
/// token is the sole credential: holding it proves session membership,
/// there is no separate game secret. Lifetime equals the lifetime of
/// the owning game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerToken(pub String);

impl fmt::Display for PlayerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which of a game's two players a token or board belongs to.
///
/// Slot 0 is the creator (host), slot 1 the joiner (guest). A closed
/// enum rather than a raw index so a third slot can't be conjured up by
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Host,
    Guest,
}

impl Slot {
    /// The slot's array index: 0 for host, 1 for guest.
    pub fn index(self) -> usize {
        match self {
            Self::Host => 0,
            Self::Guest => 1,
        }
    }

    /// The other player's slot.
    pub fn opponent(self) -> Self {
        match self {
            Self::Host => Self::Guest,
            Self::Guest => Self::Host,
        }
    }
}

// Slots print as their numeric index; the info endpoint and log lines
// both use that form.
impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
