//! The per-game phase state machine.

use serde::{Deserialize, Serialize};

/// Where a game is in its lifecycle.
///
/// Phases only ever advance; there is no transition back:
///
/// ```text
/// WAIT → LAYOUT → PLAYER0 ─→ END
///               ↘ PLAYER1 ─↗
/// ```
///
/// - **Wait**: created, waiting for a second player to join.
/// - **Layout**: both players present, each submitting a board.
/// - **Player0 / Player1**: active play; which player moves first is
///   elected uniformly at random once both boards are accepted.
/// - **End**: terminal. Reachable only by future gameplay logic; no
///   operation in this crate transitions into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "WAIT")]
    Wait,
    #[serde(rename = "LAYOUT")]
    Layout,
    #[serde(rename = "PLAYER0")]
    Player0,
    #[serde(rename = "PLAYER1")]
    Player1,
    #[serde(rename = "END")]
    End,
}

impl Phase {
    /// Returns `true` if a second player may still join.
    pub fn is_joinable(self) -> bool {
        matches!(self, Self::Wait)
    }

    /// Returns `true` if one of the two active-play phases.
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Player0 | Self::Player1)
    }

    /// Returns `true` if moving from `self` to `target` goes forward
    /// through the machine. Everything else (regression, skipping
    /// LAYOUT, self-loops) is rejected.
    pub fn can_advance_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Wait, Self::Layout)
                | (Self::Layout, Self::Player0)
                | (Self::Layout, Self::Player1)
                | (Self::Player0, Self::End)
                | (Self::Player1, Self::End)
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Wait => "WAIT",
            Self::Layout => "LAYOUT",
            Self::Player0 => "PLAYER0",
            Self::Player1 => "PLAYER1",
            Self::End => "END",
        };
        f.write_str(name)
    }
}
