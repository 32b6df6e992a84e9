//! HTTP handlers for the player and admin surfaces.
//!
//! Handlers stay thin: authenticate through an extractor, take the
//! registry lock once, call one registry operation, shape the response.
//! Every rule decision lives in `flotilla-registry`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use flotilla_board::Grid;
use flotilla_registry::{GameCode, GameSnapshot, Phase, PlayerToken, RegistryError};
use serde::Serialize;

use crate::auth::{AuthedPlayer, RequireAdmin};
use crate::error::AppError;
use crate::server::AppState;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Body of `POST /api/new`. Hands the host both the shareable game code
/// and their own bearer token in one round trip.
#[derive(Debug, Serialize)]
pub struct NewGameResponse {
    #[serde(rename = "gameID")]
    pub game_id: GameCode,
    #[serde(rename = "hostID")]
    pub host_id: PlayerToken,
}

/// Body of `POST /api/join/{id}`.
#[derive(Debug, Serialize)]
pub struct JoinResponse {
    #[serde(rename = "userID")]
    pub user_id: PlayerToken,
}

/// Body of `GET /api/{token}/state`.
///
/// `hasPlacedShips` only appears once the layout phase makes it
/// meaningful; in WAIT the field is absent, not false.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub mode: Phase,
    #[serde(rename = "hasPlacedShips", skip_serializing_if = "Option::is_none")]
    pub has_placed_ships: Option<bool>,
}

// ---------------------------------------------------------------------------
// Player surface
// ---------------------------------------------------------------------------

/// `GET /` - a minimal landing page so hitting the server with a
/// browser shows signs of life.
pub async fn home() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\n<html>\n<head><title>flotilla</title></head>\n\
         <body>\n<h1>flotilla</h1>\n\
         <p>A battleship game server. POST to /api/new to start a game.</p>\n\
         </body>\n</html>\n",
    )
}

/// `POST /api/new` - creates a game and returns its code plus the host
/// token.
pub async fn create_game(
    State(state): State<AppState>,
) -> Result<Json<NewGameResponse>, AppError> {
    let (code, host_token) = state.registry.lock().await.create_game()?;
    Ok(Json(NewGameResponse {
        game_id: code,
        host_id: host_token,
    }))
}

/// `POST /api/join/{id}` - claims the guest seat of a waiting game.
///
/// Games that don't exist and games that are past WAIT are
/// indistinguishable to the caller; both are a 404.
pub async fn join_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JoinResponse>, AppError> {
    let guest_token = state.registry.lock().await.join_game(&GameCode(id))?;
    Ok(Json(JoinResponse {
        user_id: guest_token,
    }))
}

/// `GET /api/{token}/state` - the polling endpoint for the pre-game
/// phases.
pub async fn game_state(
    player: AuthedPlayer,
    State(state): State<AppState>,
) -> Result<Json<StateResponse>, AppError> {
    let status = state
        .registry
        .lock()
        .await
        .player_status(&player.code, player.slot)?;

    match status.phase {
        Phase::Wait => Ok(Json(StateResponse {
            mode: Phase::Wait,
            has_placed_ships: None,
        })),
        Phase::Layout => Ok(Json(StateResponse {
            mode: Phase::Layout,
            has_placed_ships: Some(status.has_placed),
        })),
        // Nothing serves the play phases yet. Claiming a made-up state
        // would be worse than admitting the gap.
        _ => Err(RegistryError::Internal("state endpoint has no view of play phases").into()),
    }
}

/// `POST /api/{token}/ships` - submits a layout grid for validation.
///
/// The body is taken as raw JSON rather than a typed grid so that a
/// malformed shape surfaces as the layout rule's own 400, not as a
/// framework deserialization error.
pub async fn place_ships(
    player: AuthedPlayer,
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<StatusCode, AppError> {
    let grid = Grid::from_json(&body)?;
    state
        .registry
        .lock()
        .await
        .place_ships(&player.code, player.slot, grid)?;
    Ok(StatusCode::CREATED)
}

/// `GET /api/{token}/info` - plaintext identity echo for debugging a
/// client by hand.
pub async fn player_info(player: AuthedPlayer) -> String {
    format!("User ID is: {}; Game ID: {}", player.slot, player.code)
}

// ---------------------------------------------------------------------------
// Admin surface
// ---------------------------------------------------------------------------

/// `GET /admin/games` - every live game code.
pub async fn admin_games(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Json<Vec<GameCode>> {
    Json(state.registry.lock().await.live_codes())
}

/// `GET /admin/gamestate/{code}` - the full snapshot of one game,
/// tokens and boards included.
pub async fn admin_game_state(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<GameSnapshot>, AppError> {
    let code = GameCode(code);
    let snapshot = state
        .registry
        .lock()
        .await
        .snapshot(&code)
        .ok_or(RegistryError::NotFound(code))?;
    Ok(Json(snapshot))
}
