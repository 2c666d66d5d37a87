//! HTTP API over one game session.
//!
//! The human submits a move, the engine answers with one of its own; each
//! request maps to one legal-move check, one `make_move`, and for the
//! engine's turn one `search` call. Illegal submissions are rejected with
//! 400 and the position is left unchanged.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use gambit_core::{legal_moves, move_to_uci, parse_uci_move, Engine, Position, SearchLimits};
use gambit_engine::AlphaBetaEngine;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    game: Arc<Mutex<GameSession>>,
    limits: SearchLimits,
}

struct GameSession {
    pos: Position,
    engine: AlphaBetaEngine,
}

pub fn router(config: &ServerConfig) -> Router {
    let state = AppState {
        game: Arc::new(Mutex::new(GameSession {
            pos: Position::startpos(),
            engine: AlphaBetaEngine::new(),
        })),
        limits: SearchLimits::depth_and_time(
            config.depth,
            Duration::from_millis(config.move_time_ms),
        ),
    };

    Router::new()
        .route("/api/new_game", post(new_game))
        .route("/api/move", post(play_move))
        .with_state(state)
}

#[derive(Serialize)]
pub struct NewGameResponse {
    pub fen: String,
    pub turn: &'static str,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    #[serde(rename = "move")]
    pub uci: String,
}

#[derive(Serialize)]
pub struct MoveResponse {
    pub fen: String,
    pub engine_move: Option<String>,
    pub game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<&'static str>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub fen: String,
}

async fn new_game(State(state): State<AppState>) -> Json<NewGameResponse> {
    let mut game = state.game.lock().unwrap();
    game.pos = Position::startpos();
    game.engine.new_game();
    tracing::info!("new game started");
    Json(NewGameResponse {
        fen: game.pos.to_fen(),
        turn: "white",
    })
}

async fn play_move(
    State(state): State<AppState>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut game = state.game.lock().unwrap();
    let GameSession { pos, engine } = &mut *game;

    // The boundary pre-filters: only moves the generator produced are
    // ever applied, so the core never sees an illegal one.
    let mv = match parse_uci_move(pos, &req.uci) {
        Some(mv) => mv,
        None => {
            tracing::warn!(submitted = %req.uci, "rejected illegal move");
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("illegal move `{}`", req.uci),
                    fen: pos.to_fen(),
                }),
            ));
        }
    };
    pos.make_move(mv);

    if legal_moves(pos).is_empty() {
        let winner = if pos.in_check(pos.side_to_move) {
            Some("user")
        } else {
            None // stalemate
        };
        return Ok(Json(MoveResponse {
            fen: pos.to_fen(),
            engine_move: None,
            game_over: true,
            winner,
        }));
    }

    let report = engine.search(pos, &state.limits);
    let engine_move = match report.best_move {
        Some(reply) => {
            pos.make_move(reply);
            tracing::info!(
                reply = %move_to_uci(reply),
                score = report.score,
                depth = report.depth,
                "engine replied"
            );
            Some(move_to_uci(reply))
        }
        None => None,
    };

    let game_over = engine_move.is_none() || legal_moves(pos).is_empty();
    let winner = if game_over && pos.in_check(pos.side_to_move) {
        Some("engine")
    } else {
        None
    };

    Ok(Json(MoveResponse {
        fen: pos.to_fen(),
        engine_move,
        game_over,
        winner,
    }))
}
