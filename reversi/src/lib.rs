//! Core rule engine for Reversi (Othello).
//!
//! The engine owns an 8x8 board and enforces the full rule set: legality via
//! 8-direction capture rays, disc flipping, turn alternation with the
//! implicit pass rule, and terminal scoring.
//!
//! ## Modules
//!
//! - [`Board`] — the grid, with shared legality and flip-count queries
//! - [`Player`] — the two disc colors
//! - [`Game`] — the turn and termination state machine
//!
//! A presentation layer (or a search) reads state through copy snapshots and
//! drives the game through [`Game::apply_move`]; the engine never shares its
//! board mutably.

mod board;
mod game;
mod player;

pub use board::{Board, Cell, BOARD_SIZE};
pub use game::{Game, GameError, GameState};
pub use player::Player;
