//! Greedy move search for the Reversi engine.
//!
//! The search is a one-ply heuristic over a read-only board snapshot: every
//! legal move for the requested player is scored by the number of discs it
//! would flip, and one of the maximal-scoring moves is chosen uniformly at
//! random. There is no lookahead and no positional weighting; the random
//! tie-break is the only source of variety between identical positions.
//!
//! Because the search runs against a snapshot, a caller that computes a move
//! off the main control thread must re-validate the result against current
//! engine state before applying it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reversi::{Board, Player, BOARD_SIZE};

/// Greedy one-ply searcher holding the tie-break random source.
pub struct GreedySearch {
    rng: StdRng,
}

impl GreedySearch {
    /// Create a searcher seeded from OS entropy.
    pub fn new() -> Self {
        GreedySearch {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a searcher with a fixed seed, for reproducible move sequences.
    pub fn seeded(seed: u64) -> Self {
        GreedySearch {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a move for `player` on the snapshot, or `None` if the player has
    /// no legal move. Ties on flip count are broken uniformly at random.
    pub fn best_move(&mut self, board: &Board, player: Player) -> Option<(usize, usize)> {
        let candidates = max_flip_moves(board, player);
        if candidates.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..candidates.len());
        Some(candidates[index])
    }
}

impl Default for GreedySearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Every legal move for `player` that achieves the maximal flip count, in
/// row-major order. Empty when the player has no legal move.
pub fn max_flip_moves(board: &Board, player: Player) -> Vec<(usize, usize)> {
    let mut best = Vec::new();
    let mut max_flips = 0;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if !board.is_legal_move(row, col, player) {
                continue;
            }
            // A legal move always flips at least one disc, so the first hit
            // replaces the empty candidate set.
            let flips = board.flip_count(row, col, player);
            if flips > max_flips {
                max_flips = flips;
                best.clear();
                best.push((row, col));
            } else if flips == max_flips {
                best.push((row, col));
            }
        }
    }

    best
}
