/// Plays a complete greedy-vs-greedy match and prints each position.
use reversi::{Game, GameState, Player};
use reversi_ai::GreedySearch;

fn main() {
    let mut game = Game::new();
    let mut black = GreedySearch::new();
    let mut white = GreedySearch::new();

    println!("=== Greedy self-play match ===\n");
    println!("{}", game.board());

    let mut turn = 1;
    while game.state() == GameState::InProgress {
        let player = game.current_player();
        let search = match player {
            Player::Black => &mut black,
            Player::White => &mut white,
        };

        let (row, col) = match search.best_move(&game.board(), player) {
            Some(coord) => coord,
            None => break,
        };

        let flipped = match game.apply_move(row, col) {
            Ok(flipped) => flipped,
            Err(err) => {
                println!("move ({}, {}) rejected: {}", row, col, err);
                break;
            }
        };

        println!(
            "Turn {:2}: {:?} plays ({}, {}), flipping {}",
            turn, player, row, col, flipped
        );
        println!("{}", game.board());
        turn += 1;
    }

    let (black_count, white_count) = game.score();
    println!("Final score: Black {} - White {}", black_count, white_count);
    match game.winner() {
        Some(player) => println!("Winner: {:?}", player),
        None => println!("Draw"),
    }
}
