use crate::board::Board;
use crate::player::Player;

/// Progress of a game. A terminal value is only left through [`Game::reset`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    InProgress,
    BlackWins,
    WhiteWins,
    Draw,
}

impl GameState {
    /// True once the game has been decided.
    pub fn is_terminal(self) -> bool {
        self != GameState::InProgress
    }
}

/// The single recoverable failure of the engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum GameError {
    #[error("move is not legal for the current player")]
    InvalidMove,
}

/// The rule engine: a board plus the turn and termination state machine.
///
/// All mutation goes through [`Game::apply_move`] and [`Game::reset`]; reads
/// hand out copies, so a held snapshot never changes under the caller.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_player: Player,
    state: GameState,
}

impl Game {
    /// Create a game in the starting position, Black to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            current_player: Player::Black,
            state: GameState::InProgress,
        }
    }

    /// Resume from an arbitrary position with `to_move` about to act.
    ///
    /// The position is normalized the same way [`Game::apply_move`] leaves
    /// one: if `to_move` has no legal move the turn is handed to the
    /// opponent, and if neither side can move the game is settled
    /// immediately.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut game = Game {
            board,
            current_player: to_move,
            state: GameState::InProgress,
        };
        if !game.board.has_any_move(to_move) {
            if game.board.has_any_move(to_move.opponent()) {
                game.current_player = to_move.opponent();
            } else {
                game.state = settled_state(&game.board);
            }
        }
        game
    }

    /// Return to the starting position, Black to move.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::Black;
        self.state = GameState::InProgress;
    }

    /// Play the current player's disc at (row, col).
    ///
    /// On success returns the number of discs flipped and advances the turn:
    /// the opponent moves next if able, otherwise the turn stays with the
    /// mover, and the game is settled when neither side has a move left.
    /// An illegal coordinate fails with [`GameError::InvalidMove`] and
    /// leaves all state untouched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<u8, GameError> {
        if self.state.is_terminal() || !self.board.is_legal_move(row, col, self.current_player) {
            return Err(GameError::InvalidMove);
        }

        let flipped = self.board.place(row, col, self.current_player);
        self.advance_turn();
        Ok(flipped)
    }

    /// Check whether `player` may move at (row, col) on the current board.
    pub fn is_legal_move(&self, row: usize, col: usize, player: Player) -> bool {
        self.board.is_legal_move(row, col, player)
    }

    /// Enumerate every legal move for `player`, for hint rendering and search.
    pub fn legal_moves(&self, player: Player) -> Vec<(usize, usize)> {
        self.board.legal_moves(player)
    }

    /// Check whether `player` has at least one legal move.
    pub fn has_any_move(&self, player: Player) -> bool {
        self.board.has_any_move(player)
    }

    /// Disc totals as (black_count, white_count), by full-board tally.
    pub fn score(&self) -> (u8, u8) {
        self.board.counts()
    }

    /// The player who moves next. Meaningful while the game is in progress.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Current progress of the game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The winning player in a decided game, `None` for a draw or a game
    /// still in progress.
    pub fn winner(&self) -> Option<Player> {
        match self.state {
            GameState::BlackWins => Some(Player::Black),
            GameState::WhiteWins => Some(Player::White),
            GameState::InProgress | GameState::Draw => None,
        }
    }

    /// A copy of the board, isolated from later engine mutation.
    pub fn board(&self) -> Board {
        self.board
    }

    fn advance_turn(&mut self) {
        let opponent = self.current_player.opponent();
        if self.board.has_any_move(opponent) {
            self.current_player = opponent;
        } else if !self.board.has_any_move(self.current_player) {
            self.state = settled_state(&self.board);
        }
        // Otherwise the opponent is stuck and the turn stays with the mover.
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Final state of a board on which neither player can move.
fn settled_state(board: &Board) -> GameState {
    let (black, white) = board.counts();
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => GameState::BlackWins,
        std::cmp::Ordering::Less => GameState::WhiteWins,
        std::cmp::Ordering::Equal => GameState::Draw,
    }
}
