//! The game state machine.
//!
//! `Game` owns one board and one history and is the only way to mutate
//! them. Every move is tried on a clone of the board:
//!
//! 1. place the mover's stone
//! 2. remove opponent chains left without liberties
//! 3. apply the suicide rule to the mover's own chain
//! 4. apply the ko rule to the resulting situation
//!
//! Only if all steps succeed does the clone replace the live board and a
//! new situation enter the history. A rejected move leaves the game
//! exactly as it was.

use tracing::{debug, info, trace};

use super::outcome::{MoveOutcome, Step};
use super::termination::trailing_passes;
use crate::board::Board;
use crate::core::{Captures, Color, ConfigError, GameConfig, GameError};
use crate::history::{History, Situation};

/// A game of Go.
///
/// ## Example
///
/// ```
/// use go_rules::{Color, Game, GameConfig, GameError};
///
/// let mut game = Game::new(GameConfig::default().with_board_size(9)).unwrap();
///
/// let outcome = game.place_stone(40).unwrap();
/// assert_eq!(outcome.changed.as_slice(), &[40]);
/// assert_eq!(game.position()[40], Color::Black);
/// assert_eq!(game.to_move(), Color::White);
///
/// assert_eq!(game.place_stone(40), Err(GameError::Occupied { x: 4, y: 4 }));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    history: History,
    to_move: Color,
    running: bool,
    consecutive_passes: u8,
}

impl Default for Game {
    fn default() -> Self {
        Self::start(GameConfig::default())
    }
}

impl Game {
    /// Start a game on an empty board with black to move.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config))
    }

    fn start(config: GameConfig) -> Self {
        let board = Board::new(config.board_size);
        let mut history = History::new();
        history.add(Situation::new(board.to_position(), Color::Black));

        Self {
            config,
            board,
            history,
            to_move: Color::Black,
            running: true,
            consecutive_passes: 0,
        }
    }

    /// Reassemble a game from already validated parts.
    pub(crate) fn from_parts(
        config: GameConfig,
        board: Board,
        history: History,
        to_move: Color,
        running: bool,
    ) -> Self {
        let consecutive_passes = trailing_passes(&history);
        Self {
            config,
            board,
            history,
            to_move,
            running,
            consecutive_passes,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn position(&self) -> &[Color] {
        self.board.cells()
    }

    /// Lines per side.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    /// Stones of `color` captured along the walked history.
    #[must_use]
    pub fn captured_stones(&self, color: Color) -> u32 {
        self.history.captured(color)
    }

    /// Stones captured by the move that produced the current situation.
    #[must_use]
    pub fn last_captures(&self) -> Captures {
        self.history
            .current()
            .map(Situation::captures)
            .unwrap_or_default()
    }

    // === Moves ===

    /// Place a stone for the player to move at a flat cell index.
    ///
    /// An index past the last cell maps to coordinates off the board, so a
    /// finished game still reports `GameOver` first.
    pub fn place_stone(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let size = self.board.size().max(1);
        let x = i32::try_from(index % size).unwrap_or(i32::MAX);
        let y = i32::try_from(index / size).unwrap_or(i32::MAX);
        self.place_stone_at(x, y)
    }

    /// Place a stone for the player to move at `(x, y)`.
    pub fn place_stone_at(&mut self, x: i32, y: i32) -> Result<MoveOutcome, GameError> {
        let result = self.try_place(x, y);
        if let Err(err) = &result {
            debug!(x, y, color = %self.to_move, reason = %err, "move rejected");
        }
        result
    }

    fn try_place(&mut self, x: i32, y: i32) -> Result<MoveOutcome, GameError> {
        self.check_running()?;
        match self.board.color_at(x, y) {
            Color::Empty => {}
            Color::OutOfBounds => return Err(GameError::OutOfBounds { x, y }),
            _ => return Err(GameError::Occupied { x, y }),
        }

        let mover = self.to_move;
        let mut next = self.board.clone();
        next.set_stone(x, y, mover);
        let captures = self.resolve_captures(&mut next, x, y, mover)?;

        let situation = Situation::new(next.to_position(), mover.inverse()).with_captures(captures);
        if self.config.ko_rule.forbids(&self.history, &situation) {
            return Err(GameError::Ko);
        }

        let changed = self.board.changed_cells(&next);
        self.board = next;
        self.to_move = mover.inverse();
        self.history.add(situation);
        self.consecutive_passes = 0;
        self.refresh_running();

        let outcome = MoveOutcome { changed, captures };
        trace!(x, y, color = %mover, captured = outcome.captured(), "stone placed");
        Ok(outcome)
    }

    /// Remove chains left without liberties by a stone at `(x, y)`.
    fn resolve_captures(
        &self,
        board: &mut Board,
        x: i32,
        y: i32,
        mover: Color,
    ) -> Result<Captures, GameError> {
        let opponent = mover.inverse();
        let mut captures = Captures::default();

        for n in board.surrounding(x, y) {
            // Re-read the cell: an earlier neighbor's chain may have covered it.
            if board.color_at(n.x, n.y) == opponent && board.is_captured(n.x, n.y)? {
                let chain = board.chain(n.x, n.y);
                trace!(color = %opponent, stones = chain.len(), "chain captured");
                captures[opponent] += chain.len() as u32;
                board.remove_stones(&chain);
            }
        }

        if board.is_captured(x, y)? {
            if !self.config.suicide_allowed {
                return Err(GameError::Suicide);
            }
            let chain = board.chain(x, y);
            trace!(color = %mover, stones = chain.len(), "suicide");
            captures[mover] += chain.len() as u32;
            board.remove_stones(&chain);
        }

        Ok(captures)
    }

    /// Pass the turn.
    ///
    /// The pass that ends the game is the one `Err` that changes state: it
    /// is appended to the history and the turn flips before
    /// `GameError::GameOver` is returned. Undoing it reopens the game. Any
    /// later pass or move fails with `GameOver` and changes nothing.
    pub fn pass(&mut self) -> Result<(), GameError> {
        let result = self.try_pass();
        if let Err(err) = &result {
            debug!(color = %self.to_move, reason = %err, "pass rejected");
        }
        result
    }

    fn try_pass(&mut self) -> Result<(), GameError> {
        self.check_running()?;

        let next = self.to_move.inverse();
        self.history
            .add(Situation::new(self.board.to_position(), next).as_pass());
        self.to_move = next;
        self.consecutive_passes = self.consecutive_passes.saturating_add(1);
        self.refresh_running();

        if self.running {
            Ok(())
        } else {
            Err(GameError::GameOver)
        }
    }

    // === History navigation ===

    /// Move through the history and load the situation landed on.
    ///
    /// Returns `None` without changing anything when there is nowhere to
    /// go.
    pub fn step_history(&mut self, step: Step) -> Option<&Situation> {
        let moved = match step {
            Step::Previous => self.history.previous(),
            Step::Next => self.history.next(),
            Step::First => self.history.first(),
            Step::Last => self.history.last(),
        }
        .is_some();
        if !moved {
            return None;
        }

        if let Some(current) = self.history.current() {
            self.board = Board::from_position(current.position());
            self.to_move = current.turn();
        }
        self.consecutive_passes = trailing_passes(&self.history);
        self.refresh_running();
        debug!(?step, cursor = self.history.cursor(), "history step");

        self.history.current()
    }

    pub fn undo_move(&mut self) -> Option<&Situation> {
        self.step_history(Step::Previous)
    }

    pub fn redo_move(&mut self) -> Option<&Situation> {
        self.step_history(Step::Next)
    }

    pub fn first_move(&mut self) -> Option<&Situation> {
        self.step_history(Step::First)
    }

    pub fn last_move(&mut self) -> Option<&Situation> {
        self.step_history(Step::Last)
    }

    // === Internals ===

    fn check_running(&self) -> Result<(), GameError> {
        if self.running {
            Ok(())
        } else {
            Err(GameError::GameOver)
        }
    }

    fn refresh_running(&mut self) {
        let finished = self.config.termination.is_reached(&self.history);
        if finished && self.running {
            info!(
                cursor = self.history.cursor(),
                black_captured = self.captured_stones(Color::Black),
                white_captured = self.captured_stones(Color::White),
                "game finished"
            );
        }
        self.running = !finished;
    }
}
