use serde::Serialize;

use super::{Dimensions, Grid, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Tie,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Where an accepted drop landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

/// Owned copy of the engine state handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub turn: Player,
    pub outcome: Outcome,
}

/// Result of a `drop` call. A rejected drop leaves the engine untouched;
/// the reason is kept only so a front-end can show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropReport {
    pub placed: Result<Placement, MoveError>,
    pub snapshot: Snapshot,
}

impl DropReport {
    pub fn accepted(&self) -> bool {
        self.placed.is_ok()
    }
}

/// A single game instance. Callers serialize access; nothing here blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    grid: Grid,
    turn: Player,
    outcome: Outcome,
}

impl GameEngine {
    /// Create a game on a board of the given size, Player A to move
    pub fn new(dims: Dimensions) -> Self {
        GameEngine {
            grid: Grid::new(dims),
            turn: Player::A,
            outcome: Outcome::InProgress,
        }
    }

    /// Create a game on the 7 x 6 board
    pub fn standard() -> Self {
        Self::new(Dimensions::STANDARD)
    }

    /// Throw away the current game and start over on the same board size
    pub fn reset(&mut self) -> Snapshot {
        *self = Self::new(self.grid.dimensions());
        log::info!("new game started");
        self.snapshot()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Whether a column accepts no more pieces. Out-of-range columns are full.
    pub fn is_full(&self, column: usize) -> bool {
        self.grid.is_column_full(column)
    }

    /// Columns that would accept a drop right now
    pub fn open_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.grid.dimensions().columns())
            .filter(|&col| !self.grid.is_column_full(col))
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            turn: self.turn,
            outcome: self.outcome,
        }
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Invalid columns, moves after the game is decided and moves into a
    /// full column are rejected without touching the state. An accepted
    /// move always flips the turn, including the move that ends the game.
    pub fn drop(&mut self, column: isize) -> DropReport {
        let placed = self.try_drop(column);
        if let Err(e) = &placed {
            log::debug!("drop in column {} rejected: {}", column, e);
        }
        DropReport {
            placed,
            snapshot: self.snapshot(),
        }
    }

    fn try_drop(&mut self, column: isize) -> Result<Placement, MoveError> {
        let column = usize::try_from(column).map_err(|_| MoveError::InvalidColumn)?;
        if column >= self.grid.dimensions().columns() {
            return Err(MoveError::InvalidColumn);
        }
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.turn;
        let row = self.grid.drop_piece(column, player.to_cell())?;

        if self.grid.check_win(column, row) {
            self.outcome = Outcome::Win(player);
            log::info!("{} wins at column {} row {}", player.name(), column, row);
        } else if self.grid.is_full() {
            self.outcome = Outcome::Tie;
            log::info!("board full, game tied");
        }

        self.turn = self.turn.other();

        Ok(Placement {
            column,
            row,
            player,
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::standard()
    }
}
