//! Core Connect Four game logic: grid representation, player types, and the
//! game engine state machine.

mod board;
mod player;
mod state;

pub use board::{Cell, Dimensions, Grid, CONNECT};
pub use player::Player;
pub use state::{DropReport, GameEngine, Outcome, Placement, Snapshot};
