//! Terminal UI: renders the engine snapshot (board, status message, drop
//! markers) and feeds key presses back in as drops.

mod app;
mod game_view;

pub use app::App;
pub use game_view::{marker_visible, play_again_visible, status_message, Palette};
