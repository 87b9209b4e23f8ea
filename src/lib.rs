//! Tile Swap Puzzle Library
//!
//! A picture is cut into a 5x10 grid of square tiles that are shuffled and
//! turned. The player selects a tile and either clicks it again to turn it a
//! quarter turn clockwise, or clicks another tile to swap the two. The puzzle
//! is solved when every tile is back in its home slot and upright.
//!
//! The puzzle state machine and the layout engine are pure; [`Session`] is
//! the thin shell that owns the mutable state, the dialogs and the timer.

pub mod grid;
pub mod images;
pub mod layout;
pub mod puzzle;
pub mod render;
pub mod session;
pub mod solver;
pub mod tile;

pub use layout::{compute_layout, Layout, Orientation};
pub use puzzle::{ClickOutcome, PuzzleError, PuzzleState, Status, DEFAULT_TILE_COUNT};
pub use render::{RenderModel, TileView};
pub use session::{Dialog, Session, SessionConfig, SessionEvent};
pub use tile::{Rotation, Tile, TileId};
