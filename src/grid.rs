//! Slot indexing and board text rendering.
//!
//! Slots are numbered row-major: slot `p` sits in column `p % columns` and
//! row `p / columns`. The same numbering slices the picture, so the picture
//! slice a tile shows is fixed by its id while its slot moves.

use crate::puzzle::PuzzleState;
use crate::tile::{Rotation, Tile};

/// Converts a slot index to `(column, row)`.
#[inline(always)]
pub const fn slot_to_cell(position: usize, columns: usize) -> (usize, usize) {
    (position % columns, position / columns)
}

/// Converts `(column, row)` to a slot index.
#[inline(always)]
pub const fn cell_to_slot(column: usize, row: usize, columns: usize) -> usize {
    row * columns + column
}

/// Background offset that shows the picture slice for `position`.
///
/// This is `(-(position % columns) * size, -floor(position / columns) * size)`,
/// to be paired with a background scaled to the full board size.
pub fn background_offset(position: usize, columns: usize, tile_size: f64) -> (f64, f64) {
    let (column, row) = slot_to_cell(position, columns);
    (-(column as f64) * tile_size, -(row as f64) * tile_size)
}

/// Glyph pointing at the edge that is currently the tile's top.
fn rotation_glyph(rotation: Rotation) -> char {
    match rotation {
        Rotation::Deg0 => '^',
        Rotation::Deg90 => '>',
        Rotation::Deg180 => 'v',
        Rotation::Deg270 => '<',
    }
}

/// Formats a board as text, one line per grid row.
///
/// Each cell shows the home slot of the tile occupying it and a rotation
/// glyph; the selected tile carries a trailing `*`.
pub fn format_board(state: &PuzzleState, columns: usize) -> String {
    let columns = columns.max(1);

    // slot -> tile, built once instead of scanning per cell
    let mut by_slot: Vec<Option<&Tile>> = vec![None; state.len()];
    for tile in state.tiles() {
        if let Some(slot) = by_slot.get_mut(tile.position) {
            *slot = Some(tile);
        }
    }

    let mut output = String::new();
    for row in by_slot.chunks(columns) {
        let line = row
            .iter()
            .map(|cell| match cell {
                Some(tile) => {
                    let mark = if state.selected() == Some(tile.id) {
                        '*'
                    } else {
                        ' '
                    };
                    format!(
                        "{:02}{}{}",
                        tile.id.original_index(),
                        rotation_glyph(tile.rotation),
                        mark
                    )
                }
                None => "... ".to_owned(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}
