//! Flattened per-tile view data for presentation layers.

use crate::grid::{background_offset, slot_to_cell};
use crate::layout::Layout;
use crate::puzzle::PuzzleState;
use crate::tile::TileId;

#[derive(Clone, Debug, PartialEq)]
pub struct TileView {
    pub id: TileId,
    pub position: usize,
    pub column: usize,
    pub row: usize,
    /// Top-left corner of the tile on the board, in pixels.
    pub x: f64,
    pub y: f64,
    pub rotation_degrees: u32,
    pub selected: bool,
    /// Offset of the picture behind this tile; the picture is its home slice.
    pub background_offset: (f64, f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderModel {
    /// Tiles in slot order.
    pub tiles: Vec<TileView>,
    pub tile_size: f64,
    pub columns: usize,
    pub rows: usize,
    pub background_size: (f64, f64),
}

impl RenderModel {
    pub fn build(state: &PuzzleState, layout: &Layout) -> Self {
        let tile_size = layout.tile_size;
        let columns = layout.columns;

        let mut tiles: Vec<TileView> = state
            .tiles()
            .iter()
            .map(|tile| {
                let (column, row) = slot_to_cell(tile.position, columns);
                TileView {
                    id: tile.id,
                    position: tile.position,
                    column,
                    row,
                    x: column as f64 * tile_size,
                    y: row as f64 * tile_size,
                    rotation_degrees: tile.rotation.degrees(),
                    selected: state.selected() == Some(tile.id),
                    background_offset: background_offset(
                        tile.id.original_index(),
                        columns,
                        tile_size,
                    ),
                }
            })
            .collect();
        tiles.sort_unstable_by_key(|view| view.position);

        Self {
            tiles,
            tile_size,
            columns,
            rows: layout.rows,
            background_size: layout.background_size(),
        }
    }

    /// The tile drawn in the given grid cell.
    pub fn tile_at_cell(&self, column: usize, row: usize) -> Option<&TileView> {
        if column >= self.columns {
            return None;
        }
        self.tiles.get(row * self.columns + column)
    }
}
