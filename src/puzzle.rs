//! The puzzle state machine.
//!
//! Tiles keep their creation order for the lifetime of a puzzle; only their
//! `position` and `rotation` change. A click either selects a tile, rotates
//! the selected tile (clicking it again), or swaps the selected tile with the
//! clicked one.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;
use tracing::{debug, info};

use crate::tile::{Rotation, Tile, TileId};

/// Tiles in a standard 5x10 board.
pub const DEFAULT_TILE_COUNT: usize = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("duplicate tile id {0}")]
    DuplicateId(TileId),
    #[error("tile {id} has position {position}, outside 0..{tile_count}")]
    PositionOutOfRange {
        id: TileId,
        position: usize,
        tile_count: usize,
    },
    #[error("position {0} is occupied by more than one tile")]
    DuplicatePosition(usize),
    #[error("tile {id} belongs at slot {}, outside 0..{tile_count}", .id.original_index())]
    IdOutOfRange { id: TileId, tile_count: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// At least one tile is misplaced or rotated.
    Scrambled,
    Solved,
}

/// What a click did to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(TileId),
    Rotated { id: TileId, rotation: Rotation },
    Swapped { first: TileId, second: TileId },
    /// The id does not name a tile of this puzzle; nothing changed.
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleState {
    tiles: Vec<Tile>,
    /// Index into `tiles` for each id; ids never change after creation.
    index_by_id: FxHashMap<TileId, usize>,
    selected: Option<TileId>,
}

impl PuzzleState {
    /// Starts a new scrambled puzzle of `tile_count` tiles.
    ///
    /// Each tile gets a uniformly random rotation and the positions are a
    /// uniformly random permutation (Fisher-Yates). A draw that happens to be
    /// solved is redrawn, so a non-empty puzzle always starts scrambled.
    pub fn new<R: Rng + ?Sized>(tile_count: usize, rng: &mut R) -> Self {
        loop {
            let mut positions: Vec<usize> = (0..tile_count).collect();
            positions.shuffle(rng);

            let tiles = positions
                .into_iter()
                .enumerate()
                .map(|(original_index, position)| {
                    let rotation = Rotation::from_quarter_turns(rng.random_range(0..4u8));
                    Tile::new(TileId::new(original_index), position, rotation)
                })
                .collect();

            let state = Self::with_tiles_unchecked(tiles);
            if tile_count == 0 || !state.is_solved() {
                info!(
                    tile_count,
                    misplaced = state.misplaced_count(),
                    "started new puzzle"
                );
                return state;
            }
            debug!("discarding a draw that came out solved");
        }
    }

    /// The solved arrangement: every tile home and upright.
    pub fn solved(tile_count: usize) -> Self {
        let tiles = (0..tile_count)
            .map(|i| Tile::new(TileId::new(i), i, Rotation::Deg0))
            .collect();
        Self::with_tiles_unchecked(tiles)
    }

    /// Builds a state from explicit tiles, in the given render order.
    ///
    /// Positions must form a permutation of `0..tiles.len()` and every id must
    /// name a slot in that range exactly once.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self, PuzzleError> {
        let tile_count = tiles.len();
        let mut seen_ids = FxHashSet::default();
        let mut seen_positions = FxHashSet::default();

        for tile in &tiles {
            if tile.id.original_index() >= tile_count {
                return Err(PuzzleError::IdOutOfRange {
                    id: tile.id,
                    tile_count,
                });
            }
            if !seen_ids.insert(tile.id) {
                return Err(PuzzleError::DuplicateId(tile.id));
            }
            if tile.position >= tile_count {
                return Err(PuzzleError::PositionOutOfRange {
                    id: tile.id,
                    position: tile.position,
                    tile_count,
                });
            }
            if !seen_positions.insert(tile.position) {
                return Err(PuzzleError::DuplicatePosition(tile.position));
            }
        }

        Ok(Self::with_tiles_unchecked(tiles))
    }

    fn with_tiles_unchecked(tiles: Vec<Tile>) -> Self {
        let index_by_id = tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (tile.id, index))
            .collect();
        Self {
            tiles,
            index_by_id,
            selected: None,
        }
    }

    /// Tiles in render order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn selected(&self) -> Option<TileId> {
        self.selected
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.index_by_id.get(&id).map(|&index| &self.tiles[index])
    }

    /// The tile currently occupying `position`.
    pub fn tile_at(&self, position: usize) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.position == position)
    }

    /// Applies one click.
    ///
    /// Unknown ids are ignored and leave the selection as it was.
    pub fn on_tile_click(&mut self, id: TileId) -> ClickOutcome {
        let Some(&clicked) = self.index_by_id.get(&id) else {
            debug!(%id, "ignoring click on unknown tile");
            return ClickOutcome::Ignored;
        };

        match self.selected.take() {
            None => {
                self.selected = Some(id);
                debug!(%id, "selected tile");
                ClickOutcome::Selected(id)
            }
            Some(selected) if selected == id => {
                let tile = &mut self.tiles[clicked];
                tile.rotation = tile.rotation.rotated_cw();
                debug!(%id, degrees = tile.rotation.degrees(), "rotated tile");
                ClickOutcome::Rotated {
                    id,
                    rotation: tile.rotation,
                }
            }
            Some(selected) => {
                let first = self.index_by_id[&selected];
                let first_position = self.tiles[first].position;
                self.tiles[first].position = self.tiles[clicked].position;
                self.tiles[clicked].position = first_position;
                debug!(first = %selected, second = %id, "swapped tiles");
                ClickOutcome::Swapped {
                    first: selected,
                    second: id,
                }
            }
        }
    }

    /// True iff there is at least one tile and every tile is home and upright.
    pub fn is_solved(&self) -> bool {
        !self.tiles.is_empty() && self.tiles.iter().all(Tile::is_home)
    }

    pub fn status(&self) -> Status {
        if self.is_solved() {
            Status::Solved
        } else {
            Status::Scrambled
        }
    }

    /// Tiles that are out of their home slot or not upright.
    pub fn misplaced_count(&self) -> usize {
        self.tiles.iter().filter(|tile| !tile.is_home()).count()
    }
}
