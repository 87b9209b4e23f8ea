//! Tile identity, rotation and placement types.
//!
//! A tile's identity embeds the slot it occupies in the solved picture, so
//! the solved check never needs a separate lookup table.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Prefix shared by every textual tile id.
const ID_PREFIX: &str = "tile-";

/// Stable tile identity, written as `tile-{original_index}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(usize);

impl TileId {
    pub const fn new(original_index: usize) -> Self {
        Self(original_index)
    }

    /// The slot this tile occupies when the puzzle is solved.
    #[inline]
    pub const fn original_index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ID_PREFIX, self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid tile id {0:?}, expected `tile-<index>`")]
pub struct ParseTileIdError(String);

impl FromStr for TileId {
    type Err = ParseTileIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(ID_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map(TileId)
            .ok_or_else(|| ParseTileIdError(s.to_owned()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("rotation must be 0, 90, 180 or 270 degrees, got {0}")]
pub struct InvalidRotation(pub u32);

/// Clockwise rotation in quarter turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    pub fn from_degrees(degrees: u32) -> Result<Self, InvalidRotation> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(InvalidRotation(other)),
        }
    }

    pub const fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    pub const fn degrees(self) -> u32 {
        self.quarter_turns() as u32 * 90
    }

    /// One more quarter turn clockwise, wrapping 270 back to 0.
    #[inline]
    pub const fn rotated_cw(self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + 1)
    }

    /// Quarter turns still needed to bring the tile upright.
    pub const fn turns_to_upright(self) -> u8 {
        (4 - self.quarter_turns()) % 4
    }

    pub const fn is_upright(self) -> bool {
        matches!(self, Rotation::Deg0)
    }
}

/// A single tile of the puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    /// Slot currently occupied, in row-major grid order.
    pub position: usize,
    pub rotation: Rotation,
}

impl Tile {
    pub const fn new(id: TileId, position: usize, rotation: Rotation) -> Self {
        Self {
            id,
            position,
            rotation,
        }
    }

    /// True when the tile sits in its home slot and is upright.
    #[inline]
    pub fn is_home(&self) -> bool {
        self.position == self.id.original_index() && self.rotation.is_upright()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id_display_and_parse() {
        let id = TileId::new(42);
        assert_eq!(id.to_string(), "tile-42");
        assert_eq!("tile-42".parse::<TileId>(), Ok(id));
    }

    #[test]
    fn test_tile_id_rejects_malformed() {
        for bad in ["", "tile-", "tile-x", "tile--1", "piece-3", "tile-1a", "tile-+1"] {
            assert!(bad.parse::<TileId>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_four_rotations_return_to_start() {
        for start in Rotation::ALL {
            let mut rotation = start;
            for _ in 0..4 {
                rotation = rotation.rotated_cw();
            }
            assert_eq!(rotation, start, "four quarter turns from {start:?}");
        }
    }

    #[test]
    fn test_rotation_wraps_at_270() {
        assert_eq!(Rotation::Deg270.rotated_cw(), Rotation::Deg0);
        assert_eq!(Rotation::Deg90.rotated_cw().degrees(), 180);
    }

    #[test]
    fn test_turns_to_upright() {
        assert_eq!(Rotation::Deg0.turns_to_upright(), 0);
        assert_eq!(Rotation::Deg90.turns_to_upright(), 3);
        assert_eq!(Rotation::Deg180.turns_to_upright(), 2);
        assert_eq!(Rotation::Deg270.turns_to_upright(), 1);
    }

    #[test]
    fn test_from_degrees() {
        assert_eq!(Rotation::from_degrees(180), Ok(Rotation::Deg180));
        assert_eq!(Rotation::from_degrees(45), Err(InvalidRotation(45)));
        assert_eq!(Rotation::from_degrees(360), Err(InvalidRotation(360)));
    }

    #[test]
    fn test_tile_is_home() {
        let id = TileId::new(3);
        assert!(Tile::new(id, 3, Rotation::Deg0).is_home());
        assert!(!Tile::new(id, 3, Rotation::Deg90).is_home());
        assert!(!Tile::new(id, 4, Rotation::Deg0).is_home());
    }
}
