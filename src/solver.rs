//! Click planner.
//!
//! Produces a sequence of clicks that brings any valid state back to solved,
//! using only the moves a player has: swaps via two clicks on different
//! tiles and quarter turns via two clicks on the same tile.
//!
//! - Positions are fixed slot by slot: when slot `p` holds a stranger, it is
//!   swapped with the tile whose home is `p`. Every swap sends one tile home,
//!   so at most `n - 1` swaps are needed.
//! - Rotations are fixed afterwards, so the last click is the one that
//!   completes the puzzle.

use crate::puzzle::PuzzleState;
use crate::tile::TileId;

/// A planned click sequence and what it amounts to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plan {
    pub clicks: Vec<TileId>,
    pub swaps: usize,
    pub quarter_turns: usize,
}

impl Plan {
    fn push_swap(&mut self, first: TileId, second: TileId) {
        self.clicks.extend([first, second]);
        self.swaps += 1;
    }

    fn push_turn(&mut self, id: TileId) {
        self.clicks.extend([id, id]);
        self.quarter_turns += 1;
    }
}

/// Plans the clicks that solve `state`.
///
/// A pending selection is resolved first by clicking the selected tile again,
/// which turns it once more; the rotation pass accounts for that turn.
pub fn plan_clicks(state: &PuzzleState) -> Plan {
    let mut sim = state.clone();
    let mut plan = Plan::default();

    if let Some(selected) = sim.selected() {
        sim.on_tile_click(selected);
        plan.clicks.push(selected);
        plan.quarter_turns += 1;
    }

    for slot in 0..sim.len() {
        let Some(occupant) = sim.tile_at(slot).map(|tile| tile.id) else {
            continue;
        };
        let owner = TileId::new(slot);
        if occupant != owner {
            sim.on_tile_click(occupant);
            sim.on_tile_click(owner);
            plan.push_swap(occupant, owner);
        }
    }

    let turns: Vec<(TileId, u8)> = sim
        .tiles()
        .iter()
        .map(|tile| (tile.id, tile.rotation.turns_to_upright()))
        .filter(|&(_, turns)| turns > 0)
        .collect();
    for (id, count) in turns {
        for _ in 0..count {
            plan.push_turn(id);
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::puzzle::DEFAULT_TILE_COUNT;
    use crate::tile::{Rotation, Tile};

    #[test]
    fn test_solved_state_needs_no_clicks() {
        let plan = plan_clicks(&PuzzleState::solved(DEFAULT_TILE_COUNT));
        assert_eq!(plan, Plan::default());
    }

    #[test]
    fn test_plan_solves_exactly_on_last_click() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut state = PuzzleState::new(DEFAULT_TILE_COUNT, &mut rng);
        let plan = plan_clicks(&state);

        assert!(!plan.clicks.is_empty());
        let last = plan.clicks.len() - 1;
        for (step, &id) in plan.clicks.iter().enumerate() {
            assert!(!state.is_solved(), "solved early, before click {step}");
            state.on_tile_click(id);
            assert_eq!(
                state.is_solved(),
                step == last,
                "solved state after click {step} of {last}"
            );
        }
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_plan_is_within_move_bounds() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..20 {
            let state = PuzzleState::new(DEFAULT_TILE_COUNT, &mut rng);
            let plan = plan_clicks(&state);
            assert!(plan.swaps < DEFAULT_TILE_COUNT, "{} swaps", plan.swaps);
            assert!(plan.quarter_turns <= 3 * DEFAULT_TILE_COUNT);
            assert_eq!(plan.clicks.len(), 2 * (plan.swaps + plan.quarter_turns));
        }
    }

    #[test]
    fn test_plan_resolves_pending_selection() {
        let mut state = PuzzleState::solved(4);
        let id = TileId::new(2);
        state.on_tile_click(id);

        let plan = plan_clicks(&state);
        // re-click rotates to 90, three more turns bring it back
        assert_eq!(plan.clicks.len(), 1 + 2 * 3);
        assert_eq!(plan.quarter_turns, 4);

        for &click in &plan.clicks {
            state.on_tile_click(click);
        }
        assert!(state.is_solved());
    }

    #[test]
    fn test_two_cycle_takes_one_swap() {
        let tiles = vec![
            Tile::new(TileId::new(0), 1, Rotation::Deg0),
            Tile::new(TileId::new(1), 0, Rotation::Deg0),
            Tile::new(TileId::new(2), 2, Rotation::Deg0),
        ];
        let state = PuzzleState::from_tiles(tiles).unwrap();
        let plan = plan_clicks(&state);

        assert_eq!(plan.swaps, 1);
        assert_eq!(plan.clicks, vec![TileId::new(1), TileId::new(0)]);
    }
}
