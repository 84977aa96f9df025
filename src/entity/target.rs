//! Ghost targeting and direction selection.
//!
//! Every function here is pure over the map and a small view of the world.
//! At a centered decision point a ghost computes a target tile for its mode
//! and then picks, among the legal non-reverse candidates, the direction
//! whose next tile minimizes squared distance to the target. Ties fall to
//! the canonical priority order ([`Direction::PRIORITY`]).

use glam::IVec2;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use smallvec::SmallVec;

use crate::constants::DOORSTEP_TILE;
use crate::entity::ghost::{GhostKind, Mode};
use crate::map::direction::Direction;
use crate::map::Map;

/// How far ahead of the player the ambusher aims.
const AMBUSH_LOOKAHEAD: i32 = 4;
/// Lookahead for the intermediate point of the vector targeter.
const VECTOR_LOOKAHEAD: i32 = 2;
/// Manhattan distance at which the threshold ghost switches to pursuit.
const THRESHOLD_TILES: i32 = 8;

/// The world view targeting needs: player and lead-ghost positions.
#[derive(Debug, Clone, Copy)]
pub struct TargetView {
    pub player_tile: IVec2,
    pub player_direction: Direction,
    pub blinky_tile: IVec2,
}

/// A point `tiles` ahead of the player, reproducing the arcade quirk:
/// when the player faces up, the point is additionally shifted the same
/// distance to the left.
fn ahead_of_player(view: &TargetView, tiles: i32) -> IVec2 {
    let v = view.player_direction.as_vec();
    let mut point = view.player_tile + IVec2::new(v.x as i32, v.y as i32) * tiles;
    if view.player_direction == Direction::Up {
        point.x -= tiles;
    }
    point
}

/// The target tile for a ghost in the given mode.
///
/// Targets are metric points only; they may be walls or lie off-board.
/// Frightened is absent here: it selects a random direction instead of a
/// target (see [`choose_frightened_direction`]).
pub fn target_tile(kind: GhostKind, mode: Mode, ghost_tile: IVec2, view: &TargetView) -> IVec2 {
    match mode {
        Mode::Eyes | Mode::EnterHouse => DOORSTEP_TILE,
        Mode::Scatter => kind.scatter_target(),
        _ => match kind {
            // Direct pursuit.
            GhostKind::Blinky => view.player_tile,
            // Ambush ahead of the player's facing.
            GhostKind::Pinky => ahead_of_player(view, AMBUSH_LOOKAHEAD),
            // Double the vector from the lead ghost through the point two
            // tiles ahead of the player.
            GhostKind::Inky => {
                let pivot = ahead_of_player(view, VECTOR_LOOKAHEAD);
                pivot * 2 - view.blinky_tile
            }
            // Pursue when far, retreat to the corner when close.
            GhostKind::Clyde => {
                let delta = view.player_tile - ghost_tile;
                if delta.x.abs() + delta.y.abs() >= THRESHOLD_TILES {
                    view.player_tile
                } else {
                    kind.scatter_target()
                }
            }
        },
    }
}

/// Collects the legal candidate directions at a centered decision point:
/// no reversal, no walls, doors only for house-bound modes, and no upward
/// turn off a red-zone tile outside those modes.
fn candidates(map: &Map, tile: IVec2, current: Direction, mode: Mode) -> SmallVec<[Direction; 3]> {
    let flags = mode.traversal_flags();
    let mut out = SmallVec::new();
    for direction in Direction::PRIORITY {
        if direction == current.opposite() {
            continue;
        }
        if direction == Direction::Up && map.is_red_zone(tile) && !mode.ignores_zone_restrictions() {
            continue;
        }
        let v = direction.as_vec();
        if map.is_walkable(tile + IVec2::new(v.x as i32, v.y as i32), flags) {
            out.push(direction);
        }
    }
    out
}

/// Chooses the next direction toward `target`.
///
/// Candidates are evaluated in priority order with a strict minimum on
/// squared tile distance, so the earlier candidate wins ties. With no
/// legal candidate the reverse is taken if walkable; failing that the
/// ghost holds position (`None`).
pub fn choose_direction(map: &Map, tile: IVec2, current: Direction, mode: Mode, target: IVec2) -> Option<Direction> {
    let mut best: Option<(i64, Direction)> = None;
    for direction in candidates(map, tile, current, mode) {
        let v = direction.as_vec();
        let next = tile + IVec2::new(v.x as i32, v.y as i32);
        let delta = next - target;
        let distance = delta.x as i64 * delta.x as i64 + delta.y as i64 * delta.y as i64;
        if best.is_none_or(|(d, _)| distance < d) {
            best = Some((distance, direction));
        }
    }
    match best {
        Some((_, direction)) => Some(direction),
        None => {
            let reverse = current.opposite();
            let v = reverse.as_vec();
            map.is_walkable(tile + IVec2::new(v.x as i32, v.y as i32), mode.traversal_flags())
                .then_some(reverse)
        }
    }
}

/// Frightened pathing: a uniformly random legal candidate.
///
/// The arcade reference's randomized turn choice is not verified; this
/// stands in for it without claiming accuracy.
pub fn choose_frightened_direction(
    map: &Map,
    tile: IVec2,
    current: Direction,
    rng: &mut SmallRng,
) -> Option<Direction> {
    let options = candidates(map, tile, current, Mode::Frightened);
    match options.choose(rng) {
        Some(&direction) => Some(direction),
        None => {
            let reverse = current.opposite();
            let v = reverse.as_vec();
            map.is_walkable(tile + IVec2::new(v.x as i32, v.y as i32), Mode::Frightened.traversal_flags())
                .then_some(reverse)
        }
    }
}
