//! The shared positional core of every actor.
//!
//! Actors live on a tile grid with a sub-tile pixel offset on each axis in
//! `[0, 7]`; offset `(4, 4)` is the tile center. All movement is one pixel
//! per enabled tick. Crossing the `7 -> 0` (or `0 -> 7`) boundary hands the
//! actor to the adjacent tile, and the tunnel row wraps horizontally.

use glam::{I8Vec2, IVec2};

use crate::constants::{BOARD_CELL_SIZE, CELL_SIZE, CENTER_OFFSET, TUNNEL_ROW};
use crate::map::direction::Direction;

/// Tile position, sub-tile offset and facing of a single actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub tile: IVec2,
    pub offset: I8Vec2,
    pub direction: Direction,
    /// Pixels traveled since spawn; drives sprite animation phase.
    pub odometer: u32,
}

impl Actor {
    /// Creates an actor centered on `tile`, facing `direction`.
    pub fn new(tile: IVec2, direction: Direction) -> Self {
        Self {
            tile,
            offset: I8Vec2::new(CENTER_OFFSET, CENTER_OFFSET),
            direction,
            odometer: 0,
        }
    }

    /// Whether the actor sits exactly on its tile center.
    pub fn centered(&self) -> bool {
        self.offset.x == CENTER_OFFSET && self.offset.y == CENTER_OFFSET
    }

    /// Absolute pixel position (tile * cell size + offset).
    pub fn pixel_position(&self) -> IVec2 {
        self.tile * CELL_SIZE as i32 + IVec2::new(self.offset.x as i32, self.offset.y as i32)
    }

    /// The tile adjacent to the actor in `direction`.
    pub fn next_tile(&self, direction: Direction) -> IVec2 {
        let v = direction.as_vec();
        self.tile + IVec2::new(v.x as i32, v.y as i32)
    }

    /// Snaps the actor back onto its tile center.
    pub fn recenter(&mut self) {
        self.offset = I8Vec2::new(CENTER_OFFSET, CENTER_OFFSET);
    }

    /// Reverses the facing direction in place. Legal mid-corridor only on a
    /// schedule or frightened edge; callers own that restriction.
    pub fn reverse(&mut self) {
        self.direction = self.direction.opposite();
    }

    /// Advances one pixel in the facing direction, handing off to the
    /// adjacent tile at the boundary and wrapping on the tunnel row.
    ///
    /// Returns `true` when the step moved the actor onto a new tile.
    pub fn step_pixel(&mut self) -> bool {
        let v = self.direction.as_vec();
        self.offset += v;
        self.odometer = self.odometer.wrapping_add(1);

        let mut changed_tile = false;
        if self.offset.x > 7 {
            self.offset.x = 0;
            self.tile.x += 1;
            changed_tile = true;
        } else if self.offset.x < 0 {
            self.offset.x = 7;
            self.tile.x -= 1;
            changed_tile = true;
        }
        if self.offset.y > 7 {
            self.offset.y = 0;
            self.tile.y += 1;
            changed_tile = true;
        } else if self.offset.y < 0 {
            self.offset.y = 7;
            self.tile.y -= 1;
            changed_tile = true;
        }

        // Horizontal wrap is only valid on the tunnel row.
        if self.tile.y == TUNNEL_ROW {
            let width = BOARD_CELL_SIZE.x as i32;
            if self.tile.x < 0 {
                self.tile.x = width - 1;
            } else if self.tile.x >= width {
                self.tile.x = 0;
            }
        }

        changed_tile
    }

    /// Two-frame animation phase derived from distance traveled.
    pub fn animation_phase(&self) -> u8 {
        ((self.odometer / 4) % 2) as u8
    }
}
