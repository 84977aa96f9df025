//! The player actor.

use glam::IVec2;

use crate::entity::actor::Actor;
use crate::map::direction::Direction;
use crate::map::{Map, TraversalFlags};

/// The player: positional core plus the buffered turn request and the
/// post-eating freeze timer.
pub struct Pacman {
    pub actor: Actor,
    /// Direction requested by input, applied at the next legal centered turn.
    pub wanted: Option<Direction>,
    /// Ticks of movement suppression left after eating.
    pub freeze: u8,
    /// Whether the duty-cycle mask permitted movement this tick.
    pub move_enabled: bool,
}

impl Pacman {
    pub fn new(spawn: IVec2) -> Self {
        Self {
            actor: Actor::new(spawn, Direction::Left),
            wanted: None,
            freeze: 0,
            move_enabled: false,
        }
    }

    /// Buffers a turn request. At most one is held; a newer request
    /// replaces the older one.
    pub fn buffer_direction(&mut self, direction: Direction) {
        self.wanted = Some(direction);
    }

    /// Advances the player by at most one pixel.
    ///
    /// The buffered direction is applied only when centered and the tile in
    /// that direction is walkable. A blocked actor halts on its center
    /// rather than entering the wall. Returns `true` if a pixel was moved.
    pub fn step(&mut self, map: &Map, move_enabled: bool) -> bool {
        self.move_enabled = move_enabled;

        // Checked before decrement; the timer never wraps.
        if self.freeze > 0 {
            self.freeze -= 1;
            return false;
        }
        if !move_enabled {
            return false;
        }

        if self.actor.centered() {
            if let Some(wanted) = self.wanted {
                if map.is_walkable(self.actor.next_tile(wanted), TraversalFlags::PACMAN) {
                    self.actor.direction = wanted;
                    self.wanted = None;
                }
            }
            if !map.is_walkable(self.actor.next_tile(self.actor.direction), TraversalFlags::PACMAN) {
                // Blocked: hold the center instead of penetrating the wall.
                self.actor.recenter();
                return false;
            }
        }

        self.actor.step_pixel();
        true
    }

    /// Resets position and transient state to the spawn configuration.
    pub fn respawn(&mut self, spawn: IVec2) {
        self.actor = Actor::new(spawn, Direction::Left);
        self.wanted = None;
        self.freeze = 0;
        self.move_enabled = false;
    }
}
