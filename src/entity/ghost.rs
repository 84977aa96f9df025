//! Ghost records and the per-ghost mode machine.
//!
//! Mode transitions driven by the global schedule (scatter/chase flips,
//! frightened window edges) are decided by the game pipeline; this module
//! owns the per-ghost data and the scripted house motion (bounce, leave,
//! enter) that does not follow targeted pathing.

use glam::IVec2;
use strum_macros::{AsRefStr, EnumIter};

use crate::constants::{
    level_tier, CELL_SIZE, CENTER_OFFSET, DOORSTEP_TILE, DOT_LIMITS, FALLBACK_RELEASE_TICKS,
    GHOST_SPAWN_TILES, HOUSE_CENTER_TILE, SCATTER_TARGETS,
};
use crate::entity::actor::Actor;
use crate::map::direction::Direction;
use crate::map::TraversalFlags;

/// The four pursuers, in release-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum GhostKind {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostKind {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Fixed corner tile targeted during scatter phases.
    pub const fn scatter_target(self) -> IVec2 {
        SCATTER_TARGETS[self.index()]
    }

    pub const fn spawn_tile(self) -> IVec2 {
        GHOST_SPAWN_TILES[self.index()]
    }

    /// Dots the player must eat before this ghost leaves the house.
    pub const fn dot_limit(self, level: u32) -> u32 {
        DOT_LIMITS[self.index()][level_tier(level)]
    }

    /// Ticks after which this ghost is released regardless of dot count.
    pub const fn fallback_release_ticks(self) -> u32 {
        FALLBACK_RELEASE_TICKS[self.index()]
    }
}

/// A ghost's behavioral mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum Mode {
    /// Bouncing inside the house, waiting for release.
    House,
    /// Filing out through the door.
    LeaveHouse,
    Scatter,
    Chase,
    Frightened,
    /// Eaten; flying back to the doorstep.
    Eyes,
    /// Descending through the door into the house.
    EnterHouse,
}

impl Mode {
    /// Modes outside the global scatter/chase/frightened assignment.
    pub const fn schedule_exempt(self) -> bool {
        matches!(self, Mode::House | Mode::LeaveHouse | Mode::Eyes | Mode::EnterHouse)
    }

    /// Whether contact with the player in this mode is lethal to them.
    pub const fn lethal(self) -> bool {
        matches!(self, Mode::Scatter | Mode::Chase | Mode::LeaveHouse)
    }

    /// Which tiles a ghost in this mode may enter.
    pub const fn traversal_flags(self) -> TraversalFlags {
        match self {
            Mode::Eyes | Mode::EnterHouse | Mode::LeaveHouse | Mode::House => TraversalFlags::GHOST
                .union(TraversalFlags::DOOR)
                .union(TraversalFlags::HOUSE),
            _ => TraversalFlags::GHOST,
        }
    }

    /// Whether red-zone and door restrictions are lifted in this mode.
    pub const fn ignores_zone_restrictions(self) -> bool {
        matches!(self, Mode::Eyes | Mode::EnterHouse | Mode::LeaveHouse)
    }
}

/// One pursuer: positional core plus mode and release bookkeeping.
pub struct Ghost {
    pub kind: GhostKind,
    pub actor: Actor,
    pub mode: Mode,
    /// Dots credited toward this ghost's release while it waits.
    pub dot_counter: u32,
    /// Release threshold for the current level.
    pub dot_limit: u32,
    /// Absolute tick at which the fallback timer forces release.
    pub fallback_deadline: u32,
    /// Absolute tick at which an eyes-recovered ghost files back out.
    pub relaunch_at: Option<u32>,
}

impl Ghost {
    /// Creates a ghost in its round-start configuration.
    ///
    /// `now` is the current clock value; the fallback deadline is measured
    /// from it. Blinky spawns on the doorstep already pursuing.
    pub fn new(kind: GhostKind, level: u32, now: u32) -> Self {
        let (mode, direction) = match kind {
            GhostKind::Blinky => (Mode::Scatter, Direction::Left),
            _ => (Mode::House, Direction::Up),
        };
        Self {
            kind,
            actor: Actor::new(kind.spawn_tile(), direction),
            mode,
            dot_counter: 0,
            dot_limit: kind.dot_limit(level),
            fallback_deadline: now + kind.fallback_release_ticks(),
            relaunch_at: None,
        }
    }

    /// Whether this ghost sits in the house waiting on dot credit.
    ///
    /// Eyes-recovered ghosts waiting on their relaunch timer are not
    /// eligible for dot credit.
    pub fn waiting_for_release(&self) -> bool {
        self.mode == Mode::House && self.relaunch_at.is_none()
    }

    /// Begins filing out of the house.
    pub fn release(&mut self) {
        debug_assert!(self.mode == Mode::House);
        tracing::debug!(ghost = self.kind.as_ref(), "leaving house");
        self.mode = Mode::LeaveHouse;
        self.relaunch_at = None;
    }

    /// One pixel of scripted motion for the waiting bounce.
    pub fn step_house_bounce(&mut self) {
        match self.actor.direction {
            Direction::Up if self.actor.offset.y <= 2 => self.actor.direction = Direction::Down,
            Direction::Down if self.actor.offset.y >= 6 => self.actor.direction = Direction::Up,
            Direction::Up | Direction::Down => {}
            // House ghosts only ever bob vertically.
            _ => self.actor.direction = Direction::Up,
        }
        self.actor.step_pixel();
    }

    /// One pixel of scripted motion toward the doorstep.
    ///
    /// Returns `true` once the ghost stands centered on the doorstep.
    pub fn step_leave_house(&mut self) -> bool {
        let pixel = self.actor.pixel_position();
        let door_x = DOORSTEP_TILE.x * CELL_SIZE as i32 + CENTER_OFFSET as i32;
        let door_y = DOORSTEP_TILE.y * CELL_SIZE as i32 + CENTER_OFFSET as i32;

        if pixel.x != door_x {
            // Align horizontally under the door first.
            self.actor.direction = if pixel.x < door_x { Direction::Right } else { Direction::Left };
        } else if pixel.y != door_y {
            self.actor.direction = Direction::Up;
        } else {
            return true;
        }
        self.actor.step_pixel();
        let pixel = self.actor.pixel_position();
        pixel.x == door_x && pixel.y == door_y
    }

    /// One pixel of scripted motion from the doorstep down to the house
    /// center. Returns `true` on arrival.
    pub fn step_enter_house(&mut self) -> bool {
        let pixel = self.actor.pixel_position();
        let home_x = HOUSE_CENTER_TILE.x * CELL_SIZE as i32 + CENTER_OFFSET as i32;
        let home_y = HOUSE_CENTER_TILE.y * CELL_SIZE as i32 + CENTER_OFFSET as i32;

        if pixel.x != home_x {
            self.actor.direction = if pixel.x < home_x { Direction::Right } else { Direction::Left };
        } else if pixel.y != home_y {
            self.actor.direction = Direction::Down;
        } else {
            return true;
        }
        self.actor.step_pixel();
        let pixel = self.actor.pixel_position();
        pixel.x == home_x && pixel.y == home_y
    }

    /// Resets the ghost to its round-start configuration.
    pub fn respawn(&mut self, level: u32, now: u32) {
        *self = Ghost::new(self.kind, level, now);
    }
}
