//! Static data consumed by the simulation: the board layout and every
//! level-indexed lookup table (speed masks, phase schedules, frightened
//! durations, house-release limits, scoring).
//!
//! All of these are plain arrays handed to [`crate::game::Game`] at
//! initialization; nothing in this module is mutated at runtime.

use glam::{IVec2, UVec2};

/// Fixed simulation rate. One tick is one simulation step.
pub const TICKS_PER_SECOND: u32 = 60;

/// The size of each cell, in pixels.
pub const CELL_SIZE: u32 = 8;
/// The sub-tile pixel offset at which an actor sits exactly on a tile center.
pub const CENTER_OFFSET: i8 = 4;
/// The size of the game board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(28, 31);

/// The row on which the side tunnels sit. Horizontal wrap is only legal here.
pub const TUNNEL_ROW: i32 = 14;

/// The tile just above the house door, where ghosts emerge and eyes return.
pub const DOORSTEP_TILE: IVec2 = IVec2::new(13, 11);
/// The resting tile at the center of the ghost house.
pub const HOUSE_CENTER_TILE: IVec2 = IVec2::new(13, 14);

/// Tiles where ghosts may not turn upward outside of the house modes.
pub const RED_ZONE_TILES: [IVec2; 4] = [
    IVec2::new(12, 11),
    IVec2::new(15, 11),
    IVec2::new(12, 23),
    IVec2::new(15, 23),
];

/// Per-ghost scatter corners. These are metric targets, not destinations,
/// so they may sit on walls or outside the board.
pub const SCATTER_TARGETS: [IVec2; 4] = [
    IVec2::new(25, 0),  // Blinky
    IVec2::new(2, 0),   // Pinky
    IVec2::new(27, 30), // Inky
    IVec2::new(0, 30),  // Clyde
];

/// Ghost spawn tiles: Blinky on the doorstep, the rest inside the house.
pub const GHOST_SPAWN_TILES: [IVec2; 4] = [
    IVec2::new(13, 11),
    IVec2::new(13, 14),
    IVec2::new(11, 14),
    IVec2::new(15, 14),
];

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    /// An empty walkable tile.
    Empty,
    /// A wall tile.
    Wall,
    /// A regular dot.
    Dot,
    /// A power pellet.
    PowerPellet,
    /// The player's starting tile.
    StartingPosition,
    /// A tunnel tile; horizontal wrap happens past either end.
    Tunnel,
    /// The house door; passable only by ghosts entering or leaving.
    Door,
    /// The house interior; passable only by ghosts in house modes.
    House,
}

/// The raw layout of the game board, as rows of characters.
///
/// `#` wall, `.` dot, `o` power pellet, `=` door, `h` house interior,
/// `T` tunnel, `0` player spawn, space empty.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "######.##### ## #####.######",
    "######.##          ##.######",
    "######.## ###==### ##.######",
    "######.## #hhhhhh# ##.######",
    "TTTTTT.   #hhhhhh#   .TTTTTT",
    "######.## #hhhhhh# ##.######",
    "######.## ######## ##.######",
    "######.##          ##.######",
    "######.## ######## ##.######",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......0........##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

/// Number of level tiers the tables below distinguish. Levels past the last
/// tier reuse its values.
pub const LEVEL_TIERS: usize = 5;

/// Clamps a 1-based level number into a table index.
pub const fn level_tier(level: u32) -> usize {
    let idx = level.saturating_sub(1) as usize;
    if idx >= LEVEL_TIERS {
        LEVEL_TIERS - 1
    } else {
        idx
    }
}

// Duty-cycle speed masks. An actor may move on a tick iff
// `(tick & mask) != 0`, so the moving fraction is `1 - 2^-popcount(mask)`.
// Each table is indexed by level tier; later tiers are supersets of earlier
// ones so permissiveness never decreases with difficulty.
pub const PLAYER_NORMAL_MASKS: [u16; LEVEL_TIERS] = [0x0007, 0x000F, 0x000F, 0x001F, 0x003F];
pub const PLAYER_DOT_MASKS: [u16; LEVEL_TIERS] = [0x0003, 0x0007, 0x0007, 0x000F, 0x001F];
pub const PLAYER_FRIGHT_MASKS: [u16; LEVEL_TIERS] = [0x000F, 0x001F, 0x001F, 0x003F, 0x003F];
pub const PLAYER_FRIGHT_DOT_MASKS: [u16; LEVEL_TIERS] = [0x0007, 0x000F, 0x000F, 0x001F, 0x001F];
pub const GHOST_NORMAL_MASKS: [u16; LEVEL_TIERS] = [0x0003, 0x0007, 0x0007, 0x000F, 0x001F];
pub const GHOST_FRIGHT_MASKS: [u16; LEVEL_TIERS] = [0x0001, 0x0003, 0x0003, 0x0003, 0x0007];
pub const GHOST_TUNNEL_MASKS: [u16; LEVEL_TIERS] = [0x0001, 0x0001, 0x0003, 0x0003, 0x0003];
pub const ELROY1_MASKS: [u16; LEVEL_TIERS] = [0x000F, 0x001F, 0x001F, 0x003F, 0x003F];
pub const ELROY2_MASKS: [u16; LEVEL_TIERS] = [0x001F, 0x003F, 0x003F, 0x007F, 0x007F];
/// Ghosts bouncing in or filing out of the house run at half speed.
pub const GHOST_HOUSE_MASK: u16 = 0x0001;
/// Eyes fly home at full speed, every tick.
pub const GHOST_EYES_MASK: u16 = 0xFFFF;

/// Remaining-dot thresholds for Blinky's Elroy stages 1 and 2, per tier.
pub const ELROY_DOT_THRESHOLDS: [(u32, u32); LEVEL_TIERS] =
    [(20, 10), (30, 15), (40, 20), (40, 20), (60, 30)];

/// Scatter/chase phase durations in ticks, alternating starting with
/// Scatter. Past the last entry the schedule stays in Chase forever.
pub const PHASE_SCHEDULES: [&[u32]; 3] = [
    // Level 1
    &[420, 1200, 420, 1200, 300, 1200, 300],
    // Levels 2-4
    &[420, 1200, 420, 1200, 300, 61980, 1],
    // Levels 5+
    &[300, 1200, 300, 1200, 300, 62220, 1],
];

/// Picks the phase schedule row for a 1-based level number.
pub const fn phase_schedule(level: u32) -> &'static [u32] {
    match level {
        0 | 1 => PHASE_SCHEDULES[0],
        2..=4 => PHASE_SCHEDULES[1],
        _ => PHASE_SCHEDULES[2],
    }
}

/// Frightened window length in ticks, per level tier.
pub const FRIGHT_TICKS: [u32; LEVEL_TIERS] = [360, 300, 240, 180, 120];
/// The window blinks during its final second.
pub const FRIGHT_BLINK_TICKS: u32 = 60;

/// Per-ghost dot-counter limits, per level tier. Blinky never waits.
pub const DOT_LIMITS: [[u32; LEVEL_TIERS]; 4] = [
    [0, 0, 0, 0, 0],    // Blinky
    [0, 0, 0, 0, 0],    // Pinky
    [30, 0, 0, 0, 0],   // Inky
    [60, 50, 0, 0, 0],  // Clyde
];

/// Global dot-counter release limits (Pinky, Inky, Clyde). Hitting the last
/// value force-releases Clyde and retires the global counter.
pub const GLOBAL_DOT_LIMITS: [u32; 3] = [7, 17, 32];

/// Per-ghost fallback release deadlines, in ticks after the counter arms.
/// A waiting ghost is released when its deadline passes even if no dots
/// were eaten.
pub const FALLBACK_RELEASE_TICKS: [u32; 4] = [0, 240, 900, 1560];

/// Delay before a ghost that returned home as eyes files back out.
pub const RELAUNCH_TICKS: u32 = 90;

/// Movement suppression after eating, in ticks.
pub const DOT_FREEZE_TICKS: u8 = 1;
pub const PELLET_FREEZE_TICKS: u8 = 3;

pub const DOT_SCORE: u32 = 10;
pub const PELLET_SCORE: u32 = 50;
/// Score tiers for consecutive ghosts eaten in one frightened window.
/// The fourth and later eats stay at the top tier.
pub const GHOST_SCORES: [u32; 4] = [200, 400, 800, 1600];

/// Axis-aligned pixel threshold for actor collision (strict less-than).
pub const COLLISION_THRESHOLD_PX: i32 = 4;

pub const STARTING_LIVES: u32 = 3;

/// Dots-eaten counts at which the bonus item appears, once each per round.
pub const BONUS_SPAWN_DOTS: [u32; 2] = [70, 170];
/// Ticks the bonus item stays on the board before despawning.
pub const BONUS_TTL_TICKS: u32 = 600;
/// Bonus item value per level tier.
pub const BONUS_SCORES: [u32; LEVEL_TIERS] = [100, 300, 500, 500, 700];
/// Where the bonus item appears, just below the house.
pub const BONUS_TILE: IVec2 = IVec2::new(13, 17);
