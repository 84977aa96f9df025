//! The duty-cycle speed mask engine.
//!
//! Non-integer arcade speed ratios are reproduced without fractional math:
//! an actor may move on a tick iff `(tick & mask) != 0`, so a mask with `n`
//! low bits set yields a `1 - 2^-n` duty cycle (`0x0007` moves on 7 of
//! every 8 ticks). Selection is pure; nothing here touches positions.

use crate::constants::{
    level_tier, ELROY1_MASKS, ELROY2_MASKS, GHOST_EYES_MASK, GHOST_FRIGHT_MASKS, GHOST_HOUSE_MASK,
    GHOST_NORMAL_MASKS, GHOST_TUNNEL_MASKS, PLAYER_DOT_MASKS, PLAYER_FRIGHT_DOT_MASKS,
    PLAYER_FRIGHT_MASKS, PLAYER_NORMAL_MASKS,
};
use crate::entity::ghost::Mode;

/// Whether the duty-cycle `mask` permits movement on `tick`.
///
/// Only the low 16 bits of the clock participate, matching the 16-bit
/// arcade frame counter.
pub const fn can_move(tick: u32, mask: u16) -> bool {
    (tick as u16) & mask != 0
}

/// Selects the player's mask for this tick.
pub fn player_mask(level: u32, frightened: bool, on_dot: bool) -> u16 {
    let tier = level_tier(level);
    match (frightened, on_dot) {
        (false, false) => PLAYER_NORMAL_MASKS[tier],
        (false, true) => PLAYER_DOT_MASKS[tier],
        (true, false) => PLAYER_FRIGHT_MASKS[tier],
        (true, true) => PLAYER_FRIGHT_DOT_MASKS[tier],
    }
}

/// Selects a ghost's mask for this tick.
///
/// `elroy_stage` is only nonzero for Blinky and only applies while the
/// ghost is pursuing normally; it never overrides the tunnel crawl.
pub fn ghost_mask(level: u32, mode: Mode, in_tunnel: bool, elroy_stage: u8) -> u16 {
    let tier = level_tier(level);
    match mode {
        Mode::Eyes | Mode::EnterHouse => GHOST_EYES_MASK,
        Mode::House | Mode::LeaveHouse => GHOST_HOUSE_MASK,
        _ if in_tunnel => GHOST_TUNNEL_MASKS[tier],
        Mode::Frightened => GHOST_FRIGHT_MASKS[tier],
        Mode::Scatter | Mode::Chase => match elroy_stage {
            0 => GHOST_NORMAL_MASKS[tier],
            1 => ELROY1_MASKS[tier],
            _ => ELROY2_MASKS[tier],
        },
    }
}
