//! The global scatter/chase schedule and the frightened window.

use strum_macros::AsRefStr;

use crate::constants::{level_tier, phase_schedule, FRIGHT_BLINK_TICKS, FRIGHT_TICKS, GHOST_SCORES};
use crate::entity::ghost::Mode;

/// The alternating global phase that drives default ghost targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum Phase {
    Scatter,
    Chase,
}

impl Phase {
    pub const fn mode(self) -> Mode {
        match self {
            Phase::Scatter => Mode::Scatter,
            Phase::Chase => Mode::Chase,
        }
    }
}

/// The scheduled phase `elapsed` ticks after round start.
///
/// Walks the fixed per-level duration table, alternating starting with
/// Scatter; past the final boundary the schedule stays in Chase forever.
pub fn phase_at(level: u32, elapsed: u32) -> Phase {
    let mut boundary = 0u32;
    for (i, &duration) in phase_schedule(level).iter().enumerate() {
        boundary = boundary.saturating_add(duration);
        if elapsed < boundary {
            return if i % 2 == 0 { Phase::Scatter } else { Phase::Chase };
        }
    }
    Phase::Chase
}

/// The time-bounded window in which ghosts are vulnerable, plus the
/// eaten-chain counter that lives and dies with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrightWindow {
    /// Absolute tick at which the window closes. Zero means never opened.
    end_tick: u32,
    /// Ghosts eaten so far within this window.
    chain: u32,
}

impl FrightWindow {
    pub fn active(&self, tick: u32) -> bool {
        tick < self.end_tick
    }

    /// Opens (or re-opens) the window; the chain resets with it.
    pub fn start(&mut self, tick: u32, level: u32) {
        self.end_tick = tick + FRIGHT_TICKS[level_tier(level)];
        self.chain = 0;
    }

    pub fn clear(&mut self) {
        self.end_tick = 0;
        self.chain = 0;
    }

    /// Whether the window is in its last-second warning blink.
    pub fn blinking(&self, tick: u32) -> bool {
        self.active(tick) && self.end_tick - tick <= FRIGHT_BLINK_TICKS
    }

    /// Registers one eaten ghost; returns the 1-based chain index and the
    /// tier score. The fourth and later eats stay at the top tier.
    pub fn eat_ghost(&mut self) -> (u32, u32) {
        self.chain += 1;
        let tier = (self.chain as usize - 1).min(GHOST_SCORES.len() - 1);
        (self.chain, GHOST_SCORES[tier])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_starts_in_scatter() {
        assert_eq!(phase_at(1, 0), Phase::Scatter);
    }

    #[test]
    fn test_first_boundary_flips_to_chase() {
        assert_eq!(phase_at(1, 419), Phase::Scatter);
        assert_eq!(phase_at(1, 420), Phase::Chase);
    }

    #[test]
    fn test_schedule_alternates_then_stays_chase() {
        assert_eq!(phase_at(1, 1619), Phase::Chase);
        assert_eq!(phase_at(1, 1620), Phase::Scatter);
        // Far past every boundary.
        assert_eq!(phase_at(1, 1_000_000), Phase::Chase);
        assert_eq!(phase_at(7, 1_000_000), Phase::Chase);
    }

    #[test]
    fn test_fright_window_bounds() {
        let mut fright = FrightWindow::default();
        assert!(!fright.active(0));
        fright.start(100, 1);
        assert!(fright.active(100));
        assert!(fright.active(459));
        assert!(!fright.active(460));
        assert!(!fright.blinking(150));
        assert!(fright.blinking(405));
    }

    #[test]
    fn test_chain_scores_double_then_cap() {
        let mut fright = FrightWindow::default();
        fright.start(0, 1);
        assert_eq!(fright.eat_ghost(), (1, 200));
        assert_eq!(fright.eat_ghost(), (2, 400));
        assert_eq!(fright.eat_ghost(), (3, 800));
        assert_eq!(fright.eat_ghost(), (4, 1600));
        assert_eq!(fright.eat_ghost(), (5, 1600));
        // A new window resets the chain.
        fright.start(500, 1);
        assert_eq!(fright.eat_ghost(), (1, 200));
    }
}
