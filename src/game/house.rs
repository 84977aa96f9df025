//! The house release controller.
//!
//! Ghosts waiting in the house are released by dot credit: a single global
//! counter (live from round start) releases each waiter at its fixed global
//! limit and retires itself when the last one leaves at 32; once retired,
//! each dot credits only the earliest still-waiting ghost's own counter
//! against its per-level limit. Independent per-ghost fallback deadlines
//! force a release when the counters stall, and eyes-recovered ghosts file
//! back out on a short relaunch timer instead of dot credit.

use strum::IntoEnumIterator;

use crate::constants::GLOBAL_DOT_LIMITS;
use crate::entity::ghost::{Ghost, GhostKind, Mode};

/// Release bookkeeping shared across all four ghosts.
#[derive(Debug, Clone, Copy)]
pub struct HouseState {
    global_counter: u32,
    global_active: bool,
}

impl Default for HouseState {
    fn default() -> Self {
        Self {
            global_counter: 0,
            global_active: true,
        }
    }
}

impl HouseState {
    /// Resets to the round-start configuration (global counter live).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn global_counter(&self) -> u32 {
        self.global_counter
    }

    /// Credits one eaten dot toward a release.
    ///
    /// While the global counter is live it alone advances, releasing the
    /// earliest-limited waiter at its threshold; the last threshold (32)
    /// force-releases Clyde and retires the counter. Afterwards each dot
    /// credits only the earliest still-waiting ghost.
    pub fn on_dot_eaten(&mut self, ghosts: &mut [Ghost; 4]) {
        if self.global_active {
            self.global_counter += 1;
            // Blinky is skipped: the leader never waits on dots.
            for (kind, limit) in GhostKind::iter().skip(1).zip(GLOBAL_DOT_LIMITS) {
                let ghost = &mut ghosts[kind.index()];
                if ghost.waiting_for_release() && self.global_counter >= limit {
                    tracing::debug!(
                        ghost = kind.as_ref(),
                        counter = self.global_counter,
                        "global dot counter release"
                    );
                    ghost.release();
                    if kind == GhostKind::Clyde {
                        self.global_active = false;
                    }
                    break;
                }
            }
        } else if let Some(ghost) = ghosts.iter_mut().find(|g| g.waiting_for_release()) {
            ghost.dot_counter += 1;
            if ghost.dot_counter >= ghost.dot_limit {
                tracing::debug!(
                    ghost = ghost.kind.as_ref(),
                    counter = ghost.dot_counter,
                    "dot counter release"
                );
                ghost.release();
            }
        }
    }

    /// Forces out waiters whose fallback deadline has passed and relaunches
    /// eyes-recovered ghosts whose timer expired. Called once per tick.
    pub fn poll_timers(&mut self, ghosts: &mut [Ghost; 4], tick: u32) {
        for ghost in ghosts.iter_mut() {
            if ghost.mode != Mode::House {
                continue;
            }
            match ghost.relaunch_at {
                Some(at) if tick >= at => {
                    tracing::debug!(ghost = ghost.kind.as_ref(), "relaunch timer release");
                    ghost.release();
                }
                Some(_) => {}
                None if tick >= ghost.fallback_deadline => {
                    tracing::debug!(ghost = ghost.kind.as_ref(), "fallback timer release");
                    ghost.release();
                }
                None => {}
            }
        }
    }
}
