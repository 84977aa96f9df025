//! One-shot events emitted by the simulation for audio/UI consumers.
//!
//! Events are buffered during a tick and drained by the embedder after the
//! pass completes; none of them is a continuous stream.

use glam::IVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A regular dot was eaten at this tile.
    DotEaten { tile: IVec2 },
    /// A power pellet was eaten; the frightened window opened.
    PelletEaten { tile: IVec2 },
    /// A frightened ghost was eaten. `chain` is 1-based within the window.
    GhostEaten { chain: u32, score: u32 },
    /// The bonus item appeared.
    BonusSpawned { tile: IVec2 },
    /// The bonus item was collected.
    BonusEaten { score: u32 },
    /// The bonus item timed out uncollected.
    BonusExpired,
    /// The player touched a lethal ghost; the death sequence begins.
    PlayerDying,
    /// Score changed by `delta` to `total`.
    ScoreChanged { delta: u32, total: u32 },
    /// Remaining lives changed.
    LivesChanged { lives: u32 },
    /// Every collectible was eaten.
    RoundComplete,
    /// No lives remain.
    GameOver,
}
