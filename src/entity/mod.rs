//! Actor records and the per-actor logic: motion, the player, the ghost
//! state machine, targeting and duty-cycle speed control.

pub mod actor;
pub mod ghost;
pub mod pacman;
pub mod speed;
pub mod target;
