//! Deterministic fixed-tick simulation core for a retro maze-chase game.
//!
//! Rendering, audio and input live outside this crate: the embedder feeds
//! at most one wanted direction into [`game::Game::step`] per tick, then
//! reads the [`game::Snapshot`] and drains [`game::events::GameEvent`]s.

pub mod constants;
pub mod entity;
pub mod error;
pub mod game;
pub mod map;
