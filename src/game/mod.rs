//! The world aggregate and the per-tick pipeline.
//!
//! [`Game`] owns every actor record and timer and advances them in one
//! fixed-order pass per tick: clock, speed masks, player motion, ghost AI
//! (phase edges, release, targeting, motion), then collision and scoring.
//! Consumers read the resulting [`Snapshot`] and drain events strictly
//! after the pass; nothing mutates actor state outside [`Game::step`].

pub mod events;
pub mod house;
pub mod schedule;

use glam::{I8Vec2, IVec2};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::constants::{
    level_tier, BONUS_SCORES, BONUS_SPAWN_DOTS, BONUS_TILE, BONUS_TTL_TICKS,
    COLLISION_THRESHOLD_PX, DOORSTEP_TILE, DOT_FREEZE_TICKS, DOT_SCORE, ELROY_DOT_THRESHOLDS,
    PELLET_FREEZE_TICKS, PELLET_SCORE, RELAUNCH_TICKS, STARTING_LIVES,
};
use crate::entity::ghost::{Ghost, GhostKind, Mode};
use crate::entity::pacman::Pacman;
use crate::entity::{speed, target};
use crate::error::{GameError, GameResult};
use crate::game::events::GameEvent;
use crate::game::house::HouseState;
use crate::game::schedule::{phase_at, FrightWindow, Phase};
use crate::map::direction::Direction;
use crate::map::{Collectible, Map};

/// Coarse run state. Anything but `Playing` freezes position updates
/// until the embedder calls [`Game::reset_round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Playing,
    /// Death sequence; rendering owns the animation.
    PlayerDying,
    RoundWon,
    GameOver,
}

/// Construction parameters.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// 1-based starting level.
    pub level: u32,
    /// Seed for frightened turn choices; a fixed seed reproduces a game.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { level: 1, seed: 0 }
    }
}

/// The live bonus item, when present.
#[derive(Debug, Clone, Copy)]
struct Bonus {
    expires_at: u32,
}

/// The whole simulation: one player, four ghosts, the board and every
/// timer, advanced one tick at a time.
pub struct Game {
    pub map: Map,
    pub player: Pacman,
    pub ghosts: [Ghost; 4],

    tick: u32,
    level: u32,
    round_start_tick: u32,
    prev_phase: Phase,
    fright: FrightWindow,
    fright_was_active: bool,
    house: HouseState,
    bonus: Option<Bonus>,
    bonus_index: usize,

    score: u32,
    lives: u32,
    state: RunState,
    rng: SmallRng,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(config: GameConfig) -> GameResult<Self> {
        if config.level == 0 {
            return Err(GameError::InvalidConfig("level numbering starts at 1".into()));
        }
        let map = Map::standard();
        let player = Pacman::new(map.player_spawn());
        let ghosts = [
            Ghost::new(GhostKind::Blinky, config.level, 0),
            Ghost::new(GhostKind::Pinky, config.level, 0),
            Ghost::new(GhostKind::Inky, config.level, 0),
            Ghost::new(GhostKind::Clyde, config.level, 0),
        ];
        Ok(Self {
            map,
            player,
            ghosts,
            tick: 0,
            level: config.level,
            round_start_tick: 0,
            prev_phase: Phase::Scatter,
            fright: FrightWindow::default(),
            fright_was_active: false,
            house: HouseState::default(),
            bonus: None,
            bonus_index: 0,
            score: 0,
            lives: STARTING_LIVES,
            state: RunState::Playing,
            rng: SmallRng::seed_from_u64(config.seed),
            events: Vec::new(),
        })
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn frightened(&self) -> bool {
        self.fright.active(self.tick)
    }

    /// Drains the one-shot events accumulated since the last drain.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Blinky's current Elroy speed stage (0, 1 or 2) from remaining dots.
    pub fn elroy_stage(&self) -> u8 {
        let (stage1, stage2) = ELROY_DOT_THRESHOLDS[level_tier(self.level)];
        let remaining = self.map.dots_remaining();
        if remaining <= stage2 {
            2
        } else if remaining <= stage1 {
            1
        } else {
            0
        }
    }

    /// Advances the simulation by exactly one tick.
    ///
    /// `wanted` is this tick's buffered turn request, if any (at most one
    /// per tick). Does nothing unless the game is in `Playing` state.
    pub fn step(&mut self, wanted: Option<Direction>) {
        if self.state != RunState::Playing {
            return;
        }
        self.tick += 1;
        let tick = self.tick;

        if let Some(direction) = wanted {
            self.player.buffer_direction(direction);
        }

        // Player motion and eating.
        let on_dot = self.map.collectible_at(self.player.actor.tile).is_some();
        let mask = speed::player_mask(self.level, self.fright.active(tick), on_dot);
        let moved = self.player.step(&self.map, speed::can_move(tick, mask));
        if moved && self.player.actor.centered() {
            self.consume_at(self.player.actor.tile);
        }

        // Schedule and frightened edges. Each edge reverses the pursuers
        // exactly once; steady state never does.
        let fright_active = self.fright.active(tick);
        let phase = phase_at(self.level, tick - self.round_start_tick);
        let fright_edge = fright_active != self.fright_was_active;
        if fright_edge {
            debug!(active = fright_active, "frightened edge");
            self.reverse_pursuers();
        }
        if phase != self.prev_phase {
            debug!(phase = phase.as_ref(), "schedule phase flip");
            if !fright_active && !fright_edge {
                self.reverse_pursuers();
            }
        }
        self.prev_phase = phase;
        self.fright_was_active = fright_active;

        for ghost in &mut self.ghosts {
            if !ghost.mode.schedule_exempt() {
                ghost.mode = if fright_active { Mode::Frightened } else { phase.mode() };
            }
        }

        // House release timers, then per-ghost motion.
        self.house.poll_timers(&mut self.ghosts, tick);
        self.step_ghosts(tick, phase);

        self.check_collisions();
        self.expire_bonus(tick);

        if self.state == RunState::Playing && self.map.dots_remaining() == 0 {
            info!(level = self.level, score = self.score, "round complete");
            self.state = RunState::RoundWon;
            self.events.push(GameEvent::RoundComplete);
        }
    }

    /// External reset after a death or a won round. A death with no lives
    /// left ends the game instead. No tick observes a partially-reset
    /// world: everything is reinitialized here, between ticks.
    pub fn reset_round(&mut self) {
        match self.state {
            RunState::PlayerDying => {
                if self.lives == 0 {
                    info!(score = self.score, "game over");
                    self.state = RunState::GameOver;
                    self.events.push(GameEvent::GameOver);
                } else {
                    self.respawn_actors();
                    self.state = RunState::Playing;
                }
            }
            RunState::RoundWon => {
                self.level += 1;
                info!(level = self.level, "advancing level");
                self.map.reset_collectibles();
                self.bonus_index = 0;
                self.respawn_actors();
                self.state = RunState::Playing;
            }
            _ => {}
        }
    }

    fn respawn_actors(&mut self) {
        self.round_start_tick = self.tick;
        self.player.respawn(self.map.player_spawn());
        for ghost in &mut self.ghosts {
            ghost.respawn(self.level, self.tick);
        }
        self.prev_phase = Phase::Scatter;
        self.fright.clear();
        self.fright_was_active = false;
        self.house.reset();
        self.bonus = None;
    }

    fn reverse_pursuers(&mut self) {
        for ghost in &mut self.ghosts {
            if !ghost.mode.schedule_exempt() {
                ghost.actor.reverse();
            }
        }
    }

    fn add_score(&mut self, delta: u32) {
        self.score += delta;
        self.events.push(GameEvent::ScoreChanged {
            delta,
            total: self.score,
        });
    }

    /// Handles everything sitting on the tile the player just centered on.
    fn consume_at(&mut self, tile: IVec2) {
        match self.map.clear_collectible(tile) {
            Some(Collectible::Dot) => {
                self.player.freeze = DOT_FREEZE_TICKS;
                self.add_score(DOT_SCORE);
                self.events.push(GameEvent::DotEaten { tile });
                self.house.on_dot_eaten(&mut self.ghosts);
                self.maybe_spawn_bonus();
            }
            Some(Collectible::Pellet) => {
                self.player.freeze = PELLET_FREEZE_TICKS;
                self.add_score(PELLET_SCORE);
                self.events.push(GameEvent::PelletEaten { tile });
                self.fright.start(self.tick, self.level);
                self.house.on_dot_eaten(&mut self.ghosts);
                self.maybe_spawn_bonus();
            }
            None => {}
        }

        if self.bonus.is_some() && tile == BONUS_TILE {
            let score = BONUS_SCORES[level_tier(self.level)];
            self.bonus = None;
            self.add_score(score);
            self.events.push(GameEvent::BonusEaten { score });
        }
    }

    fn maybe_spawn_bonus(&mut self) {
        if self.bonus_index < BONUS_SPAWN_DOTS.len()
            && self.map.dots_eaten() == BONUS_SPAWN_DOTS[self.bonus_index]
        {
            self.bonus_index += 1;
            self.bonus = Some(Bonus {
                expires_at: self.tick + BONUS_TTL_TICKS,
            });
            self.events.push(GameEvent::BonusSpawned { tile: BONUS_TILE });
        }
    }

    fn expire_bonus(&mut self, tick: u32) {
        if let Some(bonus) = self.bonus {
            if tick >= bonus.expires_at {
                self.bonus = None;
                self.events.push(GameEvent::BonusExpired);
            }
        }
    }

    fn step_ghosts(&mut self, tick: u32, phase: Phase) {
        let view = target::TargetView {
            player_tile: self.player.actor.tile,
            player_direction: self.player.actor.direction,
            blinky_tile: self.ghosts[GhostKind::Blinky.index()].actor.tile,
        };
        let elroy = self.elroy_stage();

        for ghost in &mut self.ghosts {
            let stage = if ghost.kind == GhostKind::Blinky { elroy } else { 0 };
            let in_tunnel = self.map.is_tunnel(ghost.actor.tile);
            let mask = speed::ghost_mask(self.level, ghost.mode, in_tunnel, stage);
            if !speed::can_move(tick, mask) {
                continue;
            }

            match ghost.mode {
                Mode::House => ghost.step_house_bounce(),
                Mode::LeaveHouse => {
                    if ghost.step_leave_house() {
                        // Through the door: join the schedule heading left.
                        ghost.mode = phase.mode();
                        ghost.actor.direction = Direction::Left;
                    }
                }
                Mode::EnterHouse => {
                    if ghost.step_enter_house() {
                        debug!(ghost = ghost.kind.as_ref(), "home; arming relaunch");
                        ghost.mode = Mode::House;
                        ghost.dot_counter = 0;
                        ghost.relaunch_at = Some(tick + RELAUNCH_TICKS);
                        ghost.actor.direction = Direction::Up;
                    }
                }
                Mode::Eyes if ghost.actor.centered() && ghost.actor.tile == DOORSTEP_TILE => {
                    ghost.mode = Mode::EnterHouse;
                }
                Mode::Eyes | Mode::Scatter | Mode::Chase | Mode::Frightened => {
                    step_pursuer(&self.map, &mut self.rng, ghost, &view);
                }
            }
        }
    }

    fn check_collisions(&mut self) {
        let player_pixel = self.player.actor.pixel_position();
        for index in 0..self.ghosts.len() {
            let ghost_pixel = self.ghosts[index].actor.pixel_position();
            let delta = (player_pixel - ghost_pixel).abs();
            if delta.x >= COLLISION_THRESHOLD_PX || delta.y >= COLLISION_THRESHOLD_PX {
                continue;
            }
            match self.ghosts[index].mode {
                Mode::Frightened => {
                    let (chain, score) = self.fright.eat_ghost();
                    debug!(ghost = self.ghosts[index].kind.as_ref(), chain, score, "ghost eaten");
                    self.ghosts[index].mode = Mode::Eyes;
                    self.add_score(score);
                    self.events.push(GameEvent::GhostEaten { chain, score });
                }
                mode if mode.lethal() => {
                    self.lives = self.lives.saturating_sub(1);
                    info!(ghost = self.ghosts[index].kind.as_ref(), lives = self.lives, "player dying");
                    self.state = RunState::PlayerDying;
                    self.events.push(GameEvent::PlayerDying);
                    self.events.push(GameEvent::LivesChanged { lives: self.lives });
                    break;
                }
                _ => {}
            }
        }
    }

    /// A read-only view of the world for the renderer. The consumer must
    /// not feed it back into the simulation.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            level: self.level,
            score: self.score,
            lives: self.lives,
            state: self.state,
            dots_remaining: self.map.dots_remaining(),
            fright_blinking: self.fright.blinking(self.tick),
            bonus_tile: self.bonus.map(|_| BONUS_TILE),
            player: ActorSnapshot {
                tile: self.player.actor.tile,
                offset: self.player.actor.offset,
                direction: self.player.actor.direction,
                animation_phase: self.player.actor.animation_phase(),
            },
            ghosts: core::array::from_fn(|i| {
                let ghost = &self.ghosts[i];
                GhostSnapshot {
                    kind: ghost.kind,
                    mode: ghost.mode,
                    tile: ghost.actor.tile,
                    offset: ghost.actor.offset,
                    direction: ghost.actor.direction,
                    animation_phase: ghost.actor.animation_phase(),
                }
            }),
        }
    }
}

/// One pixel of targeted motion for a pursuing (or fleeing) ghost.
///
/// Decisions happen only at tile centers; with no legal candidate the
/// ghost holds position.
fn step_pursuer(map: &Map, rng: &mut SmallRng, ghost: &mut Ghost, view: &target::TargetView) {
    if ghost.actor.centered() {
        let chosen = match ghost.mode {
            Mode::Frightened => {
                target::choose_frightened_direction(map, ghost.actor.tile, ghost.actor.direction, rng)
            }
            _ => {
                let goal = target::target_tile(ghost.kind, ghost.mode, ghost.actor.tile, view);
                target::choose_direction(map, ghost.actor.tile, ghost.actor.direction, ghost.mode, goal)
            }
        };
        match chosen {
            Some(direction) => ghost.actor.direction = direction,
            None => return,
        }
    }
    ghost.actor.step_pixel();
}

/// Per-actor slice of a [`Snapshot`].
#[derive(Debug, Clone, Copy)]
pub struct ActorSnapshot {
    pub tile: IVec2,
    pub offset: I8Vec2,
    pub direction: Direction,
    pub animation_phase: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct GhostSnapshot {
    pub kind: GhostKind,
    pub mode: Mode,
    pub tile: IVec2,
    pub offset: I8Vec2,
    pub direction: Direction,
    pub animation_phase: u8,
}

/// A read-only per-tick view of the world for rendering and UI.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub tick: u32,
    pub level: u32,
    pub score: u32,
    pub lives: u32,
    pub state: RunState,
    pub dots_remaining: u32,
    pub fright_blinking: bool,
    pub bonus_tile: Option<IVec2>,
    pub player: ActorSnapshot,
    pub ghosts: [GhostSnapshot; 4],
}
