use glam::{I8Vec2, IVec2};
use pacman_core::entity::ghost::{GhostKind, Mode};
use pacman_core::game::events::GameEvent;
use pacman_core::game::{Game, GameConfig, RunState};
use pacman_core::map::direction::Direction;
use pretty_assertions::assert_eq;

fn new_game() -> Game {
    Game::new(GameConfig::default()).expect("default config is valid")
}

/// Parks the player centered on its spawn so it never eats anything.
fn park_player(game: &mut Game) {
    let spawn = game.map.player_spawn();
    game.player.actor.tile = spawn;
    game.player.actor.offset = I8Vec2::new(4, 4);
}

/// Parks Blinky off-center in a corridor so its facing can only change
/// through a forced reversal, never through a decision point.
fn park_blinky_off_center(game: &mut Game) {
    game.ghosts[0].actor.tile = IVec2::new(3, 5);
    game.ghosts[0].actor.offset = I8Vec2::new(2, 4);
}

#[test]
fn test_round_starts_in_scatter() {
    let game = new_game();
    assert_eq!(game.ghosts[0].mode, Mode::Scatter);
    assert_eq!(game.ghosts[0].actor.tile, IVec2::new(13, 11));
}

#[test]
fn test_phase_flip_reverses_exactly_once() {
    let mut game = new_game();
    let mut reversal_ticks = Vec::new();

    for tick in 1..=500u32 {
        park_player(&mut game);
        park_blinky_off_center(&mut game);
        let before = game.ghosts[0].actor.direction;
        game.step(None);
        if game.ghosts[0].actor.direction == before.opposite() {
            reversal_ticks.push(tick);
        }
    }

    // Level 1 flips Scatter -> Chase at 420 ticks and nowhere else in range.
    assert_eq!(reversal_ticks, vec![420]);
}

#[test]
fn test_frightened_edges_reverse_once_each() {
    let mut game = new_game();
    let mut reversal_ticks = Vec::new();

    for tick in 1..=400u32 {
        if tick == 10 {
            // Walk the player onto the bottom-left power pellet.
            game.player.actor.tile = IVec2::new(1, 23);
            game.player.actor.offset = I8Vec2::new(5, 4);
            game.player.actor.direction = Direction::Left;
        } else {
            park_player(&mut game);
        }
        park_blinky_off_center(&mut game);
        let before = game.ghosts[0].actor.direction;
        game.step(None);
        if game.ghosts[0].actor.direction == before.opposite() {
            reversal_ticks.push(tick);
        }
    }

    // One reversal when the window opens at tick 10, one when it closes
    // 360 ticks later.
    assert_eq!(reversal_ticks, vec![10, 370]);
    assert!(!game.frightened());
}

#[test]
fn test_frightened_window_assigns_modes() {
    let mut game = new_game();
    game.player.actor.tile = IVec2::new(1, 23);
    game.player.actor.offset = I8Vec2::new(5, 4);
    game.player.actor.direction = Direction::Left;
    game.step(None);

    assert!(game.frightened());
    assert_eq!(game.ghosts[0].mode, Mode::Frightened);
    // House ghosts are exempt from the frightened assignment.
    assert_eq!(game.ghosts[2].mode, Mode::House);
}

#[test]
fn test_ghost_eat_chain_doubles_and_caps() {
    let mut game = new_game();
    // Open the frightened window.
    game.player.actor.tile = IVec2::new(1, 23);
    game.player.actor.offset = I8Vec2::new(5, 4);
    game.player.actor.direction = Direction::Left;
    game.step(None);
    game.take_events();

    let mut scores = Vec::new();
    for index in [1usize, 2, 3, 0] {
        // Ghosts in the house are exempt; pull this one out first.
        game.ghosts[index].mode = Mode::Frightened;
        game.ghosts[index].actor.tile = game.player.actor.tile;
        game.ghosts[index].actor.offset = game.player.actor.offset;
        game.step(None);
        for event in game.take_events() {
            if let GameEvent::GhostEaten { chain, score } = event {
                scores.push((chain, score));
            }
        }
        assert_eq!(game.ghosts[index].mode, Mode::Eyes);
    }

    assert_eq!(scores, vec![(1, 200), (2, 400), (3, 800), (4, 1600)]);
}

#[test]
fn test_lethal_contact_starts_death_and_freezes() {
    let mut game = new_game();
    park_player(&mut game);
    game.ghosts[0].actor.tile = game.player.actor.tile;
    game.ghosts[0].actor.offset = game.player.actor.offset;
    game.step(None);

    assert_eq!(game.state(), RunState::PlayerDying);
    assert_eq!(game.lives(), 2);
    let events = game.take_events();
    assert!(events.contains(&GameEvent::PlayerDying));
    assert!(events.contains(&GameEvent::LivesChanged { lives: 2 }));

    // Frozen until the external reset: nothing moves.
    let frozen = game.snapshot();
    for _ in 0..10 {
        game.step(Some(Direction::Right));
    }
    let still = game.snapshot();
    assert_eq!(still.player.tile, frozen.player.tile);
    assert_eq!(still.player.offset, frozen.player.offset);
    assert_eq!(still.tick, frozen.tick);
}

#[test]
fn test_reset_round_respawns_actors() {
    let mut game = new_game();
    park_player(&mut game);
    game.ghosts[0].actor.tile = game.player.actor.tile;
    game.ghosts[0].actor.offset = game.player.actor.offset;
    game.step(None);
    assert_eq!(game.state(), RunState::PlayerDying);

    game.reset_round();
    assert_eq!(game.state(), RunState::Playing);
    assert_eq!(game.player.actor.tile, game.map.player_spawn());
    assert_eq!(game.ghosts[0].actor.tile, GhostKind::Blinky.spawn_tile());
    assert_eq!(game.ghosts[1].mode, Mode::House);
    assert!(!game.frightened());
}

#[test]
fn test_three_deaths_end_the_game() {
    let mut game = new_game();
    for expected_lives in [2u32, 1, 0] {
        park_player(&mut game);
        game.ghosts[0].actor.tile = game.player.actor.tile;
        game.ghosts[0].actor.offset = game.player.actor.offset;
        game.ghosts[0].mode = Mode::Chase;
        game.step(None);
        assert_eq!(game.state(), RunState::PlayerDying);
        assert_eq!(game.lives(), expected_lives);
        game.reset_round();
    }
    assert_eq!(game.state(), RunState::GameOver);
    assert!(game.take_events().contains(&GameEvent::GameOver));
}

#[test]
fn test_eyes_return_home_and_relaunch() {
    let mut game = new_game();
    // Open the window and eat Blinky near the bottom-left pellet.
    game.player.actor.tile = IVec2::new(1, 23);
    game.player.actor.offset = I8Vec2::new(5, 4);
    game.player.actor.direction = Direction::Left;
    game.step(None);
    game.ghosts[0].actor.tile = game.player.actor.tile;
    game.ghosts[0].actor.offset = game.player.actor.offset;
    game.step(None);
    assert_eq!(game.ghosts[0].mode, Mode::Eyes);

    let mut seen_enter = false;
    let mut seen_house = false;
    for _ in 0..2000 {
        game.step(None);
        match game.ghosts[0].mode {
            Mode::EnterHouse => seen_enter = true,
            Mode::House => seen_house = true,
            _ => {}
        }
    }
    assert!(seen_enter, "eyes never reached the door");
    assert!(seen_house, "ghost never re-entered the house");
    // The relaunch timer has long since fired.
    assert!(matches!(
        game.ghosts[0].mode,
        Mode::Scatter | Mode::Chase | Mode::Frightened
    ));
}

#[test]
fn test_house_release_by_dot_credit() {
    let mut game = new_game();
    assert_eq!(game.ghosts[1].mode, Mode::House);

    // The player auto-runs left from spawn, eating the seven dots before
    // the wall at (5, 23); the seventh releases Pinky.
    let mut dots = 0;
    for _ in 0..120 {
        game.step(None);
        for event in game.take_events() {
            if matches!(event, GameEvent::DotEaten { .. }) {
                dots += 1;
            }
        }
    }
    assert_eq!(dots, 7);
    assert_ne!(game.ghosts[1].mode, Mode::House);

    // Pinky files out and joins the schedule.
    for _ in 0..280 {
        game.step(None);
    }
    assert_eq!(game.ghosts[1].mode, Mode::Scatter);
}

#[test]
fn test_fallback_timer_releases_pinky() {
    let mut game = new_game();
    // Park the player where no dot is ever eaten; only timers can release.
    for _ in 0..241 {
        park_player(&mut game);
        game.step(None);
    }
    assert_ne!(game.ghosts[1].mode, Mode::House);
}
