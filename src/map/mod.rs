//! The static maze grid and its queries.
//!
//! The [`Map`] is parsed once from [`RAW_BOARD`] and then answers
//! walkability, tunnel, red-zone and collectible questions for the rest of
//! the simulation. Collectible state is the only thing that mutates.

pub mod direction;

use bitflags::bitflags;
use glam::IVec2;

use crate::constants::{MapTile, BOARD_CELL_SIZE, RAW_BOARD, RED_ZONE_TILES, TUNNEL_ROW};
use crate::error::{GameResult, ParseError};

bitflags! {
    /// Which kinds of actors may enter a tile.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TraversalFlags: u8 {
        const PACMAN = 1 << 0;
        const GHOST = 1 << 1;
        /// May pass the house door.
        const DOOR = 1 << 2;
        /// May occupy the house interior.
        const HOUSE = 1 << 3;
    }
}

/// What sits on a walkable tile, waiting to be eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collectible {
    Dot,
    Pellet,
}

/// The parsed maze: a fixed grid of tiles plus live collectible state.
pub struct Map {
    tiles: Vec<MapTile>,
    collectibles: Vec<Option<Collectible>>,
    player_spawn: IVec2,
    initial_dot_count: u32,
    dots_eaten: u32,
}

impl Map {
    /// Parses a raw character board into a [`Map`].
    pub fn parse(board: &[&str]) -> GameResult<Self> {
        let (width, height) = (BOARD_CELL_SIZE.x as usize, BOARD_CELL_SIZE.y as usize);
        if board.len() != height {
            return Err(ParseError::BadRowCount(board.len(), height).into());
        }

        let mut tiles = Vec::with_capacity(width * height);
        let mut collectibles = vec![None; width * height];
        let mut spawns = Vec::new();

        for (y, row) in board.iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::BadRowWidth {
                    row: y,
                    len: row.len(),
                    expected: width,
                }
                .into());
            }
            for (x, ch) in row.chars().enumerate() {
                let tile = match ch {
                    '#' => MapTile::Wall,
                    '.' => MapTile::Dot,
                    'o' => MapTile::PowerPellet,
                    ' ' => MapTile::Empty,
                    '=' => MapTile::Door,
                    'h' => MapTile::House,
                    'T' => MapTile::Tunnel,
                    '0' => {
                        spawns.push(IVec2::new(x as i32, y as i32));
                        MapTile::StartingPosition
                    }
                    other => return Err(ParseError::UnknownCharacter(other).into()),
                };
                match tile {
                    MapTile::Dot => collectibles[y * width + x] = Some(Collectible::Dot),
                    MapTile::PowerPellet => collectibles[y * width + x] = Some(Collectible::Pellet),
                    _ => {}
                }
                tiles.push(tile);
            }
        }

        if spawns.len() != 1 {
            return Err(ParseError::BadSpawnCount(spawns.len()).into());
        }

        let initial_dot_count = collectibles.iter().filter(|c| c.is_some()).count() as u32;
        Ok(Self {
            tiles,
            collectibles,
            player_spawn: spawns[0],
            initial_dot_count,
            dots_eaten: 0,
        })
    }

    /// The default arcade board.
    pub fn standard() -> Self {
        // RAW_BOARD is validated by tests; parsing it cannot fail.
        Self::parse(&RAW_BOARD).unwrap_or_else(|e| panic!("builtin board invalid: {e}"))
    }

    fn index(tile: IVec2) -> Option<usize> {
        if tile.x < 0 || tile.y < 0 || tile.x >= BOARD_CELL_SIZE.x as i32 || tile.y >= BOARD_CELL_SIZE.y as i32 {
            None
        } else {
            Some(tile.y as usize * BOARD_CELL_SIZE.x as usize + tile.x as usize)
        }
    }

    /// Whether an actor carrying `flags` may enter `tile`.
    ///
    /// Tiles past either end of the tunnel row count as walkable so that
    /// actors can run off the edge and wrap.
    pub fn is_walkable(&self, tile: IVec2, flags: TraversalFlags) -> bool {
        let Some(idx) = Self::index(tile) else {
            return tile.y == TUNNEL_ROW;
        };
        match self.tiles[idx] {
            MapTile::Wall => false,
            MapTile::Door => flags.contains(TraversalFlags::DOOR),
            MapTile::House => flags.contains(TraversalFlags::HOUSE),
            _ => true,
        }
    }

    /// Whether `tile` lies in the slow-down span of the tunnel row.
    pub fn is_tunnel(&self, tile: IVec2) -> bool {
        match Self::index(tile) {
            Some(idx) => self.tiles[idx] == MapTile::Tunnel,
            None => tile.y == TUNNEL_ROW,
        }
    }

    /// Whether ghosts are forbidden from turning upward at `tile`.
    pub fn is_red_zone(&self, tile: IVec2) -> bool {
        RED_ZONE_TILES.contains(&tile)
    }

    /// The collectible currently on `tile`, if any.
    pub fn collectible_at(&self, tile: IVec2) -> Option<Collectible> {
        Self::index(tile).and_then(|idx| self.collectibles[idx])
    }

    /// Removes and returns the collectible on `tile`.
    pub fn clear_collectible(&mut self, tile: IVec2) -> Option<Collectible> {
        let idx = Self::index(tile)?;
        let taken = self.collectibles[idx].take();
        if taken.is_some() {
            self.dots_eaten += 1;
        }
        taken
    }

    /// Restores every collectible to its parsed position.
    pub fn reset_collectibles(&mut self) {
        for (idx, tile) in self.tiles.iter().enumerate() {
            self.collectibles[idx] = match tile {
                MapTile::Dot => Some(Collectible::Dot),
                MapTile::PowerPellet => Some(Collectible::Pellet),
                _ => None,
            };
        }
        self.dots_eaten = 0;
    }

    pub fn player_spawn(&self) -> IVec2 {
        self.player_spawn
    }

    pub fn initial_dot_count(&self) -> u32 {
        self.initial_dot_count
    }

    pub fn dots_eaten(&self) -> u32 {
        self.dots_eaten
    }

    pub fn dots_remaining(&self) -> u32 {
        self.initial_dot_count - self.dots_eaten
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DOORSTEP_TILE, HOUSE_CENTER_TILE};

    #[test]
    fn test_standard_board_parses() {
        let map = Map::standard();
        assert_eq!(map.initial_dot_count(), 245);
        assert_eq!(map.dots_remaining(), 245);
        assert_eq!(map.player_spawn(), IVec2::new(13, 23));
    }

    #[test]
    fn test_walkability_flags() {
        let map = Map::standard();
        let door = IVec2::new(13, 12);
        assert!(!map.is_walkable(door, TraversalFlags::PACMAN));
        assert!(!map.is_walkable(door, TraversalFlags::GHOST));
        assert!(map.is_walkable(door, TraversalFlags::GHOST | TraversalFlags::DOOR));
        assert!(map.is_walkable(HOUSE_CENTER_TILE, TraversalFlags::GHOST | TraversalFlags::HOUSE));
        assert!(!map.is_walkable(HOUSE_CENTER_TILE, TraversalFlags::GHOST));
        assert!(map.is_walkable(DOORSTEP_TILE, TraversalFlags::PACMAN));
        assert!(!map.is_walkable(IVec2::new(0, 0), TraversalFlags::PACMAN));
    }

    #[test]
    fn test_tunnel_queries() {
        let map = Map::standard();
        assert!(map.is_tunnel(IVec2::new(0, TUNNEL_ROW)));
        assert!(map.is_tunnel(IVec2::new(27, TUNNEL_ROW)));
        assert!(!map.is_tunnel(IVec2::new(13, TUNNEL_ROW)));
        // Off-board continuations of the tunnel row stay walkable.
        assert!(map.is_walkable(IVec2::new(-1, TUNNEL_ROW), TraversalFlags::PACMAN));
        assert!(map.is_walkable(IVec2::new(28, TUNNEL_ROW), TraversalFlags::GHOST));
        assert!(!map.is_walkable(IVec2::new(-1, 5), TraversalFlags::PACMAN));
    }

    #[test]
    fn test_collectible_lifecycle() {
        let mut map = Map::standard();
        let tile = IVec2::new(1, 1);
        assert_eq!(map.collectible_at(tile), Some(Collectible::Dot));
        assert_eq!(map.clear_collectible(tile), Some(Collectible::Dot));
        assert_eq!(map.collectible_at(tile), None);
        assert_eq!(map.clear_collectible(tile), None);
        assert_eq!(map.dots_eaten(), 1);
        assert_eq!(map.dots_remaining(), map.initial_dot_count() - 1);

        map.reset_collectibles();
        assert_eq!(map.collectible_at(tile), Some(Collectible::Dot));
        assert_eq!(map.dots_eaten(), 0);
    }

    #[test]
    fn test_power_pellet_positions() {
        let map = Map::standard();
        for tile in [IVec2::new(1, 3), IVec2::new(26, 3), IVec2::new(1, 23), IVec2::new(26, 23)] {
            assert_eq!(map.collectible_at(tile), Some(Collectible::Pellet));
        }
    }

    #[test]
    fn test_red_zone() {
        let map = Map::standard();
        assert!(map.is_red_zone(IVec2::new(12, 11)));
        assert!(map.is_red_zone(IVec2::new(15, 23)));
        assert!(!map.is_red_zone(IVec2::new(13, 14)));
    }
}
