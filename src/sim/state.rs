//! Game state and core simulation types
//!
//! Everything the frame step and the countdown mutate lives in `GameState`,
//! a single owning aggregate handed to each subsystem by reference.

use std::collections::{BTreeMap, BTreeSet};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use crate::consts::*;
use crate::tuning::{LevelConfig, ObstacleKind, SpeciesId};

/// Visible area in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// World-Y of the resting water line
    pub fn water_surface_y(&self) -> f32 {
        self.height * WATER_SURFACE_RATIO
    }

    pub fn center_y(&self) -> f32 {
        self.height * 0.5
    }
}

/// The player's boat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boat {
    pub screen_x: f32,
    pub world_y: f32,
    /// Resting depth when the hook is docked
    pub default_world_y: f32,
    /// Furthest the boat may sink below `default_world_y`
    pub max_dive: f32,
}

impl Boat {
    pub fn new(viewport: &Viewport) -> Self {
        let rest = viewport.water_surface_y() - BOAT_HEIGHT;
        Self {
            screen_x: viewport.width / 2.0,
            world_y: rest,
            default_world_y: rest,
            max_dive: BOAT_MAX_DIVE,
        }
    }

    /// Deepest world-Y the boat may reach
    pub fn lowest_world_y(&self) -> f32 {
        self.default_world_y + self.max_dive
    }

    /// Where a docked hook hangs
    pub fn dock_y(&self) -> f32 {
        self.world_y + HOOK_DOCK_OFFSET
    }
}

/// Hook movement state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HookState {
    /// Resting under the boat, ready to cast
    #[default]
    AtBoat,
    /// Line paying out
    Descending,
    /// Reeling in
    Ascending,
    /// Away from the boat with no vertical input
    Idle,
}

/// Stable fish handle (index-independent)
pub type FishId = u32;

/// The hook and its catch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hook {
    /// Horizontal position (screen and world share the X axis)
    pub x: f32,
    pub world_y: f32,
    pub horizontal_speed: f32,
    /// Vertical distance per frame while casting or reeling
    pub step: f32,
    pub radius: f32,
    pub capacity: usize,
    /// Caught fish in catch order; order decides stacking slot
    pub attached: Vec<FishId>,
    pub state: HookState,
}

impl Hook {
    pub fn new(boat: &Boat) -> Self {
        Self {
            x: boat.screen_x,
            world_y: boat.dock_y(),
            horizontal_speed: HOOK_HORIZONTAL_SPEED,
            step: HOOK_STEP,
            radius: HOOK_RADIUS,
            capacity: HOOK_CAPACITY,
            attached: Vec::with_capacity(HOOK_CAPACITY),
            state: HookState::AtBoat,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.world_y)
    }

    pub fn is_full(&self) -> bool {
        self.attached.len() >= self.capacity
    }

    /// Stacking slot of an attached fish, if attached
    pub fn slot_of(&self, fish: FishId) -> Option<usize> {
        self.attached.iter().position(|&id| id == fish)
    }

    /// Attach a fish; a fish already on the hook or a full hook is refused
    pub fn attach(&mut self, fish: FishId) -> bool {
        if self.is_full() || self.attached.contains(&fish) {
            return false;
        }
        self.attached.push(fish);
        true
    }
}

/// Swim direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Horizontal sign of travel
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// A fish entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    pub id: FishId,
    /// Sprite center in world space
    pub pos: Vec2,
    pub species: SpeciesId,
    pub direction: Direction,
    /// Pixels per frame, always positive
    pub speed: f32,
    pub size: f32,
    pub caught: bool,
    /// Base value before the level multiplier
    pub point_value: u32,
}

impl Fish {
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Advance a free-swimming fish, wrapping at the viewport edges
    pub fn swim(&mut self, viewport_width: f32) {
        let half = self.radius();
        self.pos.x += self.speed * self.direction.sign();
        match self.direction {
            Direction::Left if self.pos.x < -half => self.pos.x = viewport_width + half,
            Direction::Right if self.pos.x > viewport_width + half => self.pos.x = -half,
            _ => {}
        }
    }
}

/// A static hazard that knocks fish off the hook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Center in world space
    pub pos: Vec2,
    pub size: f32,
    pub radius: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(pos: Vec2, size: f32, kind: ObstacleKind) -> Self {
        Self {
            pos,
            size,
            radius: size / 2.0,
            kind,
        }
    }
}

/// How a level finished
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEnd {
    pub level: u32,
    /// True when every fish was landed, false on timeout
    pub won: bool,
    pub score: u64,
    /// Level to offer next (only after a win with levels remaining)
    pub next_level: Option<u32>,
}

/// Score, clock and lifecycle flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub score: u64,
    pub time_remaining: u32,
    pub level: u32,
    pub active: bool,
    pub over: bool,
    pub outcome: Option<LevelEnd>,
    /// Distinct fish hooked so far this level, by species
    pub catch_tally: BTreeMap<SpeciesId, u32>,
    /// Every fish that has been on the hook this level
    pub hooked: BTreeSet<FishId>,
}

impl Session {
    pub fn new(level: &LevelConfig) -> Self {
        Self {
            score: 0,
            time_remaining: level.time_limit_secs,
            level: level.id,
            active: false,
            over: false,
            outcome: None,
            catch_tally: BTreeMap::new(),
            hooked: BTreeSet::new(),
        }
    }

    /// True while frames and timer ticks should mutate state
    pub fn is_running(&self) -> bool {
        self.active && !self.over
    }
}

/// Complete game state for one level attempt
#[derive(Debug, Clone)]
pub struct GameState {
    pub level: LevelConfig,
    pub viewport: Viewport,
    pub camera: Camera,
    pub boat: Boat,
    pub hook: Hook,
    pub fish: Vec<Fish>,
    pub obstacles: Vec<Obstacle>,
    pub session: Session,
    /// Frames simulated since level start
    pub frame: u64,
    /// Spawn and scatter randomness
    pub rng: Pcg32,
    next_id: FishId,
}

impl GameState {
    /// Fresh, unpopulated state for a level
    pub fn new(level: LevelConfig, viewport: Viewport, seed: u64) -> Self {
        let boat = Boat::new(&viewport);
        let hook = Hook::new(&boat);
        let session = Session::new(&level);
        Self {
            level,
            viewport,
            camera: Camera::default(),
            boat,
            hook,
            fish: Vec::new(),
            obstacles: Vec::new(),
            session,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new fish ID
    pub fn next_fish_id(&mut self) -> FishId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn fish_by_id(&self, id: FishId) -> Option<&Fish> {
        self.fish.iter().find(|f| f.id == id)
    }

    /// Deepest point the hook may reach
    pub fn hook_floor(&self) -> f32 {
        self.level.world_height - HOOK_BOTTOM_MARGIN
    }

    /// Largest valid camera offset
    pub fn max_camera_y(&self) -> f32 {
        (self.level.world_height - self.viewport.height).max(0.0)
    }

    /// World-Y to screen-Y
    pub fn to_screen_y(&self, world_y: f32) -> f32 {
        world_y - self.camera.position_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::level;

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 720.0)
    }

    #[test]
    fn test_new_state_docks_hook() {
        let state = GameState::new(level(1).unwrap(), viewport(), 7);
        assert_eq!(state.hook.state, HookState::AtBoat);
        assert!((state.hook.world_y - state.boat.dock_y()).abs() < 0.001);
        assert!(state.hook.world_y >= state.boat.world_y);
        assert_eq!(state.session.time_remaining, 60);
        assert!(!state.session.is_running());
    }

    #[test]
    fn test_hook_attach_is_unique_and_bounded() {
        let boat = Boat::new(&viewport());
        let mut hook = Hook::new(&boat);
        assert!(hook.attach(1));
        assert!(!hook.attach(1));
        for id in 2..=5 {
            assert!(hook.attach(id));
        }
        assert!(hook.is_full());
        assert!(!hook.attach(6));
        assert_eq!(hook.slot_of(3), Some(2));
        assert_eq!(hook.attached.len(), HOOK_CAPACITY);
    }

    #[test]
    fn test_fish_wraps_at_edges() {
        let mut fish = Fish {
            id: 1,
            pos: Vec2::new(-20.0, 500.0),
            species: SpeciesId(1),
            direction: Direction::Left,
            speed: 10.0,
            size: 50.0,
            caught: false,
            point_value: 10,
        };
        fish.swim(800.0);
        assert!((fish.pos.x - 825.0).abs() < 0.001);

        fish.direction = Direction::Right;
        fish.pos.x = 820.0;
        fish.swim(800.0);
        assert!((fish.pos.x - -25.0).abs() < 0.001);
    }

    #[test]
    fn test_fish_ids_are_unique() {
        let mut state = GameState::new(level(1).unwrap(), viewport(), 1);
        let a = state.next_fish_id();
        let b = state.next_fish_id();
        assert_ne!(a, b);
    }
}
