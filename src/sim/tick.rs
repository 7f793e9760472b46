//! Frame step and countdown
//!
//! `tick` runs once per display refresh; `tick_second` once per wall-clock
//! second. Both are no-ops once the session has ended, so a stray callback
//! after the level is over can never move the score or end it twice.

use super::collision::{first_obstacle_hit, hook_at_boat, hook_catches, release_position, slot_target};
use super::spawn::populate_level;
use super::state::{Boat, GameState, Hook, HookState, LevelEnd, Session};
use crate::audio::{Cue, CuePlayer};
use crate::consts::*;
use crate::ease_toward;

/// Held direction keys for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Reset everything except the level table and RNG, repopulate, and go live
pub fn start_level(state: &mut GameState) {
    state.camera.reset();
    state.boat = Boat::new(&state.viewport);
    state.hook = Hook::new(&state.boat);
    state.session = Session::new(&state.level);
    state.frame = 0;
    populate_level(state);
    state.session.active = true;
    log::info!(
        "Level {} started: {}s on the clock, x{} multiplier",
        state.level.id,
        state.session.time_remaining,
        state.level.score_multiplier
    );
}

/// Advance the world by one frame. Returns the level result on the frame it ends.
pub fn tick(state: &mut GameState, input: &TickInput, cues: &mut dyn CuePlayer) -> Option<LevelEnd> {
    if !state.session.is_running() {
        return None;
    }
    state.frame += 1;

    let max_y = state.max_camera_y();
    state
        .camera
        .update(state.hook.world_y, state.hook.state, &state.viewport, max_y);

    update_boat(state, cues);
    update_hook(state, input, cues);
    update_fish(state);
    check_catches(state, cues);
    check_obstacles(state, cues);

    if state.fish.is_empty() {
        return end_level(state, true);
    }
    None
}

/// Count down one second. Returns the level result when time runs out.
pub fn tick_second(state: &mut GameState) -> Option<LevelEnd> {
    if !state.session.is_running() {
        return None;
    }
    state.session.time_remaining = state.session.time_remaining.saturating_sub(1);

    if !state.session.is_running() {
        return None;
    }
    if state.session.time_remaining == 0 {
        return end_level(state, false);
    }
    None
}

/// Finish the level once; later calls return `None`
pub fn end_level(state: &mut GameState, won: bool) -> Option<LevelEnd> {
    if state.session.over {
        return None;
    }
    state.session.active = false;
    state.session.over = true;

    let outcome = LevelEnd {
        level: state.level.id,
        won,
        score: state.session.score,
        next_level: (won && state.level.has_next()).then_some(state.level.id + 1),
    };
    state.session.outcome = Some(outcome.clone());

    if won {
        log::info!("Level {} cleared with {} points", outcome.level, outcome.score);
    } else {
        log::info!("Level {} timed out with {} points", outcome.level, outcome.score);
    }
    Some(outcome)
}

/// Sink the boat after a deep hook, let it float back when docked, and
/// handle the hook arriving back at the boat.
fn update_boat(state: &mut GameState, cues: &mut dyn CuePlayer) {
    let boat = &mut state.boat;
    let hook = &state.hook;

    let depth_below = (hook.world_y - boat.default_world_y).max(0.0);
    let mut target = boat.default_world_y;
    if depth_below > 0.0 && hook.state != HookState::AtBoat {
        target += (depth_below * BOAT_DAMPING).min(boat.max_dive);
    }
    boat.world_y = ease_toward(boat.world_y, target, BOAT_FOLLOW_RATE)
        .clamp(boat.default_world_y, boat.lowest_world_y());

    if !state.hook.attached.is_empty() && hook_at_boat(&state.hook, &state.boat) {
        deliver_catch(state, cues);
    }

    if state.hook.world_y <= state.boat.world_y {
        dock_hook(state, cues);
    } else if state.hook.state == HookState::AtBoat {
        // A docked hook rides along with the boat
        state.hook.world_y = state.boat.dock_y();
        state.hook.x = state.boat.screen_x;
    }
}

/// Run the hook state machine for one frame of input
fn update_hook(state: &mut GameState, input: &TickInput, cues: &mut dyn CuePlayer) {
    let boat_y = state.boat.world_y;
    let floor = state.hook_floor();
    let width = state.viewport.width;
    let hook = &mut state.hook;

    let away = hook.state != HookState::AtBoat && hook.world_y > boat_y;
    if away {
        if input.left {
            hook.x -= hook.horizontal_speed;
        }
        if input.right {
            hook.x += hook.horizontal_speed;
        }
        hook.x = hook.x.max(HOOK_SIDE_MARGIN).min(width - HOOK_SIDE_MARGIN);
    }

    // A full hook reels itself in and refuses to cast
    let full = hook.is_full();

    let mut descending = false;
    if input.down && !full && hook.state != HookState::Ascending && hook.world_y < floor {
        if hook.state != HookState::Descending {
            log::debug!("Hook casting from {:.0}", hook.world_y);
            cues.play_cue(Cue::Cast);
        }
        hook.state = HookState::Descending;
        hook.world_y = (hook.world_y + hook.step).min(floor);
        descending = true;
    }

    let reeling = (input.up || full) && !descending && away;
    if reeling {
        if hook.state != HookState::Ascending {
            log::debug!("Hook reeling from {:.0} (full: {})", hook.world_y, full);
            cues.play_cue(Cue::Reel);
        }
        hook.state = HookState::Ascending;
        hook.world_y -= hook.step;
        if hook.world_y <= boat_y {
            hook.world_y = boat_y;
            dock_hook(state, cues);
        }
    } else if !descending && hook.state != HookState::AtBoat {
        hook.state = HookState::Idle;
    }
}

/// Deliver any catch, then snap the hook under the boat
fn dock_hook(state: &mut GameState, cues: &mut dyn CuePlayer) {
    if !state.hook.attached.is_empty() {
        deliver_catch(state, cues);
    }
    let hook = &mut state.hook;
    if hook.state != HookState::AtBoat {
        log::debug!("Hook docked");
    }
    hook.world_y = state.boat.dock_y();
    hook.x = state.boat.screen_x;
    hook.state = HookState::AtBoat;
}

/// Bank every fish on the hook. Returns the points added.
pub fn deliver_catch(state: &mut GameState, cues: &mut dyn CuePlayer) -> u64 {
    if state.hook.attached.is_empty() {
        return 0;
    }
    let multiplier = state.level.score_multiplier as f64;
    let delivered = std::mem::take(&mut state.hook.attached);

    let gained: u64 = delivered
        .iter()
        .filter_map(|id| state.fish_by_id(*id))
        .map(|fish| (fish.point_value as f64 * multiplier).floor() as u64)
        .sum();

    state.fish.retain(|f| !delivered.contains(&f.id));
    state.session.score += gained;
    cues.play_cue(Cue::Coin);

    log::info!(
        "Delivered {} fish for {} points ({} left)",
        delivered.len(),
        gained,
        state.fish.len()
    );
    gained
}

/// Free fish swim; caught fish ease toward their slot on the hook
fn update_fish(state: &mut GameState) {
    let width = state.viewport.width;
    let hook = &state.hook;

    for fish in &mut state.fish {
        if !fish.caught {
            fish.swim(width);
            continue;
        }
        match hook.slot_of(fish.id) {
            Some(slot) => {
                let target = slot_target(hook, slot);
                fish.pos = fish.pos.lerp(target, FOLLOW_RATE);
            }
            None => fish.caught = false,
        }
    }
}

fn check_catches(state: &mut GameState, cues: &mut dyn CuePlayer) {
    for fish in &mut state.fish {
        if state.hook.is_full() {
            break;
        }
        if fish.caught || !hook_catches(&state.hook, fish) {
            continue;
        }
        if state.hook.attach(fish.id) {
            fish.caught = true;
            // Re-hooking a fish that was knocked loose does not count again
            if state.session.hooked.insert(fish.id) {
                *state.session.catch_tally.entry(fish.species).or_insert(0) += 1;
            }
            cues.play_cue(Cue::Catch);
            cues.play_cue(Cue::Splash);
        }
    }
}

/// First obstacle touched knocks the whole catch loose
fn check_obstacles(state: &mut GameState, cues: &mut dyn CuePlayer) {
    if state.hook.attached.is_empty() {
        return;
    }
    let Some(index) = first_obstacle_hit(&state.hook, &state.obstacles) else {
        return;
    };

    let obstacle = &state.obstacles[index];
    let released = std::mem::take(&mut state.hook.attached);
    for fish in state.fish.iter_mut().filter(|f| released.contains(&f.id)) {
        fish.caught = false;
        fish.pos = release_position(obstacle, &state.hook, fish, &mut state.rng);
    }
    cues.play_cue(Cue::Collision);
    log::debug!("Obstacle hit, {} fish escaped", released.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Direction, Fish, Obstacle, Viewport};
    use crate::tuning::{ObstacleKind, SpeciesId, level};
    use glam::Vec2;

    const DOWN: TickInput = TickInput {
        up: false,
        down: true,
        left: false,
        right: false,
    };
    const UP: TickInput = TickInput {
        up: true,
        down: false,
        left: false,
        right: false,
    };
    const IDLE: TickInput = TickInput {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Running state with no spawned entities
    fn empty_state(level_id: u32) -> GameState {
        let mut state = GameState::new(level(level_id).unwrap(), Viewport::new(1000.0, 720.0), 17);
        state.session.active = true;
        state
    }

    fn add_fish(state: &mut GameState, pos: Vec2, point_value: u32) -> u32 {
        let id = state.next_fish_id();
        state.fish.push(Fish {
            id,
            pos,
            species: SpeciesId(1),
            direction: Direction::Right,
            speed: 0.0,
            size: 50.0,
            caught: false,
            point_value,
        });
        id
    }

    fn attach(state: &mut GameState, id: u32) {
        assert!(state.hook.attach(id));
        if let Some(fish) = state.fish.iter_mut().find(|f| f.id == id) {
            fish.caught = true;
        }
    }

    /// A fish parked far away so the level doesn't end on delivery
    fn add_bystander(state: &mut GameState) {
        add_fish(state, Vec2::new(900.0, 1900.0), 10);
    }

    #[test]
    fn test_delivery_scores_each_fish_floored() {
        let mut state = empty_state(2);
        add_bystander(&mut state);
        for points in [10, 15, 25] {
            let id = add_fish(&mut state, Vec2::new(500.0, 300.0), points);
            attach(&mut state, id);
        }
        state.hook.state = HookState::Ascending;
        state.hook.world_y = state.boat.world_y + 10.0;

        let mut cues = Vec::new();
        let end = tick(&mut state, &UP, &mut cues);

        assert!(end.is_none());
        assert_eq!(state.session.score, 74);
        assert!(state.hook.attached.is_empty());
        assert_eq!(state.fish.len(), 1);
        assert_eq!(state.hook.state, HookState::AtBoat);
        assert_eq!(cues.iter().filter(|c| **c == Cue::Coin).count(), 1);

        // Docked with nothing attached: nothing more to bank
        let mut cues = Vec::new();
        tick(&mut state, &IDLE, &mut cues);
        assert_eq!(state.session.score, 74);
        assert!(!cues.contains(&Cue::Coin));
    }

    #[test]
    fn test_reeling_into_the_boat_delivers_on_the_same_frame() {
        let mut state = empty_state(1);
        add_bystander(&mut state);
        let id = add_fish(&mut state, Vec2::new(500.0, 400.0), 30);
        attach(&mut state, id);
        state.hook.state = HookState::Ascending;
        state.hook.world_y = state.boat.world_y + 30.0;

        let mut cues = Vec::new();
        tick(&mut state, &UP, &mut cues);
        assert_eq!(state.session.score, 30);
        assert!(state.hook.attached.is_empty());
        assert_eq!(state.hook.state, HookState::AtBoat);
        assert!((state.hook.world_y - state.boat.dock_y()).abs() < 0.001);
    }

    #[test]
    fn test_obstacle_releases_every_fish() {
        let mut state = empty_state(1);
        let hook_pos = Vec2::new(400.0, 1000.0);
        state.hook.state = HookState::Idle;
        state.hook.x = hook_pos.x;
        state.hook.world_y = hook_pos.y;

        let ids: Vec<u32> = (0..3)
            .map(|i| add_fish(&mut state, hook_pos - Vec2::new(0.0, 50.0 + 40.0 * i as f32), 10))
            .collect();
        for id in &ids {
            attach(&mut state, *id);
        }
        state
            .obstacles
            .push(Obstacle::new(hook_pos + Vec2::new(20.0, 0.0), 60.0, ObstacleKind::Starfish));

        let mut cues = Vec::new();
        tick(&mut state, &IDLE, &mut cues);

        assert!(state.hook.attached.is_empty());
        assert!(state.fish.iter().all(|f| !f.caught));
        assert_eq!(state.fish.len(), 3);
        assert_eq!(cues, vec![Cue::Collision]);
        for fish in &state.fish {
            assert!(fish.pos.y > state.obstacles[0].pos.y + state.obstacles[0].radius);
        }
    }

    #[test]
    fn test_idling_on_an_obstacle_releases_once() {
        for seed in 0..50 {
            let mut state = GameState::new(level(1).unwrap(), Viewport::new(1000.0, 720.0), seed);
            state.session.active = true;
            add_bystander(&mut state);
            state.hook.state = HookState::Idle;
            state.hook.x = 500.0;
            state.hook.world_y = 1000.0;
            state
                .obstacles
                .push(Obstacle::new(Vec2::new(500.0, 960.0), 60.0, ObstacleKind::Shell));
            for i in 0..3 {
                let id = add_fish(&mut state, Vec2::new(480.0 + 20.0 * i as f32, 1000.0), 10);
                attach(&mut state, id);
            }
            state.session.hooked.extend(state.hook.attached.iter().copied());
            state.session.catch_tally.insert(SpeciesId(1), 3);

            let mut cues = Vec::new();
            for _ in 0..120 {
                tick(&mut state, &IDLE, &mut cues);
            }

            let collisions = cues.iter().filter(|c| **c == Cue::Collision).count();
            assert_eq!(collisions, 1, "seed {seed}");
            assert!(!cues.contains(&Cue::Catch), "seed {seed}");
            assert_eq!(state.session.catch_tally.get(&SpeciesId(1)), Some(&3), "seed {seed}");
            assert!(state.hook.attached.is_empty());
        }
    }

    #[test]
    fn test_recaught_fish_counts_once() {
        let mut state = empty_state(1);
        add_bystander(&mut state);
        state.hook.state = HookState::Idle;
        state.hook.x = 300.0;
        state.hook.world_y = 1000.0;
        let id = add_fish(&mut state, Vec2::new(310.0, 1000.0), 10);

        tick(&mut state, &IDLE, &mut Vec::new());
        assert_eq!(state.hook.attached, vec![id]);

        // Knocked loose somewhere, then swum back into reach
        state.hook.attached.clear();
        if let Some(fish) = state.fish.iter_mut().find(|f| f.id == id) {
            fish.caught = false;
            fish.pos = Vec2::new(310.0, 1000.0);
        }
        let mut cues = Vec::new();
        tick(&mut state, &IDLE, &mut cues);
        assert_eq!(state.hook.attached, vec![id]);
        assert_eq!(cues, vec![Cue::Catch, Cue::Splash]);
        assert_eq!(state.session.catch_tally.get(&SpeciesId(1)), Some(&1));
    }

    #[test]
    fn test_obstacle_ignored_with_empty_hook() {
        let mut state = empty_state(1);
        add_bystander(&mut state);
        state.hook.state = HookState::Idle;
        state.hook.x = 400.0;
        state.hook.world_y = 1000.0;
        state
            .obstacles
            .push(Obstacle::new(Vec2::new(400.0, 1000.0), 60.0, ObstacleKind::Shell));

        let mut cues = Vec::new();
        tick(&mut state, &IDLE, &mut cues);
        assert!(cues.is_empty());
    }

    #[test]
    fn test_catch_attaches_in_order_with_cues() {
        let mut state = empty_state(1);
        add_bystander(&mut state);
        state.hook.state = HookState::Idle;
        state.hook.x = 300.0;
        state.hook.world_y = 1000.0;
        let first = add_fish(&mut state, Vec2::new(310.0, 1000.0), 10);
        let second = add_fish(&mut state, Vec2::new(290.0, 1005.0), 10);

        let mut cues = Vec::new();
        tick(&mut state, &IDLE, &mut cues);

        assert_eq!(state.hook.attached, vec![first, second]);
        assert_eq!(
            cues,
            vec![Cue::Catch, Cue::Splash, Cue::Catch, Cue::Splash]
        );
        assert_eq!(state.session.catch_tally.get(&SpeciesId(1)), Some(&2));
    }

    #[test]
    fn test_full_hook_forces_ascent_next_frame() {
        let mut state = empty_state(1);
        add_bystander(&mut state);
        state.hook.state = HookState::Descending;
        state.hook.x = 300.0;
        state.hook.world_y = 1000.0;
        for _ in 0..HOOK_CAPACITY - 1 {
            let id = add_fish(&mut state, Vec2::new(300.0, 950.0), 10);
            attach(&mut state, id);
        }
        // Sits right where the next cast step lands
        add_fish(&mut state, Vec2::new(300.0, 1000.0 + HOOK_STEP + 1.0), 10);

        let mut cues = Vec::new();
        tick(&mut state, &DOWN, &mut cues);
        assert!(state.hook.is_full());
        assert_eq!(state.hook.attached.len(), HOOK_CAPACITY);

        let y_before = state.hook.world_y;
        let mut cues = Vec::new();
        tick(&mut state, &DOWN, &mut cues);
        assert_eq!(state.hook.state, HookState::Ascending);
        assert!(state.hook.world_y < y_before);
        assert_eq!(cues, vec![Cue::Reel]);

        // Keeps reeling with no input at all
        tick(&mut state, &IDLE, &mut Vec::new());
        assert_eq!(state.hook.state, HookState::Ascending);
        assert!(state.hook.attached.len() <= HOOK_CAPACITY);
    }

    #[test]
    fn test_cues_fire_once_per_transition() {
        let mut state = empty_state(1);
        add_bystander(&mut state);
        let mut cues = Vec::new();

        for _ in 0..5 {
            tick(&mut state, &DOWN, &mut cues);
        }
        assert_eq!(cues, vec![Cue::Cast]);
        assert_eq!(state.hook.state, HookState::Descending);

        tick(&mut state, &IDLE, &mut cues);
        assert_eq!(state.hook.state, HookState::Idle);

        for _ in 0..2 {
            tick(&mut state, &UP, &mut cues);
        }
        assert_eq!(cues, vec![Cue::Cast, Cue::Reel]);

        // Casting again after letting go is a new transition
        tick(&mut state, &IDLE, &mut cues);
        tick(&mut state, &DOWN, &mut cues);
        assert_eq!(cues, vec![Cue::Cast, Cue::Reel, Cue::Cast]);
    }

    #[test]
    fn test_up_at_the_boat_does_nothing() {
        let mut state = empty_state(1);
        add_bystander(&mut state);
        let mut cues = Vec::new();
        for _ in 0..3 {
            tick(&mut state, &UP, &mut cues);
        }
        assert!(cues.is_empty());
        assert_eq!(state.hook.state, HookState::AtBoat);
    }

    #[test]
    fn test_descent_stops_at_the_floor() {
        let mut state = empty_state(1);
        add_bystander(&mut state);
        for _ in 0..500 {
            tick(&mut state, &DOWN, &mut Vec::new());
        }
        assert_eq!(state.hook.world_y, state.hook_floor());
        assert_eq!(state.hook.state, HookState::Idle);
    }

    #[test]
    fn test_horizontal_moves_only_away_from_boat() {
        let mut state = empty_state(1);
        add_bystander(&mut state);
        let start_x = state.hook.x;
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &left, &mut Vec::new());
        assert_eq!(state.hook.x, start_x);

        tick(&mut state, &DOWN, &mut Vec::new());
        for _ in 0..1000 {
            tick(&mut state, &left, &mut Vec::new());
        }
        assert_eq!(state.hook.x, HOOK_SIDE_MARGIN);
    }

    #[test]
    fn test_boat_sinks_with_deep_hook_and_recovers() {
        let mut state = empty_state(3);
        add_bystander(&mut state);
        for _ in 0..140 {
            tick(&mut state, &DOWN, &mut Vec::new());
        }
        for _ in 0..400 {
            tick(&mut state, &IDLE, &mut Vec::new());
        }
        let sunk = state.boat.world_y - state.boat.default_world_y;
        assert!(sunk > 0.0);
        assert!(sunk <= state.boat.max_dive);

        for _ in 0..400 {
            tick(&mut state, &UP, &mut Vec::new());
        }
        assert_eq!(state.hook.state, HookState::AtBoat);
        for _ in 0..400 {
            tick(&mut state, &IDLE, &mut Vec::new());
        }
        assert!(state.boat.world_y - state.boat.default_world_y < 1.0);
        assert!(state.hook.world_y >= state.boat.world_y);
    }

    #[test]
    fn test_win_fires_exactly_once() {
        let mut state = empty_state(1);
        let id = add_fish(&mut state, Vec2::new(500.0, 300.0), 10);
        attach(&mut state, id);
        state.hook.state = HookState::Ascending;
        state.hook.world_y = state.boat.world_y + 5.0;

        let end = tick(&mut state, &UP, &mut Vec::new()).unwrap();
        assert!(end.won);
        assert_eq!(end.score, 10);
        assert_eq!(end.next_level, Some(2));
        assert!(state.session.over);
        assert!(!state.session.active);

        assert!(tick(&mut state, &UP, &mut Vec::new()).is_none());
        assert!(tick_second(&mut state).is_none());
        assert_eq!(state.session.outcome, Some(end));
    }

    #[test]
    fn test_last_level_win_offers_no_next() {
        let mut state = empty_state(3);
        let end = end_level(&mut state, true).unwrap();
        assert_eq!(end.next_level, None);
    }

    #[test]
    fn test_timeout_ends_level_and_freezes_score() {
        let mut state = empty_state(1);
        add_bystander(&mut state);
        state.session.time_remaining = 2;

        assert!(tick_second(&mut state).is_none());
        assert_eq!(state.session.time_remaining, 1);
        let end = tick_second(&mut state).unwrap();
        assert!(!end.won);
        assert_eq!(end.next_level, None);
        assert!(tick_second(&mut state).is_none());

        // A delivery-ready hook after the end must not score
        let id = add_fish(&mut state, Vec2::new(500.0, 300.0), 50);
        state.hook.attached.push(id);
        state.hook.world_y = state.boat.world_y + 1.0;
        let frame = state.frame;
        assert!(tick(&mut state, &UP, &mut Vec::new()).is_none());
        assert_eq!(state.session.score, 0);
        assert_eq!(state.frame, frame);
    }

    #[test]
    fn test_inactive_session_does_not_tick() {
        let mut state = empty_state(1);
        state.session.active = false;
        add_bystander(&mut state);
        assert!(tick(&mut state, &DOWN, &mut Vec::new()).is_none());
        assert_eq!(state.frame, 0);
        assert_eq!(state.session.time_remaining, 60);
        assert!(tick_second(&mut state).is_none());
        assert_eq!(state.session.time_remaining, 60);
    }

    #[test]
    fn test_restart_does_not_leak_fish() {
        let mut state = GameState::new(level(2).unwrap(), Viewport::new(1000.0, 720.0), 3);
        start_level(&mut state);
        for _ in 0..30 {
            tick(&mut state, &DOWN, &mut Vec::new());
        }
        start_level(&mut state);
        assert_eq!(state.fish.len(), state.level.total_fish());
        assert!(state.hook.attached.is_empty());
        assert_eq!(state.session.score, 0);
        assert!(state.session.is_running());
        assert_eq!(state.hook.state, HookState::AtBoat);
    }

    #[test]
    fn test_caught_fish_trail_the_hook() {
        let mut state = empty_state(1);
        add_bystander(&mut state);
        state.hook.state = HookState::Idle;
        state.hook.x = 300.0;
        state.hook.world_y = 1000.0;
        let id = add_fish(&mut state, Vec2::new(600.0, 1200.0), 10);
        attach(&mut state, id);

        tick(&mut state, &IDLE, &mut Vec::new());
        let fish = state.fish_by_id(id).unwrap();
        let target = Vec2::new(300.0, 1000.0 - SLOT_LIFT);
        // Closed 20% of the gap, not snapped
        let expected = Vec2::new(600.0, 1200.0).lerp(target, FOLLOW_RATE);
        assert!(fish.pos.distance(expected) < 0.01);
        assert!(fish.pos.distance(target) > 1.0);
    }
}
