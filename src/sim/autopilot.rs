//! Scripted player for headless runs
//!
//! Chases the nearest free fish, then reels in once the hook is full or the
//! clock is nearly out.

use super::state::{GameState, HookState};
use super::tick::TickInput;

/// Seconds left at which the autopilot heads home with whatever it has
const HEAD_HOME_SECS: u32 = 8;

/// Horizontal slack before steering kicks in
const STEER_DEADZONE: f32 = 6.0;

/// Choose this frame's keys
pub fn autopilot(state: &GameState) -> TickInput {
    let hook = &state.hook;
    let mut input = TickInput::default();

    let heading_home = hook.is_full()
        || state.session.time_remaining <= HEAD_HOME_SECS
        || (hook.state == HookState::Ascending && !hook.attached.is_empty());
    if heading_home {
        input.up = hook.state != HookState::AtBoat;
        return input;
    }

    let target = state
        .fish
        .iter()
        .filter(|f| !f.caught)
        .min_by(|a, b| {
            let da = a.pos.distance_squared(hook.pos());
            let db = b.pos.distance_squared(hook.pos());
            da.total_cmp(&db)
        });

    let Some(target) = target else {
        input.up = !hook.attached.is_empty() && hook.state != HookState::AtBoat;
        return input;
    };

    if hook.state != HookState::AtBoat {
        let dx = target.pos.x - hook.x;
        input.left = dx < -STEER_DEADZONE;
        input.right = dx > STEER_DEADZONE;
    }

    let dy = target.pos.y - hook.world_y;
    if dy > hook.step / 2.0 {
        input.down = true;
    } else if dy < -hook.step / 2.0 {
        input.up = true;
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Silent;
    use crate::sim::state::Viewport;
    use crate::sim::tick::{start_level, tick, tick_second};
    use crate::tuning::level;

    #[test]
    fn test_autopilot_casts_first() {
        let mut state = GameState::new(level(1).unwrap(), Viewport::new(1000.0, 720.0), 2);
        start_level(&mut state);
        let input = autopilot(&state);
        assert!(input.down);
        assert!(!input.up);
    }

    #[test]
    fn test_autopilot_scores_within_the_clock() {
        let mut state = GameState::new(level(1).unwrap(), Viewport::new(1000.0, 720.0), 21);
        start_level(&mut state);

        let mut end = None;
        'outer: for _ in 0..state.level.time_limit_secs {
            for _ in 0..60 {
                let input = autopilot(&state);
                if let Some(result) = tick(&mut state, &input, &mut Silent) {
                    end = Some(result);
                    break 'outer;
                }
            }
            if let Some(result) = tick_second(&mut state) {
                end = Some(result);
                break;
            }
        }

        let end = end.expect("level should finish within its time limit");
        assert!(end.score > 0);
        assert!(state.session.over);
    }
}
