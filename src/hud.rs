//! Plain-value HUD and end-of-level summary
//!
//! The host page renders these however it likes; nothing here touches the DOM.

use serde::Serialize;

use crate::sim::{GameState, LevelEnd};
use crate::tuning::species;

/// One row of the caught-fish panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyRow {
    pub name: String,
    pub image: String,
    /// Depth tier label, e.g. "Deep Sea"
    pub tier: String,
    pub count: u32,
}

/// Values shown while a level is running
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub time_remaining: u32,
    pub level: u32,
    pub level_name: String,
    pub multiplier: f32,
    pub on_hook: usize,
    pub tally: Vec<TallyRow>,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let tally = state
            .session
            .catch_tally
            .iter()
            .map(|(id, count)| match species(*id) {
                Some(s) => TallyRow {
                    name: s.name.to_string(),
                    image: s.image.to_string(),
                    tier: s.tier.label().to_string(),
                    count: *count,
                },
                None => TallyRow {
                    name: format!("Species {}", id.0),
                    image: String::new(),
                    tier: String::new(),
                    count: *count,
                },
            })
            .collect();

        Self {
            score: state.session.score,
            time_remaining: state.session.time_remaining,
            level: state.session.level,
            level_name: state.level.name.clone(),
            multiplier: state.level.score_multiplier,
            on_hook: state.hook.attached.len(),
            tally,
        }
    }

    /// Multiplier label, e.g. `x1.5`
    pub fn multiplier_label(&self) -> String {
        format!("x{}", self.multiplier)
    }
}

/// What the end screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndSummary {
    pub headline: String,
    pub score: u64,
    /// Offer a "next level" button
    pub next_level: Option<u32>,
}

impl From<&LevelEnd> for EndSummary {
    fn from(end: &LevelEnd) -> Self {
        let headline = if end.won {
            format!("Level {} Completed!", end.level)
        } else {
            "Time's Up!".to_string()
        };
        Self {
            headline,
            score: end.score,
            next_level: end.next_level,
        }
    }
}
