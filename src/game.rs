//! Session orchestration
//!
//! `Game` owns the state, the held keys and the cue player. The host calls
//! `frame` from its display-refresh callback and `second_elapsed` from a
//! one-second interval; each returns a `LoopStep` telling the host whether
//! to keep that callback armed.

use crate::audio::CuePlayer;
use crate::error::GameError;
use crate::hud::{EndSummary, HudSnapshot};
use crate::settings::{BoatSkin, HookSkin, Settings};
use crate::sim::{self, GameState, LevelEnd, TickInput, Viewport, autopilot};
use crate::tuning;

/// Direction keys the hook responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Map a `KeyboardEvent.key` value (WASD or arrows)
    pub fn from_key_name(name: &str) -> Option<Key> {
        match name {
            "w" | "W" | "ArrowUp" => Some(Key::Up),
            "s" | "S" | "ArrowDown" => Some(Key::Down),
            "a" | "A" | "ArrowLeft" => Some(Key::Left),
            "d" | "D" | "ArrowRight" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Result of one frame or countdown step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopStep {
    /// Re-arm the callback that produced this step
    pub keep_running: bool,
    /// Set on the one step where the level finished
    pub ended: Option<LevelEnd>,
}

pub struct Game<A: CuePlayer> {
    state: GameState,
    input: TickInput,
    audio: A,
    settings: Settings,
    seed: u64,
    attempts: u64,
    autopilot: bool,
}

impl<A: CuePlayer> Game<A> {
    /// Set up on level 1 without starting it
    pub fn new(viewport: Viewport, settings: Settings, audio: A, seed: u64) -> Result<Self, GameError> {
        let config = tuning::level(1)?;
        Ok(Self {
            state: GameState::new(config, viewport, seed),
            input: TickInput::default(),
            audio,
            settings,
            seed,
            attempts: 0,
            autopilot: false,
        })
    }

    /// Session-start entrypoint used by first play, replay and advance
    pub fn start_level(&mut self, id: u32) -> Result<(), GameError> {
        let config = tuning::level(id)?;
        config.validate()?;

        self.attempts += 1;
        let seed = self.seed.wrapping_add(self.attempts.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        self.state = GameState::new(config, self.state.viewport, seed);
        sim::start_level(&mut self.state);
        self.input = TickInput::default();
        Ok(())
    }

    /// Play the current level again
    pub fn replay(&mut self) -> Result<(), GameError> {
        self.start_level(self.state.level.id)
    }

    /// Start the next level if the last one was won and another exists.
    /// Returns false when there is nothing to advance to.
    pub fn advance_level(&mut self) -> Result<bool, GameError> {
        let next = self
            .state
            .session
            .outcome
            .as_ref()
            .and_then(|end| end.next_level);
        match next {
            Some(id) => {
                self.start_level(id)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Presses are ignored while no level is running
    pub fn key_down(&mut self, key: Key) {
        if !self.state.session.is_running() {
            return;
        }
        self.set_key(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.set_key(key, false);
    }

    fn set_key(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => self.input.up = held,
            Key::Down => self.input.down = held,
            Key::Left => self.input.left = held,
            Key::Right => self.input.right = held,
        }
    }

    /// Let the scripted player drive instead of the keyboard
    pub fn set_autopilot(&mut self, enabled: bool) {
        if self.autopilot != enabled {
            log::info!("Autopilot {}", if enabled { "on" } else { "off" });
        }
        self.autopilot = enabled;
    }

    pub fn autopilot_enabled(&self) -> bool {
        self.autopilot
    }

    /// One display-refresh step
    pub fn frame(&mut self) -> LoopStep {
        let input = if self.autopilot {
            autopilot(&self.state)
        } else {
            self.input
        };
        let ended = sim::tick(&mut self.state, &input, &mut self.audio);
        self.step_result(ended)
    }

    /// One countdown step
    pub fn second_elapsed(&mut self) -> LoopStep {
        let ended = sim::tick_second(&mut self.state);
        self.step_result(ended)
    }

    fn step_result(&mut self, ended: Option<LevelEnd>) -> LoopStep {
        if ended.is_some() {
            self.input = TickInput::default();
        }
        LoopStep {
            keep_running: self.state.session.is_running(),
            ended,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.session.is_running()
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::from_state(&self.state)
    }

    /// End screen content once the level is over
    pub fn summary(&self) -> Option<EndSummary> {
        self.state.session.outcome.as_ref().map(EndSummary::from)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// New preferences take effect on the next level start (skins) or at once (everything else)
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Pick a boat card by asset key or name. Unknown keys leave the choice alone.
    pub fn choose_boat(&mut self, key: &str) -> bool {
        let Some(boat) = BoatSkin::from_str(key) else {
            log::warn!("Unknown boat skin '{}'", key);
            return false;
        };
        self.set_settings(Settings {
            boat,
            ..self.settings.clone()
        });
        true
    }

    /// Pick a hook card by asset key or name. Unknown keys leave the choice alone.
    pub fn choose_hook(&mut self, key: &str) -> bool {
        let Some(hook) = HookSkin::from_str(key) else {
            log::warn!("Unknown hook skin '{}'", key);
            return false;
        };
        self.set_settings(Settings {
            hook,
            ..self.settings.clone()
        });
        true
    }

    /// Flip the mute preference; returns the new value
    pub fn toggle_muted(&mut self) -> bool {
        let muted = !self.settings.muted;
        self.set_settings(Settings {
            muted,
            ..self.settings.clone()
        });
        muted
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }
}
