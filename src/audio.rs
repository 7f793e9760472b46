//! Sound cues
//!
//! The simulation only knows `CuePlayer::play_cue`; it fires on transition
//! edges and never waits on playback. In the browser `AudioManager` plays
//! `HtmlAudioElement`s and owns restart/overlap behaviour.

use serde::{Deserialize, Serialize};

/// Edge-triggered sound events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Hook starts paying out
    Cast,
    /// Hook starts reeling in
    Reel,
    /// Fish hooked
    Catch,
    /// Water splash accompanying a catch
    Splash,
    /// Hook struck an obstacle and lost its catch
    Collision,
    /// Catch delivered to the boat
    Coin,
}

impl Cue {
    pub const ALL: [Cue; 6] = [
        Cue::Cast,
        Cue::Reel,
        Cue::Catch,
        Cue::Splash,
        Cue::Collision,
        Cue::Coin,
    ];

    /// Audio file backing this cue
    pub fn file(&self) -> &'static str {
        match self {
            Cue::Cast => "assets/cast.mp3",
            Cue::Reel => "assets/reel.mp3",
            Cue::Catch | Cue::Coin => "assets/catch.mp3",
            Cue::Splash | Cue::Collision => "assets/splash.mp3",
        }
    }

    /// Relative loudness of this cue
    pub fn gain(&self) -> f32 {
        match self {
            Cue::Splash => 0.4,
            _ => 1.0,
        }
    }
}

/// Looping background track
pub const MUSIC_FILE: &str = "assets/bgmusic.mp3";
pub const MUSIC_GAIN: f32 = 0.3;

/// Fire-and-forget cue playback
pub trait CuePlayer {
    fn play_cue(&mut self, cue: Cue);
}

/// Records cues in order (tests, replays)
impl CuePlayer for Vec<Cue> {
    fn play_cue(&mut self, cue: Cue) {
        self.push(cue);
    }
}

/// Drops every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play_cue(&mut self, _cue: Cue) {}
}

/// Writes cues to the log (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCues;

impl CuePlayer for LogCues {
    fn play_cue(&mut self, cue: Cue) {
        log::debug!("cue: {:?}", cue);
    }
}

/// Combined effective volume for a cue, after mute and channel volumes
pub fn effective_volume(master: f32, channel: f32, muted: bool, gain: f32) -> f32 {
    if muted {
        0.0
    } else {
        (master * channel * gain).clamp(0.0, 1.0)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlAudioElement;

    use super::{Cue, CuePlayer, MUSIC_FILE, MUSIC_GAIN, effective_volume};
    use crate::settings::Settings;

    /// Browser audio backed by `<audio>` elements
    pub struct AudioManager {
        cues: HashMap<Cue, HtmlAudioElement>,
        music: Option<HtmlAudioElement>,
        /// Set when the browser refused autoplay; cleared after one retry
        music_deferred: Rc<Cell<bool>>,
        master_volume: f32,
        sfx_volume: f32,
        music_volume: f32,
        muted: bool,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            let mut cues = HashMap::new();
            for cue in Cue::ALL {
                match HtmlAudioElement::new_with_src(cue.file()) {
                    Ok(el) => {
                        cues.insert(cue, el);
                    }
                    Err(e) => log::warn!("Failed to create audio for {:?}: {:?}", cue, e),
                }
            }

            let music = HtmlAudioElement::new_with_src(MUSIC_FILE).ok();
            if let Some(music) = &music {
                music.set_loop(true);
            } else {
                log::warn!("Failed to create background music element");
            }

            let mut manager = Self {
                cues,
                music,
                music_deferred: Rc::new(Cell::new(false)),
                master_volume: settings.master_volume,
                sfx_volume: settings.sfx_volume,
                music_volume: settings.music_volume,
                muted: settings.muted,
            };
            manager.apply_music_volume();
            manager
        }

        fn apply_music_volume(&mut self) {
            if let Some(music) = &self.music {
                let vol = effective_volume(self.master_volume, self.music_volume, self.muted, MUSIC_GAIN);
                music.set_volume(vol as f64);
            }
        }

        /// Mute/unmute all audio
        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
            self.apply_music_volume();
        }

        /// Try to start the music loop; a refusal defers it to the next user input
        pub fn start_music(&self) {
            let Some(music) = &self.music else { return };
            let Ok(promise) = music.play() else {
                self.music_deferred.set(true);
                return;
            };
            let deferred = self.music_deferred.clone();
            let on_reject = Closure::once(move |err: JsValue| {
                log::warn!("Background music blocked until user input: {:?}", err);
                deferred.set(true);
            });
            let _ = promise.catch(&on_reject);
            on_reject.forget();
        }

        /// Call on the first key press or click; retries deferred music once
        pub fn on_user_gesture(&self) {
            if !self.music_deferred.replace(false) {
                return;
            }
            if let Some(music) = &self.music {
                if let Ok(promise) = music.play() {
                    let on_reject = Closure::once(move |err: JsValue| {
                        log::warn!("Background music still blocked: {:?}", err);
                    });
                    let _ = promise.catch(&on_reject);
                    on_reject.forget();
                }
            }
        }
    }

    impl CuePlayer for AudioManager {
        fn play_cue(&mut self, cue: Cue) {
            let vol = effective_volume(self.master_volume, self.sfx_volume, self.muted, cue.gain());
            if vol <= 0.0 {
                return;
            }
            let Some(el) = self.cues.get(&cue) else { return };
            el.set_volume(vol as f64);
            // Restart from zero so rapid repeats are audible
            el.set_current_time(0.0);
            if let Ok(promise) = el.play() {
                let on_reject = Closure::once(move |err: JsValue| {
                    log::warn!("Cue {:?} playback rejected: {:?}", cue, err);
                });
                let _ = promise.catch(&on_reject);
                on_reject.forget();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_records_in_order() {
        let mut cues: Vec<Cue> = Vec::new();
        cues.play_cue(Cue::Catch);
        cues.play_cue(Cue::Splash);
        assert_eq!(cues, vec![Cue::Catch, Cue::Splash]);
    }

    #[test]
    fn test_effective_volume() {
        assert_eq!(effective_volume(0.8, 1.0, true, 1.0), 0.0);
        assert!((effective_volume(0.8, 0.5, false, 0.4) - 0.16).abs() < 0.0001);
        assert_eq!(effective_volume(2.0, 2.0, false, 1.0), 1.0);
    }

    #[test]
    fn test_shared_files() {
        assert_eq!(Cue::Coin.file(), Cue::Catch.file());
        assert_eq!(Cue::Collision.file(), Cue::Splash.file());
    }
}
