//! Player preferences
//!
//! Skins are picked on the customization screen before a level; the host
//! page may also supply any field up front as JSON.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Boat sprite choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoatSkin {
    #[default]
    Dinghy,
    Trawler,
    Yacht,
}

impl BoatSkin {
    pub const ALL: [BoatSkin; 3] = [BoatSkin::Dinghy, BoatSkin::Trawler, BoatSkin::Yacht];

    /// Image asset key
    pub fn as_str(&self) -> &'static str {
        match self {
            BoatSkin::Dinghy => "boat1",
            BoatSkin::Trawler => "boat2",
            BoatSkin::Yacht => "boat3",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "boat1" | "dinghy" => Some(BoatSkin::Dinghy),
            "boat2" | "trawler" => Some(BoatSkin::Trawler),
            "boat3" | "yacht" => Some(BoatSkin::Yacht),
            _ => None,
        }
    }
}

/// Hook sprite choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HookSkin {
    #[default]
    Classic,
    Treble,
    Golden,
}

impl HookSkin {
    pub const ALL: [HookSkin; 3] = [HookSkin::Classic, HookSkin::Treble, HookSkin::Golden];

    /// Image asset key
    pub fn as_str(&self) -> &'static str {
        match self {
            HookSkin::Classic => "hook1",
            HookSkin::Treble => "hook2",
            HookSkin::Golden => "hook3",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hook1" | "classic" => Some(HookSkin::Classic),
            "hook2" | "treble" => Some(HookSkin::Treble),
            "hook3" | "golden" => Some(HookSkin::Golden),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Customization ===
    pub boat: BoatSkin,
    pub hook: HookSkin,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Accessibility ===
    /// Freeze wave animation and drifting particles
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            boat: BoatSkin::Dinghy,
            hook: HookSkin::Classic,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 1.0,
            muted: false,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse settings, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.clamp_volumes();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }

    fn clamp_volumes(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
    }
}
