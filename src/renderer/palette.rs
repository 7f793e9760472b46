//! Per-level colour schemes

use super::Color;

/// Colours for one level's sky, water and sea floor
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub sky: Color,
    pub surface: Color,
    pub base: Color,
    /// Water column gradient from the surface down to the screen bottom
    pub stops: [(f32, Color); 3],
    pub floor: Color,
    pub rocks: Color,
}

/// Per-channel darkening at full depth
pub const DEPTH_DARKEN: [f32; 3] = [30.0, 40.0, 60.0];

static SHALLOW: Palette = Palette {
    sky: Color::rgb(0x87, 0xce, 0xeb),
    surface: Color::rgb(0x46, 0x82, 0xb4),
    base: Color::rgb(0x00, 0x77, 0xbe),
    stops: [
        (0.0, Color::rgb(0, 119, 190)),
        (0.4, Color::rgb(0, 80, 150)),
        (1.0, Color::rgb(0, 40, 100)),
    ],
    floor: Color::rgb(0x8b, 0x45, 0x13),
    rocks: Color::rgb(0x65, 0x43, 0x21),
};

static MID_OCEAN: Palette = Palette {
    sky: Color::rgb(0x64, 0x95, 0xed),
    surface: Color::rgb(0x41, 0x69, 0xe1),
    base: Color::rgb(0x00, 0x66, 0xcc),
    stops: [
        (0.0, Color::rgb(0, 102, 204)),
        (0.4, Color::rgb(0, 60, 180)),
        (1.0, Color::rgb(0, 20, 120)),
    ],
    floor: Color::rgb(0x65, 0x43, 0x21),
    rocks: Color::rgb(0x4a, 0x32, 0x18),
};

static ABYSS: Palette = Palette {
    sky: Color::rgb(0x48, 0x3d, 0x8b),
    surface: Color::rgb(0x2e, 0x2b, 0x5f),
    base: Color::rgb(0x2d, 0x1b, 0x69),
    stops: [
        (0.0, Color::rgb(45, 27, 105)),
        (0.4, Color::rgb(30, 20, 80)),
        (1.0, Color::rgb(15, 10, 50)),
    ],
    floor: Color::rgb(0x2d, 0x18, 0x10),
    rocks: Color::rgb(0x1a, 0x0f, 0x08),
};

/// Scheme for a level id; unknown ids get the first level's colours
pub fn palette(level: u32) -> &'static Palette {
    match level {
        2 => &MID_OCEAN,
        3 => &ABYSS,
        _ => &SHALLOW,
    }
}

/// How far down the camera is, 0 at the top to 1 at 70% of the world
pub fn depth_ratio(camera_y: f32, world_height: f32) -> f32 {
    if world_height <= 0.0 {
        return 0.0;
    }
    (camera_y / (world_height * 0.7)).clamp(0.0, 1.0)
}
