//! Data-driven game balance
//!
//! Species and level tables. Fish carry a `SpeciesId` assigned at spawn time;
//! size and value are always looked up here, never inferred from asset names.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Stable identifier for a fish species
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpeciesId(pub u16);

/// Depth zone a species naturally lives in (display only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthTier {
    Shallow,
    MidOcean,
    DeepSea,
    Abyss,
}

impl DepthTier {
    pub fn label(&self) -> &'static str {
        match self {
            DepthTier::Shallow => "Shallow",
            DepthTier::MidOcean => "Mid Ocean",
            DepthTier::DeepSea => "Deep Sea",
            DepthTier::Abyss => "Abyss",
        }
    }
}

/// A catchable species
#[derive(Debug, Clone, Serialize)]
pub struct Species {
    pub id: SpeciesId,
    pub name: &'static str,
    pub base_points: u32,
    /// Sprite edge length in pixels (fish are square sprites)
    pub size: f32,
    pub tier: DepthTier,
    /// Image asset key
    pub image: &'static str,
}

pub const GOLDFISH: SpeciesId = SpeciesId(1);
pub const CLOWNFISH: SpeciesId = SpeciesId(2);
pub const ANGELFISH: SpeciesId = SpeciesId(3);
pub const BLUE_TANG: SpeciesId = SpeciesId(4);
pub const PARROTFISH: SpeciesId = SpeciesId(5);
pub const GROUPER: SpeciesId = SpeciesId(6);
pub const TUNA: SpeciesId = SpeciesId(7);
pub const GIANT_SQUID: SpeciesId = SpeciesId(8);

const fn species_entry(
    id: SpeciesId,
    name: &'static str,
    base_points: u32,
    size: f32,
    tier: DepthTier,
    image: &'static str,
) -> Species {
    Species {
        id,
        name,
        base_points,
        size,
        tier,
        image,
    }
}

/// Every species in the game, ordered by id
pub const SPECIES: &[Species] = &[
    species_entry(GOLDFISH, "Goldfish", 10, 50.0, DepthTier::Shallow, "fish1"),
    species_entry(CLOWNFISH, "Clownfish", 15, 55.0, DepthTier::Shallow, "fish2"),
    species_entry(ANGELFISH, "Angelfish", 25, 65.0, DepthTier::MidOcean, "fish3"),
    species_entry(BLUE_TANG, "Blue Tang", 30, 70.0, DepthTier::MidOcean, "fish4"),
    species_entry(PARROTFISH, "Parrotfish", 35, 80.0, DepthTier::MidOcean, "fish5"),
    species_entry(GROUPER, "Grouper", 50, 85.0, DepthTier::DeepSea, "fish6"),
    species_entry(TUNA, "Tuna", 60, 90.0, DepthTier::DeepSea, "fish7"),
    species_entry(GIANT_SQUID, "Giant Squid", 100, 150.0, DepthTier::Abyss, "fish8"),
];

/// Look up a species by id
pub fn species(id: SpeciesId) -> Option<&'static Species> {
    SPECIES.iter().find(|s| s.id == id)
}

/// Obstacle sprite variants (purely cosmetic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Seahorse,
    Jellyfish,
    Starfish,
    Shell,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Seahorse,
        ObstacleKind::Jellyfish,
        ObstacleKind::Starfish,
        ObstacleKind::Shell,
    ];

    pub fn image(&self) -> &'static str {
        match self {
            ObstacleKind::Seahorse => "seahorse",
            ObstacleKind::Jellyfish => "jellyfish",
            ObstacleKind::Starfish => "starfish",
            ObstacleKind::Shell => "shell",
        }
    }
}

/// A contiguous world-Y range fish are spawned into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthBand {
    pub min_depth: f32,
    pub max_depth: f32,
    pub fish_count: u32,
    /// Minimum point value for fish spawned in this band.
    ///
    /// The shipped levels set this below every species' base points, so their
    /// values are species-driven; the floor only bites for custom bands.
    pub floor_points: u32,
}

impl DepthBand {
    const fn new(min_depth: f32, max_depth: f32, fish_count: u32, floor_points: u32) -> Self {
        Self {
            min_depth,
            max_depth,
            fish_count,
            floor_points,
        }
    }
}

/// Static per-level parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub id: u32,
    pub name: String,
    pub time_limit_secs: u32,
    pub species_pool: Vec<SpeciesId>,
    /// Drives how many obstacles land in each depth stride
    pub obstacle_density: u32,
    pub world_height: f32,
    pub score_multiplier: f32,
    /// Ordered, non-overlapping spawn bands
    pub bands: Vec<DepthBand>,
    /// Spacing of the depth marker lines
    pub marker_interval: f32,
}

/// Number of levels shipped with the game
pub const LEVEL_COUNT: u32 = 3;

/// Get the configuration for a level (1-based)
pub fn level(id: u32) -> Result<LevelConfig, GameError> {
    let config = match id {
        1 => LevelConfig {
            id,
            name: "Shallow Waters".to_string(),
            time_limit_secs: 60,
            species_pool: vec![GOLDFISH, CLOWNFISH],
            obstacle_density: 3,
            world_height: 2000.0,
            score_multiplier: 1.0,
            bands: vec![
                DepthBand::new(400.0, 800.0, 8, 1),
                DepthBand::new(800.0, 1200.0, 12, 2),
                DepthBand::new(1200.0, 1800.0, 10, 3),
            ],
            marker_interval: 300.0,
        },
        2 => LevelConfig {
            id,
            name: "Mid Ocean".to_string(),
            time_limit_secs: 60,
            species_pool: vec![ANGELFISH, BLUE_TANG, PARROTFISH],
            obstacle_density: 5,
            world_height: 2500.0,
            score_multiplier: 1.5,
            bands: vec![
                DepthBand::new(500.0, 1000.0, 6, 2),
                DepthBand::new(1000.0, 1500.0, 10, 3),
                DepthBand::new(1500.0, 2200.0, 12, 4),
            ],
            marker_interval: 400.0,
        },
        3 => LevelConfig {
            id,
            name: "Deep Abyss".to_string(),
            time_limit_secs: 60,
            species_pool: vec![PARROTFISH, GROUPER, TUNA, GIANT_SQUID],
            obstacle_density: 8,
            world_height: 3000.0,
            score_multiplier: 2.0,
            bands: vec![
                DepthBand::new(600.0, 1200.0, 5, 3),
                DepthBand::new(1200.0, 2000.0, 8, 5),
                DepthBand::new(2000.0, 2800.0, 10, 8),
            ],
            marker_interval: 500.0,
        },
        _ => return Err(GameError::UnknownLevel(id)),
    };
    Ok(config)
}

impl LevelConfig {
    /// Total fish a fresh spawn of this level produces
    pub fn total_fish(&self) -> usize {
        self.bands.iter().map(|b| b.fish_count as usize).sum()
    }

    /// Whether another level follows this one
    pub fn has_next(&self) -> bool {
        self.id < LEVEL_COUNT
    }

    /// Check the table is internally consistent
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |reason: String| GameError::InvalidLevel {
            level: self.id,
            reason,
        };

        if self.species_pool.is_empty() {
            return Err(invalid("species pool is empty".to_string()));
        }
        if !(self.world_height.is_finite() && self.world_height > 0.0) {
            return Err(invalid(format!("world height {} is not positive", self.world_height)));
        }
        if !(self.score_multiplier.is_finite() && self.score_multiplier > 0.0) {
            return Err(invalid(format!(
                "score multiplier {} is not positive",
                self.score_multiplier
            )));
        }
        if self.time_limit_secs == 0 {
            return Err(invalid("time limit is zero".to_string()));
        }

        let mut previous_max = 0.0;
        for (index, band) in self.bands.iter().enumerate() {
            if band.min_depth >= band.max_depth {
                return Err(invalid(format!("band {index} is empty or inverted")));
            }
            if band.min_depth < previous_max {
                return Err(invalid(format!("band {index} overlaps the band above it")));
            }
            if band.max_depth > self.world_height {
                return Err(invalid(format!("band {index} extends below the sea floor")));
            }
            previous_max = band.max_depth;
        }

        Ok(())
    }
}
