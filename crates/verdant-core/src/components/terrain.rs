//! Terrain and placement components: grid positions, water, structures.

use serde::{Deserialize, Serialize};

/// Integer tile coordinates on the world grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub z: i32,
}

impl GridPosition {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chebyshev distance — the 8-neighbor ring is exactly distance 1.
    pub fn chebyshev(self, other: GridPosition) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// Squared Euclidean distance, for structure radius checks.
    pub fn dist_sq(self, other: GridPosition) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dz = (self.z - other.z) as i64;
        dx * dx + dz * dz
    }

    /// The 8 neighboring tiles (this tile excluded).
    pub fn ring(self) -> impl Iterator<Item = GridPosition> {
        let center = self;
        (-1..=1).flat_map(move |dx| {
            (-1..=1).filter_map(move |dz| {
                if dx == 0 && dz == 0 {
                    None
                } else {
                    Some(GridPosition::new(center.x + dx, center.z + dz))
                }
            })
        })
    }
}

/// Marker for a tile carrying surface water.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaterTile;

/// Structure kinds that project an aura onto nearby tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Greenhouse,
    Sprinkler,
    CompostSilo,
    HarvestTotem,
}

impl StructureKind {
    /// Default (radius in tiles, growth multiplier, harvest multiplier).
    pub fn effect(self) -> (i32, f32, f32) {
        match self {
            StructureKind::Greenhouse => (3, 1.25, 1.0),
            StructureKind::Sprinkler => (2, 1.15, 1.0),
            StructureKind::CompostSilo => (4, 1.1, 1.1),
            StructureKind::HarvestTotem => (3, 1.0, 1.25),
        }
    }
}

/// A placed structure boosting growth and/or harvest in its radius.
/// Overlapping auras stack multiplicatively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
    pub radius: i32,
    pub growth_mult: f32,
    pub harvest_mult: f32,
}

impl Structure {
    pub fn new(kind: StructureKind) -> Self {
        let (radius, growth_mult, harvest_mult) = kind.effect();
        Self {
            kind,
            radius,
            growth_mult,
            harvest_mult,
        }
    }
}
