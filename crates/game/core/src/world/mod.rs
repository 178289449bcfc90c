//! Static map geometry and the collision query built on top of it.
//!
//! Map layouts arrive already parsed; this module only stores them in a shape
//! that is cheap to query every tick.
mod collision;
mod grid;
mod objects;

pub use collision::CollisionQuery;
pub use grid::{MapDimensions, TileGrid};
pub use objects::{ObjectLayer, PlacedObject};

/// Identifier of a map (area) of the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapId(pub u32);

impl std::fmt::Display for MapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "map#{}", self.0)
    }
}
