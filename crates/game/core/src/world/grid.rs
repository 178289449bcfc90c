use crate::env::TileMap;

/// Size of a tile grid in whole tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub columns: u32,
    pub rows: u32,
}

impl MapDimensions {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as u32) < self.columns && (row as u32) < self.rows
    }

    pub const fn tile_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Dense grid of blocking flags, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    dimensions: MapDimensions,
    blocked: Vec<bool>,
}

impl TileGrid {
    /// Creates a grid where every tile is walkable.
    pub fn open(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            blocked: vec![false; dimensions.tile_count()],
        }
    }

    /// Builds a grid by asking `is_blocked(col, row)` for every tile.
    pub fn from_fn(dimensions: MapDimensions, mut is_blocked: impl FnMut(u32, u32) -> bool) -> Self {
        let mut grid = Self::open(dimensions);
        for row in 0..dimensions.rows {
            for col in 0..dimensions.columns {
                if is_blocked(col, row) {
                    grid.set_blocked(col as i32, row as i32, true);
                }
            }
        }
        grid
    }

    /// Grid whose outermost ring of tiles is solid.
    pub fn walled(dimensions: MapDimensions) -> Self {
        Self::from_fn(dimensions, |col, row| {
            col == 0 || row == 0 || col + 1 == dimensions.columns || row + 1 == dimensions.rows
        })
    }

    /// Marks a tile; coordinates outside the grid are ignored.
    pub fn set_blocked(&mut self, col: i32, row: i32, blocked: bool) {
        if let Some(index) = self.index(col, row) {
            self.blocked[index] = blocked;
        }
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if !self.dimensions.contains(col, row) {
            return None;
        }
        Some(row as usize * self.dimensions.columns as usize + col as usize)
    }
}

impl TileMap for TileGrid {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn is_tile_blocked(&self, col: i32, row: i32) -> bool {
        self.index(col, row).is_none_or(|index| self.blocked[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walled_grid_blocks_border_only() {
        let grid = TileGrid::walled(MapDimensions::new(4, 3));
        assert!(grid.is_tile_blocked(0, 1));
        assert!(grid.is_tile_blocked(3, 1));
        assert!(grid.is_tile_blocked(2, 2));
        assert!(!grid.is_tile_blocked(1, 1));
        assert!(!grid.is_tile_blocked(2, 1));
    }

    #[test]
    fn outside_tiles_read_as_blocked() {
        let grid = TileGrid::open(MapDimensions::new(2, 2));
        assert!(grid.is_tile_blocked(-1, 0));
        assert!(grid.is_tile_blocked(0, 2));
    }
}
