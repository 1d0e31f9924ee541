//! Map generator - weighted seeding plus cellular-automata smoothing
//!
//! Generation runs in two phases:
//!
//! 1. **Seeding**: every cell, in row-major order, draws a tile from
//!    [`TILE_WEIGHTS`](crate::types::TILE_WEIGHTS).
//! 2. **Smoothing**: [`SMOOTHING_PASSES`](crate::types::SMOOTHING_PASSES)
//!    passes of neighbor-majority voting. Each pass reads the previous grid
//!    and writes a fresh one, so updates within a pass never feed back into
//!    the same pass.
//!
//! The whole run consumes a single [`GameRng`] seeded from the map seed, so
//! `(width, height, seed)` fully determines the result.

use crate::grid::{checked_dimensions, Grid, MapError};
use crate::rng::{GameRng, WeightedTable};
use crate::types::{Tile, SMOOTHING_KEEP_CHANCE, SMOOTHING_PASSES, TILE_WEIGHTS};

/// Procedural terrain generator for one map
#[derive(Debug, Clone)]
pub struct MapGenerator {
    width: usize,
    height: usize,
    rng: GameRng,
    weights: WeightedTable<Tile>,
}

impl MapGenerator {
    /// Create a generator, validating dimensions.
    ///
    /// When `seed` is `None` a seed is drawn from the thread RNG; read it
    /// back with [`MapGenerator::seed`] to reproduce the map later.
    pub fn new(width: i64, height: i64, seed: Option<u64>) -> Result<Self, MapError> {
        let (width, height) = checked_dimensions(width, height)?;
        let rng = match seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self {
            width,
            height,
            rng,
            weights: terrain_table(),
        })
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Produce the map.
    ///
    /// Consumes the generator: a seeded draw sequence backs exactly one map.
    pub fn generate(mut self) -> Grid {
        log::debug!(
            "generating {}x{} map with seed {}",
            self.width,
            self.height,
            self.seed()
        );
        let mut grid = self.seed_tiles();
        for _ in 0..SMOOTHING_PASSES {
            grid = self.smooth(&grid);
        }
        grid
    }

    fn seed_tiles(&mut self) -> Grid {
        let tiles = (0..self.width * self.height)
            .map(|_| self.weights.sample(&mut self.rng))
            .collect();
        Grid::from_tiles(self.width, self.height, tiles)
    }

    fn smooth(&mut self, prev: &Grid) -> Grid {
        let mut next = prev.clone();
        for y in 0..prev.height() {
            for x in 0..prev.width() {
                let neighbors = prev.neighbors(x, y);
                if neighbors.is_empty() {
                    continue;
                }
                if self.rng.next_unit() > SMOOTHING_KEEP_CHANCE {
                    next.set(x, y, majority(&neighbors));
                }
            }
        }
        next
    }
}

fn terrain_table() -> WeightedTable<Tile> {
    WeightedTable::new(&TILE_WEIGHTS).expect("terrain weights are a non-empty positive table")
}

/// Most frequent tile; ties go to the lowest ordinal.
///
/// `tiles` must not be empty.
pub fn majority(tiles: &[Tile]) -> Tile {
    let mut counts = [0usize; Tile::COUNT];
    for tile in tiles {
        counts[tile.ordinal()] += 1;
    }
    let mut best = 0;
    for i in 1..Tile::COUNT {
        if counts[i] > counts[best] {
            best = i;
        }
    }
    Tile::ALL[best]
}

/// Convenience wrapper: validate, seed, and generate in one call
pub fn generate(width: i64, height: i64, seed: Option<u64>) -> Result<Grid, MapError> {
    Ok(MapGenerator::new(width, height, seed)?.generate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_table_matches_weights() {
        let table = terrain_table();
        assert_eq!(table.total(), 100);
        assert_eq!(table.pick(0), Tile::Grass);
        assert_eq!(table.pick(99), Tile::Desert);
    }

    #[test]
    fn test_majority_picks_most_frequent() {
        let tiles = [Tile::Water, Tile::Grass, Tile::Water, Tile::Forest];
        assert_eq!(majority(&tiles), Tile::Water);
    }

    #[test]
    fn test_majority_tie_goes_to_lowest_ordinal() {
        let tiles = [Tile::Desert, Tile::Forest, Tile::Desert, Tile::Forest];
        assert_eq!(majority(&tiles), Tile::Forest);

        let tiles = [Tile::Water, Tile::Mountain, Tile::Grass];
        assert_eq!(majority(&tiles), Tile::Grass);
    }

    #[test]
    fn test_seeding_only_produces_weighted_tiles() {
        let mut generator = MapGenerator::new(40, 20, Some(3)).unwrap();
        let grid = generator.seed_tiles();
        assert_eq!(grid.count(Tile::Empty), 0);
        assert_eq!(grid.tiles().len(), 800);
    }

    #[test]
    fn test_smoothing_uniform_grid_is_fixed_point() {
        let mut generator = MapGenerator::new(6, 4, Some(1)).unwrap();
        let grid = Grid::filled(6, 4, Tile::Mountain).unwrap();
        assert_eq!(generator.smooth(&grid), grid);
    }

    #[test]
    fn test_smoothing_reads_previous_pass_only() {
        // A lone water cell in a grass field: every neighbor of every cell
        // reads the old grid, so grass cells never see the water cell "move".
        let mut generator = MapGenerator::new(3, 3, Some(5)).unwrap();
        let prev = Grid::parse("...\n.~.\n...").unwrap();
        let next = generator.smooth(&prev);
        for (pos, tile) in next.cells() {
            if pos.x == 1 && pos.y == 1 {
                assert!(tile == Tile::Water || tile == Tile::Grass);
            } else {
                assert_eq!(tile, Tile::Grass);
            }
        }
    }

    #[test]
    fn test_single_cell_map_keeps_seeded_tile() {
        let grid = generate(1, 1, Some(11)).unwrap();
        assert_eq!(grid.width(), 1);
        assert_ne!(grid.get(0, 0), Some(Tile::Empty));
    }

    #[test]
    fn test_generator_records_chosen_seed() {
        let generator = MapGenerator::new(8, 8, None).unwrap();
        let seed = generator.seed();
        let first = generator.generate();
        assert_eq!(generate(8, 8, Some(seed)).unwrap(), first);
    }
}
