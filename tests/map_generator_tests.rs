//! Map generator tests - determinism and terrain invariants

use goblin::core::{generate, Grid, MapError, MapGenerator};
use goblin::types::Tile;

#[test]
fn test_same_seed_same_grid() {
    let a = generate(5, 3, Some(42)).unwrap();
    let b = generate(5, 3, Some(42)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.width(), 5);
    assert_eq!(a.height(), 3);
}

#[test]
fn test_determinism_across_sizes_and_seeds() {
    for (w, h) in [(1, 1), (1, 7), (9, 1), (2, 2), (50, 25)] {
        for seed in [0u64, 1, 7, 1_000_000, u64::MAX] {
            let a = generate(w, h, Some(seed)).unwrap();
            let b = generate(w, h, Some(seed)).unwrap();
            assert_eq!(a, b, "{}x{} seed {}", w, h, seed);
        }
    }
}

#[test]
fn test_different_seeds_usually_differ() {
    let grids: Vec<Grid> = (0..8).map(|s| generate(30, 15, Some(s)).unwrap()).collect();
    let distinct = grids
        .iter()
        .enumerate()
        .filter(|(i, g)| grids[..*i].iter().all(|other| other != *g))
        .count();
    assert!(distinct > 1);
}

#[test]
fn test_generated_grid_never_contains_empty() {
    for seed in 0..10 {
        let grid = generate(20, 10, Some(seed)).unwrap();
        assert_eq!(grid.count(Tile::Empty), 0);
        assert_eq!(grid.tiles().len(), 200);
    }
}

#[test]
fn test_smoothing_produces_regions() {
    // After smoothing most cells agree with at least one neighbor.
    let grid = generate(50, 25, Some(123)).unwrap();
    let agreeing = grid
        .cells()
        .filter(|(pos, tile)| grid.neighbors(pos.x, pos.y).contains(tile))
        .count();
    assert!(agreeing * 10 > grid.tiles().len() * 8, "{}", agreeing);
}

#[test]
fn test_invalid_dimensions_rejected() {
    assert_eq!(
        MapGenerator::new(0, 10, Some(1)).unwrap_err(),
        MapError::InvalidDimension { width: 0, height: 10 }
    );
    assert!(MapGenerator::new(10, -3, None).is_err());
    assert!(generate(-1, -1, Some(1)).is_err());
}

#[test]
fn test_invalid_dimension_message() {
    let err = MapGenerator::new(0, 4, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid map dimensions 0x4: width and height must be at least 1"
    );
}

#[test]
fn test_oversized_dimensions_rejected_before_generation() {
    let err = MapGenerator::new(i64::MAX, 3, Some(1)).unwrap_err();
    assert!(matches!(err, MapError::TooLarge { height: 3, .. }));
    assert!(generate(1 << 20, 1 << 20, Some(1)).is_err());
    assert!(err.to_string().starts_with("map 9223372036854775807x3 is too large"));
}

#[test]
fn test_unseeded_generator_is_reproducible() {
    let generator = MapGenerator::new(12, 6, None).unwrap();
    let seed = generator.seed();
    let grid = generator.generate();
    assert_eq!(generate(12, 6, Some(seed)).unwrap(), grid);
}
