//! # Cave Quality Tests
//!
//! Verifies the pipeline end to end through the public API:
//! determinism, bounds, culling order, threshold boundaries, and that the
//! reference 100x450 map actually looks like a cave.

use cavern_core::{CellState, EdgePolicy, Grid};
use cavern_procedural::{
    cull_fragments, cull_regions, find_regions, region_at, seed_noise, AliveChance, CaveConfig,
    CaveGenerator, CaveSeed, Smoother,
};

/// The demo map: 100 wide, 450 rows, 45%, 6 iterations, seed 1.
fn reference_config() -> CaveConfig {
    CaveConfig::new(100, 450)
        .with_alive_chance(45)
        .with_smoothing_iterations(6)
        .with_seed(CaveSeed::new(1))
}

/// Test: Two independent generators produce bit-identical caves.
#[test]
fn test_reference_map_is_deterministic() {
    let first = CaveGenerator::new(reference_config()).unwrap().generate().unwrap();
    let second = CaveGenerator::new(reference_config()).unwrap().generate().unwrap();

    assert_eq!(first.cells().len(), 45_000);
    assert_eq!(first.cells(), second.cells());
}

/// Test: Every index decomposes into valid coordinates, and every neighbour
/// stays inside the buffer.
#[test]
fn test_indices_stay_in_bounds() {
    let cave = CaveGenerator::new(CaveConfig::new(37, 23)).unwrap().generate().unwrap();
    let grid = cave.grid();

    for index in 0..grid.size() {
        let x = index / grid.width();
        let y = index % grid.width();
        assert!(x < grid.height());
        assert!(y < grid.width());

        for policy in [EdgePolicy::Clip, EdgePolicy::FlatIndex] {
            for neighbour in grid.neighbours(index, policy) {
                assert!(neighbour < grid.size(), "{neighbour} escaped the grid");
                assert_ne!(neighbour, index);
            }
        }
    }
}

/// Test: The reference map is neither solid rock nor open field.
#[test]
fn test_reference_map_looks_like_a_cave() {
    let cave = CaveGenerator::new(reference_config()).unwrap().generate().unwrap();
    let grid = cave.grid();

    let wall_fraction = grid.wall_count() as f64 / grid.size() as f64;
    let floors = find_regions(grid, CellState::Floor, EdgePolicy::Clip);

    println!("=== Reference Cave ===");
    println!("Wall fraction: {:.1}%", wall_fraction * 100.0);
    println!("Floor regions: {}", floors.len());
    println!("Wall regions retained: {}", cave.wall_regions().len());
    println!("Smoothing changes: {:?}", cave.stats().smoothing.changed_per_pass);
    println!("Generated in {:?}", cave.stats().elapsed);

    assert!(
        (0.25..0.75).contains(&wall_fraction),
        "Implausible wall fraction: {wall_fraction}"
    );
    assert!(!floors.is_empty(), "Cave has no floor at all");
    assert!(floors.iter().all(|region| region.len() >= 50));
}

/// Test: A 5x5 empty grid with one wall island is all floor after culling.
#[test]
fn test_single_island_scenario() {
    let mut grid = Grid::new(5, 5).unwrap();
    let walls = seed_noise(&mut grid, AliveChance::clamped(0), CaveSeed::new(3));
    assert_eq!(walls, 0);

    grid.set(grid.index_of(1, 3).unwrap(), CellState::Wall).unwrap();
    assert_eq!(grid.wall_count(), 1);

    cull_regions(&mut grid, CellState::Wall, 2, EdgePolicy::Clip);

    assert_eq!(grid, Grid::new(5, 5).unwrap());
}

/// Test: Culling walls then floors differs from floors then walls.
#[test]
fn test_culling_order_is_a_contract() {
    // A wall line around three single-cell pockets:
    //
    //   . # . # .
    //   # # # # #
    let cells = vec![
        false, true, false, true, false, //
        true, true, true, true, true,
    ];
    let original = Grid::from_cells(5, 2, cells).unwrap();

    let mut walls_first = original.clone();
    cull_regions(&mut walls_first, CellState::Wall, 3, EdgePolicy::Clip);
    cull_regions(&mut walls_first, CellState::Floor, 3, EdgePolicy::Clip);

    let mut floors_first = original.clone();
    cull_regions(&mut floors_first, CellState::Floor, 3, EdgePolicy::Clip);
    cull_regions(&mut floors_first, CellState::Wall, 3, EdgePolicy::Clip);

    // Walls (7 cells) survive either way; the pockets (1 cell each) are filled.
    assert_eq!(walls_first, floors_first);

    // Now a case where the order decides the outcome.
    let original = Grid::from_cells(3, 1, vec![false, true, false]).unwrap();

    let mut walls_first = original.clone();
    cull_regions(&mut walls_first, CellState::Wall, 2, EdgePolicy::Clip);
    cull_regions(&mut walls_first, CellState::Floor, 2, EdgePolicy::Clip);

    let mut floors_first = original.clone();
    cull_regions(&mut floors_first, CellState::Floor, 2, EdgePolicy::Clip);
    cull_regions(&mut floors_first, CellState::Wall, 2, EdgePolicy::Clip);

    assert_ne!(walls_first, floors_first);

    let mut pipeline = original;
    cull_fragments(&mut pipeline, 2, 2, EdgePolicy::Clip);
    assert_eq!(pipeline, walls_first);
}

/// Test: A region exactly at the threshold is kept, one below is culled.
#[test]
fn test_threshold_boundary() {
    // A 3-cell diagonal wall in open floor.
    let mut base = Grid::new(6, 6).unwrap();
    for index in [7, 14, 21] {
        base.set(index, CellState::Wall).unwrap();
    }

    let mut at_threshold = base.clone();
    let report = cull_regions(&mut at_threshold, CellState::Wall, 3, EdgePolicy::Clip);
    assert_eq!(at_threshold, base);
    assert_eq!(report.retained.len(), 1);

    let mut one_short = base.clone();
    cull_regions(&mut one_short, CellState::Wall, 4, EdgePolicy::Clip);
    assert_eq!(one_short.wall_count(), 0);
}

/// Test: Flood fill returns the same component from every member.
#[test]
fn test_flood_fill_completeness() {
    let cave = CaveGenerator::new(CaveConfig::new(60, 60).with_seed(CaveSeed::new(5)))
        .unwrap()
        .generate()
        .unwrap();
    let grid = cave.grid();

    for region in find_regions(grid, CellState::Floor, EdgePolicy::Clip) {
        let expected = region.sorted_indices();
        for &start in region.indices().iter().step_by(17) {
            let found = region_at(grid, start, EdgePolicy::Clip).unwrap();
            assert_eq!(found.sorted_indices(), expected);
        }
    }
}

/// Test: One extra smoothing pass over a finished cave changes little.
#[test]
fn test_smoothing_near_convergence() {
    let config = reference_config().with_culling(false);
    let cave = CaveGenerator::new(config).unwrap().generate().unwrap();

    let mut grid = cave.into_grid();
    let stats = Smoother::new(EdgePolicy::Clip).run(&mut grid, 1);

    println!("Extra pass changed {} of {} cells", stats.last_changed(), grid.size());
    assert!(stats.last_changed() * 20 < grid.size());
}

/// Test: The row-wrap edge policy is a different generator, not a no-op.
#[test]
fn test_edge_policy_changes_result() {
    let clipped = CaveGenerator::new(reference_config()).unwrap().generate().unwrap();
    let flat = CaveGenerator::new(reference_config().with_edge_policy(EdgePolicy::FlatIndex))
        .unwrap()
        .generate()
        .unwrap();

    assert_ne!(clipped.cells(), flat.cells());
}
