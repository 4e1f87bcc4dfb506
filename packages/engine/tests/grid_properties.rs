//! Property-based tests for the grid step
//!
//! Invariants checked over random seeds, sizes and brush strokes:
//! - Particle count is conserved by stepping
//! - The occupancy counter agrees with the cells
//! - The dirty list holds unique, in-range indices
//! - Nothing is ever left mid-air once the grid settles

use falling_sand_engine::grid::Grid;
use proptest::prelude::*;

const SETTLE_STEPS: usize = 400;

/// A handful of (x, y, radius, probability) brush strokes
fn strokes() -> impl Strategy<Value = Vec<(i32, i32, u32, f32)>> {
    prop::collection::vec((-4i32..36, -4i32..28, 0u32..5, 0.0f32..=1.0), 1..6)
}

fn occupied_cells(grid: &Grid) -> usize {
    (0..grid.size()).filter(|&idx| !grid.is_empty(idx)).count()
}

fn paint(grid: &mut Grid, strokes: &[(i32, i32, u32, f32)]) {
    for &(x, y, radius, probability) in strokes {
        grid.set_within_circle(x, y, radius, probability);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: stepping never creates or destroys particles
    #[test]
    fn particle_count_conserved(seed in any::<u64>(), strokes in strokes(), steps in 1usize..80) {
        let mut grid = Grid::with_seed(32, 24, seed);
        paint(&mut grid, &strokes);
        let initial = grid.particle_count();
        prop_assert_eq!(initial, occupied_cells(&grid));

        for step in 0..steps {
            grid.step();
            prop_assert_eq!(
                grid.particle_count(),
                initial,
                "count changed at step {}", step
            );
        }
        prop_assert_eq!(occupied_cells(&grid), initial);
    }

    /// Property: the dirty list is a set of valid indices
    #[test]
    fn dirty_list_unique_and_in_range(seed in any::<u64>(), strokes in strokes()) {
        let mut grid = Grid::with_seed(32, 24, seed);
        paint(&mut grid, &strokes);

        for _ in 0..20 {
            grid.step();
            let dirty = grid.dirty_indices();
            let mut sorted = dirty.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), dirty.len());
            prop_assert!(dirty.iter().all(|&idx| idx < grid.size()));
        }
    }

    /// Property: a settled pile has no particle with open space beneath it
    #[test]
    fn settled_pile_is_supported(seed in any::<u64>(), width in 1u32..24, height in 1u32..24, strokes in strokes()) {
        let mut grid = Grid::with_seed(width, height, seed);
        paint(&mut grid, &strokes);

        for _ in 0..SETTLE_STEPS {
            grid.step();
        }

        for idx in 0..grid.size() {
            if grid.is_empty(idx) {
                continue;
            }
            let (x, y) = grid.coords(idx);
            if y + 1 == height {
                continue;
            }
            let below = grid.index(x, y + 1);
            prop_assert!(!grid.is_empty(below), "particle at ({}, {}) floats", x, y);
        }
    }
}
