//! Grid - dense row-major particle storage and the per-tick step
//!
//! Cells are stored by value in one `Vec<Particle>`, index = x + y * width.
//! Every write goes through `set_index`, which also marks the cell dirty so
//! a renderer only ever has to look at cells that changed.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::{Material, MaterialTable, Particle};
use crate::spatial::dirty::DirtySet;

mod indexing;
mod accessors;
mod moves;
mod brush;
mod step;

pub use step::StepReport;

/// `width * height`, or `None` if it overflows `usize`
#[inline]
pub fn cell_count(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    cells: Vec<Particle>,
    materials: MaterialTable,

    /// Indices touched since the last physics pass began
    dirty: DirtySet,
    /// One-shot: the next render blanks the surface first
    cleared: bool,
    /// Non-empty cells, kept in step with every write
    occupied: usize,

    rng: StdRng,
}

impl Grid {
    /// Empty grid with default materials, seeded from OS entropy
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_materials(width, height, MaterialTable::default(), StdRng::from_entropy())
    }

    /// Empty grid whose scan order, sub-steps and colours replay exactly
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self::with_materials(width, height, MaterialTable::default(), StdRng::seed_from_u64(seed))
    }

    /// # Panics
    /// If either dimension is zero or the cell count overflows `usize`.
    pub fn with_materials(width: u32, height: u32, materials: MaterialTable, rng: StdRng) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be non-zero, got {}x{}",
            width,
            height
        );

        let Some(size) = cell_count(width, height) else {
            panic!("grid of {}x{} cells does not fit in memory", width, height);
        };
        let blank = Particle::blank(materials.get(Material::Empty).base_color);

        Self {
            width,
            height,
            size,
            cells: vec![blank; size],
            materials,
            dirty: DirtySet::new(size),
            cleared: false,
            occupied: 0,
            rng,
        }
    }

    #[inline]
    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    /// A fresh particle of `material`, colour jittered from its base
    pub fn spawn(&mut self, material: Material) -> Particle {
        Particle::create(material, self.materials.get(material), &mut self.rng)
    }

    #[inline]
    fn blank(&self) -> Particle {
        Particle::blank(self.materials.get(Material::Empty).base_color)
    }

    /// Reset every cell to empty and ask the next render to blank the surface
    pub fn clear(&mut self) {
        let blank = self.blank();
        self.cells.fill(blank);
        self.dirty.clear();
        self.occupied = 0;
        self.cleared = true;
        log::debug!("grid cleared ({}x{})", self.width, self.height);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
