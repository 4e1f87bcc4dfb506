use super::*;

impl Grid {
    // === Reads ===

    /// Cell at (x, y), or `None` off the grid
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Particle> {
        self.checked_index(x, y).map(|idx| &self.cells[idx])
    }

    #[inline]
    pub fn cell(&self, idx: usize) -> Option<&Particle> {
        self.cells.get(idx)
    }

    /// Out-of-range indices count as empty: nothing is there.
    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        self.cells.get(idx).map_or(true, Particle::is_empty)
    }

    /// On the grid and empty, i.e. something may move in
    #[inline]
    pub(crate) fn is_vacant(&self, idx: usize) -> bool {
        self.cells.get(idx).is_some_and(Particle::is_empty)
    }

    /// Number of non-empty cells
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.occupied
    }

    // === Dirty tracking ===

    /// Indices changed since the last physics pass began
    #[inline]
    pub fn dirty_indices(&self) -> &[usize] {
        self.dirty.as_slice()
    }

    #[inline]
    pub fn is_dirty(&self, idx: usize) -> bool {
        self.dirty.contains(idx)
    }

    /// Whether the next render must blank the surface first
    #[inline]
    pub fn needs_clear(&self) -> bool {
        self.cleared
    }

    // === Writes ===

    /// Place `particle` at (x, y). Positions off the grid are ignored.
    pub fn set(&mut self, x: i32, y: i32, particle: Particle) {
        if let Some(idx) = self.checked_index(x, y) {
            self.set_index(idx, particle);
        }
    }

    /// Overwrite the cell at `idx` and mark it dirty. Ignored past the end.
    pub fn set_index(&mut self, idx: usize, particle: Particle) {
        let Some(cell) = self.cells.get_mut(idx) else {
            return;
        };

        match (cell.is_empty(), particle.is_empty()) {
            (true, false) => self.occupied += 1,
            (false, true) => self.occupied -= 1,
            _ => {}
        }

        *cell = particle;
        self.dirty.insert(idx);
    }
}
