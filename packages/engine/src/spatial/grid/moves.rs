use super::*;

impl Grid {
    // === Swap two cells ===

    /// Exchange two cells and mark both dirty.
    ///
    /// Empty-for-empty swaps are skipped so they never reach the dirty set.
    /// Indices off the grid make this a no-op.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a >= self.size || b >= self.size {
            return;
        }
        if self.cells[a].is_empty() && self.cells[b].is_empty() {
            return;
        }

        self.cells.swap(a, b);
        self.dirty.insert(a);
        self.dirty.insert(b);
    }

    /// Where a falling particle at `idx` can go next, if anywhere.
    ///
    /// Straight down wins, then down-left, then down-right. Diagonals must
    /// land in the neighbouring column: at the left or right edge the raw
    /// index would alias into the far edge of another row.
    pub(crate) fn fall_target(&self, idx: usize) -> Option<usize> {
        let width = self.width as usize;
        let column = self.column(idx);
        let below = idx + width;

        if self.is_vacant(below) {
            return Some(below);
        }

        let below_left = below - 1;
        if self.column(below_left) < column && self.is_vacant(below_left) {
            return Some(below_left);
        }

        let below_right = below + 1;
        if self.column(below_right) > column && self.is_vacant(below_right) {
            return Some(below_right);
        }

        None
    }
}
