use crate::domain::Material;
use crate::grid::Grid;

use super::surface::Surface;

impl Grid {
    /// Draw what changed since the last physics pass began.
    ///
    /// Blanks the surface first if `clear` ran since the last step, then
    /// emits one pixel per dirty index. Cells outside the dirty set are never
    /// read, so the cost tracks activity rather than grid area.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        if self.needs_clear() {
            surface.clear(self.materials().get(Material::Empty).base_color);
        }

        for &idx in self.dirty_indices() {
            let Some(cell) = self.cell(idx) else {
                continue;
            };
            let (x, y) = self.coords(idx);
            surface.draw_pixel(x, y, cell.color);
        }
    }

    /// Draw every cell, for a surface that has never seen this grid
    pub fn render_full<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.materials().get(Material::Empty).base_color);

        for idx in 0..self.size() {
            let Some(cell) = self.cell(idx) else {
                continue;
            };
            if cell.is_empty() {
                continue;
            }
            let (x, y) = self.coords(idx);
            surface.draw_pixel(x, y, cell.color);
        }
    }
}
