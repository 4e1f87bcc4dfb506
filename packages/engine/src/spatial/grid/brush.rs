use rand::Rng;

use super::*;

impl Grid {
    /// Stamp sand into a disc (see `set_within_circle_with`)
    pub fn set_within_circle(&mut self, cx: i32, cy: i32, radius: u32, probability: f32) {
        self.set_within_circle_with(cx, cy, radius, probability, Material::Sand);
    }

    /// Stamp `material` into every cell within Euclidean `radius` of
    /// (cx, cy), inclusive. Each cell is filled independently with chance
    /// `probability`; a NaN probability fills nothing. Occupied cells are
    /// painted over. Only the part of the disc's bounding box that lies on
    /// the grid is visited, so a huge radius costs at most one grid pass.
    pub fn set_within_circle_with(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u32,
        probability: f32,
        material: Material,
    ) {
        let r = radius as i64;
        let (cx, cy) = (cx as i64, cy as i64);

        let x_min = (cx - r).max(0);
        let x_max = (cx + r).min(self.width as i64 - 1);
        let y_min = (cy - r).max(0);
        let y_max = (cy + r).min(self.height as i64 - 1);

        // Offsets reach ~2^33 when the centre is far off the grid
        let r2 = (r as i128) * (r as i128);

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let (dx, dy) = ((x - cx) as i128, (y - cy) as i128);
                if dx * dx + dy * dy > r2 {
                    continue;
                }

                let hit = self.rng.gen::<f32>() < probability;
                if !hit {
                    continue;
                }

                let particle = self.spawn(material);
                let idx = self.index(x as u32, y as u32);
                self.set_index(idx, particle);
            }
        }
    }
}
