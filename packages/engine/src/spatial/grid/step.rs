use rand::Rng;

use super::*;

/// What one tick did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Particles that ended the tick somewhere else
    pub moved: u32,
    /// Successful single-cell displacements
    pub sub_steps: u32,
    /// Particles that hit an obstruction and lost their velocity
    pub rested: u32,
}

impl Grid {
    /// Advance the simulation by exactly one tick.
    ///
    /// Rows run bottom to top so a particle that falls into a lower row is
    /// never visited twice in the same tick. Each row picks a random scan
    /// direction so neither side systematically wins the diagonal.
    pub fn step(&mut self) -> StepReport {
        self.cleared = false;
        self.dirty.clear();

        let mut report = StepReport::default();
        let width = self.width as usize;

        for y in (0..self.height as usize).rev() {
            let row = y * width;
            let left_to_right = self.rng.gen_bool(0.5);

            for i in 0..width {
                let x = if left_to_right { i } else { width - 1 - i };
                self.update_cell(row + x, &mut report);
            }
        }

        report
    }

    fn update_cell(&mut self, idx: usize, report: &mut StepReport) {
        let material = self.cells[idx].material;
        let props = match material {
            Material::Empty => return,
            Material::Sand => *self.materials.get(material),
        };

        if !self.cells[idx].tick(&props) {
            return;
        }

        let attempts = self.cells[idx].sub_step_count(&mut self.rng);
        let mut current = idx;

        for _ in 0..attempts {
            match self.fall_target(current) {
                Some(target) => {
                    self.swap(current, target);
                    current = target;
                    report.sub_steps += 1;
                }
                None => {
                    // Blocked: drop the velocity or it would carry over
                    // into a jump the moment the way clears.
                    self.cells[current].reset_velocity();
                    report.rested += 1;
                    break;
                }
            }
        }

        if current != idx {
            report.moved += 1;
        }
    }
}
