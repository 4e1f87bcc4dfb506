//! Particle - the contents of one grid cell

use rand::Rng;

use super::color::{vary_color, Rgba};
use super::material::{Material, MaterialProps};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub material: Material,
    /// Fixed at creation, never recomputed
    pub color: Rgba,
    /// Signed cells-per-tick; always 0 for immobile materials
    pub velocity: f32,
}

impl Particle {
    pub const EMPTY: Particle = Particle::blank(Rgba::BLACK);

    /// An empty cell drawn in `color`
    #[inline]
    pub const fn blank(color: Rgba) -> Self {
        Self {
            material: Material::Empty,
            color,
            velocity: 0.0,
        }
    }

    pub fn create<R: Rng + ?Sized>(material: Material, props: &MaterialProps, rng: &mut R) -> Self {
        let color = if props.varies_color {
            vary_color(props.base_color, rng)
        } else {
            props.base_color
        };

        Self {
            material,
            color,
            velocity: 0.0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.material.is_empty()
    }

    /// Integrate one tick of acceleration, clamping |velocity| to max_speed
    pub fn update_velocity(&mut self, props: &MaterialProps) {
        let velocity = self.velocity + props.acceleration;

        self.velocity = if velocity.abs() > props.max_speed {
            props.max_speed.copysign(velocity)
        } else {
            velocity
        };
    }

    /// Called when the particle is blocked: it has come to rest
    #[inline]
    pub fn reset_velocity(&mut self) {
        self.velocity = 0.0;
    }

    /// Advance the particle's own state by one tick.
    ///
    /// Returns whether it wants to move this tick. Immobile materials never do.
    pub fn tick(&mut self, props: &MaterialProps) -> bool {
        if !props.is_mobile() {
            return false;
        }

        self.update_velocity(props);
        self.velocity != 0.0
    }

    /// Number of displacement attempts for this tick.
    ///
    /// The whole part of |velocity| always counts; the fractional remainder is
    /// the probability of one extra attempt, so slow particles still creep
    /// forward at their average speed.
    pub fn sub_step_count<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let speed = self.velocity.abs();
        let whole = speed.floor();
        let remainder = speed - whole;

        whole as u32 + u32::from(rng.gen::<f32>() < remainder)
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::EMPTY
    }
}
