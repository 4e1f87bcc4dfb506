use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::{Material, SimConfig};
use crate::grid::Grid;

use super::perf_stats::PerfStats;
use super::{FixedStep, PixelBuffer, WorldCore};

pub(super) fn create_world_core(config: SimConfig) -> WorldCore {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let background = config.materials.get(Material::Empty).base_color;
    let grid = Grid::with_materials(config.width, config.height, config.materials.clone(), rng);

    log::info!(
        "world created: {}x{} at {} ticks/s (seed {:?})",
        config.width,
        config.height,
        config.tick_rate,
        config.seed
    );

    WorldCore {
        grid,
        clock: FixedStep::new(config.tick_rate),
        frame_buffer: PixelBuffer::new(config.width, config.height, background),
        config,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
