//! The escape-time renderer.

use log::{debug, trace};
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{
    config::Config,
    error::Result,
    escape::escape_time,
    pixel::Rgba,
    plane::Mapper,
    raster::Raster,
    stats::Stats,
};

/// How rows are distributed while rendering. Every pixel depends only on its own
/// coordinate, so both schedules produce identical output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Schedule {
    /// Row-major on the calling thread.
    #[default]
    Sequential,
    /// Rows fanned out over a dedicated rayon pool. `threads == 0` uses one thread per CPU.
    Parallel { threads: usize },
}

pub struct Renderer<'a> {
    config: &'a Config,
    mapper: Mapper,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            mapper: Mapper::new(config.window(), config.size()),
        }
    }

    /// Render the whole raster, returning it with the escape statistics.
    pub fn render(&self) -> Result<(Raster, Stats)> {
        trace!("begin render");

        let mut raster = Raster::new(self.config.size());
        let stats = match self.config.schedule() {
            Schedule::Sequential => self.render_sequential(&mut raster),
            Schedule::Parallel { threads } => self.render_parallel(&mut raster, threads)?,
        };

        debug_assert_eq!(stats.total(), self.config.size().area() as u64);
        trace!("end render");
        Ok((raster, stats))
    }

    fn render_sequential(&self, raster: &mut Raster) -> Stats {
        raster
            .rows_mut()
            .enumerate()
            .fold(Stats::default(), |stats, (y, row)| {
                stats.merge(self.render_row(y as u32, row))
            })
    }

    fn render_parallel(&self, raster: &mut Raster, threads: usize) -> Result<Stats> {
        let threads = if threads == 0 {
            num_cpus::get()
        } else {
            threads
        };
        debug!("rendering on {} threads", threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("render-{index}"))
            .build()?;

        let row_len = raster.row_len();
        let stats = pool.install(|| {
            raster
                .pixels_mut()
                .par_chunks_mut(row_len)
                .enumerate()
                .map(|(y, row)| self.render_row(y as u32, row))
                .reduce(Stats::default, Stats::merge)
        });
        Ok(stats)
    }

    /// Colour one row in place.
    fn render_row(&self, y: u32, row: &mut [Rgba]) -> Stats {
        debug_assert_eq!(row.len(), self.config.size().width as usize);
        let max_iterations = self.config.max_iterations();
        let colouring = self.config.colouring();

        let mut stats = Stats::default();
        for (x, pixel) in row.iter_mut().enumerate() {
            let c = self.mapper.point(x as u32, y);
            let escape = escape_time(c, max_iterations);
            *pixel = colouring.colour(escape, max_iterations);
            stats.record(escape);
        }
        stats
    }
}

/// Render `config` in one call.
pub fn render(config: &Config) -> Result<(Raster, Stats)> {
    Renderer::new(config).render()
}
