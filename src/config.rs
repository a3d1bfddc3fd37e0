//! Render configuration.

use crate::{
    colour::Colouring,
    error::{Error, Result},
    plane::Window,
    render::Schedule,
    screen,
};

const MIN_REAL: f64 = -2.0;
const MAX_REAL: f64 = 1.0;
const MIN_IMAGINARY: f64 = -1.2;

/// Everything a render depends on. Only the presets and [`Builder::build`] create one, so
/// a `Config` always has a non-empty grid, a non-zero iteration cap and a valid window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    size: screen::Size,
    window: Window,
    max_iterations: u32,
    colouring: Colouring,
    schedule: Schedule,
}

impl Config {
    /// 400×400, 30 iterations, black and white.
    pub fn preview() -> Self {
        Self::standard(screen::Size::new(400, 400), 30, Colouring::Binary)
    }

    /// 5000×5000, 100 iterations, two escape bands.
    pub fn poster() -> Self {
        Self::standard(screen::Size::new(5000, 5000), 100, Colouring::Graded)
    }

    fn standard(size: screen::Size, max_iterations: u32, colouring: Colouring) -> Self {
        Self {
            size,
            window: Window::from_real_span(MIN_REAL, MAX_REAL, MIN_IMAGINARY, size),
            max_iterations,
            colouring,
            schedule: Schedule::Sequential,
        }
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn colouring(&self) -> Colouring {
        self.colouring
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::preview()
    }
}

/// Builds a [`Config`] starting from [`Config::preview`], or from an existing one with
/// [`Builder::from_config`].
///
/// Changing the size without setting a window re-derives the preview window for the new
/// aspect ratio.
pub struct Builder {
    size: screen::Size,
    window: Option<Window>,
    max_iterations: u32,
    colouring: Colouring,
    schedule: Schedule,
}

impl Builder {
    pub fn new() -> Self {
        let preview = Config::preview();
        Self {
            size: preview.size,
            window: None,
            max_iterations: preview.max_iterations,
            colouring: preview.colouring,
            schedule: preview.schedule,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            size: config.size,
            window: Some(config.window),
            max_iterations: config.max_iterations,
            colouring: config.colouring,
            schedule: config.schedule,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = screen::Size::new(width, height);
        self
    }

    pub fn with_window(mut self, window: Window) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_colouring(mut self, colouring: Colouring) -> Self {
        self.colouring = colouring;
        self
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn build(self) -> Result<Config> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "raster must be at least 1×1, got {}×{}",
                self.size.width, self.size.height
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }

        let window = self.window.unwrap_or_else(|| {
            Window::from_real_span(MIN_REAL, MAX_REAL, MIN_IMAGINARY, self.size)
        });
        check_axis("real", window.min_real, window.max_real)?;
        check_axis("imaginary", window.min_imaginary, window.max_imaginary)?;

        Ok(Config {
            size: self.size,
            window,
            max_iterations: self.max_iterations,
            colouring: self.colouring,
            schedule: self.schedule,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_axis(name: &str, min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(Error::InvalidConfig(format!(
            "{name} bounds must be finite with min < max, got [{min}, {max}]"
        )));
    }
    Ok(())
}
