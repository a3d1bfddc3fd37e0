use log::{debug, info};

use mandelbrot_png::{output, render, Config, Error};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    debug!("{:?}", config);

    info!("Starting render...");
    let (raster, stats) = render::render(&config)?;
    info!("Render complete.");
    debug!(
        "{} interior, {} escaped, most common escape {:?}",
        stats.interior,
        stats.escaped_total(),
        stats.mode()
    );

    info!("Encoding image...");
    output::write_png(&raster, output::RESULT_PATH)?;
    info!("Image is ready.");

    Ok(())
}
