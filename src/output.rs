//! PNG output.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, ImageError};
use log::trace;

use crate::{
    error::{Error, Result},
    raster::Raster,
};

/// Where the binary writes its image, relative to the working directory.
pub const RESULT_PATH: &str = "result.png";

/// Encode `raster` as an RGBA8 PNG into `writer`.
pub fn encode_png<W: Write>(raster: &Raster, writer: W) -> Result<()> {
    trace!("begin encode_png");

    let size = raster.size();
    PngEncoder::new(writer).write_image(
        raster.as_bytes(),
        size.width,
        size.height,
        ExtendedColorType::Rgba8,
    )?;

    trace!("end encode_png");
    Ok(())
}

/// Create (or truncate) the file at `path` and write `raster` to it as a PNG.
///
/// A partially written file is left in place if encoding fails.
pub fn write_png(raster: &Raster, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::OutputCreation {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    encode_png(raster, &mut writer)?;
    writer.flush().map_err(ImageError::IoError)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use tempdir::TempDir;

    use super::*;
    use crate::{
        colour::Colouring,
        config::{Builder, Config},
        pixel::Rgba,
        render::render,
        screen,
    };

    fn channels(pixel: Rgba) -> [u8; 4] {
        bytemuck::cast(pixel)
    }

    /// Accepts a few bytes, then fails every write as if the disk filled up.
    struct FullDisk {
        room: usize,
    }

    impl Write for FullDisk {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.room == 0 {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
            }
            let written = buf.len().min(self.room);
            self.room -= written;
            Ok(written)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn decode(bytes: &[u8]) -> image::RgbaImage {
        image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
            .unwrap()
            .to_rgba8()
    }

    #[test]
    fn test_png_round_trip_is_lossless() {
        let config = Builder::new()
            .with_size(41, 23)
            .with_colouring(Colouring::Graded)
            .build()
            .unwrap();
        let (raster, _) = render(&config).unwrap();

        let mut bytes = Vec::new();
        encode_png(&raster, &mut bytes).unwrap();

        let decoded = decode(&bytes);
        assert_eq!(decoded.dimensions(), (41, 23));
        assert_eq!(decoded.as_raw().as_slice(), raster.as_bytes());
    }

    #[test]
    fn test_round_trip_keeps_alpha() {
        let mut raster = Raster::new(screen::Size::new(2, 1));
        raster.pixels_mut()[1] = Rgba::RED;

        let mut bytes = Vec::new();
        encode_png(&raster, &mut bytes).unwrap();

        let decoded = decode(&bytes);
        assert_eq!(decoded.get_pixel(0, 0).0, channels(Rgba::TRANSPARENT));
        assert_eq!(decoded.get_pixel(1, 0).0, channels(Rgba::RED));
    }

    #[test]
    fn test_write_preview() {
        let dir = TempDir::new("mandelbrot-png").unwrap();
        let path = dir.path().join(RESULT_PATH);

        let (raster, _) = render(&Config::preview()).unwrap();
        write_png(&raster, &path).unwrap();

        let image = image::open(&path).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (400, 400));
        assert_eq!(image.get_pixel(0, 0).0, channels(Rgba::WHITE));
        assert_eq!(image.get_pixel(200, 160).0, channels(Rgba::BLACK));
    }

    #[test]
    fn test_failing_writer_is_encoding_error() {
        let (raster, _) = render(&Config::preview()).unwrap();

        for room in [0, 16, 1024] {
            match encode_png(&raster, FullDisk { room }) {
                Err(Error::Encoding(ImageError::IoError(error))) => {
                    assert_eq!(error.to_string(), "disk full")
                }
                other => panic!("expected Encoding, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unwritable_path_is_output_creation_error() {
        let dir = TempDir::new("mandelbrot-png").unwrap();
        let path = dir.path().join("missing").join(RESULT_PATH);

        let raster = Raster::new(screen::Size::new(1, 1));
        match write_png(&raster, &path) {
            Err(Error::OutputCreation { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected OutputCreation, got {other:?}"),
        }
        assert!(!path.exists());
    }
}
