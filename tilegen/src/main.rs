use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::info;

use tilegrid::{Classifier, Configuration, NullObserver, Pixel, PixelSource, TileGrid, TileObserver};

mod output;

/// Convert a raster image into a grid of tile codes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image to classify
    #[arg(default_value = "test.png")]
    input: PathBuf,

    /// Destination for the JSON-encoded grid
    #[arg(short, long, default_value = "test.json")]
    output: PathBuf,

    /// Number of grid columns read from the image
    #[arg(long, default_value_t = 200)]
    width: u32,

    /// Number of grid rows read from the image
    #[arg(long, default_value_t = 200)]
    height: u32,

    /// Suppress the per-tile diagnostic lines
    #[arg(short, long)]
    quiet: bool,
}

/// Adapts a decoded RGBA buffer to the classifier's pixel seam.
struct RasterSource(image::RgbaImage);

impl PixelSource for RasterSource {
    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        let image::Rgba([red, green, blue, alpha]) = *self.0.get_pixel_checked(x, y)?;
        Some(Pixel::from_rgba(red, green, blue, alpha))
    }
}

/// Prints one `<row> <column> <code>` line per classified tile.
#[derive(Default)]
struct StdoutObserver {
    matches: u64,
}

impl TileObserver for StdoutObserver {
    fn tile_classified(&mut self, row: usize, column: usize, code: u8) {
        println!("{} {} {}", row, column, code);
        self.matches += 1;
    }
}

fn classify_image(
    path: &Path,
    config: &Configuration,
    observer: impl TileObserver,
) -> anyhow::Result<TileGrid> {
    let img = image::open(path)
        .with_context(|| format!("failed to open image {}", path.display()))?;
    let source = RasterSource(img.to_rgba8());

    let classifier = Classifier::new(config);
    let grid = classifier
        .classify(&source, observer)
        .context("classification failed")?;
    Ok(grid)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Configuration::default().with_dimensions(args.width, args.height);
    info!(
        "classifying {} into a {}x{} grid",
        args.input.display(),
        args.width,
        args.height
    );

    let grid = if args.quiet {
        classify_image(&args.input, &config, NullObserver)?
    } else {
        let mut printer = StdoutObserver::default();
        let grid = classify_image(&args.input, &config, &mut printer)?;
        info!("{} rule matches", printer.matches);
        grid
    };

    output::write_grid(&args.output, &grid)?;
    info!("wrote grid to {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use tilegrid::{PixelSource, Pixel};

    use crate::RasterSource;

    #[test]
    fn raster_source_maps_coordinates() {
        let mut img = image::RgbaImage::new(4, 3);
        img.put_pixel(2, 1, image::Rgba([255, 0, 0, 255]));

        let source = RasterSource(img);
        assert_eq!(4, source.width());
        assert_eq!(3, source.height());
        assert_eq!(Some(Pixel::from_rgba(255, 0, 0, 255)), source.pixel(2, 1));
        assert_eq!(Some(Pixel::from_rgba(0, 0, 0, 0)), source.pixel(0, 0));
        assert_eq!(None, source.pixel(4, 0));
    }
}
