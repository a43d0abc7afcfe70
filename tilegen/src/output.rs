use std::fs;
use std::path::Path;

use anyhow::Context;
use tilegrid::TileGrid;

/// Encodes the grid as a JSON array of rows and writes it in a single pass,
/// replacing any existing file.
pub fn write_grid(path: &Path, grid: &TileGrid) -> anyhow::Result<()> {
    let encoded = encode(grid).context("failed to encode grid")?;
    fs::write(path, encoded).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn encode(grid: &TileGrid) -> serde_json::Result<String> {
    serde_json::to_string(&grid.to_rows())
}

#[cfg(test)]
mod tests {
    use tilegrid::{Classifier, Configuration, NullObserver, BufferSource, Pixel};

    use crate::output::encode;

    fn sample_grid() -> tilegrid::TileGrid {
        let mut source = BufferSource::filled(3, 2, Pixel::from_rgb(0, 0, 0));
        source.put(1, 0, Pixel::from_rgb(255, 0, 0));
        source.put(2, 1, Pixel::from_rgb(0, 255, 220));

        let config = Configuration::default().with_dimensions(3, 2);
        Classifier::new(&config)
            .classify(&source, NullObserver)
            .unwrap()
    }

    #[test]
    fn encodes_rows_in_order() {
        let grid = sample_grid();
        assert_eq!("[[0,1,0],[0,0,3]]", encode(&grid).unwrap());
    }

    #[test]
    fn round_trip_is_lossless() {
        let grid = sample_grid();
        let decoded: Vec<Vec<u8>> = serde_json::from_str(&encode(&grid).unwrap()).unwrap();
        assert_eq!(grid.to_rows(), decoded);
    }
}
