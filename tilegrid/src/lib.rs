//! Classifies the pixels of a raster image into a 2-D grid of integer
//! tile codes using an ordered list of color rules.

pub use classifier::{Classifier, ClassifyError, Configuration};
pub use grid::TileGrid;
pub use observer::{NullObserver, TileObserver};
pub use rule::{ColorRule, Pixel};
pub use source::{BufferSource, PixelSource};

mod classifier;
mod grid;
mod observer;
mod rule;
mod source;
