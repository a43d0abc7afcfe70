use std::fmt::{Display, Formatter};

use crate::grid::TileGrid;
use crate::observer::TileObserver;
use crate::rule::ColorRule;
use crate::source::PixelSource;

/// Structure containing configuration for a [Classifier].
#[derive(Debug, Clone)]
pub struct Configuration {
    width: u32,
    height: u32,
    rules: Vec<ColorRule>,
}

impl Configuration {
    fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            rules: Vec::new(),
        }
    }

    /// Sets the number of columns and rows read from the source.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Replaces the rule list. Order is significant: rules are evaluated in
    /// sequence per pixel and a later match overwrites an earlier one.
    pub fn with_rules(mut self, rules: Vec<ColorRule>) -> Self {
        self.rules = rules;
        self
    }

    /// The original fixed parameters: a 200x200 grid and the three
    /// default color rules.
    pub fn preset_default() -> Self {
        Self::new()
            .with_dimensions(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
            .with_rules(DEFAULT_RULES.into())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rules(&self) -> &[ColorRule] {
        &self.rules
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::preset_default()
    }
}

const DEFAULT_GRID_WIDTH: u32 = 200;
const DEFAULT_GRID_HEIGHT: u32 = 200;

const DEFAULT_RULES: [ColorRule; 3] = [
    ColorRule::new(Some(255), None, None, 1),
    ColorRule::new(None, Some(255), Some(0), 2),
    ColorRule::new(None, Some(255), Some(220), 3),
];

/// Produces a fully populated [TileGrid] from a pixel source.
pub struct Classifier {
    config: Configuration,
}

impl Classifier {
    /// Creates a new [Classifier] with the given [Configuration].
    pub fn new(config: &Configuration) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Scans the configured region of `source` in row-major order and
    /// assigns a tile code to every cell.
    ///
    /// Cells start at code 0. For each pixel every rule is tested in order;
    /// each match writes the rule's code and notifies `observer`, so the
    /// final cell value belongs to the last matching rule. Any failure to
    /// read a pixel aborts the pass.
    pub fn classify(
        &self,
        source: &impl PixelSource,
        mut observer: impl TileObserver,
    ) -> Result<TileGrid, ClassifyError> {
        let width = self.config.width;
        let height = self.config.height;

        if width == 0 || height == 0 {
            return Err(ClassifyError::EmptyGrid { width, height });
        }

        if source.width() < width || source.height() < height {
            return Err(ClassifyError::SourceTooSmall {
                width: source.width(),
                height: source.height(),
                required_width: width,
                required_height: height,
            });
        }

        let mut grid = TileGrid::new(width as usize, height as usize);
        for row in 0..height {
            for column in 0..width {
                let pixel = source
                    .pixel(column, row)
                    .ok_or(ClassifyError::PixelOutOfBounds { x: column, y: row })?;

                for rule in &self.config.rules {
                    if rule.matches(pixel) {
                        grid.set(row as usize, column as usize, rule.code());
                        observer.tile_classified(row as usize, column as usize, rule.code());
                    }
                }
            }
        }

        Ok(grid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    EmptyGrid {
        width: u32,
        height: u32,
    },
    SourceTooSmall {
        width: u32,
        height: u32,
        required_width: u32,
        required_height: u32,
    },
    PixelOutOfBounds {
        x: u32,
        y: u32,
    },
}

impl Display for ClassifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifyError::EmptyGrid { width, height } => {
                write!(f, "Grid must have non-zero dimensions, got {width}x{height}")
            }
            ClassifyError::SourceTooSmall {
                width,
                height,
                required_width,
                required_height,
            } => write!(
                f,
                "Source is {width}x{height} but at least {required_width}x{required_height} is required"
            ),
            ClassifyError::PixelOutOfBounds { x, y } => {
                write!(f, "Source returned no pixel at ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for ClassifyError {}
