use crate::rule::Pixel;

/// A read-only 2-D surface of color samples.
///
/// Coordinates are (x, y) with x growing to the right and y growing
/// downwards, matching raster image addressing.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Returns the sample at (x, y), or `None` when the coordinate lies
    /// outside the source bounds.
    fn pixel(&self, x: u32, y: u32) -> Option<Pixel>;
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        (**self).pixel(x, y)
    }
}

/// An in-memory pixel source backed by a flat row-major buffer.
#[derive(Debug, Clone)]
pub struct BufferSource {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl BufferSource {
    /// Creates a source with every sample set to the same color.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
        assert_eq!(width as usize * height as usize, pixels.len());
        Self { width, height, pixels }
    }

    pub fn put(&mut self, x: u32, y: u32, pixel: Pixel) {
        assert!(x < self.width);
        assert!(y < self.height);
        self.pixels[y as usize * self.width as usize + x as usize] = pixel;
    }
}

impl PixelSource for BufferSource {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }
}

#[cfg(test)]
mod tests {
    use crate::rule::Pixel;
    use crate::source::{BufferSource, PixelSource};

    #[test]
    fn filled_and_put() {
        let black = Pixel::from_rgb(0, 0, 0);
        let red = Pixel::from_rgb(255, 0, 0);

        let mut source = BufferSource::filled(3, 2, black);
        source.put(2, 1, red);

        assert_eq!(Some(black), source.pixel(0, 0));
        assert_eq!(Some(red), source.pixel(2, 1));
        assert_eq!(Some(black), source.pixel(1, 1));
    }

    #[test]
    fn out_of_bounds_is_none() {
        let source = BufferSource::filled(3, 2, Pixel::from_rgb(0, 0, 0));
        assert_eq!(None, source.pixel(3, 0));
        assert_eq!(None, source.pixel(0, 2));
    }

    #[test]
    fn from_pixels_is_row_major() {
        let pixels = vec![
            Pixel::from_rgb(1, 0, 0),
            Pixel::from_rgb(2, 0, 0),
            Pixel::from_rgb(3, 0, 0),
            Pixel::from_rgb(4, 0, 0),
        ];
        let source = BufferSource::from_pixels(2, 2, pixels);
        assert_eq!(Some(Pixel::from_rgb(2, 0, 0)), source.pixel(1, 0));
        assert_eq!(Some(Pixel::from_rgb(3, 0, 0)), source.pixel(0, 1));
    }
}
