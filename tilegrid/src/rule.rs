/// A color sample read from a single image coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue, alpha: 255 }
    }

    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }
}

/// A predicate-to-code mapping for a single tile code.
///
/// Each color channel carries an optional expected value. A channel set to
/// `None` matches any value. The alpha channel is never consulted.
#[derive(Debug, Clone, Copy)]
pub struct ColorRule {
    red: Option<u8>,
    green: Option<u8>,
    blue: Option<u8>,
    code: u8,
}

impl ColorRule {
    pub const fn new(red: Option<u8>, green: Option<u8>, blue: Option<u8>, code: u8) -> Self {
        Self { red, green, blue, code }
    }

    pub fn matches(&self, pixel: Pixel) -> bool {
        fn channel(expected: Option<u8>, actual: u8) -> bool {
            match expected {
                Some(value) => value == actual,
                None => true,
            }
        }

        channel(self.red, pixel.red)
            && channel(self.green, pixel.green)
            && channel(self.blue, pixel.blue)
    }

    pub fn code(&self) -> u8 {
        self.code
    }
}
