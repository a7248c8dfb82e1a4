/// A RGBA `Color`. Each color component is a floating point value
/// with a range from 0 to 1.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl From<[u8; 4]> for Color {
    fn from(v: [u8; 4]) -> Self {
        let max = 255.0;
        Color::new(
            f32::from(v[0]) / max,
            f32::from(v[1]) / max,
            f32::from(v[2]) / max,
            f32::from(v[3]) / max,
        )
    }
}

impl Into<[f32; 4]> for Color {
    fn into(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// Creates an opaque `Color` from 8-bit channels.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::from([r, g, b, 255])
    }

    /// Returns a copy with the alpha channel replaced.
    pub fn with_alpha(self, a: f32) -> Self {
        Color { a, ..self }
    }

    #[inline]
    pub fn black() -> Self {
        Color::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn white() -> Self {
        Color::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn cornflower_blue() -> Self {
        Color::rgb8(100, 149, 237)
    }
}
