use std::ops::Mul;

/// A 24-bit color, RGB.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Instantiate a new Color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn blue() -> Self {
        Self::new(0, 0, 255)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    /// Attenuate every channel by a factor expected to lie in [0, 1].
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            r: (self.r as f64 * rhs) as u8,
            g: (self.g as f64 * rhs) as u8,
            b: (self.b as f64 * rhs) as u8,
        }
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attenuation_scales_channels() {
        let c = Color::new(100, 200, 0) * 0.5;
        assert_eq!(c, Color::new(50, 100, 0));
    }
}
