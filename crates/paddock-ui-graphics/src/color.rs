//! Color representation

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Build an opaque color from a packed `0xRRGGBB` value.
    pub const fn from_hex(rgb: u32) -> Self {
        Self::from_rgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    // Marketplace palette
    pub const WARNING: Color = Color::from_hex(0xf59e0b);
    pub const ERROR: Color = Color::from_hex(0xef4444);
    pub const INFO: Color = Color::from_hex(0x3b82f6);
    pub const TEXT_SECONDARY: Color = Color::from_hex(0x6b7280);
    pub const SUBTLE_LIGHT: Color = Color::from_hex(0x6b7280);
}
