/// 8-bit per channel color used for sprite tints, text and clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const RAY_WHITE: Rgba = Rgba::rgb(245, 245, 245);
    pub const MAROON: Rgba = Rgba::rgb(190, 33, 55);
    pub const DARK_GRAY: Rgba = Rgba::rgb(80, 80, 80);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert an HSV triple to an opaque display color.
    ///
    /// `hue` is in degrees and wraps, `saturation` and `value` are expected in
    /// `[0, 1]` and are clamped. Channels are truncated to 8 bits.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let saturation = saturation.clamp(0.0, 1.0);
        let value = value.clamp(0.0, 1.0);
        let sector = hue / 60.0;

        let channel = |offset: f32| -> u8 {
            let k = (offset + sector).rem_euclid(6.0);
            let k = k.min(4.0 - k).clamp(0.0, 1.0);
            ((value - value * saturation * k) * 255.0) as u8
        };

        Self::rgb(channel(5.0), channel(3.0), channel(1.0))
    }
}
