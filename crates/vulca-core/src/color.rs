//! Color helpers used by identities and the visual mapper.
//!
//! Hue is in degrees `[0, 360)`, saturation and lightness are fractions `[0, 1]`.

/// 8-bit sRGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue / saturation / lightness.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// `#RRGGBB`
    pub fn to_hex_string(self) -> String {
        format!("#{:06X}", self.to_hex())
    }

    /// Channels as `[0, 1]` floats, the layout GPU instance data expects.
    pub fn to_unit_array(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        Hsl { h: h * 60.0, s, l }
    }

    /// Linear interpolation toward `other` by `alpha` in `[0, 1]`.
    pub fn blend(self, other: Rgb, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f32 * (1.0 - a) + y as f32 * a).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Lightness and saturation shifted by how far `weight` (0..10) sits from the midpoint.
    pub fn variant(self, weight: f32) -> Rgb {
        let hsl = self.to_hsl();
        let shift = weight - 5.0;
        Hsl {
            h: hsl.h,
            s: (hsl.s + shift * 0.03).clamp(0.2, 1.0),
            l: (hsl.l + shift * 0.04).clamp(0.2, 0.8),
        }
        .to_rgb()
    }

    pub fn complementary(self) -> Rgb {
        let hsl = self.to_hsl();
        Hsl { h: hsl.h + 180.0, ..hsl }.to_rgb()
    }

    /// The color flanked by its neighbours at -60 and +60 degrees.
    pub fn analogous(self) -> [Rgb; 3] {
        let hsl = self.to_hsl();
        [-60.0, 0.0, 60.0].map(|offset| Hsl { h: hsl.h + offset, ..hsl }.to_rgb())
    }
}

impl Hsl {
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> Rgb {
        let h = wrap_hue(self.h);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;
        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(to_u8(r), to_u8(g), to_u8(b))
    }
}

/// Wrap any hue into `[0, 360)`.
#[inline]
pub fn wrap_hue(h: f32) -> f32 {
    let w = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}
