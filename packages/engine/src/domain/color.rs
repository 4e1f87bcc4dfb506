//! Colours - RGBA storage, HSL conversion and per-particle jitter
//!
//! Every new particle gets its material's base colour pushed through
//! `vary_color` once. The result is frozen into the cell and travels with it.

use rand::Rng;

use crate::core::ConfigError;

/// Straight 8-bit RGBA
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse `#rrggbb` into an opaque colour
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        Self::from_hex_with_alpha(hex, 255)
    }

    pub fn from_hex_with_alpha(hex: &str, alpha: u8) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(hex.to_string());

        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(invalid)?;

        let channel = |from: usize| u8::from_str_radix(&digits[from..from + 2], 16).map_err(|_| invalid());

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Pack as 0xAABBGGRR so a little-endian u32 buffer reads [R, G, B, A]
    /// (the byte order canvas ImageData expects).
    #[inline]
    pub fn to_abgr_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }
}

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub fn from_rgb(color: Rgba) -> Self {
        let r = color.r as f32 / 255.0;
        let g = color.g as f32 / 255.0;
        let b = color.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            // Achromatic
            return Self { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let s = if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self {
            h: sector * 60.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    pub fn to_rgb(self, alpha: u8) -> Rgba {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = self.h.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let m = l - chroma / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        Rgba::new(channel(r), channel(g), channel(b), alpha)
    }
}

/// Jitter a base colour for a freshly created particle.
///
/// Saturation drops by 0..=20 points, lightness moves by -10..=10 points,
/// hue is kept. The result is always fully opaque.
pub fn vary_color<R: Rng + ?Sized>(base: Rgba, rng: &mut R) -> Rgba {
    let hsl = Hsl::from_rgb(base);
    let saturation = hsl.s - rng.gen_range(0..=20) as f32;
    let lightness = hsl.l + rng.gen_range(-10..=10) as f32;

    Hsl {
        h: hsl.h,
        s: saturation.clamp(0.0, 100.0),
        l: lightness.clamp(0.0, 100.0),
    }
    .to_rgb(255)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAND: Rgba = Rgba::opaque(220, 177, 89);

    #[test]
    fn hex_parses_and_formats() {
        assert_eq!(Rgba::from_hex("#dcb159").unwrap(), SAND);
        assert_eq!(Rgba::from_hex_with_alpha("#000000", 0).unwrap(), Rgba::new(0, 0, 0, 0));
        assert_eq!(SAND.to_hex(), "#dcb159");
    }

    #[test]
    fn hex_rejects_garbage() {
        for bad in ["dcb159", "#dcb15", "#dcb1590", "#+cb159", "#zzzzzz", ""] {
            assert!(
                matches!(Rgba::from_hex(bad), Err(ConfigError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn abgr_packing_puts_red_in_low_byte() {
        let packed = Rgba::new(0x11, 0x22, 0x33, 0x44).to_abgr_u32();
        assert_eq!(packed, 0x4433_2211);
        assert_eq!(packed.to_le_bytes(), [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn hsl_round_trip_is_stable() {
        for color in [SAND, Rgba::BLACK, Rgba::opaque(255, 255, 255), Rgba::opaque(12, 200, 90)] {
            assert_eq!(Hsl::from_rgb(color).to_rgb(255), color);
        }
    }

    #[test]
    fn hsl_of_pure_red() {
        let hsl = Hsl::from_rgb(Rgba::opaque(255, 0, 0));
        assert_eq!(hsl.h, 0.0);
        assert!((hsl.s - 100.0).abs() < 1e-3);
        assert!((hsl.l - 50.0).abs() < 1e-3);
    }

    #[test]
    fn vary_color_stays_within_jitter_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let base = Hsl::from_rgb(SAND);

        for _ in 0..500 {
            let varied = vary_color(SAND, &mut rng);
            assert_eq!(varied.a, 255);

            let hsl = Hsl::from_rgb(varied);
            // 8-bit quantisation costs up to about a point of accuracy
            assert!(hsl.s <= base.s + 1.5, "saturation rose: {} > {}", hsl.s, base.s);
            assert!(hsl.s >= base.s - 21.5, "saturation fell too far: {}", hsl.s);
            assert!((hsl.l - base.l).abs() <= 11.0, "lightness drifted: {}", hsl.l);
        }
    }

    #[test]
    fn vary_color_of_grey_keeps_zero_saturation() {
        let mut rng = StdRng::seed_from_u64(3);
        let varied = vary_color(Rgba::opaque(128, 128, 128), &mut rng);
        assert_eq!(varied.r, varied.g);
        assert_eq!(varied.g, varied.b);
    }
}
