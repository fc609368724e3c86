//! Color conversion — hex string → RGB → HSL.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected #RRGGBB, got {0:?}")]
    InvalidHex(String),
}

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#RRGGBB` hex string (leading `#` optional).
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(input.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorError::InvalidHex(input.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Uppercase `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// HSL triple, rounded to integer degrees/percents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees, 0..=360.
    pub h: u16,
    /// Saturation percent, 0..=100.
    pub s: u8,
    /// Lightness percent, 0..=100.
    pub l: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl From<Rgb> for Hsl {
    /// Standard max/min-channel formula.
    fn from(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            // Achromatic.
            (0.0, 0.0)
        } else {
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
            (h / 6.0, s)
        };

        Self {
            h: (h * 360.0).round() as u16,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#FF8000").unwrap(), Rgb { r: 255, g: 128, b: 0 });
        assert_eq!(Rgb::from_hex("ff8000").unwrap(), Rgb { r: 255, g: 128, b: 0 });
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["#fff", "#gghhii", "", "#12345", "#1234567"] {
            assert!(Rgb::from_hex(bad).is_err(), "{bad:?} should fail");
        }
    }

    #[test]
    fn white_is_achromatic() {
        let hsl = Hsl::from(Rgb { r: 255, g: 255, b: 255 });
        assert_eq!(hsl, Hsl { h: 0, s: 0, l: 100 });
    }

    #[test]
    fn black_is_achromatic() {
        let hsl = Hsl::from(Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(hsl, Hsl { h: 0, s: 0, l: 0 });
    }

    #[test]
    fn pure_red() {
        let hsl = Hsl::from(Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(hsl, Hsl { h: 0, s: 100, l: 50 });
    }

    #[test]
    fn pure_green_and_blue() {
        assert_eq!(Hsl::from(Rgb { r: 0, g: 255, b: 0 }), Hsl { h: 120, s: 100, l: 50 });
        assert_eq!(Hsl::from(Rgb { r: 0, g: 0, b: 255 }), Hsl { h: 240, s: 100, l: 50 });
    }

    #[test]
    fn red_max_branch_wraps_when_green_below_blue() {
        // Magenta-ish: max == r, g < b, hue should land near 300, not negative.
        let hsl = Hsl::from(Rgb { r: 255, g: 0, b: 255 });
        assert_eq!(hsl, Hsl { h: 300, s: 100, l: 50 });
    }

    #[test]
    fn display_forms() {
        let rgb = Rgb { r: 52, g: 152, b: 219 };
        assert_eq!(rgb.to_string(), "rgb(52, 152, 219)");
        assert_eq!(rgb.to_hex(), "#3498DB");
        assert_eq!(Hsl::from(rgb).to_string(), "hsl(204, 70%, 53%)");
    }
}
