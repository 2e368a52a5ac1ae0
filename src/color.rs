//! Immutable sRGB color values with the HSL and blending operations the
//! shade expander and component generators are built from.
//!
//! Every operation returns a new [`Color`]; nothing is mutated in place.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Result, TokenError};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: u8,
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: u8::MAX,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, alpha: u8) -> Self {
        Self { r, g, b, alpha }
    }

    /// Builds an opaque color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)`
    /// and `transparent`.
    pub fn parse(input: &str) -> Result<Self> {
        let text = input.trim().to_ascii_lowercase();
        let invalid = || TokenError::InvalidColor(input.to_string());

        if text == "transparent" {
            return Ok(Self::TRANSPARENT);
        }

        if let Some(digits) = text.strip_prefix('#') {
            return parse_hex_digits(digits).ok_or_else(invalid);
        }

        let (body, arity) = if let Some(rest) = text.strip_prefix("rgba(") {
            (rest, 4)
        } else if let Some(rest) = text.strip_prefix("rgb(") {
            (rest, 3)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != arity {
            return Err(invalid());
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            let value: f32 = part.parse().map_err(|_| invalid())?;
            *slot = value.round().clamp(0.0, 255.0) as u8;
        }
        let alpha = match parts.get(3) {
            Some(part) => {
                let value: f32 = part.parse().map_err(|_| invalid())?;
                unit_to_byte(value)
            }
            None => u8::MAX,
        };

        Ok(Self::rgba(channels[0], channels[1], channels[2], alpha))
    }

    pub fn is_opaque(self) -> bool {
        self.alpha == u8::MAX
    }

    pub fn alpha_f32(self) -> f32 {
        f32::from(self.alpha) / 255.0
    }

    /// `#rrggbb` for opaque colors, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = (self.alpha_f32() * 100.0).round() / 100.0;
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta <= f32::EPSILON {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let h = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl { h: h * 60.0, s, l }
    }

    pub fn from_hsl(hsl: Hsl, alpha: u8) -> Self {
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);
        let h = hsl.h.rem_euclid(360.0) / 360.0;

        if s <= f32::EPSILON {
            let gray = unit_to_byte(l);
            return Self::rgba(gray, gray, gray, alpha);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Self::rgba(
            unit_to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
            unit_to_byte(hue_to_channel(p, q, h)),
            unit_to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
            alpha,
        )
    }

    /// Raises lightness by `ratio` of its current value.
    pub fn lighten(self, ratio: f32) -> Self {
        self.map_hsl(|hsl| Hsl {
            l: hsl.l + hsl.l * ratio,
            ..hsl
        })
    }

    pub fn darken(self, ratio: f32) -> Self {
        self.map_hsl(|hsl| Hsl {
            l: hsl.l - hsl.l * ratio,
            ..hsl
        })
    }

    pub fn saturate(self, ratio: f32) -> Self {
        self.map_hsl(|hsl| Hsl {
            s: hsl.s + hsl.s * ratio,
            ..hsl
        })
    }

    pub fn desaturate(self, ratio: f32) -> Self {
        self.map_hsl(|hsl| Hsl {
            s: hsl.s - hsl.s * ratio,
            ..hsl
        })
    }

    pub fn grayscale(self) -> Self {
        self.desaturate(1.0)
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: unit_to_byte(alpha),
            ..self
        }
    }

    /// Reduces opacity by `ratio` of its current value.
    pub fn fade(self, ratio: f32) -> Self {
        self.with_alpha(self.alpha_f32() * (1.0 - ratio.clamp(0.0, 1.0)))
    }

    /// Per-channel interpolation; `weight` is the share of `other` in the result.
    pub fn mix(self, other: Color, weight: f32) -> Self {
        let w = weight.clamp(0.0, 1.0);
        let lerp = |from: u8, to: u8| {
            let from = f32::from(from);
            (from + (f32::from(to) - from) * w).round() as u8
        };
        Self::rgba(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
            lerp(self.alpha, other.alpha),
        )
    }

    /// WCAG relative luminance, ignoring alpha.
    pub fn relative_luminance(self) -> f32 {
        let linear = |channel: u8| {
            let c = f32::from(channel) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    pub fn contrast_ratio(self, other: Color) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        (hi + 0.05) / (lo + 0.05)
    }

    fn map_hsl(self, f: impl FnOnce(Hsl) -> Hsl) -> Self {
        Self::from_hsl(f(self.to_hsl()), self.alpha)
    }
}

fn unit_to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn parse_hex_digits(digits: &str) -> Option<Color> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    match digits.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}
