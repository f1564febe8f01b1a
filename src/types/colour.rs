//! Colour type and parsing.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{SwatchError, Result};

/// An RGB colour with real-valued channels.
///
/// Channels are not clamped: averaging is pure arithmetic, so a colour may
/// carry fractional or out-of-gamut values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// All channels zero. The identity for channel sums.
    pub const ZERO: Self = Self::rgb(0.0, 0.0, 0.0);

    /// White.
    pub const WHITE: Self = Self::rgb(255.0, 255.0, 255.0);

    /// Parse a hex colour string into 0-255 channels.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let mut digits = [0u8; 3];
                for (slot, c) in digits.iter_mut().zip(hex.chars()) {
                    let d = parse_hex_digit(c)?;
                    *slot = d << 4 | d;
                }
                let [r, g, b] = digits;
                Ok(Self::rgb(r.into(), g.into(), b.into()))
            }
            6 if hex.is_ascii() => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r.into(), g.into(), b.into()))
            }
            _ => Err(SwatchError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB or #RRGGBB format, or an {r, g, b} object".to_string()),
            }),
        }
    }

    /// Apply `f` to each channel.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::rgb(f(self.r), f(self.g), f(self.b))
    }

    /// Divide every channel by `n`.
    pub fn div(self, n: usize) -> Self {
        let n = n as f64;
        self.map(|c| c / n)
    }

    /// Channel-wise midpoint between two colours.
    pub fn midpoint(self, other: Self) -> Self {
        Self::rgb(
            (self.r + other.r) / 2.0,
            (self.g + other.g) / 2.0,
            (self.b + other.b) / 2.0,
        )
    }

    /// Round each channel to one decimal place (see [`round_tenths`]).
    pub fn round_tenths(self) -> Self {
        self.map(round_tenths)
    }

    /// Channels as an array, in r, g, b order.
    pub fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Check that no channel is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.channels().iter().all(|c| c.is_finite())
    }

    /// Check that every channel lies in the 0-255 display range.
    pub fn in_gamut(self) -> bool {
        self.channels().iter().all(|c| (0.0..=255.0).contains(c))
    }
}

impl Add for Colour {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::rgb(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl FromStr for Colour {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Round to one decimal place, ties toward positive infinity.
///
/// `0.25 -> 0.3`, `-0.25 -> -0.2`, `1.05 -> 1.1`. This is round-half-up on
/// the value scaled by ten, not round-half-even and not `f64::round`
/// (which moves negative ties away from zero).
pub fn round_tenths(x: f64) -> f64 {
    round_half_up(10.0 * x) / 10.0
}

fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    // compare the fractional part; floor(x + 0.5) rounds 0.49999999999999994 up
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// On-disk colour forms: `{r, g, b}` or a hex string.
///
/// Dispatches on the input's shape so serde's own error (missing field,
/// bad hex digit) reaches the user.
impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ColourVisitor)
    }
}

#[derive(Deserialize)]
struct Channels {
    r: f64,
    g: f64,
    b: f64,
}

struct ColourVisitor;

impl<'de> Visitor<'de> for ColourVisitor {
    type Value = Colour;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an {r, g, b} object or a #RGB/#RRGGBB string")
    }

    fn visit_str<E: de::Error>(self, s: &str) -> std::result::Result<Colour, E> {
        Colour::from_hex(s).map_err(|e| match e {
            SwatchError::Parse { message, .. } => E::custom(message),
            other => E::custom(other),
        })
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<Colour, A::Error> {
        let Channels { r, g, b } = Channels::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(Colour::rgb(r, g, b))
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| SwatchError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SwatchError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
