use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgBarTheme,
    ///Height of a single bar, as a fraction of the bar length
    #[serde(default = "default_bar_height")]
    pub bar_height: f32,
    ///Write the size of every cut inside its rectangle
    #[serde(default = "default_true")]
    pub label_cuts: bool,
    ///Draw the kerf after every cut
    #[serde(default = "default_true")]
    pub draw_kerf: bool,
}

fn default_bar_height() -> f32 {
    0.04
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgBarTheme::default(),
            bar_height: default_bar_height(),
            label_cuts: true,
            draw_kerf: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgBarTheme {
    pub stroke_width_multiplier: f32,
    pub bar_fill: Color,
    pub cut_fill: Color,
    pub kerf_fill: Color,
    pub unusable_fill: Color,
}

impl Default for SvgBarTheme {
    fn default() -> Self {
        SvgBarTheme::EARTH_TONES
    }
}

impl SvgBarTheme {
    pub const EARTH_TONES: SvgBarTheme = SvgBarTheme {
        stroke_width_multiplier: 2.0,
        bar_fill: Color(0xCC, 0x82, 0x4A),
        cut_fill: Color(0xFF, 0xC8, 0x79),
        kerf_fill: Color(0x2D, 0x2D, 0x2D),
        unusable_fill: Color(0x8C, 0x8C, 0x8C),
    };

    pub const GRAY: SvgBarTheme = SvgBarTheme {
        stroke_width_multiplier: 2.5,
        bar_fill: Color(0xD3, 0xD3, 0xD3),
        cut_fill: Color(0x7A, 0x7A, 0x7A),
        kerf_fill: Color(0x00, 0x00, 0x00),
        unusable_fill: Color(0x4B, 0x4B, 0x4B),
    };
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid color: {s:?}, expected #RRGGBB"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("invalid color: {s:?}"))
        };
        Ok(Color(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(D::Error::custom)
    }
}
