use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgPlanTheme,
    ///Write label and length inside every piece
    #[serde(default = "default_true")]
    pub piece_labels: bool,
    ///Draw the clamp clearance and kerf loss after every piece as a separate segment
    #[serde(default = "default_true")]
    pub draw_overhead: bool,
    ///Height of a single bar in the drawing, as a fraction of the longest bar
    #[serde(default = "default_bar_height")]
    pub bar_height: f32,
}

fn default_true() -> bool {
    true
}

fn default_bar_height() -> f32 {
    0.05
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgPlanTheme::default(),
            piece_labels: true,
            draw_overhead: true,
            bar_height: default_bar_height(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgPlanTheme {
    pub stroke_width_multiplier: f32,
    pub bar_fill: Color,
    pub piece_fill: Color,
    pub overhead_fill: Color,
    pub offcut_fill: Color,
}

impl Default for SvgPlanTheme {
    fn default() -> Self {
        SvgPlanTheme::EARTH_TONES
    }
}

impl SvgPlanTheme {
    pub const EARTH_TONES: SvgPlanTheme = SvgPlanTheme {
        stroke_width_multiplier: 2.0,
        bar_fill: Color(0xCC, 0x82, 0x4A),
        piece_fill: Color(0xFF, 0xC8, 0x79),
        overhead_fill: Color(0x2D, 0x2D, 0x2D),
        offcut_fill: Color(0xFF, 0x5E, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid color: {s:?}"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("invalid color: {s:?}"))
        };
        Ok(Color(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
