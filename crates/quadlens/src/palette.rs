//! Colors and palettes.
//!
//! Color strings are parsed with `svgtypes`, so anything valid in an SVG
//! `fill` works: `#rgb`, `#rrggbb`, `rgb(..)`, named colors.

use std::fmt;
use std::str::FromStr;

use crate::error::PaletteError;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Parse a CSS/SVG color string.
    pub fn parse(text: &str) -> Result<Self, PaletteError> {
        let c = svgtypes::Color::from_str(text.trim()).map_err(|_| PaletteError::BadColor(text.to_string()))?;
        Ok(Self { r: c.red, g: c.green, b: c.blue, a: c.alpha })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.to_hex())
        } else {
            write!(f, "rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.opacity())
        }
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

// Fixed scene colors
pub const BACKGROUND: Color = Color::gray(40);
pub const CIRCLE_ONE: Color = Color::rgb(220, 60, 60);
pub const CIRCLE_TWO: Color = Color::rgb(72, 65, 209);
pub const LENS: Color = Color::rgb(255, 255, 255);
/// Alpha of the translucent overlays drawn over circles and lens.
pub const OVERLAY_ALPHA: u8 = 50;

/// A named, non-empty list of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { name: name.into(), colors })
    }

    /// Build a palette from color strings.
    pub fn parse<S: AsRef<str>>(name: impl Into<String>, specs: &[S]) -> Result<Self, PaletteError> {
        let colors = specs
            .iter()
            .map(|s| Color::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(name, colors)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, wrapping around.
    pub fn get(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Snack-aisle colors: 32 saturated packaging tones.
    pub fn vending() -> Self {
        Self {
            name: "vending".to_string(),
            colors: VENDING.to_vec(),
        }
    }

    /// Four grays, light enough to read on the background.
    pub fn mono() -> Self {
        Self {
            name: "mono".to_string(),
            colors: vec![Color::gray(90), Color::gray(140), Color::gray(190), Color::gray(230)],
        }
    }

    pub fn pastel() -> Self {
        Self {
            name: "pastel".to_string(),
            colors: vec![
                Color::rgb(255, 179, 186),
                Color::rgb(255, 223, 186),
                Color::rgb(255, 255, 186),
                Color::rgb(186, 255, 201),
                Color::rgb(186, 225, 255),
                Color::rgb(230, 190, 255),
            ],
        }
    }

    /// Names of the built-in palettes.
    pub fn builtin_names() -> &'static [&'static str] {
        &["vending", "pastel", "mono"]
    }

    /// Look up a built-in palette by name.
    pub fn builtin(name: &str) -> Result<Self, PaletteError> {
        match name.to_ascii_lowercase().as_str() {
            "vending" => Ok(Self::vending()),
            "pastel" => Ok(Self::pastel()),
            "mono" => Ok(Self::mono()),
            _ => Err(PaletteError::UnknownPalette(name.to_string())),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::vending()
    }
}

const VENDING: [Color; 32] = [
    // yellows & golds
    Color::rgb(255, 215, 0),
    Color::rgb(255, 195, 50),
    Color::rgb(242, 169, 0),
    // oranges
    Color::rgb(255, 140, 0),
    Color::rgb(255, 99, 71),
    Color::rgb(255, 127, 80),
    // reds & pinks
    Color::rgb(220, 20, 60),
    Color::rgb(199, 21, 133),
    Color::rgb(178, 34, 34),
    Color::rgb(240, 80, 80),
    // blues & purples
    Color::rgb(0, 48, 135),
    Color::rgb(65, 105, 225),
    Color::rgb(138, 43, 226),
    Color::rgb(100, 149, 237),
    Color::rgb(147, 112, 219),
    // greens
    Color::rgb(34, 139, 34),
    Color::rgb(50, 205, 50),
    Color::rgb(173, 255, 47),
    Color::rgb(60, 179, 113),
    Color::rgb(144, 238, 144),
    // browns
    Color::rgb(139, 69, 19),
    Color::rgb(160, 82, 45),
    Color::rgb(205, 133, 63),
    Color::rgb(188, 143, 143),
    // metallics
    Color::rgb(192, 192, 192),
    Color::rgb(169, 169, 169),
    Color::rgb(211, 211, 211),
    // extras
    Color::rgb(255, 20, 147),
    Color::rgb(255, 165, 0),
    Color::rgb(70, 130, 180),
    Color::rgb(147, 197, 114),
    Color::rgb(230, 190, 255),
];
