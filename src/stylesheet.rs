//! Stylesheet system for chart colors and stroke widths
//!
//! Every chart element is drawn in a *role* (rectangle, contour, measure,
//! points, segment). A stylesheet maps each role to a stroke color, an
//! optional `<role>-fill` color and a line width. Anything a stylesheet does
//! not define falls back to the built-in palette, which mirrors matplotlib's
//! defaults.

use std::collections::HashMap;
use std::path::Path;

use plotters::style::RGBColor;
use serde::Deserialize;
use thiserror::Error;

use crate::renderer::StrokeStyle;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid color '{value}' for '{token}'")]
    InvalidColor { token: String, value: String },
}

/// Drawing role of a chart element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Input rectangles drawn as outlines
    Rectangle,
    /// Contour edges
    Contour,
    /// Rectangles filled to show the covered area
    Measure,
    /// Scatter markers for input points
    Points,
    /// The n-th fitted segment (0-based)
    Segment(usize),
}

impl Role {
    /// Stylesheet token holding the stroke color
    pub fn token(&self) -> String {
        match self {
            Role::Rectangle => "rectangle".to_string(),
            Role::Contour => "contour".to_string(),
            Role::Measure => "measure".to_string(),
            Role::Points => "points".to_string(),
            Role::Segment(_) => "segment".to_string(),
        }
    }
}

/// A stylesheet mapping role tokens to colors and widths
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> color
    pub colors: HashMap<String, String>,
    /// Width mappings: role token -> stroke width (marker radius for points)
    pub widths: HashMap<String, u32>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
    #[serde(default)]
    widths: HashMap<String, u32>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - matplotlib's single-letter colors and tab10 cycle
const DEFAULT_PALETTE: &str = r##"
[colors]
background = "#ffffff"
axis = "#000000"

rectangle = "#ff0000"
contour = "#0000ff"
measure = "#000000"
measure-fill = "#000000"
points = "#1f77b4"

# Fitted segments cycle through these, starting at segment-1
segment-1 = "#ff7f0e"
segment-2 = "#2ca02c"
segment-3 = "#d62728"
segment-4 = "#9467bd"
segment-5 = "#8c564b"
segment-6 = "#e377c2"
segment-7 = "#7f7f7f"
segment-8 = "#bcbd22"
segment-9 = "#17becf"
segment-10 = "#1f77b4"

[widths]
rectangle = 1
contour = 2
measure = 1
points = 3
segment = 3
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
            widths: parsed.widths,
        })
    }

    /// Resolve a color token to its value in this stylesheet
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a color token with fallback to the default palette
    ///
    /// Fallback order:
    /// 1. Check this stylesheet for exact token
    /// 2. Check default palette for exact token
    /// 3. Use black
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        "#000000".to_string()
    }

    /// Resolve and parse a color token
    pub fn color(&self, token: &str) -> Result<RGBColor, StylesheetError> {
        let value = self.resolve_or_default(token);
        parse_color(&value).ok_or(StylesheetError::InvalidColor {
            token: token.to_string(),
            value,
        })
    }

    /// Optional color: `None` when neither this stylesheet nor the default defines it,
    /// or when it is set to `none`
    fn optional_color(&self, token: &str) -> Result<Option<RGBColor>, StylesheetError> {
        let value = match self.resolve(token) {
            Some(v) => v.to_string(),
            None => match Self::default().resolve(token) {
                Some(v) => v.to_string(),
                None => return Ok(None),
            },
        };
        if value.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        parse_color(&value)
            .map(Some)
            .ok_or(StylesheetError::InvalidColor {
                token: token.to_string(),
                value,
            })
    }

    /// Stroke width for a role token, falling back to the default palette, then 1
    pub fn width(&self, token: &str) -> u32 {
        self.widths
            .get(token)
            .copied()
            .or_else(|| Self::default().widths.get(token).copied())
            .unwrap_or(1)
    }

    /// Colors the fitted segments cycle through
    ///
    /// A stylesheet that defines `segment-1` replaces the whole cycle.
    pub fn segment_palette(&self) -> Vec<String> {
        let source = if self.colors.contains_key("segment-1") {
            self.clone()
        } else {
            Self::default()
        };
        (1..)
            .map_while(|n| source.resolve(&format!("segment-{}", n)).map(str::to_string))
            .collect()
    }

    /// Full stroke style for a drawing role
    pub fn style(&self, role: Role) -> Result<StrokeStyle, StylesheetError> {
        let token = role.token();
        let width = self.width(&token);
        if let Role::Segment(index) = role {
            let palette = self.segment_palette();
            let stroke = match palette.get(index % palette.len().max(1)) {
                Some(value) => parse_color(value).ok_or(StylesheetError::InvalidColor {
                    token: format!("segment-{}", index % palette.len() + 1),
                    value: value.clone(),
                })?,
                None => self.color("axis")?,
            };
            return Ok(StrokeStyle::new(stroke, width));
        }
        let stroke = self.color(&token)?;
        let fill = self.optional_color(&format!("{}-fill", token))?;
        Ok(StrokeStyle {
            stroke,
            fill,
            width,
        })
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

/// Parse `#rgb`, `#rrggbb` or a small set of CSS color names
pub fn parse_color(value: &str) -> Option<RGBColor> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        return match hex.len() {
            3 => {
                let mut chars = hex.chars().map(|c| c.to_string().repeat(2));
                let r = channel(&chars.next()?)?;
                let g = channel(&chars.next()?)?;
                let b = channel(&chars.next()?)?;
                Some(RGBColor(r, g, b))
            }
            6 => Some(RGBColor(
                channel(hex.get(0..2)?)?,
                channel(hex.get(2..4)?)?,
                channel(hex.get(4..6)?)?,
            )),
            _ => None,
        };
    }
    let rgb = match value.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "orange" => (255, 165, 0),
        "gray" | "grey" => (128, 128, 128),
        "steelblue" => (70, 130, 180),
        _ => return None,
    };
    Some(RGBColor(rgb.0, rgb.1, rgb.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Stylesheet {
        Stylesheet {
            name: None,
            description: None,
            colors: HashMap::new(),
            widths: HashMap::new(),
        }
    }

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        assert!(stylesheet.colors.contains_key("rectangle"));
        assert!(stylesheet.colors.contains_key("contour"));
        assert!(stylesheet.colors.contains_key("measure-fill"));
        assert_eq!(stylesheet.widths.get("segment"), Some(&3));
    }

    #[test]
    fn test_resolve_missing_token() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("nonexistent"), None);
        assert_eq!(stylesheet.resolve_or_default("nonexistent"), "#000000");
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        assert_eq!(empty().resolve_or_default("contour"), "#0000ff");
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ff0000"), Some(RGBColor(255, 0, 0)));
        assert_eq!(parse_color("#0f0"), Some(RGBColor(0, 255, 0)));
        assert_eq!(parse_color("Black"), Some(RGBColor(0, 0, 0)));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_default_styles_match_original_charts() {
        let sheet = Stylesheet::default();
        let rect = sheet.style(Role::Rectangle).unwrap();
        assert_eq!(rect.stroke, RGBColor(255, 0, 0));
        assert_eq!(rect.fill, None);
        assert_eq!(rect.width, 1);

        let contour = sheet.style(Role::Contour).unwrap();
        assert_eq!(contour.stroke, RGBColor(0, 0, 255));
        assert_eq!(contour.width, 2);

        let measure = sheet.style(Role::Measure).unwrap();
        assert_eq!(measure.fill, Some(RGBColor(0, 0, 0)));
    }

    #[test]
    fn test_segment_colors_cycle() {
        let sheet = Stylesheet::default();
        let first = sheet.style(Role::Segment(0)).unwrap();
        let wrapped = sheet.style(Role::Segment(10)).unwrap();
        assert_eq!(first.stroke, wrapped.stroke);
        assert_eq!(first.width, 3);
    }

    #[test]
    fn test_custom_segment_palette_replaces_default() {
        let sheet = Stylesheet::from_str(
            r##"
[colors]
segment-1 = "#111111"
segment-2 = "#222222"
"##,
        )
        .unwrap();
        assert_eq!(sheet.segment_palette().len(), 2);
        assert_eq!(
            sheet.style(Role::Segment(2)).unwrap().stroke,
            RGBColor(0x11, 0x11, 0x11)
        );
    }

    #[test]
    fn test_fill_can_be_disabled() {
        let sheet = Stylesheet::from_str(
            r##"
[colors]
measure-fill = "none"
"##,
        )
        .unwrap();
        assert_eq!(sheet.style(Role::Measure).unwrap().fill, None);
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Print"
description = "Grayscale print theme"

[colors]
rectangle = "#333333"

[widths]
contour = 4
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Print".to_string()));
        assert_eq!(
            stylesheet.description,
            Some("Grayscale print theme".to_string())
        );
        assert_eq!(stylesheet.width("contour"), 4);
        assert_eq!(stylesheet.width("rectangle"), 1);
    }

    #[test]
    fn test_invalid_color_error() {
        let sheet = Stylesheet::from_str(
            r##"
[colors]
contour = "bluish"
"##,
        )
        .unwrap();
        assert!(matches!(
            sheet.style(Role::Contour),
            Err(StylesheetError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Stylesheet::from_str(invalid);
        assert!(result.is_err());
    }
}
