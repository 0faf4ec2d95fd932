//! Render configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use super::render::Color;
use plotters::style::RGBColor;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A render configuration. All fields are optional in the json representation.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Empty space around the drawing.
    pub margin: u32,
    /// Stroke width of lines and markers.
    pub line_width: u32,
    /// Half size of a marker.
    pub marker_size: u32,
    /// Background fill: a color name, `#rrggbb` or `none`.
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { width: 800, height: 800, margin: 20, line_width: 1, marker_size: 3, background: "white".to_string() }
    }
}

impl RenderConfig {
    /// Checks that the drawing area is not empty and background is a known color.
    pub fn validate(&self) -> Result<(), String> {
        if self.width <= 2 * self.margin || self.height <= 2 * self.margin {
            return Err(format!(
                "image size {}x{} leaves no space for drawing with margin {}",
                self.width, self.height, self.margin
            ));
        }

        self.background_color().map(|_| ())
    }

    /// Returns background color, `None` means a transparent background.
    pub fn background_color(&self) -> Result<Option<RGBColor>, String> {
        let value = self.background.trim();

        if value == "none" {
            return Ok(None);
        }

        Color::from_name(value)
            .map(|color| color.as_rgb())
            .or_else(|| parse_hex_color(value))
            .map(Some)
            .ok_or_else(|| format!("unknown background color '{}'", self.background))
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<RenderConfig, String> {
    let config: RenderConfig =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))?;

    config.validate().map(|_| config)
}

fn parse_hex_color(value: &str) -> Option<RGBColor> {
    let hex = value.strip_prefix('#').filter(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))?;
    let channel = |idx: usize| u8::from_str_radix(&hex[idx..idx + 2], 16).ok();

    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}
