//! A minimal plotting surface: matplotlib like format strings and a canvas which is written as svg.

#[cfg(test)]
#[path = "../../tests/unit/extensions/render_test.rs"]
mod render_test;

use super::config::RenderConfig;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::Color as _;
use std::io::Write;
use std::ops::Range;
use tsp_format::common::Point;

/// A result type used by drawing functions.
pub type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

type Chart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// A color which can be specified by a single letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// `b`
    Blue,
    /// `g`
    Green,
    /// `r`
    Red,
    /// `c`
    Cyan,
    /// `m`
    Magenta,
    /// `y`
    Yellow,
    /// `k`
    Black,
    /// `w`
    White,
}

impl Color {
    fn from_code(code: char) -> Option<Self> {
        match code {
            'b' => Some(Self::Blue),
            'g' => Some(Self::Green),
            'r' => Some(Self::Red),
            'c' => Some(Self::Cyan),
            'm' => Some(Self::Magenta),
            'y' => Some(Self::Yellow),
            'k' => Some(Self::Black),
            'w' => Some(Self::White),
            _ => None,
        }
    }

    /// Returns a color by its name, e.g. `red` or `black`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "blue" => Some(Self::Blue),
            "green" => Some(Self::Green),
            "red" => Some(Self::Red),
            "cyan" => Some(Self::Cyan),
            "magenta" => Some(Self::Magenta),
            "yellow" => Some(Self::Yellow),
            "black" => Some(Self::Black),
            "white" => Some(Self::White),
            _ => None,
        }
    }

    /// Returns rgb representation.
    pub fn as_rgb(&self) -> RGBColor {
        match self {
            Self::Blue => BLUE,
            Self::Green => GREEN,
            Self::Red => RED,
            Self::Cyan => CYAN,
            Self::Magenta => MAGENTA,
            Self::Yellow => YELLOW,
            Self::Black => BLACK,
            Self::White => WHITE,
        }
    }
}

/// A line style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    /// `-`
    Solid,
    /// `--`
    Dashed,
    /// `:`
    Dotted,
    /// `-.`
    DashDot,
}

impl LineStyle {
    /// Returns dash size and spacing, solid lines have none. Dash-dot is drawn with long dashes.
    fn dash_pattern(&self, line_width: u32) -> Option<(u32, u32)> {
        let unit = line_width.max(1);
        match self {
            Self::Solid => None,
            Self::Dashed => Some((4 * unit, 2 * unit)),
            Self::Dotted => Some((unit, 2 * unit)),
            Self::DashDot => Some((8 * unit, 3 * unit)),
        }
    }
}

/// A point marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    /// `x`
    Cross,
    /// `+`
    Plus,
    /// `o`
    Circle,
    /// `.`
    Dot,
}

impl Marker {
    fn from_code(code: char) -> Option<Self> {
        match code {
            'x' => Some(Self::Cross),
            '+' => Some(Self::Plus),
            'o' => Some(Self::Circle),
            '.' => Some(Self::Dot),
            _ => None,
        }
    }
}

/// A drawing style: color, optional line style and optional marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    /// Color of lines and markers.
    pub color: Color,
    /// Line style, no line is drawn when it is not set.
    pub line: Option<LineStyle>,
    /// Marker drawn at every point.
    pub marker: Option<Marker>,
}

impl Default for Style {
    fn default() -> Self {
        Self { color: Color::Blue, line: Some(LineStyle::Solid), marker: None }
    }
}

impl Style {
    /// Parses format string such as `"r-x"`, `":k"` or `"og"`. Color, line style and marker can be
    /// specified in any order. When only a marker is given, no line is drawn.
    pub fn parse(format: &str) -> Result<Self, String> {
        let mut color = None;
        let mut line = None;
        let mut marker = None;

        let set_once = |name: &str, is_set: bool| {
            if is_set { Err(format!("{name} is specified twice in style '{format}'")) } else { Ok(()) }
        };

        let chars = format.chars().collect::<Vec<_>>();
        let mut idx = 0;
        while idx < chars.len() {
            let (code, next) = (chars[idx], chars.get(idx + 1).copied());

            if let Some(value) = Color::from_code(code) {
                set_once("color", color.is_some())?;
                color = Some(value);
            } else if let Some(value) = Marker::from_code(code) {
                set_once("marker", marker.is_some())?;
                marker = Some(value);
            } else {
                let (value, size) = match (code, next) {
                    ('-', Some('-')) => (LineStyle::Dashed, 2),
                    ('-', Some('.')) => (LineStyle::DashDot, 2),
                    ('-', _) => (LineStyle::Solid, 1),
                    (':', _) => (LineStyle::Dotted, 1),
                    _ => return Err(format!("unknown style symbol '{code}' in '{format}'")),
                };

                set_once("line style", line.is_some())?;
                line = Some(value);
                idx += size;
                continue;
            }

            idx += 1;
        }

        let line = match (line, marker) {
            (None, None) => Some(LineStyle::Solid),
            (line, _) => line,
        };

        Ok(Self { color: color.unwrap_or(Color::Blue), line, marker })
    }
}

/// Collects polylines in data coordinates and renders them as a single svg document. The data bounding
/// box is fitted into the image with equal aspect ratio, y axis points up.
pub struct Canvas {
    config: RenderConfig,
    items: Vec<(Vec<Point>, Style)>,
}

impl Canvas {
    /// Creates a new instance of `Canvas`.
    pub fn new(config: RenderConfig) -> Self {
        Self { config, items: vec![] }
    }

    /// Adds a polyline, or a set of markers, depending on style.
    pub fn plot(&mut self, path: Vec<Point>, style: Style) {
        if !path.is_empty() {
            self.items.push((path, style));
        }
    }

    /// Adds a single segment.
    pub fn plot_segment(&mut self, from: Point, to: Point, style: Style) {
        self.plot(vec![from, to], style)
    }

    /// Returns amount of plotted items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is plotted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Writes svg document.
    pub fn write_svg<W: Write>(&self, writer: &mut W) -> Result<(), String> {
        let svg = self.render().map_err(|err| format!("cannot render svg: '{err}'"))?;

        writer
            .write_all(svg.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|err| format!("cannot write svg: '{err}'"))
    }

    fn render(&self) -> DrawResult<String> {
        let RenderConfig { width, height, margin, line_width, marker_size, .. } = self.config;
        let mut svg = String::new();

        {
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            if let Some(background) = self.config.background_color()? {
                root.fill(&background)?;
            }

            let (x_range, y_range) =
                get_equal_aspect_ranges(&self.config, self.items.iter().flat_map(|(path, _)| path.iter()));
            let mut chart = ChartBuilder::on(&root).margin(margin).build_cartesian_2d(x_range, y_range)?;

            for (path, style) in self.items.iter() {
                draw_item(&mut chart, path, style, line_width, marker_size)?;
            }

            root.present()?;
        }

        Ok(svg)
    }
}

fn draw_item(chart: &mut Chart, path: &[Point], style: &Style, line_width: u32, marker_size: u32) -> DrawResult<()> {
    let color = style.color.as_rgb();
    let stroke = color.stroke_width(line_width);
    let coords = path.iter().map(|point| (point.x, point.y));

    match style.line.map(|line| line.dash_pattern(line_width)) {
        Some(Some((size, spacing))) => {
            chart.draw_series(DashedLineSeries::new(coords.clone(), size, spacing, stroke))?;
        }
        Some(None) => {
            chart.draw_series(LineSeries::new(coords.clone(), stroke))?;
        }
        None => {}
    }

    let half = marker_size as i32;
    match style.marker {
        Some(Marker::Cross) => {
            chart.draw_series(coords.map(|coord| Cross::new(coord, marker_size, stroke)))?;
        }
        Some(Marker::Plus) => {
            chart.draw_series(coords.map(|coord| {
                EmptyElement::at(coord)
                    + PathElement::new(vec![(-half, 0), (half, 0)], stroke)
                    + PathElement::new(vec![(0, -half), (0, half)], stroke)
            }))?;
        }
        Some(Marker::Circle) => {
            chart.draw_series(coords.map(|coord| Circle::new(coord, marker_size, color.filled())))?;
        }
        Some(Marker::Dot) => {
            chart.draw_series(coords.map(|coord| Circle::new(coord, (marker_size / 2).max(1), color.filled())))?;
        }
        None => {}
    }

    Ok(())
}

/// Returns axis ranges which contain all points and have the same scale as the drawing area.
fn get_equal_aspect_ranges<'a>(
    config: &RenderConfig,
    points: impl Iterator<Item = &'a Point>,
) -> (Range<f64>, Range<f64>) {
    let bounds = points.fold(None, |bounds: Option<(Point, Point)>, point| {
        Some(match bounds {
            Some((min, max)) => {
                (Point::new(min.x.min(point.x), min.y.min(point.y)), Point::new(max.x.max(point.x), max.y.max(point.y)))
            }
            None => (*point, *point),
        })
    });

    let Some((min, max)) = bounds else {
        return (0.0..1.0, 0.0..1.0);
    };

    let area = (
        config.width.saturating_sub(2 * config.margin).max(1) as f64,
        config.height.saturating_sub(2 * config.margin).max(1) as f64,
    );
    let span = (max.x - min.x, max.y - min.y);

    let scale = match (span.0 > 0., span.1 > 0.) {
        (true, true) => (area.0 / span.0).min(area.1 / span.1),
        (true, false) => area.0 / span.0,
        (false, true) => area.1 / span.1,
        (false, false) => 1.,
    };

    let half = (area.0 / scale / 2., area.1 / scale / 2.);
    let center = ((min.x + max.x) / 2., (min.y + max.y) / 2.);

    (center.0 - half.0..center.0 + half.0, center.1 - half.1..center.1 + half.1)
}
