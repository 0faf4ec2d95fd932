//! Plot operations: read instance, tour and edge files and put them on a canvas.

#[cfg(test)]
#[path = "../../tests/unit/extensions/plot_test.rs"]
mod plot_test;

use super::render::{Canvas, Style};
use crate::InfoLogger;
use std::path::Path;
use std::time::{Duration, Instant};
use tsp_format::prelude::*;

/// Reads instance points.
pub fn load_points(path: &str, logger: &InfoLogger) -> Result<Vec<Point>, String> {
    let (points, duration) = measure_duration(|| read_point_file(path));
    let points = points.map_err(|err| format!("cannot read points from '{path}': '{err}'"))?;

    (logger)(format!("read {} points from '{path}' in {}ms", points.len(), duration.as_millis()).as_str());

    Ok(points)
}

/// Draws every point as a marker.
pub fn plot_points(canvas: &mut Canvas, points: &[Point], style: Style) {
    canvas.plot(points.to_vec(), Style { line: None, ..style })
}

/// Draws a single point referenced by zero-based index.
pub fn plot_point(canvas: &mut Canvas, points: &[Point], index: usize, style: Style) -> Result<(), String> {
    let point = IndexBase::Zero.resolve(index, points).map_err(|err| format!("cannot highlight point: '{err}'"))?;
    canvas.plot(vec![point], style);

    Ok(())
}

/// Reads a tour and draws it as a closed polyline. Returns the tour.
pub fn plot_tour_file(
    canvas: &mut Canvas,
    points: &[Point],
    path: &str,
    style: Style,
    logger: &InfoLogger,
) -> Result<Tour, String> {
    let tour = read_tour_file(path, points).map_err(|err| format!("cannot read tour from '{path}': '{err}'"))?;
    let map_err = |err: ReadError| format!("cannot use tour from '{path}': '{err}'");

    canvas.plot(tour.closed_path(points).map_err(map_err)?, style);

    let length = tour_length(&tour, points, true).map_err(map_err)?;
    (logger)(format!("tour '{}' has {} points, length: {length}", file_name(path), tour.len()).as_str());

    Ok(tour)
}

/// Reads edges and draws each of them as a separate segment. Returns the edges.
pub fn plot_edge_file(
    canvas: &mut Canvas,
    points: &[Point],
    path: &str,
    base: IndexBase,
    style: Style,
    logger: &InfoLogger,
) -> Result<Vec<Edge>, String> {
    let edges = read_edge_file(path).map_err(|err| format!("cannot read edges from '{path}': '{err}'"))?;
    let map_err = |err: ReadError| format!("cannot use edges from '{path}': '{err}'");

    edges.iter().try_for_each(|edge| {
        let (a, b) = edge.resolve(points, base).map_err(map_err)?;
        canvas.plot_segment(a, b, style);

        Ok::<_, String>(())
    })?;

    let length = edges_length(&edges, points, base, true).map_err(map_err)?;
    (logger)(format!("total edge length of '{}': {length}", file_name(path)).as_str());

    Ok(edges)
}

/// Reads edges of a cycle and draws the closed polyline through the first end point of every edge.
/// Returns the edges.
pub fn plot_cycle_file(
    canvas: &mut Canvas,
    points: &[Point],
    path: &str,
    base: IndexBase,
    style: Style,
    logger: &InfoLogger,
) -> Result<Vec<Edge>, String> {
    let edges = read_edge_file(path).map_err(|err| format!("cannot read cycle from '{path}': '{err}'"))?;

    let cycle = cycle_path(&edges, points, base).map_err(|err| format!("cannot use cycle from '{path}': '{err}'"))?;
    canvas.plot(cycle, style);

    (logger)(format!("cycle '{}' has {} edges", file_name(path), edges.len()).as_str());

    Ok(edges)
}

/// Logs how many edges differ between two tours.
pub fn log_tour_diff(first: &Tour, second: &Tour, logger: &InfoLogger) {
    let (only_first, only_second) = tour_edge_diff(first, second);

    (logger)(format!("edge diff count: {} and {}", only_first.len(), only_second.len()).as_str());
}

fn file_name(path: &str) -> &str {
    Path::new(path).file_name().and_then(|name| name.to_str()).unwrap_or(path)
}

fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
    let start = Instant::now();
    let result = action();

    (result, start.elapsed())
}
