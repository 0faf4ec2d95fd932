#[cfg(test)]
#[path = "../../tests/unit/common/routing_test.rs"]
mod routing_test;

use super::{Edge, IndexBase, Point, ReadResult, Tour};
use std::collections::HashSet;

/// Returns euclidean distance between two points. When `is_rounded` is set, the distance is
/// rounded to the nearest integer as TSPLIB `EUC_2D` does.
pub fn euclidean_distance(a: &Point, b: &Point, is_rounded: bool) -> f64 {
    let x = a.x - b.x;
    let y = a.y - b.y;
    let value = (x * x + y * y).sqrt();

    if is_rounded { value.round() } else { value }
}

/// Returns total length of the closed tour.
pub fn tour_length(tour: &Tour, points: &[Point], is_rounded: bool) -> ReadResult<f64> {
    tour.edges().try_fold::<_, _, ReadResult<f64>>(0., |total, (from, to)| {
        let from = IndexBase::One.resolve(from, points)?;
        let to = IndexBase::One.resolve(to, points)?;

        Ok(total + euclidean_distance(&from, &to, is_rounded))
    })
}

/// Returns total length of all edges.
pub fn edges_length(edges: &[Edge], points: &[Point], base: IndexBase, is_rounded: bool) -> ReadResult<f64> {
    edges.iter().try_fold::<_, _, ReadResult<f64>>(0., |total, edge| {
        let (a, b) = edge.resolve(points, base)?;

        Ok(total + euclidean_distance(&a, &b, is_rounded))
    })
}

/// Returns undirected edges which belong to only one of two tours as `(only_first, only_second)`.
/// Edges keep indices of the tours (one-based) and are ordered as they are visited.
pub fn tour_edge_diff(first: &Tour, second: &Tour) -> (Vec<Edge>, Vec<Edge>) {
    let normalize = |(a, b): (usize, usize)| if a < b { (a, b) } else { (b, a) };

    let first_edges = first.edges().map(normalize).collect::<HashSet<_>>();
    let second_edges = second.edges().map(normalize).collect::<HashSet<_>>();

    let only_in = |tour: &Tour, other: &HashSet<(usize, usize)>| {
        tour.edges()
            .map(normalize)
            .filter(|edge| !other.contains(edge))
            .map(|(a, b)| Edge::new(a, b))
            .collect::<Vec<_>>()
    };

    (only_in(first, &second_edges), only_in(second, &first_edges))
}

/// Returns a closed polyline formed by the first end point of every edge in their order.
pub fn cycle_path(edges: &[Edge], points: &[Point], base: IndexBase) -> ReadResult<Vec<Point>> {
    let mut path = edges.iter().map(|edge| base.resolve(edge.a(), points)).collect::<ReadResult<Vec<_>>>()?;

    if let Some(&first) = path.first() {
        path.push(first);
    }

    Ok(path)
}
