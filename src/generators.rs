//! Utilities for generating examples, benchmarks, and test cases.

use std::f64::consts::TAU;

type Seg = ((f64, f64), (f64, f64));

/// Generate an `n` by `n` grid of almost-horizontal and almost-vertical segments.
///
/// Every "horizontal" segment crosses every "vertical" one, so there are
/// exactly `n * n` crossings. Nothing is exactly axis-aligned, and no two
/// endpoints or crossings share an `x` coordinate except the left and
/// right ends of the horizontal segments.
pub fn grid(n: usize) -> Vec<Seg> {
    let size = 10.0 * n as f64;
    let mut ret = Vec::with_capacity(2 * n);
    for i in 0..n {
        let y = 10.0 * i as f64;
        ret.push(((0.0, y + 1.0), (size, y + 3.0)));
    }
    for j in 0..n {
        let x = 10.0 * j as f64;
        ret.push(((x + 1.0, -5.0), (x + 3.0, size + 5.0)));
    }
    ret
}

/// The vertices of the star polygon `{n/k}`, on a circle of radius 10.
///
/// Vertex `i` is at angle `i * k / n` turns (plus a small rotation, so that
/// no edge is vertical). For `n` and `k` coprime with `1 < k < n / 2`, this
/// is a single closed polygon with `n * (k - 1)` self-intersections.
pub fn star_polygon(n: usize, k: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let theta = TAU * ((i * k) % n) as f64 / n as f64 + 0.1;
            (10.0 * theta.cos(), 10.0 * theta.sin())
        })
        .collect()
}

/// A quadrilateral that crosses itself once, at `(5, 5)`.
pub fn figure_eight() -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]
}
