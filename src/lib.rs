#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
mod config;
mod geom;
mod num;
pub mod polygon;
mod segments;
pub mod sweep;
mod trace;

#[cfg(any(test, feature = "generators"))]
pub mod generators;

use kurbo::{BezPath, PathEl};

pub use config::{SweepConfig, DEFAULT_EPS};
pub use geom::{on_segment, orient, segment_intersection, Point, Segment};
pub use num::CheapOrderedFloat;
pub use segments::{SegIdx, Segments};
pub use sweep::Sweeper;
pub use trace::{LogTrace, NoTrace, Trace};

#[derive(Clone, Copy, Debug, PartialEq)]
/// The inputs were faulty.
pub enum Error {
    /// At least one of the inputs was infinite.
    Infinity,
    /// At least one of the inputs was not a number.
    NaN,
    /// The tolerance was not a positive, finite number.
    BadTolerance(f64),
    /// A path had a curve in it. Only straight lines are supported.
    Curve,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Infinity => write!(f, "one of the inputs was infinite"),
            Error::NaN => write!(f, "one of the inputs had a NaN"),
            Error::BadTolerance(eps) => write!(f, "bad tolerance {eps}"),
            Error::Curve => write!(f, "one of the inputs had a curve"),
        }
    }
}

impl std::error::Error for Error {}

fn check_finite(points: impl IntoIterator<Item = Point>) -> Result<(), Error> {
    for p in points {
        if !p.is_finite() {
            return Err(if p.x.is_nan() || p.y.is_nan() {
                Error::NaN
            } else {
                Error::Infinity
            });
        }
    }
    Ok(())
}

/// Finds all the points where two of the given segments meet.
///
/// This includes crossings, shared endpoints, and the place where one segment
/// touches another. If two segments overlap, only one point of the overlap
/// is reported (see [`segment_intersection`]). The returned points are
/// distinct up to the tolerance, and come in the order they were found.
pub fn intersections<P: Into<Point>>(
    segments: impl IntoIterator<Item = (P, P)>,
    config: SweepConfig,
) -> Result<Vec<Point>, Error> {
    config.validate()?;
    let segs: Segments = segments.into_iter().collect();
    check_finite(segs.segments().flat_map(|s| [s.a, s.b]))?;

    let mut sweeper = Sweeper::new(&segs, config);
    sweeper.run();
    Ok(sweeper.into_accepted())
}

/// Finds all the points where a closed polygon meets itself.
///
/// See [`polygon::self_intersections`]; this version checks its inputs first.
pub fn polygon_self_intersections<P: Into<Point>>(
    vertices: impl IntoIterator<Item = P>,
    config: SweepConfig,
) -> Result<Vec<Point>, Error> {
    config.validate()?;
    let vertices: Vec<Point> = vertices.into_iter().map(Into::into).collect();
    check_finite(vertices.iter().copied())?;
    Ok(polygon::self_intersections(vertices, config))
}

/// Finds the self-intersections of each closed subpath of a path.
///
/// Every subpath is treated as a closed polygon (whether or not it ends with
/// a `ClosePath`), and is checked separately: the points where two
/// different subpaths cross are not reported. The path must consist only of
/// straight lines.
pub fn bez_path_self_intersections(
    path: &BezPath,
    config: SweepConfig,
) -> Result<Vec<Point>, Error> {
    config.validate()?;
    let mut ret = Vec::new();
    for poly in polylines(path)? {
        check_finite(poly.iter().copied())?;
        ret.extend(polygon::self_intersections(poly, config));
    }
    Ok(ret)
}

// Splits a path into its subpaths, as lists of vertices. If a subpath
// explicitly returns to its starting point, the repeated point is dropped.
fn polylines(path: &BezPath) -> Result<Vec<Vec<Point>>, Error> {
    fn finish(mut poly: Vec<Point>, out: &mut Vec<Vec<Point>>) {
        if poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }
        if !poly.is_empty() {
            out.push(poly);
        }
    }

    let mut ret = Vec::new();
    let mut cur = Vec::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                finish(std::mem::take(&mut cur), &mut ret);
                cur.push(p.into());
            }
            PathEl::LineTo(p) => cur.push(p.into()),
            PathEl::ClosePath => finish(std::mem::take(&mut cur), &mut ret),
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => return Err(Error::Curve),
        }
    }
    finish(cur, &mut ret);
    Ok(ret)
}

/// Finds the intersections by testing every pair of segments.
///
/// This is quadratic in the number of segments, but it's simple enough to be
/// obviously correct, which makes it useful for checking the sweep. Points
/// are deduplicated the same way the sweep does it.
pub fn brute_force_intersections<A>(segments: &Segments<A>, config: SweepConfig) -> Vec<Point> {
    let eps = config.eps;
    let mut ret: Vec<Point> = Vec::new();
    for (i, s) in segments.segments().enumerate() {
        for t in segments.segments().skip(i + 1) {
            if let Some(p) = s.intersection(t, eps) {
                if !ret.iter().any(|q| q.approx_eq(&p, eps)) {
                    ret.push(p);
                }
            }
        }
    }
    ret
}
