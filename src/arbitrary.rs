//! Utilities for fuzz and/or property testing using `arbitrary`.
//!
//! The generators here are biased towards the inputs that are hard for a
//! sweep line: repeated coordinates, shared endpoints and vertical segments.

use arbitrary::Unstructured;

use crate::{geom::Point, segments::Segments};

/// Coordinates are generated in `-SIZE..=SIZE`.
const SIZE: f64 = 100.0;

/// Generate an arbitrary float in some range.
pub fn float_in_range(
    start: f64,
    end: f64,
    u: &mut Unstructured<'_>,
) -> Result<f64, arbitrary::Error> {
    let num: u32 = u.arbitrary()?;
    let t = num as f64 / u32::MAX as f64;
    Ok((1.0 - t) * start + t * end)
}

fn float(u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    float_in_range(-SIZE, SIZE, u)
}

/// Generate a float, but give it a chance to be equal or very close to `orig`.
pub fn another_float(orig: f64, u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    let choice: u8 = u.int_in_range(0..=3)?;
    match choice {
        0 => Ok(orig),
        1 => {
            let ulps: i32 = u.int_in_range(-32..=32)?;
            let scale = 1.0f64 + ulps as f64 * f64::EPSILON;
            Ok((orig * scale).clamp(-SIZE, SIZE))
        }
        _ => float(u),
    }
}

/// Generate an arbitrary point.
pub fn point(u: &mut Unstructured<'_>) -> Result<Point, arbitrary::Error> {
    Ok(Point::new(float(u)?, float(u)?))
}

/// Generate a point that has a chance of sharing one or both coordinates with `orig`.
pub fn another_point(orig: &Point, u: &mut Unstructured<'_>) -> Result<Point, arbitrary::Error> {
    Ok(Point::new(another_float(orig.x, u)?, another_float(orig.y, u)?))
}

/// Generate a collection of segments.
///
/// Each new segment has a chance to start at an endpoint of the previous
/// one, and each segment has a chance to be vertical or horizontal.
pub fn segments(u: &mut Unstructured<'_>) -> Result<Segments, arbitrary::Error> {
    let count = u.int_in_range(0..=24)?;
    let mut ret = Segments::default();
    let mut prev: Option<Point> = None;
    for _ in 0..count {
        let a = match prev {
            Some(p) if u.arbitrary()? => p,
            _ => point(u)?,
        };
        let b = another_point(&a, u)?;
        ret.add_segment(a, b);
        prev = Some(b);
    }
    Ok(ret)
}

/// Generate the vertices of a closed polygon, which may well cross itself.
pub fn polygon(u: &mut Unstructured<'_>) -> Result<Vec<Point>, arbitrary::Error> {
    let count = u.int_in_range(0..=24)?;
    let mut ret: Vec<Point> = Vec::with_capacity(count);
    for _ in 0..count {
        let p = match ret.last() {
            Some(last) => another_point(last, u)?,
            None => point(u)?,
        };
        ret.push(p);
    }
    Ok(ret)
}

/// Property checks driven by arbitrary data, shared by the tests and the fuzzer.
pub mod arbtests {
    use arbitrary::Unstructured;

    use crate::{polygon, Point, Segments, SweepConfig, Sweeper};

    // Every point found must be where two (different) segments meet. This
    // is looser than the tolerance, because a crossing point is computed
    // by solving a linear system.
    fn assert_on_two<A>(segs: &Segments<A>, p: &Point) {
        let near = segs
            .segments()
            .filter(|s| s.distance_to(p) < 1e-3)
            .count();
        assert!(near >= 2, "{p:?} is only near {near} segments");
    }

    /// Sweeps arbitrary segments, and checks that every point found is on
    /// two segments and that the sweep line ends up empty.
    pub fn sweep_is_sound(u: &mut Unstructured<'_>) -> Result<(), arbitrary::Error> {
        let segs = super::segments(u)?;
        let mut sweeper = Sweeper::new(&segs, SweepConfig::default());
        sweeper.run();

        assert!(sweeper.status().is_empty());
        assert_eq!(sweeper.intersections(), sweeper.accepted());
        for p in sweeper.intersections() {
            assert_on_two(&segs, p);
        }
        Ok(())
    }

    /// Finds the self-intersections of an arbitrary polygon, and checks that
    /// they're on two edges and that a second run finds the same thing.
    pub fn polygon_is_sound(u: &mut Unstructured<'_>) -> Result<(), arbitrary::Error> {
        let vertices = super::polygon(u)?;
        let found = polygon::self_intersections(vertices.iter().copied(), SweepConfig::default());
        if vertices.len() < 3 {
            assert!(found.is_empty());
            return Ok(());
        }

        let segs: Segments = Segments::from_closed_cycle(vertices.iter().copied());
        for p in &found {
            assert_on_two(&segs, p);
        }
        let again = polygon::self_intersections(vertices, SweepConfig::default());
        assert_eq!(found, again);
        Ok(())
    }

}
