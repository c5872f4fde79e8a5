//! Geometric primitives, like points and lines, and the predicates the sweep
//! is built on.
//!
//! Every predicate here takes an explicit tolerance `eps`: quantities whose
//! magnitude is at most `eps` are treated as zero.

use crate::num::CheapOrderedFloat;

/// A two-dimensional point.
///
/// Points are sorted by `x` and then by `y`, for the convenience of our sweep-line
/// algorithm (which moves in increasing `x`).
#[derive(Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// Horizontal coordinate: the direction the sweep line travels.
    pub x: f64,
    /// Vertical coordinate.
    ///
    /// Although it isn't important for functionality, the documentation assumes
    /// canvas conventions: larger values are down.
    pub y: f64,
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (
            CheapOrderedFloat::from(self.x),
            CheapOrderedFloat::from(self.y),
        )
            .cmp(&(
                CheapOrderedFloat::from(other.x),
                CheapOrderedFloat::from(other.y),
            ))
    }
}

impl PartialOrd for Point {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Point {}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        debug_assert!(x.is_finite());
        debug_assert!(y.is_finite());
        Point { x, y }
    }

    /// Are both coordinates within `eps` of `other`'s?
    ///
    /// The coordinates are compared independently, so this is a box test and
    /// not a distance test.
    pub fn approx_eq(&self, other: &Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    /// Are both coordinates finite?
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Twice the signed area of the triangle `a`, `b`, `c`.
///
/// This is the cross product of `b - a` and `c - a`: it's positive if `c` is
/// counter-clockwise from `b` around `a` (in y-up coordinates), negative if
/// clockwise, and close to zero if the three points are collinear.
pub fn orient(a: &Point, b: &Point, c: &Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Does `b` lie inside the bounding box of `a` and `c`, with `eps` of slack?
///
/// This is only meaningful once `a`, `b` and `c` are known to be collinear.
pub fn on_segment(a: &Point, b: &Point, c: &Point, eps: f64) -> bool {
    a.x.min(c.x) - eps <= b.x
        && b.x <= a.x.max(c.x) + eps
        && a.y.min(c.y) - eps <= b.y
        && b.y <= a.y.max(c.y) + eps
}

/// Finds a point where the segments `p1 -- q1` and `p2 -- q2` meet.
///
/// If the segments cross properly (each one has the other's endpoints
/// strictly on opposite sides), this solves for the crossing point. If they
/// only touch or overlap, it returns one of the four endpoints: the first
/// of `p2`, `q2`, `p1`, `q1` that lies on the other segment. This precedence
/// is fixed, so overlapping segments always report the same point.
///
/// Returns `None` if the segments don't meet, or if they're so close to
/// parallel that the crossing point can't be computed.
pub fn segment_intersection(
    p1: &Point,
    q1: &Point,
    p2: &Point,
    q2: &Point,
    eps: f64,
) -> Option<Point> {
    let o1 = orient(p1, q1, p2);
    let o2 = orient(p1, q1, q2);
    let o3 = orient(p2, q2, p1);
    let o4 = orient(p2, q2, q1);

    if o1 * o2 < -eps && o3 * o4 < -eps {
        // Write each line as a x + b y = c and solve the 2x2 system.
        let a1 = q1.y - p1.y;
        let b1 = p1.x - q1.x;
        let c1 = a1 * p1.x + b1 * p1.y;
        let a2 = q2.y - p2.y;
        let b2 = p2.x - q2.x;
        let c2 = a2 * p2.x + b2 * p2.y;

        let det = a1 * b2 - a2 * b1;
        if det.abs() <= eps {
            return None;
        }
        return Some(Point::new(
            (b2 * c1 - b1 * c2) / det,
            (a1 * c2 - a2 * c1) / det,
        ));
    }

    if o1.abs() <= eps && on_segment(p1, p2, q1, eps) {
        Some(*p2)
    } else if o2.abs() <= eps && on_segment(p1, q2, q1, eps) {
        Some(*q2)
    } else if o3.abs() <= eps && on_segment(p2, p1, q2, eps) {
        Some(*p1)
    } else if o4.abs() <= eps && on_segment(p2, q1, q2, eps) {
        Some(*q1)
    } else {
        None
    }
}

/// A line segment.
///
/// The endpoints are stored in the order they were given; use
/// [`Segment::left`] and [`Segment::right`] for sweep-line order.
#[derive(Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// The first endpoint, as given.
    pub a: Point,
    /// The second endpoint, as given.
    pub b: Point,
}

impl std::fmt::Debug for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -- {:?}", self.a, self.b)
    }
}

impl Segment {
    /// Create a new segment.
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// The endpoint the sweep line reaches first.
    ///
    /// This is the smaller endpoint in `(x, y)` order, so a vertical segment
    /// enters at its smaller `y`.
    pub fn left(&self) -> Point {
        self.a.min(self.b)
    }

    /// The endpoint the sweep line reaches last.
    pub fn right(&self) -> Point {
        self.a.max(self.b)
    }

    /// Is this segment vertical, up to `eps`?
    pub fn is_vertical(&self, eps: f64) -> bool {
        (self.a.x - self.b.x).abs() <= eps
    }

    /// Our `y` coordinate at the given `x` coordinate.
    ///
    /// Vertical segments return their smallest `y` coordinate. Outside the
    /// segment's `x` range, this extrapolates along the supporting line.
    pub fn y_at(&self, x: f64, eps: f64) -> f64 {
        if self.is_vertical(eps) {
            return self.a.y.min(self.b.y);
        }
        let t = (x - self.a.x) / (self.b.x - self.a.x);
        self.a.y + t * (self.b.y - self.a.y)
    }

    /// The slope `dy / dx`, with vertical segments having infinite slope.
    pub fn slope(&self, eps: f64) -> f64 {
        if self.is_vertical(eps) {
            f64::INFINITY
        } else {
            (self.b.y - self.a.y) / (self.b.x - self.a.x)
        }
    }

    /// Our height on the sweep line when the sweep has reached `p`.
    ///
    /// A vertical segment covers a whole interval of the sweep line at its
    /// `x` coordinate. Events at that `x` are processed from bottom to top,
    /// and the segment is taken to be at the height of the current event,
    /// clamped to its own extent. Other segments just use [`Segment::y_at`].
    pub fn y_at_sweep(&self, p: &Point, eps: f64) -> f64 {
        if self.is_vertical(eps) {
            p.y.max(self.a.y.min(self.b.y)).min(self.a.y.max(self.b.y))
        } else {
            self.y_at(p.x, eps)
        }
    }

    /// Compares our vertical position to `other`'s just after the sweep point `p`.
    ///
    /// If the two segments are more than `eps` apart, that decides it.
    /// Otherwise they meet (approximately) at the sweep point, and the one
    /// with the smaller slope is smaller immediately afterwards. A vertical
    /// segment that is still on the sweep line is above everything it meets.
    pub fn cmp_at(&self, other: &Segment, p: &Point, eps: f64) -> std::cmp::Ordering {
        let y = self.y_at_sweep(p, eps);
        let other_y = other.y_at_sweep(p, eps);
        if (y - other_y).abs() > eps {
            CheapOrderedFloat::from(y).cmp(&CheapOrderedFloat::from(other_y))
        } else {
            CheapOrderedFloat::from(self.slope(eps)).cmp(&CheapOrderedFloat::from(other.slope(eps)))
        }
    }

    /// Compares our vertical position to `other`'s just to the right of `x`.
    ///
    /// This is [`Segment::cmp_at`] with the sweep point at the bottom of the
    /// line, so vertical segments sit at their lower ends.
    pub fn cmp_after(&self, other: &Segment, x: f64, eps: f64) -> std::cmp::Ordering {
        let bottom = Point {
            x,
            y: f64::NEG_INFINITY,
        };
        self.cmp_at(other, &bottom, eps)
    }

    /// Finds a point where we meet `other`; see [`segment_intersection`].
    pub fn intersection(&self, other: &Segment, eps: f64) -> Option<Point> {
        segment_intersection(&self.a, &self.b, &other.a, &other.b, eps)
    }

    /// The distance from `p` to the closest point on this segment.
    pub fn distance_to(&self, p: &Point) -> f64 {
        let dx = self.b.x - self.a.x;
        let dy = self.b.y - self.a.y;
        let len2 = dx * dx + dy * dy;
        let t = if len2 == 0.0 {
            0.0
        } else {
            (((p.x - self.a.x) * dx + (p.y - self.a.y) * dy) / len2).clamp(0.0, 1.0)
        };
        let cx = self.a.x + t * dx - p.x;
        let cy = self.a.y + t * dy - p.y;
        (cx * cx + cy * cy).sqrt()
    }
}
