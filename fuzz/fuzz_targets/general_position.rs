#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use linecross::{
    arbitrary::float_in_range, brute_force_intersections, orient, Segments, SweepConfig, Sweeper,
};

// On segments in general position (no three endpoints almost collinear, no
// two events at almost the same `x`), the sweep must find exactly what the
// brute-force search finds.
#[derive(Debug)]
struct Input {
    segs: Segments,
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let count = u.int_in_range(0..=16)?;
        let mut segs = Segments::default();
        for _ in 0..count {
            let a = (float_in_range(-100.0, 100.0, u)?, float_in_range(-100.0, 100.0, u)?);
            let b = (float_in_range(-100.0, 100.0, u)?, float_in_range(-100.0, 100.0, u)?);
            segs.add_segment(a, b);
        }
        Ok(Input { segs })
    }
}

fn general_position(segs: &Segments) -> bool {
    let mut xs: Vec<f64> = Vec::new();
    for (i, s) in segs.segments().enumerate() {
        xs.push(s.a.x);
        xs.push(s.b.x);
        for t in segs.segments().skip(i + 1) {
            for (u, v, w) in [(s.a, s.b, t.a), (s.a, s.b, t.b), (t.a, t.b, s.a), (t.a, t.b, s.b)] {
                if orient(&u, &v, &w).abs() < 1e-3 {
                    return false;
                }
            }
            if let Some(p) = s.intersection(t, 1e-9) {
                xs.push(p.x);
            }
        }
    }
    xs.sort_by(f64::total_cmp);
    xs.windows(2).all(|w| w[1] - w[0] > 1e-6)
}

fuzz_target!(|input: Input| {
    if !general_position(&input.segs) {
        return;
    }
    let config = SweepConfig::default();
    let mut sweeper = Sweeper::new(&input.segs, config);
    sweeper.run();
    let found = sweeper.into_accepted();
    let expected = brute_force_intersections(&input.segs, config);

    assert_eq!(found.len(), expected.len());
    for p in &found {
        assert!(expected.iter().any(|q| q.approx_eq(p, 1e-6)), "{p:?}");
    }
});
