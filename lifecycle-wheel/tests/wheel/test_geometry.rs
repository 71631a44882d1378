//! Pie layout invariants

use lifecycle_wheel::chart::*;
use proptest::prelude::*;
use std::f64::consts::TAU;

const EPS: f64 = 1e-9;

proptest! {
    #[test]
    fn spans_and_padding_fill_the_circle(count in 1usize..64, pad in 0.0f64..0.05) {
        let layout = PieLayout::new(count, pad).unwrap();
        let drawn: f64 = layout.slices.iter().map(Slice::drawn_span).sum();
        let padding: f64 = layout.slices.iter().map(|s| s.pad_angle).sum();
        prop_assert!((drawn + padding - TAU).abs() < EPS);
    }

    #[test]
    fn slices_do_not_overlap(count in 1usize..64, pad in 0.0f64..0.05) {
        let layout = PieLayout::new(count, pad).unwrap();
        for pair in layout.slices.windows(2) {
            prop_assert!(pair[0].drawn_end() <= pair[1].drawn_start() + EPS);
            prop_assert!(pair[0].drawn_start() <= pair[0].drawn_end());
        }
        let last = layout.slices.last().unwrap();
        prop_assert!(last.drawn_end() <= TAU + EPS);
        prop_assert!(layout.slices[0].drawn_start() >= 0.0);
    }

    #[test]
    fn every_centroid_hits_its_own_slice(count in 1usize..32) {
        let layout = PieLayout::standard(count).unwrap();
        for slice in &layout.slices {
            prop_assert_eq!(layout.hit_test(slice.centroid(LABEL_RADIUS)), Some(slice.index));
        }
    }

    #[test]
    fn colors_are_stable(index in 0usize..1000) {
        prop_assert_eq!(slice_color(index), slice_color(index));
        prop_assert_eq!(slice_color(index), slice_color(index + TABLEAU10.len()));
    }
}

#[test]
fn test_eight_phase_layout() {
    let layout = PieLayout::standard(8).unwrap();
    assert_eq!(layout.len(), 8);
    for slice in &layout.slices {
        assert!((slice.span() - TAU / 8.0).abs() < EPS);
        assert!((slice.drawn_span() - (TAU / 8.0 - PAD_ANGLE)).abs() < EPS);
    }
}

#[test]
fn test_ring_bounds() {
    let layout = PieLayout::standard(8).unwrap();
    let angle = layout.slices[0].mid_angle();
    assert_eq!(layout.hit_test(Point::polar(angle, INNER_RADIUS - 1.0)), None);
    assert_eq!(layout.hit_test(Point::polar(angle, INNER_RADIUS + 1.0)), Some(0));
    assert_eq!(layout.hit_test(Point::polar(angle, OUTER_RADIUS - 1.0)), Some(0));
    assert_eq!(layout.hit_test(Point::polar(angle, OUTER_RADIUS + 1.0)), None);
}
