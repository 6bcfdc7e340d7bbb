use super::*;
use crate::geom::{Point, Segment, Side};
use proptest::prelude::*;

fn ring(v: &[(f64, f64)]) -> Ring {
    Ring::new(0, v.iter().copied().map(Point::from).collect())
}

fn coords(r: &Ring) -> Vec<(f64, f64)> {
    r.points.iter().map(|p| (p.x, p.y)).collect()
}

fn cut(x: f64, y: f64, connector: usize) -> Vertex {
    Vertex {
        point: Point::new(x, y),
        kind: VertexKind::Cut { connector },
    }
}

#[test]
fn rectangle_straddling_dateline_splits_in_two() {
    let input = ring(&[
        (170.0, 0.0),
        (170.0, 10.0),
        (-170.0, 10.0),
        (-170.0, 0.0),
        (170.0, 0.0),
    ]);
    let out = split_ring(&input).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(
        coords(&out[0]),
        vec![
            (170.0, 0.0),
            (170.0, 10.0),
            (180.0, 10.0),
            (180.0, 0.0),
            (170.0, 0.0)
        ]
    );
    assert_eq!(
        coords(&out[1]),
        vec![
            (-180.0, 0.0),
            (-180.0, 10.0),
            (-170.0, 10.0),
            (-170.0, 0.0),
            (-180.0, 0.0)
        ]
    );
}

#[test]
fn reversed_rectangle_splits_in_two() {
    let input = ring(&[
        (170.0, 0.0),
        (-170.0, 0.0),
        (-170.0, 10.0),
        (170.0, 10.0),
        (170.0, 0.0),
    ]);
    let out = split_ring(&input).unwrap();
    assert_eq!(
        coords(&out[0]),
        vec![
            (170.0, 0.0),
            (180.0, 0.0),
            (180.0, 10.0),
            (170.0, 10.0),
            (170.0, 0.0)
        ]
    );
    assert_eq!(
        coords(&out[1]),
        vec![
            (-180.0, 10.0),
            (-180.0, 0.0),
            (-170.0, 0.0),
            (-170.0, 10.0),
            (-180.0, 10.0)
        ]
    );
}

#[test]
fn rectangle_across_prime_meridian_is_untouched() {
    let input = ring(&[
        (10.0, 0.0),
        (10.0, 10.0),
        (-10.0, 10.0),
        (-10.0, 0.0),
        (10.0, 0.0),
    ]);
    assert_eq!(split_ring(&input).unwrap(), vec![input]);
}

#[test]
fn vertex_on_antimeridian_without_crossing() {
    let input = ring(&[(170.0, 0.0), (180.0, 0.0), (170.0, 10.0), (170.0, 0.0)]);
    assert_eq!(split_ring(&input).unwrap(), vec![input]);
}

#[test]
fn out_of_range_longitudes_are_folded_first() {
    let input = ring(&[
        (170.0, 0.0),
        (170.0, 10.0),
        (190.0, 10.0),
        (190.0, 0.0),
        (170.0, 0.0),
    ]);
    let out = split_ring(&input).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[1].points[2], Point::new(-170.0, 10.0));
}

#[test]
fn c_shape_with_four_crossings_yields_three_rings() {
    // East part is a "C" open to the west; the two western arms become
    // separate rings.
    let input = ring(&[
        (170.0, 0.0),
        (170.0, 30.0),
        (-170.0, 30.0),
        (-170.0, 20.0),
        (175.0, 20.0),
        (175.0, 10.0),
        (-170.0, 10.0),
        (-170.0, 0.0),
        (170.0, 0.0),
    ]);
    let out = split_ring(&input).unwrap();
    assert_eq!(out.len(), 3);
    assert_eq!(
        coords(&out[0]),
        vec![
            (170.0, 0.0),
            (170.0, 30.0),
            (180.0, 30.0),
            (180.0, 20.0),
            (175.0, 20.0),
            (175.0, 10.0),
            (180.0, 10.0),
            (180.0, 0.0),
            (170.0, 0.0)
        ]
    );
    assert_eq!(
        coords(&out[1]),
        vec![
            (-180.0, 20.0),
            (-180.0, 30.0),
            (-170.0, 30.0),
            (-170.0, 20.0),
            (-180.0, 20.0)
        ]
    );
    assert_eq!(
        coords(&out[2]),
        vec![
            (-180.0, 0.0),
            (-180.0, 10.0),
            (-170.0, 10.0),
            (-170.0, 0.0),
            (-180.0, 0.0)
        ]
    );
}

#[test]
fn odd_crossing_count_is_an_error() {
    let input = Ring::new(
        42,
        vec![
            Point::new(100.0, 0.0),
            Point::new(-100.0, 0.0),
            Point::new(0.0, 50.0),
            Point::new(100.0, 0.0),
        ],
    );
    assert_eq!(
        split_ring(&input),
        Err(SplitError::OddCrossings {
            ring: 42,
            crossings: 1
        })
    );
}

#[test]
fn degenerate_rings() {
    let single = ring(&[(5.0, 5.0), (5.0, 5.0)]);
    assert_eq!(split_ring(&single).unwrap(), vec![single]);
    assert!(split_ring(&ring(&[])).unwrap().is_empty());
}

#[test]
fn arena_pairs_cuts_by_descending_latitude() {
    let input = ring(&[
        (170.0, 0.0),
        (170.0, 10.0),
        (-170.0, 10.0),
        (-170.0, 0.0),
        (170.0, 0.0),
    ]);
    let arena = build_arena(&input).unwrap();
    assert_eq!(arena.len(), 6);
    assert_eq!(arena.crossings(), 2);
    assert_eq!(
        arena.connectors,
        vec![Segment::new(VertexId(2), VertexId(5))]
    );
    assert_eq!(arena.vertex(VertexId(2)).point, Point::new(180.0, 10.0));
    assert_eq!(arena.side(VertexId(2)), Side::Positive);
    assert_eq!(arena.side(VertexId(5)), Side::Negative);
    assert!(!arena.vertex(VertexId(3)).is_cut());
}

#[test]
fn transition_table() {
    use Side::*;
    let cut = VertexKind::Cut { connector: 0 };
    assert_eq!(transition(VertexKind::Original, Positive, Negative), Step::Forward);
    assert_eq!(transition(VertexKind::Original, Negative, Negative), Step::Forward);
    assert_eq!(transition(cut, Positive, Positive), Step::Forward);
    assert_eq!(transition(cut, Negative, Negative), Step::Forward);
    assert_eq!(transition(cut, Positive, Negative), Step::AtCutJump);
    assert_eq!(transition(cut, Negative, Positive), Step::AtCutJump);
}

#[test]
fn connectors_that_never_return_raise_excess_visit() {
    // Both cuts jump to each other forever and never reach vertex 0.
    let arena = Arena {
        origin: 7,
        vertices: vec![
            Vertex::original(Point::new(170.0, 0.0)),
            cut(180.0, 10.0, 0),
            Vertex::original(Point::new(-170.0, 10.0)),
            cut(180.0, 5.0, 0),
            Vertex::original(Point::new(-170.0, 0.0)),
        ],
        connectors: vec![Segment::new(VertexId(1), VertexId(3))],
    };
    assert_eq!(
        walk(&arena),
        Err(SplitError::ExcessVisit { ring: 7, vertex: 1 })
    );
}

#[test]
fn split_coordinates_concatenates_rings_in_order() {
    let xs = [170.0, 170.0, -170.0, -170.0, 170.0, 1.0, 2.0, 1.0, 1.0];
    let ys = [0.0, 10.0, 10.0, 0.0, 0.0, 1.0, 1.0, 2.0, 1.0];
    let (ox, oy) = split_coordinates(&xs, &ys).unwrap();
    assert_eq!(ox.len(), 14);
    assert_eq!(oy.len(), 14);
    assert_eq!(&ox[10..], &[1.0, 2.0, 1.0, 1.0]);
    assert_eq!(&ox[..5], &[170.0, 170.0, 180.0, 180.0, 170.0]);
}

#[test]
fn split_coordinates_reports_unclosed_tail() {
    let err = split_coordinates(&[1.0, 2.0, 1.0, 9.0], &[1.0, 2.0, 1.0, 9.0]).unwrap_err();
    assert_eq!(err, SplitError::UnclosedRing { ring: 3, len: 1 });
}

fn closed(mut pts: Vec<Point>) -> Vec<Point> {
    let first = pts[0];
    pts.push(first);
    pts
}

/// Rings that stay within ±89° longitude: every opposite-sign edge is
/// shorter through the prime meridian.
fn near_prime_ring() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-89.0..89.0f64, -80.0..80.0f64), 3..12)
        .prop_map(|v| closed(v.into_iter().map(Point::from).collect()))
}

/// A strip around the dateline: an eastern chain going north, then a
/// western chain going south. Exactly two edges cross.
fn straddling_strip() -> impl Strategy<Value = Vec<Point>> {
    (
        prop::collection::vec(150.0..179.0f64, 2..6),
        prop::collection::vec(-179.0..-150.0f64, 2..6),
        -60.0..0.0f64,
        1.0..60.0f64,
    )
        .prop_map(|(east, west, lat0, height)| {
            let step = |n: usize, i: usize| height * i as f64 / (n - 1) as f64;
            let mut pts = Vec::with_capacity(east.len() + west.len() + 1);
            for (i, &x) in east.iter().enumerate() {
                pts.push(Point::new(x, lat0 + step(east.len(), i)));
            }
            for (i, &x) in west.iter().enumerate() {
                pts.push(Point::new(x, lat0 + height - step(west.len(), i)));
            }
            closed(pts)
        })
}

proptest! {
    #[test]
    fn non_crossing_rings_pass_through(pts in near_prime_ring()) {
        let input = Ring::new(0, pts);
        prop_assert_eq!(split_ring(&input).unwrap(), vec![input]);
    }

    #[test]
    fn straddling_strip_splits_into_closed_one_sided_rings(pts in straddling_strip()) {
        let open = pts.len() - 1;
        let out = split_ring(&Ring::new(0, pts)).unwrap();
        prop_assert_eq!(out.len(), 2);
        // two cuts, each emitted once per side, plus one closing point per ring
        let total: usize = out.iter().map(|r| r.points.len()).sum();
        prop_assert_eq!(total, open + 4 + 2);
        for r in &out {
            prop_assert!(r.is_closed());
            let side = Side::of(r.points[0].x);
            for p in &r.points {
                prop_assert_eq!(Side::of(p.x), side);
            }
        }
    }

    #[test]
    fn synthesized_vertices_sit_exactly_on_the_boundary(pts in straddling_strip()) {
        let input: Vec<f64> = pts.iter().map(|p| p.x).collect();
        for r in split_ring(&Ring::new(0, pts)).unwrap() {
            for p in r.points.iter().filter(|p| !input.contains(&p.x)) {
                prop_assert!(p.x == 180.0 || p.x == -180.0, "unexpected longitude {}", p.x);
            }
        }
    }

    #[test]
    fn splitting_twice_changes_nothing(pts in straddling_strip()) {
        for r in split_ring(&Ring::new(0, pts)).unwrap() {
            prop_assert_eq!(split_ring(&r).unwrap(), vec![r.clone()]);
        }
    }
}
