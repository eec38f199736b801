mod test_utils;

use set_outlines::{
    BezierConverter, BoundingBoxOutline, ConvexHullOutline, IdentityMapper, InflateMapper,
    PolygonConverter, Rect, RectMapper, RectRole, ShapeCreator, ShapeCreatorError,
    ShapeCreatorOptions, SimplifyingConverter, assert_fuzzy_eq, rects,
};
use test_utils::*;

#[test]
fn two_singleton_groups() {
    init_tracing();
    let r1 = r(0.0, 0.0, 1.0, 1.0);
    let r2 = r(5.0, 5.0, 2.0, 2.0);
    let outline = RecordingOutline::new();
    let creator = ShapeCreator::new(&outline, points_shape);

    let shapes = creator.create_shapes_for(&[vec![r1], vec![r2]]).unwrap();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0], vec![r1.center()]);
    assert_eq!(shapes[1], vec![r2.center()]);

    let calls = outline.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].members, vec![r1]);
    assert_eq!(calls[0].non_members, vec![r2]);
    assert_eq!(calls[1].members, vec![r2]);
    assert_eq!(calls[1].non_members, vec![r1]);
}

#[test]
fn empty_group_list_never_invokes_outline() {
    let outline = RecordingOutline::new();
    let creator = ShapeCreator::new(&outline, PolygonConverter);
    let groups: Vec<Vec<Rect>> = Vec::new();

    assert!(creator.create_shapes_for(&groups).unwrap().is_empty());
    assert!(creator.create_shapes_for_lists(groups).unwrap().is_empty());
    assert_eq!(outline.call_count(), 0);
}

#[test]
fn empty_group_yields_degenerate_shape() {
    let r1 = r(1.0, 1.0, 3.0, 3.0);
    let outline = RecordingOutline::new();
    let creator = ShapeCreator::new(&outline, PolygonConverter);

    let shapes = creator.create_shapes_for(&[vec![], vec![r1]]).unwrap();
    assert_eq!(shapes.len(), 2);
    assert!(shapes[0].is_empty());
    // a single member center is a single point, also degenerate
    assert!(shapes[1].is_empty());

    let calls = outline.calls();
    assert!(calls[0].members.is_empty());
    assert_eq!(calls[0].non_members, vec![r1]);
    assert_eq!(calls[1].members, vec![r1]);
    assert!(calls[1].non_members.is_empty());
}

#[test]
fn non_members_keep_group_order() {
    let groups = vec![
        rects![(0.0, 0.0, 1.0, 1.0), (1.0, 0.0, 1.0, 1.0)],
        rects![(2.0, 0.0, 1.0, 1.0)],
        rects![(3.0, 0.0, 1.0, 1.0), (4.0, 0.0, 1.0, 1.0), (5.0, 0.0, 1.0, 1.0)],
        rects![],
    ];
    let outline = RecordingOutline::new();
    let creator = ShapeCreator::new(&outline, points_shape);
    let shapes = creator.create_shapes_for(&groups).unwrap();
    assert_eq!(shapes.len(), groups.len());

    let calls = outline.calls();
    for (i, call) in calls.iter().enumerate() {
        assert_eq!(call.members, groups[i]);
        let expected: Vec<Rect> = groups
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .flat_map(|(_, g)| g.iter().copied())
            .collect();
        assert_eq!(call.non_members, expected, "group {i}");
    }
}

#[test]
fn lists_match_slices() {
    let groups = vec![
        rects![(0.0, 0.0, 10.0, 10.0), (20.0, 0.0, 10.0, 10.0)],
        rects![(0.0, 30.0, 5.0, 5.0), (12.0, 31.0, 4.0, 2.0)],
        rects![(40.0, 40.0, 1.0, 1.0)],
    ];
    let creator = ShapeCreator::with_mapper(ConvexHullOutline, PolygonConverter, InflateMapper);

    let from_slices = creator.create_shapes_for(&groups).unwrap();
    let from_lists = creator
        .create_shapes_for_lists(groups.iter().map(|g| g.iter().copied()))
        .unwrap();
    assert_eq!(from_slices, from_lists);

    let from_arrays = creator
        .create_shapes_for(&groups.iter().map(Vec::as_slice).collect::<Vec<_>>())
        .unwrap();
    assert_eq!(from_slices, from_arrays);
}

#[test]
fn members_mapped_before_outline() {
    let outline = RecordingOutline::new();
    let mut creator = ShapeCreator::with_mapper(&outline, points_shape, InflateMapper);
    creator.set_radius(2.0);
    let member = r(0.0, 0.0, 4.0, 4.0);
    let non_member = r(10.0, 10.0, 1.0, 1.0);

    creator.create_shape_for(&[member], &[non_member]).unwrap();
    let calls = outline.calls();
    assert!(calls[0].members[0].fuzzy_eq(&r(-2.0, -2.0, 8.0, 8.0)));
    assert!(calls[0].non_members[0].fuzzy_eq(&r(8.0, 8.0, 5.0, 5.0)));
}

#[test]
fn radius_change_not_retroactive() {
    let mut creator =
        ShapeCreator::with_mapper(BoundingBoxOutline, PolygonConverter, InflateMapper);
    let members = [r(0.0, 0.0, 10.0, 10.0)];

    let before = creator.create_shape_for(&members, &[]).unwrap();
    assert_fuzzy_eq!(before.area(), 900.0);

    creator.set_radius(0.0);
    let after = creator.create_shape_for(&members, &[]).unwrap();
    assert_fuzzy_eq!(after.area(), 100.0);
    assert_fuzzy_eq!(before.area(), 900.0);

    // negative radius passes through unchanged
    creator.set_radius(-2.0);
    assert_eq!(creator.radius(), -2.0);
    let shrunk = creator.create_shape_for(&members, &[]).unwrap();
    assert_fuzzy_eq!(shrunk.area(), 36.0);
}

#[test]
fn identity_mapping_copies() {
    let creator = ShapeCreator::new(BoundingBoxOutline, PolygonConverter);
    let input = rects![(1.0, 2.0, 3.0, 4.0), (-1.0, -1.0, 0.5, 0.5)];
    let mapped = creator.map_rects(&input);
    assert_eq!(mapped, input);
    for (m, i) in mapped.iter().zip(input.iter()) {
        assert!(!std::ptr::eq(m, i));
    }
    assert_eq!(IdentityMapper.map_rect(&input[0], 99.0), input[0]);
}

#[test]
fn options_configure_radius() {
    let options = ShapeCreatorOptions { radius: 3.5 };
    let creator = ShapeCreator::with_options(
        BoundingBoxOutline,
        PolygonConverter,
        InflateMapper,
        &options,
    );
    assert_eq!(creator.radius(), 3.5);
    assert_eq!(ShapeCreatorOptions::<f64>::default().radius, 10.0);
}

#[test]
fn invalid_member_rejected_before_outline() {
    let outline = RecordingOutline::new();
    let creator = ShapeCreator::new(&outline, points_shape);
    let bad = r(0.0, f64::NAN, 1.0, 1.0);

    let err = creator
        .create_shape_for(&[r(0.0, 0.0, 1.0, 1.0), bad], &[])
        .unwrap_err();
    match err {
        ShapeCreatorError::InvalidArgument { role, index, .. } => {
            assert_eq!(role, RectRole::Member);
            assert_eq!(index, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = creator
        .create_shape_for(&[], &[r(f64::INFINITY, 0.0, 1.0, 1.0)])
        .unwrap_err();
    assert!(matches!(
        err,
        ShapeCreatorError::InvalidArgument {
            role: RectRole::NonMember,
            index: 0,
            ..
        }
    ));
    assert_eq!(outline.call_count(), 0);
}

#[test]
fn invalid_group_rect_rejected_before_any_outline() {
    let outline = RecordingOutline::new();
    let creator = ShapeCreator::new(&outline, points_shape);
    let groups = vec![
        vec![r(0.0, 0.0, 1.0, 1.0)],
        vec![r(0.0, 0.0, 1.0, 1.0), r(0.0, 0.0, f64::NAN, 1.0)],
    ];

    let err = creator.create_shapes_for(&groups).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(matches!(
        err,
        ShapeCreatorError::InvalidArgument {
            role: RectRole::Group(1),
            index: 1,
            ..
        }
    ));
    assert_eq!(outline.call_count(), 0);
}

#[test]
fn outline_errors_propagate_unchanged() {
    let creator = ShapeCreator::new(FailingOutline { max_members: 1 }, points_shape);
    let groups = vec![
        vec![r(0.0, 0.0, 1.0, 1.0)],
        vec![r(2.0, 0.0, 1.0, 1.0), r(4.0, 0.0, 1.0, 1.0)],
    ];

    let err = creator.create_shapes_for(&groups).unwrap_err();
    assert_eq!(err.to_string(), "no outline for 2 members");
    assert_eq!(
        err.into_outline_error(),
        Some(OutlineFailure { member_count: 2 })
    );

    // groups within the limit still succeed
    let shapes = creator.create_shapes_for(&groups[..1]).unwrap();
    assert_eq!(shapes.len(), 1);
}

#[test]
fn boxed_outline_generator() {
    let outline: Box<ConvexHullOutline> = Box::new(ConvexHullOutline);
    let creator = ShapeCreator::new(outline, BezierConverter);
    let shapes = creator
        .create_shapes_for(&[rects![(0.0, 0.0, 2.0, 2.0)], rects![]])
        .unwrap();
    assert!(shapes[0].is_closed());
    // move to, one curve per hull point, close
    assert_eq!(shapes[0].len(), 6);
    assert!(shapes[1].is_empty());
}

#[test]
fn simplified_polygon_pipeline() {
    let mut creator = ShapeCreator::with_mapper(
        ConvexHullOutline,
        SimplifyingConverter::new(PolygonConverter, 0.5),
        InflateMapper,
    );
    creator.set_radius(1.0);
    let shapes = creator
        .create_shapes_for(&[
            rects![(0.0, 0.0, 4.0, 4.0), (0.1, 0.1, 4.0, 4.0)],
            rects![(20.0, 0.0, 2.0, 2.0)],
        ])
        .unwrap();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[1].len(), 4);
    assert_fuzzy_eq!(shapes[1].area(), 16.0);
    assert!(shapes[0].area() > 36.0);
}
