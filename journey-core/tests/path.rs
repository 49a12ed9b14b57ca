use journey_core::{decorative_path, CurveDirection, CurvePath, PathGeometry};

#[test]
fn short_height_yields_start_point_only() {
    let geometry = PathGeometry::default();
    assert_eq!(decorative_path(0, 600, &geometry), "M80,-10 ");
    assert_eq!(decorative_path(599, 600, &geometry), "M80,-10 ");
}

#[test]
fn zero_band_size_does_not_divide_by_zero() {
    let path = CurvePath::build(5100, 0, &PathGeometry::default());
    assert!(path.segments.is_empty());
    assert_eq!(path.end(), (80, -10));
}

#[test]
fn bands_alternate_left_then_right() {
    let path = decorative_path(1250, 600, &PathGeometry::default());
    assert_eq!(
        path,
        "M80,-10 C30,200 30,400 80,600 C130,800 130,1000 80,1200 "
    );
}

#[test]
fn bands_join_at_center() {
    let path = CurvePath::build(5100, 600, &PathGeometry::default());
    assert_eq!(path.segments.len(), 8);
    for (index, segment) in path.segments.iter().enumerate() {
        assert_eq!(segment.end_x, 80);
        assert_eq!(segment.end_y, (index as i64 + 1) * 600);
        assert_eq!(segment.direction, CurveDirection::for_band(index));
    }
    assert_eq!(path.end(), (80, 4800));
}

#[test]
fn same_height_gives_identical_path() {
    let geometry = PathGeometry::default();
    assert_eq!(
        decorative_path(5100, 600, &geometry),
        decorative_path(5100, 600, &geometry)
    );
}
