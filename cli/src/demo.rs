use arcblend::math::{point, Point};

/// The points used when no input is provided.
///
/// A closed figure with a self-intersection, some points repeated at
/// different positions of the sequence, and both gentle and sharp turns.
pub fn demo_shape() -> Vec<Point> {
    const SHAPE: [(f32, f32); 18] = [
        (150.0, 100.0),
        (300.0, 150.0),
        (400.0, 250.0),
        (500.0, 350.0),
        (650.0, 400.0),
        (600.0, 250.0),
        (500.0, 150.0),
        (300.0, 150.0),
        (200.0, 250.0),
        (150.0, 400.0),
        (300.0, 350.0),
        (400.0, 250.0),
        (500.0, 150.0),
        (650.0, 100.0),
        (600.0, 250.0),
        (500.0, 350.0),
        (300.0, 350.0),
        (200.0, 250.0),
    ];

    SHAPE
        .iter()
        .map(|&(x, y)| point(x * 2.0, y * 2.0))
        .collect()
}

#[test]
fn demo_shape_tessellates() {
    use arcblend::tessellation::{CurveOptions, CurveTessellator, EndMode};

    let points = demo_shape();
    assert_eq!(points.len(), 18);
    assert_eq!(points[0], point(300.0, 200.0));

    let mut tessellator = CurveTessellator::new();
    for &end_mode in &[EndMode::JoinEnds, EndMode::ShowEnds, EndMode::HideEnds] {
        let polyline = tessellator
            .tessellate_polyline(&points, &CurveOptions::DEFAULT.with_end_mode(end_mode))
            .unwrap();
        assert!(!polyline.is_empty());
        assert!(polyline.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}
