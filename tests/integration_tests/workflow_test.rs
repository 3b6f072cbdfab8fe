use approx::{assert_abs_diff_eq, assert_relative_eq};
use bezier_arclen::{cubic, curve, pt, BezierCurve, Point, PointProperties};

#[test]
fn test_complete_workflow() {
    // Create a simple cubic Bezier curve
    let curve = curve!([
        (0.0, 0.0),     // Start point
        (0.0, 50.0),    // Control point 1
        (100.0, 50.0),  // Control point 2
        (100.0, 100.0)  // End point
    ])
    .unwrap();

    assert_eq!(curve.position_at(0.0), pt!(0, 0));
    assert_eq!(curve.position_at(1.0), pt!(100, 100));

    // Walk the curve in equal steps of arc length, as an animation would
    let frames = curve.points_at_lengths(25);
    assert_eq!(frames.first(), Some(&pt!(0, 0)));
    assert_eq!(frames.last(), Some(&pt!(100, 100)));

    // Each frame reports where it is and which way it is heading
    let step = curve.total_length() / 24.0;
    for (i, frame) in frames.iter().enumerate() {
        let props = curve.properties_at_length(step * i as f64);
        assert_abs_diff_eq!(props.x, frame.x, epsilon = 1e-6);
        assert_abs_diff_eq!(props.y, frame.y, epsilon = 1e-6);
        assert_relative_eq!(props.tangent().norm(), 1.0, epsilon = 1e-12);
    }

    // The curve leaves (0, 0) straight up and arrives at (100, 100) straight up
    assert_abs_diff_eq!(curve.tangent_at_length(0.0).y, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        curve.tangent_at_length(curve.total_length()).y,
        1.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_text_on_curve_layout() {
    // glyph advances placed along an arch, rotated by the tangent
    let curve = curve!([(0, 0), (50, 100), (100, 0)]).unwrap();
    let advances = [12.0, 9.5, 14.0, 11.0, 8.0];

    let mut pen = 10.0;
    let mut previous: Option<PointProperties> = None;
    for advance in advances {
        let props = curve.properties_at_length(pen);
        if let Some(prev) = previous {
            // glyph origins follow the curve, so chords never beat the advance
            assert!(prev.position().distance(&props.position()) <= advance + 1e-6);
            // the arch bends right, so the heading turns clockwise
            let cross = prev.tangent_x * props.tangent_y - prev.tangent_y * props.tangent_x;
            assert!(cross < 0.0);
        }
        previous = Some(props);
        pen += advance;
    }
}

#[test]
fn test_symmetric_quadratic_midpoint() {
    let curve = BezierCurve::new(pt!(0, 0), pt!(50, 100), pt!(100, 0), None).unwrap();
    let mid = curve.properties_at_length(curve.total_length() / 2.0);

    assert_abs_diff_eq!(mid.x, 50.0, epsilon = 1e-6);
    assert_abs_diff_eq!(mid.y, 50.0, epsilon = 1e-6);
    assert_abs_diff_eq!(mid.tangent_x, 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(mid.tangent_y, 0.0, epsilon = 1e-6);
}

#[test]
fn test_cubic_total_length_against_dense_sampling() {
    let segment = cubic!([(0, 0), (0, 50), (100, 50), (100, 100)]);
    let curve = BezierCurve::from_segment(segment).unwrap();

    // trapezoidal integration of the speed on a fine grid
    let n = 200_000;
    let h = 1.0 / n as f64;
    let speeds: Vec<f64> = (0..=n)
        .map(|i| segment.derivative_at(i as f64 * h).norm())
        .collect();
    let reference = h * (speeds.iter().sum::<f64>() - 0.5 * (speeds[0] + speeds[n]));

    assert_relative_eq!(curve.total_length(), reference, max_relative = 1e-3);
    assert_relative_eq!(curve.total_length(), reference, max_relative = 1e-8);
}

#[test]
fn test_degenerate_curve() {
    let p = pt!(42, -7);
    let curve = BezierCurve::new(p, p, p, Some(p)).unwrap();

    assert_eq!(curve.total_length(), 0.0);
    assert_eq!(curve.tangent_at_length(0.0), Point::ZERO);
    assert_eq!(curve.position_at_length(10.0), p);
    assert_eq!(
        curve.properties_at_length(0.0),
        PointProperties::new(p, Point::ZERO)
    );
}

#[test]
fn test_properties_serialize_for_callers() {
    let curve = curve!([(0, 0), (10, 0), (20, 0)]).unwrap();
    let props = curve.properties_at_length(5.0);

    let json = serde_json::to_value(props).unwrap();
    assert_abs_diff_eq!(json["x"].as_f64().unwrap(), 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(json["y"].as_f64().unwrap(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(json["tangentX"].as_f64().unwrap(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(json["tangentY"].as_f64().unwrap(), 0.0, epsilon = 1e-12);
}
