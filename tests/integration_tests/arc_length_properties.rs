use approx::assert_abs_diff_eq;
use bezier_arclen::{BezierCurve, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Uniform;

/// Random cubic and quadratic curves with coordinates in [-100, 100]
fn random_curves(seed: u64, count: usize) -> Vec<BezierCurve> {
    let mut rng = StdRng::seed_from_u64(seed);
    let coord = Uniform::new_inclusive(-100.0, 100.0);

    (0..count)
        .map(|i| {
            let n = 3 + i % 2;
            let points: Vec<Point> = (0..n)
                .map(|_| Point::new(rng.sample(&coord), rng.sample(&coord)))
                .collect();
            BezierCurve::from_points(&points).unwrap()
        })
        .collect()
}

/// Hand picked shapes where the speed drops to zero inside the curve
fn stationary_curves() -> Vec<BezierCurve> {
    [
        vec![(0.0, 0.0), (100.0, 100.0), (0.0, 100.0), (100.0, 0.0)],
        vec![(0.0, 0.0), (100.0, 0.0), (-50.0, 0.0), (50.0, 0.0)],
        vec![(0.0, 0.0), (100.0, 0.0), (0.0, 0.0)],
        vec![(0.0, 0.0), (0.0, 0.0), (100.0, 100.0), (100.0, 100.0)],
    ]
    .into_iter()
    .map(|points| {
        let points: Vec<Point> = points.into_iter().map(Point::from).collect();
        BezierCurve::from_points(&points).unwrap()
    })
    .collect()
}

fn all_curves() -> Vec<BezierCurve> {
    let mut curves = random_curves(7, 200);
    curves.extend(stationary_curves());
    curves
}

#[test]
fn test_endpoints_and_cached_length() {
    for curve in all_curves() {
        let points = curve.segment().points();
        let (first, last) = (points[0], points[points.len() - 1]);

        assert_eq!(curve.position_at(0.0), first);
        assert_abs_diff_eq!(curve.position_at(1.0).x, last.x, epsilon = 1e-9);
        assert_abs_diff_eq!(curve.position_at(1.0).y, last.y, epsilon = 1e-9);
        assert_eq!(curve.total_length(), curve.length_at(1.0));
        assert!(curve.total_length() >= 0.0);

        // the curve can never be shorter than its chord
        assert!(curve.total_length() >= first.distance(&last) - 1e-9);
    }
}

#[test]
fn test_length_is_non_decreasing() {
    for curve in all_curves() {
        let mut previous = 0.0;
        for i in 1..=400 {
            let length = curve.length_at(i as f64 / 400.0);
            assert!(
                length >= previous,
                "length drops at t = {} on {:?}",
                i as f64 / 400.0,
                curve.segment()
            );
            previous = length;
        }
    }
}

#[test]
fn test_round_trip_through_length() {
    for curve in all_curves() {
        for i in 0..=50 {
            let t = i as f64 / 50.0;
            let expected = curve.position_at(t);
            let actual = curve.position_at_length(curve.length_at(t));

            assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-6);
            assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_out_of_range_lengths_clamp() {
    for curve in all_curves() {
        let start = curve.position_at(0.0);
        let end = curve.position_at(1.0);
        let total = curve.total_length();

        assert_eq!(curve.position_at_length(0.0), start);
        assert_eq!(curve.position_at_length(-5.0), start);
        assert_eq!(curve.position_at_length(total), end);
        assert_eq!(curve.position_at_length(total + 5.0), end);
    }
}

#[test]
fn test_tangents_are_unit_or_zero() {
    for curve in all_curves() {
        for i in 0..=20 {
            let pos = curve.total_length() * i as f64 / 20.0;
            let norm = curve.tangent_at_length(pos).norm();
            assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-12, "norm = {}", norm);
        }
    }
}

#[test]
fn test_shared_across_threads() {
    let curves = random_curves(11, 8);
    let expected: Vec<Vec<Point>> = curves.iter().map(|c| c.points_at_lengths(16)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = curves
            .iter()
            .map(|curve| scope.spawn(move || curve.points_at_lengths(16)))
            .collect();

        for (handle, expected) in handles.into_iter().zip(expected) {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
