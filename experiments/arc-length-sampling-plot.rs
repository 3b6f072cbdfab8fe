// Compare points spaced evenly in t against points spaced evenly in arc length.
//
// Uniform t bunches samples up where the curve moves slowly; arc length sampling keeps
// the gaps equal. Writes an SVG with both sample sets drawn over the curve.

use bezier_arclen::{curve, Point};
use log::info;
use plotters::prelude::*;

const OUTPUT: &str = "arc-length-sampling.svg";
const SAMPLES: usize = 16;

/// Ratio of the longest to the shortest gap between consecutive samples
fn gap_ratio(points: &[Point]) -> f64 {
    let gaps: Vec<f64> = points.windows(2).map(|w| w[0].distance(&w[1])).collect();
    let max = gaps.iter().cloned().fold(f64::MIN, f64::max);
    let min = gaps.iter().cloned().fold(f64::MAX, f64::min);
    max / min
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let curve = curve!([(0.0, 0.0), (10.0, 90.0), (30.0, 100.0), (100.0, 0.0)])?;
    let by_t = curve.segment().sample_points(SAMPLES);
    let by_length = curve.points_at_lengths(SAMPLES);

    info!("total length {:.4}", curve.total_length());
    info!("gap ratio, uniform t: {:.3}", gap_ratio(&by_t));
    info!("gap ratio, uniform arc length: {:.3}", gap_ratio(&by_length));

    let root = SVGBackend::new(OUTPUT, (800, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("uniform t vs uniform arc length", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-10f64..110f64, -10f64..110f64)?;
    chart.configure_mesh().draw()?;

    chart
        .draw_series(LineSeries::new(
            (0..=200).map(|i| {
                let p = curve.position_at(i as f64 / 200.0);
                (p.x, p.y)
            }),
            &BLACK,
        ))?
        .label("curve")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    chart
        .draw_series(by_t.iter().map(|p| Circle::new((p.x, p.y), 5, RED.filled())))?
        .label("uniform t")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

    chart
        .draw_series(
            by_length
                .iter()
                .map(|p| Circle::new((p.x, p.y), 3, BLUE.filled())),
        )?
        .label("uniform arc length")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!("wrote {}", OUTPUT);

    Ok(())
}
