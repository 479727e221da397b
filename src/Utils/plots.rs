use plotters::prelude::*;
use std::error::Error;
use std::path::PathBuf;

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Range with a 5% margin, widened when all values coincide.
fn padded(lo: f64, hi: f64) -> std::ops::Range<f64> {
    let span = hi - lo;
    let margin = if span > 0.0 { 0.05 * span } else { 0.5 * (1.0 + lo.abs()) };
    (lo - margin)..(hi + margin)
}

/// Draws two curves on one chart and saves it as `<title>.png` in the
/// working directory (or in `dir` when given).
pub fn plot_two_curves(
    x1: &[f64],
    y1: &[f64],
    x2: &[f64],
    y2: &[f64],
    title: &str,
    labels: (&str, &str),
    dir: Option<&std::path::Path>,
) -> Result<PathBuf, Box<dyn Error>> {
    if x1.len() != y1.len() || x2.len() != y2.len() {
        return Err(format!(
            "plot '{}': x and y lengths differ ({}/{} and {}/{})",
            title,
            x1.len(),
            y1.len(),
            x2.len(),
            y2.len()
        )
        .into());
    }
    if x1.is_empty() && x2.is_empty() {
        return Err(format!("plot '{}': nothing to draw", title).into());
    }
    let filename = match dir {
        Some(dir) => dir.join(format!("{}.png", title)),
        None => PathBuf::from(format!("{}.png", title)),
    };

    let (x_min, x_max) = bounds(x1.iter().chain(x2.iter()).copied());
    let (y_min, y_max) = bounds(y1.iter().chain(y2.iter()).copied());
    if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
        return Err(format!("plot '{}': data contain NaN or infinity", title).into());
    }

    let root_area = BitMapBackend::new(&filename, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(padded(x_min, x_max), padded(y_min, y_max))?;

    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    for (col, (x, y, label)) in [(x1, y1, labels.0), (x2, y2, labels.1)]
        .into_iter()
        .enumerate()
    {
        let series: Vec<(f64, f64)> = x.iter().zip(y.iter()).map(|(&x, &y)| (x, y)).collect();
        chart
            .draw_series(LineSeries::new(series, &Palette99::pick(col)))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(col))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root_area.present()?;
    Ok(filename.clone())
}
