//! Static SVG plot of the integrand and the integrated region.
//!
//! Rendering has no influence on the numeric report; callers should treat
//! a failed save as a warning.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::integrand::{square, FORMULA};
use crate::interval::Interval;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Padding added to each side of the bounds on the x axis.
const DOMAIN_PADDING: f64 = 0.5;
/// Headroom above the curve maximum on the y axis.
const RANGE_PADDING: f64 = 0.2;
const CURVE_POINTS: usize = 400;
const REGION_POINTS: usize = 300;
const TICKS: usize = 6;

/// Plot output failure.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("integration bounds must be finite, got {0}")]
    NonFiniteBound(Interval),

    #[error("failed to write plot to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Maps data coordinates onto the drawing area.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Frame {
    fn px(&self, x: f64) -> f64 {
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        MARGIN_LEFT + (x - self.x_min) / (self.x_max - self.x_min) * plot_width
    }

    fn py(&self, y: f64) -> f64 {
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        HEIGHT - MARGIN_BOTTOM - (y - self.y_min) / (self.y_max - self.y_min) * plot_height
    }
}

fn linspace(start: f64, end: f64, points: usize) -> impl Iterator<Item = f64> {
    let step = if points > 1 {
        (end - start) / (points - 1) as f64
    } else {
        0.0
    };
    (0..points).map(move |i| start + step * i as f64)
}

fn polyline_points(frame: &Frame, xs: impl Iterator<Item = f64>) -> String {
    let mut out = String::new();
    for x in xs {
        let _ = write!(out, "{:.2},{:.2} ", frame.px(x), frame.py(square(x)));
    }
    out.trim_end().to_string()
}

/// Renders the curve `y = x²`, the shaded region between the bounds and
/// dashed markers at `a` and `b` as an SVG document.
pub fn render_svg(a: f64, b: f64) -> Result<String, PlotError> {
    let interval = Interval::new(a, b);
    if !interval.is_finite() {
        return Err(PlotError::NonFiniteBound(interval));
    }

    let (low, high) = interval.sampling_bounds();
    let x_min = low - DOMAIN_PADDING;
    let x_max = high + DOMAIN_PADDING;
    let y_peak = linspace(x_min, x_max, CURVE_POINTS)
        .map(square)
        .fold(0.0_f64, f64::max);
    let frame = Frame {
        x_min,
        x_max,
        y_min: 0.0,
        y_max: y_peak + RANGE_PADDING,
    };

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif" font-size="12">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);

    // Grid and tick labels.
    for x in linspace(frame.x_min, frame.x_max, TICKS) {
        let px = frame.px(x);
        let _ = writeln!(
            svg,
            r##"<line x1="{px:.2}" y1="{top:.2}" x2="{px:.2}" y2="{bottom:.2}" stroke="#dddddd"/>"##,
            top = frame.py(frame.y_max),
            bottom = frame.py(frame.y_min),
        );
        let _ = writeln!(
            svg,
            r#"<text x="{px:.2}" y="{y:.2}" text-anchor="middle">{x:.2}</text>"#,
            y = frame.py(frame.y_min) + 18.0,
        );
    }
    for y in linspace(frame.y_min, frame.y_max, TICKS) {
        let py = frame.py(y);
        let _ = writeln!(
            svg,
            r##"<line x1="{left:.2}" y1="{py:.2}" x2="{right:.2}" y2="{py:.2}" stroke="#dddddd"/>"##,
            left = frame.px(frame.x_min),
            right = frame.px(frame.x_max),
        );
        let _ = writeln!(
            svg,
            r#"<text x="{x:.2}" y="{py:.2}" text-anchor="end" dominant-baseline="middle">{y:.2}</text>"#,
            x = frame.px(frame.x_min) - 8.0,
        );
    }

    // Shaded region under the curve between the bounds.
    let region = polyline_points(&frame, linspace(low, high, REGION_POINTS));
    let _ = writeln!(
        svg,
        r##"<polygon points="{:.2},{base:.2} {region} {:.2},{base:.2}" fill="#1f77b4" fill-opacity="0.3" stroke="none"/>"##,
        frame.px(low),
        frame.px(high),
        base = frame.py(0.0),
    );

    // Curve.
    let curve = polyline_points(&frame, linspace(frame.x_min, frame.x_max, CURVE_POINTS));
    let _ = writeln!(
        svg,
        r##"<polyline points="{curve}" fill="none" stroke="#1f77b4" stroke-width="2"/>"##
    );

    // Bound markers.
    for bound in [a, b] {
        let px = frame.px(bound);
        let _ = writeln!(
            svg,
            r##"<line x1="{px:.2}" y1="{top:.2}" x2="{px:.2}" y2="{bottom:.2}" stroke="#555555" stroke-dasharray="6,4"/>"##,
            top = frame.py(frame.y_max),
            bottom = frame.py(frame.y_min),
        );
    }

    // Axes, labels and title.
    let _ = writeln!(
        svg,
        r#"<rect x="{MARGIN_LEFT}" y="{MARGIN_TOP}" width="{:.2}" height="{:.2}" fill="none" stroke="black"/>"#,
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">x</text>"#,
        (MARGIN_LEFT + WIDTH - MARGIN_RIGHT) / 2.0,
        HEIGHT - 15.0,
    );
    let _ = writeln!(
        svg,
        r#"<text x="20" y="{:.2}" text-anchor="middle" transform="rotate(-90 20 {:.2})">f(x)</text>"#,
        HEIGHT / 2.0,
        HEIGHT / 2.0,
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.2}" y="30" text-anchor="middle" font-size="16">Integration of {FORMULA} from {a} to {b}</text>"#,
        WIDTH / 2.0,
    );
    svg.push_str("</svg>\n");

    Ok(svg)
}

/// Renders the plot for `a` to `b` and writes it to `path`.
pub fn save_plot(a: f64, b: f64, path: impl AsRef<Path>) -> Result<(), PlotError> {
    let path = path.as_ref();
    let svg = render_svg(a, b)?;
    std::fs::write(path, svg).map_err(|source| PlotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "Plot saved");
    Ok(())
}
