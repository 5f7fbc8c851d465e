//! Server-side SVG geometry for the two chart slides.
//!
//! Both charts share one frame: a fixed viewBox with padding for the month
//! labels underneath. Values are scaled linearly on `[0, max]`; negative or
//! non-finite amounts sit on the baseline. Series order is kept as given.

use crate::models::review::MonthlyAmount;
use crate::presentation::format;

pub const CHART_WIDTH: f64 = 360.0;
pub const CHART_HEIGHT: f64 = 300.0;

const PAD_X: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 28.0;
const GRID_LINES: usize = 5;
const MAX_BAR_WIDTH: f64 = 20.0;

pub const BAR_FILL_EVEN: &str = "#ef4444";
pub const BAR_FILL_ODD: &str = "#b91c1c";

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub x: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub month: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AreaChart {
    pub line_path: String,
    pub area_path: String,
    pub points: Vec<ChartPoint>,
    pub labels: Vec<AxisLabel>,
    pub grid: Vec<f64>,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub month: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub labels: Vec<AxisLabel>,
    pub grid: Vec<f64>,
    pub label_y: f64,
}

struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    max: f64,
}

impl Frame {
    fn for_series(series: &[MonthlyAmount]) -> Self {
        let max = series
            .iter()
            .map(|m| clean(m.amount))
            .fold(0.0_f64, f64::max);
        Frame {
            left: PAD_X,
            top: PAD_TOP,
            width: CHART_WIDTH - 2.0 * PAD_X,
            height: CHART_HEIGHT - PAD_TOP - PAD_BOTTOM,
            max: if max > 0.0 { max } else { 1.0 },
        }
    }

    fn baseline(&self) -> f64 {
        self.top + self.height
    }

    fn scaled_height(&self, amount: f64) -> f64 {
        clean(amount) / self.max * self.height
    }

    fn grid(&self) -> Vec<f64> {
        (0..GRID_LINES)
            .map(|k| round2(self.top + self.height * k as f64 / (GRID_LINES - 1) as f64))
            .collect()
    }

    fn label_y(&self) -> f64 {
        round2(self.baseline() + PAD_BOTTOM * 0.65)
    }
}

fn clean(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl AreaChart {
    pub fn build(series: &[MonthlyAmount]) -> Self {
        let frame = Frame::for_series(series);
        let n = series.len();
        let step = if n > 1 { frame.width / (n - 1) as f64 } else { 0.0 };

        let coords: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let x = if n > 1 { frame.left + step * i as f64 } else { frame.left + frame.width / 2.0 };
                (x, frame.baseline() - frame.scaled_height(m.amount))
            })
            .collect();

        let line_path = monotone_path(&coords);
        let area_path = match (coords.first(), coords.last()) {
            (Some(first), Some(last)) => format!(
                "{line_path} L {:.2} {:.2} L {:.2} {:.2} Z",
                last.0,
                frame.baseline(),
                first.0,
                frame.baseline()
            ),
            _ => String::new(),
        };

        let points: Vec<ChartPoint> = series
            .iter()
            .zip(&coords)
            .map(|(m, &(x, y))| ChartPoint {
                x: round2(x),
                y: round2(y),
                month: m.month.clone(),
                value: format::grouped(m.amount),
            })
            .collect();
        let labels = points.iter().map(|p| AxisLabel { x: p.x, text: p.month.clone() }).collect();

        AreaChart {
            line_path,
            area_path,
            points,
            labels,
            grid: frame.grid(),
            label_y: frame.label_y(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl BarChart {
    pub fn build(series: &[MonthlyAmount]) -> Self {
        let frame = Frame::for_series(series);
        let band = if series.is_empty() { 0.0 } else { frame.width / series.len() as f64 };
        let bar_width = MAX_BAR_WIDTH.min(band * 0.8);

        let bars: Vec<Bar> = series
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let height = frame.scaled_height(m.amount);
                Bar {
                    x: round2(frame.left + band * i as f64 + (band - bar_width) / 2.0),
                    y: round2(frame.baseline() - height),
                    width: round2(bar_width),
                    height: round2(height),
                    fill: if i % 2 == 0 { BAR_FILL_EVEN } else { BAR_FILL_ODD },
                    month: m.month.clone(),
                    value: format::grouped(m.amount),
                }
            })
            .collect();
        let labels = bars
            .iter()
            .map(|b| AxisLabel { x: round2(b.x + b.width / 2.0), text: b.month.clone() })
            .collect();

        BarChart {
            bars,
            labels,
            grid: frame.grid(),
            label_y: frame.label_y(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Cubic path through `points` that never overshoots between samples
/// (monotone in y along x).
fn monotone_path(points: &[(f64, f64)]) -> String {
    match points {
        [] => String::new(),
        [(x, y)] => format!("M {x:.2} {y:.2}"),
        [(x0, y0), (x1, y1)] => format!("M {x0:.2} {y0:.2} L {x1:.2} {y1:.2}"),
        _ => {
            let n = points.len();
            let mut tangents = vec![0.0; n];
            for i in 1..n - 1 {
                tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
            }
            tangents[0] = end_tangent(points[0], points[1], tangents[1]);
            tangents[n - 1] = end_tangent(points[n - 2], points[n - 1], tangents[n - 2]);

            let mut path = format!("M {:.2} {:.2}", points[0].0, points[0].1);
            for i in 0..n - 1 {
                let (x0, y0) = points[i];
                let (x1, y1) = points[i + 1];
                let dx = (x1 - x0) / 3.0;
                path.push_str(&format!(
                    " C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                    x0 + dx,
                    y0 + dx * tangents[i],
                    x1 - dx,
                    y1 - dx * tangents[i + 1],
                    x1,
                    y1
                ));
            }
            path
        }
    }
}

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

fn interior_tangent(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    if h0 == 0.0 || h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.1 - p0.1) / h0;
    let s1 = (p2.1 - p1.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() { t } else { 0.0 }
}

fn end_tangent(a: (f64, f64), b: (f64, f64), neighbour: f64) -> f64 {
    let h = b.0 - a.0;
    if h == 0.0 { neighbour } else { (3.0 * (b.1 - a.1) / h - neighbour) / 2.0 }
}
