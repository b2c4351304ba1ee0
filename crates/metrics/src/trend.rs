//! Ordinary least squares trend line for the scatter overlay.

use serde::{Deserialize, Serialize};

/// A fitted linear trend `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    /// Fit a least-squares line through the points.
    ///
    /// Returns `None` when the fit is undefined: fewer than two points,
    /// mismatched lengths, or a constant x series (vertical spread has no
    /// single-valued line).
    pub fn fit(xs: &[f64], ys: &[f64]) -> Option<TrendLine> {
        if xs.len() != ys.len() || xs.len() < 2 {
            return None;
        }

        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (x, y) in xs.iter().zip(ys) {
            let dx = x - mean_x;
            sxx += dx * dx;
            sxy += dx * (y - mean_y);
        }

        if sxx <= 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        Some(TrendLine {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Evaluate the line at x.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
