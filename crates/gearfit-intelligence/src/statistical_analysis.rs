// ABOUTME: Ordinary least squares linear regression for growth trend calculations
// ABOUTME: Returns slope, intercept and goodness of fit, or None for degenerate input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are far below f64 mantissa precision

use serde::{Deserialize, Serialize};

/// A single `(x, y)` observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Independent variable
    pub x: f64,
    /// Dependent variable
    pub y: f64,
}

impl DataPoint {
    /// Create an observation
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Linear regression results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionResult {
    /// Slope of the regression line (rate of change)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
    /// Number of observations used
    pub sample_size: usize,
}

impl RegressionResult {
    /// Predicted `y` at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Statistical analyzer for trend calculations
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Least squares fit of `y` against `x`
    ///
    /// Returns `None` when fewer than two points are supplied or every `x` is
    /// identical, so callers never divide by zero.
    #[must_use]
    pub fn linear_regression(data_points: &[DataPoint]) -> Option<RegressionResult> {
        if data_points.len() < 2 {
            return None;
        }

        let n = data_points.len() as f64;
        let mean_x = data_points.iter().map(|p| p.x).sum::<f64>() / n;
        let mean_y = data_points.iter().map(|p| p.y).sum::<f64>() / n;

        let (sxx, sxy, syy) = data_points.iter().fold((0.0, 0.0, 0.0), |(sxx, sxy, syy), p| {
            let dx = p.x - mean_x;
            let dy = p.y - mean_y;
            (dx.mul_add(dx, sxx), dx.mul_add(dy, sxy), dy.mul_add(dy, syy))
        });

        if sxx.abs() < f64::EPSILON {
            return None;
        }

        let slope = sxy / sxx;
        let intercept = slope.mul_add(-mean_x, mean_y);
        let r_squared = if syy.abs() < f64::EPSILON {
            1.0
        } else {
            (sxy * sxy) / (sxx * syy)
        };

        Some(RegressionResult {
            slope,
            intercept,
            r_squared,
            sample_size: data_points.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_line() {
        let points: Vec<DataPoint> = (0..5)
            .map(|i| DataPoint::new(f64::from(i), 2.0f64.mul_add(f64::from(i), 1.0)))
            .collect();
        let result = StatisticalAnalyzer::linear_regression(&points).unwrap();
        assert!((result.slope - 2.0).abs() < 1e-9);
        assert!((result.intercept - 1.0).abs() < 1e-9);
        assert!((result.r_squared - 1.0).abs() < 1e-9);
        assert!((result.predict(10.0) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(StatisticalAnalyzer::linear_regression(&[DataPoint::new(1.0, 2.0)]).is_none());
        let same_x = [DataPoint::new(3.0, 1.0), DataPoint::new(3.0, 5.0)];
        assert!(StatisticalAnalyzer::linear_regression(&same_x).is_none());
    }
}
