use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::SavingsProjection;

const TREND_MONTHS: usize = 12;
const TREND_START: f64 = 0.8;
const TREND_END: f64 = 1.2;
const NEXT_MONTH: f64 = 13.0;

/// Ordinary least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LinearFit {
    pub(crate) slope: f64,
    pub(crate) intercept: f64,
}

impl LinearFit {
    /// Fit over `(x, y)` pairs using centered sums. `None` with fewer than two
    /// points or when every `x` is the same.
    pub(crate) fn least_squares(points: &[(f64, f64)]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let n = points.len() as f64;
        let x_mean = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let y_mean = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
            let dx = x - x_mean;
            (sxy + dx * (y - y_mean), sxx + dx * dx)
        });
        if sxx == 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    pub(crate) fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// `num` evenly spaced values from `start` to `stop` inclusive. The last
/// value is pinned to `stop` so rounding never drifts past it.
pub(crate) fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
            values[num - 1] = stop;
            values
        }
    }
}

/// Twelve simulated months rising from 80% to 120% of `savings`, indexed 1..=12.
pub(crate) fn synthetic_trend(savings: f64) -> Vec<(f64, f64)> {
    linspace(savings * TREND_START, savings * TREND_END, TREND_MONTHS)
        .into_iter()
        .enumerate()
        .map(|(i, y)| ((i + 1) as f64, y))
        .collect()
}

/// Fit a line through the simulated trend and read it off at month 13.
pub(crate) fn project_next_month(current_savings: Decimal) -> AnalysisResult<SavingsProjection> {
    let savings = current_savings
        .to_f64()
        .ok_or(AnalysisError::InvalidInput {
            field: "Monthly savings",
            value: current_savings,
        })?;

    let trend = synthetic_trend(savings);
    let fit = LinearFit::least_squares(&trend).ok_or(AnalysisError::DivisionUndefined {
        operation: "least-squares fit",
    })?;
    let predicted = fit.predict(NEXT_MONTH);

    Ok(SavingsProjection {
        predicted,
        explanation: format!(
            "Predicted savings for next month: ${predicted:.2} \
             (linear regression over a simulated {TREND_MONTHS}-month savings trend)"
        ),
    })
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod projection_tests;
