// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::ensure;
use crate::errors::ToolError;
use crate::model::{RecordField, ToolParameters, TransformResult};
use crate::traits::{Tool, ToolCategory};
use crate::utils::format_number;

const DEFAULT_CONFIDENCE_LEVEL: f64 = 95.0;

/// Confidence interval for a mean with known standard deviation (z interval).
pub struct ConfidenceIntervalCalculator;

struct IntervalInput {
    mean: f64,
    std_dev: f64,
    sample_size: f64,
    level: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub margin_of_error: f64,
    pub z_score: f64,
}

impl ConfidenceIntervalCalculator {
    pub fn new() -> Self {
        Self
    }

    fn parse(&self, params: &ToolParameters) -> Result<IntervalInput, ToolError> {
        let mean = params.required_number("mean", "Please enter the sample mean")?;
        let std_dev = params.required_number("std_dev", "Please enter the standard deviation")?;
        let sample_size = params.required_number("sample_size", "Please enter the sample size")?;
        let level = params
            .optional_number("confidence_level")?
            .unwrap_or(DEFAULT_CONFIDENCE_LEVEL);

        ensure(std_dev > 0.0, "Standard deviation must be positive")?;
        ensure(sample_size > 0.0, "Sample size must be positive")?;
        ensure(
            level > 0.0 && level < 100.0,
            "Confidence level must be between 0 and 100",
        )?;
        let bounds = interval(mean, std_dev, sample_size, level);
        ensure(
            bounds.lower_bound.is_finite() && bounds.upper_bound.is_finite(),
            "These values are too large to calculate",
        )?;

        Ok(IntervalInput {
            mean,
            std_dev,
            sample_size,
            level,
        })
    }
}

impl Default for ConfidenceIntervalCalculator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn interval(mean: f64, std_dev: f64, sample_size: f64, level_percent: f64) -> Interval {
    let z_score = inverse_normal_cdf((1.0 + level_percent / 100.0) / 2.0);
    let margin_of_error = z_score * std_dev / sample_size.sqrt();
    Interval {
        lower_bound: mean - margin_of_error,
        upper_bound: mean + margin_of_error,
        margin_of_error,
        z_score,
    }
}

/// Quantile function of the standard normal distribution, using Acklam's
/// rational approximation (relative error below 1.2e-9 on (0, 1)).
pub fn inverse_normal_cdf(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];
    const P_LOW: f64 = 0.02425;

    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    let tail = |q: f64| {
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    }
}

impl Tool for ConfidenceIntervalCalculator {
    fn name(&self) -> &'static str {
        "confidence_interval_calculator"
    }

    fn description(&self) -> &'static str {
        "Confidence interval and margin of error for a sample mean"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Calculator
    }

    fn validate(&self, params: &ToolParameters) -> Result<(), ToolError> {
        self.parse(params).map(|_| ())
    }

    fn transform(&self, params: &ToolParameters) -> Result<TransformResult, ToolError> {
        let input = self.parse(params)?;
        let result = interval(input.mean, input.std_dev, input.sample_size, input.level);

        Ok(TransformResult::record(vec![
            RecordField::number(
                "lower_bound",
                "Lower bound",
                result.lower_bound,
                format_number(result.lower_bound, 4),
            ),
            RecordField::number(
                "upper_bound",
                "Upper bound",
                result.upper_bound,
                format_number(result.upper_bound, 4),
            ),
            RecordField::number(
                "margin_of_error",
                "Margin of error",
                result.margin_of_error,
                format!("±{}", format_number(result.margin_of_error, 4)),
            ),
            RecordField::number("z_score", "Z score", result.z_score, format_number(result.z_score, 4)),
            RecordField::text(
                "interval",
                "Interval",
                format!(
                    "{}% CI: [{}, {}]",
                    format_number(input.level, 1),
                    format_number(result.lower_bound, 4),
                    format_number(result.upper_bound, 4)
                ),
            ),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_z_scores() {
        let cases = vec![(0.95, 1.6449), (0.975, 1.9600), (0.995, 2.5758), (0.5, 0.0)];
        for (p, expected) in cases {
            let z = inverse_normal_cdf(p);
            assert!((z - expected).abs() < 1e-4, "p {p} -> {z}");
        }
        assert!((inverse_normal_cdf(0.01) + 2.3263).abs() < 1e-4);
    }

    #[test]
    fn width_is_twice_the_margin() {
        let tool = ConfidenceIntervalCalculator::new();
        for level in [50.0, 80.0, 90.0, 95.0, 99.0, 99.9] {
            let params = ToolParameters::new()
                .with_number("mean", 100.0)
                .with_number("std_dev", 15.0)
                .with_number("sample_size", 36.0)
                .with_number("confidence_level", level);
            let result = tool.transform(&params).unwrap();

            let lower = result.value("lower_bound").unwrap();
            let upper = result.value("upper_bound").unwrap();
            let margin = result.value("margin_of_error").unwrap();
            assert!((upper - lower - 2.0 * margin).abs() < 1e-9, "level {level}");
        }
    }

    #[test]
    fn default_level_is_95() {
        let result = interval(100.0, 15.0, 36.0, 95.0);
        assert!((result.margin_of_error - 4.8999).abs() < 1e-3);

        let tool = ConfidenceIntervalCalculator::new();
        let params = ToolParameters::new()
            .with_number("mean", 100.0)
            .with_number("std_dev", 15.0)
            .with_number("sample_size", 36.0);
        let output = tool.transform(&params).unwrap();
        assert_eq!(output.value("margin_of_error"), Some(result.margin_of_error));
    }

    #[test]
    fn range_checks() {
        let tool = ConfidenceIntervalCalculator::new();
        let base = || {
            ToolParameters::new()
                .with_number("mean", 10.0)
                .with_number("std_dev", 2.0)
                .with_number("sample_size", 25.0)
        };

        let cases = vec![
            (base().with_number("confidence_level", 100.0), "Confidence level must be between 0 and 100"),
            (base().with_number("confidence_level", 0.0), "Confidence level must be between 0 and 100"),
            (base().with_number("std_dev", 0.0), "Standard deviation must be positive"),
            (base().with_number("sample_size", -4.0), "Sample size must be positive"),
            (
                base().with_number("std_dev", 1e308).with_number("sample_size", 1e-10),
                "These values are too large to calculate",
            ),
        ];
        for (params, message) in cases {
            assert_eq!(tool.validate(&params), Err(ToolError::range(message)));
        }
    }
}
