// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::ensure;
use crate::errors::ToolError;
use crate::model::{RecordField, ToolParameters, TransformResult};
use crate::traits::{Tool, ToolCategory};
use crate::utils::{format_number, round_to};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    /// a% of b
    PercentOf,
    /// a is what percent of b
    WhatPercent,
    /// percent change from a to b
    Change,
}

impl Mode {
    fn parse(raw: &str) -> Result<Self, ToolError> {
        match raw {
            "percent_of" => Ok(Mode::PercentOf),
            "what_percent" => Ok(Mode::WhatPercent),
            "change" | "percent_change" => Ok(Mode::Change),
            other => Err(ToolError::validation(format!(
                "Unknown calculation mode '{}'",
                other
            ))),
        }
    }
}

pub struct PercentageCalculator;

impl PercentageCalculator {
    pub fn new() -> Self {
        Self
    }

    fn parse(&self, params: &ToolParameters) -> Result<(Mode, f64, f64), ToolError> {
        let mode = Mode::parse(&params.choice("mode", "percent_of"))?;
        let a = params.required_number("a", "Please enter the first value")?;
        let b = params.required_number("b", "Please enter the second value")?;

        match mode {
            Mode::WhatPercent if b == 0.0 => {
                Err(ToolError::range("Cannot calculate a percentage of zero"))
            }
            Mode::Change if a == 0.0 => {
                Err(ToolError::range("Cannot calculate percent change from zero"))
            }
            _ => {
                ensure(
                    compute(mode, a, b).is_finite(),
                    "These values are too large to calculate",
                )?;
                Ok((mode, a, b))
            }
        }
    }
}

fn compute(mode: Mode, a: f64, b: f64) -> f64 {
    match mode {
        Mode::PercentOf => a / 100.0 * b,
        Mode::WhatPercent => a / b * 100.0,
        Mode::Change => (b - a) / a.abs() * 100.0,
    }
}

impl Default for PercentageCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for PercentageCalculator {
    fn name(&self) -> &'static str {
        "percentage_calculator"
    }

    fn description(&self) -> &'static str {
        "Percent of a value, ratio as a percent, and percent change"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Calculator
    }

    fn validate(&self, params: &ToolParameters) -> Result<(), ToolError> {
        self.parse(params).map(|_| ())
    }

    fn transform(&self, params: &ToolParameters) -> Result<TransformResult, ToolError> {
        let (mode, a, b) = self.parse(params)?;
        let fa = format_number(a, 2);
        let fb = format_number(b, 2);

        let value = compute(mode, a, b);

        let summary = match mode {
            Mode::PercentOf => format!("{}% of {} is {}", fa, fb, format_number(value, 2)),
            Mode::WhatPercent => format!("{} is {}% of {}", fa, format_number(value, 2), fb),
            Mode::Change => {
                let direction = if value >= 0.0 { "increase" } else { "decrease" };
                format!(
                    "From {} to {} is a {}% {}",
                    fa,
                    fb,
                    format_number(value.abs(), 2),
                    direction
                )
            }
        };

        Ok(TransformResult::record(vec![
            RecordField::number("result", "Result", round_to(value, 2), format_number(value, 2)),
            RecordField::text("summary", "Summary", summary),
        ]))
    }
}
