// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::ensure;
use crate::errors::ToolError;
use crate::model::{RecordField, ToolParameters, TransformResult};
use crate::traits::{RenderHints, Tool, ToolCategory};
use crate::utils::{format_number, round_to};

#[derive(Debug, Clone, Copy, PartialEq)]
enum UnitSystem {
    /// kilograms and centimeters
    Metric,
    /// pounds and inches
    Imperial,
}

pub struct BmiCalculator;

impl BmiCalculator {
    pub fn new() -> Self {
        Self
    }

    fn parse(&self, params: &ToolParameters) -> Result<(UnitSystem, f64, f64), ToolError> {
        let unit = match params.choice("unit", "metric").as_str() {
            "metric" => UnitSystem::Metric,
            "imperial" => UnitSystem::Imperial,
            other => {
                return Err(ToolError::validation(format!("Unknown unit system '{}'", other)))
            }
        };
        let weight = params.required_number("weight", "Please enter your weight")?;
        let height = params.required_number("height", "Please enter your height")?;
        ensure(
            weight > 0.0 && height > 0.0,
            "Weight and height must be positive numbers",
        )?;
        ensure(
            bmi(weight, height, unit == UnitSystem::Metric).is_finite(),
            "Weight and height are outside the range this calculator supports",
        )?;
        Ok((unit, weight, height))
    }
}

impl Default for BmiCalculator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn bmi(weight: f64, height: f64, metric: bool) -> f64 {
    if metric {
        let meters = height / 100.0;
        weight / (meters * meters)
    } else {
        703.0 * weight / (height * height)
    }
}

pub fn category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal Weight"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

impl Tool for BmiCalculator {
    fn name(&self) -> &'static str {
        "bmi_calculator"
    }

    fn description(&self) -> &'static str {
        "Body mass index and weight category"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Calculator
    }

    fn validate(&self, params: &ToolParameters) -> Result<(), ToolError> {
        self.parse(params).map(|_| ())
    }

    fn transform(&self, params: &ToolParameters) -> Result<TransformResult, ToolError> {
        let (unit, weight, height) = self.parse(params)?;
        let value = round_to(bmi(weight, height, unit == UnitSystem::Metric), 2);

        Ok(TransformResult::record(vec![
            RecordField::number("bmi", "BMI", value, format_number(value, 2)),
            RecordField::text("category", "Category", category(value)),
        ]))
    }

    fn render_hints(&self) -> RenderHints {
        RenderHints {
            title: "Your BMI",
            downloadable: false,
            ..RenderHints::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_reference_value() {
        let tool = BmiCalculator::new();
        let params = ToolParameters::new()
            .with_number("weight", 70.0)
            .with_number("height", 175.0)
            .with_choice("unit", "metric");

        let first = tool.transform(&params).unwrap();
        assert_eq!(first.value("bmi"), Some(22.86));
        assert_eq!(first.display("category"), Some("Normal Weight"));
        assert_eq!(tool.transform(&params).unwrap(), first);
    }

    #[test]
    fn imperial_units() {
        let tool = BmiCalculator::new();
        let params = ToolParameters::new()
            .with_number("weight", 154.0)
            .with_number("height", 69.0)
            .with_choice("unit", "imperial");

        let result = tool.transform(&params).unwrap();
        assert_eq!(result.value("bmi"), Some(22.74));
    }

    #[test]
    fn categories() {
        let cases = vec![
            (17.0, "Underweight"),
            (18.5, "Normal Weight"),
            (24.99, "Normal Weight"),
            (25.0, "Overweight"),
            (30.0, "Obese"),
        ];
        for (value, expected) in cases {
            assert_eq!(category(value), expected, "bmi {value}");
        }
    }

    #[test]
    fn invalid_input() {
        let tool = BmiCalculator::new();
        let zero = ToolParameters::new()
            .with_number("weight", 0.0)
            .with_number("height", 175.0);
        assert!(matches!(tool.validate(&zero), Err(ToolError::Range(_))));

        let overflow = ToolParameters::new()
            .with_number("weight", 1e308)
            .with_number("height", 1e-300);
        assert_eq!(
            tool.validate(&overflow),
            Err(ToolError::range(
                "Weight and height are outside the range this calculator supports"
            ))
        );
        assert!(tool.transform(&overflow).is_err());

        let missing = ToolParameters::new().with_number("height", 175.0);
        assert_eq!(
            tool.validate(&missing),
            Err(ToolError::validation("Please enter your weight"))
        );
    }
}
