// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::ensure;
use crate::errors::ToolError;
use crate::model::{RecordField, ToolParameters, TransformResult};
use crate::traits::{Tool, ToolCategory};
use crate::utils::{format_currency, format_number, round_to};

/// Gross profit, margin and markup from cost and revenue.
pub struct MarginCalculator {
    currency_symbol: String,
}

impl MarginCalculator {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    fn parse(&self, params: &ToolParameters) -> Result<(f64, f64), ToolError> {
        let cost = params.required_number("cost", "Please enter the cost")?;
        let revenue = params.required_number("revenue", "Please enter the revenue")?;
        ensure(revenue > 0.0, "Revenue must be greater than zero")?;
        ensure(cost >= 0.0, "Cost cannot be negative")?;
        let profit = revenue - cost;
        ensure(
            (profit / revenue).is_finite() && (cost == 0.0 || (profit / cost).is_finite()),
            "Cost and revenue are too far apart to calculate",
        )?;
        Ok((cost, revenue))
    }
}

impl Default for MarginCalculator {
    fn default() -> Self {
        Self::new(crate::config::consts::DEFAULT_CURRENCY_SYMBOL)
    }
}

impl Tool for MarginCalculator {
    fn name(&self) -> &'static str {
        "margin_calculator"
    }

    fn description(&self) -> &'static str {
        "Profit margin and markup from cost and revenue"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Calculator
    }

    fn validate(&self, params: &ToolParameters) -> Result<(), ToolError> {
        self.parse(params).map(|_| ())
    }

    fn transform(&self, params: &ToolParameters) -> Result<TransformResult, ToolError> {
        let (cost, revenue) = self.parse(params)?;
        let profit = revenue - cost;
        let margin = profit / revenue * 100.0;

        let mut fields = vec![
            RecordField::number(
                "profit",
                "Gross profit",
                round_to(profit, 2),
                format_currency(profit, &self.currency_symbol),
            ),
            RecordField::number(
                "margin",
                "Gross margin",
                round_to(margin, 2),
                format!("{}%", format_number(margin, 2)),
            ),
        ];

        if cost > 0.0 {
            let markup = profit / cost * 100.0;
            fields.push(RecordField::number(
                "markup",
                "Markup",
                round_to(markup, 2),
                format!("{}%", format_number(markup, 2)),
            ));
        }

        Ok(TransformResult::record(fields))
    }
}
