// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::ensure;
use crate::errors::ToolError;
use crate::model::{RecordField, ToolParameters, TransformResult};
use crate::traits::{RenderHints, Tool, ToolCategory};
use crate::utils::{format_currency, round_to};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Annually,
}

impl PaymentFrequency {
    pub fn parse(raw: &str) -> Result<Self, ToolError> {
        match raw {
            "weekly" => Ok(Self::Weekly),
            "biweekly" | "bi_weekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "annually" | "yearly" => Ok(Self::Annually),
            other => Err(ToolError::validation(format!(
                "Unknown payment frequency '{}'",
                other
            ))),
        }
    }

    pub fn periods_per_year(self) -> u32 {
        match self {
            Self::Weekly => 52,
            Self::Biweekly => 26,
            Self::Monthly => 12,
            Self::Quarterly => 4,
            Self::Annually => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Biweekly => "Biweekly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Annually => "Annually",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
    pub frequency: PaymentFrequency,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanSummary {
    pub payment: f64,
    pub periods: u32,
    pub total_payment: f64,
    pub total_interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationRow {
    pub period: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

impl LoanTerms {
    fn periodic_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / self.frequency.periods_per_year() as f64
    }

    fn periods(&self) -> u32 {
        (self.term_years * self.frequency.periods_per_year() as f64)
            .round()
            .max(1.0) as u32
    }

    /// Level payment: `P·r / (1 − (1 + r)^−n)`, or `P / n` at zero interest.
    pub fn summary(&self) -> LoanSummary {
        let n = self.periods();
        let r = self.periodic_rate();
        let payment = if r == 0.0 {
            self.principal / n as f64
        } else {
            self.principal * r / (1.0 - (1.0 + r).powi(-(n as i32)))
        };
        let total_payment = payment * n as f64;

        LoanSummary {
            payment,
            periods: n,
            total_payment,
            total_interest: total_payment - self.principal,
        }
    }

    pub fn amortization_schedule(&self) -> Vec<AmortizationRow> {
        let summary = self.summary();
        let r = self.periodic_rate();
        let mut balance = self.principal;

        (1..=summary.periods)
            .map(|period| {
                let interest = balance * r;
                let principal = if period == summary.periods {
                    balance
                } else {
                    summary.payment - interest
                };
                balance = (balance - principal).max(0.0);
                AmortizationRow {
                    period,
                    payment: principal + interest,
                    principal,
                    interest,
                    balance,
                }
            })
            .collect()
    }
}

/// Level-payment loan calculator with an optional amortization table.
pub struct LoanCalculator {
    currency_symbol: String,
}

impl LoanCalculator {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    fn parse(&self, params: &ToolParameters) -> Result<LoanTerms, ToolError> {
        let principal = params.required_number("principal", "Please enter the loan amount")?;
        let annual_rate_percent =
            params.required_number("annual_rate", "Please enter the interest rate")?;
        let term_years = params.required_number("term_years", "Please enter the loan term")?;
        let frequency = PaymentFrequency::parse(&params.choice("frequency", "monthly"))?;

        ensure(principal > 0.0, "Loan amount must be greater than zero")?;
        ensure(
            (0.0..=100.0).contains(&annual_rate_percent),
            "Interest rate must be between 0 and 100",
        )?;
        ensure(
            term_years > 0.0 && term_years <= 100.0,
            "Loan term must be between 0 and 100 years",
        )?;

        let terms = LoanTerms {
            principal,
            annual_rate_percent,
            term_years,
            frequency,
        };
        let summary = terms.summary();
        ensure(
            summary.payment.is_finite() && summary.total_payment.is_finite(),
            "Loan amount is too large to calculate",
        )?;
        Ok(terms)
    }

    fn money(&self, value: f64) -> String {
        format_currency(value, &self.currency_symbol)
    }

    fn schedule_table(&self, terms: &LoanTerms) -> TransformResult {
        let headers = ["Period", "Payment", "Principal", "Interest", "Balance"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let rows = terms
            .amortization_schedule()
            .iter()
            .map(|row| {
                vec![
                    row.period.to_string(),
                    self.money(row.payment),
                    self.money(row.principal),
                    self.money(row.interest),
                    self.money(row.balance),
                ]
            })
            .collect();
        TransformResult::Table { headers, rows }
    }
}

impl Default for LoanCalculator {
    fn default() -> Self {
        Self::new(crate::config::consts::DEFAULT_CURRENCY_SYMBOL)
    }
}

impl Tool for LoanCalculator {
    fn name(&self) -> &'static str {
        "loan_calculator"
    }

    fn description(&self) -> &'static str {
        "Loan payment, total cost and amortization schedule"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Calculator
    }

    fn validate(&self, params: &ToolParameters) -> Result<(), ToolError> {
        self.parse(params).map(|_| ())
    }

    fn transform(&self, params: &ToolParameters) -> Result<TransformResult, ToolError> {
        let terms = self.parse(params)?;

        if matches!(params.choice("schedule", "no").as_str(), "yes" | "true") {
            return Ok(self.schedule_table(&terms));
        }

        let summary = terms.summary();
        Ok(TransformResult::record(vec![
            RecordField::number(
                "payment",
                &format!("{} payment", terms.frequency.label()),
                summary.payment,
                self.money(summary.payment),
            ),
            RecordField::number(
                "periods",
                "Number of payments",
                summary.periods as f64,
                summary.periods.to_string(),
            ),
            RecordField::number(
                "total_payment",
                "Total of payments",
                summary.total_payment,
                self.money(summary.total_payment),
            ),
            RecordField::number(
                "total_interest",
                "Total interest",
                summary.total_interest,
                self.money(summary.total_interest),
            ),
            RecordField::number(
                "interest_share",
                "Interest share of total",
                round_to(summary.total_interest / summary.total_payment * 100.0, 2),
                format!(
                    "{:.2}%",
                    summary.total_interest / summary.total_payment * 100.0
                ),
            ),
        ]))
    }

    fn render_hints(&self) -> RenderHints {
        RenderHints {
            title: "Loan Summary",
            ..RenderHints::default()
        }
    }
}
