// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Closed-form calculators. Each validates its numeric fields, then computes
//! and formats a `Record` result.

pub mod age;
pub mod bmi;
pub mod confidence_interval;
pub mod loan;
pub mod margin;
pub mod percentage;

pub use age::AgeCalculator;
pub use bmi::BmiCalculator;
pub use confidence_interval::ConfidenceIntervalCalculator;
pub use loan::LoanCalculator;
pub use margin::MarginCalculator;
pub use percentage::PercentageCalculator;

use crate::errors::ToolError;

pub(crate) fn ensure(condition: bool, message: &str) -> Result<(), ToolError> {
    if condition {
        Ok(())
    } else {
        Err(ToolError::range(message))
    }
}
