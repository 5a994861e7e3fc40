// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::errors::ToolError;
use crate::model::{RecordField, ToolParameters, TransformResult};
use crate::traits::{RenderHints, Tool, ToolCategory};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Age in whole years, months and days between a birth date and a
/// comparison date (today unless `as_of` is given).
pub struct AgeCalculator {
    fixed_today: Option<NaiveDate>,
}

struct AgeInput {
    birth: NaiveDate,
    as_of: NaiveDate,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Age {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
    pub days_to_next_birthday: i64,
}

impl AgeCalculator {
    pub fn new() -> Self {
        Self { fixed_today: None }
    }

    /// Calculator whose "today" never moves.
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            fixed_today: Some(today),
        }
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    fn parse(&self, params: &ToolParameters) -> Result<AgeInput, ToolError> {
        let raw_birth = params.required_text("birth_date", "Please enter a birth date")?;
        let birth = NaiveDate::parse_from_str(raw_birth, DATE_FORMAT).map_err(|_| {
            ToolError::validation("Please enter a valid birth date (YYYY-MM-DD)")
        })?;

        let as_of = match params.optional_text("as_of") {
            Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
                ToolError::validation("Please enter a valid comparison date (YYYY-MM-DD)")
            })?,
            None => self.today(),
        };

        if birth > as_of {
            return Err(ToolError::range("Birth date cannot be in the future"));
        }

        Ok(AgeInput { birth, as_of })
    }
}

impl Default for AgeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole months from `birth` to `as_of`, then the remaining days.
pub fn age_between(birth: NaiveDate, as_of: NaiveDate) -> Age {
    let mut months = (as_of.year() - birth.year()) * 12 + as_of.month() as i32 - birth.month() as i32;
    let mut anchor = add_months(birth, months);
    if anchor > as_of {
        months -= 1;
        anchor = add_months(birth, months);
    }
    let months = months.max(0) as u32;

    Age {
        years: months / 12,
        months: months % 12,
        days: (as_of - anchor).num_days().max(0) as u32,
        total_days: (as_of - birth).num_days(),
        days_to_next_birthday: days_to_next_birthday(birth, as_of),
    }
}

fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    date.checked_add_months(Months::new(months.max(0) as u32))
        .unwrap_or(date)
}

fn days_to_next_birthday(birth: NaiveDate, as_of: NaiveDate) -> i64 {
    [as_of.year(), as_of.year() + 1]
        .into_iter()
        .filter_map(|year| {
            // Feb 29 birthdays fall on Mar 1 in common years
            NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
                .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        })
        .find(|birthday| *birthday >= as_of)
        .map(|birthday| (birthday - as_of).num_days())
        .unwrap_or(0)
}

impl Tool for AgeCalculator {
    fn name(&self) -> &'static str {
        "age_calculator"
    }

    fn description(&self) -> &'static str {
        "Exact age in years, months and days"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Calculator
    }

    fn validate(&self, params: &ToolParameters) -> Result<(), ToolError> {
        self.parse(params).map(|_| ())
    }

    fn transform(&self, params: &ToolParameters) -> Result<TransformResult, ToolError> {
        let input = self.parse(params)?;
        let age = age_between(input.birth, input.as_of);

        Ok(TransformResult::record(vec![
            RecordField::text(
                "age",
                "Age",
                format!("{} years, {} months, {} days", age.years, age.months, age.days),
            ),
            RecordField::number("years", "Years", age.years as f64, age.years.to_string()),
            RecordField::number("months", "Months", age.months as f64, age.months.to_string()),
            RecordField::number("days", "Days", age.days as f64, age.days.to_string()),
            RecordField::number(
                "total_days",
                "Total days",
                age.total_days as f64,
                crate::utils::format_number(age.total_days as f64, 0),
            ),
            RecordField::number(
                "next_birthday_in_days",
                "Days until next birthday",
                age.days_to_next_birthday as f64,
                age.days_to_next_birthday.to_string(),
            ),
        ]))
    }

    fn render_hints(&self) -> RenderHints {
        RenderHints {
            title: "Your Age",
            ..RenderHints::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn none_birth_date_is_rejected() {
        let tool = AgeCalculator::with_today(date(2024, 6, 1));
        let params = ToolParameters::new().with_text("birth_date", "none");

        let err = tool.transform(&params).unwrap_err();
        assert_eq!(err, ToolError::validation("Please enter a birth date"));
        assert_eq!(tool.validate(&params), Err(err));
    }

    #[test]
    fn malformed_and_future_dates() {
        let tool = AgeCalculator::with_today(date(2024, 6, 1));

        let malformed = ToolParameters::new().with_text("birth_date", "01/02/1990");
        assert_eq!(
            tool.validate(&malformed),
            Err(ToolError::validation("Please enter a valid birth date (YYYY-MM-DD)"))
        );

        let future = ToolParameters::new().with_text("birth_date", "2030-01-01");
        assert_eq!(
            tool.validate(&future),
            Err(ToolError::range("Birth date cannot be in the future"))
        );
    }

    #[test]
    fn age_breakdown() {
        struct Case {
            birth: NaiveDate,
            as_of: NaiveDate,
            expected: (u32, u32, u32),
        }

        let cases = vec![
            Case { birth: date(1990, 5, 15), as_of: date(2024, 6, 1), expected: (34, 0, 17) },
            Case { birth: date(2000, 1, 31), as_of: date(2000, 3, 1), expected: (0, 1, 1) },
            Case { birth: date(1990, 6, 1), as_of: date(2024, 6, 1), expected: (34, 0, 0) },
            Case { birth: date(1990, 12, 25), as_of: date(2024, 6, 1), expected: (33, 5, 7) },
        ];

        for case in cases {
            let age = age_between(case.birth, case.as_of);
            assert_eq!((age.years, age.months, age.days), case.expected, "birth {}", case.birth);
        }
    }

    #[test]
    fn next_birthday_and_leap_day() {
        let age = age_between(date(1990, 6, 1), date(2024, 6, 1));
        assert_eq!(age.days_to_next_birthday, 0);

        let leapling = age_between(date(2000, 2, 29), date(2023, 2, 28));
        assert_eq!(leapling.days_to_next_birthday, 1);
    }

    #[test]
    fn record_output_uses_as_of() {
        let tool = AgeCalculator::new();
        let params = ToolParameters::new()
            .with_text("birth_date", "2000-01-01")
            .with_text("as_of", "2010-01-01");

        let result = tool.transform(&params).unwrap();
        assert_eq!(result.display("age"), Some("10 years, 0 months, 0 days"));
        assert_eq!(result.value("total_days"), Some(3653.0));
    }
}
