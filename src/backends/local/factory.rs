// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::tools::*;
use crate::config::consts::DEFAULT_CURRENCY_SYMBOL;
use crate::config::ToolConfig;
use crate::errors::ToolFactoryError;
use crate::observability::messages::tool::ToolInstantiationFailed;
use crate::observability::messages::StructuredLog;
use crate::traits::Tool;

const CURRENCY_OPTION: &str = "currency_symbol";

/// Factory for creating built-in tool instances
pub struct LocalToolFactory;

impl LocalToolFactory {
    /// Create a tool instance from configuration
    ///
    /// The `impl_` field names the implementation; see
    /// [`list_available_implementations`](Self::list_available_implementations).
    /// `loan_calculator`, `margin_calculator` and `keyword_research` accept a
    /// `currency_symbol` string option. Other options are ignored.
    pub fn create_tool(config: &ToolConfig) -> Result<Arc<dyn Tool>, ToolFactoryError> {
        Self::build(config).inspect_err(|e| {
            ToolInstantiationFailed {
                tool_id: &config.id,
                implementation: &config.impl_,
                reason: &e.to_string(),
            }
            .log();
        })
    }

    fn build(config: &ToolConfig) -> Result<Arc<dyn Tool>, ToolFactoryError> {
        let tool: Arc<dyn Tool> = match config.impl_.as_str() {
            // Calculators
            "age_calculator" => Arc::new(AgeCalculator::new()),
            "percentage_calculator" => Arc::new(PercentageCalculator::new()),
            "margin_calculator" => Arc::new(MarginCalculator::new(currency_symbol(config)?)),
            "bmi_calculator" => Arc::new(BmiCalculator::new()),
            "loan_calculator" => Arc::new(LoanCalculator::new(currency_symbol(config)?)),
            "confidence_interval_calculator" => Arc::new(ConfidenceIntervalCalculator::new()),

            // Generators
            "essay_writer" => Arc::new(EssayWriter::new()),
            "paragraph_writer" => Arc::new(ParagraphWriter::new()),
            "logo_maker" => Arc::new(LogoMaker::new()),

            // Rewriters
            "paraphraser" => Arc::new(Paraphraser::new()),
            "rewording_tool" => Arc::new(RewordingTool::new()),
            "sentence_changer" => Arc::new(SentenceChanger::new()),

            // Checkers
            "grammar_checker" => Arc::new(GrammarChecker::new()),
            "punctuation_checker" => Arc::new(PunctuationChecker::new()),
            "sentence_checker" => Arc::new(SentenceChecker::new()),

            // Research
            "keyword_research" => Arc::new(KeywordResearch::new(currency_symbol(config)?)),

            _ => {
                return Err(ToolFactoryError::UnknownImplementation {
                    tool_id: config.id.clone(),
                    implementation: config.impl_.clone(),
                })
            }
        };
        Ok(tool)
    }

    /// List all available tool implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec![
            "age_calculator",
            "percentage_calculator",
            "margin_calculator",
            "bmi_calculator",
            "loan_calculator",
            "confidence_interval_calculator",
            "essay_writer",
            "paragraph_writer",
            "logo_maker",
            "paraphraser",
            "rewording_tool",
            "sentence_changer",
            "grammar_checker",
            "punctuation_checker",
            "sentence_checker",
            "keyword_research",
        ]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(impl_name: &str) -> bool {
        Self::list_available_implementations().contains(&impl_name)
    }
}

fn currency_symbol(config: &ToolConfig) -> Result<String, ToolFactoryError> {
    match config.options.get(CURRENCY_OPTION) {
        None => Ok(DEFAULT_CURRENCY_SYMBOL.to_string()),
        Some(serde_yaml::Value::String(symbol)) if !symbol.trim().is_empty() => {
            Ok(symbol.trim().to_string())
        }
        Some(_) => Err(ToolFactoryError::InvalidOption {
            tool_id: config.id.clone(),
            option: CURRENCY_OPTION.to_string(),
            reason: "expected a non-empty string".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToolParameters;

    #[test]
    fn every_listed_implementation_builds_under_its_own_name() {
        for impl_name in LocalToolFactory::list_available_implementations() {
            let tool = LocalToolFactory::create_tool(&ToolConfig::new("t", impl_name))
                .unwrap_or_else(|e| panic!("{impl_name}: {e}"));
            assert_eq!(tool.name(), impl_name);
        }
    }

    #[test]
    fn unknown_implementation() {
        let err = LocalToolFactory::create_tool(&ToolConfig::new("x", "fortune_teller"))
            .err()
            .unwrap();
        assert_eq!(
            err,
            ToolFactoryError::UnknownImplementation {
                tool_id: "x".into(),
                implementation: "fortune_teller".into()
            }
        );
        assert!(!LocalToolFactory::is_implementation_available("fortune_teller"));
    }

    #[test]
    fn currency_option() {
        let config = ToolConfig::new("margin", "margin_calculator").with_option("currency_symbol", "€");
        let tool = LocalToolFactory::create_tool(&config).unwrap();
        let params = ToolParameters::new()
            .with_number("cost", 60.0)
            .with_number("revenue", 100.0);
        let result = tool.transform(&params).unwrap();
        assert!(result.display("profit").is_some_and(|d| d.starts_with('€')));

        let bad = ToolConfig::new("loan", "loan_calculator").with_option("currency_symbol", true);
        assert!(matches!(
            LocalToolFactory::create_tool(&bad),
            Err(ToolFactoryError::InvalidOption { option, .. }) if option == "currency_symbol"
        ));
    }
}
