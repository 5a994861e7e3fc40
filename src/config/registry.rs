// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::backends::local::LocalToolFactory;
use crate::config::{Config, ToolConfig};
use crate::errors::ToolFactoryError;
use crate::observability::messages::tool::RegistryBuilt;
use crate::observability::messages::StructuredLog;
use crate::traits::Tool;

/// A registry mapping tool IDs to their implementations.
///
/// Tools are stateless, so one `Arc<dyn Tool>` is shared by every session
/// hosting it. Iteration is ordered by tool ID.
///
/// # Examples
///
/// ```
/// use the_toolbench::config::{Config, ToolConfig, ToolRegistry};
///
/// let mut config = Config::default();
/// config.tools = vec![ToolConfig::new("loan", "loan_calculator")];
///
/// let registry = ToolRegistry::from_config(&config)?;
/// assert_eq!(registry.ids(), vec!["loan"]);
/// assert_eq!(registry.get("loan").map(|t| t.name()), Some("loan_calculator"));
/// # Ok::<(), the_toolbench::errors::ToolFactoryError>(())
/// ```
#[derive(Clone, Default)]
pub struct ToolRegistry(BTreeMap<String, Arc<dyn Tool>>);

impl ToolRegistry {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Every built-in tool under its implementation name.
    pub fn builtin() -> Result<Self, ToolFactoryError> {
        let registry = Self::from_tool_configs(&builtin_configs())?;
        RegistryBuilt {
            tool_count: registry.len(),
            from_config: false,
        }
        .log();
        Ok(registry)
    }

    /// Resolve the configured tool table. An empty table means the full
    /// built-in catalog.
    pub fn from_config(cfg: &Config) -> Result<Self, ToolFactoryError> {
        if cfg.tools.is_empty() {
            return Self::builtin();
        }

        let registry = Self::from_tool_configs(&cfg.tools)?;
        RegistryBuilt {
            tool_count: registry.len(),
            from_config: true,
        }
        .log();
        Ok(registry)
    }

    fn from_tool_configs(configs: &[ToolConfig]) -> Result<Self, ToolFactoryError> {
        let mut registry = Self::new();
        for tool_config in configs {
            let tool = LocalToolFactory::create_tool(tool_config)?;
            registry.insert(tool_config.id.clone(), tool);
        }
        Ok(registry)
    }

    pub fn insert(&mut self, id: String, tool: Arc<dyn Tool>) {
        self.0.insert(id, tool);
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Tool>> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Tool>)> {
        self.0.iter().map(|(id, tool)| (id.as_str(), tool))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn builtin_configs() -> Vec<ToolConfig> {
    LocalToolFactory::list_available_implementations()
        .into_iter()
        .map(|name| ToolConfig::new(name, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ToolCategory;

    #[test]
    fn builtin_holds_every_implementation() {
        let registry = ToolRegistry::builtin().unwrap();
        let available = LocalToolFactory::list_available_implementations();

        assert_eq!(registry.len(), available.len());
        for name in available {
            assert_eq!(registry.get(name).map(|t| t.name()), Some(name));
        }
    }

    #[test]
    fn test_from_config_table_driven() {
        struct TestCase {
            name: &'static str,
            tools: Vec<ToolConfig>,
            expected_ids: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "empty table falls back to the catalog",
                tools: vec![],
                expected_ids: {
                    let mut ids = LocalToolFactory::list_available_implementations();
                    ids.sort();
                    ids
                },
            },
            TestCase {
                name: "custom ids",
                tools: vec![
                    ToolConfig::new("pct", "percentage_calculator"),
                    ToolConfig::new("checker", "grammar_checker"),
                ],
                expected_ids: vec!["checker", "pct"],
            },
            TestCase {
                name: "one implementation under two ids",
                tools: vec![
                    ToolConfig::new("loan_usd", "loan_calculator"),
                    ToolConfig::new("loan_eur", "loan_calculator")
                        .with_option("currency_symbol", "€"),
                ],
                expected_ids: vec!["loan_eur", "loan_usd"],
            },
        ];

        for test_case in test_cases {
            let cfg = Config {
                tools: test_case.tools,
                ..Config::default()
            };
            let registry = ToolRegistry::from_config(&cfg)
                .unwrap_or_else(|e| panic!("{}: {}", test_case.name, e));
            assert_eq!(registry.ids(), test_case.expected_ids, "{}", test_case.name);
        }
    }

    #[test]
    fn unknown_implementation_fails_the_build() {
        let cfg = Config {
            tools: vec![
                ToolConfig::new("ok", "bmi_calculator"),
                ToolConfig::new("bad", "horoscope"),
            ],
            ..Config::default()
        };
        assert!(matches!(
            ToolRegistry::from_config(&cfg),
            Err(ToolFactoryError::UnknownImplementation { tool_id, .. }) if tool_id == "bad"
        ));
    }

    #[test]
    fn iteration_exposes_categories() {
        let registry = ToolRegistry::builtin().unwrap();
        let checkers = registry
            .iter()
            .filter(|(_, tool)| tool.category() == ToolCategory::Checker)
            .count();
        assert_eq!(checkers, 3);
    }
}
