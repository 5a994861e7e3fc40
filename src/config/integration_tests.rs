// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use std::time::Duration;

    use crate::config::{load_and_validate_config, RuntimeBuilder};
    use crate::model::ToolParameters;
    use crate::traits::ToolCategory;

    /// Test that the sample YAML configuration loads and validates
    #[test]
    fn test_sample_yaml_loading() {
        let config = load_and_validate_config("configs/toolbench.yaml").unwrap();

        assert!(config.progress.enabled);
        assert_eq!(config.progress.tick_interval_ms, 100);
        assert_eq!(config.progress.increment, 10);
        assert_eq!(config.presenter.slug_max_length, 50);
        assert!(config.presenter.clipboard_command.is_none());

        let ids: Vec<_> = config.tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["age", "bmi", "loan", "essay", "paraphrase", "grammar"]);
    }

    /// Test that the sample TOML configuration loads and validates
    #[test]
    fn test_sample_toml_loading() {
        let config = load_and_validate_config("configs/euro-desk.toml").unwrap();

        assert!(!config.progress.enabled);
        assert_eq!(config.presenter.slug_max_length, 40);
        assert_eq!(config.tools.len(), 3);
        assert!(config
            .tools
            .iter()
            .all(|t| t.options.get("currency_symbol").and_then(|v| v.as_str()) == Some("€")));
    }

    /// Test building the runtime from the YAML sample
    #[test]
    fn test_build_runtime_from_yaml() {
        let config = load_and_validate_config("configs/toolbench.yaml").unwrap();
        let (registry, simulator, presenter) = RuntimeBuilder::from_config(&config).unwrap();

        assert_eq!(registry.len(), 6);
        assert_eq!(
            registry.ids(),
            vec!["age", "bmi", "essay", "grammar", "loan", "paraphrase"]
        );
        assert_eq!(
            registry.get("grammar").map(|t| t.category()),
            Some(ToolCategory::Checker)
        );
        assert_eq!(simulator.total_duration(), Duration::from_millis(1000));
        assert_eq!(presenter.download_dir, std::path::PathBuf::from("./downloads"));
    }

    /// Options from the config file reach the tool instances
    #[test]
    fn test_currency_option_from_toml() {
        let config = load_and_validate_config("configs/euro-desk.toml").unwrap();
        let (registry, simulator, _) = RuntimeBuilder::from_config(&config).unwrap();
        assert_eq!(simulator.total_duration(), Duration::ZERO);

        let loan = registry.get("loan").unwrap();
        let params = ToolParameters::from_pairs([
            "principal=200,000",
            "annual_rate=5.5",
            "term_years=30",
        ])
        .unwrap();
        let result = loan.transform(&params).unwrap();
        assert_eq!(result.display("payment"), Some("€1,135.58"));
    }
}
