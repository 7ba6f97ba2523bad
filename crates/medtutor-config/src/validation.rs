// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints that serde attributes cannot express.
//! All failures are collected; validation does not stop at the first one.

use crate::diagnostic::ConfigError;
use crate::model::MedTutorConfig;

/// Deepest traversal the graph section may request.
pub const MAX_GRAPH_DEPTH: u32 = 10;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
pub fn validate_config(config: &MedTutorConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    if !LOG_LEVELS.contains(&config.app.log_level.as_str()) {
        fail(format!(
            "app.log_level `{}` must be one of: {}",
            config.app.log_level,
            LOG_LEVELS.join(", ")
        ));
    }

    let base_url = config.llm.base_url.trim();
    if base_url.is_empty() {
        fail("llm.base_url must not be empty".to_string());
    } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        fail(format!("llm.base_url `{base_url}` must start with http:// or https://"));
    }

    if config.llm.timeout_secs == 0 {
        fail("llm.timeout_secs must be greater than zero".to_string());
    }

    if config.storage.database_path.trim().is_empty() {
        fail("storage.database_path must not be empty".to_string());
    }

    if let Some(model) = &config.routing.force_model {
        if model.trim().is_empty() {
            fail("routing.force_model must not be empty when set".to_string());
        }
    }

    if config.graph.default_max_depth > MAX_GRAPH_DEPTH {
        fail(format!(
            "graph.default_max_depth must be at most {MAX_GRAPH_DEPTH}, got {}",
            config.graph.default_max_depth
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(config: &MedTutorConfig) -> Vec<String> {
        validate_config(config)
            .unwrap_err()
            .into_iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&MedTutorConfig::default()).is_ok());
    }

    #[test]
    fn empty_database_path_fails_validation() {
        let mut config = MedTutorConfig::default();
        config.storage.database_path = "  ".to_string();
        assert!(messages(&config).iter().any(|m| m.contains("database_path")));
    }

    #[test]
    fn non_http_base_url_fails_validation() {
        let mut config = MedTutorConfig::default();
        config.llm.base_url = "ftp://example.com".to_string();
        assert!(messages(&config).iter().any(|m| m.contains("llm.base_url")));
    }

    #[test]
    fn excessive_graph_depth_fails_validation() {
        let mut config = MedTutorConfig::default();
        config.graph.default_max_depth = 50;
        assert!(messages(&config)
            .iter()
            .any(|m| m.contains("default_max_depth")));
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = MedTutorConfig::default();
        config.app.log_level = "loud".to_string();
        assert!(messages(&config).iter().any(|m| m.contains("log_level")));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = MedTutorConfig::default();
        config.storage.database_path = String::new();
        config.llm.base_url = String::new();
        config.llm.timeout_secs = 0;
        config.routing.force_model = Some(String::new());
        assert_eq!(validate_config(&config).unwrap_err().len(), 4);
    }
}
