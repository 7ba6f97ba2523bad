// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level medtutor configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MedTutorConfig {
    /// Application identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Chat-completion API settings.
    #[serde(default)]
    pub llm: LlmConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Model routing settings.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Concept graph traversal settings.
    #[serde(default)]
    pub graph: GraphConfig,
}

/// Application identity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name used in logs and prompts.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "medtutor".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Chat-completion API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// API key. `None` falls back to the `OPENAI_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Chat completions endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used when a request does not go through the router.
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Per-request HTTP timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("medtutor").join("medtutor.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("medtutor.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

/// Model routing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Enable task/complexity routing. When false, every request uses the medium tier.
    #[serde(default = "default_routing_enabled")]
    pub enabled: bool,

    /// Replace the model identifier of every routed config.
    /// Temperature and token limits still follow the routing table.
    #[serde(default)]
    pub force_model: Option<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            enabled: default_routing_enabled(),
            force_model: None,
        }
    }
}

fn default_routing_enabled() -> bool {
    true
}

/// Concept graph traversal configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Hops from the seed concept when the caller does not specify a depth.
    #[serde(default = "default_max_depth")]
    pub default_max_depth: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> u32 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_populated() {
        let config = MedTutorConfig::default();
        assert_eq!(config.app.name, "medtutor");
        assert_eq!(config.llm.default_model, "gpt-4o-mini");
        assert!(config.routing.enabled);
        assert!(config.routing.force_model.is_none());
        assert_eq!(config.graph.default_max_depth, 2);
        assert!(config.storage.database_path.ends_with("medtutor.db"));
    }

    #[test]
    fn routing_section_deserializes() {
        let config: MedTutorConfig = toml::from_str(
            r#"
[routing]
enabled = false
force_model = "gpt-4o"
"#,
        )
        .unwrap();
        assert!(!config.routing.enabled);
        assert_eq!(config.routing.force_model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn graph_deny_unknown_fields() {
        let result = toml::from_str::<MedTutorConfig>(
            r#"
[graph]
max_depht = 3
"#,
        );
        assert!(result.is_err());
    }
}
