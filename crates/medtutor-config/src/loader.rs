// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./medtutor.toml` > `~/.config/medtutor/medtutor.toml` > `/etc/medtutor/medtutor.toml`
//! with environment variable overrides via `MEDTUTOR_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::MedTutorConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/medtutor/medtutor.toml` (system-wide)
/// 3. `~/.config/medtutor/medtutor.toml` (user XDG config)
/// 4. `./medtutor.toml` (local directory)
/// 5. `MEDTUTOR_*` environment variables
pub fn load_config() -> Result<MedTutorConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<MedTutorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MedTutorConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MedTutorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MedTutorConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(MedTutorConfig::default()))
        .merge(Toml::file("/etc/medtutor/medtutor.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("medtutor/medtutor.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("medtutor.toml"))
        .merge(env_provider())
}

/// Environment provider with explicit section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that underscore-containing
/// keys survive: `MEDTUTOR_LLM_API_KEY` maps to `llm.api_key`, not `llm.api.key`.
fn env_provider() -> Env {
    Env::prefixed("MEDTUTOR_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to its dotted config path.
pub(crate) fn map_env_key(key: &str) -> String {
    const SECTIONS: &[&str] = &["app_", "llm_", "storage_", "routing_", "graph_"];
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section) {
            return format!("{}.{rest}", section.trim_end_matches('_'));
        }
    }
    key.to_string()
}
