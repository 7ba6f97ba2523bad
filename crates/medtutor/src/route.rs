// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `medtutor route`: show the routing decision for a request.

use std::str::FromStr;

use medtutor_config::MedTutorConfig;
use medtutor_core::MedTutorError;
use medtutor_router::{ModelSelector, Task};
use tracing::warn;

use crate::to_json;

/// Full decision as JSON for a known task; the medium fallback config for
/// an unknown one.
pub(crate) fn run_route(
    config: &MedTutorConfig,
    task_name: &str,
    text: &str,
) -> Result<String, MedTutorError> {
    let selector = ModelSelector::new(config.routing.clone());
    match Task::from_str(task_name) {
        Ok(task) => to_json(&selector.route(task, text)),
        Err(_) => {
            warn!(task = task_name, "unknown task, showing fallback config");
            to_json(&selector.select_config_by_name(task_name, text))
        }
    }
}
