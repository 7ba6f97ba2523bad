// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model selection: task override over classified complexity.
//!
//! Every request lands on one of four fixed base configs. The classified
//! complexity proposes a tier and the task's override rule picks the final
//! one; there is no interpolation between tiers.

use std::str::FromStr;

use medtutor_config::model::RoutingConfig;
use serde::Serialize;
use strum::{Display, EnumString};
use tracing::debug;

use crate::classifier::{classify_complexity, classify_domain, ComplexityLevel, MedicalDomain};

/// Sampling parameters for one chat-completion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    pub model: String,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

/// The kinds of study content a request can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
#[serde(rename_all = "camelCase")]
pub enum Task {
    /// Free-form question answering.
    Qa,
    /// Front/back flashcards from study material.
    Flashcards,
    /// Condensed summary of study material.
    Summary,
    /// Day-by-day study schedule.
    StudyPlan,
    /// Diagnostic reasoning over a case.
    Diagnosis,
    /// Multiple-choice questions.
    Quiz,
    /// Stress analysis of a journal entry.
    Wellness,
    /// Summary of the day's study activity.
    DailyDigest,
    /// Description of a medical image.
    ImageAnalysis,
}

impl Task {
    /// The base-config tier this task uses for a request of `complexity`.
    pub fn tier_for(self, complexity: ComplexityLevel) -> ComplexityLevel {
        use ComplexityLevel::*;

        match (self, complexity) {
            (Task::Qa, Simple) => Medium,
            (Task::Qa, Complex) => Complex,
            (Task::Qa, Medium | Expert) => Expert,

            (Task::Flashcards, _) => Simple,

            (Task::Summary, Simple) => Simple,
            (Task::Summary, _) => Medium,

            (Task::StudyPlan, _) => Complex,

            (Task::Diagnosis, _) => Expert,

            (Task::Quiz, Simple) => Simple,
            (Task::Quiz, Medium) => Medium,
            (Task::Quiz, Complex | Expert) => Complex,

            (Task::Wellness, _) => Medium,

            (Task::DailyDigest, _) => Simple,

            (Task::ImageAnalysis, Simple | Medium) => Complex,
            (Task::ImageAnalysis, Complex | Expert) => Expert,
        }
    }

    /// Whether the request text should also be classified by medical domain.
    pub fn uses_domain(self) -> bool {
        matches!(self, Task::Qa | Task::ImageAnalysis)
    }
}

/// The fixed base config for a tier.
pub fn base_config(tier: ComplexityLevel) -> ModelConfig {
    match tier {
        ComplexityLevel::Simple => ModelConfig {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: None,
            top_p: None,
        },
        ComplexityLevel::Medium => ModelConfig {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.6,
            max_tokens: None,
            top_p: None,
        },
        ComplexityLevel::Complex => ModelConfig {
            model: "gpt-4o".to_string(),
            temperature: 0.5,
            max_tokens: Some(2000),
            top_p: None,
        },
        ComplexityLevel::Expert => ModelConfig {
            model: "gpt-4o".to_string(),
            temperature: 0.3,
            max_tokens: Some(4000),
            top_p: Some(0.95),
        },
    }
}

/// Full routing outcome, kept for logging and for prompt assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingDecision {
    pub task: Task,
    pub config: ModelConfig,
    /// Complexity classified from the request text.
    pub complexity: ComplexityLevel,
    /// Tier whose base config was chosen after the task override.
    pub tier: ComplexityLevel,
    /// Only computed for tasks where [`Task::uses_domain`] holds.
    pub domain: Option<MedicalDomain>,
    pub reason: String,
}

/// Picks a [`ModelConfig`] for a task and its request text.
#[derive(Debug, Clone, Default)]
pub struct ModelSelector {
    config: RoutingConfig,
}

impl ModelSelector {
    /// Create a selector with the given routing configuration.
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    /// Model config for `task` given `input_text`.
    pub fn select_config(&self, task: Task, input_text: &str) -> ModelConfig {
        self.route(task, input_text).config
    }

    /// Like [`select_config`](Self::select_config) for a task given by name.
    ///
    /// Unrecognized names get the medium base config.
    pub fn select_config_by_name(&self, task_name: &str, input_text: &str) -> ModelConfig {
        match Task::from_str(task_name) {
            Ok(task) => self.select_config(task, input_text),
            Err(_) => {
                debug!(task = task_name, "unknown task, using medium config");
                self.apply_force_model(base_config(ComplexityLevel::Medium))
            }
        }
    }

    /// Classify the request and resolve the task override.
    pub fn route(&self, task: Task, input_text: &str) -> RoutingDecision {
        let complexity = classify_complexity(input_text);
        let domain = task.uses_domain().then(|| classify_domain(input_text));

        let (tier, reason) = if self.config.enabled {
            let tier = task.tier_for(complexity);
            (tier, format!("{task} task with {complexity} input uses {tier} tier"))
        } else {
            (ComplexityLevel::Medium, "routing disabled".to_string())
        };

        let config = self.apply_force_model(base_config(tier));

        debug!(
            %task,
            %complexity,
            %tier,
            domain = ?domain,
            model = config.model.as_str(),
            "model selected"
        );

        RoutingDecision {
            task,
            config,
            complexity,
            tier,
            domain,
            reason,
        }
    }

    fn apply_force_model(&self, mut config: ModelConfig) -> ModelConfig {
        if let Some(forced) = &self.config.force_model {
            config.model = forced.clone();
        }
        config
    }
}
