// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic model selection for study-content generation.
//!
//! - [`classify_complexity`] / [`classify_domain`]: keyword and length
//!   heuristics over the request text (no network, no model pre-call).
//! - [`ModelSelector`]: maps a [`Task`] and the classified complexity to one
//!   of four fixed [`ModelConfig`] tiers.

pub mod classifier;
pub mod router;

pub use classifier::{
    classify_complexity, classify_domain, ComplexityLevel, MedicalDomain, COMPLEX_PHRASES,
    EXPERT_PHRASES,
};
pub use router::{base_config, ModelConfig, ModelSelector, RoutingDecision, Task};
