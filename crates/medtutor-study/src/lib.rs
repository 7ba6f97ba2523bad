// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Study-content actions for medtutor.
//!
//! Each action routes its input through the
//! [`ModelSelector`](medtutor_router::ModelSelector), fills a prompt
//! template, calls the injected chat-completion provider, and turns the
//! reply into a typed value. Actions that expect JSON return a
//! [`ParseOutcome`] so malformed model output is visible to the caller.

pub mod assistant;
pub mod parse;
pub mod prompts;
pub mod types;

pub use assistant::StudyAssistant;
pub use parse::{extract_json, parse_json, ParseOutcome};
pub use types::{
    Answer, DailyDigest, Flashcard, ImageInput, QuizQuestion, StressLevel, StudyPlan,
    StudyPlanRequest, StudySession, WellnessAnalysis,
};
