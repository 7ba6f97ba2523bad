// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inputs and outputs of the study actions.

use medtutor_router::{ComplexityLevel, MedicalDomain};
use serde::{Deserialize, Serialize};
use strum::Display;

/// A free-text answer together with how the question was classified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub text: String,
    pub domain: MedicalDomain,
    pub complexity: ComplexityLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

/// What the learner wants a plan for.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyPlanRequest {
    pub topics: Vec<String>,
    pub days: u32,
    pub hours_per_day: f32,
    /// Exam or goal the plan works toward, if any.
    pub goal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub overview: String,
    pub sessions: Vec<StudySession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub day: u32,
    pub topic: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessAnalysis {
    pub summary: String,
    pub stress_level: StressLevel,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDigest {
    pub headline: String,
    pub highlights: Vec<String>,
    pub focus_topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub answer_index: usize,
    #[serde(default)]
    pub explanation: String,
}

/// A base64-encoded image for analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInput {
    /// MIME type, e.g. `image/png`.
    pub media_type: String,
    pub data: String,
}
