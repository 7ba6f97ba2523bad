// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt templates. Placeholders are `{name}` and filled by [`render`].

use medtutor_router::MedicalDomain;

pub const TUTOR_SYSTEM: &str = "You are an expert medical educator helping a medical student learn. \
Be accurate, cite mechanisms where relevant, and flag anything that needs clinical supervision.";

/// Question answering. `{domain}` is the classified specialty.
pub const QA_SYSTEM: &str = "You are an expert medical educator specializing in {domain}. \
Answer the student's question clearly and accurately. Explain the underlying reasoning, \
note common misconceptions, and keep the answer focused on what a medical student needs to know.";

pub const FLASHCARDS: &str = r#"Create {count} study flashcards from the material below.

Each flashcard tests one fact or concept. Output a JSON array where each element has:
- "front": the question or prompt
- "back": the concise answer

Material:
{content}

Output the JSON array only, no explanation:"#;

pub const SUMMARY: &str = r#"Summarize the following medical study material for review before an exam.
Keep the key facts, mechanisms, and clinical pearls. Use short paragraphs or bullet points.

Material:
{content}"#;

pub const STUDY_PLAN: &str = r#"Build a study plan covering these topics: {topics}.
The student has {days} days and about {hours} hours per day.{goal}

Output a JSON object with:
- "overview": one paragraph describing the approach
- "sessions": an array of objects with "day" (1-based number), "topic", "activities" (array of strings) and "durationMinutes" (number)

Output the JSON object only, no explanation:"#;

pub const WELLNESS: &str = r#"A medical student wrote this wellness check-in:

{entry}

Assess their wellbeing with empathy. Output a JSON object with:
- "summary": two or three sentences reflecting what they shared
- "stressLevel": one of "low", "moderate", "high"
- "recommendations": an array of short, practical suggestions

Output the JSON object only, no explanation:"#;

pub const DAILY_DIGEST: &str = r#"Here is a medical student's recent study activity:

{activity}

Write a short daily digest. Output a JSON object with:
- "headline": one encouraging sentence
- "highlights": an array of what went well
- "focusTopics": an array of topics to review today

Output the JSON object only, no explanation:"#;

/// Image analysis. `{domain}` is the classified specialty.
pub const IMAGE_SYSTEM: &str = "You are an expert medical educator specializing in {domain}. \
Describe the relevant findings in the image for teaching purposes, explain their significance, \
and state clearly that this is not a diagnostic read.";

pub const QUIZ: &str = r#"Write {count} multiple-choice questions on: {topic}

Output a JSON array where each element has:
- "question": the question stem
- "options": an array of 4 answer choices
- "answerIndex": the zero-based index of the correct option
- "explanation": why that option is correct

Output the JSON array only, no explanation:"#;

/// Fill `{key}` placeholders in `template`.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{key}}}"), value)
        })
}

/// Human-readable specialty name for system prompts.
pub fn domain_label(domain: MedicalDomain) -> &'static str {
    match domain {
        MedicalDomain::General => "general medicine",
        MedicalDomain::Pathology => "pathology",
        MedicalDomain::Pharmacology => "pharmacology",
        MedicalDomain::Anatomy => "anatomy",
        MedicalDomain::Physiology => "physiology",
        MedicalDomain::Diagnosis => "clinical diagnosis",
        MedicalDomain::Treatment => "therapeutics",
        MedicalDomain::Emergency => "emergency medicine",
        MedicalDomain::Pediatrics => "pediatrics",
        MedicalDomain::Geriatrics => "geriatrics",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_every_placeholder() {
        let prompt = render(QUIZ, &[("count", "5"), ("topic", "beta blockers")]);
        assert!(prompt.starts_with("Write 5 multiple-choice questions on: beta blockers"));
        assert!(!prompt.contains("{count}"));
        assert!(!prompt.contains("{topic}"));
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        assert_eq!(render("{a} and {b}", &[("a", "x")]), "x and {b}");
    }

    #[test]
    fn json_templates_ask_for_json_only() {
        for template in [FLASHCARDS, STUDY_PLAN, WELLNESS, DAILY_DIGEST, QUIZ] {
            assert!(template.contains("JSON"), "{template}");
        }
    }

    #[test]
    fn domain_labels_are_distinct() {
        use strum::IntoEnumIterator;
        let labels: std::collections::HashSet<_> =
            MedicalDomain::iter().map(domain_label).collect();
        assert_eq!(labels.len(), MedicalDomain::iter().count());
    }
}
