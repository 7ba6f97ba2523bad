// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Study actions end to end against a mock provider: routing, prompt
//! assembly, and reply parsing.

use std::sync::Arc;

use medtutor_config::model::RoutingConfig;
use medtutor_core::types::{ContentBlock, ProviderRequest};
use medtutor_core::MedTutorError;
use medtutor_router::{ComplexityLevel, MedicalDomain, ModelSelector, Task};
use medtutor_study::{
    ImageInput, ParseOutcome, StressLevel, StudyAssistant, StudyPlanRequest,
};
use medtutor_test_utils::MockProvider;

fn assistant(provider: &MockProvider) -> StudyAssistant {
    StudyAssistant::new(Arc::new(provider.clone()), ModelSelector::default())
}

fn user_text(request: &ProviderRequest) -> String {
    request.messages[0]
        .content
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Image { .. } => None,
        })
        .collect()
}

#[tokio::test]
async fn simple_question_routes_to_medium_config() {
    let provider = MockProvider::with_responses(vec!["Usually 81 mg daily.".into()]);
    let answer = assistant(&provider)
        .answer_question("What is the usual dose of this drug for prevention?")
        .await
        .unwrap();

    assert_eq!(answer.text, "Usually 81 mg daily.");
    assert_eq!(answer.domain, MedicalDomain::Pharmacology);
    assert_eq!(answer.complexity, ComplexityLevel::Simple);

    let request = provider.last_request().await.unwrap();
    assert_eq!(request.model, "gpt-4o-mini");
    assert_eq!(request.temperature, 0.6);
    assert_eq!(request.max_tokens, None);
    assert!(request.system_prompt.unwrap().contains("pharmacology"));
}

#[tokio::test]
async fn complex_question_routes_to_complex_config() {
    let provider = MockProvider::new();
    let answer = assistant(&provider)
        .answer_question("Explain the pathophysiology of septic shock in trauma patients")
        .await
        .unwrap();
    assert_eq!(answer.complexity, ComplexityLevel::Complex);
    assert_eq!(answer.domain, MedicalDomain::Emergency);

    let request = provider.last_request().await.unwrap();
    assert_eq!(request.model, "gpt-4o");
    assert_eq!(request.temperature, 0.5);
    assert_eq!(request.max_tokens, Some(2000));
    assert_eq!(request.top_p, None);
}

#[tokio::test]
async fn question_without_keywords_uses_general_domain() {
    let provider = MockProvider::new();
    let answer = assistant(&provider)
        .answer_question("How should I take notes in lectures?")
        .await
        .unwrap();
    assert_eq!(answer.domain, MedicalDomain::General);
    assert!(
        provider
            .last_request()
            .await
            .unwrap()
            .system_prompt
            .unwrap()
            .contains("general medicine")
    );
}

#[tokio::test]
async fn flashcards_parse_and_use_simple_config() {
    let provider = MockProvider::with_responses(vec![r#"```json
[
  {"front": "First-line drug for anaphylaxis?", "back": "Intramuscular epinephrine"},
  {"front": "Dose for adults?", "back": "0.5 mg IM"}
]
```"#
        .into()]);

    let outcome = assistant(&provider)
        .generate_flashcards("Anaphylaxis management notes", 2)
        .await
        .unwrap();
    let cards = outcome.parsed().expect("flashcards should parse");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].back, "Intramuscular epinephrine");

    let request = provider.last_request().await.unwrap();
    assert_eq!(request.model, "gpt-4o-mini");
    assert_eq!(request.temperature, 0.7);
    let prompt = user_text(&request);
    assert!(prompt.contains("Create 2 study flashcards"));
    assert!(prompt.contains("Anaphylaxis management notes"));
}

#[tokio::test]
async fn flashcards_prose_reply_is_malformed() {
    let provider =
        MockProvider::with_responses(vec!["I'd be happy to help you study!".into()]);
    let outcome = assistant(&provider)
        .generate_flashcards("Renal physiology", 5)
        .await
        .unwrap();
    assert!(!outcome.is_parsed());
    match outcome {
        ParseOutcome::Malformed { raw, .. } => assert_eq!(raw, "I'd be happy to help you study!"),
        ParseOutcome::Parsed(cards) => panic!("expected Malformed, got {cards:?}"),
    }
}

#[tokio::test]
async fn flashcard_with_blank_side_is_malformed() {
    let provider = MockProvider::with_responses(vec![
        r#"[{"front": "Q", "back": "A"}, {"front": "", "back": "orphan"}]"#.into(),
    ]);
    let outcome = assistant(&provider)
        .generate_flashcards("anything", 2)
        .await
        .unwrap();
    let ParseOutcome::Malformed { reason, .. } = outcome else {
        panic!("expected Malformed");
    };
    assert!(reason.contains("flashcard 1"), "reason: {reason}");
}

#[tokio::test]
async fn summary_returns_reply_text() {
    let provider = MockProvider::with_responses(vec!["- ACE inhibitors lower BP".into()]);
    let summary = assistant(&provider)
        .summarize("ACE inhibitors block conversion of angiotensin I.")
        .await
        .unwrap();
    assert_eq!(summary, "- ACE inhibitors lower BP");
    let request = provider.last_request().await.unwrap();
    assert_eq!(request.temperature, 0.7);
}

#[tokio::test]
async fn study_plan_always_uses_complex_config() {
    let provider = MockProvider::with_responses(vec![r#"{
        "overview": "Two focused days on cardiology.",
        "sessions": [
            {"day": 1, "topic": "Heart failure", "activities": ["Read", "Flashcards"], "durationMinutes": 120},
            {"day": 2, "topic": "Arrhythmias"}
        ]
    }"#
    .into()]);

    let plan = assistant(&provider)
        .study_plan(&StudyPlanRequest {
            topics: vec!["Heart failure".into(), "Arrhythmias".into()],
            days: 2,
            hours_per_day: 3.0,
            goal: Some("Step 1".into()),
        })
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(plan.sessions.len(), 2);
    assert_eq!(plan.sessions[0].duration_minutes, Some(120));
    assert!(plan.sessions[1].activities.is_empty());

    let request = provider.last_request().await.unwrap();
    assert_eq!(request.model, "gpt-4o");
    assert_eq!(request.max_tokens, Some(2000));
    let prompt = user_text(&request);
    assert!(prompt.contains("Heart failure, Arrhythmias"));
    assert!(prompt.contains("2 days"));
    assert!(prompt.contains("Their goal: Step 1."));
}

#[tokio::test]
async fn wellness_analysis_parses_stress_level() {
    let provider = MockProvider::with_responses(vec![r#"{
        "summary": "You are sleeping little before exams.",
        "stressLevel": "high",
        "recommendations": ["Protect 7 hours of sleep", "Take short breaks"]
    }"#
    .into()]);

    let analysis = assistant(&provider)
        .analyze_wellness("Slept 4 hours, anxious about the exam")
        .await
        .unwrap()
        .parsed()
        .unwrap();
    assert_eq!(analysis.stress_level, StressLevel::High);
    assert_eq!(analysis.recommendations.len(), 2);

    let request = provider.last_request().await.unwrap();
    assert_eq!(request.model, "gpt-4o-mini");
    assert_eq!(request.temperature, 0.6);
}

#[tokio::test]
async fn daily_digest_parses() {
    let provider = MockProvider::with_responses(vec![r#"Here is your digest:
{"headline": "Great streak!", "highlights": ["20 cards reviewed"], "focusTopics": ["Acid-base"]}"#
        .into()]);

    let digest = assistant(&provider)
        .daily_digest("Reviewed 20 renal cards, missed 6 on acid-base")
        .await
        .unwrap()
        .parsed()
        .unwrap();
    assert_eq!(digest.focus_topics, vec!["Acid-base"]);
    assert_eq!(provider.last_request().await.unwrap().temperature, 0.7);
}

#[tokio::test]
async fn quiz_with_valid_answers_parses() {
    let provider = MockProvider::with_responses(vec![r#"[{
        "question": "Which drug reverses heparin?",
        "options": ["Vitamin K", "Protamine sulfate", "Idarucizumab", "Andexanet"],
        "answerIndex": 1,
        "explanation": "Protamine binds heparin."
    }]"#
    .into()]);

    let questions = assistant(&provider)
        .generate_quiz("anticoagulant reversal", 1)
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(questions[0].options[questions[0].answer_index], "Protamine sulfate");
}

#[tokio::test]
async fn quiz_answer_out_of_range_is_malformed() {
    let provider = MockProvider::with_responses(vec![r#"[{
        "question": "Q?",
        "options": ["a", "b"],
        "answerIndex": 4,
        "explanation": ""
    }]"#
    .into()]);

    let outcome = assistant(&provider).generate_quiz("anything", 1).await.unwrap();
    let ParseOutcome::Malformed { reason, .. } = outcome else {
        panic!("expected Malformed");
    };
    assert!(reason.contains("out of range"), "reason: {reason}");
}

#[tokio::test]
async fn quiz_routing_follows_complexity() {
    let provider = MockProvider::new();
    let assistant = assistant(&provider);

    assistant.generate_quiz("cranial nerves", 3).await.unwrap();
    assistant
        .generate_quiz("latest research on GLP-1 agonists", 3)
        .await
        .unwrap();

    let requests = provider.requests().await;
    assert_eq!(requests[0].model, "gpt-4o-mini");
    assert_eq!(requests[0].temperature, 0.7);
    // Expert input is capped at the complex tier for quizzes.
    assert_eq!(requests[1].model, "gpt-4o");
    assert_eq!(requests[1].temperature, 0.5);
    assert_eq!(requests[1].top_p, None);
}

#[tokio::test]
async fn image_analysis_sends_inline_image() {
    let provider = MockProvider::with_responses(vec!["Right lower lobe consolidation.".into()]);
    let image = ImageInput {
        media_type: "image/png".into(),
        data: "iVBORw0KGgo=".into(),
    };

    let text = assistant(&provider)
        .analyze_image(&image, "What imaging findings are visible on this chest film?")
        .await
        .unwrap();
    assert_eq!(text, "Right lower lobe consolidation.");

    let request = provider.last_request().await.unwrap();
    assert_eq!(request.model, "gpt-4o");
    assert_eq!(request.max_tokens, Some(2000));
    assert!(request.system_prompt.unwrap().contains("clinical diagnosis"));
    assert_eq!(
        request.messages[0].content[1],
        ContentBlock::Image {
            media_type: "image/png".into(),
            data: "iVBORw0KGgo=".into(),
        }
    );
}

#[tokio::test]
async fn provider_failure_propagates() {
    let provider = MockProvider::new();
    provider.add_failure("upstream unavailable").await;
    let err = assistant(&provider)
        .summarize("anything")
        .await
        .unwrap_err();
    assert!(matches!(err, MedTutorError::Provider { .. }));
    assert!(err.to_string().contains("upstream unavailable"));
}

#[tokio::test]
async fn forced_model_applies_to_every_action() {
    let provider = MockProvider::new();
    let selector = ModelSelector::new(RoutingConfig {
        enabled: true,
        force_model: Some("local-llama".into()),
    });
    let assistant = StudyAssistant::new(Arc::new(provider.clone()), selector);
    assert_eq!(
        assistant.selector().select_config(Task::Quiz, "anything").model,
        "local-llama"
    );

    assistant.answer_question("What is a nephron?").await.unwrap();
    assistant.summarize("notes").await.unwrap();
    assistant.generate_flashcards("notes", 1).await.unwrap();

    let requests = provider.requests().await;
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r.model == "local-llama"));
    // Sampling parameters still follow the routed tier.
    assert_eq!(requests[2].temperature, 0.7);
}
