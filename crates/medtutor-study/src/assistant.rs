// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The study actions.

use std::sync::Arc;

use medtutor_core::types::{ContentBlock, ProviderMessage, ProviderRequest};
use medtutor_core::{MedTutorError, ProviderAdapter};
use medtutor_router::{MedicalDomain, ModelSelector, RoutingDecision, Task};
use tracing::{debug, info};

use crate::parse::{parse_json, ParseOutcome};
use crate::prompts::{self, render};
use crate::types::{
    Answer, DailyDigest, Flashcard, ImageInput, QuizQuestion, StudyPlan, StudyPlanRequest,
    WellnessAnalysis,
};

/// Runs study actions against one chat-completion provider.
///
/// The provider is created once per process and shared; the assistant is
/// cheap to clone.
#[derive(Clone)]
pub struct StudyAssistant {
    provider: Arc<dyn ProviderAdapter>,
    selector: ModelSelector,
}

impl StudyAssistant {
    pub fn new(provider: Arc<dyn ProviderAdapter>, selector: ModelSelector) -> Self {
        Self { provider, selector }
    }

    pub fn selector(&self) -> &ModelSelector {
        &self.selector
    }

    /// Answer a free-text question. The system prompt names the question's
    /// specialty.
    pub async fn answer_question(&self, question: &str) -> Result<Answer, MedTutorError> {
        let decision = self.selector.route(Task::Qa, question);
        let domain = decision.domain.unwrap_or(MedicalDomain::General);
        let system = render(prompts::QA_SYSTEM, &[("domain", prompts::domain_label(domain))]);

        let text = self
            .complete(&decision, Some(system), vec![text_block(question)])
            .await?;
        Ok(Answer {
            text,
            domain,
            complexity: decision.complexity,
        })
    }

    pub async fn generate_flashcards(
        &self,
        content: &str,
        count: usize,
    ) -> Result<ParseOutcome<Vec<Flashcard>>, MedTutorError> {
        let decision = self.selector.route(Task::Flashcards, content);
        let count = count.to_string();
        let prompt = render(
            prompts::FLASHCARDS,
            &[("count", count.as_str()), ("content", content)],
        );
        let reply = self.complete_tutor(&decision, prompt).await?;
        Ok(parse_json::<Vec<Flashcard>>(&reply).validate(&reply, |cards| {
            match cards.iter().position(|c| c.front.trim().is_empty() || c.back.trim().is_empty()) {
                Some(i) => Err(format!("flashcard {i} has an empty side")),
                None => Ok(()),
            }
        }))
    }

    pub async fn summarize(&self, content: &str) -> Result<String, MedTutorError> {
        let decision = self.selector.route(Task::Summary, content);
        let prompt = render(prompts::SUMMARY, &[("content", content)]);
        self.complete_tutor(&decision, prompt).await
    }

    pub async fn study_plan(
        &self,
        request: &StudyPlanRequest,
    ) -> Result<ParseOutcome<StudyPlan>, MedTutorError> {
        let topics = request.topics.join(", ");
        let decision = self.selector.route(Task::StudyPlan, &topics);
        let goal = request
            .goal
            .as_ref()
            .map(|g| format!(" Their goal: {g}."))
            .unwrap_or_default();
        let days = request.days.to_string();
        let hours = request.hours_per_day.to_string();
        let prompt = render(
            prompts::STUDY_PLAN,
            &[
                ("topics", topics.as_str()),
                ("days", days.as_str()),
                ("hours", hours.as_str()),
                ("goal", goal.as_str()),
            ],
        );
        let reply = self.complete_tutor(&decision, prompt).await?;
        Ok(parse_json(&reply))
    }

    /// Assess a free-text wellness check-in.
    pub async fn analyze_wellness(
        &self,
        entry: &str,
    ) -> Result<ParseOutcome<WellnessAnalysis>, MedTutorError> {
        let decision = self.selector.route(Task::Wellness, entry);
        let prompt = render(prompts::WELLNESS, &[("entry", entry)]);
        let reply = self.complete_tutor(&decision, prompt).await?;
        Ok(parse_json(&reply))
    }

    /// Summarize recent study activity into a digest.
    pub async fn daily_digest(
        &self,
        activity: &str,
    ) -> Result<ParseOutcome<DailyDigest>, MedTutorError> {
        let decision = self.selector.route(Task::DailyDigest, activity);
        let prompt = render(prompts::DAILY_DIGEST, &[("activity", activity)]);
        let reply = self.complete_tutor(&decision, prompt).await?;
        Ok(parse_json(&reply))
    }

    /// Describe an image. `prompt` is the learner's question about it and
    /// drives routing; the image travels as an inline base64 block.
    pub async fn analyze_image(
        &self,
        image: &ImageInput,
        prompt: &str,
    ) -> Result<String, MedTutorError> {
        let decision = self.selector.route(Task::ImageAnalysis, prompt);
        let domain = decision.domain.unwrap_or(MedicalDomain::General);
        let system = render(prompts::IMAGE_SYSTEM, &[("domain", prompts::domain_label(domain))]);
        let content = vec![
            text_block(prompt),
            ContentBlock::Image {
                media_type: image.media_type.clone(),
                data: image.data.clone(),
            },
        ];
        self.complete(&decision, Some(system), content).await
    }

    /// Multiple-choice questions on `topic`. Questions whose answer index
    /// does not point into their options make the outcome malformed.
    pub async fn generate_quiz(
        &self,
        topic: &str,
        count: usize,
    ) -> Result<ParseOutcome<Vec<QuizQuestion>>, MedTutorError> {
        let decision = self.selector.route(Task::Quiz, topic);
        let count = count.to_string();
        let prompt = render(prompts::QUIZ, &[("count", count.as_str()), ("topic", topic)]);
        let reply = self.complete_tutor(&decision, prompt).await?;
        Ok(parse_json::<Vec<QuizQuestion>>(&reply).validate(&reply, |questions| {
            for (i, q) in questions.iter().enumerate() {
                if q.options.len() < 2 {
                    return Err(format!("question {i} has fewer than two options"));
                }
                if q.answer_index >= q.options.len() {
                    return Err(format!(
                        "question {i} answer index {} is out of range for {} options",
                        q.answer_index,
                        q.options.len()
                    ));
                }
            }
            Ok(())
        }))
    }

    async fn complete_tutor(
        &self,
        decision: &RoutingDecision,
        prompt: String,
    ) -> Result<String, MedTutorError> {
        self.complete(
            decision,
            Some(prompts::TUTOR_SYSTEM.to_string()),
            vec![ContentBlock::Text { text: prompt }],
        )
        .await
    }

    async fn complete(
        &self,
        decision: &RoutingDecision,
        system_prompt: Option<String>,
        content: Vec<ContentBlock>,
    ) -> Result<String, MedTutorError> {
        let config = &decision.config;
        let request = ProviderRequest {
            model: config.model.clone(),
            system_prompt,
            messages: vec![ProviderMessage {
                role: "user".to_string(),
                content,
            }],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
        };

        let response = self.provider.complete(request).await?;
        info!(
            task = %decision.task,
            model = response.model.as_str(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "study action completed"
        );
        debug!(reason = decision.reason.as_str(), "routing reason");
        Ok(response.content)
    }
}

fn text_block(text: &str) -> ContentBlock {
    ContentBlock::Text {
        text: text.to_string(),
    }
}
