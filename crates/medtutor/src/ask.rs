// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `medtutor ask`: answer a study question.

use std::sync::Arc;

use medtutor_config::MedTutorConfig;
use medtutor_core::MedTutorError;
use medtutor_openai::OpenAiProvider;
use medtutor_router::ModelSelector;
use medtutor_study::StudyAssistant;
use tracing::info;

pub(crate) async fn run_ask(
    config: &MedTutorConfig,
    question: &str,
) -> Result<String, MedTutorError> {
    let provider = Arc::new(OpenAiProvider::new(config)?);
    let assistant = StudyAssistant::new(provider, ModelSelector::new(config.routing.clone()));
    answer(&assistant, question).await
}

async fn answer(assistant: &StudyAssistant, question: &str) -> Result<String, MedTutorError> {
    let answer = assistant.answer_question(question).await?;
    info!(
        domain = %answer.domain,
        complexity = %answer.complexity,
        "question answered"
    );
    Ok(answer.text)
}
