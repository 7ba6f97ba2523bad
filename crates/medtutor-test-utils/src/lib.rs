// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for medtutor.
//!
//! - [`MockProvider`]: LLM provider with queued canned replies and a request log
//! - [`MemoryConceptStore`]: in-memory concept graph with lookup counting and
//!   failure injection

pub mod concept_store;
pub mod mock_provider;

pub use concept_store::MemoryConceptStore;
pub use mock_provider::MockProvider;
