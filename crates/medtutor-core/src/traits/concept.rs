// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-side lookups over the concept graph.

use async_trait::async_trait;

use crate::error::MedTutorError;
use crate::types::{ConceptEdge, ConceptNode};

/// The four lookups a graph traversal needs from its backing store.
///
/// Implementations read current state; no transactional isolation is
/// required across calls. Errors are returned as-is to the caller.
#[async_trait]
pub trait ConceptLookup: Send + Sync {
    /// Find a concept by its unique name.
    async fn node_by_name(&self, name: &str) -> Result<Option<ConceptNode>, MedTutorError>;

    /// Find a concept by id.
    async fn node_by_id(&self, id: &str) -> Result<Option<ConceptNode>, MedTutorError>;

    /// All relationships whose source is `id`.
    async fn edges_by_source(&self, id: &str) -> Result<Vec<ConceptEdge>, MedTutorError>;

    /// All relationships whose target is `id`.
    async fn edges_by_target(&self, id: &str) -> Result<Vec<ConceptEdge>, MedTutorError>;
}
