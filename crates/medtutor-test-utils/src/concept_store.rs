// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory [`ConceptLookup`] for traversal tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use medtutor_core::{ConceptEdge, ConceptLookup, ConceptNode, MedTutorError, Properties};

/// A concept graph held in vectors.
///
/// Node ids double as names unless set otherwise. Lookups are counted, and
/// [`fail_lookups`](Self::fail_lookups) makes every subsequent lookup return
/// a storage error.
#[derive(Default)]
pub struct MemoryConceptStore {
    nodes: Vec<ConceptNode>,
    edges: Vec<ConceptEdge>,
    lookups: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryConceptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a concept whose id and name are both `name`.
    pub fn with_node(mut self, name: &str) -> Self {
        self.nodes.push(node(name, name));
        self
    }

    /// Add a fully specified concept.
    pub fn with_concept(mut self, concept: ConceptNode) -> Self {
        self.nodes.push(concept);
        self
    }

    /// Add a relationship `source -> target` with id `"{source}->{target}"`.
    pub fn with_edge(mut self, source: &str, target: &str) -> Self {
        let id = format!("{source}->{target}");
        self.edges.push(ConceptEdge {
            id,
            source_id: source.to_string(),
            target_id: target.to_string(),
            relationship_type: "related_to".to_string(),
            properties: Properties::new(),
        });
        self
    }

    /// Number of lookups served (or failed) so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Make all later lookups fail.
    pub fn fail_lookups(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), MedTutorError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(MedTutorError::Storage {
                source: "concept store unavailable".into(),
            });
        }
        Ok(())
    }
}

/// Build a concept with empty description and properties.
pub fn node(id: &str, name: &str) -> ConceptNode {
    ConceptNode {
        id: id.to_string(),
        name: name.to_string(),
        category: "concept".to_string(),
        description: String::new(),
        external_code: None,
        properties: Properties::new(),
    }
}

#[async_trait]
impl ConceptLookup for MemoryConceptStore {
    async fn node_by_name(&self, name: &str) -> Result<Option<ConceptNode>, MedTutorError> {
        self.check()?;
        Ok(self.nodes.iter().find(|n| n.name == name).cloned())
    }

    async fn node_by_id(&self, id: &str) -> Result<Option<ConceptNode>, MedTutorError> {
        self.check()?;
        Ok(self.nodes.iter().find(|n| n.id == id).cloned())
    }

    async fn edges_by_source(&self, id: &str) -> Result<Vec<ConceptEdge>, MedTutorError> {
        self.check()?;
        Ok(self.edges.iter().filter(|e| e.source_id == id).cloned().collect())
    }

    async fn edges_by_target(&self, id: &str) -> Result<Vec<ConceptEdge>, MedTutorError> {
        self.check()?;
        Ok(self.edges.iter().filter(|e| e.target_id == id).cloned().collect())
    }
}
