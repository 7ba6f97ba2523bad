// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Insert payloads and raw row shapes for the concept graph tables.
//!
//! The read-side types ([`ConceptNode`], [`ConceptEdge`]) live in
//! `medtutor-core` so the traversal can use them without a storage
//! dependency.

use medtutor_core::{ConceptEdge, ConceptNode, MedTutorError, Properties};
use medtutor_graph::decode_properties;

/// A concept to insert. The id is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewConcept {
    pub name: String,
    pub category: String,
    pub description: String,
    pub external_code: Option<String>,
    pub properties: Properties,
}

impl NewConcept {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: String::new(),
            external_code: None,
            properties: Properties::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_external_code(mut self, code: impl Into<String>) -> Self {
        self.external_code = Some(code.into());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}

/// A relationship to insert between two existing concept ids.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRelationship {
    pub source_id: String,
    pub target_id: String,
    pub relationship_type: String,
    pub properties: Properties,
}

impl NewRelationship {
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        relationship_type: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            relationship_type: relationship_type.into(),
            properties: Properties::new(),
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}

/// A `concepts` row with its properties column still encoded.
pub(crate) struct ConceptRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub external_code: Option<String>,
    pub properties: Option<String>,
}

impl ConceptRow {
    pub const COLUMNS: &'static str = "id, name, category, description, external_code, properties";

    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            category: row.get(2)?,
            description: row.get(3)?,
            external_code: row.get(4)?,
            properties: row.get(5)?,
        })
    }

    pub fn into_node(self) -> Result<ConceptNode, MedTutorError> {
        Ok(ConceptNode {
            properties: decode_properties(self.properties.as_deref())?,
            id: self.id,
            name: self.name,
            category: self.category,
            description: self.description,
            external_code: self.external_code,
        })
    }
}

/// A `concept_relationships` row with its properties column still encoded.
pub(crate) struct RelationshipRow {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    pub relationship_type: String,
    pub properties: Option<String>,
}

impl RelationshipRow {
    pub const COLUMNS: &'static str = "id, source_id, target_id, relationship_type, properties";

    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            source_id: row.get(1)?,
            target_id: row.get(2)?,
            relationship_type: row.get(3)?,
            properties: row.get(4)?,
        })
    }

    pub fn into_edge(self) -> Result<ConceptEdge, MedTutorError> {
        Ok(ConceptEdge {
            properties: decode_properties(self.properties.as_deref())?,
            id: self.id,
            source_id: self.source_id,
            target_id: self.target_id,
            relationship_type: self.relationship_type,
        })
    }
}
