// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Relationship CRUD.

use medtutor_core::{ConceptEdge, MedTutorError};
use medtutor_graph::encode_properties;
use rusqlite::params;

use crate::database::{map_tr_err, Database};
use crate::models::{NewRelationship, RelationshipRow};

/// Insert a relationship and return it with its generated id.
///
/// Both endpoints must exist; a dangling id is rejected by the foreign key.
pub async fn insert_relationship(
    db: &Database,
    relationship: &NewRelationship,
) -> Result<ConceptEdge, MedTutorError> {
    let properties = encode_properties(&relationship.properties)?;
    let edge = ConceptEdge {
        id: uuid::Uuid::new_v4().to_string(),
        source_id: relationship.source_id.clone(),
        target_id: relationship.target_id.clone(),
        relationship_type: relationship.relationship_type.clone(),
        properties: relationship.properties.clone(),
    };

    let row = edge.clone();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO concept_relationships (id, source_id, target_id, relationship_type, properties)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    row.id,
                    row.source_id,
                    row.target_id,
                    row.relationship_type,
                    properties,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;
    Ok(edge)
}

/// Relationships leaving `source_id`, in insertion order.
pub async fn relationships_by_source(
    db: &Database,
    source_id: &str,
) -> Result<Vec<ConceptEdge>, MedTutorError> {
    select_by(db, "source_id", source_id).await
}

/// Relationships arriving at `target_id`, in insertion order.
pub async fn relationships_by_target(
    db: &Database,
    target_id: &str,
) -> Result<Vec<ConceptEdge>, MedTutorError> {
    select_by(db, "target_id", target_id).await
}

async fn select_by(
    db: &Database,
    column: &'static str,
    id: &str,
) -> Result<Vec<ConceptEdge>, MedTutorError> {
    let id = id.to_string();
    let sql = format!(
        "SELECT {} FROM concept_relationships WHERE {column} = ?1 ORDER BY rowid",
        RelationshipRow::COLUMNS
    );
    let rows = db
        .connection()
        .call(move |conn| -> Result<Vec<RelationshipRow>, rusqlite::Error> {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![id], RelationshipRow::from_row)?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)?;
    rows.into_iter().map(RelationshipRow::into_edge).collect()
}
