// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concept CRUD.

use medtutor_core::{ConceptNode, MedTutorError};
use medtutor_graph::encode_properties;
use rusqlite::{params, OptionalExtension};

use crate::database::{map_tr_err, Database};
use crate::models::{ConceptRow, NewConcept};

/// Insert a concept and return it with its generated id.
///
/// Fails with a storage error if the name is already taken.
pub async fn insert_concept(
    db: &Database,
    concept: &NewConcept,
) -> Result<ConceptNode, MedTutorError> {
    let properties = encode_properties(&concept.properties)?;
    let node = ConceptNode {
        id: uuid::Uuid::new_v4().to_string(),
        name: concept.name.clone(),
        category: concept.category.clone(),
        description: concept.description.clone(),
        external_code: concept.external_code.clone(),
        properties: concept.properties.clone(),
    };

    let row = node.clone();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO concepts (id, name, category, description, external_code, properties)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    row.id,
                    row.name,
                    row.category,
                    row.description,
                    row.external_code,
                    properties,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;
    Ok(node)
}

/// Get a concept by id.
pub async fn get_concept_by_id(
    db: &Database,
    id: &str,
) -> Result<Option<ConceptNode>, MedTutorError> {
    let id = id.to_string();
    let sql = format!("SELECT {} FROM concepts WHERE id = ?1", ConceptRow::COLUMNS);
    let row = db
        .connection()
        .call(move |conn| -> Result<Option<ConceptRow>, rusqlite::Error> {
            conn.query_row(&sql, params![id], ConceptRow::from_row).optional()
        })
        .await
        .map_err(map_tr_err)?;
    row.map(ConceptRow::into_node).transpose()
}

/// Get a concept by its unique name. Matching is exact.
pub async fn get_concept_by_name(
    db: &Database,
    name: &str,
) -> Result<Option<ConceptNode>, MedTutorError> {
    let name = name.to_string();
    let sql = format!("SELECT {} FROM concepts WHERE name = ?1", ConceptRow::COLUMNS);
    let row = db
        .connection()
        .call(move |conn| -> Result<Option<ConceptRow>, rusqlite::Error> {
            conn.query_row(&sql, params![name], ConceptRow::from_row).optional()
        })
        .await
        .map_err(map_tr_err)?;
    row.map(ConceptRow::into_node).transpose()
}

/// List concepts ordered by name, optionally restricted to one category.
pub async fn list_concepts(
    db: &Database,
    category: Option<&str>,
) -> Result<Vec<ConceptNode>, MedTutorError> {
    let category = category.map(str::to_string);
    let rows = db
        .connection()
        .call(move |conn| -> Result<Vec<ConceptRow>, rusqlite::Error> {
            match &category {
                Some(category) => {
                    let mut stmt = conn.prepare(&format!(
                        "SELECT {} FROM concepts WHERE category = ?1 ORDER BY name",
                        ConceptRow::COLUMNS
                    ))?;
                    let rows = stmt.query_map(params![category], ConceptRow::from_row)?;
                    rows.collect()
                }
                None => {
                    let mut stmt = conn.prepare(&format!(
                        "SELECT {} FROM concepts ORDER BY name",
                        ConceptRow::COLUMNS
                    ))?;
                    let rows = stmt.query_map([], ConceptRow::from_row)?;
                    rows.collect()
                }
            }
        })
        .await
        .map_err(map_tr_err)?;
    rows.into_iter().map(ConceptRow::into_node).collect()
}

/// Delete a concept and, through the foreign key cascade, every relationship
/// touching it. Returns whether a row was removed.
pub async fn delete_concept(db: &Database, id: &str) -> Result<bool, MedTutorError> {
    let id = id.to_string();
    let removed = db
        .connection()
        .call(move |conn| -> Result<usize, rusqlite::Error> {
            conn.execute("DELETE FROM concepts WHERE id = ?1", params![id])
        })
        .await
        .map_err(map_tr_err)?;
    Ok(removed > 0)
}
