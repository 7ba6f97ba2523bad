// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subgraph extraction against a real SQLite concept store.

use std::collections::HashSet;

use medtutor_config::model::StorageConfig;
use medtutor_core::StorageAdapter;
use medtutor_graph::{build_subgraph, build_subgraph_default};
use medtutor_storage::{NewConcept, NewRelationship, SqliteStorage};
use tempfile::TempDir;

async fn open_storage() -> (SqliteStorage, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let storage = SqliteStorage::new(StorageConfig {
        database_path: dir.path().join("graph.db").to_string_lossy().into_owned(),
        wal_mode: true,
    });
    storage.initialize().await.unwrap();
    (storage, dir)
}

/// Insert concepts by name and return their ids in the same order.
async fn add_concepts(storage: &SqliteStorage, names: &[(&str, &str)]) -> Vec<String> {
    let mut ids = Vec::new();
    for (name, category) in names {
        let concept = storage
            .insert_concept(&NewConcept::new(*name, *category))
            .await
            .unwrap();
        ids.push(concept.id);
    }
    ids
}

async fn link(storage: &SqliteStorage, source: &str, target: &str, kind: &str) {
    storage
        .insert_relationship(&NewRelationship::new(source, target, kind))
        .await
        .unwrap();
}

#[tokio::test]
async fn diabetes_neighborhood_at_default_depth() {
    let (storage, _dir) = open_storage().await;
    let ids = add_concepts(
        &storage,
        &[
            ("Type 2 diabetes", "disease"),
            ("Insulin resistance", "mechanism"),
            ("Metformin", "drug"),
            ("Lactic acidosis", "complication"),
            ("Obesity", "risk_factor"),
        ],
    )
    .await;
    let (diabetes, resistance, metformin, acidosis, obesity) =
        (&ids[0], &ids[1], &ids[2], &ids[3], &ids[4]);

    link(&storage, diabetes, resistance, "caused_by").await;
    link(&storage, metformin, diabetes, "treats").await;
    link(&storage, metformin, acidosis, "may_cause").await;
    link(&storage, obesity, resistance, "promotes").await;

    let graph = build_subgraph_default(&storage, "Type 2 diabetes").await.unwrap();

    let names: HashSet<_> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        names,
        HashSet::from([
            "Type 2 diabetes",
            "Insulin resistance",
            "Metformin",
            "Lactic acidosis",
            "Obesity",
        ])
    );
    assert_eq!(graph.nodes[0].name, "Type 2 diabetes");
    assert_eq!(graph.edges.len(), 4);
}

#[tokio::test]
async fn depth_one_stops_at_direct_neighbors() {
    let (storage, _dir) = open_storage().await;
    let ids = add_concepts(
        &storage,
        &[("Heart", "anatomy"), ("Aorta", "anatomy"), ("Aortic arch", "anatomy")],
    )
    .await;
    link(&storage, &ids[0], &ids[1], "connects_to").await;
    link(&storage, &ids[1], &ids[2], "has_part").await;

    let graph = build_subgraph(&storage, "Heart", 1).await.unwrap();
    let names: Vec<_> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Heart", "Aorta"]);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].relationship_type, "connects_to");
}

#[tokio::test]
async fn cyclic_graph_terminates() {
    let (storage, _dir) = open_storage().await;
    let ids = add_concepts(
        &storage,
        &[
            ("Hypertension", "disease"),
            ("Renal damage", "complication"),
            ("RAAS activation", "mechanism"),
        ],
    )
    .await;
    link(&storage, &ids[0], &ids[1], "causes").await;
    link(&storage, &ids[1], &ids[2], "triggers").await;
    link(&storage, &ids[2], &ids[0], "worsens").await;

    let graph = build_subgraph(&storage, "Hypertension", 10).await.unwrap();
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges.len(), 3);
}

#[tokio::test]
async fn unknown_seed_returns_empty() {
    let (storage, _dir) = open_storage().await;
    let graph = build_subgraph(&storage, "Nonexistent", 2).await.unwrap();
    assert!(graph.is_empty());
}
