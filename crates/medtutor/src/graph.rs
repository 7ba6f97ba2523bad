// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `medtutor graph`: dump the subgraph around a concept.

use medtutor_config::MedTutorConfig;
use medtutor_core::{ConceptLookup, MedTutorError};
use medtutor_graph::build_subgraph;
use tracing::{info, warn};

use crate::to_json;

pub(crate) async fn run_graph(
    config: &MedTutorConfig,
    lookup: &dyn ConceptLookup,
    seed: &str,
    depth: Option<u32>,
) -> Result<String, MedTutorError> {
    let depth = depth.unwrap_or(config.graph.default_max_depth);
    let subgraph = build_subgraph(lookup, seed, depth).await?;
    if subgraph.is_empty() {
        warn!(seed, "no concept with this name");
    } else {
        info!(
            seed,
            depth,
            nodes = subgraph.nodes.len(),
            edges = subgraph.edges.len(),
            "subgraph extracted"
        );
    }
    to_json(&subgraph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_storage;
    use medtutor_storage::{NewConcept, NewRelationship};
    use medtutor_test_utils::MemoryConceptStore;
    use serde_json::Value;

    #[tokio::test]
    async fn unknown_seed_prints_empty_graph() {
        let store = MemoryConceptStore::new();
        let out = run_graph(&MedTutorConfig::default(), &store, "Nothing", None)
            .await
            .unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json, serde_json::json!({"nodes": [], "edges": []}));
    }

    #[tokio::test]
    async fn depth_defaults_to_config() {
        let store = MemoryConceptStore::new()
            .with_node("A")
            .with_node("B")
            .with_node("C")
            .with_edge("A", "B")
            .with_edge("B", "C");
        let mut config = MedTutorConfig::default();
        config.graph.default_max_depth = 1;

        let out = run_graph(&config, &store, "A", None).await.unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["nodes"].as_array().unwrap().len(), 2);

        let out = run_graph(&config, &store, "A", Some(2)).await.unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["nodes"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn reads_from_sqlite_store() {
        let (config, storage, _dir) = temp_storage().await;
        let kidney = storage
            .insert_concept(&NewConcept::new("Kidney", "anatomy"))
            .await
            .unwrap();
        let nephron = storage
            .insert_concept(&NewConcept::new("Nephron", "anatomy"))
            .await
            .unwrap();
        storage
            .insert_relationship(&NewRelationship::new(&kidney.id, &nephron.id, "has_part"))
            .await
            .unwrap();

        let out = run_graph(&config, &storage, "Nephron", None).await.unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["nodes"][0]["name"], "Nephron");
        assert_eq!(json["nodes"][1]["name"], "Kidney");
        assert_eq!(json["edges"][0]["relationshipType"], "has_part");
    }
}
