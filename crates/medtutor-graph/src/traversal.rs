// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Depth-bounded breadth-first search around a seed concept.

use std::collections::{HashSet, VecDeque};

use medtutor_core::{ConceptEdge, ConceptLookup, ConceptNode, MedTutorError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hops from the seed when the caller gives no depth.
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Nodes and edges reachable from a seed concept, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subgraph {
    pub nodes: Vec<ConceptNode>,
    pub edges: Vec<ConceptEdge>,
}

impl Subgraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Collect the subgraph within `max_depth` hops of the concept named `seed_name`.
///
/// Edges are followed in both directions. Only nodes at depth `< max_depth`
/// are expanded; each expansion appends every edge touching the node and
/// every not-yet-visited neighbor. Node ids and edge ids are each emitted at
/// most once, so the search terminates on cyclic graphs and an edge between
/// two expanded nodes is not reported twice. An unknown seed yields an empty
/// subgraph. Lookup errors are returned immediately.
pub async fn build_subgraph<L>(
    lookup: &L,
    seed_name: &str,
    max_depth: u32,
) -> Result<Subgraph, MedTutorError>
where
    L: ConceptLookup + ?Sized,
{
    let Some(seed) = lookup.node_by_name(seed_name).await? else {
        debug!(seed = seed_name, "seed concept not found");
        return Ok(Subgraph::default());
    };

    let mut visited = HashSet::from([seed.id.clone()]);
    let mut seen_edges = HashSet::new();
    let mut queue = VecDeque::from([(seed.id.clone(), 0u32)]);
    let mut graph = Subgraph {
        nodes: vec![seed],
        edges: Vec::new(),
    };

    while let Some((id, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        let outgoing = lookup.edges_by_source(&id).await?;
        let incoming = lookup.edges_by_target(&id).await?;

        let neighbors = outgoing
            .iter()
            .map(|e| e.target_id.clone())
            .chain(incoming.iter().map(|e| e.source_id.clone()))
            .collect::<Vec<_>>();
        for edge in outgoing.into_iter().chain(incoming) {
            if seen_edges.insert(edge.id.clone()) {
                graph.edges.push(edge);
            }
        }

        for other in neighbors {
            if !visited.insert(other.clone()) {
                continue;
            }
            match lookup.node_by_id(&other).await? {
                Some(node) => {
                    graph.nodes.push(node);
                    queue.push_back((other, depth + 1));
                }
                None => debug!(id = other.as_str(), "dangling relationship endpoint"),
            }
        }
    }

    debug!(
        seed = seed_name,
        max_depth,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "subgraph built"
    );
    Ok(graph)
}

/// [`build_subgraph`] with [`DEFAULT_MAX_DEPTH`].
pub async fn build_subgraph_default<L>(
    lookup: &L,
    seed_name: &str,
) -> Result<Subgraph, MedTutorError>
where
    L: ConceptLookup + ?Sized,
{
    build_subgraph(lookup, seed_name, DEFAULT_MAX_DEPTH).await
}
