// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concept-graph traversal for medtutor.
//!
//! [`build_subgraph`] materializes the nodes and edges around a seed concept
//! using only the four lookups of [`ConceptLookup`](medtutor_core::ConceptLookup),
//! so any store (SQLite, in-memory, remote) can back it.

pub mod codec;
pub mod traversal;

pub use codec::{decode_properties, encode_properties};
pub use traversal::{build_subgraph, build_subgraph_default, Subgraph, DEFAULT_MAX_DEPTH};
