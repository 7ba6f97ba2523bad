// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for medtutor.
//!
//! Provides the error type, the shared concept-graph and provider types,
//! and the adapter traits implemented by the storage and provider crates.

pub mod error;
pub mod traits;
pub mod types;

pub use error::MedTutorError;
pub use types::{AdapterType, ConceptEdge, ConceptNode, HealthStatus, Properties};

pub use traits::{ConceptLookup, PluginAdapter, ProviderAdapter, StorageAdapter};
