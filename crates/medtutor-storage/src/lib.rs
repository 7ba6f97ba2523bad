// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence for the medtutor concept graph.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a single-writer
//! concurrency model via `tokio-rusqlite`, and typed operations on concepts
//! and their relationships. [`SqliteStorage`] also implements
//! [`ConceptLookup`](medtutor_core::ConceptLookup), so the graph traversal
//! runs directly against the database.

pub mod adapter;
pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;

pub use adapter::SqliteStorage;
pub use database::Database;
pub use models::{NewConcept, NewRelationship};
