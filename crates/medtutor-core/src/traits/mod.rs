// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! All adapters extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod concept;
pub mod provider;
pub mod storage;

pub use adapter::PluginAdapter;
pub use concept::ConceptLookup;
pub use provider::ProviderAdapter;
pub use storage::StorageAdapter;
