// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the storage and concept-lookup traits.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use medtutor_config::model::StorageConfig;
use medtutor_core::{
    AdapterType, ConceptEdge, ConceptLookup, ConceptNode, HealthStatus, MedTutorError,
    PluginAdapter, StorageAdapter,
};

use crate::database::{checkpoint, map_tr_err, Database};
use crate::models::{NewConcept, NewRelationship};
use crate::queries;

/// SQLite-backed concept store.
///
/// The database is opened lazily by [`StorageAdapter::initialize`]; every
/// other operation fails with a storage error until then.
pub struct SqliteStorage {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    fn db(&self) -> Result<&Database, MedTutorError> {
        self.db.get().ok_or_else(|| MedTutorError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }

    pub async fn insert_concept(&self, concept: &NewConcept) -> Result<ConceptNode, MedTutorError> {
        queries::concepts::insert_concept(self.db()?, concept).await
    }

    pub async fn get_concept_by_id(&self, id: &str) -> Result<Option<ConceptNode>, MedTutorError> {
        queries::concepts::get_concept_by_id(self.db()?, id).await
    }

    pub async fn get_concept_by_name(
        &self,
        name: &str,
    ) -> Result<Option<ConceptNode>, MedTutorError> {
        queries::concepts::get_concept_by_name(self.db()?, name).await
    }

    pub async fn list_concepts(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<ConceptNode>, MedTutorError> {
        queries::concepts::list_concepts(self.db()?, category).await
    }

    pub async fn delete_concept(&self, id: &str) -> Result<bool, MedTutorError> {
        queries::concepts::delete_concept(self.db()?, id).await
    }

    pub async fn insert_relationship(
        &self,
        relationship: &NewRelationship,
    ) -> Result<ConceptEdge, MedTutorError> {
        queries::relationships::insert_relationship(self.db()?, relationship).await
    }

    pub async fn relationships_by_source(
        &self,
        source_id: &str,
    ) -> Result<Vec<ConceptEdge>, MedTutorError> {
        queries::relationships::relationships_by_source(self.db()?, source_id).await
    }

    pub async fn relationships_by_target(
        &self,
        target_id: &str,
    ) -> Result<Vec<ConceptEdge>, MedTutorError> {
        queries::relationships::relationships_by_target(self.db()?, target_id).await
    }
}

#[async_trait]
impl PluginAdapter for SqliteStorage {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, MedTutorError> {
        self.db()?
            .connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), MedTutorError> {
        if let Some(db) = self.db.get() {
            checkpoint(db.connection()).await?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for SqliteStorage {
    async fn initialize(&self) -> Result<(), MedTutorError> {
        let db = Database::open_with_mode(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| MedTutorError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite storage initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), MedTutorError> {
        checkpoint(self.db()?.connection()).await?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

#[async_trait]
impl ConceptLookup for SqliteStorage {
    async fn node_by_name(&self, name: &str) -> Result<Option<ConceptNode>, MedTutorError> {
        self.get_concept_by_name(name).await
    }

    async fn node_by_id(&self, id: &str) -> Result<Option<ConceptNode>, MedTutorError> {
        self.get_concept_by_id(id).await
    }

    async fn edges_by_source(&self, id: &str) -> Result<Vec<ConceptEdge>, MedTutorError> {
        self.relationships_by_source(id).await
    }

    async fn edges_by_target(&self, id: &str) -> Result<Vec<ConceptEdge>, MedTutorError> {
        self.relationships_by_target(id).await
    }
}
