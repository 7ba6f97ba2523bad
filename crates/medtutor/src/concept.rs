// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `medtutor concept`: populate and inspect the concept graph.

use clap::Subcommand;
use medtutor_core::{ConceptNode, MedTutorError, Properties};
use medtutor_storage::{NewConcept, NewRelationship, SqliteStorage};
use tracing::info;

use crate::to_json;

#[derive(Subcommand, Debug)]
pub(crate) enum ConceptCommand {
    /// Add a concept.
    Add {
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Code in an external terminology (SNOMED CT, ICD-10, ...).
        #[arg(long)]
        code: Option<String>,
        /// Extra attributes as a JSON object.
        #[arg(long)]
        properties: Option<String>,
    },
    /// Add a directed relationship between two concepts, by name.
    Link {
        source: String,
        target: String,
        #[arg(long = "type", default_value = "related_to")]
        relationship_type: String,
        #[arg(long)]
        properties: Option<String>,
    },
    /// List concepts, optionally in one category.
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Remove a concept and its relationships.
    Remove { name: String },
}

pub(crate) async fn run_concept(
    storage: &SqliteStorage,
    command: ConceptCommand,
) -> Result<String, MedTutorError> {
    match command {
        ConceptCommand::Add {
            name,
            category,
            description,
            code,
            properties,
        } => {
            let mut concept = NewConcept::new(name, category)
                .with_description(description)
                .with_properties(parse_properties(properties.as_deref())?);
            concept.external_code = code;
            let created = storage.insert_concept(&concept).await?;
            info!(id = created.id.as_str(), name = created.name.as_str(), "concept added");
            to_json(&created)
        }
        ConceptCommand::Link {
            source,
            target,
            relationship_type,
            properties,
        } => {
            let source = require_concept(storage, &source).await?;
            let target = require_concept(storage, &target).await?;
            let relationship = NewRelationship::new(source.id, target.id, relationship_type)
                .with_properties(parse_properties(properties.as_deref())?);
            let created = storage.insert_relationship(&relationship).await?;
            info!(id = created.id.as_str(), "relationship added");
            to_json(&created)
        }
        ConceptCommand::List { category } => {
            to_json(&storage.list_concepts(category.as_deref()).await?)
        }
        ConceptCommand::Remove { name } => {
            let concept = require_concept(storage, &name).await?;
            storage.delete_concept(&concept.id).await?;
            Ok(format!("removed {name}"))
        }
    }
}

async fn require_concept(
    storage: &SqliteStorage,
    name: &str,
) -> Result<ConceptNode, MedTutorError> {
    storage
        .get_concept_by_name(name)
        .await?
        .ok_or_else(|| MedTutorError::Storage {
            source: format!("no concept named `{name}`").into(),
        })
}

/// Parse a `--properties` argument. Absent means empty.
fn parse_properties(raw: Option<&str>) -> Result<Properties, MedTutorError> {
    match raw {
        None => Ok(Properties::new()),
        Some(text) => serde_json::from_str(text).map_err(|e| {
            MedTutorError::Config(format!("--properties must be a JSON object: {e}"))
        }),
    }
}
