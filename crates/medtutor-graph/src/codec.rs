// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text codec for the property bags stored alongside concepts and relationships.

use medtutor_core::{MedTutorError, Properties};

/// Serialize a property bag for storage.
pub fn encode_properties(properties: &Properties) -> Result<String, MedTutorError> {
    serde_json::to_string(properties).map_err(|e| MedTutorError::Storage {
        source: Box::new(e),
    })
}

/// Deserialize a stored property bag. `None` and blank text decode to an empty map.
pub fn decode_properties(raw: Option<&str>) -> Result<Properties, MedTutorError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Properties::new()),
        Some(text) => serde_json::from_str(text).map_err(|e| MedTutorError::Storage {
            source: Box::new(e),
        }),
    }
}
