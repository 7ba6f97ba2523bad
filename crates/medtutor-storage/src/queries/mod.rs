// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed operations on the concept graph tables.

pub mod concepts;
pub mod relationships;
