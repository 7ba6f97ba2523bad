// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Complexity and medical-domain classification.
//!
//! Both classifiers lower-case the input and use plain substring containment
//! against the keyword tables below. The tables are data so they can be
//! reviewed and tested on their own.

use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Reasoning demand of a request, ordered from least to most demanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    /// Short factual lookups.
    Simple,
    /// Long requests with no complex or expert phrasing.
    Medium,
    /// Multi-step clinical reasoning.
    Complex,
    /// Frontier or contested material.
    Expert,
}

/// Phrases that put a request in the expert tier. Checked before [`COMPLEX_PHRASES`].
pub const EXPERT_PHRASES: &[&str] = &[
    "rare disease",
    "controversial treatment",
    "latest research",
    "emerging evidence",
    "experimental therapy",
    "novel therapy",
    "clinical trial data",
    "orphan drug",
    "conflicting guidelines",
    "cutting-edge",
];

/// Phrases that put a request in the complex tier.
pub const COMPLEX_PHRASES: &[&str] = &[
    "differential diagnosis",
    "pathophysiology",
    "compare and contrast",
    "mechanism of action",
    "pharmacokinetics",
    "multi-system",
    "complications of",
    "case study",
    "clinical reasoning",
    "management plan",
    "evidence-based",
];

/// Requests longer than this many characters are at least medium complexity.
pub const MEDIUM_LENGTH_THRESHOLD: usize = 200;

/// Classify the reasoning demand of `text`.
///
/// Expert phrases win over complex phrases, which win over length. There is
/// no scoring across tiers: the first tier with any match is returned.
pub fn classify_complexity(text: &str) -> ComplexityLevel {
    let lower = text.to_lowercase();

    if EXPERT_PHRASES.iter().any(|p| lower.contains(p)) {
        ComplexityLevel::Expert
    } else if COMPLEX_PHRASES.iter().any(|p| lower.contains(p)) {
        ComplexityLevel::Complex
    } else if text.chars().count() > MEDIUM_LENGTH_THRESHOLD {
        ComplexityLevel::Medium
    } else {
        ComplexityLevel::Simple
    }
}

/// Medical discipline a request belongs to.
///
/// Declaration order is the tie-break order of [`classify_domain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MedicalDomain {
    /// No domain keyword matched.
    General,
    /// Disease processes and tissue changes.
    Pathology,
    /// Drugs, dosing and adverse effects.
    Pharmacology,
    /// Body structures.
    Anatomy,
    /// Normal body function.
    Physiology,
    /// Symptoms, workup and differentials.
    Diagnosis,
    /// Therapies and interventions.
    Treatment,
    /// Acute and critical care.
    Emergency,
    /// Infants, children and adolescents.
    Pediatrics,
    /// Older adults.
    Geriatrics,
}

impl MedicalDomain {
    /// Trigger keywords for this domain. `General` has none; it is the fallback.
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            MedicalDomain::General => &[],
            MedicalDomain::Pathology => &[
                "pathology", "lesion", "tumor", "neoplasm", "biopsy", "histolog",
                "necrosis", "inflammation",
            ],
            MedicalDomain::Pharmacology => &[
                "drug", "medication", "dose", "pharmacokinetic", "side effect",
                "receptor", "antibiotic", "contraindication",
            ],
            MedicalDomain::Anatomy => &[
                "anatomy", "muscle", "bone", "nerve", "artery", "vein", "ligament",
                "foramen",
            ],
            MedicalDomain::Physiology => &[
                "physiology", "homeostasis", "hormone", "metabolism", "cardiac output",
                "membrane potential", "renal clearance",
            ],
            MedicalDomain::Diagnosis => &[
                "diagnosis", "diagnose", "symptom", "differential", "workup", "imaging",
                "laboratory",
            ],
            MedicalDomain::Treatment => &[
                "treatment", "therapy", "management", "surgery", "intervention",
                "prescribe",
            ],
            MedicalDomain::Emergency => &[
                "emergency", "trauma", "resuscitation", "shock", "cardiac arrest",
                "triage",
            ],
            MedicalDomain::Pediatrics => &[
                "pediatric", "child", "infant", "neonat", "newborn", "adolescent",
            ],
            MedicalDomain::Geriatrics => &[
                "geriatric", "elderly", "older adult", "dementia", "frailty",
                "polypharmacy",
            ],
        }
    }
}

/// Classify the medical domain of `text`.
///
/// Each keyword of a domain counts once if it occurs anywhere in the text.
/// The domain with the most hits wins; ties go to the domain declared first.
/// No hits at all yields [`MedicalDomain::General`].
pub fn classify_domain(text: &str) -> MedicalDomain {
    let lower = text.to_lowercase();

    let mut best = MedicalDomain::General;
    let mut best_score = 0;
    for domain in MedicalDomain::iter() {
        let score = domain
            .keywords()
            .iter()
            .filter(|k| lower.contains(*k))
            .count();
        // Strictly greater: an equal later score never displaces an earlier domain.
        if score > best_score {
            best = domain;
            best_score = score;
        }
    }
    best
}
