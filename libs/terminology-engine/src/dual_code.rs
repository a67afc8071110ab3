//! Dual-code lookup
//!
//! Composes the Concept Store and the translation resolver to report,
//! for each supplied code, both the concept and any mapped
//! counterpart. Slot A codes are resolved against the traditional
//! medicine systems and translated forward; slot B codes are resolved
//! against the classification systems and translated in reverse.
//! A miss in one slot never fails the other.

use crate::error::{Error, Result};
use crate::TerminologyEngine;
use ayulink_models::Equivalence;
use serde::{Deserialize, Serialize};

/// Dual-code lookup request; at least one of `code_a`/`code_b`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualCodeRequest {
    /// Code in a traditional-medicine system (NAMASTE/Unani)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_a: Option<String>,

    /// Code in a classification system (ICD-11/TM2)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_b: Option<String>,

    /// Include concept definitions in the response
    #[serde(default)]
    pub include_details: bool,

    /// Include parent/children codes from the hierarchy index
    #[serde(default)]
    pub include_hierarchy: bool,
}

/// Per-code outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DualCodeStatus {
    FoundMapped,
    FoundUnmapped,
    NotFound,
}

/// The resolved concept for one slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptSummary {
    pub system: String,
    pub code: String,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

/// A mapped counterpart concept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappedConcept {
    pub system: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    pub equivalence: Equivalence,
}

/// Parent and children of the resolved concept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptHierarchy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

/// Outcome for one supplied code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DualCodeSlot {
    pub status: DualCodeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<ConceptSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapped: Option<Vec<MappedConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<ConceptHierarchy>,
}

/// Dual-code lookup response; one slot per supplied code
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualCodeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_a: Option<DualCodeSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_b: Option<DualCodeSlot>,
}

impl TerminologyEngine {
    /// Resolve one or both sides of a dual-coded finding.
    ///
    /// Fails with `InvalidArgument` only when both codes are absent;
    /// an unknown code yields a `not-found` slot without failing the
    /// other slot.
    pub async fn dual_code_lookup(&self, request: &DualCodeRequest) -> Result<DualCodeResponse> {
        if request.code_a.is_none() && request.code_b.is_none() {
            return Err(Error::InvalidArgument(
                "at least one of codeA or codeB is required".to_string(),
            ));
        }

        let code_a = match &request.code_a {
            Some(code) => Some(self.resolve_slot(code, true, request).await?),
            None => None,
        };
        let code_b = match &request.code_b {
            Some(code) => Some(self.resolve_slot(code, false, request).await?),
            None => None,
        };

        Ok(DualCodeResponse { code_a, code_b })
    }

    /// Resolve one slot: try each system URL of the slot's domain until
    /// the code is found, then surface its mappings (forward for
    /// traditional codes, reverse for classification codes).
    async fn resolve_slot(
        &self,
        code: &str,
        traditional: bool,
        request: &DualCodeRequest,
    ) -> Result<DualCodeSlot> {
        let systems = if traditional {
            self.registry().traditional_systems()
        } else {
            self.registry().classification_systems()
        };

        let mut resolved = None;
        for system in systems {
            if let Some(concept) = self.concepts().find_concept(&system, code).await? {
                resolved = Some((system, concept));
                break;
            }
        }

        let Some((system, concept)) = resolved else {
            tracing::debug!(code, traditional, "dual-code: concept not found");
            return Ok(DualCodeSlot {
                status: DualCodeStatus::NotFound,
                concept: None,
                mapped: None,
                hierarchy: None,
            });
        };

        let mapped: Vec<MappedConcept> = if traditional {
            self.mappings()
                .forward_targets(&system, code, None)
                .await?
                .into_iter()
                .map(|e| MappedConcept {
                    system: e.target_system,
                    code: e.target_code,
                    display: e.target_display,
                    equivalence: e.equivalence,
                })
                .collect()
        } else {
            self.mappings()
                .reverse_sources(&system, code)
                .await?
                .into_iter()
                .map(|e| MappedConcept {
                    system: e.source_system,
                    code: e.source_code,
                    display: e.source_display,
                    equivalence: e.equivalence,
                })
                .collect()
        };

        let hierarchy = if request.include_hierarchy {
            let children = self.concepts().concept_children(&system, code).await?;
            Some(ConceptHierarchy {
                parent: concept.parent.clone(),
                children,
            })
        } else {
            None
        };

        let status = if mapped.is_empty() {
            DualCodeStatus::FoundUnmapped
        } else {
            DualCodeStatus::FoundMapped
        };

        Ok(DualCodeSlot {
            status,
            concept: Some(ConceptSummary {
                system,
                code: concept.code,
                display: concept.display,
                definition: if request.include_details {
                    concept.definition
                } else {
                    None
                },
            }),
            mapped: if mapped.is_empty() { None } else { Some(mapped) },
            hierarchy,
        })
    }
}
