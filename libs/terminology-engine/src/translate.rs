//! Code-to-code translation
//!
//! Forward translation walks every matching forward edge; reverse
//! translation walks the reverse index. The two are independent
//! queries, not inverses of each other, because equivalence is not
//! guaranteed symmetric in the mapping data.

use crate::error::{Error, Result};
use crate::TerminologyEngine;
use ayulink_models::Equivalence;
use serde::{Deserialize, Serialize};

/// Forward translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// Code to translate
    pub code: String,

    /// System the code belongs to (URL or registered alias)
    pub source_system: String,

    /// Restrict matches to this target system URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_system: Option<String>,
}

/// The source concept a translation was anchored on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConcept {
    pub system: String,
    pub code: String,
    pub display: String,
}

/// One forward translation match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationMatch {
    pub equivalence: Equivalence,
    pub target_system: String,
    pub target_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Forward translation response
///
/// `found=false` with empty `matches` means the source code itself is
/// unknown; `found=true` with empty `matches` means known but
/// unmapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConcept>,
    pub matches: Vec<TranslationMatch>,
}

/// One reverse translation match (target-side code back to its
/// source-side anchors)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseMatch {
    pub source_system: String,
    pub source_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_display: Option<String>,
    pub equivalence: Equivalence,
}

impl TerminologyEngine {
    /// Forward translation: every target of every matching element
    /// across every matching ConceptMap.
    ///
    /// Existence of the source code is checked first against the
    /// Concept Store, so callers can distinguish "concept exists but
    /// unmapped" from "concept does not exist".
    pub async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse> {
        if request.code.trim().is_empty() {
            return Err(Error::InvalidArgument("code must not be empty".to_string()));
        }
        if request.source_system.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "sourceSystem must not be empty".to_string(),
            ));
        }

        let source_system = self
            .registry()
            .resolve(&request.source_system)
            .unwrap_or(&request.source_system)
            .to_string();

        let Some(concept) = self
            .concepts()
            .find_concept(&source_system, &request.code)
            .await?
        else {
            tracing::debug!(code = %request.code, system = %source_system, "translate: source code unknown");
            return Ok(TranslateResponse {
                found: false,
                source: None,
                matches: Vec::new(),
            });
        };

        let edges = self
            .mappings()
            .forward_targets(&source_system, &request.code, request.target_system.as_deref())
            .await?;

        Ok(TranslateResponse {
            found: true,
            source: Some(SourceConcept {
                system: source_system,
                code: concept.code,
                display: concept.display,
            }),
            matches: edges
                .into_iter()
                .map(|e| TranslationMatch {
                    equivalence: e.equivalence,
                    target_system: e.target_system,
                    target_code: e.target_code,
                    target_display: e.target_display,
                    comment: e.comment,
                })
                .collect(),
        })
    }

    /// Reverse translation: all source-side edges whose target matches
    /// the given (system, code) pair. Every matching target
    /// contributes its own edge, so an element with several targets of
    /// different equivalences surfaces all of them.
    pub async fn reverse_translate(
        &self,
        code: &str,
        target_system: &str,
    ) -> Result<Vec<ReverseMatch>> {
        if code.trim().is_empty() {
            return Err(Error::InvalidArgument("code must not be empty".to_string()));
        }
        if target_system.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "targetSystem must not be empty".to_string(),
            ));
        }

        let target_system = self
            .registry()
            .resolve(target_system)
            .unwrap_or(target_system)
            .to_string();

        let edges = self.mappings().reverse_sources(&target_system, code).await?;
        Ok(edges
            .into_iter()
            .map(|e| ReverseMatch {
                source_system: e.source_system,
                source_code: e.source_code,
                source_display: e.source_display,
                equivalence: e.equivalence,
            })
            .collect())
    }
}
