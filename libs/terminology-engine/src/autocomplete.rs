//! Autocomplete orchestration
//!
//! Fans a search term out across the requested systems, scores every
//! hit, optionally annotates hits with their forward mappings, then
//! merges, sorts and truncates.

use crate::error::{Error, Result};
use crate::score::score;
use crate::{TerminologyEngine, DEFAULT_AUTOCOMPLETE_LIMIT, MAX_AUTOCOMPLETE_LIMIT};
use ayulink_models::{Designation, Equivalence};
use serde::{Deserialize, Serialize};

/// Autocomplete request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteRequest {
    /// Free text or partial code; at least 2 characters after trimming
    pub search_term: String,

    /// System aliases to search. Empty means the default domain
    /// systems. Unknown aliases are skipped, not an error.
    #[serde(default)]
    pub systems: Vec<String>,

    /// Restrict the search to this single system URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_system: Option<String>,

    /// Maximum result count (default 20, clamped to 50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Include designations in search and response (default true)
    #[serde(default = "default_true")]
    pub include_designations: bool,

    /// Annotate each match with its forward mappings (default true)
    #[serde(default = "default_true")]
    pub include_mappings: bool,
}

fn default_true() -> bool {
    true
}

impl AutocompleteRequest {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            systems: Vec::new(),
            target_system: None,
            limit: None,
            include_designations: true,
            include_mappings: true,
        }
    }
}

/// One ranked autocomplete match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteMatch {
    /// 1-based position after the global sort
    pub rank: usize,
    pub score: u32,
    /// Canonical URL of the owning system
    pub system: String,
    pub code: String,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designations: Option<Vec<Designation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mappings: Option<Vec<MappingAnnotation>>,
}

/// Forward mapping attached to an autocomplete match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingAnnotation {
    pub target_system: String,
    pub target_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_display: Option<String>,
    pub equivalence: Equivalence,
}

/// Autocomplete response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteResponse {
    pub match_count: usize,
    pub matches: Vec<AutocompleteMatch>,
}

impl TerminologyEngine {
    /// Ranked cross-system search.
    ///
    /// Per-system results are capped at `limit` before the global
    /// merge, so one system cannot starve the others; the global list
    /// is then stable-sorted by descending score and truncated to
    /// `limit`. Equal scores keep first-seen store order.
    pub async fn autocomplete(&self, request: &AutocompleteRequest) -> Result<AutocompleteResponse> {
        let term = request.search_term.trim();
        if term.chars().count() < 2 {
            return Err(Error::InvalidArgument(
                "search term must be at least 2 characters".to_string(),
            ));
        }

        let limit = request
            .limit
            .unwrap_or(DEFAULT_AUTOCOMPLETE_LIMIT)
            .clamp(1, MAX_AUTOCOMPLETE_LIMIT);

        // Resolve aliases; unknown ones are skipped silently.
        let requested = if request.systems.is_empty() {
            self.registry().default_systems()
        } else {
            request
                .systems
                .iter()
                .filter_map(|alias| self.registry().resolve(alias))
                .map(|url| url.to_string())
                .collect()
        };
        let mut systems: Vec<String> = Vec::new();
        for url in requested {
            if !systems.contains(&url) {
                systems.push(url);
            }
        }
        if let Some(target) = &request.target_system {
            systems.retain(|url| url == target);
        }

        tracing::debug!(term, systems = systems.len(), limit, "autocomplete");

        let mut merged: Vec<AutocompleteMatch> = Vec::new();
        for system in &systems {
            let hits = self
                .concepts()
                .search_concepts(system, term, request.include_designations, limit)
                .await?;

            for concept in hits {
                let mappings = if request.include_mappings {
                    let edges = self
                        .mappings()
                        .forward_targets(system, &concept.code, None)
                        .await?;
                    Some(
                        edges
                            .into_iter()
                            .map(|e| MappingAnnotation {
                                target_system: e.target_system,
                                target_code: e.target_code,
                                target_display: e.target_display,
                                equivalence: e.equivalence,
                            })
                            .collect(),
                    )
                } else {
                    None
                };

                merged.push(AutocompleteMatch {
                    rank: 0,
                    score: score(&concept, term),
                    system: system.clone(),
                    code: concept.code,
                    display: concept.display,
                    definition: concept.definition,
                    designations: if request.include_designations && !concept.designation.is_empty()
                    {
                        Some(concept.designation)
                    } else {
                        None
                    },
                    mappings,
                });
            }
        }

        // sort_by is stable: ties keep per-system first-seen order.
        merged.sort_by(|a, b| b.score.cmp(&a.score));
        merged.truncate(limit);
        for (idx, entry) in merged.iter_mut().enumerate() {
            entry.rank = idx + 1;
        }

        Ok(AutocompleteResponse {
            match_count: merged.len(),
            matches: merged,
        })
    }
}
