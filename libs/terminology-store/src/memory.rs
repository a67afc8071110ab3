//! In-memory terminology store
//!
//! Reference backend for both store traits. Mapping edges are indexed
//! at import time (forward and reverse), so request-path lookups are
//! hash probes rather than tree walks. All data behind one RwLock;
//! imports take the write half once per entity, which is what makes
//! entity creation atomic for readers.

use crate::error::{Error, Result};
use crate::traits::{ConceptStore, ForwardEdge, MappingStore, ReverseEdge};
use async_trait::async_trait;
use ayulink_models::{CodeSystem, Concept, ConceptMap};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// (system URL, code) index key
type SystemCode = (String, String);

struct SystemEntry {
    resource: CodeSystem,
    /// code -> position in `resource.concept`
    by_code: HashMap<String, usize>,
    /// parent code -> child codes, derived from `Concept.parent`
    children: HashMap<String, Vec<String>>,
}

#[derive(Default)]
struct Inner {
    systems: HashMap<String, SystemEntry>,
    maps: HashMap<String, ConceptMap>,
    forward: HashMap<SystemCode, Vec<ForwardEdge>>,
    reverse: HashMap<SystemCode, Vec<ReverseEdge>>,
}

/// In-memory store implementing both terminology traits
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Case-insensitive substring match over a concept's text fields
fn concept_matches(concept: &Concept, term_lower: &str, include_designations: bool) -> bool {
    if concept.code.to_lowercase().contains(term_lower)
        || concept.display.to_lowercase().contains(term_lower)
    {
        return true;
    }
    if let Some(definition) = &concept.definition {
        if definition.to_lowercase().contains(term_lower) {
            return true;
        }
    }
    if include_designations {
        return concept
            .designation
            .iter()
            .any(|d| d.value.to_lowercase().contains(term_lower));
    }
    false
}

#[async_trait]
impl ConceptStore for MemoryStore {
    async fn find_code_system(&self, url: &str) -> Result<Option<CodeSystem>> {
        let inner = self.inner.read().await;
        Ok(inner.systems.get(url).map(|e| e.resource.clone()))
    }

    async fn find_concept(&self, system_url: &str, code: &str) -> Result<Option<Concept>> {
        let inner = self.inner.read().await;
        let Some(entry) = inner.systems.get(system_url) else {
            return Ok(None);
        };
        Ok(entry
            .by_code
            .get(code)
            .map(|&idx| entry.resource.concept[idx].clone()))
    }

    async fn search_concepts(
        &self,
        system_url: &str,
        term: &str,
        include_designations: bool,
        limit: usize,
    ) -> Result<Vec<Concept>> {
        let term_lower = term.to_lowercase();
        let inner = self.inner.read().await;
        let Some(entry) = inner.systems.get(system_url) else {
            return Ok(Vec::new());
        };

        // Concepts are held in display-then-code order, so iteration
        // order is the stable tie-break order downstream.
        let mut out = Vec::new();
        for concept in &entry.resource.concept {
            if out.len() >= limit {
                break;
            }
            if concept_matches(concept, &term_lower, include_designations) {
                out.push(concept.clone());
            }
        }
        Ok(out)
    }

    async fn concept_children(&self, system_url: &str, code: &str) -> Result<Vec<String>> {
        let inner = self.inner.read().await;
        Ok(inner
            .systems
            .get(system_url)
            .and_then(|e| e.children.get(code))
            .cloned()
            .unwrap_or_default())
    }

    async fn create_code_system(&self, mut code_system: CodeSystem) -> Result<CodeSystem> {
        code_system.validate()?;
        if code_system.id.is_none() {
            code_system.id = Some(Uuid::new_v4().to_string());
        }

        // Canonical enumeration order: display ascending, then code.
        code_system
            .concept
            .sort_by(|a, b| (a.display.to_lowercase(), &a.code).cmp(&(b.display.to_lowercase(), &b.code)));

        let mut by_code = HashMap::with_capacity(code_system.concept.len());
        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        for (idx, concept) in code_system.concept.iter().enumerate() {
            by_code.insert(concept.code.clone(), idx);
            if let Some(parent) = &concept.parent {
                children
                    .entry(parent.clone())
                    .or_default()
                    .push(concept.code.clone());
            }
        }

        let mut inner = self.inner.write().await;
        if inner.systems.contains_key(&code_system.url) {
            return Err(Error::Conflict(format!(
                "CodeSystem already exists for url '{}'",
                code_system.url
            )));
        }

        tracing::info!(
            url = %code_system.url,
            concepts = code_system.concept.len(),
            "imported CodeSystem"
        );

        let created = code_system.clone();
        inner.systems.insert(
            code_system.url.clone(),
            SystemEntry {
                resource: code_system,
                by_code,
                children,
            },
        );
        Ok(created)
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn forward_targets(
        &self,
        source_system: &str,
        code: &str,
        target_system: Option<&str>,
    ) -> Result<Vec<ForwardEdge>> {
        let inner = self.inner.read().await;
        let key = (source_system.to_string(), code.to_string());
        let Some(edges) = inner.forward.get(&key) else {
            return Ok(Vec::new());
        };
        Ok(edges
            .iter()
            .filter(|e| target_system.map_or(true, |t| e.target_system == t))
            .cloned()
            .collect())
    }

    async fn reverse_sources(&self, target_system: &str, code: &str) -> Result<Vec<ReverseEdge>> {
        let inner = self.inner.read().await;
        let key = (target_system.to_string(), code.to_string());
        Ok(inner.reverse.get(&key).cloned().unwrap_or_default())
    }

    async fn find_concept_map(&self, url: &str) -> Result<Option<ConceptMap>> {
        let inner = self.inner.read().await;
        Ok(inner.maps.get(url).cloned())
    }

    async fn create_concept_map(&self, mut concept_map: ConceptMap) -> Result<ConceptMap> {
        concept_map.validate()?;
        if concept_map.id.is_none() {
            concept_map.id = Some(Uuid::new_v4().to_string());
        }

        // Materialize both directions before taking the lock. Each
        // target contributes one forward and one reverse edge, so
        // reverse lookup keeps every equivalence instead of the first.
        let mut forward: Vec<(SystemCode, ForwardEdge)> = Vec::new();
        let mut reverse: Vec<(SystemCode, ReverseEdge)> = Vec::new();
        for group in &concept_map.group {
            for element in &group.element {
                for target in &element.target {
                    forward.push((
                        (group.source.clone(), element.code.clone()),
                        ForwardEdge {
                            map_url: concept_map.url.clone(),
                            source_system: group.source.clone(),
                            source_code: element.code.clone(),
                            target_system: group.target.clone(),
                            target_code: target.code.clone(),
                            target_display: target.display.clone(),
                            equivalence: target.equivalence,
                            comment: target.comment.clone(),
                        },
                    ));
                    reverse.push((
                        (group.target.clone(), target.code.clone()),
                        ReverseEdge {
                            map_url: concept_map.url.clone(),
                            source_system: group.source.clone(),
                            source_code: element.code.clone(),
                            source_display: element.display.clone(),
                            equivalence: target.equivalence,
                        },
                    ));
                }
            }
        }

        let mut inner = self.inner.write().await;
        if inner.maps.contains_key(&concept_map.url) {
            return Err(Error::Conflict(format!(
                "ConceptMap already exists for url '{}'",
                concept_map.url
            )));
        }

        tracing::info!(
            url = %concept_map.url,
            source = %concept_map.source_uri,
            target = %concept_map.target_uri,
            edges = forward.len(),
            "imported ConceptMap"
        );

        for (key, edge) in forward {
            inner.forward.entry(key).or_default().push(edge);
        }
        for (key, edge) in reverse {
            inner.reverse.entry(key).or_default().push(edge);
        }
        let created = concept_map.clone();
        inner.maps.insert(concept_map.url.clone(), concept_map);
        Ok(created)
    }
}
