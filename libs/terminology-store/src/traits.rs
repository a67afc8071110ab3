//! Core traits for terminology storage backends

use crate::Result;
use async_trait::async_trait;
use ayulink_models::{CodeSystem, Concept, ConceptMap, Equivalence};

/// A materialized forward mapping edge (source → target)
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardEdge {
    /// Canonical URL of the ConceptMap the edge came from
    pub map_url: String,
    /// Source system URL
    pub source_system: String,
    /// Source code
    pub source_code: String,
    /// Target system URL
    pub target_system: String,
    /// Target code
    pub target_code: String,
    /// Target display, if the mapping data carries one
    pub target_display: Option<String>,
    /// Equivalence label, carried verbatim
    pub equivalence: Equivalence,
    /// Human commentary on the mapping
    pub comment: Option<String>,
}

/// A materialized reverse mapping edge (target → source)
///
/// One reverse edge exists per matching target, so an element with
/// several targets of different equivalences keeps all of them under
/// reverse lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseEdge {
    /// Canonical URL of the ConceptMap the edge came from
    pub map_url: String,
    /// Source system URL (the ConceptMap's sourceUri)
    pub source_system: String,
    /// Source code (the element's code)
    pub source_code: String,
    /// Source display (the element's display)
    pub source_display: Option<String>,
    /// Equivalence label of the matching target
    pub equivalence: Equivalence,
}

/// Read/import access to CodeSystems and their concepts
///
/// Backends must return search results in a stable order (display
/// ascending, then code ascending) so that score ties downstream stay
/// deterministic.
#[async_trait]
pub trait ConceptStore: Send + Sync {
    /// Find a CodeSystem by canonical URL
    async fn find_code_system(&self, url: &str) -> Result<Option<CodeSystem>>;

    /// Find a concept by exact code within a system
    ///
    /// # Returns
    /// * `Ok(Some(concept))` - system known and code present
    /// * `Ok(None)` - system unknown, or code absent from it
    async fn find_concept(&self, system_url: &str, code: &str) -> Result<Option<Concept>>;

    /// Search concepts of one system by case-insensitive substring over
    /// code, display, definition and (when `include_designations`) any
    /// designation value. At most `limit` results, in store order.
    async fn search_concepts(
        &self,
        system_url: &str,
        term: &str,
        include_designations: bool,
        limit: usize,
    ) -> Result<Vec<Concept>>;

    /// Codes of the direct children of a concept, from the derived
    /// hierarchy index. Empty when the concept is a leaf or unknown.
    async fn concept_children(&self, system_url: &str, code: &str) -> Result<Vec<String>>;

    /// Create a CodeSystem together with its initial concept set as a
    /// single atomic unit
    ///
    /// # Errors
    /// * `Conflict` - a system with the same canonical URL exists
    /// * `InvalidResource` - the system violates model invariants
    async fn create_code_system(&self, code_system: CodeSystem) -> Result<CodeSystem>;
}

/// Read/import access to ConceptMap edges
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// All forward edges for a (system, code) source pair, optionally
    /// constrained to a target system. Every matching ConceptMap
    /// contributes; absence of mapping data is an empty Vec, not an
    /// error.
    async fn forward_targets(
        &self,
        source_system: &str,
        code: &str,
        target_system: Option<&str>,
    ) -> Result<Vec<ForwardEdge>>;

    /// All reverse edges for a (system, code) target pair
    async fn reverse_sources(&self, target_system: &str, code: &str) -> Result<Vec<ReverseEdge>>;

    /// Find a ConceptMap by canonical URL
    async fn find_concept_map(&self, url: &str) -> Result<Option<ConceptMap>>;

    /// Create a ConceptMap with its whole group/element/target tree as
    /// a single atomic unit
    ///
    /// # Errors
    /// * `Conflict` - a map with the same canonical URL exists
    /// * `InvalidResource` - the map violates model invariants
    async fn create_concept_map(&self, concept_map: ConceptMap) -> Result<ConceptMap>;
}
