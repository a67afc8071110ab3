//! Terminology mapping & translation engine
//!
//! The core of the dual-coding service: given concept and mapping data
//! for the NAMASTE, Unani and ICD-11 code systems, answer three
//! questions:
//!
//! - **Autocomplete**: ranked partial-text search across systems, with
//!   optional mapping annotations (`autocomplete`)
//! - **Translate**: forward and reverse code-to-code translation over
//!   explicit ConceptMap edges (`translate`, `reverse_translate`)
//! - **Dual-code lookup**: report a concept and its mapped counterpart
//!   for one or both sides of a dual-coded finding (`dual_code_lookup`)
//!
//! Every operation is a stateless, single-pass read over the injected
//! stores. Cancellation is cooperative: drop the returned future (for
//! example via `tokio::time::timeout`) and outstanding store queries
//! are abandoned with it. Nothing is retried internally.

pub mod autocomplete;
pub mod dual_code;
pub mod error;
pub mod registry;
pub mod score;
pub mod translate;

pub use autocomplete::{
    AutocompleteMatch, AutocompleteRequest, AutocompleteResponse, MappingAnnotation,
};
pub use dual_code::{
    ConceptHierarchy, ConceptSummary, DualCodeRequest, DualCodeResponse, DualCodeSlot,
    DualCodeStatus, MappedConcept,
};
pub use error::{Error, Result};
pub use registry::SystemRegistry;
pub use score::score;
pub use translate::{
    ReverseMatch, SourceConcept, TranslateRequest, TranslateResponse, TranslationMatch,
};

use ayulink_store::{ConceptStore, MappingStore};
use std::sync::Arc;

/// Hard cap on autocomplete result list size
pub const MAX_AUTOCOMPLETE_LIMIT: usize = 50;
/// Default autocomplete result list size
pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 20;

/// The engine itself: injected stores plus the system alias registry
#[derive(Clone)]
pub struct TerminologyEngine {
    concepts: Arc<dyn ConceptStore>,
    mappings: Arc<dyn MappingStore>,
    registry: SystemRegistry,
}

impl TerminologyEngine {
    pub fn new(
        concepts: Arc<dyn ConceptStore>,
        mappings: Arc<dyn MappingStore>,
        registry: SystemRegistry,
    ) -> Self {
        Self {
            concepts,
            mappings,
            registry,
        }
    }

    pub fn registry(&self) -> &SystemRegistry {
        &self.registry
    }

    pub(crate) fn concepts(&self) -> &dyn ConceptStore {
        self.concepts.as_ref()
    }

    pub(crate) fn mappings(&self) -> &dyn MappingStore {
        self.mappings.as_ref()
    }
}
