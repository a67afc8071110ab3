//! Terminology data models
//!
//! Strongly-typed structures for the two resource families the mapping
//! engine works with:
//!
//! - `code_system`: CodeSystem, its Concepts and their Designations
//! - `concept_map`: ConceptMap and its group/element/target mapping tree
//!
//! # Design Philosophy
//!
//! - **FHIR-shaped**: field names and JSON layout follow FHIR R4
//!   CodeSystem/ConceptMap, so nationally published terminology bundles
//!   (NAMASTE, Unani, ICD-11 fragments) load without preprocessing
//! - **Read-mostly**: entities are built once at import time and treated
//!   as immutable afterwards
//! - **Closed vocabularies**: `Equivalence` and `PublicationStatus` are
//!   enums; unknown codes are a deserialization error, not a silent default
//!
//! # Example
//!
//! ```rust
//! use ayulink_models::{CodeSystem, Equivalence};
//! use serde_json::json;
//!
//! let cs_json = json!({
//!     "resourceType": "CodeSystem",
//!     "url": "https://terminology.example.org/CodeSystem/namaste",
//!     "name": "NAMASTE",
//!     "status": "active",
//!     "concept": [
//!         { "code": "N001", "display": "Jvara (Fever)" }
//!     ]
//! });
//!
//! let cs: CodeSystem = serde_json::from_value(cs_json).unwrap();
//! assert_eq!(cs.concept.len(), 1);
//! assert_eq!(Equivalence::Equivalent.as_str(), "equivalent");
//! ```

pub mod code_system;
pub mod concept_map;
pub mod error;

pub use code_system::{CodeSystem, Concept, Designation, PublicationStatus};
pub use concept_map::{
    ConceptMap, DependsOn, Equivalence, MappingElement, MappingGroup, MappingTarget,
};
pub use error::{Error, Result};
