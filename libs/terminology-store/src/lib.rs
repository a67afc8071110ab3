//! Concept and mapping store access
//!
//! Defines the storage seam of the mapping engine: two async traits
//! (`ConceptStore`, `MappingStore`) that any backend can implement,
//! plus `MemoryStore`, the in-process reference backend used by the
//! engine's tests and the CLI.
//!
//! The engine is read-only over this layer except for import-time
//! creation of CodeSystems and ConceptMaps, which is atomic per
//! entity: readers never observe a partially created resource.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use traits::{ConceptStore, ForwardEdge, MappingStore, ReverseEdge};
