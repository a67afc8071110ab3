//! CodeSystem model
//!
//! A CodeSystem declares a coding system and owns its concepts. The
//! engine deals with three of these: the national traditional-medicine
//! list (NAMASTE), the regional Unani list, and ICD-11.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A code system with its concepts
///
/// Identity is the canonical `url`; it never changes once created.
/// Concepts may be appended over the system's lifetime but are
/// otherwise read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystem {
    /// Resource type - always "CodeSystem"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    /// Logical id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Canonical identifier, unique across the store
    pub url: String,

    /// Business version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name (computer friendly)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name (human friendly)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Publication status
    pub status: PublicationStatus,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Concepts in the code system
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concept: Vec<Concept>,
}

fn default_resource_type() -> String {
    "CodeSystem".to_string()
}

/// Publication status of a terminology resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublicationStatus {
    Draft,
    Active,
    Retired,
    Unknown,
}

/// One entry in a CodeSystem
///
/// `code` is unique within its owning system. `parent` is a
/// back-reference to another concept's code in the same system;
/// single parent, many children. The children index is derived by the
/// store, not embedded here, so the tree has no ownership cycles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Concept {
    /// Code that identifies the concept
    pub code: String,

    /// Text to display to the user
    pub display: String,

    /// Formal definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    /// Additional representations for the concept
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub designation: Vec<Designation>,

    /// Code of the parent concept, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Language-tagged alternate text for a concept
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Designation {
    /// BCP-47 language tag
    pub language: String,

    /// The alternate text
    pub value: String,
}

impl CodeSystem {
    /// Create a new CodeSystem with minimal required fields
    pub fn new(url: impl Into<String>, status: PublicationStatus) -> Self {
        Self {
            resource_type: default_resource_type(),
            id: None,
            url: url.into(),
            version: None,
            name: None,
            title: None,
            status,
            description: None,
            concept: Vec::new(),
        }
    }

    /// Check structural invariants: concept codes are unique within the
    /// system, and every `parent` reference resolves to a concept in
    /// this system.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.concept.len());
        for concept in &self.concept {
            if !seen.insert(concept.code.as_str()) {
                return Err(Error::DuplicateConceptCode {
                    url: self.url.clone(),
                    code: concept.code.clone(),
                });
            }
        }
        for concept in &self.concept {
            if let Some(parent) = &concept.parent {
                if !seen.contains(parent.as_str()) {
                    return Err(Error::UnknownParent {
                        url: self.url.clone(),
                        code: concept.code.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Find a concept by exact code
    pub fn find_concept(&self, code: &str) -> Option<&Concept> {
        self.concept.iter().find(|c| c.code == code)
    }
}

impl Concept {
    pub fn new(code: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display: display.into(),
            definition: None,
            designation: Vec::new(),
            parent: None,
        }
    }
}
