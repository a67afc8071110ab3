//! ConceptMap model
//!
//! A ConceptMap relates exactly two CodeSystems and owns a tree of
//! groups, elements and targets. Edges are directed source→target;
//! reverse lookup is a separate query because equivalence is not
//! guaranteed symmetric.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Directed mapping between two CodeSystems
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConceptMap {
    /// Resource type - always "ConceptMap"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    /// Logical id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Canonical identifier
    pub url: String,

    /// Name (computer friendly)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Canonical URL of the source CodeSystem
    pub source_uri: String,

    /// Canonical URL of the target CodeSystem
    pub target_uri: String,

    /// Mapping groups
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group: Vec<MappingGroup>,
}

fn default_resource_type() -> String {
    "ConceptMap".to_string()
}

/// Group of elements sharing source and target systems
///
/// `source`/`target` normally repeat the parent map's
/// sourceUri/targetUri; they are kept per-group because that is how
/// the published mapping files are shaped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MappingGroup {
    /// Source system URL for the elements of this group
    pub source: String,

    /// Target system URL for the targets of this group
    pub target: String,

    /// Mappings for individual source codes
    pub element: Vec<MappingElement>,
}

/// Source-side anchor of one or more mapping edges
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MappingElement {
    /// Code in the group's source system
    pub code: String,

    /// Display text from the source system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Destination edges for this source code
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target: Vec<MappingTarget>,
}

/// Destination side of a mapping edge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MappingTarget {
    /// Code in the group's target system
    pub code: String,

    /// Display text from the target system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// How closely the target matches the source
    pub equivalence: Equivalence,

    /// Human commentary on the mapping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Conditions under which this edge applies. Accepted as metadata;
    /// the engine does not evaluate them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<DependsOn>,
}

/// Property/system/value triple qualifying a mapping edge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependsOn {
    /// Property the condition refers to
    pub property: String,

    /// System of the condition value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Condition value
    pub value: String,
}

/// Closed equivalence vocabulary, carried through verbatim from
/// mapping data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equivalence {
    Equivalent,
    Relatedto,
    Wider,
    Narrower,
    Inexact,
    Unmatched,
}

impl Equivalence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Equivalence::Equivalent => "equivalent",
            Equivalence::Relatedto => "relatedto",
            Equivalence::Wider => "wider",
            Equivalence::Narrower => "narrower",
            Equivalence::Inexact => "inexact",
            Equivalence::Unmatched => "unmatched",
        }
    }
}

impl std::fmt::Display for Equivalence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConceptMap {
    /// Create a new ConceptMap with minimal required fields
    pub fn new(
        url: impl Into<String>,
        source_uri: impl Into<String>,
        target_uri: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: default_resource_type(),
            id: None,
            url: url.into(),
            name: None,
            source_uri: source_uri.into(),
            target_uri: target_uri.into(),
            group: Vec::new(),
        }
    }

    /// Check structural invariants: the map has at least one group and
    /// every element owns at least one target.
    pub fn validate(&self) -> Result<()> {
        if self.group.is_empty() {
            return Err(Error::EmptyConceptMap {
                url: self.url.clone(),
            });
        }
        for group in &self.group {
            for element in &group.element {
                if element.target.is_empty() {
                    return Err(Error::EmptyElement {
                        url: self.url.clone(),
                        code: element.code.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_fhir_shaped_json() {
        let map: ConceptMap = serde_json::from_value(json!({
            "resourceType": "ConceptMap",
            "url": "https://terminology.example.org/ConceptMap/namaste-to-icd11",
            "sourceUri": "https://terminology.example.org/CodeSystem/namaste",
            "targetUri": "http://id.who.int/icd/release/11/mms",
            "group": [{
                "source": "https://terminology.example.org/CodeSystem/namaste",
                "target": "http://id.who.int/icd/release/11/mms",
                "element": [{
                    "code": "N001",
                    "display": "Jvara (Fever)",
                    "target": [{
                        "code": "MD11.0",
                        "display": "Fever of other or unknown origin",
                        "equivalence": "equivalent",
                        "dependsOn": [
                            { "property": "context", "value": "traditional-medicine" }
                        ]
                    }]
                }]
            }]
        }))
        .unwrap();

        let target = &map.group[0].element[0].target[0];
        assert_eq!(target.equivalence, Equivalence::Equivalent);
        assert_eq!(target.depends_on[0].property, "context");
    }

    #[test]
    fn unknown_equivalence_is_rejected() {
        let result: std::result::Result<Equivalence, _> =
            serde_json::from_value(json!("approximately"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_element_without_targets() {
        let mut map = ConceptMap::new("urn:map", "urn:a", "urn:b");
        map.group.push(MappingGroup {
            source: "urn:a".to_string(),
            target: "urn:b".to_string(),
            element: vec![MappingElement {
                code: "X".to_string(),
                display: None,
                target: Vec::new(),
            }],
        });

        assert!(matches!(map.validate(), Err(Error::EmptyElement { .. })));
    }
}
