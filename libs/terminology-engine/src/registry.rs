//! System alias registry
//!
//! Maps short request aliases ("namaste", "unani", "icd11", "tm2") to
//! canonical CodeSystem URLs, and groups the systems into the two
//! dual-coding domains: traditional-medicine systems (source-like) and
//! classification systems (target-like). The registry is plain
//! injected state; deployments override the URLs at construction.

/// Canonical URL of the national traditional-medicine code list
pub const NAMASTE_URL: &str = "https://terminology.ayush.gov.in/CodeSystem/namaste";
/// Canonical URL of the regional Unani code list
pub const UNANI_URL: &str = "https://terminology.ayush.gov.in/CodeSystem/unani";
/// Canonical URL of the ICD-11 MMS linearization
pub const ICD11_URL: &str = "http://id.who.int/icd/release/11/mms";
/// Canonical URL of the ICD-11 traditional medicine chapter (TM2)
pub const ICD11_TM2_URL: &str = "http://id.who.int/icd/release/11/tm2";

#[derive(Debug, Clone)]
struct SystemEntry {
    alias: String,
    url: String,
    /// Source-like (traditional medicine) vs target-like
    /// (classification) for dual-code slot resolution
    traditional: bool,
    /// Part of the default autocomplete fan-out
    default: bool,
}

/// Alias-to-URL resolution for the registered code systems
#[derive(Debug, Clone)]
pub struct SystemRegistry {
    entries: Vec<SystemEntry>,
}

impl SystemRegistry {
    /// Registry with the three domain systems plus the TM2 alias
    pub fn with_defaults() -> Self {
        let mut registry = Self {
            entries: Vec::new(),
        };
        registry.register("namaste", NAMASTE_URL, true, true);
        registry.register("unani", UNANI_URL, true, true);
        registry.register("icd11", ICD11_URL, false, true);
        registry.register("tm2", ICD11_TM2_URL, false, false);
        registry
    }

    /// Empty registry, for deployments that register everything
    /// themselves
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register or replace a system alias
    pub fn register(&mut self, alias: &str, url: &str, traditional: bool, default: bool) {
        let alias = alias.to_lowercase();
        self.entries.retain(|e| e.alias != alias);
        self.entries.push(SystemEntry {
            alias,
            url: url.to_string(),
            traditional,
            default,
        });
    }

    /// Resolve an alias (case-insensitive) or an already-canonical URL.
    /// Unknown inputs resolve to `None`; callers skip them silently.
    pub fn resolve(&self, alias_or_url: &str) -> Option<&str> {
        let lowered = alias_or_url.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.alias == lowered || e.url == alias_or_url)
            .map(|e| e.url.as_str())
    }

    /// URLs of the default autocomplete systems, in registration order
    pub fn default_systems(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.default)
            .map(|e| e.url.clone())
            .collect()
    }

    /// URLs of the source-like (traditional medicine) systems
    pub fn traditional_systems(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.traditional)
            .map(|e| e.url.clone())
            .collect()
    }

    /// URLs of the target-like (classification) systems
    pub fn classification_systems(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| !e.traditional)
            .map(|e| e.url.clone())
            .collect()
    }
}

impl Default for SystemRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
