//! Terminology file loading
//!
//! Accepts single JSON files, JSON arrays of resources, or directories
//! of `.json` files. Each resource is dispatched on `resourceType`;
//! unknown types are skipped with a warning so mixed FHIR bundles
//! don't abort an import.

use anyhow::{bail, Context};
use ayulink_models::{CodeSystem, ConceptMap};
use ayulink_store::{ConceptStore, MappingStore, MemoryStore};
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct ImportSummary {
    pub code_systems: usize,
    pub concept_maps: usize,
}

pub async fn load_paths(store: &MemoryStore, paths: &[PathBuf]) -> anyhow::Result<ImportSummary> {
    let mut summary = ImportSummary::default();
    for path in paths {
        if path.is_dir() {
            let mut entries = tokio::fs::read_dir(path)
                .await
                .with_context(|| format!("Failed to read directory {}", path.display()))?;
            while let Some(entry) = entries.next_entry().await? {
                let entry_path = entry.path();
                if entry_path.extension().is_some_and(|ext| ext == "json") {
                    load_file(store, &entry_path, &mut summary).await?;
                }
            }
        } else {
            load_file(store, path, &mut summary).await?;
        }
    }
    Ok(summary)
}

async fn load_file(
    store: &MemoryStore,
    path: &Path,
    summary: &mut ImportSummary,
) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: JsonValue = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    match value {
        JsonValue::Array(resources) => {
            for resource in resources {
                load_resource(store, resource, path, summary).await?;
            }
        }
        other => load_resource(store, other, path, summary).await?,
    }
    Ok(())
}

async fn load_resource(
    store: &MemoryStore,
    resource: JsonValue,
    path: &Path,
    summary: &mut ImportSummary,
) -> anyhow::Result<()> {
    let resource_type = resource
        .get("resourceType")
        .and_then(|v| v.as_str())
        .unwrap_or("");

    match resource_type {
        "CodeSystem" => {
            let code_system: CodeSystem = serde_json::from_value(resource)
                .with_context(|| format!("Invalid CodeSystem in {}", path.display()))?;
            store
                .create_code_system(code_system)
                .await
                .with_context(|| format!("Failed to import CodeSystem from {}", path.display()))?;
            summary.code_systems += 1;
        }
        "ConceptMap" => {
            let concept_map: ConceptMap = serde_json::from_value(resource)
                .with_context(|| format!("Invalid ConceptMap in {}", path.display()))?;
            store
                .create_concept_map(concept_map)
                .await
                .with_context(|| format!("Failed to import ConceptMap from {}", path.display()))?;
            summary.concept_maps += 1;
        }
        "" => bail!("Resource in {} has no resourceType", path.display()),
        other => {
            tracing::warn!(resource_type = other, file = %path.display(), "skipping unsupported resource");
        }
    }
    Ok(())
}
