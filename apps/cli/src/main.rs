//! Terminology engine CLI
//!
//! Loads CodeSystem/ConceptMap JSON files into the in-memory store and
//! runs autocomplete, translate or dual-code queries against them.
//! Results are printed as JSON on stdout; logs go to stderr and follow
//! `RUST_LOG`.

mod import;
mod logging;

use anyhow::Context;
use ayulink_engine::{
    AutocompleteRequest, DualCodeRequest, SystemRegistry, TerminologyEngine, TranslateRequest,
};
use ayulink_store::{ConceptStore, MappingStore, MemoryStore};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "ayulink", version, about = "Terminology mapping & translation engine")]
struct Cli {
    /// JSON files or directories with CodeSystem/ConceptMap resources
    #[arg(long = "data", global = true)]
    data: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load terminology files and report what was imported
    Import,

    /// Ranked cross-system concept search
    Search {
        /// Search term (at least 2 characters)
        term: String,

        /// System aliases to search (default: namaste, unani, icd11)
        #[arg(long = "system")]
        systems: Vec<String>,

        /// Restrict the search to one system URL
        #[arg(long)]
        target_system: Option<String>,

        /// Maximum result count
        #[arg(long)]
        limit: Option<usize>,

        /// Leave designations out of matching and output
        #[arg(long)]
        no_designations: bool,

        /// Leave mapping annotations out of the output
        #[arg(long)]
        no_mappings: bool,
    },

    /// Forward code translation
    Translate {
        /// Code to translate
        code: String,

        /// System the code belongs to (alias or URL)
        #[arg(long)]
        source_system: String,

        /// Restrict matches to this target system URL
        #[arg(long)]
        target_system: Option<String>,
    },

    /// Dual-code lookup for one or both sides of a finding
    DualCode {
        /// Code in a traditional-medicine system
        #[arg(long)]
        code_a: Option<String>,

        /// Code in a classification system
        #[arg(long)]
        code_b: Option<String>,

        /// Include concept definitions
        #[arg(long)]
        details: bool,

        /// Include parent/children codes
        #[arg(long)]
        hierarchy: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();

    let store = MemoryStore::new();
    let summary = import::load_paths(&store, &cli.data)
        .await
        .context("Failed to load terminology data")?;
    tracing::info!(
        code_systems = summary.code_systems,
        concept_maps = summary.concept_maps,
        "terminology data loaded"
    );

    let concepts: Arc<dyn ConceptStore> = Arc::new(store.clone());
    let mappings: Arc<dyn MappingStore> = Arc::new(store);
    let engine = TerminologyEngine::new(concepts, mappings, SystemRegistry::with_defaults());

    match cli.command {
        Command::Import => {
            println!(
                "{}",
                serde_json::json!({
                    "codeSystems": summary.code_systems,
                    "conceptMaps": summary.concept_maps,
                })
            );
        }
        Command::Search {
            term,
            systems,
            target_system,
            limit,
            no_designations,
            no_mappings,
        } => {
            let request = AutocompleteRequest {
                search_term: term,
                systems,
                target_system,
                limit,
                include_designations: !no_designations,
                include_mappings: !no_mappings,
            };
            let response = engine.autocomplete(&request).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Translate {
            code,
            source_system,
            target_system,
        } => {
            let response = engine
                .translate(&TranslateRequest {
                    code,
                    source_system,
                    target_system,
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::DualCode {
            code_a,
            code_b,
            details,
            hierarchy,
        } => {
            let response = engine
                .dual_code_lookup(&DualCodeRequest {
                    code_a,
                    code_b,
                    include_details: details,
                    include_hierarchy: hierarchy,
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
