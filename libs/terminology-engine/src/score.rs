//! Relevance scoring
//!
//! Pure, deterministic, case-insensitive match score between a search
//! term and a concept. The score is a sum across fields, not a max, so
//! a term hitting code and display and a designation outranks one
//! hitting display alone. Within one field the tiers are exclusive
//! (exact beats prefix beats containment).

use ayulink_models::Concept;

/// Score a concept against a search term.
///
/// Returns 0 when no field contains the term. The empty term matches
/// nothing; callers enforce their own minimum-length rules before
/// scoring.
pub fn score(concept: &Concept, term: &str) -> u32 {
    let term = term.to_lowercase();
    if term.is_empty() {
        return 0;
    }

    let mut total = 0;

    let code = concept.code.to_lowercase();
    if code == term {
        total += 100;
    } else if code.contains(&term) {
        total += 50;
    }

    let display = concept.display.to_lowercase();
    if display == term {
        total += 90;
    } else if display.starts_with(&term) {
        total += 70;
    } else if display.contains(&term) {
        total += 40;
    }

    if let Some(definition) = &concept.definition {
        if definition.to_lowercase().contains(&term) {
            total += 20;
        }
    }

    // Summed over all designations, not short-circuited
    for designation in &concept.designation {
        let value = designation.value.to_lowercase();
        if value == term {
            total += 60;
        } else if value.contains(&term) {
            total += 30;
        }
    }

    total
}
