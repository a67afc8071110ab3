//! Property-style assertions on ordering, limits and symmetry.

mod support;

use ayulink_engine::registry::{ICD11_URL, NAMASTE_URL, UNANI_URL};
use ayulink_engine::{AutocompleteRequest, TranslateRequest};
use ayulink_models::Equivalence;
use support::seeded_engine;

#[tokio::test]
async fn results_sorted_by_non_increasing_score() -> anyhow::Result<()> {
    let engine = seeded_engine().await;

    let response = engine.autocomplete(&AutocompleteRequest::new("fever")).await?;
    assert!(!response.matches.is_empty());

    for pair in response.matches.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for (idx, entry) in response.matches.iter().enumerate() {
        assert_eq!(entry.rank, idx + 1);
    }
    Ok(())
}

#[tokio::test]
async fn score_ties_keep_store_order() -> anyhow::Result<()> {
    let engine = seeded_engine().await;

    // Both "Kaphaja Kasa (Chronic cough)" and "Kasa (Cough)" score a
    // bare display containment for "cough"; the store enumerates
    // display-ascending, so N004 must stay ahead of N003.
    let mut request = AutocompleteRequest::new("cough");
    request.systems = vec!["namaste".to_string()];
    let response = engine.autocomplete(&request).await?;

    let n004 = response.matches.iter().position(|m| m.code == "N004");
    let n003 = response.matches.iter().position(|m| m.code == "N003");
    let (n004, n003) = (n004.expect("N004 present"), n003.expect("N003 present"));
    assert_eq!(
        response.matches[n004].score,
        response.matches[n003].score
    );
    assert!(n004 < n003);
    Ok(())
}

#[tokio::test]
async fn limit_is_enforced_and_clamped() -> anyhow::Result<()> {
    let engine = seeded_engine().await;

    let mut request = AutocompleteRequest::new("fever");
    request.limit = Some(1);
    let response = engine.autocomplete(&request).await?;
    assert_eq!(response.matches.len(), 1);
    assert_eq!(response.match_count, 1);

    // Over-large limits clamp to the implementation max instead of
    // erroring.
    request.limit = Some(10_000);
    assert!(engine.autocomplete(&request).await.is_ok());
    Ok(())
}

#[tokio::test]
async fn unknown_aliases_are_skipped_silently() -> anyhow::Result<()> {
    let engine = seeded_engine().await;

    let mut request = AutocompleteRequest::new("fever");
    request.systems = vec!["snomed".to_string(), "namaste".to_string()];
    let response = engine.autocomplete(&request).await?;

    assert!(response.matches.iter().all(|m| m.system == NAMASTE_URL));
    assert!(!response.matches.is_empty());
    Ok(())
}

#[tokio::test]
async fn target_system_restricts_the_search() -> anyhow::Result<()> {
    let engine = seeded_engine().await;

    let mut request = AutocompleteRequest::new("fever");
    request.target_system = Some(UNANI_URL.to_string());
    let response = engine.autocomplete(&request).await?;

    assert!(!response.matches.is_empty());
    assert!(response.matches.iter().all(|m| m.system == UNANI_URL));
    Ok(())
}

#[tokio::test]
async fn designation_flag_controls_matching_and_payload() -> anyhow::Result<()> {
    let engine = seeded_engine().await;

    // The Devanagari designation of N001 only matches when
    // designations are searched.
    let mut request = AutocompleteRequest::new("ज्वर");
    request.systems = vec!["namaste".to_string()];
    let with = engine.autocomplete(&request).await?;
    assert!(with.matches.iter().any(|m| m.code == "N001"));

    request.include_designations = false;
    let without = engine.autocomplete(&request).await?;
    assert!(without.matches.is_empty());
    Ok(())
}

#[tokio::test]
async fn forward_and_reverse_are_independent_queries() -> anyhow::Result<()> {
    let engine = seeded_engine().await;

    let forward = engine
        .translate(&TranslateRequest {
            code: "N001".to_string(),
            source_system: NAMASTE_URL.to_string(),
            target_system: Some(ICD11_URL.to_string()),
        })
        .await?;
    assert_eq!(forward.matches.len(), 1);
    assert_eq!(forward.matches[0].equivalence, Equivalence::Equivalent);

    // Reverse lookup of the same target code is its own query over the
    // reverse index: it surfaces every source anchor with each anchor's
    // own equivalence, not the mirror of any single forward edge.
    let reverse = engine.reverse_translate("MD11.0", "icd11").await?;
    assert_eq!(reverse.len(), 2);

    let namaste_edge = reverse
        .iter()
        .find(|m| m.source_code == "N001")
        .expect("NAMASTE anchor");
    assert_eq!(namaste_edge.equivalence, Equivalence::Equivalent);

    let unani_edge = reverse
        .iter()
        .find(|m| m.source_code == "U100")
        .expect("Unani anchor");
    assert_eq!(unani_edge.equivalence, Equivalence::Relatedto);
    Ok(())
}

#[tokio::test]
async fn forward_translation_collects_across_maps() -> anyhow::Result<()> {
    let engine = seeded_engine().await;

    // No target restriction: N001's ICD-11 edge is returned even
    // though another map also starts from NAMASTE.
    let response = engine
        .translate(&TranslateRequest {
            code: "N001".to_string(),
            source_system: "namaste".to_string(),
            target_system: None,
        })
        .await?;
    assert!(response.found);
    assert_eq!(response.matches.len(), 1);
    assert_eq!(response.matches[0].target_system, ICD11_URL);
    Ok(())
}

#[tokio::test]
async fn wider_equivalence_is_carried_verbatim() -> anyhow::Result<()> {
    let engine = seeded_engine().await;

    let response = engine
        .translate(&TranslateRequest {
            code: "N002".to_string(),
            source_system: "namaste".to_string(),
            target_system: None,
        })
        .await?;
    assert_eq!(response.matches[0].equivalence, Equivalence::Wider);
    assert_eq!(response.matches[0].target_code, "1A40");
    Ok(())
}

#[tokio::test]
async fn identical_requests_return_identical_results() -> anyhow::Result<()> {
    let engine = seeded_engine().await;

    let request = AutocompleteRequest::new("fever");
    let first = engine.autocomplete(&request).await?;
    let second = engine.autocomplete(&request).await?;

    let codes = |r: &ayulink_engine::AutocompleteResponse| {
        r.matches
            .iter()
            .map(|m| (m.system.clone(), m.code.clone(), m.score))
            .collect::<Vec<_>>()
    };
    assert_eq!(codes(&first), codes(&second));
    Ok(())
}
