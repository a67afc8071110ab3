//! Shared fixture: an engine over a MemoryStore seeded with a small
//! NAMASTE / Unani / ICD-11 corpus and the mapping tables between them.

use ayulink_engine::{SystemRegistry, TerminologyEngine};
use ayulink_engine::registry::{ICD11_TM2_URL, ICD11_URL, NAMASTE_URL, UNANI_URL};
use ayulink_models::{
    CodeSystem, Concept, ConceptMap, Designation, Equivalence, MappingElement, MappingGroup,
    MappingTarget, PublicationStatus,
};
use ayulink_store::{ConceptStore, MappingStore, MemoryStore};
use std::sync::Arc;

fn concept(
    code: &str,
    display: &str,
    definition: Option<&str>,
    designations: &[(&str, &str)],
    parent: Option<&str>,
) -> Concept {
    let mut c = Concept::new(code, display);
    c.definition = definition.map(|d| d.to_string());
    c.designation = designations
        .iter()
        .map(|(language, value)| Designation {
            language: language.to_string(),
            value: value.to_string(),
        })
        .collect();
    c.parent = parent.map(|p| p.to_string());
    c
}

fn target(code: &str, display: &str, equivalence: Equivalence) -> MappingTarget {
    MappingTarget {
        code: code.to_string(),
        display: Some(display.to_string()),
        equivalence,
        comment: None,
        depends_on: Vec::new(),
    }
}

fn element(code: &str, display: &str, targets: Vec<MappingTarget>) -> MappingElement {
    MappingElement {
        code: code.to_string(),
        display: Some(display.to_string()),
        target: targets,
    }
}

fn map(url: &str, source: &str, target_uri: &str, elements: Vec<MappingElement>) -> ConceptMap {
    let mut m = ConceptMap::new(url, source, target_uri);
    m.group.push(MappingGroup {
        source: source.to_string(),
        target: target_uri.to_string(),
        element: elements,
    });
    m
}

pub async fn seeded_engine() -> TerminologyEngine {
    let store = MemoryStore::new();

    let mut namaste = CodeSystem::new(NAMASTE_URL, PublicationStatus::Active);
    namaste.name = Some("NAMASTE".to_string());
    namaste.concept = vec![
        concept(
            "N001",
            "Jvara (Fever)",
            Some("Elevated body temperature as described in Ayurveda"),
            &[("hi", "ज्वर"), ("en", "Fever")],
            None,
        ),
        concept(
            "N001.1",
            "Vishama Jvara (Intermittent fever)",
            None,
            &[],
            Some("N001"),
        ),
        concept(
            "N002",
            "Atisara (Diarrhoea)",
            Some("Frequent loose stools"),
            &[],
            None,
        ),
        concept("N003", "Kasa (Cough)", None, &[], None),
        concept("N004", "Kaphaja Kasa (Chronic cough)", None, &[], None),
        concept("SR11", "Sandhigata Vata", Some("Joint disorder"), &[], None),
    ];
    store.create_code_system(namaste).await.unwrap();

    let mut unani = CodeSystem::new(UNANI_URL, PublicationStatus::Active);
    unani.name = Some("Unani".to_string());
    unani.concept = vec![
        concept("U100", "Humma (Fever)", None, &[("ur", "حمی")], None),
        concept("U200", "Ishal (Diarrhoea)", None, &[], None),
    ];
    store.create_code_system(unani).await.unwrap();

    let mut icd11 = CodeSystem::new(ICD11_URL, PublicationStatus::Active);
    icd11.name = Some("ICD-11 MMS".to_string());
    icd11.concept = vec![
        concept("MD11.0", "Fever of other or unknown origin", None, &[], None),
        concept("1A40", "Gastroenteritis", None, &[], None),
        concept("CA80", "Cough", None, &[], None),
    ];
    store.create_code_system(icd11).await.unwrap();

    let mut tm2 = CodeSystem::new(ICD11_TM2_URL, PublicationStatus::Active);
    tm2.name = Some("ICD-11 TM2".to_string());
    tm2.concept = vec![concept(
        "TM26.0",
        "Joint impediment disorder (TM2)",
        None,
        &[],
        None,
    )];
    store.create_code_system(tm2).await.unwrap();

    store
        .create_concept_map(map(
            "https://terminology.ayush.gov.in/ConceptMap/namaste-to-icd11",
            NAMASTE_URL,
            ICD11_URL,
            vec![
                element(
                    "N001",
                    "Jvara (Fever)",
                    vec![target(
                        "MD11.0",
                        "Fever of other or unknown origin",
                        Equivalence::Equivalent,
                    )],
                ),
                element(
                    "N002",
                    "Atisara (Diarrhoea)",
                    vec![target("1A40", "Gastroenteritis", Equivalence::Wider)],
                ),
            ],
        ))
        .await
        .unwrap();

    store
        .create_concept_map(map(
            "https://terminology.ayush.gov.in/ConceptMap/namaste-to-tm2",
            NAMASTE_URL,
            ICD11_TM2_URL,
            vec![element(
                "SR11",
                "Sandhigata Vata",
                vec![target(
                    "TM26.0",
                    "Joint impediment disorder (TM2)",
                    Equivalence::Equivalent,
                )],
            )],
        ))
        .await
        .unwrap();

    store
        .create_concept_map(map(
            "https://terminology.ayush.gov.in/ConceptMap/unani-to-icd11",
            UNANI_URL,
            ICD11_URL,
            vec![element(
                "U100",
                "Humma (Fever)",
                vec![target(
                    "MD11.0",
                    "Fever of other or unknown origin",
                    Equivalence::Relatedto,
                )],
            )],
        ))
        .await
        .unwrap();

    let concepts: Arc<dyn ConceptStore> = Arc::new(store.clone());
    let mappings: Arc<dyn MappingStore> = Arc::new(store);
    TerminologyEngine::new(concepts, mappings, SystemRegistry::with_defaults())
}
