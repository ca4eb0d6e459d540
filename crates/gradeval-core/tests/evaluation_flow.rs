//! # Evaluation Flow Tests
//!
//! End-to-end checks of the full pipeline through the public API,
//! including the worked reference scenario and the error taxonomy.

use gradeval_core::{
    Catalog, Category, CompletedSet, EvalError, StudentId, Subject, SubjectId, ThresholdConfig,
    ThresholdPolicy, Track, summarize,
};
use std::collections::BTreeMap;

fn subject(id: u64, credit: u32, mappings: &[(Track, Category)]) -> Subject {
    let categories: BTreeMap<Track, Category> = mappings.iter().copied().collect();
    Subject::new(SubjectId(id), format!("Subject {id}"), credit, categories)
}

/// Track A; Subject 1 (4cr Compulsory), Subject 2 (3cr Limited-Elective),
/// Subject 3 (2cr Standard-Elective), Subject 4 (5cr, no mapping under A).
fn reference_catalog() -> Catalog {
    Catalog::from_subjects([
        subject(1, 4, &[(Track::A, Category::Compulsory)]),
        subject(2, 3, &[(Track::A, Category::LimitedElective)]),
        subject(3, 2, &[(Track::A, Category::StandardElective)]),
        subject(4, 5, &[(Track::B, Category::Compulsory)]),
    ])
    .expect("catalog")
}

#[test]
fn reference_scenario() {
    let catalog = reference_catalog();
    let completed = CompletedSet::new(
        Track::A,
        vec![SubjectId(1), SubjectId(2), SubjectId(3), SubjectId(4)],
    );
    let student = StudentId::new("s-2021-0042");

    let summary = summarize(&student, &completed, &catalog, &ThresholdPolicy::default())
        .expect("summary");

    let credits = &summary.details.credits;
    assert_eq!(credits.compulsory, 4);
    assert_eq!(credits.limited_elective, 3);
    assert_eq!(credits.standard_elective, 2);
    assert_eq!(credits.elective, 0);
    // Subject 4's 5 credits are excluded from the total.
    assert_eq!(credits.total, 9);
    assert_eq!(summary.details.not_offered, vec![SubjectId(4)]);

    let met = &summary.requirements_met;
    assert!(!met.compulsory);
    assert!(!met.limited_elective);
    assert!(!met.limited_standard_elective);
    assert!(!met.total_credits);
    assert!(!met.total);
}

#[test]
fn passing_student_under_permissive_thresholds() {
    let catalog = reference_catalog();
    let completed = CompletedSet::new(
        Track::A,
        vec![SubjectId(1), SubjectId(2), SubjectId(3)],
    );
    let student = StudentId::new("s-1");

    let mut policy = ThresholdPolicy::default();
    policy.default = ThresholdConfig {
        compulsory: 4,
        limited_elective: 3,
        limited_standard: 5,
        total: 9,
    };

    let summary = summarize(&student, &completed, &catalog, &policy).expect("summary");
    let met = &summary.requirements_met;
    assert!(met.compulsory);
    assert!(met.limited_elective);
    assert!(met.limited_standard_elective);
    assert!(met.total_credits);
    assert!(met.total);
}

#[test]
fn duplicate_subject_produces_no_summary() {
    let catalog = reference_catalog();
    let completed = CompletedSet::new(Track::A, vec![SubjectId(1), SubjectId(1)]);
    let student = StudentId::new("s-1");

    assert_eq!(
        summarize(&student, &completed, &catalog, &ThresholdPolicy::default()),
        Err(EvalError::DuplicateSubject(SubjectId(1)))
    );
}

#[test]
fn unknown_subject_produces_no_summary() {
    let catalog = reference_catalog();
    let completed = CompletedSet::new(Track::A, vec![SubjectId(1), SubjectId(404)]);
    let student = StudentId::new("s-1");

    assert_eq!(
        summarize(&student, &completed, &catalog, &ThresholdPolicy::default()),
        Err(EvalError::UnknownSubject(SubjectId(404)))
    );
}

#[test]
fn summary_serializes_to_the_api_payload_shape() {
    let catalog = reference_catalog();
    let completed = CompletedSet::new(Track::A, vec![SubjectId(1), SubjectId(4)]);
    let student = StudentId::new("s-1");

    let summary = summarize(&student, &completed, &catalog, &ThresholdPolicy::default())
        .expect("summary");
    let json = serde_json::to_value(&summary).expect("serialize");

    assert_eq!(json["student_id"], "s-1");
    assert_eq!(json["track"], "A");
    assert_eq!(json["details"]["credits"]["compulsory"], 4);
    assert_eq!(json["details"]["credits"]["total"], 4);
    assert_eq!(json["details"]["not_offered"][0], 4);
    assert_eq!(json["requirements_met"]["total"], false);
}
