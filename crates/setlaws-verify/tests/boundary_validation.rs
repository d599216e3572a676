mod common;

use setlaws_core::{SetLawError, SetLabel};
use setlaws_verify::{verify_system, Policy, SetSystem, SubsetCheck};

use common::{named, universe};

fn system_with_stray() -> SetSystem {
    SetSystem::new(
        universe(1, 5),
        vec![named("A", &[1, 2]), named("B", &[2, 7, 9])],
    )
    .unwrap()
}

#[test]
fn subset_count_is_bounded() {
    let err = SetSystem::new(universe(1, 3), vec![named("A", &[1])]).unwrap_err();
    assert_eq!(err.code(), "subset-count");

    let err = SetSystem::new(
        universe(1, 3),
        vec![
            named("A", &[1]),
            named("B", &[1]),
            named("C", &[1]),
            named("D", &[1]),
        ],
    )
    .unwrap_err();
    assert_eq!(err.code(), "subset-count");
}

#[test]
fn duplicate_labels_are_rejected_at_the_boundary() {
    let err = SetSystem::new(
        universe(1, 3),
        vec![named("A", &[1]), named("A", &[2])],
    )
    .unwrap_err();
    assert!(matches!(err, SetLawError::InvalidInput(_)));
    assert_eq!(err.code(), "duplicate-label");
    assert_eq!(err.info().context.get("label").map(String::as_str), Some("A"));
}

#[test]
fn warn_mode_records_stray_elements() -> Result<(), SetLawError> {
    let system = system_with_stray();
    let report = verify_system(&system, &Policy::default())?;
    assert_eq!(report.warnings.len(), 1);
    let warning = &report.warnings[0];
    assert_eq!(warning.label, SetLabel::new("B")?);
    let stray: Vec<i64> = warning.stray.iter().filter_map(|e| e.as_int()).collect();
    assert_eq!(stray, vec![7, 9]);
    assert!(report.all_hold());
    Ok(())
}

#[test]
fn enforce_mode_rejects_stray_elements() {
    let system = system_with_stray();
    let err = verify_system(&system, &Policy::enforcing()).unwrap_err();
    assert_eq!(err.code(), "not-a-subset");
    assert_eq!(err.info().context.get("stray").map(String::as_str), Some("7, 9"));
    assert!(err.info().hint.is_some());
}

#[test]
fn clean_system_passes_enforce_mode() -> Result<(), SetLawError> {
    let system = common::euler_system();
    let warnings = system.validate(SubsetCheck::Enforce)?;
    assert!(warnings.is_empty());
    Ok(())
}
