//! Execution scenarios: outcome classification, expect-fault scopes, and
//! isolation between expanded cases.

use casework::axis::Axis;
use casework::case::{Bindings, Case};
use casework::cases_std::register_std_cases;
use casework::errors::CaseError;
use casework::fault::{Fault, FaultKind};
use casework::ops::{add, ensure_eq};
use casework::registry::Registry;
use casework::runner::{Outcome, Runner};
use casework::value::Value;

fn std_registry() -> Registry {
    let mut registry = Registry::new();
    register_std_cases(&mut registry).unwrap();
    registry
}

#[test]
fn basic_case_passes_at_its_defaults() {
    let report = Runner::run_named(&std_registry(), "x_plus_y_basic").unwrap();
    assert_eq!(report.total(), 1);
    assert!(matches!(report.records[0].outcome, Outcome::Passed));
}

#[test]
fn deliberate_failure_captures_the_condition_text() {
    let report = Runner::run_named(&std_registry(), "x_plus_y_expect_to_fail").unwrap();
    match &report.records[0].outcome {
        Outcome::Failed { reason } => assert_eq!(reason, "4 != 5"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn cartesian_case_runs_nine_passing_expansions() {
    let report = Runner::run_named(&std_registry(), "x_plus_y_cartesian_product").unwrap();
    assert_eq!(report.total(), 9);
    assert_eq!(report.passed(), 9);
    let ids: Vec<_> = report.records.iter().map(|r| r.expanded.id()).collect();
    assert_eq!(ids[0], "x_plus_y_cartesian_product[2-3]");
    assert_eq!(ids[8], "x_plus_y_cartesian_product[4-5]");
}

#[test]
fn matching_fault_satisfies_the_expect_scope() {
    let report = Runner::run_named(&std_registry(), "x_plus_y_even_less_basic").unwrap();
    assert_eq!(report.total(), 1);
    match &report.records[0].outcome {
        Outcome::ExpectedFaultRaised { kind } => assert_eq!(*kind, FaultKind::TypeMismatch),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(!report.has_failures());
}

fn raises_assertion(_args: &Bindings) -> Result<(), Fault> {
    Err(Fault::assertion("4 != 5"))
}

fn completes(_args: &Bindings) -> Result<(), Fault> {
    Ok(())
}

#[test]
fn wrong_fault_kind_is_recorded_and_preserved() {
    let mut registry = Registry::new();
    registry
        .register(Case::new("wrong_kind", raises_assertion).expect_fault(FaultKind::TypeMismatch))
        .unwrap();

    let report = Runner::run_named(&registry, "wrong_kind").unwrap();
    match &report.records[0].outcome {
        Outcome::ExpectedFaultNotRaised { detail, raised } => {
            assert!(detail.contains("expected a TypeMismatch fault"));
            assert_eq!(raised.as_ref().unwrap().kind, FaultKind::Assertion);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    // The original fault stays reachable for the caller to surface.
    assert_eq!(
        report.first_unexpected_fault().unwrap().message,
        "4 != 5"
    );
    assert!(report.has_failures());
}

#[test]
fn completing_body_fails_its_expect_scope_without_a_fault() {
    let mut registry = Registry::new();
    registry
        .register(Case::new("no_fault", completes).expect_fault(FaultKind::TypeMismatch))
        .unwrap();

    let report = Runner::run_named(&registry, "no_fault").unwrap();
    match &report.records[0].outcome {
        Outcome::ExpectedFaultNotRaised { raised, .. } => assert!(raised.is_none()),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(report.first_unexpected_fault().is_none());
}

fn sum_matches_expected(args: &Bindings) -> Result<(), Fault> {
    let sum = add(args.value("x")?, args.value("y")?)?;
    ensure_eq(&sum, args.value("expected")?)
}

#[test]
fn a_failing_case_does_not_stop_later_cases() {
    let mut registry = Registry::new();
    registry
        .register(Case::new("fails_first", raises_assertion))
        .unwrap();
    registry
        .register(
            Case::new("still_runs", sum_matches_expected).with_axis(Axis::table(
                ["x", "y", "expected"],
                vec![
                    vec![Value::Int(2), Value::Int(2), Value::Int(4)],
                    vec![Value::Int(2), Value::Int(3), Value::Int(5)],
                ],
            )),
        )
        .unwrap();

    let report = Runner::run_all(&registry);
    assert_eq!(report.total(), 3);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.records[1].expanded.id(), "still_runs[2-2-4]");
    assert!(report.records[2].outcome.is_pass());
}

#[test]
fn a_rejected_case_does_not_stop_later_cases() {
    let mut registry = Registry::new();
    registry
        .register(
            Case::new("misconfigured", completes)
                .with_axis(Axis::values("x", vec![Value::Int(1)]))
                .with_axis(Axis::values("x", vec![Value::Int(2)])),
        )
        .unwrap();
    registry.register(Case::new("healthy", completes)).unwrap();

    let report = Runner::run_all(&registry);
    assert_eq!(report.rejected.len(), 1);
    assert!(matches!(
        report.rejected[0].1,
        CaseError::DuplicateParameter { .. }
    ));
    assert_eq!(report.total(), 1);
    assert!(report.records[0].outcome.is_pass());
    assert!(report.has_failures());
}

#[test]
fn report_preserves_registration_and_expansion_order() {
    let report = Runner::run_all(&std_registry());
    let ids: Vec<_> = report.records.iter().map(|r| r.expanded.id()).collect();
    assert_eq!(ids[0], "x_plus_y_basic");
    assert_eq!(ids[1], "x_plus_y_expect_to_fail");
    assert_eq!(ids[2], "x_plus_y_less_basic[2-2-4]");
    assert_eq!(ids[3], "x_plus_y_less_basic[2-3-5]");
    assert_eq!(ids[4], "x_plus_y_cartesian_product[2-3]");
    assert_eq!(ids[13], "x_plus_y_even_less_basic[2-2]");
    assert_eq!(ids[14], "sample_mean_convergence[1000-0.1]");
}

#[test]
fn selecting_an_unknown_case_aborts_the_run() {
    let err = Runner::run_named(&std_registry(), "x_plus_y_fanciful").unwrap_err();
    assert!(matches!(err, CaseError::CaseNotFound { .. }));
}
