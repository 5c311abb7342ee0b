//! Built-in demonstration suite.
//!
//! These cases walk through the engine's surface in the order a newcomer
//! meets it: a plain assertion, a deliberate failure, joint and cartesian
//! parametrization, an expect-fault scope, and a seeded sampling check.
//! `x_plus_y_expect_to_fail` fails on purpose, so a full run of this suite
//! reports one failure.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::axis::Axis;
use crate::case::{Bindings, Case};
use crate::errors::CaseError;
use crate::fault::{Fault, FaultKind};
use crate::ops::{add, checked_add, ensure_close, ensure_eq};
use crate::registry::Registry;
use crate::value::Value;

// Fixed seed: the sampling case must produce the same mean on every run.
const SAMPLE_SEED: u64 = 0x5EED_CA5E;

fn x_plus_y_basic(args: &Bindings) -> Result<(), Fault> {
    let sum = add(args.value("x")?, args.value("y")?)?;
    ensure_eq(&sum, &Value::Int(4))
}

fn x_plus_y_expect_to_fail(args: &Bindings) -> Result<(), Fault> {
    let sum = add(args.value("x")?, args.value("y")?)?;
    ensure_eq(&sum, &Value::Int(5))
}

fn x_plus_y_less_basic(args: &Bindings) -> Result<(), Fault> {
    let sum = add(args.value("x")?, args.value("y")?)?;
    ensure_eq(&sum, args.value("expected")?)
}

fn x_plus_y_cartesian_product(args: &Bindings) -> Result<(), Fault> {
    let x = args.value("x")?;
    let y = args.value("y")?;
    ensure_eq(&add(x, y)?, &add(x, y)?)
}

fn x_plus_y_even_less_basic(args: &Bindings) -> Result<(), Fault> {
    checked_add(args.value("x")?, args.value("y")?)?;
    Ok(())
}

fn sample_mean_convergence(args: &Bindings) -> Result<(), Fault> {
    let samples = args.int("samples")?;
    let tolerance = args.float("tolerance")?;
    let mut rng = Xoshiro256StarStar::seed_from_u64(SAMPLE_SEED);
    let mut sum = 0.0;
    for _ in 0..samples {
        sum += rng.gen::<f64>();
    }
    let mean = sum / samples as f64;
    ensure_close(mean, 0.5, tolerance)
}

/// Registers the demonstration cases in walkthrough order.
pub fn register_std_cases(registry: &mut Registry) -> Result<(), CaseError> {
    registry.register(
        Case::new("x_plus_y_basic", x_plus_y_basic)
            .with_default("x", Value::Int(2))
            .with_default("y", Value::Int(2)),
    )?;
    registry.register(
        Case::new("x_plus_y_expect_to_fail", x_plus_y_expect_to_fail)
            .with_default("x", Value::Int(2))
            .with_default("y", Value::Int(2)),
    )?;
    registry.register(
        Case::new("x_plus_y_less_basic", x_plus_y_less_basic).with_axis(Axis::table(
            ["x", "y", "expected"],
            vec![
                vec![Value::Int(2), Value::Int(2), Value::Int(4)],
                vec![Value::Int(2), Value::Int(3), Value::Int(5)],
            ],
        )),
    )?;
    registry.register(
        Case::new("x_plus_y_cartesian_product", x_plus_y_cartesian_product)
            .with_axis(Axis::values(
                "x",
                vec![Value::Int(2), Value::Int(3), Value::Int(4)],
            ))
            .with_axis(Axis::values(
                "y",
                vec![Value::Int(3), Value::Int(4), Value::Int(5)],
            )),
    )?;
    registry.register(
        Case::new("x_plus_y_even_less_basic", x_plus_y_even_less_basic)
            .with_axis(Axis::table(
                ["x", "y"],
                vec![vec![Value::Int(2), Value::Str("2".to_string())]],
            ))
            .expect_fault(FaultKind::TypeMismatch),
    )?;
    registry.register(
        Case::new("sample_mean_convergence", sample_mean_convergence).with_axis(Axis::table(
            ["samples", "tolerance"],
            vec![
                vec![Value::Int(1_000), Value::Float(1e-1)],
                vec![Value::Int(10_000), Value::Float(1e-1)],
                vec![Value::Int(100_000), Value::Float(1e-2)],
            ],
        )),
    )?;
    Ok(())
}
