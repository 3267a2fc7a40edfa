mod square_root;

use super::*;
use crate::lc;
use ark_ff::{AdditiveGroup, One, Zero};
use ark_test_curves::bls12_381::Fr;
use square_root::SquareRoot;

#[test]
fn matrix_generation() -> Result<()> {
    let mut cs = ProvingSystem::<Fr>::new();
    let two = Fr::one() + Fr::one();
    let a = cs.new_witness_variable(Fr::one())?;
    let b = cs.new_witness_variable(Fr::one())?;
    let c = cs.new_witness_variable(two)?;
    cs.enforce_constraint(lc!() + a, lc!() + (two, b), lc!() + c)?;
    cs.enforce_constraint(
        lc!() + Variable::One,
        lc!() + a + b,
        lc!() + c + (Fr::zero(), a),
    )?;

    let matrices = cs.to_matrices();
    assert_eq!(matrices.num_constraints, 2);
    assert_eq!(matrices.num_witness_variables, 3);

    assert_eq!(matrices.a[0], vec![(Fr::one(), 1)]);
    assert_eq!(matrices.b[0], vec![(two, 2)]);
    assert_eq!(matrices.c[0], vec![(Fr::one(), 3)]);

    assert_eq!(matrices.a[1], vec![(Fr::one(), 0)]);
    assert_eq!(matrices.b[1], vec![(Fr::one(), 1), (Fr::one(), 2)]);
    // zero coefficients never reach the matrices
    assert_eq!(matrices.c[1], vec![(Fr::one(), 3)]);
    assert_eq!(matrices.c_num_non_zero, 2);

    assert!(cs.is_satisfied());
    assert!(matrices.is_satisfied_by(&cs.full_assignment()));
    Ok(())
}

#[test]
fn square_root_sat() -> Result<()> {
    let circuit = SquareRoot {
        root: Some(Fr::from(3u8)),
        square: Some(Fr::from(9u8)),
    };
    let cs = ProvingSystem::synthesize(circuit)?;
    assert_eq!(cs.num_constraints(), 1);
    assert_eq!(cs.num_witness_variables(), 2);
    assert!(cs.is_satisfied());
    assert_eq!(cs.assigned_value(Variable::Witness(1)), Some(Fr::from(9u8)));
    Ok(())
}

#[test]
fn square_root_non_sat() -> Result<()> {
    let circuit = SquareRoot {
        root: Some(Fr::from(3u8)),
        square: Some(Fr::from(10u8)),
    };
    let cs = ProvingSystem::synthesize(circuit)?;
    assert!(!cs.is_satisfied());
    assert!(cs.which_is_unsatisfied().is_some());
    assert!(!cs.to_matrices().is_satisfied_by(&cs.full_assignment()));
    Ok(())
}

#[test]
fn setup_matches_prove() -> Result<()> {
    let prover = ProvingSystem::synthesize(SquareRoot {
        root: Some(Fr::from(5u8)),
        square: Some(Fr::from(25u8)),
    })?;
    let setup = SetupSystem::<Fr>::synthesize(SquareRoot {
        root: None,
        square: None,
    })?;

    assert_eq!(setup.num_witness_variables(), prover.num_witness_variables());
    let matrices = setup.to_matrices();
    assert_eq!(matrices, prover.to_matrices());
    assert!(matrices.is_satisfied_by(&prover.full_assignment()));
    // an assignment of the wrong length is rejected outright
    assert!(!matrices.is_satisfied_by(&[Fr::one()]));
    Ok(())
}

#[test]
fn constant_column_must_be_one() -> Result<()> {
    let prover = ProvingSystem::synthesize(SquareRoot {
        root: Some(Fr::from(3u8)),
        square: Some(Fr::from(9u8)),
    })?;
    let matrices = SetupSystem::<Fr>::synthesize(SquareRoot {
        root: None,
        square: None,
    })?
    .to_matrices();

    let all_zero = vec![Fr::zero(); matrices.num_witness_variables + 1];
    assert!(!matrices.is_satisfied_by(&all_zero));

    let mut scaled = prover.full_assignment();
    scaled.iter_mut().for_each(|v| *v = v.double());
    assert!(!matrices.is_satisfied_by(&scaled));
    assert!(matrices.is_satisfied_by(&prover.full_assignment()));
    Ok(())
}

#[test]
fn witness_count_follows_assignment() -> Result<()> {
    let mut cs = ProvingSystem::<Fr>::new();
    let a = cs.new_witness_variable(Fr::from(2u8))?;
    let b = cs.new_witness_variable(Fr::from(3u8))?;
    assert_eq!((a, b), (Variable::Witness(0), Variable::Witness(1)));
    assert_eq!(cs.num_witness_variables(), cs.witness_assignment.len());
    assert_eq!(cs.to_matrices().num_witness_variables, 2);
    assert_eq!(cs.full_assignment().len(), 3);
    Ok(())
}

#[test]
fn prove_without_witness_fails() {
    let result = ProvingSystem::<Fr>::synthesize(SquareRoot {
        root: Some(Fr::from(5u8)),
        square: None,
    });
    assert_eq!(result.err(), Some(SynthesisError::AssignmentMissing));
}

#[test]
fn unsatisfied_constraint_is_labelled() -> Result<()> {
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry());

    let cs = ProvingSystem::synthesize(SquareRoot {
        root: Some(Fr::from(4u8)),
        square: Some(Fr::from(15u8)),
    })?;
    assert_eq!(cs.constraint_label(0), Some("square_root"));
    assert_eq!(
        cs.which_is_unsatisfied().as_deref(),
        Some("square_root (constraint 0)")
    );
    Ok(())
}

#[test]
fn unlabelled_without_subscriber() -> Result<()> {
    let mut cs = ProvingSystem::<Fr>::new();
    let a = cs.new_witness_variable(Fr::from(2u8))?;
    cs.enforce_constraint(lc!() + a, lc!() + a, lc!() + a)?;
    assert_eq!(cs.constraint_label(0), None);
    assert_eq!(cs.which_is_unsatisfied().as_deref(), Some("0"));
    Ok(())
}
