use ark_ff::Field;
use ark_test_curves::bls12_381::Fr;
use ark_uint_relations::{
    lc,
    r1cs::{ConstraintSystem, LinearCombination, ProvingSystem, SynthesisError, Variable},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, Registry};

fn main() -> Result<(), SynthesisError> {
    let subscriber = Registry::default().with(fmt::layer());
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default subscriber");

    let mut cs = ProvingSystem::<Fr>::new();

    // Note that w3 has a wrong value
    let w1 = cs.new_witness_variable(Fr::from(2u32))?;
    let w2 = cs.new_witness_variable(Fr::from(5u32))?;
    let w3 = cs.new_witness_variable(Fr::from(8u32))?;
    let w4 = cs.new_witness_variable(Fr::from(9u32))?;

    let product = multiply(&mut cs, w1, w2)?;
    sum_is(&mut cs, product, w3, w4)?;

    match cs.which_is_unsatisfied() {
        Some(trace) => println!("This is the trace of the non-satisfied constraint: {trace}"),
        None => println!("All constraints are satisfied"),
    }
    Ok(())
}

/// Enforces `a * b = 10` and returns the product as a constant combination.
#[tracing::instrument(target = "r1cs", skip(cs))]
fn multiply<F: Field, CS: ConstraintSystem<F>>(
    cs: &mut CS,
    a: Variable,
    b: Variable,
) -> Result<LinearCombination<F>, SynthesisError> {
    let ten = lc!() + (F::from(10u8), Variable::One);
    cs.enforce_constraint(lc!() + a, lc!() + b, ten.clone())?;
    Ok(ten)
}

/// Enforces `(product + a) * 1 = expected`.
#[tracing::instrument(target = "r1cs", skip(cs, product))]
fn sum_is<F: Field, CS: ConstraintSystem<F>>(
    cs: &mut CS,
    product: LinearCombination<F>,
    a: Variable,
    expected: Variable,
) -> Result<(), SynthesisError> {
    cs.enforce_constraint(product + a, lc!() + Variable::One, lc!() + expected)
}
