use ark_ff::PrimeField;
use ark_test_curves::bls12_381::Fr;
use ark_uint_gadgets::prelude::*;
use ark_uint_relations::r1cs::{ProvingSystem, SetupSystem};
use tracing_subscriber::{fmt, layer::SubscriberExt, Registry};

/// Proves that a private balance covers a private price, with both amounts
/// bounded to 64 bits.
struct Affordable {
    balance: Option<u64>,
    price: Option<u64>,
}

impl<F: PrimeField> ConstraintSynthesizer<F> for Affordable {
    #[tracing::instrument(target = "r1cs", skip_all)]
    fn generate_constraints<CS: ConstraintSystem<F>>(
        self,
        cs: &mut CS,
    ) -> Result<(), SynthesisError> {
        let balance =
            BitVector::alloc_u64(cs, || self.balance.ok_or(SynthesisError::AssignmentMissing))?;
        let price =
            BitVector::alloc_u64(cs, || self.price.ok_or(SynthesisError::AssignmentMissing))?;
        greater_or_equal(cs, &balance, &price)?.enforce_equal(cs, &Boolean::TRUE)
    }
}

fn main() -> Result<(), SynthesisError> {
    let subscriber = Registry::default().with(fmt::layer());
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default subscriber");

    let setup = SetupSystem::<Fr>::synthesize(Affordable {
        balance: None,
        price: None,
    })?;
    let matrices = setup.to_matrices();
    println!(
        "{} constraints over {} witness variables",
        matrices.num_constraints, matrices.num_witness_variables
    );

    for (balance, price) in [(120, 100), (80, 100)] {
        let cs = ProvingSystem::<Fr>::synthesize(Affordable {
            balance: Some(balance),
            price: Some(price),
        })?;
        let accepted = matrices.is_satisfied_by(&cs.full_assignment());
        match cs.which_is_unsatisfied() {
            Some(trace) => println!("balance {balance}, price {price}: rejected at {trace}"),
            None => println!("balance {balance}, price {price}: accepted = {accepted}"),
        }
    }
    Ok(())
}
