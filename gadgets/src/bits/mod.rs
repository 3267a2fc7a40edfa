use ark_ff::PrimeField;
use ark_uint_relations::r1cs::{Result, SynthesisError};

mod boolean;
mod vector;

pub use boolean::{AllocatedBit, Boolean};
pub use vector::BitVector;

/// The largest width a field element of `F` can be decomposed into without
/// ambiguity: every integer below `2^capacity` is below the modulus.
pub fn field_capacity<F: PrimeField>() -> usize {
    F::MODULUS_BIT_SIZE as usize - 1
}

pub(crate) fn check_width<F: PrimeField>(width: usize) -> Result<()> {
    let capacity = field_capacity::<F>();
    if width > capacity {
        tracing::debug!(target: "r1cs", width, capacity, "bit decomposition too wide");
        return Err(SynthesisError::WidthOverflow { width, capacity });
    }
    Ok(())
}
