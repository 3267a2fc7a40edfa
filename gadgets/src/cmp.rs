use ark_ff::PrimeField;
use ark_uint_relations::r1cs::{ConstraintSystem, Result, SynthesisError, SynthesisMode};

use crate::bits::{check_width, BitVector, Boolean};

/// Output a boolean wire that is true iff `a < b`.
///
/// Both operands must have the same width `w`, and `w + 2` must fit in the
/// capacity of `F`; both conditions are checked before anything is
/// allocated. The difference `a - b + 2^(w + 1)` lies in `(2^w, 3 * 2^w)`,
/// so decomposing it into `w + 2` bits costs `w + 3` constraints and `w + 2`
/// variables, and its bit `w` is set exactly when `a < b`.
#[tracing::instrument(target = "r1cs", skip_all, fields(width = a.width()))]
pub fn less_than<F, M, CS>(
    cs: &mut CS,
    a: &BitVector<F, M>,
    b: &BitVector<F, M>,
) -> Result<Boolean<M>>
where
    F: PrimeField,
    M: SynthesisMode,
    CS: ConstraintSystem<F, Mode = M>,
{
    let width = a.width();
    if width != b.width() {
        return Err(SynthesisError::WidthMismatch {
            left: width,
            right: b.width(),
        });
    }
    check_width::<F>(width + 2)?;

    let shift = F::from(2u64).pow([width as u64 + 1]);
    let mut difference = a.number() - b.number();
    difference.add_constant(shift);

    let difference = BitVector::constrain(cs, difference, width + 2)?;
    Ok(Boolean::Is(difference.bits()[width].clone()))
}

/// Output a boolean wire that is true iff `a > b`.
pub fn greater_than<F, M, CS>(
    cs: &mut CS,
    a: &BitVector<F, M>,
    b: &BitVector<F, M>,
) -> Result<Boolean<M>>
where
    F: PrimeField,
    M: SynthesisMode,
    CS: ConstraintSystem<F, Mode = M>,
{
    less_than(cs, b, a)
}

/// Output a boolean wire that is true iff `a <= b`.
pub fn less_or_equal<F, M, CS>(
    cs: &mut CS,
    a: &BitVector<F, M>,
    b: &BitVector<F, M>,
) -> Result<Boolean<M>>
where
    F: PrimeField,
    M: SynthesisMode,
    CS: ConstraintSystem<F, Mode = M>,
{
    Ok(!greater_than(cs, a, b)?)
}

/// Output a boolean wire that is true iff `a >= b`.
pub fn greater_or_equal<F, M, CS>(
    cs: &mut CS,
    a: &BitVector<F, M>,
    b: &BitVector<F, M>,
) -> Result<Boolean<M>>
where
    F: PrimeField,
    M: SynthesisMode,
    CS: ConstraintSystem<F, Mode = M>,
{
    Ok(!less_than(cs, a, b)?)
}
