use ark_ff::{BigInteger, PrimeField};
use ark_std::vec::Vec;
use ark_uint_relations::{
    lc,
    r1cs::{ConstraintSystem, LinearCombination, Result, SynthesisMode},
};

use super::{check_width, AllocatedBit};
use crate::field_element::FieldElement;

/// A field element committed to a fixed number of bits.
///
/// Constructing a `BitVector` of width `w` allocates `w` boolean variables
/// and registers `w + 1` constraints: one booleanity constraint per bit and
/// one equality `(Σ 2^i * bits[i]) * 1 = number`. Afterwards the number is
/// known to lie in `[0, 2^w)`. Bits are little-endian.
#[derive(Clone, Debug)]
pub struct BitVector<F: PrimeField, M: SynthesisMode> {
    bits: Vec<AllocatedBit<M>>,
    num: FieldElement<F, M>,
}

impl<F: PrimeField, M: SynthesisMode> BitVector<F, M> {
    /// Range-check `num` into `width` bits.
    ///
    /// Fails with `WidthOverflow`, before anything is allocated, if `width`
    /// exceeds the capacity of `F`. A witness that does not fit in `width`
    /// bits still produces a system, but not a satisfied one.
    #[tracing::instrument(target = "r1cs", skip_all, fields(width = width))]
    pub fn constrain<CS: ConstraintSystem<F, Mode = M>>(
        cs: &mut CS,
        num: FieldElement<F, M>,
        width: usize,
    ) -> Result<Self> {
        check_width::<F>(width)?;

        let bits_le = M::map(num.witness(), |v| v.into_bigint().to_bits_le());
        let bits = (0..width)
            .map(|i| {
                let bit = M::map(&bits_le, |b| b.get(i).copied().unwrap_or(false));
                AllocatedBit::from_witness(cs, bit)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut sum: LinearCombination<F> = lc!();
        let mut coeff = F::one();
        for bit in &bits {
            sum += (coeff, bit.variable());
            coeff.double_in_place();
        }
        cs.enforce_constraint(sum, lc!() + CS::one(), num.lc().clone())?;

        Ok(Self { bits, num })
    }

    /// Allocate a fresh field element holding the output of `f` and
    /// range-check it into `width` bits.
    pub fn alloc<CS: ConstraintSystem<F, Mode = M>>(
        cs: &mut CS,
        f: impl FnOnce() -> Result<F>,
        width: usize,
    ) -> Result<Self> {
        check_width::<F>(width)?;
        let num = FieldElement::alloc(cs, f)?;
        Self::constrain(cs, num, width)
    }

    /// Allocate a 32-bit unsigned integer.
    pub fn alloc_u32<CS: ConstraintSystem<F, Mode = M>>(
        cs: &mut CS,
        f: impl FnOnce() -> Result<u32>,
    ) -> Result<Self> {
        Self::alloc(cs, || f().map(F::from), 32)
    }

    /// Allocate a 64-bit unsigned integer.
    pub fn alloc_u64<CS: ConstraintSystem<F, Mode = M>>(
        cs: &mut CS,
        f: impl FnOnce() -> Result<u64>,
    ) -> Result<Self> {
        Self::alloc(cs, || f().map(F::from), 64)
    }

    /// The bits of `self`, least significant first.
    pub fn bits(&self) -> &[AllocatedBit<M>] {
        &self.bits
    }

    /// The number of bits `self` was constrained to.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// The linear combination of the underlying number.
    pub fn lc(&self) -> &LinearCombination<F> {
        self.num.lc()
    }

    /// The underlying number.
    pub fn number(&self) -> &FieldElement<F, M> {
        &self.num
    }

    /// The value of the underlying number. Only available while proving.
    pub fn value(&self) -> Result<F> {
        self.num.value()
    }

    /// The values of the bits, least significant first.
    pub fn to_bits_le(&self) -> Result<Vec<bool>> {
        self.bits.iter().map(AllocatedBit::value).collect()
    }
}
