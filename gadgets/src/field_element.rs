use ark_ff::Field;
use ark_std::ops::{Add, Sub};
use ark_uint_relations::{
    lc,
    r1cs::{
        ConstraintSystem, LinearCombination, Result, SynthesisError, SynthesisMode, Variable,
        Witness,
    },
};

use crate::bits::Boolean;

/// A field element inside a constraint system: a linear combination of
/// variables together with the value it takes under the prover's assignment.
///
/// Nothing about a `FieldElement` is constrained by itself. Allocation adds a
/// variable, and every other operation only rewrites the linear combination,
/// so arithmetic on field elements never registers a constraint. In [`Setup`]
/// mode the value does not exist at all.
///
/// [`Setup`]: ark_uint_relations::r1cs::Setup
#[derive(Clone, Debug)]
#[must_use]
pub struct FieldElement<F: Field, M: SynthesisMode> {
    lc: LinearCombination<F>,
    value: Witness<M, F>,
}

impl<F: Field, M: SynthesisMode> FieldElement<F, M> {
    /// The empty linear combination, evaluating to zero.
    pub fn zero() -> Self {
        Self {
            lc: lc!(),
            value: M::constant(F::zero()),
        }
    }

    /// The constant `k`, expressed as `k` times the constant-one variable.
    pub fn constant(k: F) -> Self {
        let mut result = Self::zero();
        result.add_constant(k);
        result
    }

    /// The linear combination this element stands for.
    pub fn lc(&self) -> &LinearCombination<F> {
        &self.lc
    }

    /// The mode-dependent witness of `self`.
    pub fn witness(&self) -> &Witness<M, F> {
        &self.value
    }

    /// The value of `self`. Only available while proving.
    pub fn value(&self) -> Result<F> {
        M::get(&self.value).ok_or(SynthesisError::AssignmentMissing)
    }

    /// Add the constant `k` to `self` in place.
    pub fn add_constant(&mut self, k: F) {
        self.lc += (k, Variable::One);
        self.value = M::map(&self.value, |v| *v + k);
    }

    /// Allocate a fresh witness variable holding the output of `f`.
    ///
    /// `f` is only evaluated when `cs` keeps witnesses; its error is
    /// propagated unchanged.
    pub fn alloc<CS: ConstraintSystem<F, Mode = M>>(
        cs: &mut CS,
        f: impl FnOnce() -> Result<F>,
    ) -> Result<Self> {
        let value = M::assign(f)?;
        let variable = cs.new_witness_variable(value.clone())?;
        Ok(Self {
            lc: variable.into(),
            value,
        })
    }

    /// Compute `self + k * other`.
    pub fn scaled_add(&self, k: F, other: &Self) -> Self {
        Self {
            lc: &self.lc + (k, &other.lc),
            value: M::zip_with(&self.value, &other.value, |a, b| *a + k * b),
        }
    }
}

impl<F: Field, M: SynthesisMode> Add<&FieldElement<F, M>> for &FieldElement<F, M> {
    type Output = FieldElement<F, M>;

    fn add(self, other: &FieldElement<F, M>) -> FieldElement<F, M> {
        FieldElement {
            lc: &self.lc + &other.lc,
            value: M::zip_with(&self.value, &other.value, |a, b| *a + b),
        }
    }
}

impl<F: Field, M: SynthesisMode> Sub<&FieldElement<F, M>> for &FieldElement<F, M> {
    type Output = FieldElement<F, M>;

    fn sub(self, other: &FieldElement<F, M>) -> FieldElement<F, M> {
        FieldElement {
            lc: &self.lc - &other.lc,
            value: M::zip_with(&self.value, &other.value, |a, b| *a - b),
        }
    }
}

impl<F: Field, M: SynthesisMode> Add<(F, &FieldElement<F, M>)> for &FieldElement<F, M> {
    type Output = FieldElement<F, M>;

    fn add(self, (k, other): (F, &FieldElement<F, M>)) -> FieldElement<F, M> {
        self.scaled_add(k, other)
    }
}

impl<F: Field, M: SynthesisMode> From<&Boolean<M>> for FieldElement<F, M> {
    fn from(b: &Boolean<M>) -> Self {
        Self {
            lc: b.lc(),
            value: M::map(&b.witness(), |b| F::from(*b)),
        }
    }
}
