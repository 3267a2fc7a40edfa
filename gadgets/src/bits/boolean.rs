use ark_ff::Field;
use ark_std::ops::Not;
use ark_uint_relations::{
    lc,
    r1cs::{
        ConstraintSystem, LinearCombination, Result, SynthesisError, SynthesisMode, Variable,
        Witness,
    },
};

/// Represents a variable in the constraint system which is guaranteed
/// to be either zero or one.
#[derive(Clone, Debug)]
#[must_use]
pub struct AllocatedBit<M: SynthesisMode> {
    variable: Variable,
    value: Witness<M, bool>,
}

impl<M: SynthesisMode> AllocatedBit<M> {
    /// Get the R1CS variable for `self`.
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// The mode-dependent witness of `self`.
    pub fn witness(&self) -> &Witness<M, bool> {
        &self.value
    }

    /// Get the assigned value for `self`.
    pub fn value(&self) -> Result<bool> {
        M::get(&self.value).ok_or(SynthesisError::AssignmentMissing)
    }

    /// Allocate a witness bit holding the output of `f`, constrained to be
    /// boolean.
    pub fn alloc<F: Field, CS: ConstraintSystem<F, Mode = M>>(
        cs: &mut CS,
        f: impl FnOnce() -> Result<bool>,
    ) -> Result<Self> {
        let value = M::assign(f)?;
        Self::from_witness(cs, value)
    }

    #[tracing::instrument(target = "r1cs", skip_all)]
    pub(crate) fn from_witness<F: Field, CS: ConstraintSystem<F, Mode = M>>(
        cs: &mut CS,
        value: Witness<M, bool>,
    ) -> Result<Self> {
        let variable = cs.new_witness_variable(M::map(&value, |b| F::from(*b)))?;

        // Constrain: (1 - a) * a = 0
        // This constrains a to be either 0 or 1.
        cs.enforce_constraint(lc!() + CS::one() - variable, lc!() + variable, lc!())?;

        Ok(Self { variable, value })
    }
}

/// The result of a comparison: an allocated bit, its negation, or a
/// constant. Negation is free.
#[derive(Clone, Debug)]
#[must_use]
pub enum Boolean<M: SynthesisMode> {
    /// Existential view of the boolean variable.
    Is(AllocatedBit<M>),
    /// Negated view of the boolean variable.
    Not(AllocatedBit<M>),
    /// Constant (not an allocated variable).
    Constant(bool),
}

impl<M: SynthesisMode> Boolean<M> {
    /// The constant `true`.
    pub const TRUE: Self = Boolean::Constant(true);

    /// The constant `false`.
    pub const FALSE: Self = Boolean::Constant(false);

    /// Constructs a `LinearCombination` from `Boolean`'s variables.
    pub fn lc<F: Field>(&self) -> LinearCombination<F> {
        match self {
            Boolean::Is(v) => lc!() + v.variable(),
            Boolean::Not(v) => lc!() + Variable::One - v.variable(),
            Boolean::Constant(true) => lc!() + Variable::One,
            Boolean::Constant(false) => lc!(),
        }
    }

    /// The mode-dependent witness of `self`.
    pub fn witness(&self) -> Witness<M, bool> {
        match self {
            Boolean::Is(b) => b.value.clone(),
            Boolean::Not(b) => M::map(&b.value, |v| !v),
            Boolean::Constant(c) => M::constant(*c),
        }
    }

    /// The value of `self`. Constants are known in every mode; allocated
    /// bits only while proving.
    pub fn value(&self) -> Result<bool> {
        match self {
            Boolean::Constant(c) => Ok(*c),
            _ => M::get(&self.witness()).ok_or(SynthesisError::AssignmentMissing),
        }
    }

    /// Enforce that `self` and `other` are equal, with one constraint
    /// `(self - other) * 1 = 0`.
    #[tracing::instrument(target = "r1cs", skip_all)]
    pub fn enforce_equal<F: Field, CS: ConstraintSystem<F, Mode = M>>(
        &self,
        cs: &mut CS,
        other: &Self,
    ) -> Result<()> {
        cs.enforce_constraint(
            self.lc::<F>() - other.lc::<F>(),
            lc!() + CS::one(),
            lc!(),
        )
    }
}

impl<M: SynthesisMode> Not for &Boolean<M> {
    type Output = Boolean<M>;

    fn not(self) -> Boolean<M> {
        match self {
            Boolean::Is(b) => Boolean::Not(b.clone()),
            Boolean::Not(b) => Boolean::Is(b.clone()),
            Boolean::Constant(c) => Boolean::Constant(!c),
        }
    }
}

impl<M: SynthesisMode> Not for Boolean<M> {
    type Output = Boolean<M>;

    fn not(self) -> Boolean<M> {
        match self {
            Boolean::Is(b) => Boolean::Not(b),
            Boolean::Not(b) => Boolean::Is(b),
            Boolean::Constant(c) => Boolean::Constant(!c),
        }
    }
}

impl<M: SynthesisMode> From<bool> for Boolean<M> {
    fn from(b: bool) -> Self {
        Boolean::Constant(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{One, Zero};
    use ark_test_curves::bls12_381::Fr;
    use ark_uint_relations::r1cs::{Prove, ProvingSystem, Setup, SetupSystem};

    #[test]
    fn test_boolean_alloc() -> Result<()> {
        for b in [false, true] {
            let mut cs = ProvingSystem::<Fr>::new();
            let bit = AllocatedBit::alloc(&mut cs, || Ok(b))?;
            assert_eq!(bit.value()?, b);
            assert_eq!(cs.assigned_value(bit.variable()), Some(Fr::from(b)));
            assert_eq!(cs.num_constraints(), 1);
            assert!(cs.is_satisfied());

            // (1 - b) * b = 0, with the constant one in column 0
            let matrices = cs.to_matrices();
            assert_eq!(matrices.a[0], vec![(Fr::one(), 0), (-Fr::one(), 1)]);
            assert_eq!(matrices.b[0], vec![(Fr::one(), 1)]);
        }
        Ok(())
    }

    #[test]
    fn non_boolean_witness_is_rejected() -> Result<()> {
        let mut cs = ProvingSystem::<Fr>::new();
        let bit = AllocatedBit::alloc(&mut cs, || Ok(true))?;
        let Variable::Witness(i) = bit.variable() else {
            panic!("allocated bits are witnesses")
        };
        cs.witness_assignment[i] = Fr::from(2u8);
        assert!(!cs.is_satisfied());
        Ok(())
    }

    #[test]
    fn negation() -> Result<()> {
        let mut cs = ProvingSystem::<Fr>::new();
        let b = Boolean::Is(AllocatedBit::alloc(&mut cs, || Ok(true))?);
        let not_b = !&b;
        assert!(!not_b.value()?);
        assert!((!not_b.clone()).value()?);
        assert_eq!(
            not_b.lc::<Fr>().evaluate(|v| cs.assigned_value(v)),
            Some(Fr::zero())
        );
        assert_eq!(
            (!Boolean::<Prove>::FALSE).lc::<Fr>().evaluate(|v| cs.assigned_value(v)),
            Some(Fr::one())
        );
        assert!(Boolean::<Prove>::FALSE.lc::<Fr>().is_empty());
        assert_eq!(cs.num_constraints(), 1);
        Ok(())
    }

    #[test]
    fn test_enforce_equal() -> Result<()> {
        for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
            let mut cs = ProvingSystem::<Fr>::new();
            let x = Boolean::Is(AllocatedBit::alloc(&mut cs, || Ok(a))?);
            x.enforce_equal(&mut cs, &Boolean::from(b))?;
            assert_eq!(cs.num_constraints(), 2);
            assert_eq!(cs.is_satisfied(), a == b);

            let mut cs = ProvingSystem::<Fr>::new();
            let x = Boolean::Is(AllocatedBit::alloc(&mut cs, || Ok(a))?);
            let y = Boolean::Not(AllocatedBit::alloc(&mut cs, || Ok(b))?);
            x.enforce_equal(&mut cs, &y)?;
            assert_eq!(cs.is_satisfied(), a != b);
        }
        Ok(())
    }

    #[test]
    fn setup_bits_have_no_value() -> Result<()> {
        let mut cs = SetupSystem::<Fr>::new();
        let bit = AllocatedBit::alloc(&mut cs, || unreachable!("witness evaluated"))?;
        assert_eq!(bit.value(), Err(SynthesisError::AssignmentMissing));
        assert_eq!(Boolean::Not(bit).value(), Err(SynthesisError::AssignmentMissing));
        assert_eq!(Boolean::<Setup>::TRUE.value(), Ok(true));
        assert_eq!(cs.num_constraints(), 1);
        Ok(())
    }
}
