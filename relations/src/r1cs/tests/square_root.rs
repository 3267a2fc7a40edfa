use crate::{
    lc,
    r1cs::{ConstraintSynthesizer, ConstraintSystem, Field, Result, SynthesisError, SynthesisMode},
};

/// Proves knowledge of `root` such that `root * root = square`. The right
/// operand is written as `2 * root - root` so that coefficients get merged.
#[derive(Clone, Copy, Debug)]
pub(super) struct SquareRoot<F> {
    pub root: Option<F>,
    pub square: Option<F>,
}

impl<F: Field> ConstraintSynthesizer<F> for SquareRoot<F> {
    #[tracing::instrument(target = "r1cs", name = "square_root", skip_all)]
    fn generate_constraints<CS: ConstraintSystem<F>>(self, cs: &mut CS) -> Result<()> {
        let root_value = <CS::Mode as SynthesisMode>::assign(|| {
            self.root.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let root = cs.new_witness_variable(root_value)?;

        let square_value = <CS::Mode as SynthesisMode>::assign(|| {
            self.square.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let square = cs.new_witness_variable(square_value)?;

        let two = F::one().double();
        cs.enforce_constraint(
            lc!() + root,
            lc!() + (two, root) - root,
            lc!() + square,
        )
    }
}
