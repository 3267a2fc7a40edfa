use crate::{
    r1cs::mode::{Prove, Setup, SynthesisMode, Witness},
    utils::{
        linear_combination::LinearCombination,
        matrix::{mat_vec_mul, Matrix},
        variable::Variable,
        Result,
    },
};
use ark_ff::Field;
use ark_std::{cfg_iter, format, iter, string::String, vec::Vec};
use itertools::izip;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computations are expressed in terms of rank-1 constraint systems (R1CS).
/// The `generate_constraints` method is called once per construction mode:
/// by the prover with witnesses, and by the setup or verifier without.
pub trait ConstraintSynthesizer<F: Field> {
    /// Drives generation of new constraints inside `cs`.
    fn generate_constraints<CS: ConstraintSystem<F>>(self, cs: &mut CS) -> Result<()>;
}

/// The capability gadgets need from a constraint system: fresh witness
/// variables, rank-1 constraints `a * b = c`, and the constant one.
///
/// Implementations are driven by a single builder through `&mut self`;
/// variables and constraints must be recorded in call order.
pub trait ConstraintSystem<F: Field> {
    /// Whether this system keeps witnesses ([`Prove`]) or not ([`Setup`]).
    type Mode: SynthesisMode;

    /// Return a variable representing the constant "one" inside the
    /// constraint system.
    #[inline]
    fn one() -> Variable {
        Variable::One
    }

    /// Obtain a variable representing a new private witness input, assigned
    /// `value`.
    fn new_witness_variable(&mut self, value: Witness<Self::Mode, F>) -> Result<Variable>;

    /// Enforce the rank-1 constraint `a * b = c`.
    fn enforce_constraint(
        &mut self,
        a: LinearCombination<F>,
        b: LinearCombination<F>,
        c: LinearCombination<F>,
    ) -> Result<()>;

    /// The number of constraints enforced so far.
    fn num_constraints(&self) -> usize;

    /// The number of witness variables allocated so far.
    fn num_witness_variables(&self) -> usize;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Constraint<F: Field> {
    a: LinearCombination<F>,
    b: LinearCombination<F>,
    c: LinearCombination<F>,
    /// Name of the innermost `tracing` span active when it was enforced.
    label: Option<&'static str>,
}

/// A Rank-One constraint recorder. Enforces constraints of the form
/// `⟨a_i, z⟩ ⋅ ⟨b_i, z⟩ = ⟨c_i, z⟩`, where `a_i`, `b_i`, and `c_i` are linear
/// combinations over variables, and `z` is the concrete assignment to these
/// variables.
///
/// `M` fixes the construction mode; see [`ProvingSystem`] and
/// [`SetupSystem`].
#[derive(Debug, Clone)]
pub struct R1csSystem<F: Field, M: SynthesisMode> {
    /// Assignments to the private input variables. Zero-sized entries in
    /// [`Setup`] mode.
    pub witness_assignment: Vec<Witness<M, F>>,

    constraints: Vec<Constraint<F>>,
}

/// A constraint system that records witnesses alongside constraints.
pub type ProvingSystem<F> = R1csSystem<F, Prove>;

/// A constraint system that only records the shape of the circuit.
pub type SetupSystem<F> = R1csSystem<F, Setup>;

impl<F: Field, M: SynthesisMode> Default for R1csSystem<F, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field, M: SynthesisMode> R1csSystem<F, M> {
    /// Construct an empty constraint system.
    pub fn new() -> Self {
        Self {
            witness_assignment: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Build a fresh constraint system from `circuit`. Nothing is returned
    /// unless synthesis finished without error.
    pub fn synthesize<C: ConstraintSynthesizer<F>>(circuit: C) -> Result<Self> {
        let mut cs = Self::new();
        circuit.generate_constraints(&mut cs)?;
        tracing::debug!(
            target: "r1cs",
            mode = M::NAME,
            num_constraints = cs.constraints.len(),
            num_witness_variables = cs.witness_assignment.len(),
            "synthesized constraint system"
        );
        Ok(cs)
    }

    /// The name of the span that enforced constraint `index`, if a
    /// subscriber was recording spans at that point.
    pub fn constraint_label(&self, index: usize) -> Option<&'static str> {
        self.constraints.get(index).and_then(|c| c.label)
    }

    #[inline]
    fn make_row(l: &LinearCombination<F>) -> Vec<(F, usize)> {
        l.iter()
            .filter(|(coeff, _)| !coeff.is_zero())
            .filter_map(|(coeff, var)| var.column().map(|col| (*coeff, col)))
            .collect()
    }

    /// The A, B and C matrices of the recorded constraints. Column 0 is the
    /// constant one and column `i + 1` is witness `i`.
    pub fn to_matrices(&self) -> ConstraintMatrices<F> {
        let a: Matrix<F> = self.constraints.iter().map(|c| Self::make_row(&c.a)).collect();
        let b: Matrix<F> = self.constraints.iter().map(|c| Self::make_row(&c.b)).collect();
        let c: Matrix<F> = self.constraints.iter().map(|c| Self::make_row(&c.c)).collect();

        ConstraintMatrices {
            num_witness_variables: self.witness_assignment.len(),
            num_constraints: self.constraints.len(),

            a_num_non_zero: a.iter().map(Vec::len).sum(),
            b_num_non_zero: b.iter().map(Vec::len).sum(),
            c_num_non_zero: c.iter().map(Vec::len).sum(),

            a,
            b,
            c,
        }
    }
}

impl<F: Field, M: SynthesisMode> ConstraintSystem<F> for R1csSystem<F, M> {
    type Mode = M;

    #[inline]
    fn new_witness_variable(&mut self, value: Witness<M, F>) -> Result<Variable> {
        let index = self.witness_assignment.len();
        self.witness_assignment.push(value);
        Ok(Variable::Witness(index))
    }

    #[inline]
    fn enforce_constraint(
        &mut self,
        a: LinearCombination<F>,
        b: LinearCombination<F>,
        c: LinearCombination<F>,
    ) -> Result<()> {
        let label = tracing::Span::current().metadata().map(|m| m.name());
        self.constraints.push(Constraint { a, b, c, label });
        Ok(())
    }

    #[inline]
    fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    #[inline]
    fn num_witness_variables(&self) -> usize {
        self.witness_assignment.len()
    }
}

impl<F: Field> R1csSystem<F, Prove> {
    /// Obtain the assignment corresponding to the `Variable` `v`.
    pub fn assigned_value(&self, v: Variable) -> Option<F> {
        match v {
            Variable::Zero => Some(F::zero()),
            Variable::One => Some(F::one()),
            Variable::Witness(i) => self.witness_assignment.get(i).copied(),
        }
    }

    /// The assignment vector `z`, laid out like the matrix columns.
    pub fn full_assignment(&self) -> Vec<F> {
        iter::once(F::one())
            .chain(self.witness_assignment.iter().copied())
            .collect()
    }

    fn is_constraint_satisfied(&self, constraint: &Constraint<F>) -> bool {
        let eval = |lc: &LinearCombination<F>| lc.evaluate(|v| self.assigned_value(v));
        match (eval(&constraint.a), eval(&constraint.b), eval(&constraint.c)) {
            (Some(a), Some(b), Some(c)) => a * b == c,
            _ => false,
        }
    }

    /// Outputs `true` if every recorded constraint holds under the recorded
    /// assignment.
    pub fn is_satisfied(&self) -> bool {
        self.which_is_unsatisfied().is_none()
    }

    /// If `self` is satisfied, outputs `None`. Otherwise outputs the index of
    /// the first unsatisfied constraint, prefixed by the span that enforced
    /// it when one was recorded.
    pub fn which_is_unsatisfied(&self) -> Option<String> {
        let index = cfg_iter!(self.constraints)
            .enumerate()
            .filter(|(_, c)| !self.is_constraint_satisfied(c))
            .map(|(i, _)| i)
            .min()?;
        tracing::debug!(target: "r1cs", index, "found unsatisfied constraint");
        Some(self.constraints[index].label.map_or_else(
            || format!("{index}"),
            |label| format!("{label} (constraint {index})"),
        ))
    }
}

/// The A, B and C matrices of a Rank-One `ConstraintSystem`.
/// Also contains metadata on the structure of the constraint system
/// and the matrices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintMatrices<F: Field> {
    /// The number of variables that are "private witnesses" to the constraint
    /// system.
    pub num_witness_variables: usize,
    /// The number of constraints in the constraint system.
    pub num_constraints: usize,
    /// The number of non_zero entries in the A matrix.
    pub a_num_non_zero: usize,
    /// The number of non_zero entries in the B matrix.
    pub b_num_non_zero: usize,
    /// The number of non_zero entries in the C matrix.
    pub c_num_non_zero: usize,

    /// The A constraint matrix.
    pub a: Matrix<F>,
    /// The B constraint matrix.
    pub b: Matrix<F>,
    /// The C constraint matrix.
    pub c: Matrix<F>,
}

impl<F: Field> ConstraintMatrices<F> {
    /// Check a full assignment `z = (1, w_0, w_1, ...)` against the
    /// matrices, independently of how the assignment was produced. The
    /// first entry must be the constant one.
    pub fn is_satisfied_by(&self, assignment: &[F]) -> bool {
        if assignment.len() != self.num_witness_variables + 1
            || assignment.first() != Some(&F::one())
        {
            return false;
        }
        let az = mat_vec_mul(&self.a, assignment);
        let bz = mat_vec_mul(&self.b, assignment);
        let cz = mat_vec_mul(&self.c, assignment);
        izip!(az, bz, cz).all(|(a, b, c)| a * b == c)
    }
}
