//! Core interface for recording Rank-1 Constraint Systems (R1CS).

mod constraint_system;
mod mode;
#[cfg(test)]
mod tests;

pub use ark_ff::Field;
pub use constraint_system::{
    ConstraintMatrices, ConstraintSynthesizer, ConstraintSystem, ProvingSystem, R1csSystem,
    SetupSystem,
};
pub use mode::{Prove, Setup, SynthesisMode, Witness};

pub use crate::utils::{
    error::SynthesisError, linear_combination::LinearCombination, matrix::Matrix,
    variable::Variable, Result,
};
