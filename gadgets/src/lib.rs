//! Gadgets for bounded unsigned-integer arithmetic inside a rank-1 constraint
//! system.
//!
//! A [`FieldElement`](field_element::FieldElement) pairs a linear combination
//! of circuit variables with the witness it evaluates to while proving.
//! Combining field elements is free. Committing one to a
//! [`BitVector`](bits::BitVector) of fixed width pays for a bit decomposition
//! once, after which two vectors of equal width can be compared with
//! [`less_than`](cmp::less_than) and friends.
//!
//! Every gadget is generic over the construction mode of the constraint
//! system: in [`Setup`](ark_uint_relations::r1cs::Setup) mode the same
//! variables and constraints are produced as in
//! [`Prove`](ark_uint_relations::r1cs::Prove) mode, but witness closures are
//! never run.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs,
    clippy::pedantic
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation
)]
#![deny(unsafe_code)]

/// Bit-level gadgets: booleans and width-bounded bit vectors.
pub mod bits;
/// Comparisons between bit vectors of equal width.
pub mod cmp;
/// Symbolic field elements with free linear arithmetic.
pub mod field_element;

/// Everything a circuit author typically needs.
pub mod prelude {
    pub use crate::{
        bits::{AllocatedBit, BitVector, Boolean},
        cmp::{greater_or_equal, greater_than, less_or_equal, less_than},
        field_element::FieldElement,
    };
    pub use ark_uint_relations::r1cs::{
        ConstraintSynthesizer, ConstraintSystem, Prove, Setup, SynthesisError, SynthesisMode,
    };
}
