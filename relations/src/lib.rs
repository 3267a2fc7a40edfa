//! Core interface for recording Rank-1 Constraint Systems (R1CS) that
//! encode bounded unsigned-integer arithmetic.
//!
//! A circuit is built in one of two modes, chosen at the type level:
//!
//! * [`Prove`](crate::r1cs::Prove): every variable carries a concrete
//!   assignment and the finished system can be checked for satisfiability.
//! * [`Setup`](crate::r1cs::Setup): only the shape of the system is recorded;
//!   witness closures are never evaluated.
//!
//! Both modes allocate variables and register constraints in the same order,
//! so the matrices produced by a prover and by a verifier for the same circuit
//! are identical.

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
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::inline_always,
    clippy::module_name_repetitions,
    clippy::redundant_closure_for_method_calls
)]
#![deny(unsafe_code)]

#[macro_use]
extern crate ark_std;

/// The R1CS recording infrastructure.
pub mod r1cs;

/// Functions and data structures needed for working with R1CS.
pub mod utils;
