//! Families domain module (guardians and their dependents).
//!
//! This crate contains the guardian/dependent records and their
//! validation rules, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod dependent;
pub mod guardian;

pub use dependent::{Dependent, DependentPatch, NewDependent, MAX_AGE, MIN_AGE};
pub use guardian::{Guardian, NewGuardian};
