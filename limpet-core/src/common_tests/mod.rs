//! Shared test suites.
//!
//! The generic bodies here are compiled into the library so the
//! integration tests under `tests/` can parametrize them over every
//! collection type that implements the contract.

pub mod blocking_list_stress_tests;
