//! Crate-level utilities shared by the models.
//!
//! These APIs are public because they are handy outside the crate, but they
//! are not yet stable.

pub mod constraint;
pub mod units;
