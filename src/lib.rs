//! # Coffee Cooling
//!
//! Newton's-law cooling models for a cup of coffee, built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The crate answers one question: when should cream go into a cup of
//! black coffee so it reaches a preferred drinking temperature?
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Workflow
//!
//! 1. A [`Calibrator`](models::thermal::cooling::Calibrator) derives one cooling
//!    constant per substance from a table of measured temperatures.
//! 2. A [`CoolingSimulator`](models::thermal::cooling::CoolingSimulator)
//!    integrates the cooling law for black coffee and for coffee creamed at
//!    a set of candidate times.
//! 3. [`CoffeeCooling`](models::thermal::cooling::CoffeeCooling) runs both and
//!    hands the resulting series to whatever renders them.
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the public API.
//! Model-specific utility code remains private.

pub mod models;
pub mod support;
