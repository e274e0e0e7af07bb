//! Thermal systems models.
//!
//! This module contains models for thermal systems, starting with the
//! lumped cooling of a cup of coffee.

pub mod cooling;
