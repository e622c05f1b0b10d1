//! # Formulas
//!
//! Pure calculation functions behind the calculator units. Each takes typed
//! numbers and returns a typed, serializable result; input parsing and
//! validation happen in [`crate::units`].
//!
//! ## Available Formulas
//!
//! - [`finance`] - Loan payment (PMT), compound and simple interest, tips
//! - [`health`] - BMI with category, BMR (Mifflin-St Jeor)
//! - [`geometry`] - Circle, triangle, rectangle, sphere, cylinder, right triangle
//! - [`convert`] - Temperature, length and weight conversion
//! - [`datetime`] - Calendar age
//! - [`random`] - Dice, coin flips, random numbers

pub mod convert;
pub mod datetime;
pub mod finance;
pub mod geometry;
pub mod health;
pub mod random;
