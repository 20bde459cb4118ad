//! Fuzzy membership primitives and the linguistic variable catalog
//!
//! [`membership`] holds the trapezoid/triangle functions and the
//! [`FuzzySetShape`] variant; [`catalog`] holds the fixed parameterization
//! of BMI, heart rate, sleep hours and exercise level.

pub mod catalog;
pub mod membership;

pub use catalog::{catalog, Catalog, LinguisticSet, LinguisticVariable, VariableKey};
pub use membership::{trapezoid, triangle, FuzzySetShape};
