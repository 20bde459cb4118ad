//! Membership evaluation for prediction records
//!
//! Given a record produced by the risk service, recompute how strongly
//! each reading belongs to every category of its linguistic variable.
//! Nothing here computes or changes the risk score itself.

pub mod error;
pub mod evaluator;

pub use error::{ExplainError, ExplainResult};
pub use evaluator::{
    evaluate, fuzzify, out_of_domain, try_evaluate, Evaluator, Membership, MembershipResult,
};
