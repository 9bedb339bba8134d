//! # fixedyield Math
//!
//! Bounded single-variable root finders used by the yield solver.
//!
//! - [`solvers::newton_raphson`]: analytic-derivative Newton with divergence detection
//! - [`solvers::brent`]: bracketing Brent-Dekker
//! - [`solvers::hybrid`]: Newton first, Brent over fallback brackets second
//!
//! Every solver is bounded by [`solvers::SolverConfig::max_iterations`] and
//! reports failure as a [`MathError`] instead of returning the last iterate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        brent, find_bracket, hybrid, newton_raphson, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
