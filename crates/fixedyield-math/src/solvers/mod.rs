//! Root-finding algorithms.
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative |
//! | Brent | Fast (superlinear) | Guaranteed | Bracket |
//! | Hybrid | Fast | Guaranteed* | Initial guess |
//!
//! *When one of the fallback brackets, or the automatic bracket search,
//! encloses a sign change.
//!
//! # Example: Annual Bond Yield
//!
//! ```rust
//! use fixedyield_math::solvers::{hybrid, SolverConfig};
//!
//! // 5% annual coupon, 5 years, price 95
//! let f = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv + 100.0 / (1.0 + y).powi(5) - 95.0
//! };
//! let df = |y: f64| {
//!     let mut dpv = 0.0;
//!     for t in 1..=5 {
//!         dpv -= f64::from(t) * 5.0 / (1.0 + y).powi(t + 1);
//!     }
//!     dpv - 500.0 / (1.0 + y).powi(6)
//! };
//!
//! let result = hybrid(f, df, 0.03, &[(-0.1, 0.5)], &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05);
//! ```

mod brent;
mod hybrid;
mod newton;

pub use brent::brent;
pub use hybrid::{find_bracket, hybrid};
pub use newton::newton_raphson;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance on the residual and on the step size.
    pub tolerance: f64,
    /// Maximum number of iterations per solver run.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a successful root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Function value at the root.
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert_relative_eq!(config.tolerance, 1e-8);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(SolverConfig::new(1e-8, 50), config);
    }

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_relative_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    }

    /// Annual-pay bond price minus target, as a function of yield.
    fn annual_bond(coupon: f64, years: i32, target: f64) -> impl Fn(f64) -> f64 {
        move |y: f64| {
            let mut pv = 0.0;
            for t in 1..=years {
                pv += coupon / (1.0 + y).powi(t);
            }
            pv + 100.0 / (1.0 + y).powi(years) - target
        }
    }

    fn annual_bond_derivative(coupon: f64, years: i32) -> impl Fn(f64) -> f64 {
        move |y: f64| {
            let mut dpv = 0.0;
            for t in 1..=years {
                dpv -= f64::from(t) * coupon / (1.0 + y).powi(t + 1);
            }
            dpv - f64::from(years) * 100.0 / (1.0 + y).powi(years + 1)
        }
    }

    #[test]
    fn test_par_bond_yields_coupon() {
        let f = annual_bond(5.0, 10, 100.0);
        let df = annual_bond_derivative(5.0, 10);

        let result = newton_raphson(f, df, 0.03, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, 0.05, epsilon = 1e-10);
    }

    #[test]
    fn test_all_solvers_agree() {
        let f = annual_bond(6.0, 7, 98.0);
        let df = annual_bond_derivative(6.0, 7);
        let config = SolverConfig::default();

        let newton_result = newton_raphson(&f, &df, 0.03, &config).unwrap();
        let brent_result = brent(&f, 0.0, 0.20, &config).unwrap();
        let hybrid_result = hybrid(&f, &df, 0.03, &[], &config).unwrap();

        assert_relative_eq!(newton_result.root, brent_result.root, epsilon = 1e-8);
        assert_relative_eq!(newton_result.root, hybrid_result.root, epsilon = 1e-8);
        assert!(newton_result.root > 0.06);
    }

    #[test]
    fn test_premium_and_discount_order() {
        let config = SolverConfig::default();
        let df = annual_bond_derivative(5.0, 5);

        let premium = newton_raphson(annual_bond(5.0, 5, 105.0), &df, 0.03, &config).unwrap();
        let discount = newton_raphson(annual_bond(5.0, 5, 95.0), &df, 0.03, &config).unwrap();

        assert!(premium.root < 0.05);
        assert!(discount.root > 0.05);
    }
}
