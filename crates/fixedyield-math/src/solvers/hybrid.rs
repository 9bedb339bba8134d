//! Hybrid root-finding: Newton-Raphson with Brent fallback.

use crate::error::{MathError, MathResult};
use crate::solvers::{brent, newton_raphson, SolverConfig, SolverResult};

/// Initial half-width for the automatic bracket search.
const BRACKET_SEARCH_WIDTH: f64 = 0.1;

/// Number of doublings tried by the automatic bracket search.
const BRACKET_SEARCH_EXPANSIONS: u32 = 20;

/// Hybrid root-finding algorithm.
///
/// # Strategy
///
/// 1. Run Newton-Raphson from `initial_guess`.
/// 2. If Newton fails, try Brent on each of `fallback_brackets` in order,
///    skipping intervals that do not enclose a sign change.
/// 3. If none of them works, search for a bracket around `initial_guess`
///    with [`find_bracket`] and run Brent on it.
///
/// # Example
///
/// ```rust
/// use fixedyield_math::solvers::{hybrid, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
/// let df = |x: f64| 3.0 * x * x - 1.0;
///
/// let result = hybrid(f, df, 1.5, &[(1.0, 2.0)], &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
pub fn hybrid<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    fallback_brackets: &[(f64, f64)],
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let newton_err = match newton_raphson(&f, &df, initial_guess, config) {
        Ok(result) => return Ok(result),
        Err(e) => e,
    };

    log::debug!(
        "Newton-Raphson failed from {}: {}; falling back to Brent",
        initial_guess,
        newton_err
    );

    for &(lower, upper) in fallback_brackets {
        match brent(&f, lower, upper, config) {
            Ok(result) => return Ok(result),
            Err(e) => log::debug!("Brent on [{}, {}] failed: {}", lower, upper, e),
        }
    }

    match find_bracket(&f, initial_guess, BRACKET_SEARCH_WIDTH, BRACKET_SEARCH_EXPANSIONS) {
        Some((lower, upper)) => brent(&f, lower, upper, config),
        None => Err(MathError::invalid_input(format!(
            "Newton-Raphson failed ({newton_err}) and no bracketing interval was found"
        ))),
    }
}

/// Searches outward from `center` for an interval with a sign change.
///
/// The half-width starts at `initial_width` and doubles after every miss.
/// Points where `f` is not finite are ignored. Returns `None` after
/// `max_expansions` misses or if `f(center)` is not finite.
pub fn find_bracket<F>(
    f: F,
    center: f64,
    initial_width: f64,
    max_expansions: u32,
) -> Option<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    let f_center = f(center);
    if !f_center.is_finite() {
        return None;
    }

    let mut width = initial_width;
    for _ in 0..max_expansions {
        let lower = center - width;
        let upper = center + width;

        let f_lower = f(lower);
        if f_lower.is_finite() && f_lower * f_center <= 0.0 {
            return Some((lower, center));
        }

        let f_upper = f(upper);
        if f_upper.is_finite() && f_upper * f_center <= 0.0 {
            return Some((center, upper));
        }

        width *= 2.0;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_newton_path() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = hybrid(f, df, 1.5, &[], &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_fallback_to_bracket() {
        // Zero derivative at the initial guess forces the fallback
        let f = |x: f64| x * x * x - 2.0 * x - 5.0;
        let df = |x: f64| 3.0 * x * x - 2.0;
        let guess = (2.0f64 / 3.0).sqrt();

        let result = hybrid(f, df, guess, &[(1.0, 3.0)], &SolverConfig::default()).unwrap();

        assert!(f(result.root).abs() < 1e-10);
    }

    #[test]
    fn test_skips_brackets_without_sign_change() {
        let f = |x: f64| x - 0.25;
        // Wrong derivative makes Newton fail immediately
        let df = |_: f64| 0.0;

        let result = hybrid(
            f,
            df,
            0.0,
            &[(0.5, 1.0), (-1.0, 1.0)],
            &SolverConfig::default(),
        )
        .unwrap();

        assert_relative_eq!(result.root, 0.25, epsilon = 1e-10);
    }

    #[test]
    fn test_auto_bracket_search() {
        let f = |x: f64| x - 3.0;
        let df = |_: f64| 0.0;

        let result = hybrid(f, df, 0.0, &[], &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_no_root_reports_error() {
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;

        let result = hybrid(f, df, 0.5, &[(-1.0, 1.0)], &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }

    #[test]
    fn test_find_bracket() {
        let f = |x: f64| x - 1.0;

        let (lower, upper) = find_bracket(f, 0.0, 0.1, 10).unwrap();
        assert!(lower <= 1.0 && 1.0 <= upper);

        assert_eq!(find_bracket(|x: f64| x * x + 1.0, 0.0, 0.1, 5), None);
        assert_eq!(find_bracket(|_: f64| f64::NAN, 0.0, 0.1, 5), None);
    }
}
