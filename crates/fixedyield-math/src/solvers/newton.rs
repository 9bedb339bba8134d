//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Derivatives smaller than this are treated as zero.
const MIN_DERIVATIVE: f64 = 1e-15;

/// Consecutive residual blow-ups tolerated before giving up.
const MAX_DIVERGENT_STEPS: u32 = 3;

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)` and stops when
/// either the residual or the step falls below the tolerance.
///
/// The iteration fails early, instead of running to `max_iterations`, when:
/// - the derivative vanishes,
/// - the function or iterate becomes non-finite,
/// - the residual more than doubles on several consecutive steps.
///
/// # Example
///
/// ```rust
/// use fixedyield_math::solvers::{newton_raphson, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    let mut prev_residual = f64::INFINITY;
    let mut divergent_steps = 0;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::invalid_input(format!(
                "function is not finite at {x}"
            )));
        }

        let residual = fx.abs();
        if residual < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        if residual > prev_residual * 2.0 {
            divergent_steps += 1;
            if divergent_steps >= MAX_DIVERGENT_STEPS {
                return Err(MathError::invalid_input(format!(
                    "Newton-Raphson diverging at {x} (residual {residual:.2e})"
                )));
            }
        } else {
            divergent_steps = 0;
        }
        prev_residual = residual;

        let dfx = df(x);
        if !dfx.is_finite() || dfx.abs() < MIN_DERIVATIVE {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let step = fx / dfx;
        x -= step;

        if !x.is_finite() {
            return Err(MathError::invalid_input("Newton step produced a non-finite iterate"));
        }

        if step.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: f(x),
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}
