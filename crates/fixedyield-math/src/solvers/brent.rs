//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent-Dekker root finding on a bracketing interval.
///
/// Keeps the root bracketed between `b` (best estimate) and `c` (contrapoint)
/// at every step, choosing between inverse quadratic interpolation, the
/// secant step and bisection.
///
/// Requires `f(lower)` and `f(upper)` to have opposite signs, or one of
/// them to be exactly zero. The bounds may be given in either order.
///
/// # Example
///
/// ```rust
/// use fixedyield_math::solvers::{brent, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
pub fn brent<F>(f: F, lower: f64, upper: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = lower;
    let mut b = upper;
    let mut fa = f(a);
    let mut fb = f(b);

    if !fa.is_finite() || !fb.is_finite() {
        return Err(MathError::invalid_input(format!(
            "function is not finite on bracket [{a}, {b}]"
        )));
    }

    if fa == 0.0 {
        return Ok(SolverResult {
            root: a,
            iterations: 0,
            residual: fa,
        });
    }
    if fb == 0.0 {
        return Ok(SolverResult {
            root: b,
            iterations: 0,
            residual: fb,
        });
    }

    if fa.signum() == fb.signum() {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for iteration in 1..=config.max_iterations {
        // Keep the root between b and c
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }

        // b is always the better estimate
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * config.tolerance;
        let midpoint = 0.5 * (c - b);

        if midpoint.abs() <= tol || fb.abs() < config.tolerance {
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                // Secant
                (2.0 * midpoint * s, 1.0 - s)
            } else {
                // Inverse quadratic interpolation
                let q0 = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * midpoint * q0 * (q0 - r) - (b - a) * (r - 1.0)),
                    (q0 - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };

            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let interpolation_bound = 3.0 * midpoint * q - (tol * q).abs();
            let previous_bound = (e * q).abs();

            if 2.0 * p < interpolation_bound.min(previous_bound) {
                e = d;
                d = p / q;
            } else {
                d = midpoint;
                e = d;
            }
        } else {
            d = midpoint;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol {
            d
        } else {
            tol.copysign(midpoint)
        };
        fb = f(b);

        if !fb.is_finite() {
            return Err(MathError::invalid_input(format!(
                "function is not finite at {b}"
            )));
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fb.abs(),
    ))
}
