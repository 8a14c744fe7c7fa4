//! Thomas algorithm for a diagonally-dominant tridiagonal linear system
//! (`spec.md` §4.1).

use crate::error::{SolverError, SolverResult};

/// Forward-elimination pivot magnitudes at or below this are treated as a
/// breakdown. `spec.md` §4.1 leaves the exact threshold to the
/// implementer ("rounds to zero"); `64 * f64::EPSILON` gives headroom
/// above the single-ULP noise floor without masking genuine breakdowns.
const BREAKDOWN_THRESHOLD: f64 = 64.0 * f64::EPSILON;

/// A pivot is a breakdown if it rounds to zero *or* is non-finite — an
/// infinite or NaN pivot is not "small" by `abs() <= THRESHOLD`, but it is
/// just as unusable and must not be solved through silently.
fn is_breakdown(pivot: f64) -> bool {
    !pivot.is_finite() || pivot.abs() <= BREAKDOWN_THRESHOLD
}

/// Reusable scratch space for repeated Thomas solves of the same size, so
/// per-step assembly sweeps (`spec.md` §5: "coefficient vectors are
/// either reallocated per sweep or reused across steps") do not allocate
/// on every call.
pub struct TridiagWorkspace {
    c_star: Vec<f64>,
    d_star: Vec<f64>,
}

impl TridiagWorkspace {
    pub fn new(n: usize) -> Self {
        Self {
            c_star: vec![0.0; n],
            d_star: vec![0.0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.c_star.len()
    }

    pub fn is_empty(&self) -> bool {
        self.c_star.is_empty()
    }

    /// Solve `a*x[i-1] + b*x[i] + c*x[i+1] = d[i]` for `x`, writing the
    /// result into `x` (which must be the same length as `a, b, c, d`).
    /// `a[0]` and `c[n-1]` are never read (there is no sub-diagonal entry
    /// for row 0 nor super-diagonal entry for the last row).
    pub fn solve(
        &mut self,
        a: &[f64],
        b: &[f64],
        c: &[f64],
        d: &[f64],
        x: &mut [f64],
    ) -> SolverResult<()> {
        let n = b.len();
        debug_assert_eq!(a.len(), n);
        debug_assert_eq!(c.len(), n);
        debug_assert_eq!(d.len(), n);
        debug_assert_eq!(x.len(), n);
        if self.c_star.len() != n {
            self.c_star.resize(n, 0.0);
            self.d_star.resize(n, 0.0);
        }

        let pivot0 = b[0];
        if is_breakdown(pivot0) {
            return Err(SolverError::NumericalBreakdown {
                row: 0,
                pivot: pivot0,
            });
        }
        self.c_star[0] = c[0] / pivot0;
        self.d_star[0] = d[0] / pivot0;

        for i in 1..n {
            let m = b[i] - a[i] * self.c_star[i - 1];
            if is_breakdown(m) {
                return Err(SolverError::NumericalBreakdown { row: i, pivot: m });
            }
            self.c_star[i] = c[i] / m;
            self.d_star[i] = (d[i] - a[i] * self.d_star[i - 1]) / m;
        }

        x[n - 1] = self.d_star[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = self.d_star[i] - self.c_star[i] * x[i + 1];
        }
        Ok(())
    }
}

/// Convenience entry point that allocates its own workspace. Prefer
/// [`TridiagWorkspace::solve`] inside a hot loop.
pub fn thomas(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> SolverResult<Vec<f64>> {
    let mut x = vec![0.0; b.len()];
    TridiagWorkspace::new(b.len()).solve(a, b, c, d, &mut x)?;
    Ok(x)
}
