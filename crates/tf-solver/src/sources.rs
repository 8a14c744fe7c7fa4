//! Mass, momentum, and energy source/sink fields, fixed per run by the
//! zoning rule in `spec.md` §3: the first fraction `f_src` of interior
//! cells receive `+Q`, the last fraction `f_snk` receive `-Q`. Cells 0 and
//! N-1 carry boundary conditions, never sources.

#[derive(Debug, Clone)]
pub struct SourceFields {
    /// Mass source, kg/(m^3 s).
    pub sm: Vec<f64>,
    /// Momentum source, same units as a body force per unit volume.
    pub su: Vec<f64>,
    /// Volumetric energy source, W/m^3.
    pub st: Vec<f64>,
}

impl SourceFields {
    pub fn zeros(n: usize) -> Self {
        Self {
            sm: vec![0.0; n],
            su: vec![0.0; n],
            st: vec![0.0; n],
        }
    }

    /// Build zoned mass/energy sources per `spec.md` §3's fraction rule.
    /// `n` is the total cell count; interior cells are `1..=n-2`.
    pub fn zoned(n: usize, f_src: f64, f_snk: f64, sm_magnitude: f64, st_magnitude: f64) -> Self {
        let mut out = Self::zeros(n);
        let interior_count = n.saturating_sub(2);
        let n_src = (f_src * interior_count as f64).floor() as usize;
        let n_snk = (f_snk * interior_count as f64).floor() as usize;

        for i in 1..(1 + n_src).min(n - 1) {
            out.sm[i] = sm_magnitude;
            out.st[i] = st_magnitude;
        }
        let snk_start = (n - 1).saturating_sub(n_snk).max(1);
        for i in snk_start..n - 1 {
            out.sm[i] = -sm_magnitude;
            out.st[i] = -st_magnitude;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_cells_never_carry_a_source() {
        let s = SourceFields::zoned(100, 0.2, 0.2, 0.1, 5.0e5);
        assert_eq!(s.sm[0], 0.0);
        assert_eq!(s.sm[99], 0.0);
        assert_eq!(s.st[0], 0.0);
        assert_eq!(s.st[99], 0.0);
    }

    #[test]
    fn source_and_sink_zones_do_not_overlap() {
        let s = SourceFields::zoned(100, 0.2, 0.2, 0.1, 5.0e5);
        let positive: Vec<usize> = (0..100).filter(|&i| s.sm[i] > 0.0).collect();
        let negative: Vec<usize> = (0..100).filter(|&i| s.sm[i] < 0.0).collect();
        assert!(positive.iter().max().unwrap() < negative.iter().min().unwrap());
    }
}
