//! Padded pressure buffer (`spec.md` §3, §4.2): length `N+2`, left ghost
//! mirrors `p[0]`, right ghost holds the Dirichlet outlet pressure. Lets
//! the 4-point Rhie–Chow stencil read indices `-1` and `N` without a
//! branch at either domain edge.

#[derive(Debug, Clone)]
pub struct PaddedPressure {
    buf: Vec<f64>,
}

impl PaddedPressure {
    pub fn new(n: usize) -> Self {
        Self {
            buf: vec![0.0; n + 2],
        }
    }

    /// Rebuild the buffer from the current `p` and the fixed outlet
    /// pressure (`spec.md` invariant 4).
    pub fn refresh(&mut self, p: &[f64], p_outlet: f64) {
        debug_assert_eq!(self.buf.len(), p.len() + 2);
        self.buf[0] = p[0];
        self.buf[1..=p.len()].copy_from_slice(p);
        *self.buf.last_mut().unwrap() = p_outlet;
    }

    /// Read the buffer at a *cell* index, where `-1` is the left ghost and
    /// `N` is the right ghost (buffer offset is `+1` relative to cell
    /// index).
    pub fn at(&self, cell_index: isize) -> f64 {
        self.buf[(cell_index + 1) as usize]
    }

    pub fn left_ghost(&self) -> f64 {
        self.buf[0]
    }

    pub fn right_ghost(&self) -> f64 {
        *self.buf.last().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghosts_match_spec_invariant_3() {
        let p = vec![1.0, 2.0, 3.0, 4.0];
        let mut buf = PaddedPressure::new(p.len());
        buf.refresh(&p, 42.0);
        assert_eq!(buf.at(-1), p[0]);
        assert_eq!(buf.at(0), p[0]);
        assert_eq!(buf.at(3), p[3]);
        assert_eq!(buf.at(4), 42.0);
        assert_eq!(buf.left_ghost(), p[0]);
        assert_eq!(buf.right_ghost(), 42.0);
    }
}
