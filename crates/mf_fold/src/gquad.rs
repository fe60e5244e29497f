use mf_energy::Base;
use mf_energy::ScaledParams;
use mf_energy::INF;

use crate::TriIndex;

pub const GQUAD_MIN_STACK: usize = 2;
pub const GQUAD_MAX_STACK: usize = 7;
pub const GQUAD_MIN_LINKER: usize = 1;
pub const GQUAD_MAX_LINKER: usize = 15;
/// Two stacked quartets with three single-base linkers.
pub const GQUAD_MIN_SPAN: usize = 4 * GQUAD_MIN_STACK + 3 * GQUAD_MIN_LINKER;

/// Stability of an L-quartet stack with `ltot` linker bases in total:
/// `alpha * (L - 1) + beta * ln(ltot - 2)`.
pub fn gquad_energy(p: &ScaledParams, l_stack: usize, ltot: usize) -> i32 {
    debug_assert!(ltot >= 3);
    p.gquad_alpha * (l_stack as i32 - 1)
        + (p.gquad_beta as f64 * ((ltot - 2) as f64).ln()) as i32
}

/// Minimum energies of G-quadruplexes delimited exactly by (i, j), in the
/// shared triangular layout.
pub struct GquadMatrix {
    g: Vec<i32>,
    /// length of the maximal G run starting at each 1-based position
    runs: Vec<usize>,
}

impl GquadMatrix {
    pub fn fill(seq: &[Base], idx: &TriIndex, p: &ScaledParams) -> Self {
        let n = idx.n();
        let mut runs = vec![0usize; n + 2];
        for i in (1..=n).rev() {
            if seq[i] == Base::G {
                runs[i] = runs[i + 1] + 1;
            }
        }

        let mut g = vec![INF; idx.cells()];
        for i in 1..=n {
            for l_stack in GQUAD_MIN_STACK..=GQUAD_MAX_STACK {
                if runs[i] < l_stack {
                    continue;
                }
                for l1 in GQUAD_MIN_LINKER..=GQUAD_MAX_LINKER {
                    let p2 = i + l_stack + l1;
                    if p2 + 3 * l_stack + 2 > n + 1 || runs[p2] < l_stack {
                        continue;
                    }
                    for l2 in GQUAD_MIN_LINKER..=GQUAD_MAX_LINKER {
                        let p3 = p2 + l_stack + l2;
                        if p3 + 2 * l_stack + 1 > n + 1 || runs[p3] < l_stack {
                            continue;
                        }
                        for l3 in GQUAD_MIN_LINKER..=GQUAD_MAX_LINKER {
                            let p4 = p3 + l_stack + l3;
                            let j = p4 + l_stack - 1;
                            if j > n || runs[p4] < l_stack {
                                continue;
                            }
                            let e = gquad_energy(p, l_stack, l1 + l2 + l3);
                            let cell = &mut g[idx.at(i, j)];
                            if e < *cell {
                                *cell = e;
                            }
                        }
                    }
                }
            }
        }
        GquadMatrix { g, runs }
    }

    #[inline]
    pub fn at(&self, idx: &TriIndex, i: usize, j: usize) -> i32 {
        self.g[idx.at(i, j)]
    }

    /// Recover the first layout (stack size, linker lengths) realizing the
    /// stored minimum for (i, j), scanning in the fill order.
    pub fn pattern(&self, idx: &TriIndex, p: &ScaledParams, i: usize, j: usize) -> Option<(usize, [usize; 3])> {
        let target = self.g[idx.at(i, j)];
        if target >= INF {
            return None;
        }
        let span = j - i + 1;
        for l_stack in GQUAD_MIN_STACK..=GQUAD_MAX_STACK {
            if 4 * l_stack + 3 * GQUAD_MIN_LINKER > span || runs_short(&self.runs, i, l_stack) {
                continue;
            }
            for l1 in GQUAD_MIN_LINKER..=GQUAD_MAX_LINKER {
                let p2 = i + l_stack + l1;
                if runs_short(&self.runs, p2, l_stack) {
                    continue;
                }
                for l2 in GQUAD_MIN_LINKER..=GQUAD_MAX_LINKER {
                    let used = 4 * l_stack + l1 + l2;
                    if used + GQUAD_MIN_LINKER > span {
                        break;
                    }
                    let l3 = span - used;
                    if l3 > GQUAD_MAX_LINKER {
                        continue;
                    }
                    let p3 = p2 + l_stack + l2;
                    let p4 = p3 + l_stack + l3;
                    if runs_short(&self.runs, p3, l_stack) || runs_short(&self.runs, p4, l_stack) {
                        continue;
                    }
                    if gquad_energy(p, l_stack, l1 + l2 + l3) == target {
                        return Some((l_stack, [l1, l2, l3]));
                    }
                }
            }
        }
        None
    }
}

fn runs_short(runs: &[usize], at: usize, l_stack: usize) -> bool {
    at >= runs.len() || runs[at] < l_stack
}
