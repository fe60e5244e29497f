//! Loop energy primitives. All functions return centi-kcal/mol integers,
//! never allocate, and clamp to [`INF`] when a required table entry is
//! missing.

use crate::Base;
use crate::PairType;
use crate::ScaledParams;
use crate::{INF, MAX_LOOP, MIN_LOOP};

fn clamp(e: i32) -> i32 {
    if e >= INF { INF } else { e }
}

/// Energy of a hairpin loop with `size` unpaired bases, closed by a pair of
/// type `pt` with inner mismatch bases `mm5`/`mm3`.
///
/// `closed_seq` is the closing pair plus loop (`size + 2` bases) and is only
/// consulted for the special tri-/tetra-/hexaloop motifs when `special` is
/// set; a motif hit replaces the additive terms entirely.
pub fn hairpin_energy(
    p: &ScaledParams,
    size: usize,
    pt: PairType,
    mm5: Base,
    mm3: Base,
    closed_seq: &[Base],
    special: bool,
) -> i32 {
    if size < MIN_LOOP {
        return INF;
    }

    if special && matches!(size, 3 | 4 | 6) {
        debug_assert_eq!(closed_seq.len(), size + 2);
        if let Some(&e) = p.special_hairpins.get(closed_seq) {
            return e;
        }
    }

    let mut energy = if size <= MAX_LOOP {
        p.hairpin[size]
    } else {
        p.hairpin[MAX_LOOP] + (p.lxc * (size as f64 / MAX_LOOP as f64).ln()) as i32
    };
    if energy >= INF {
        return INF;
    }

    if size == 3 {
        // too small for a terminal mismatch; weak closings pay the AU penalty
        if pt.is_weak() {
            energy += p.terminal_au;
        }
    } else {
        energy += p.mismatch_hairpin[pt as usize][mm5 as usize][mm3 as usize];
    }

    clamp(energy)
}

/// Energy of a stack, bulge or interior loop with `n1` unpaired bases on the
/// 5' and `n2` on the 3' side.
///
/// `pt` is the outer closing pair read 5'->3', `pt2` the inner pair read
/// 3'->5' (i.e. already reversed). `mm_out5`/`mm_out3` neighbor the outer
/// pair inside the loop, `mm_in5`/`mm_in3` the inner pair.
pub fn interior_energy(
    p: &ScaledParams,
    n1: usize,
    n2: usize,
    pt: PairType,
    pt2: PairType,
    mm_out5: Base,
    mm_out3: Base,
    mm_in5: Base,
    mm_in3: Base,
) -> i32 {
    let (ns, nl) = if n1 <= n2 { (n1, n2) } else { (n2, n1) };
    let t = pt as usize;
    let t2 = pt2 as usize;

    if nl == 0 {
        return clamp(p.stack[t][t2]);
    }

    if ns == 0 {
        // bulge
        let mut energy = if nl <= MAX_LOOP {
            p.bulge[nl]
        } else {
            p.bulge[MAX_LOOP] + (p.lxc * (nl as f64 / MAX_LOOP as f64).ln()) as i32
        };
        if energy >= INF {
            return INF;
        }
        if nl == 1 {
            // a single bulged base leaves the helix stacked
            energy += p.stack[t][t2];
        } else {
            if pt.is_weak() {
                energy += p.terminal_au;
            }
            if pt2.is_weak() {
                energy += p.terminal_au;
            }
        }
        return clamp(energy);
    }

    if ns == 1 {
        if nl == 1 {
            return clamp(p.int11[t][t2][mm_out5 as usize][mm_out3 as usize]);
        }
        if nl == 2 {
            // orient so the longer side sits on the reverse stem
            let energy = if n1 == 1 {
                p.int21[t][t2][mm_out5 as usize][mm_in3 as usize][mm_out3 as usize]
            } else {
                p.int21[t2][t][mm_in3 as usize][mm_out5 as usize][mm_in5 as usize]
            };
            return clamp(energy);
        }
        // 1xn loop
        let mut energy = if nl + 1 <= MAX_LOOP {
            p.interior[nl + 1]
        } else {
            p.interior[MAX_LOOP] + (p.lxc * ((nl + 1) as f64 / MAX_LOOP as f64).ln()) as i32
        };
        if energy >= INF {
            return INF;
        }
        energy += p.max_ninio.min((nl - ns) as i32 * p.ninio);
        energy += p.mismatch_interior_1n[t][mm_out5 as usize][mm_out3 as usize]
            + p.mismatch_interior_1n[t2][mm_in3 as usize][mm_in5 as usize];
        return clamp(energy);
    }

    if ns == 2 {
        if nl == 2 {
            return clamp(p.int22[t][t2][mm_out5 as usize][mm_in5 as usize][mm_in3 as usize][mm_out3 as usize]);
        }
        if nl == 3 {
            let energy = p.interior[5]
                + p.ninio
                + p.mismatch_interior_23[t][mm_out5 as usize][mm_out3 as usize]
                + p.mismatch_interior_23[t2][mm_in3 as usize][mm_in5 as usize];
            return clamp(energy);
        }
    }

    // generic interior loop
    let mut energy = if n1 + n2 <= MAX_LOOP {
        p.interior[n1 + n2]
    } else {
        p.interior[MAX_LOOP] + (p.lxc * ((n1 + n2) as f64 / MAX_LOOP as f64).ln()) as i32
    };
    if energy >= INF {
        return INF;
    }
    energy += p.max_ninio.min((nl - ns) as i32 * p.ninio);
    energy += p.mismatch_interior[t][mm_out5 as usize][mm_out3 as usize]
        + p.mismatch_interior[t2][mm_in3 as usize][mm_in5 as usize];
    clamp(energy)
}

/// Stem contribution in the exterior loop: terminal mismatch when both
/// neighboring bases exist, a single dangle when one does.
pub fn exterior_stem_energy(p: &ScaledParams, pt: PairType, mm5: Option<Base>, mm3: Option<Base>) -> i32 {
    let t = pt as usize;
    let mut energy = match (mm5, mm3) {
        (Some(s5), Some(s3)) => p.mismatch_exterior[t][s5 as usize][s3 as usize],
        (Some(s5), None) => p.dangle5[t][s5 as usize],
        (None, Some(s3)) => p.dangle3[t][s3 as usize],
        (None, None) => 0,
    };
    if pt.is_weak() {
        energy += p.terminal_au;
    }
    clamp(energy)
}

/// Stem contribution inside a multibranch loop; like the exterior variant
/// but with the multiloop mismatch table plus the per-stem penalty.
pub fn multibranch_stem_energy(p: &ScaledParams, pt: PairType, mm5: Option<Base>, mm3: Option<Base>) -> i32 {
    let t = pt as usize;
    let mut energy = match (mm5, mm3) {
        (Some(s5), Some(s3)) => p.mismatch_multi[t][s5 as usize][s3 as usize],
        (Some(s5), None) => p.dangle5[t][s5 as usize],
        (None, Some(s3)) => p.dangle3[t][s3 as usize],
        (None, None) => 0,
    };
    if pt.is_weak() {
        energy += p.terminal_au;
    }
    clamp(energy + p.ml_intern)
}

/// Stem contribution of a G-quadruplex inside a multibranch loop: no pair
/// type, no mismatches, just the per-stem penalty.
pub fn multibranch_gquad_energy(p: &ScaledParams) -> i32 {
    p.ml_intern
}

/// Two coaxially stacked stems replace dangles with a helix stacking term;
/// neither stem pays the terminal AU penalty.
pub fn coaxial_energy(p: &ScaledParams, pt: PairType, pt2: PairType) -> i32 {
    clamp(p.stack[pt as usize][pt2 as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basify;
    use crate::Base::*;
    use crate::PairType::*;

    fn p37() -> ScaledParams {
        ScaledParams::turner37()
    }

    #[test]
    fn test_hairpin_triloops() {
        let p = p37();
        assert_eq!(hairpin_energy(&p, 3, GC, A, A, &basify("GAAAC"), true), 540);
        assert_eq!(hairpin_energy(&p, 3, CG, A, A, &basify("CAAAG"), true), 540);
        // weak closings pay the terminal AU penalty on top
        assert_eq!(hairpin_energy(&p, 3, AU, A, A, &basify("AAAAU"), true), 590);
        assert_eq!(hairpin_energy(&p, 3, GU, A, A, &basify("GAAAU"), true), 590);
        // tabulated triloop motif replaces everything
        assert_eq!(hairpin_energy(&p, 3, CG, A, A, &basify("CAACG"), true), 680);
        assert_eq!(hairpin_energy(&p, 3, CG, A, A, &basify("CAACG"), false), 540);
    }

    #[test]
    fn test_hairpin_tetraloops() {
        let p = p37();
        // generic size 4: initiation + terminal mismatch
        assert_eq!(hairpin_energy(&p, 4, GC, A, A, &basify("GAAAAC"), true), 450);
        assert_eq!(hairpin_energy(&p, 4, CG, A, A, &basify("CAAAAG"), true), 410);
        // tabulated tetraloop motifs
        assert_eq!(hairpin_energy(&p, 4, CG, C, G, &basify("CCGAGG"), true), 350);
        assert_eq!(hairpin_energy(&p, 4, CG, U, G, &basify("CUUCGG"), true), 370);
        // with motifs disabled, CUUCGG evaluates like any tetraloop
        assert_eq!(hairpin_energy(&p, 4, CG, U, G, &basify("CUUCGG"), false), 460);
    }

    #[test]
    fn test_hairpin_too_small() {
        let p = p37();
        assert_eq!(hairpin_energy(&p, 2, GC, A, A, &basify("GAAC"), true), INF);
        assert_eq!(hairpin_energy(&p, 0, GC, A, A, &basify("GC"), true), INF);
    }

    #[test]
    fn test_hairpin_log_extrapolation() {
        let p = p37();
        // size 40, all-A loop closed by G-C:
        // hairpin[30] + lxc * ln(40/30) + mismatch_hairpin[GC][A][A]
        // = 770 + 31 - 110
        let seq = basify(&format!("G{}C", "A".repeat(40)));
        assert_eq!(hairpin_energy(&p, 40, GC, A, A, &seq, true), 691);
    }

    #[test]
    fn test_stack_energies() {
        let p = p37();
        assert_eq!(interior_energy(&p, 0, 0, CG, CG, N, N, N, N), -240);
        assert_eq!(interior_energy(&p, 0, 0, GC, GC, N, N, N, N), -340);
        assert_eq!(interior_energy(&p, 0, 0, AU, UG, N, N, N, N), -60);
    }

    #[test]
    fn test_bulge_1_keeps_stack() {
        let p = p37();
        // bulge[1] + stack
        assert_eq!(interior_energy(&p, 1, 0, CG, CG, A, N, N, N), 380 - 240);
        assert_eq!(interior_energy(&p, 0, 1, CG, CG, N, A, N, N), 380 - 240);
        assert_eq!(interior_energy(&p, 1, 0, AU, AU, A, N, N, N), 380 - 110);
    }

    #[test]
    fn test_bulge_2_pays_terminal_au() {
        let p = p37();
        assert_eq!(interior_energy(&p, 2, 0, CG, CG, A, N, N, N), 280);
        assert_eq!(interior_energy(&p, 2, 0, AU, AU, A, N, N, N), 280 + 50 + 50);
        assert_eq!(interior_energy(&p, 2, 0, CG, GU, A, N, N, N), 280 + 50);
    }

    #[test]
    fn test_bulge_log_extrapolation() {
        let p = p37();
        // bulge[30] + lxc * ln(40/30) = 610 + 31
        assert_eq!(interior_energy(&p, 40, 0, CG, CG, A, N, N, N), 641);
    }

    #[test]
    fn test_int11_estimates() {
        let p = p37();
        assert_eq!(interior_energy(&p, 1, 1, CG, CG, A, A, A, A), 90);
        assert_eq!(interior_energy(&p, 1, 1, AU, AU, A, A, A, A), 190);
    }

    #[test]
    fn test_int21_orientation() {
        let p = p37();
        // both orientations hit the same estimated entry
        assert_eq!(interior_energy(&p, 1, 2, CG, CG, A, A, A, A), 230);
        assert_eq!(interior_energy(&p, 2, 1, CG, CG, A, A, A, A), 230);
    }

    #[test]
    fn test_1xn_loop() {
        let p = p37();
        // 1x4: interior[5] + min(max_ninio, 3 * ninio) + two 1n mismatches
        assert_eq!(interior_energy(&p, 1, 4, CG, CG, A, A, A, A), 200 + 180);
        // 1x8: interior[9] + capped ninio
        assert_eq!(interior_energy(&p, 1, 8, CG, CG, A, A, A, A), 240 + 300);
    }

    #[test]
    fn test_2x2_and_2x3_loops() {
        let p = p37();
        assert_eq!(interior_energy(&p, 2, 2, CG, CG, A, A, A, A), 150);
        assert_eq!(interior_energy(&p, 2, 3, CG, CG, A, A, A, A), 200 + 60);
    }

    #[test]
    fn test_generic_interior() {
        let p = p37();
        // 3x3: interior[6], no asymmetry, zero A-A mismatches
        assert_eq!(interior_energy(&p, 3, 3, CG, CG, A, A, A, A), 200);
        assert_eq!(interior_energy(&p, 3, 3, GC, GC, A, A, A, A), 200);
        // 3x5: interior[8] + 2 * ninio
        assert_eq!(interior_energy(&p, 3, 5, CG, CG, A, A, A, A), 230 + 120);
    }

    #[test]
    fn test_exterior_stem() {
        let p = p37();
        assert_eq!(exterior_stem_energy(&p, GC, None, None), 0);
        assert_eq!(exterior_stem_energy(&p, AU, None, None), 50);
        assert_eq!(exterior_stem_energy(&p, GC, Some(A), None), -50);
        assert_eq!(exterior_stem_energy(&p, GC, None, Some(U)), -60);
        assert_eq!(exterior_stem_energy(&p, GC, Some(A), Some(U)), -150);
        assert_eq!(exterior_stem_energy(&p, GC, Some(U), Some(U)), -70);
    }

    #[test]
    fn test_multibranch_stem() {
        let p = p37();
        assert_eq!(multibranch_stem_energy(&p, GC, None, None), -90);
        assert_eq!(multibranch_stem_energy(&p, AU, None, None), 50 - 90);
        assert_eq!(multibranch_stem_energy(&p, GC, Some(A), Some(A)), -110 - 90);
        assert_eq!(multibranch_gquad_energy(&p), -90);
    }

    #[test]
    fn test_coaxial_energy() {
        let p = p37();
        assert_eq!(coaxial_energy(&p, GC, GC), -340);
        assert_eq!(coaxial_energy(&p, CG, GC), -330);
    }
}
