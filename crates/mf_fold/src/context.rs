use mf_energy::Base;
use mf_energy::PairType;
use mf_energy::ScaledParams;
use mf_energy::NucleotideVec;
use mf_energy::{INF, MIN_LOOP};
use mf_energy::{exterior_stem_energy, hairpin_energy, interior_energy, multibranch_stem_energy};
use mf_structure::DotBracketVec;
use mf_structure::PairList;

use crate::Constraints;
use crate::FoldError;
use crate::FoldOptions;
use crate::HardConstraints;
use crate::SoftConstraints;
use crate::TriIndex;
use crate::gquad::GquadMatrix;

/// Which circular closure realized `Fc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CircDecomp {
    Open,
    WrapHairpin(usize, usize),
    WrapInterior(usize, usize, usize, usize),
    WrapMulti(usize),
}

/// Everything mutable that belongs to one fold of one sequence.
///
/// The context owns the encoded sequence, the pair-type table, all DP
/// matrices and rotation buffers, and the backtracked pair list; the
/// parameter bundle is borrowed read-only. Dropping the context releases
/// all of it at once.
pub struct FoldContext<'a> {
    pub(crate) params: &'a ScaledParams,
    pub(crate) opts: FoldOptions,
    pub(crate) n: usize,
    pub(crate) circular: bool,

    /// 1-based encoding; index 0 and n+1 hold sentinels, which wrap around
    /// for circular folds.
    pub(crate) seq: Vec<Base>,
    pub(crate) idx: TriIndex,
    pub(crate) ptype: Vec<Option<PairType>>,

    pub(crate) c: Vec<i32>,
    pub(crate) fml: Vec<i32>,
    pub(crate) fm1: Vec<i32>,
    pub(crate) f5: Vec<i32>,

    // rotation buffers, live between row iterations
    pub(crate) cc: Vec<i32>,
    pub(crate) cc1: Vec<i32>,
    pub(crate) fmi: Vec<i32>,
    pub(crate) dmli: Vec<i32>,
    pub(crate) dmli1: Vec<i32>,
    pub(crate) dmli2: Vec<i32>,

    // circular closure
    pub(crate) fm2: Vec<i32>,
    pub(crate) fc: i32,
    pub(crate) fch: i32,
    pub(crate) fci: i32,
    pub(crate) fcm: i32,
    pub(crate) circ_decomp: CircDecomp,

    pub(crate) gq: Option<GquadMatrix>,

    pub(crate) hard: Option<HardConstraints>,
    pub(crate) soft: SoftConstraints,

    pub(crate) pairs: PairList,
}

/// Guarded energy addition: `INF` swallows everything.
#[inline]
pub(crate) fn esum(a: i32, b: i32) -> i32 {
    if a >= INF || b >= INF { INF } else { a + b }
}

#[inline]
pub(crate) fn esum3(a: i32, b: i32, c: i32) -> i32 {
    esum(esum(a, b), c)
}

impl<'a> FoldContext<'a> {
    pub fn new(
        sequence: &str,
        params: &'a ScaledParams,
        opts: FoldOptions,
        constraints: &Constraints,
        circular: bool,
    ) -> Result<Self, FoldError> {
        if sequence.is_empty() {
            return Err(FoldError::InvalidInput(mf_energy::SequenceError::Empty));
        }
        let bases = NucleotideVec::try_from(sequence)?;
        let n = bases.len();
        let idx = TriIndex::new(n)?;

        let mut seq = Vec::with_capacity(n + 2);
        seq.push(if circular { bases[n - 1] } else { Base::N });
        seq.extend(bases.iter().copied());
        seq.push(if circular { bases[0] } else { Base::N });

        let hard = constraints.hard.clone();
        let soft = constraints.soft.clone();

        let mut ptype = vec![None; idx.cells()];
        for j in (MIN_LOOP + 2)..=n {
            for i in 1..=(j - MIN_LOOP - 1) {
                let allowed = hard.as_ref().map_or(true, |h| h.pair_allowed(i, j));
                if allowed {
                    ptype[idx.at(i, j)] = PairType::of(seq[i], seq[j]);
                }
            }
        }

        let gq = opts.with_gquad.then(|| GquadMatrix::fill(&seq, &idx, params));

        let cells = idx.cells();
        Ok(FoldContext {
            params,
            opts,
            n,
            circular,
            seq,
            idx,
            ptype,
            c: vec![INF; cells],
            fml: vec![INF; cells],
            fm1: vec![INF; cells],
            f5: vec![0; n + 1],
            cc: vec![INF; n + 2],
            cc1: vec![INF; n + 2],
            fmi: vec![INF; n + 1],
            dmli: vec![INF; n + 1],
            dmli1: vec![INF; n + 1],
            dmli2: vec![INF; n + 1],
            fm2: if circular { vec![INF; n + 2] } else { Vec::new() },
            fc: INF,
            fch: INF,
            fci: INF,
            fcm: INF,
            circ_decomp: CircDecomp::Open,
            gq,
            hard,
            soft,
            pairs: PairList::new(),
        })
    }

    #[inline]
    pub(crate) fn s(&self, i: usize) -> Base {
        self.seq[i]
    }

    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> usize {
        self.idx.at(i, j)
    }

    #[inline]
    pub(crate) fn pair_type(&self, i: usize, j: usize) -> Option<PairType> {
        self.ptype[self.idx.at(i, j)]
    }

    #[inline]
    pub(crate) fn up_ok(&self, i: usize) -> bool {
        self.hard.as_ref().map_or(true, |h| h.unpaired_allowed(i))
    }

    #[inline]
    pub(crate) fn up_run_ok(&self, i: usize, len: usize) -> bool {
        len == 0 || self.hard.as_ref().map_or(true, |h| h.unpaired_run_allowed(i, len))
    }

    /// The final energy in centi-kcal/mol, `INF` when infeasible.
    pub fn energy(&self) -> i32 {
        if self.circular { self.fc } else { self.f5[self.n] }
    }

    /// Hairpin candidate for pair (i, j), soft terms included, closing-pair
    /// bonus excluded.
    pub(crate) fn e_hairpin(&self, i: usize, j: usize, ty: PairType) -> i32 {
        let size = j - i - 1;
        if !self.up_run_ok(i + 1, size) {
            return INF;
        }
        let e = hairpin_energy(
            self.params,
            size,
            ty,
            self.seq[i + 1],
            self.seq[j - 1],
            &self.seq[i..=j],
            self.opts.special_hairpins,
        );
        esum(e, self.soft.unpaired_run(i + 1, size))
    }

    /// Loop part of the stack/bulge/interior candidate closed by (i, j) with
    /// inner pair (p, q); the inner helix energy `c[p, q]` is not included.
    pub(crate) fn e_interior(
        &self,
        i: usize,
        j: usize,
        p: usize,
        q: usize,
        ty: PairType,
        tpq: PairType,
    ) -> i32 {
        let n1 = p - i - 1;
        let n2 = j - q - 1;
        if !self.up_run_ok(i + 1, n1) || !self.up_run_ok(q + 1, n2) {
            return INF;
        }
        let e = interior_energy(
            self.params,
            n1,
            n2,
            ty,
            tpq.reversed(),
            self.seq[i + 1],
            self.seq[j - 1],
            self.seq[p - 1],
            self.seq[q + 1],
        );
        esum3(e, self.soft.unpaired_run(i + 1, n1), self.soft.unpaired_run(q + 1, n2))
    }

    pub(crate) fn ext_stem(&self, ty: PairType, mm5: Option<Base>, mm3: Option<Base>) -> i32 {
        exterior_stem_energy(self.params, ty, mm5, mm3)
    }

    pub(crate) fn ml_stem(&self, ty: PairType, mm5: Option<Base>, mm3: Option<Base>) -> i32 {
        multibranch_stem_energy(self.params, ty, mm5, mm3)
    }

    /// Interior-loop style framing of a G-quadruplex enclosed by a pair,
    /// with `u1`/`u2` unpaired bases between quadruplex and helix.
    pub(crate) fn gquad_frame(&self, ty: PairType, u1: usize, u2: usize) -> i32 {
        if u1 + u2 < MIN_LOOP || (u1 == 0 && u2 < MIN_LOOP) || (u2 == 0 && u1 < MIN_LOOP) {
            return INF;
        }
        let mut e = self.params.interior[(u1 + u2).max(4)];
        if ty.is_weak() {
            e += self.params.terminal_au;
        }
        e
    }

    /// Move the finished fold out of the context.
    pub fn into_result(self) -> FoldResult {
        let energy = self.energy();
        let structure = self.pairs.to_dotbracket(self.n);
        FoldResult { energy, pairs: self.pairs, structure }
    }
}

/// A finished fold: integer energy, pair list, and rendered structure.
#[derive(Debug, Clone)]
pub struct FoldResult {
    pub energy: i32,
    pub pairs: PairList,
    pub structure: DotBracketVec,
}

impl FoldResult {
    /// Energy in kcal/mol; infeasible folds report infinity.
    pub fn energy_kcal(&self) -> f32 {
        if self.energy >= INF {
            f32::INFINITY
        } else {
            self.energy as f32 / 100.0
        }
    }

    /// Letter-coded rendering of the same structure.
    pub fn letters(&self) -> String {
        self.pairs.to_letters(self.structure.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(seq: &str, params: &'a ScaledParams) -> FoldContext<'a> {
        FoldContext::new(seq, params, FoldOptions::default(), &Constraints::default(), false).unwrap()
    }

    #[test]
    fn test_rejects_empty_and_invalid() {
        let p = ScaledParams::turner37();
        assert!(matches!(
            FoldContext::new("", &p, FoldOptions::default(), &Constraints::default(), false),
            Err(FoldError::InvalidInput(_))
        ));
        assert!(matches!(
            FoldContext::new("ACGB", &p, FoldOptions::default(), &Constraints::default(), false),
            Err(FoldError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_sentinels_linear_vs_circular() {
        let p = ScaledParams::turner37();
        let lin = ctx("GACU", &p);
        assert_eq!(lin.s(0), Base::N);
        assert_eq!(lin.s(5), Base::N);
        let circ =
            FoldContext::new("GACU", &p, FoldOptions::default(), &Constraints::default(), true).unwrap();
        assert_eq!(circ.s(0), Base::U);
        assert_eq!(circ.s(5), Base::G);
    }

    #[test]
    fn test_ptype_respects_min_loop() {
        let p = ScaledParams::turner37();
        let c = ctx("GAAACAAAC", &p);
        // (1, 5) encloses exactly MIN_LOOP unpaired bases
        assert_eq!(c.pair_type(1, 5), Some(PairType::GC));
        assert_eq!(c.pair_type(1, 9), Some(PairType::GC));
        assert_eq!(c.pair_type(2, 5), None); // too close
        assert_eq!(c.pair_type(5, 9), None); // C-C never pairs
    }

    #[test]
    fn test_esum_guards_inf() {
        assert_eq!(esum(INF, -100), INF);
        assert_eq!(esum(-100, INF), INF);
        assert_eq!(esum(-100, 40), -60);
        assert_eq!(esum3(INF, 0, 0), INF);
    }
}
