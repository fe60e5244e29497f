//! Re-evaluate a finished structure loop by loop, independently of the DP
//! matrices. Fill, backtrack and this evaluator share the same primitives,
//! so the reported minimum must equal the evaluated sum exactly.

use mf_energy::Base;
use mf_energy::PairType;
use mf_energy::ScaledParams;
use mf_energy::{exterior_stem_energy, hairpin_energy, interior_energy, multibranch_stem_energy};
use mf_structure::PairTable;

use crate::Dangles;

/// Energy of `structure` over `sequence` (0-based), in centi-kcal/mol.
///
/// Dangle models 1 and 3 assign dangles per decomposition during the fill,
/// which a bare pair table cannot reproduce; only models 0 and 2 are
/// supported here.
pub fn energy_of_structure(
    sequence: &[Base],
    structure: &PairTable,
    params: &ScaledParams,
    dangles: Dangles,
    special_hairpins: bool,
) -> i32 {
    assert!(
        matches!(dangles, Dangles::None | Dangles::Both),
        "structure evaluation supports dangle models 0 and 2"
    );
    assert_eq!(sequence.len(), structure.len());

    let eval = Evaluator { seq: sequence, pt: structure, params, dangles, special_hairpins };
    let mut total = 0;
    eval.walk(None, &mut total);
    total
}

struct Evaluator<'a> {
    seq: &'a [Base],
    pt: &'a PairTable,
    params: &'a ScaledParams,
    dangles: Dangles,
    special_hairpins: bool,
}

impl<'a> Evaluator<'a> {
    fn pair(&self, i: usize, j: usize) -> PairType {
        PairType::of(self.seq[i], self.seq[j]).unwrap_or(PairType::NS)
    }

    fn walk(&self, closing: Option<(usize, usize)>, total: &mut i32) {
        let mut branches = Vec::new();
        let (mut p, end) = match closing {
            Some((i, j)) => (i + 1, j),
            None => (0, self.pt.len()),
        };
        while p < end {
            if let Some(q) = self.pt[p] {
                assert!(q > p, "pair table must be non-crossing here");
                branches.push((p, q));
                self.walk(Some((p, q)), total);
                p = q + 1;
            } else {
                p += 1;
            }
        }
        *total += self.loop_energy(closing, &branches);
    }

    fn loop_energy(&self, closing: Option<(usize, usize)>, branches: &[(usize, usize)]) -> i32 {
        let n = self.seq.len();
        let both = self.dangles == Dangles::Both;

        match (closing, branches.len()) {
            (None, _) => branches
                .iter()
                .map(|&(a, b)| {
                    let mm5 = (both && a > 0).then(|| self.seq[a - 1]);
                    let mm3 = (both && b + 1 < n).then(|| self.seq[b + 1]);
                    exterior_stem_energy(self.params, self.pair(a, b), mm5, mm3)
                })
                .sum(),

            (Some((i, j)), 0) => hairpin_energy(
                self.params,
                j - i - 1,
                self.pair(i, j),
                self.seq[i + 1],
                self.seq[j - 1],
                &self.seq[i..=j],
                self.special_hairpins,
            ),

            (Some((i, j)), 1) => {
                let (p, q) = branches[0];
                interior_energy(
                    self.params,
                    p - i - 1,
                    j - q - 1,
                    self.pair(i, j),
                    self.pair(q, p),
                    self.seq[i + 1],
                    self.seq[j - 1],
                    self.seq[p - 1],
                    self.seq[q + 1],
                )
            }

            (Some((i, j)), _) => {
                let closing_mm5 = both.then(|| self.seq[j - 1]);
                let closing_mm3 = both.then(|| self.seq[i + 1]);
                let mut e = self.params.ml_closing
                    + multibranch_stem_energy(
                        self.params,
                        self.pair(j, i),
                        closing_mm5,
                        closing_mm3,
                    );
                let mut unpaired = j - i - 1;
                for &(a, b) in branches {
                    unpaired -= b - a + 1;
                    let mm5 = both.then(|| self.seq[a - 1]);
                    let mm3 = both.then(|| self.seq[b + 1]);
                    e += multibranch_stem_energy(self.params, self.pair(a, b), mm5, mm3);
                }
                e + self.params.ml_base * unpaired as i32
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_energy::basify;

    fn eval(seq: &str, db: &str, dangles: Dangles) -> i32 {
        let p = ScaledParams::turner37();
        let pt = PairTable::try_from(db).unwrap();
        energy_of_structure(&basify(seq), &pt, &p, dangles, true)
    }

    #[test]
    fn test_open_chain_is_zero() {
        assert_eq!(eval("AAAA", "....", Dangles::Both), 0);
        assert_eq!(eval("GCGCGCGC", "........", Dangles::None), 0);
    }

    #[test]
    fn test_single_hairpin() {
        // G-C closed triloop, no exterior dangles possible
        assert_eq!(eval("GAAAC", "(...)", Dangles::Both), 540);
        // helix of three stacks under it
        assert_eq!(eval("GGGGAAAACCCC", "((((....))))", Dangles::Both), -990 + 450);
    }

    #[test]
    fn test_exterior_dangles() {
        // 5' neighbor A and 3' neighbor U of a G-C stem
        let e = eval("AGAAACU", ".(...).", Dangles::Both);
        assert_eq!(e, 540 - 150);
        // model 0 drops the mismatch term
        assert_eq!(eval("AGAAACU", ".(...).", Dangles::None), 540);
    }

    #[test]
    fn test_interior_loop() {
        let e = eval("CACAAAGAG", "(.(...).)", Dangles::Both);
        // hairpin CAAAG (540) + 1x1 loop between two C-G closings (90)
        assert_eq!(e, 540 + 90);

        let e = eval("CCAAAGG", "((...))", Dangles::Both);
        // hairpin CAAAG (540) stacked under C-G (-330)
        assert_eq!(e, 540 - 330);
    }

    #[test]
    fn test_multibranch_loop() {
        // closing G-C pair around two G-C hairpin stems
        let seq = "GAGAAACAGAAACAC";
        let db = "(.(...).(...).)";
        let e = eval(seq, db, Dangles::None);
        // two triloop hairpins + ML closing + 3 stems + 3 unpaired bases
        let p = ScaledParams::turner37();
        let expected = 540 + 540 + p.ml_closing + 3 * p.ml_intern + 3 * p.ml_base;
        assert_eq!(e, expected);
    }
}
