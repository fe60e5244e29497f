//! Matrix fill. The outer loop walks i from `n - MIN_LOOP - 1` down to 1,
//! the inner loop walks j upward; after each row the rotation buffers
//! shift by one. Backtracking re-evaluates the same candidates through the
//! shared helpers below, so the two stages can never disagree.

use mf_energy::PairType;
use mf_energy::{coaxial_energy, multibranch_gquad_energy};
use mf_energy::{INF, MAX_LOOP, MIN_LOOP};

use crate::context::{esum, esum3, FoldContext};
use crate::Dangles;

/// A candidate stem inside a multibranch loop: total energy (helix, stem
/// terms, shifted-base penalties and soft terms) plus the pair it emits.
pub(crate) type StemCandidate = (i32, usize, usize);

impl<'a> FoldContext<'a> {
    /// Fill `c`, `fml`, `fm1` and `f5`; for circular contexts the wrap
    /// closure runs on top. Aborting callers may drop the context at any
    /// row boundary.
    pub fn fill(&mut self) {
        if self.n > MIN_LOOP + 1 {
            self.fill_pair_matrices();
        }
        self.fill_f5();
        if self.circular {
            self.fill_circular();
        }
    }

    fn fill_pair_matrices(&mut self) {
        let n = self.n;

        for i in (1..=(n - MIN_LOOP - 1)).rev() {
            for j in (i + MIN_LOOP + 1)..=n {
                self.fill_c(i, j);
                self.fill_fml(i, j);
                self.fill_fm1(i, j);
            }
            self.rotate_buffers();
        }
    }

    fn rotate_buffers(&mut self) {
        std::mem::swap(&mut self.dmli2, &mut self.dmli1);
        std::mem::swap(&mut self.dmli1, &mut self.dmli);
        std::mem::swap(&mut self.cc1, &mut self.cc);
        self.dmli.fill(INF);
        self.cc.fill(INF);
        self.fmi.fill(INF);
    }

    fn fill_c(&mut self, i: usize, j: usize) {
        let ij = self.at(i, j);
        let ty = match self.pair_type(i, j) {
            Some(t) => t,
            None => {
                self.c[ij] = INF;
                if self.opts.no_lonely_pairs {
                    self.cc[j] = INF;
                }
                return;
            }
        };

        let no_close = self.opts.no_gu_closure && ty.is_wobble();
        let mut new_c = INF;

        if !no_close {
            new_c = new_c.min(self.e_hairpin(i, j, ty));
        }

        // stack, bulge and interior loops
        let pmax = (j - 2 - MIN_LOOP).min(i + MAX_LOOP + 1);
        for p in (i + 1)..=pmax {
            let qmin = (p + 1 + MIN_LOOP).max((j + p).saturating_sub(i + MAX_LOOP + 2));
            for q in (qmin..=(j - 1)).rev() {
                let tpq = match self.pair_type(p, q) {
                    Some(t) => t,
                    None => continue,
                };
                if self.opts.no_gu_closure
                    && (no_close || tpq.is_wobble())
                    && !(p == i + 1 && q == j - 1)
                {
                    continue;
                }
                let e = self.e_interior(i, j, p, q, ty, tpq);
                new_c = new_c.min(esum(e, self.c[self.at(p, q)]));
            }
        }

        if !no_close {
            new_c = new_c.min(self.e_ml_closing(i, j, ty));
            if self.gq.is_some() {
                new_c = new_c.min(self.e_gquad_enclosed(i, j, ty));
            }
        }

        let bonus = self.soft.pair(i, j);
        new_c = esum(new_c, bonus);

        if self.opts.no_lonely_pairs {
            // shadow cell: the stored C forces (i, j) onto a closing stack,
            // the cc row keeps the unconstrained value for the row above
            let stack_energy = match self.pair_type(i + 1, j - 1) {
                Some(t2) => self.params.stack[ty as usize][t2.reversed() as usize],
                None => INF,
            };
            let forced = esum3(self.cc1[j - 1], stack_energy, bonus);
            self.cc[j] = new_c.min(forced);
            self.c[ij] = forced;
        } else {
            self.c[ij] = new_c;
        }
    }

    /// Multibranch closing candidate for `c[i, j]`: the loop below (i, j)
    /// decomposed through the rotation buffers of the inner rows.
    fn e_ml_closing(&self, i: usize, j: usize, ty: PairType) -> i32 {
        let p = self.params;
        let tt = ty.reversed();
        let mut e = INF;

        match self.opts.dangles {
            Dangles::None => {
                e = esum(self.dmli1[j - 1], self.ml_stem(tt, None, None));
            }
            Dangles::Both => {
                e = esum(
                    self.dmli1[j - 1],
                    self.ml_stem(tt, Some(self.s(j - 1)), Some(self.s(i + 1))),
                );
            }
            Dangles::Split | Dangles::Coaxial => {
                e = esum(self.dmli1[j - 1], self.ml_stem(tt, None, None));
                if self.up_ok(i + 1) {
                    e = e.min(esum3(
                        self.dmli2[j - 1],
                        self.ml_stem(tt, None, Some(self.s(i + 1))),
                        esum(p.ml_base, self.soft.unpaired_at(i + 1)),
                    ));
                }
                if self.up_ok(j - 1) {
                    e = e.min(esum3(
                        self.dmli1[j - 2],
                        self.ml_stem(tt, Some(self.s(j - 1)), None),
                        esum(p.ml_base, self.soft.unpaired_at(j - 1)),
                    ));
                }
                if self.up_ok(i + 1) && self.up_ok(j - 1) {
                    e = e.min(esum3(
                        self.dmli2[j - 2],
                        self.ml_stem(tt, Some(self.s(j - 1)), Some(self.s(i + 1))),
                        esum3(2 * p.ml_base, self.soft.unpaired_at(i + 1), self.soft.unpaired_at(j - 1)),
                    ));
                }
                if self.opts.dangles == Dangles::Coaxial {
                    e = e.min(self.ml_closing_coax(i, j, ty));
                }
            }
        }
        esum(e, p.ml_closing)
    }

    /// Coaxial stack of the closing pair with its first or last inner stem.
    /// Both stems take the plain internal penalty; no terminal AU.
    pub(crate) fn ml_closing_coax(&self, i: usize, j: usize, ty: PairType) -> i32 {
        let p = self.params;
        let mut e = INF;
        if j < i + 2 * MIN_LOOP + 5 {
            return INF;
        }
        for k in (i + MIN_LOOP + 2)..=(j - MIN_LOOP - 3) {
            if let Some(t2) = self.pair_type(i + 1, k) {
                e = e.min(esum3(
                    self.c[self.at(i + 1, k)],
                    coaxial_energy(p, ty, t2.reversed()),
                    self.fml[self.at(k + 1, j - 1)],
                ));
            }
            if let Some(t2) = self.pair_type(k + 1, j - 1) {
                e = e.min(esum3(
                    self.c[self.at(k + 1, j - 1)],
                    coaxial_energy(p, ty, t2.reversed()),
                    self.fml[self.at(i + 1, k)],
                ));
            }
        }
        esum(e, 2 * p.ml_intern)
    }

    /// G-quadruplex enclosed by pair (i, j) with interior-loop framing.
    pub(crate) fn e_gquad_enclosed(&self, i: usize, j: usize, ty: PairType) -> i32 {
        let gq = match &self.gq {
            Some(gq) => gq,
            None => return INF,
        };
        let mut best = INF;
        for p in (i + 1)..j {
            let u1 = p - i - 1;
            if u1 > MAX_LOOP {
                break;
            }
            if !self.up_run_ok(i + 1, u1) {
                break;
            }
            for q in ((p + crate::gquad::GQUAD_MIN_SPAN - 1)..j).rev() {
                let u2 = j - q - 1;
                if u1 + u2 > MAX_LOOP || !self.up_run_ok(q + 1, u2) {
                    continue;
                }
                let frame = self.gquad_frame(ty, u1, u2);
                let cand = esum3(
                    gq.at(&self.idx, p, q),
                    frame,
                    esum(self.soft.unpaired_run(i + 1, u1), self.soft.unpaired_run(q + 1, u2)),
                );
                best = best.min(cand);
            }
        }
        best
    }

    /// The per-model single-stem candidates shared by `fml` and `fm1`.
    /// Each entry carries the full candidate energy and the pair to emit.
    pub(crate) fn ml_stem_candidates(&self, i: usize, j: usize, out: &mut [StemCandidate; 4]) -> usize {
        let p = self.params;
        let mut count = 0;

        match self.opts.dangles {
            Dangles::None => {
                if let Some(ty) = self.pair_type(i, j) {
                    out[count] = (esum(self.c[self.at(i, j)], self.ml_stem(ty, None, None)), i, j);
                    count += 1;
                }
            }
            Dangles::Both => {
                if let Some(ty) = self.pair_type(i, j) {
                    let e = self.ml_stem(ty, Some(self.s(i - 1)), Some(self.s(j + 1)));
                    out[count] = (esum(self.c[self.at(i, j)], e), i, j);
                    count += 1;
                }
            }
            Dangles::Split | Dangles::Coaxial => {
                if let Some(ty) = self.pair_type(i, j) {
                    out[count] = (esum(self.c[self.at(i, j)], self.ml_stem(ty, None, None)), i, j);
                    count += 1;
                }
                if i + 1 < j && self.up_ok(i) {
                    if let Some(ty) = self.pair_type(i + 1, j) {
                        let e = esum3(
                            self.c[self.at(i + 1, j)],
                            self.ml_stem(ty, Some(self.s(i)), None),
                            esum(p.ml_base, self.soft.unpaired_at(i)),
                        );
                        out[count] = (e, i + 1, j);
                        count += 1;
                    }
                }
                if i < j - 1 && self.up_ok(j) {
                    if let Some(ty) = self.pair_type(i, j - 1) {
                        let e = esum3(
                            self.c[self.at(i, j - 1)],
                            self.ml_stem(ty, None, Some(self.s(j))),
                            esum(p.ml_base, self.soft.unpaired_at(j)),
                        );
                        out[count] = (e, i, j - 1);
                        count += 1;
                    }
                }
                if i + 1 < j - 1 && self.up_ok(i) && self.up_ok(j) {
                    if let Some(ty) = self.pair_type(i + 1, j - 1) {
                        let e = esum3(
                            self.c[self.at(i + 1, j - 1)],
                            self.ml_stem(ty, Some(self.s(i)), Some(self.s(j))),
                            esum3(2 * p.ml_base, self.soft.unpaired_at(i), self.soft.unpaired_at(j)),
                        );
                        out[count] = (e, i + 1, j - 1);
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Coaxial split of a multibranch segment into two directly adjacent
    /// stems (dangle model 3 only).
    pub(crate) fn ml_coax_split(&self, i: usize, j: usize, k: usize) -> i32 {
        let p = self.params;
        match (self.pair_type(i, k), self.pair_type(k + 1, j)) {
            (Some(t1), Some(t2)) => esum3(
                esum(self.c[self.at(i, k)], self.c[self.at(k + 1, j)]),
                coaxial_energy(p, t1.reversed(), t2.reversed()),
                2 * p.ml_intern,
            ),
            _ => INF,
        }
    }

    fn fill_fml(&mut self, i: usize, j: usize) {
        let ij = self.at(i, j);
        let p = self.params;
        let mut new_fml = INF;

        if self.up_ok(i) {
            new_fml = esum3(
                self.fml[self.at(i + 1, j)],
                p.ml_base,
                self.soft.unpaired_at(i),
            );
        }
        if self.up_ok(j) {
            new_fml = new_fml.min(esum3(
                self.fml[self.at(i, j - 1)],
                p.ml_base,
                self.soft.unpaired_at(j),
            ));
        }

        let mut stems = [(INF, 0, 0); 4];
        let count = self.ml_stem_candidates(i, j, &mut stems);
        for &(e, _, _) in &stems[..count] {
            new_fml = new_fml.min(e);
        }

        if let Some(gq) = &self.gq {
            new_fml = new_fml.min(esum(gq.at(&self.idx, i, j), multibranch_gquad_energy(p)));
        }

        // modular decomposition: left segment rows live in fmi, the
        // rightmost stem comes from fm1
        let mut decomp = INF;
        if j >= i + 2 * (MIN_LOOP + 1) + 1 {
            for k in (i + MIN_LOOP + 1)..=(j - MIN_LOOP - 2) {
                decomp = decomp.min(esum(self.fmi[k], self.fm1[self.at(k + 1, j)]));
            }
        }
        self.dmli[j] = decomp;
        new_fml = new_fml.min(decomp);

        if self.opts.dangles == Dangles::Coaxial && j >= i + 2 * (MIN_LOOP + 1) + 1 {
            for k in (i + MIN_LOOP + 1)..=(j - MIN_LOOP - 2) {
                new_fml = new_fml.min(self.ml_coax_split(i, j, k));
            }
        }

        self.fml[ij] = new_fml;
        self.fmi[j] = new_fml;
    }

    fn fill_fm1(&mut self, i: usize, j: usize) {
        let ij = self.at(i, j);
        let mut v = INF;
        if j > i && self.up_ok(j) {
            v = esum3(
                self.fm1[self.at(i, j - 1)],
                self.params.ml_base,
                self.soft.unpaired_at(j),
            );
        }
        let mut stems = [(INF, 0, 0); 4];
        let count = self.ml_stem_candidates(i, j, &mut stems);
        for &(e, _, _) in &stems[..count] {
            v = v.min(e);
        }
        self.fm1[ij] = v;
    }

    /// Per-model candidates for an exterior stem whose decomposition ends
    /// at `j`, anchored at `k`. Entries carry (stem energy incl. helix and
    /// soft terms, f5 prefix index, emitted pair).
    pub(crate) fn f5_stem_candidates(
        &self,
        j: usize,
        k: usize,
        out: &mut [(i32, usize, usize, usize); 4],
    ) -> usize {
        let n = self.n;
        let mut count = 0;

        match self.opts.dangles {
            Dangles::None => {
                if let Some(ty) = self.pair_type(k, j) {
                    let e = esum(self.c[self.at(k, j)], self.ext_stem(ty, None, None));
                    out[count] = (e, k - 1, k, j);
                    count += 1;
                }
            }
            Dangles::Both => {
                if let Some(ty) = self.pair_type(k, j) {
                    let mm5 = (k > 1).then(|| self.s(k - 1));
                    let mm3 = (j < n).then(|| self.s(j + 1));
                    let e = esum(self.c[self.at(k, j)], self.ext_stem(ty, mm5, mm3));
                    out[count] = (e, k - 1, k, j);
                    count += 1;
                }
            }
            Dangles::Split | Dangles::Coaxial => {
                if let Some(ty) = self.pair_type(k, j) {
                    let e = esum(self.c[self.at(k, j)], self.ext_stem(ty, None, None));
                    out[count] = (e, k - 1, k, j);
                    count += 1;
                    if k > 1 && self.up_ok(k - 1) {
                        let e = esum3(
                            self.c[self.at(k, j)],
                            self.ext_stem(ty, Some(self.s(k - 1)), None),
                            self.soft.unpaired_at(k - 1),
                        );
                        out[count] = (e, k - 2, k, j);
                        count += 1;
                    }
                }
                if self.up_ok(j) && k < j - 1 {
                    if let Some(ty) = self.pair_type(k, j - 1) {
                        let e = esum3(
                            self.c[self.at(k, j - 1)],
                            self.ext_stem(ty, None, Some(self.s(j))),
                            self.soft.unpaired_at(j),
                        );
                        out[count] = (e, k - 1, k, j - 1);
                        count += 1;
                        if k > 1 && self.up_ok(k - 1) {
                            let e = esum3(
                                self.c[self.at(k, j - 1)],
                                self.ext_stem(ty, Some(self.s(k - 1)), Some(self.s(j))),
                                esum(self.soft.unpaired_at(k - 1), self.soft.unpaired_at(j)),
                            );
                            out[count] = (e, k - 2, k, j - 1);
                            count += 1;
                        }
                    }
                }
            }
        }
        count
    }

    /// Exterior coaxial stack: stems (h, k-1) and (k, j) abut directly.
    pub(crate) fn f5_coax(&self, h: usize, k: usize, j: usize) -> i32 {
        let p = self.params;
        match (self.pair_type(h, k - 1), self.pair_type(k, j)) {
            (Some(t1), Some(t2)) => esum3(
                self.c[self.at(h, k - 1)],
                self.c[self.at(k, j)],
                coaxial_energy(p, t1.reversed(), t2.reversed()),
            ),
            _ => INF,
        }
    }

    fn fill_f5(&mut self) {
        let n = self.n;
        self.f5[0] = 0;
        for j in 1..=MIN_LOOP.min(n) {
            self.f5[j] = if self.up_ok(j) {
                esum(self.f5[j - 1], self.soft.unpaired_at(j))
            } else {
                INF
            };
        }

        for j in (MIN_LOOP + 1)..=n {
            let mut best = if self.up_ok(j) {
                esum(self.f5[j - 1], self.soft.unpaired_at(j))
            } else {
                INF
            };

            let mut stems = [(INF, 0, 0, 0); 4];
            for k in 1..=(j - MIN_LOOP - 1) {
                if let Some(gq) = &self.gq {
                    best = best.min(esum(self.f5[k - 1], gq.at(&self.idx, k, j)));
                }
                let count = self.f5_stem_candidates(j, k, &mut stems);
                for &(e, prefix, _, _) in &stems[..count] {
                    best = best.min(esum(self.f5[prefix], e));
                }
                if self.opts.dangles == Dangles::Coaxial && k > MIN_LOOP + 2 {
                    for h in 1..=(k - MIN_LOOP - 2) {
                        best = best.min(esum(self.f5[h - 1], self.f5_coax(h, k, j)));
                    }
                }
            }
            self.f5[j] = best;
        }
    }
}
