//! Structure recovery. Each sector re-evaluates the recursion that filled
//! its matrix and takes the first decomposition reproducing the stored
//! value; the scan orders below are fixed so results are deterministic.

use mf_energy::{coaxial_energy, multibranch_gquad_energy};
use mf_energy::{INF, MIN_LOOP};

use crate::context::{esum, esum3, CircDecomp, FoldContext};
use crate::Dangles;
use crate::FoldError;

/// Which matrix a sector on the backtracking stack refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorKind {
    /// exterior prefix `f5[1..j]`
    F5,
    /// substructure closed by the pair (i, j)
    C,
    /// multibranch segment with at least one stem
    Ml,
    /// multibranch segment whose single stem starts at i
    Ml1,
    /// G-quadruplex delimited by (i, j)
    Gq,
}

type Sector = (usize, usize, SectorKind);

impl<'a> FoldContext<'a> {
    /// Recover one optimal pair list from the filled matrices.
    pub fn backtrack(&mut self) -> Result<(), FoldError> {
        let n = self.n;
        let mut stack: Vec<Sector> = Vec::with_capacity(16);

        if self.circular {
            if self.fc >= INF {
                return Ok(()); // infeasible: empty structure
            }
            match self.circ_decomp {
                CircDecomp::Open => return Ok(()),
                CircDecomp::WrapHairpin(i, j) => stack.push((i, j, SectorKind::C)),
                CircDecomp::WrapInterior(i, j, p, q) => {
                    stack.push((i, j, SectorKind::C));
                    stack.push((p, q, SectorKind::C));
                }
                CircDecomp::WrapMulti(i) => {
                    // split fm2[i + 1] back into its two multibranch parts
                    let mut split = None;
                    for u in (i + 1 + MIN_LOOP)..(n - MIN_LOOP) {
                        if self.fm2[i + 1]
                            == esum(self.fml[self.at(i + 1, u)], self.fml[self.at(u + 1, n)])
                        {
                            split = Some(u);
                            break;
                        }
                    }
                    let u = split.ok_or(FoldError::BacktrackInconsistent {
                        i: i + 1,
                        j: n,
                        kind: SectorKind::Ml,
                        expected: self.fm2[i + 1],
                    })?;
                    stack.push((1, i, SectorKind::Ml));
                    stack.push((i + 1, u, SectorKind::Ml));
                    stack.push((u + 1, n, SectorKind::Ml));
                }
            }
        } else {
            if self.f5[n] >= INF {
                return Ok(());
            }
            stack.push((1, n, SectorKind::F5));
        }

        while let Some((i, j, kind)) = stack.pop() {
            match kind {
                SectorKind::F5 => self.trace_f5(j, &mut stack)?,
                SectorKind::C => self.trace_c(i, j, &mut stack)?,
                SectorKind::Ml => self.trace_ml(i, j, &mut stack)?,
                SectorKind::Ml1 => self.trace_ml1(i, j, &mut stack)?,
                SectorKind::Gq => self.trace_gquad(i, j)?,
            }
        }
        Ok(())
    }

    fn inconsistent(&self, i: usize, j: usize, kind: SectorKind, expected: i32) -> FoldError {
        FoldError::BacktrackInconsistent { i, j, kind, expected }
    }

    fn trace_f5(&mut self, mut j: usize, stack: &mut Vec<Sector>) -> Result<(), FoldError> {
        loop {
            if j == 0 {
                return Ok(());
            }
            let fij = self.f5[j];
            if self.up_ok(j) && fij == esum(self.f5[j - 1], self.soft.unpaired_at(j)) {
                j -= 1;
                continue;
            }
            if j < MIN_LOOP + 2 {
                return Err(self.inconsistent(1, j, SectorKind::F5, fij));
            }

            // j is the 3' end of a stem (or quadruplex); largest k first
            let mut stems = [(INF, 0, 0, 0); 4];
            let mut traced = None;
            'scan: for k in (1..=(j - MIN_LOOP - 1)).rev() {
                if let Some(gq) = &self.gq {
                    if fij == esum(self.f5[k - 1], gq.at(&self.idx, k, j)) {
                        self.trace_gquad(k, j)?;
                        traced = Some((k - 1, None));
                        break 'scan;
                    }
                }
                let count = self.f5_stem_candidates(j, k, &mut stems);
                for &(e, prefix, pi, pj) in &stems[..count] {
                    if fij == esum(self.f5[prefix], e) {
                        traced = Some((prefix, Some((pi, pj))));
                        break 'scan;
                    }
                }
                if self.opts.dangles == Dangles::Coaxial && k > MIN_LOOP + 2 {
                    for h in 1..=(k - MIN_LOOP - 2) {
                        if fij == esum(self.f5[h - 1], self.f5_coax(h, k, j)) {
                            stack.push((h, k - 1, SectorKind::C));
                            traced = Some((h - 1, Some((k, j))));
                            break 'scan;
                        }
                    }
                }
            }

            match traced {
                Some((prefix, pair)) => {
                    if let Some((pi, pj)) = pair {
                        stack.push((pi, pj, SectorKind::C));
                    }
                    j = prefix;
                }
                None => return Err(self.inconsistent(1, j, SectorKind::F5, fij)),
            }
        }
    }

    fn trace_c(&mut self, mut i: usize, mut j: usize, stack: &mut Vec<Sector>) -> Result<(), FoldError> {
        self.pairs.push(i, j);
        let mut cij = self.c[self.at(i, j)];

        loop {
            if cij >= INF {
                return Err(self.inconsistent(i, j, SectorKind::C, cij));
            }
            let ty = match self.pair_type(i, j) {
                Some(t) => t,
                None => return Err(self.inconsistent(i, j, SectorKind::C, cij)),
            };

            if self.opts.no_lonely_pairs && cij == self.c[self.at(i, j)] {
                // the stored cell forces a closing stack; peel it
                let t2 = match self.pair_type(i + 1, j - 1) {
                    Some(t) => t,
                    None => return Err(self.inconsistent(i, j, SectorKind::C, cij)),
                };
                cij -= self.params.stack[ty as usize][t2.reversed() as usize] + self.soft.pair(i, j);
                self.pairs.push(i + 1, j - 1);
                i += 1;
                j -= 1;
                continue;
            }

            let no_close = self.opts.no_gu_closure && ty.is_wobble();
            let target = cij - self.soft.pair(i, j);

            if !no_close && target == self.e_hairpin(i, j, ty) {
                return Ok(());
            }

            // interior candidates in fill order: p ascending, q descending
            let pmax = (j - 2 - MIN_LOOP).min(i + mf_energy::MAX_LOOP + 1);
            let mut inner = None;
            'interior: for p in (i + 1)..=pmax {
                let qmin = (p + 1 + MIN_LOOP).max((j + p).saturating_sub(i + mf_energy::MAX_LOOP + 2));
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
                    if target == esum(e, self.c[self.at(p, q)]) {
                        inner = Some((p, q));
                        break 'interior;
                    }
                }
            }
            if let Some((p, q)) = inner {
                self.pairs.push(p, q);
                i = p;
                j = q;
                cij = self.c[self.at(i, j)];
                continue;
            }

            if !no_close && self.gq.is_some() {
                if let Some((p, q)) = self.match_gquad_enclosed(i, j, ty, target) {
                    return self.trace_gquad(p, q);
                }
            }

            if !no_close && self.match_ml_closing(i, j, ty, target, stack)? {
                return Ok(());
            }

            return Err(self.inconsistent(i, j, SectorKind::C, target));
        }
    }

    fn match_gquad_enclosed(
        &self,
        i: usize,
        j: usize,
        ty: mf_energy::PairType,
        target: i32,
    ) -> Option<(usize, usize)> {
        let gq = self.gq.as_ref()?;
        for p in (i + 1)..j {
            let u1 = p - i - 1;
            if u1 > mf_energy::MAX_LOOP || !self.up_run_ok(i + 1, u1) {
                break;
            }
            for q in ((p + crate::gquad::GQUAD_MIN_SPAN - 1)..j).rev() {
                let u2 = j - q - 1;
                if u1 + u2 > mf_energy::MAX_LOOP || !self.up_run_ok(q + 1, u2) {
                    continue;
                }
                let cand = esum3(
                    gq.at(&self.idx, p, q),
                    self.gquad_frame(ty, u1, u2),
                    esum(self.soft.unpaired_run(i + 1, u1), self.soft.unpaired_run(q + 1, u2)),
                );
                if target == cand {
                    return Some((p, q));
                }
            }
        }
        None
    }

    /// Find the multibranch decomposition of a closing pair; pushes the two
    /// halves and reports whether a split matched.
    fn match_ml_closing(
        &mut self,
        i: usize,
        j: usize,
        ty: mf_energy::PairType,
        target: i32,
        stack: &mut Vec<Sector>,
    ) -> Result<bool, FoldError> {
        let p = self.params;
        let tt = ty.reversed();
        if j < i + 2 * (MIN_LOOP + 2) + 1 {
            return Ok(false);
        }
        let en = target - p.ml_closing;

        // (variant energy besides the split, i1, j1)
        let mut variants = [(INF, 0usize, 0usize); 4];
        let mut vcount = 0;
        match self.opts.dangles {
            Dangles::None => {
                variants[0] = (self.ml_stem(tt, None, None), i + 1, j - 1);
                vcount = 1;
            }
            Dangles::Both => {
                variants[0] = (
                    self.ml_stem(tt, Some(self.s(j - 1)), Some(self.s(i + 1))),
                    i + 1,
                    j - 1,
                );
                vcount = 1;
            }
            Dangles::Split | Dangles::Coaxial => {
                variants[0] = (self.ml_stem(tt, None, None), i + 1, j - 1);
                vcount = 1;
                if self.up_ok(i + 1) {
                    variants[vcount] = (
                        esum3(
                            self.ml_stem(tt, None, Some(self.s(i + 1))),
                            p.ml_base,
                            self.soft.unpaired_at(i + 1),
                        ),
                        i + 2,
                        j - 1,
                    );
                    vcount += 1;
                }
                if self.up_ok(j - 1) {
                    variants[vcount] = (
                        esum3(
                            self.ml_stem(tt, Some(self.s(j - 1)), None),
                            p.ml_base,
                            self.soft.unpaired_at(j - 1),
                        ),
                        i + 1,
                        j - 2,
                    );
                    vcount += 1;
                }
                if self.up_ok(i + 1) && self.up_ok(j - 1) {
                    variants[vcount] = (
                        esum3(
                            self.ml_stem(tt, Some(self.s(j - 1)), Some(self.s(i + 1))),
                            esum(2 * p.ml_base, self.soft.unpaired_at(i + 1)),
                            self.soft.unpaired_at(j - 1),
                        ),
                        i + 2,
                        j - 2,
                    );
                    vcount += 1;
                }
            }
        }

        for &(stem, i1, j1) in &variants[..vcount] {
            if stem >= INF || j1 < MIN_LOOP + 2 {
                continue;
            }
            for k in (i1 + MIN_LOOP + 1)..=(j1.saturating_sub(MIN_LOOP + 2)) {
                let split = esum(self.fml[self.at(i1, k)], self.fm1[self.at(k + 1, j1)]);
                if en == esum(split, stem) {
                    stack.push((i1, k, SectorKind::Ml));
                    stack.push((k + 1, j1, SectorKind::Ml1));
                    return Ok(true);
                }
            }
        }

        if self.opts.dangles == Dangles::Coaxial && j >= i + 2 * MIN_LOOP + 5 {
            for k in (i + MIN_LOOP + 2)..=(j - MIN_LOOP - 3) {
                if let Some(t2) = self.pair_type(i + 1, k) {
                    let e = esum3(
                        self.c[self.at(i + 1, k)],
                        coaxial_energy(p, ty, t2.reversed()),
                        self.fml[self.at(k + 1, j - 1)],
                    );
                    if en == esum(e, 2 * p.ml_intern) {
                        stack.push((i + 1, k, SectorKind::C));
                        stack.push((k + 1, j - 1, SectorKind::Ml));
                        return Ok(true);
                    }
                }
                if let Some(t2) = self.pair_type(k + 1, j - 1) {
                    let e = esum3(
                        self.c[self.at(k + 1, j - 1)],
                        coaxial_energy(p, ty, t2.reversed()),
                        self.fml[self.at(i + 1, k)],
                    );
                    if en == esum(e, 2 * p.ml_intern) {
                        stack.push((i + 1, k, SectorKind::Ml));
                        stack.push((k + 1, j - 1, SectorKind::C));
                        return Ok(true);
                    }
                }
            }
        }

        Ok(false)
    }

    fn trace_ml(&mut self, mut i: usize, mut j: usize, stack: &mut Vec<Sector>) -> Result<(), FoldError> {
        loop {
            if j < i + MIN_LOOP + 1 {
                return Err(self.inconsistent(i, j, SectorKind::Ml, INF));
            }
            let fij = self.fml[self.at(i, j)];

            if self.up_ok(j)
                && fij == esum3(self.fml[self.at(i, j - 1)], self.params.ml_base, self.soft.unpaired_at(j))
            {
                j -= 1;
                continue;
            }
            if self.up_ok(i)
                && fij == esum3(self.fml[self.at(i + 1, j)], self.params.ml_base, self.soft.unpaired_at(i))
            {
                i += 1;
                continue;
            }

            if let Some(gq) = &self.gq {
                if fij == esum(gq.at(&self.idx, i, j), multibranch_gquad_energy(self.params)) {
                    return self.trace_gquad(i, j);
                }
            }

            let mut stems = [(INF, 0, 0); 4];
            let count = self.ml_stem_candidates(i, j, &mut stems);
            for &(e, pi, pj) in &stems[..count] {
                if fij == e {
                    stack.push((pi, pj, SectorKind::C));
                    return Ok(());
                }
            }

            if j >= i + 2 * (MIN_LOOP + 1) + 1 {
                for k in (i + MIN_LOOP + 1)..=(j - MIN_LOOP - 2) {
                    if fij == esum(self.fml[self.at(i, k)], self.fm1[self.at(k + 1, j)]) {
                        stack.push((i, k, SectorKind::Ml));
                        stack.push((k + 1, j, SectorKind::Ml1));
                        return Ok(());
                    }
                }
                if self.opts.dangles == Dangles::Coaxial {
                    for k in (i + MIN_LOOP + 1)..=(j - MIN_LOOP - 2) {
                        if fij == self.ml_coax_split(i, j, k) {
                            stack.push((i, k, SectorKind::C));
                            stack.push((k + 1, j, SectorKind::C));
                            return Ok(());
                        }
                    }
                }
            }

            return Err(self.inconsistent(i, j, SectorKind::Ml, fij));
        }
    }

    fn trace_ml1(&mut self, i: usize, mut j: usize, stack: &mut Vec<Sector>) -> Result<(), FoldError> {
        loop {
            if j < i + MIN_LOOP + 1 {
                return Err(self.inconsistent(i, j, SectorKind::Ml1, INF));
            }
            let v = self.fm1[self.at(i, j)];

            if self.up_ok(j)
                && v == esum3(self.fm1[self.at(i, j - 1)], self.params.ml_base, self.soft.unpaired_at(j))
            {
                j -= 1;
                continue;
            }

            let mut stems = [(INF, 0, 0); 4];
            let count = self.ml_stem_candidates(i, j, &mut stems);
            for &(e, pi, pj) in &stems[..count] {
                if v == e {
                    stack.push((pi, pj, SectorKind::C));
                    return Ok(());
                }
            }

            return Err(self.inconsistent(i, j, SectorKind::Ml1, v));
        }
    }

    fn trace_gquad(&mut self, i: usize, j: usize) -> Result<(), FoldError> {
        let gq = self.gq.as_ref().ok_or(self.inconsistent(i, j, SectorKind::Gq, INF))?;
        let (l_stack, linkers) = gq
            .pattern(&self.idx, self.params, i, j)
            .ok_or(self.inconsistent(i, j, SectorKind::Gq, INF))?;
        let mut run = i;
        for r in 0..4 {
            for a in 0..l_stack {
                self.pairs.push(run + a, run + a);
            }
            if r < 3 {
                run += l_stack + linkers[r];
            }
        }
        Ok(())
    }
}
