//! Circular closure: after the linear pass the exterior loop wraps from
//! position n back to 1, closed either by a hairpin, an interior loop
//! spanning the origin, or a multibranch loop with at least three stems.

use mf_energy::hairpin_energy;
use mf_energy::interior_energy;
use mf_energy::{INF, MAX_LOOP, MIN_LOOP};

use crate::context::{esum, esum3, CircDecomp, FoldContext};

impl<'a> FoldContext<'a> {
    pub(crate) fn fill_circular(&mut self) {
        let n = self.n;
        self.fch = INF;
        self.fci = INF;
        self.fcm = INF;

        if n > MIN_LOOP + 1 {
            self.fill_wrap_hairpin();
            self.fill_wrap_interior();
            self.fill_wrap_multibranch();
        }

        // the open circle stays available unless constraints forbid it
        let open = if self.up_run_ok(1, n) {
            self.soft.unpaired_run(1, n)
        } else {
            INF
        };

        self.fc = open.min(self.fch).min(self.fci).min(self.fcm);
        self.circ_decomp = if self.fc == open {
            CircDecomp::Open
        } else if self.fc == self.fch {
            self.circ_wrap_hairpin_decomp()
        } else if self.fc == self.fci {
            self.circ_wrap_interior_decomp()
        } else {
            self.circ_wrap_multi_decomp()
        };
    }

    /// Energy of the wrap-around hairpin closed by (j, i): everything
    /// outside [i, j] is unpaired.
    pub(crate) fn e_wrap_hairpin(&self, i: usize, j: usize) -> i32 {
        let n = self.n;
        let ty = match self.pair_type(i, j) {
            Some(t) => t.reversed(),
            None => return INF,
        };
        if self.opts.no_gu_closure && ty.is_wobble() {
            return INF;
        }
        let size = (i - 1) + (n - j);
        if size < MIN_LOOP {
            return INF;
        }
        if !self.up_run_ok(j + 1, n - j) || !self.up_run_ok(1, i - 1) {
            return INF;
        }

        // closing pair plus wrapped loop, for the motif lookup
        let mut closed = Vec::with_capacity(size + 2);
        closed.extend_from_slice(&self.seq[j..=n]);
        closed.extend_from_slice(&self.seq[1..=i]);

        let e = hairpin_energy(
            self.params,
            size,
            ty,
            self.s(j + 1),
            self.s(i - 1),
            &closed,
            self.opts.special_hairpins,
        );
        esum3(
            e,
            self.soft.unpaired_run(j + 1, n - j),
            self.soft.unpaired_run(1, i - 1),
        )
    }

    fn fill_wrap_hairpin(&mut self) {
        let n = self.n;
        for i in 1..=(n - MIN_LOOP - 1) {
            for j in (i + MIN_LOOP + 1)..=n {
                let cij = self.c[self.at(i, j)];
                if cij >= INF {
                    continue;
                }
                let e = esum(cij, self.e_wrap_hairpin(i, j));
                if e < self.fch {
                    self.fch = e;
                }
            }
        }
    }

    /// Energy of the interior loop wrapping the origin, closed by (j, i)
    /// outside and (p, q) inside; helix energies not included.
    pub(crate) fn e_wrap_interior(&self, i: usize, j: usize, p: usize, q: usize) -> i32 {
        let n = self.n;
        let (t1, t2) = match (self.pair_type(i, j), self.pair_type(p, q)) {
            (Some(a), Some(b)) => (a, b),
            _ => return INF,
        };
        let u1 = p - j - 1;
        let u2 = (i - 1) + (n - q);
        if u1 + u2 > MAX_LOOP {
            return INF;
        }
        if !self.up_run_ok(j + 1, u1) || !self.up_run_ok(q + 1, n - q) || !self.up_run_ok(1, i - 1) {
            return INF;
        }
        let e = interior_energy(
            self.params,
            u1,
            u2,
            t1.reversed(),
            t2.reversed(),
            self.s(j + 1),
            self.s(i - 1),
            self.s(p - 1),
            self.s(q + 1),
        );
        esum3(
            e,
            self.soft.unpaired_run(j + 1, u1),
            esum(self.soft.unpaired_run(q + 1, n - q), self.soft.unpaired_run(1, i - 1)),
        )
    }

    fn fill_wrap_interior(&mut self) {
        let n = self.n;
        for i in 1..=(n - MIN_LOOP - 1) {
            for j in (i + MIN_LOOP + 1)..=n {
                if self.c[self.at(i, j)] >= INF {
                    continue;
                }
                for p in (j + 1)..=n.saturating_sub(MIN_LOOP + 1) {
                    if p - j - 1 + (i - 1) > MAX_LOOP {
                        break;
                    }
                    for q in ((p + MIN_LOOP + 1)..=n).rev() {
                        if self.c[self.at(p, q)] >= INF {
                            continue;
                        }
                        let e = esum3(
                            self.c[self.at(i, j)],
                            self.c[self.at(p, q)],
                            self.e_wrap_interior(i, j, p, q),
                        );
                        if e < self.fci {
                            self.fci = e;
                        }
                    }
                }
            }
        }
    }

    fn fill_wrap_multibranch(&mut self) {
        let n = self.n;
        if n < 2 * MIN_LOOP + 4 {
            return;
        }

        // fm2[i]: multibranch region [i, n] with exactly two stems
        for i in 1..=(n - MIN_LOOP - 1) {
            let mut best = INF;
            for u in (i + MIN_LOOP)..(n - MIN_LOOP) {
                best = best.min(esum(
                    self.fml[self.at(i, u)],
                    self.fml[self.at(u + 1, n)],
                ));
            }
            self.fm2[i] = best;
        }

        for i in (MIN_LOOP + 1)..(n.saturating_sub(2 * MIN_LOOP)) {
            let e = esum3(self.fml[self.at(1, i)], self.fm2[i + 1], self.params.ml_closing);
            if e < self.fcm {
                self.fcm = e;
            }
        }
    }

    // The realizers are recovered by re-scanning in fill order; ties break
    // to the first candidate, matching the stored minima deterministically.

    fn circ_wrap_hairpin_decomp(&self) -> CircDecomp {
        let n = self.n;
        for i in 1..=(n - MIN_LOOP - 1) {
            for j in (i + MIN_LOOP + 1)..=n {
                let cij = self.c[self.at(i, j)];
                if cij < INF && esum(cij, self.e_wrap_hairpin(i, j)) == self.fch {
                    return CircDecomp::WrapHairpin(i, j);
                }
            }
        }
        CircDecomp::Open
    }

    fn circ_wrap_interior_decomp(&self) -> CircDecomp {
        let n = self.n;
        for i in 1..=(n - MIN_LOOP - 1) {
            for j in (i + MIN_LOOP + 1)..=n {
                if self.c[self.at(i, j)] >= INF {
                    continue;
                }
                for p in (j + 1)..=n.saturating_sub(MIN_LOOP + 1) {
                    if p - j - 1 + (i - 1) > MAX_LOOP {
                        break;
                    }
                    for q in ((p + MIN_LOOP + 1)..=n).rev() {
                        if self.c[self.at(p, q)] >= INF {
                            continue;
                        }
                        let e = esum3(
                            self.c[self.at(i, j)],
                            self.c[self.at(p, q)],
                            self.e_wrap_interior(i, j, p, q),
                        );
                        if e == self.fci {
                            return CircDecomp::WrapInterior(i, j, p, q);
                        }
                    }
                }
            }
        }
        CircDecomp::Open
    }

    fn circ_wrap_multi_decomp(&self) -> CircDecomp {
        let n = self.n;
        if n < 2 * MIN_LOOP + 4 {
            return CircDecomp::Open;
        }
        for i in (MIN_LOOP + 1)..(n.saturating_sub(2 * MIN_LOOP)) {
            if esum3(self.fml[self.at(1, i)], self.fm2[i + 1], self.params.ml_closing) == self.fcm {
                return CircDecomp::WrapMulti(i);
            }
        }
        CircDecomp::Open
    }
}
