use rustc_hash::FxHashMap;

use crate::EnergyTables;
use crate::ParamError;
use crate::INF;
use crate::NucleotideVec;
use crate::BCOUNT as B;
use crate::PCOUNT as P;

pub const K0: f64 = 273.15;
/// Temperature the tables were measured at, in Kelvin.
pub const T37: f64 = 310.15;

/// Minimum number of unpaired bases in a hairpin loop.
pub const MIN_LOOP: usize = 3;
/// Largest tabulated loop size; also the bound on interior loop spans.
pub const MAX_LOOP: usize = 30;

// G-quadruplex stability law: alpha * (L - 1) + beta * ln(ltot - 2).
const GQUAD_ALPHA37: i32 = -1800;
const GQUAD_ALPHA_DH: i32 = -11934;
const GQUAD_BETA37: i32 = 1200;
const GQUAD_BETA_DH: i32 = 0;

fn rescale(en37: Option<i32>, enth: Option<i32>, dtemp: f64) -> i32 {
    match (en37, enth) {
        (Some(g), Some(h)) => {
            let g = g as f64;
            let h = h as f64;
            // no rounding, for ViennaRNA compatibility
            (h - dtemp * (h - g)) as i32
        }
        (Some(g), None) => g,
        _ => INF,
    }
}

/// Read-only parameter bundle with every entry rescaled to the target
/// temperature. One instance is shared by matrix fill and backtracking and
/// may be shared across folding contexts.
pub struct ScaledParams {
    pub temperature: f64,

    pub stack: [[i32; P]; P],

    pub mismatch_hairpin:     [[[i32; B]; B]; P],
    pub mismatch_interior:    [[[i32; B]; B]; P],
    pub mismatch_interior_1n: [[[i32; B]; B]; P],
    pub mismatch_interior_23: [[[i32; B]; B]; P],
    pub mismatch_multi:       [[[i32; B]; B]; P],
    pub mismatch_exterior:    [[[i32; B]; B]; P],

    pub dangle5: [[i32; B]; P],
    pub dangle3: [[i32; B]; P],

    pub int11: Box<[[[[i32; B]; B]; P]; P]>,
    pub int21: Box<[[[[[i32; B]; B]; B]; P]; P]>,
    pub int22: Box<[[[[[[i32; B]; B]; B]; B]; P]; P]>,

    pub hairpin:  [i32; 31],
    pub bulge:    [i32; 31],
    pub interior: [i32; 31],

    pub ml_base: i32,
    pub ml_closing: i32,
    pub ml_intern: i32,
    pub ninio: i32,
    pub max_ninio: i32,
    pub terminal_au: i32,
    pub duplex_init: i32,
    pub lxc: f64,

    pub gquad_alpha: i32,
    pub gquad_beta: i32,

    pub special_hairpins: FxHashMap<NucleotideVec, i32>,
}

impl ScaledParams {
    pub fn new(tables: &EnergyTables, temperature: f64) -> Result<Self, ParamError> {
        let dtemp = (temperature + K0) / T37;

        let mut p = ScaledParams {
            temperature,
            stack: [[INF; P]; P],
            mismatch_hairpin:     [[[INF; B]; B]; P],
            mismatch_interior:    [[[INF; B]; B]; P],
            mismatch_interior_1n: [[[INF; B]; B]; P],
            mismatch_interior_23: [[[INF; B]; B]; P],
            mismatch_multi:       [[[INF; B]; B]; P],
            mismatch_exterior:    [[[INF; B]; B]; P],
            dangle5: [[INF; B]; P],
            dangle3: [[INF; B]; P],
            int11: Box::new([[[[INF; B]; B]; P]; P]),
            int21: Box::new([[[[[INF; B]; B]; B]; P]; P]),
            int22: Box::new([[[[[[INF; B]; B]; B]; B]; P]; P]),
            hairpin:  [INF; 31],
            bulge:    [INF; 31],
            interior: [INF; 31],
            ml_base: rescale(Some(tables.ml_params.base_en37), Some(tables.ml_params.base_enth), dtemp),
            ml_closing: rescale(Some(tables.ml_params.closing_en37), Some(tables.ml_params.closing_enth), dtemp),
            ml_intern: rescale(Some(tables.ml_params.intern_en37), Some(tables.ml_params.intern_enth), dtemp),
            ninio: rescale(Some(tables.ninio.en37), Some(tables.ninio.enth), dtemp),
            max_ninio: tables.ninio.max,
            terminal_au: rescale(Some(tables.misc.terminal_au_en37), Some(tables.misc.terminal_au_enth), dtemp),
            duplex_init: rescale(Some(tables.misc.duplex_init_en37), Some(tables.misc.duplex_init_enth), dtemp),
            lxc: tables.misc.lxc * dtemp,
            gquad_alpha: rescale(Some(GQUAD_ALPHA37), Some(GQUAD_ALPHA_DH), dtemp),
            gquad_beta: rescale(Some(GQUAD_BETA37), Some(GQUAD_BETA_DH), dtemp),
            special_hairpins: FxHashMap::default(),
        };

        for i in 0..P {
            for j in 0..P {
                p.stack[i][j] = rescale(tables.stack[i][j], tables.stack_enthalpies[i][j], dtemp);
            }
        }

        for t in 0..P {
            for x in 0..B {
                for y in 0..B {
                    p.mismatch_hairpin[t][x][y] =
                        rescale(tables.mismatch_hairpin[t][x][y], tables.mismatch_hairpin_enthalpies[t][x][y], dtemp);
                    p.mismatch_interior[t][x][y] =
                        rescale(tables.mismatch_interior[t][x][y], tables.mismatch_interior_enthalpies[t][x][y], dtemp);
                    p.mismatch_interior_1n[t][x][y] =
                        rescale(tables.mismatch_interior_1n[t][x][y], tables.mismatch_interior_1n_enthalpies[t][x][y], dtemp);
                    p.mismatch_interior_23[t][x][y] =
                        rescale(tables.mismatch_interior_23[t][x][y], tables.mismatch_interior_23_enthalpies[t][x][y], dtemp);
                    p.mismatch_multi[t][x][y] =
                        rescale(tables.mismatch_multi[t][x][y], tables.mismatch_multi_enthalpies[t][x][y], dtemp);
                    p.mismatch_exterior[t][x][y] =
                        rescale(tables.mismatch_exterior[t][x][y], tables.mismatch_exterior_enthalpies[t][x][y], dtemp);
                }
                p.dangle5[t][x] = rescale(tables.dangle5[t][x], tables.dangle5_enthalpies[t][x], dtemp);
                p.dangle3[t][x] = rescale(tables.dangle3[t][x], tables.dangle3_enthalpies[t][x], dtemp);
            }
        }

        for t1 in 0..P {
            for t2 in 0..P {
                for x in 0..B {
                    for y in 0..B {
                        p.int11[t1][t2][x][y] =
                            rescale(tables.int11[t1][t2][x][y], tables.int11_enthalpies[t1][t2][x][y], dtemp);
                        for z in 0..B {
                            p.int21[t1][t2][x][y][z] =
                                rescale(tables.int21[t1][t2][x][y][z], tables.int21_enthalpies[t1][t2][x][y][z], dtemp);
                            for w in 0..B {
                                p.int22[t1][t2][x][y][z][w] =
                                    rescale(tables.int22[t1][t2][x][y][z][w], tables.int22_enthalpies[t1][t2][x][y][z][w], dtemp);
                            }
                        }
                    }
                }
            }
        }

        for i in 0..31 {
            p.hairpin[i] = rescale(tables.hairpin[i], tables.hairpin_enthalpies[i], dtemp);
            p.bulge[i] = rescale(tables.bulge[i], tables.bulge_enthalpies[i], dtemp);
            p.interior[i] = rescale(tables.interior[i], tables.interior_enthalpies[i], dtemp);
        }

        for (seq, &(g, h)) in &tables.hairpin_sequences {
            p.special_hairpins.insert(seq.clone(), rescale(Some(g), Some(h), dtemp));
        }

        Ok(p)
    }

    /// The built-in tables at 37 C.
    pub fn turner37() -> Self {
        Self::new(&EnergyTables::turner(), 37.0).expect("built-in parameter set must be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PairType::*;
    use crate::Base::*;

    #[test]
    fn test_scaling_identity_at_37() {
        let p = ScaledParams::turner37();
        assert_eq!(p.stack[CG as usize][CG as usize], -240);
        assert_eq!(p.stack[GC as usize][GC as usize], -340);
        assert_eq!(p.hairpin[3], 540);
        assert_eq!(p.hairpin[4], 560);
        assert_eq!(p.bulge[1], 380);
        assert_eq!(p.terminal_au, 50);
        assert_eq!(p.ml_closing, 930);
        assert_eq!(p.ml_intern, -90);
        assert_eq!(p.ml_base, 0);
        assert_eq!(p.ninio, 60);
        assert_eq!(p.max_ninio, 300);
        assert_eq!(p.dangle3[GC as usize][U as usize], -60);
        assert_eq!(p.dangle5[GC as usize][A as usize], -50);
        assert_eq!(p.mismatch_exterior[GC as usize][A as usize][U as usize], -150);
    }

    #[test]
    fn test_missing_entries_become_inf() {
        let p = ScaledParams::turner37();
        assert_eq!(p.hairpin[0], INF);
        assert_eq!(p.hairpin[2], INF);
        assert_eq!(p.interior[3], INF);
        assert_eq!(p.stack[0][0], INF);
    }

    #[test]
    fn test_scaling_at_25_degrees() {
        let tables = EnergyTables::turner();
        let p = ScaledParams::new(&tables, 25.0).unwrap();
        // stack[CG][CG]: g = -240, h = -1060
        // E(25) = h - (h - g) * (298.15 / 310.15) = -271.7.. -> -271
        assert_eq!(p.stack[CG as usize][CG as usize], -271);
        // terminal AU: g = 50, h = 370 -> 370 - 320 * 0.96131.. = 62.3 -> 62
        assert_eq!(p.terminal_au, 62);
    }

    #[test]
    fn test_scaling_special_hairpins() {
        let tables = EnergyTables::turner();
        let p37 = ScaledParams::new(&tables, 37.0).unwrap();
        let key = NucleotideVec::try_from("CUUCGG").unwrap();
        assert_eq!(p37.special_hairpins[&key], 370);
        let p25 = ScaledParams::new(&tables, 25.0).unwrap();
        // g = 370, h = -1530: -1530 + 1900 * 0.96131.. = 296.5 -> 296
        assert_eq!(p25.special_hairpins[&key], 296);
    }

    #[test]
    fn test_estimated_interiors_are_temperature_independent() {
        let tables = EnergyTables::turner();
        let p = ScaledParams::new(&tables, 15.0).unwrap();
        assert_eq!(p.int11[CG as usize][CG as usize][A as usize][A as usize], 90);
        assert_eq!(p.int21[AU as usize][AU as usize][A as usize][A as usize][A as usize], 330);
    }
}
