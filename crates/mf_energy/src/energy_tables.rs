use std::fmt;
use std::fs::File;
use std::path::Path;
use std::io::{BufRead, BufReader};
use rustc_hash::FxHashMap;

use crate::parameter_parsing::ParamFileSection;
use crate::parameter_parsing::SectionParser;
use crate::turner;
use crate::NucleotideVec;
use crate::PairType;
use crate::BCOUNT as B;
use crate::PCOUNT as P;

/// Energy sentinel: larger than any finite loop energy, never added to
/// another energy without a guard.
pub const INF: i32 = 10_000_000;

#[derive(Debug)]
pub enum ParamError {
    Io(std::io::Error),
    Parse(String),
    MissingValue(&'static str, usize),
    InvalidLength(&'static str, usize, usize),
}

impl std::error::Error for ParamError {}

impl From<std::io::Error> for ParamError {
    fn from(e: std::io::Error) -> Self {
        ParamError::Io(e)
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Io(e) => write!(f, "I/O error: {}", e),
            ParamError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ParamError::MissingValue(table, index) => {
                write!(f, "Missing value in parameter table '{}' at index {}", table, index)
            }
            ParamError::InvalidLength(table, expected, got) => {
                write!(
                    f,
                    "Invalid length for parameter table '{}': expected {}, got {}",
                    table, expected, got
                )
            }
        }
    }
}

#[derive(Default, Debug)]
pub struct MLParams {
    pub base_en37: i32,
    pub base_enth: i32,
    pub closing_en37: i32,
    pub closing_enth: i32,
    pub intern_en37: i32,
    pub intern_enth: i32,
}

impl MLParams {
    pub fn from_param_slice(slice: &[i32]) -> Result<Self, ParamError> {
        if slice.len() != 6 {
            return Err(ParamError::InvalidLength("ML_params", 6, slice.len()));
        }
        Ok(Self {
            base_en37: slice[0],
            base_enth: slice[1],
            closing_en37: slice[2],
            closing_enth: slice[3],
            intern_en37: slice[4],
            intern_enth: slice[5],
        })
    }
}

#[derive(Default, Debug)]
pub struct Ninio {
    pub en37: i32,
    pub enth: i32,
    pub max: i32,
}

impl Ninio {
    pub fn from_param_slice(slice: &[i32]) -> Result<Self, ParamError> {
        if slice.len() != 3 {
            return Err(ParamError::InvalidLength("NINIO", 3, slice.len()));
        }
        Ok(Self {
            en37: slice[0],
            enth: slice[1],
            max: slice[2],
        })
    }
}

#[derive(Default, Debug)]
pub struct Misc {
    pub duplex_init_en37: i32,
    pub duplex_init_enth: i32,
    pub terminal_au_en37: i32,
    pub terminal_au_enth: i32,
    pub lxc: f64,
}

impl Misc {
    /// First four tokens are the duplex initiation and terminal AU pairs;
    /// an optional fifth token overrides `lxc`.
    pub fn from_tokens(ints: &[i32], lxc: Option<f64>) -> Result<Self, ParamError> {
        if ints.len() < 4 {
            return Err(ParamError::InvalidLength("Misc", 4, ints.len()));
        }
        Ok(Self {
            duplex_init_en37: ints[0],
            duplex_init_enth: ints[1],
            terminal_au_en37: ints[2],
            terminal_au_enth: ints[3],
            lxc: lxc.unwrap_or(crate::turner::LXC37),
        })
    }
}

/// Raw nearest neighbor tables: free energies at 37 C and enthalpies side by
/// side, `None` marking entries a parameter set does not provide.
#[derive(Debug)]
pub struct EnergyTables {
    pub stack:            [[Option<i32>; P]; P],
    pub stack_enthalpies: [[Option<i32>; P]; P],

    pub mismatch_hairpin:            [[[Option<i32>; B]; B]; P],
    pub mismatch_hairpin_enthalpies: [[[Option<i32>; B]; B]; P],
    pub mismatch_interior:            [[[Option<i32>; B]; B]; P],
    pub mismatch_interior_enthalpies: [[[Option<i32>; B]; B]; P],
    pub mismatch_interior_1n:            [[[Option<i32>; B]; B]; P],
    pub mismatch_interior_1n_enthalpies: [[[Option<i32>; B]; B]; P],
    pub mismatch_interior_23:            [[[Option<i32>; B]; B]; P],
    pub mismatch_interior_23_enthalpies: [[[Option<i32>; B]; B]; P],
    pub mismatch_multi:            [[[Option<i32>; B]; B]; P],
    pub mismatch_multi_enthalpies: [[[Option<i32>; B]; B]; P],
    pub mismatch_exterior:            [[[Option<i32>; B]; B]; P],
    pub mismatch_exterior_enthalpies: [[[Option<i32>; B]; B]; P],

    pub dangle5:            [[Option<i32>; B]; P],
    pub dangle5_enthalpies: [[Option<i32>; B]; P],
    pub dangle3:            [[Option<i32>; B]; P],
    pub dangle3_enthalpies: [[Option<i32>; B]; P],

    pub int11:            Box<[[[[Option<i32>; B]; B]; P]; P]>,
    pub int11_enthalpies: Box<[[[[Option<i32>; B]; B]; P]; P]>,
    pub int21:            Box<[[[[[Option<i32>; B]; B]; B]; P]; P]>,
    pub int21_enthalpies: Box<[[[[[Option<i32>; B]; B]; B]; P]; P]>,
    pub int22:            Box<[[[[[[Option<i32>; B]; B]; B]; B]; P]; P]>,
    pub int22_enthalpies: Box<[[[[[[Option<i32>; B]; B]; B]; B]; P]; P]>,

    pub hairpin:            [Option<i32>; 31],
    pub hairpin_enthalpies: [Option<i32>; 31],
    pub bulge:            [Option<i32>; 31],
    pub bulge_enthalpies: [Option<i32>; 31],
    pub interior:            [Option<i32>; 31],
    pub interior_enthalpies: [Option<i32>; 31],

    pub ml_params: MLParams,
    pub ninio: Ninio,
    pub misc: Misc,

    pub hairpin_sequences: FxHashMap<NucleotideVec, (i32, i32)>,
}

macro_rules! section_match {
    ($enum:expr, $line:expr, $tables:expr, $($struct:ident),+ $(,)?) => {
        match $enum {
            $(
                ParamFileSection::$struct(ref mut s) => s.parse_line($line, &mut $tables)?,
            )+
            ParamFileSection::None => {
                return Err(ParamError::Parse(format!("Data line outside any section: \"{}\"", $line)));
            }
        }
    };
}

fn opt(v: i32) -> Option<i32> {
    (v < INF).then_some(v)
}

impl EnergyTables {
    /// All entries missing; the starting point for the file parser.
    pub fn empty() -> Self {
        EnergyTables {
            stack:            [[None; P]; P],
            stack_enthalpies: [[None; P]; P],

            mismatch_hairpin:            [[[None; B]; B]; P],
            mismatch_hairpin_enthalpies: [[[None; B]; B]; P],
            mismatch_interior:            [[[None; B]; B]; P],
            mismatch_interior_enthalpies: [[[None; B]; B]; P],
            mismatch_interior_1n:            [[[None; B]; B]; P],
            mismatch_interior_1n_enthalpies: [[[None; B]; B]; P],
            mismatch_interior_23:            [[[None; B]; B]; P],
            mismatch_interior_23_enthalpies: [[[None; B]; B]; P],
            mismatch_multi:            [[[None; B]; B]; P],
            mismatch_multi_enthalpies: [[[None; B]; B]; P],
            mismatch_exterior:            [[[None; B]; B]; P],
            mismatch_exterior_enthalpies: [[[None; B]; B]; P],
            dangle5:            [[None; B]; P],
            dangle5_enthalpies: [[None; B]; P],
            dangle3:            [[None; B]; P],
            dangle3_enthalpies: [[None; B]; P],

            int11:            Box::new([[[[None; B]; B]; P]; P]),
            int11_enthalpies: Box::new([[[[None; B]; B]; P]; P]),
            int21:            Box::new([[[[[None; B]; B]; B]; P]; P]),
            int21_enthalpies: Box::new([[[[[None; B]; B]; B]; P]; P]),
            int22:            Box::new([[[[[[None; B]; B]; B]; B]; P]; P]),
            int22_enthalpies: Box::new([[[[[[None; B]; B]; B]; B]; P]; P]),

            hairpin: [None; 31],
            hairpin_enthalpies: [None; 31],
            bulge: [None; 31],
            bulge_enthalpies: [None; 31],
            interior: [None; 31],
            interior_enthalpies: [None; 31],
            ml_params: MLParams::default(),
            ninio: Ninio::default(),
            misc: Misc::default(),

            hairpin_sequences: FxHashMap::default(),
        }
    }

    /// The built-in Mathews-Turner 1999 rule set.
    ///
    /// The tabulated 1x1, 2x1 and 2x2 interior loops are not part of the
    /// embedded data; their entries are estimated as a size-dependent base
    /// value plus the terminal AU penalty per weak closing pair, taken
    /// temperature independent. Loading a full parameter file replaces the
    /// estimates with measured values.
    pub fn turner() -> Self {
        let mut t = EnergyTables::empty();

        for i in 0..P {
            for j in 0..P {
                t.stack[i][j] = opt(turner::STACK37[i][j]);
                t.stack_enthalpies[i][j] = opt(turner::STACK_DH[i][j]);
            }
        }

        for i in 0..31 {
            t.hairpin[i] = opt(turner::HAIRPIN37[i]);
            t.hairpin_enthalpies[i] = opt(turner::HAIRPIN_DH[i]);
            t.bulge[i] = opt(turner::BULGE37[i]);
            t.bulge_enthalpies[i] = opt(turner::BULGE_DH[i]);
            t.interior[i] = opt(turner::INTERNAL_LOOP37[i]);
            t.interior_enthalpies[i] = opt(turner::INTERNAL_LOOP_DH[i]);
        }

        for p in 0..P {
            for x in 0..B {
                for y in 0..B {
                    t.mismatch_hairpin[p][x][y] = opt(turner::MISMATCH_HAIRPIN37[p][x][y]);
                    t.mismatch_hairpin_enthalpies[p][x][y] = opt(turner::MISMATCH_HAIRPIN_DH[p][x][y]);
                    t.mismatch_interior[p][x][y] = opt(turner::MISMATCH_INTERIOR37[p][x][y]);
                    t.mismatch_interior_enthalpies[p][x][y] = opt(turner::MISMATCH_INTERIOR_DH[p][x][y]);
                    t.mismatch_interior_1n[p][x][y] = opt(turner::MISMATCH_INTERIOR_1N37[p][x][y]);
                    t.mismatch_interior_1n_enthalpies[p][x][y] = opt(turner::MISMATCH_INTERIOR_1N_DH[p][x][y]);
                    t.mismatch_interior_23[p][x][y] = opt(turner::MISMATCH_INTERIOR_23_37[p][x][y]);
                    t.mismatch_interior_23_enthalpies[p][x][y] = opt(turner::MISMATCH_INTERIOR_23_DH[p][x][y]);
                    t.mismatch_multi[p][x][y] = opt(turner::MISMATCH_MULTI37[p][x][y]);
                    t.mismatch_multi_enthalpies[p][x][y] = opt(turner::MISMATCH_MULTI_DH[p][x][y]);
                    t.mismatch_exterior[p][x][y] = opt(turner::MISMATCH_EXTERIOR37[p][x][y]);
                    t.mismatch_exterior_enthalpies[p][x][y] = opt(turner::MISMATCH_EXTERIOR_DH[p][x][y]);
                }
                t.dangle5[p][x] = opt(turner::DANGLE5_37[p][x]);
                t.dangle5_enthalpies[p][x] = opt(turner::DANGLE5_DH[p][x]);
                t.dangle3[p][x] = opt(turner::DANGLE3_37[p][x]);
                t.dangle3_enthalpies[p][x] = opt(turner::DANGLE3_DH[p][x]);
            }
        }

        t.estimate_small_interiors();

        t.ml_params = MLParams {
            base_en37: turner::ML_BASE37,
            base_enth: turner::ML_BASE_DH,
            closing_en37: turner::ML_CLOSING37,
            closing_enth: turner::ML_CLOSING_DH,
            intern_en37: turner::ML_INTERN37,
            intern_enth: turner::ML_INTERN_DH,
        };
        t.ninio = Ninio {
            en37: turner::NINIO37,
            enth: turner::NINIO_DH,
            max: turner::MAX_NINIO,
        };
        t.misc = Misc {
            duplex_init_en37: turner::DUPLEX_INIT37,
            duplex_init_enth: turner::DUPLEX_INIT_DH,
            terminal_au_en37: turner::TERMINAL_AU37,
            terminal_au_enth: turner::TERMINAL_AU_DH,
            lxc: turner::LXC37,
        };

        for (seq, g, h) in turner::TRILOOPS
            .iter()
            .chain(turner::TETRALOOPS.iter())
            .chain(turner::HEXALOOPS.iter())
        {
            t.hairpin_sequences
                .insert(NucleotideVec::try_from(*seq).expect("built-in motif"), (*g, *h));
        }

        t
    }

    fn estimate_small_interiors(&mut self) {
        let weak = |p: usize| -> i32 {
            match PairType::of_index(p) {
                Some(pt) if !pt.is_weak() => 0,
                _ => turner::TERMINAL_AU37,
            }
        };
        for p1 in 1..P {
            for p2 in 1..P {
                let e11 = 90 + weak(p1) + weak(p2);
                let e21 = 230 + weak(p1) + weak(p2);
                let e22 = 150 + weak(p1) + weak(p2);
                for x in 0..B {
                    for y in 0..B {
                        self.int11[p1][p2][x][y] = Some(e11);
                        self.int11_enthalpies[p1][p2][x][y] = Some(e11);
                        for z in 0..B {
                            self.int21[p1][p2][x][y][z] = Some(e21);
                            self.int21_enthalpies[p1][p2][x][y][z] = Some(e21);
                            for w in 0..B {
                                self.int22[p1][p2][x][y][z][w] = Some(e22);
                                self.int22_enthalpies[p1][p2][x][y][z][w] = Some(e22);
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn from_parameter_file<Q: AsRef<Path>>(path: Q) -> Result<Self, ParamError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParamError> {
        let mut tables = EnergyTables::empty();
        tables.parse(reader)?;
        Ok(tables)
    }

    /// Parse parameter file sections into `self`, overriding whatever the
    /// touched entries held before. Starting from [`EnergyTables::turner`]
    /// this layers a partial file over the built-in set.
    pub fn parse<R: BufRead>(&mut self, reader: R) -> Result<(), ParamError> {
        let mut section = ParamFileSection::None;

        for line in reader.lines() {
            let line = line?;
            let line = match line.find("/*") {
                Some(pos) => line[..pos].trim().to_string(),
                None => line.trim().to_string(),
            };
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix("# ") {
                section = ParamFileSection::try_from(rest.trim())
                    .map_err(|_| ParamError::Parse(format!("Unknown section: {:?}", rest)))?;
                continue;
            } else if line.starts_with('#') {
                continue;
            }

            section_match!(section, line, *self,
                Stack,
                StackEnthalpies,
                MismatchHairpin,
                MismatchHairpinEnthalpies,
                MismatchInterior,
                MismatchInteriorEnthalpies,
                MismatchInterior1n,
                MismatchInterior1nEnthalpies,
                MismatchInterior23,
                MismatchInterior23Enthalpies,
                MismatchMulti,
                MismatchMultiEnthalpies,
                MismatchExterior,
                MismatchExteriorEnthalpies,
                Dangle5,
                Dangle5Enthalpies,
                Dangle3,
                Dangle3Enthalpies,
                Int11,
                Int11Enthalpies,
                Int21,
                Int21Enthalpies,
                Int22,
                Int22Enthalpies,
                Hairpin,
                HairpinEnthalpies,
                Bulge,
                BulgeEnthalpies,
                Interior,
                InteriorEnthalpies,
                MLParamsSection,
                NinioSection,
                MiscSection,
                HairpinSequences,
            );
        }
        Ok(())
    }
}

impl PairType {
    fn of_index(p: usize) -> Option<PairType> {
        use PairType::*;
        match p {
            1 => Some(CG),
            2 => Some(GC),
            3 => Some(GU),
            4 => Some(UG),
            5 => Some(AU),
            6 => Some(UA),
            7 => Some(NS),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::Base;

    #[test]
    fn test_parse_stack() {
        let dummy = r#"
# stack
/*  CG    GC    GU    UG    AU    UA    NN          */
  -240  -330  -210  -140  -210  -210  -140    /* CG */
  -330  -340  -250  -150  -220  -240  -150    /* GC */
  -210  -250   130   -50  -140  -130   130    /* GU */
  -140  -150   -50    30   -60  -100    30    /* UG */
  -210  -220  -140   -60  -110   -90   -60    /* AU */
  -210  -240  -130  -100   -90  -130   -90    /* UA */
  -140  -150   130    30   -60   -90   130    /* NN */
"#;

        let tables = EnergyTables::from_reader(Cursor::new(dummy)).unwrap();
        assert_eq!(tables.stack[PairType::CG as usize][PairType::CG as usize], Some(-240));
        assert_eq!(tables.stack[PairType::GC as usize][PairType::CG as usize], Some(-330));
        assert_eq!(tables.stack[PairType::GU as usize][PairType::CG as usize], Some(-210));
    }

    #[test]
    fn test_parse_mismatch() {
        use Base::*;
        use PairType::*;
        let dummy = r#"
# mismatch_hairpin
  -80  -100  -110  -100   -80    /* CG,N */
 -140  -150  -150  -140  -150    /* CG,A */
  -80  -100  -110  -100   -80    /* CG,C */
"#;

        let tables = EnergyTables::from_reader(Cursor::new(dummy)).unwrap();
        assert_eq!(tables.mismatch_hairpin[CG as usize][N as usize][N as usize], Some(-80));
        assert_eq!(tables.mismatch_hairpin[CG as usize][N as usize][A as usize], Some(-100));
        assert_eq!(tables.mismatch_hairpin[CG as usize][A as usize][N as usize], Some(-140));
    }

    #[test]
    fn test_parse_dangle() {
        use Base::*;
        use PairType::*;
        let dummy = r#"
# dangle5
/*   N     A     C     G     U          */
   -10   -50   -30   -20   -10    /* CG */
    -0   -20   -30    -0    -0    /* GC */
"#;

        let tables = EnergyTables::from_reader(Cursor::new(dummy)).unwrap();
        assert_eq!(tables.dangle5[CG as usize][N as usize], Some(-10));
        assert_eq!(tables.dangle5[CG as usize][A as usize], Some(-50));
        assert_eq!(tables.dangle5[GC as usize][C as usize], Some(-30));
    }

    #[test]
    fn test_parse_int11() {
        use Base::*;
        use PairType::*;
        let dummy = r#"
# int11
  90    90    50    50    50    /* CG,CG,N */
  90    90    50    50    50    /* CG,CG,A */
  50    50    50    50    50    /* CG,CG,C */
"#;

        let tables = EnergyTables::from_reader(Cursor::new(dummy)).unwrap();
        assert_eq!(tables.int11[CG as usize][CG as usize][N as usize][N as usize], Some(90));
        assert_eq!(tables.int11[CG as usize][CG as usize][N as usize][C as usize], Some(50));
        assert_eq!(tables.int11[CG as usize][CG as usize][A as usize][A as usize], Some(90));
    }

    #[test]
    fn test_parse_int21() {
        use Base::*;
        use PairType::*;
        let dummy = r#"
# int21
   230   231   232   233   234    /* CG,CG,N,N */
   235   236   237   238   239    /* CG,CG,N,A */
"#;

        let tables = EnergyTables::from_reader(Cursor::new(dummy)).unwrap();
        assert_eq!(tables.int21[CG as usize][CG as usize][N as usize][N as usize][N as usize], Some(230));
        assert_eq!(tables.int21[CG as usize][CG as usize][N as usize][A as usize][C as usize], Some(237));
    }

    #[test]
    fn test_parse_int22() {
        use Base::*;
        use PairType::*;
        let dummy = r#"
# int22
   120   160    20   160    /* CG,CG,A,A,A */
   110   150    20   150    /* CG,CG,A,A,C */
"#;

        let tables = EnergyTables::from_reader(Cursor::new(dummy)).unwrap();
        assert_eq!(tables.int22[CG as usize][CG as usize][A as usize][A as usize][A as usize][A as usize], Some(120));
        assert_eq!(tables.int22[CG as usize][CG as usize][A as usize][A as usize][C as usize][U as usize], Some(150));
    }

    #[test]
    fn test_parse_loops() {
        let dummy = r#"
# hairpin
   INF   INF   INF   540   560   570   540   600   550   640
   650   660   670   680   690   690   700   710   710   720
   720   730   730   740   740   750   750   750   760   760
   770
"#;

        let tables = EnergyTables::from_reader(Cursor::new(dummy)).unwrap();
        assert_eq!(tables.hairpin[0], None);
        assert_eq!(tables.hairpin[2], None);
        assert_eq!(tables.hairpin[3], Some(540));
        assert_eq!(tables.hairpin[29], Some(760));
        assert_eq!(tables.hairpin[30], Some(770));
    }

    #[test]
    fn test_parse_ml_and_misc() {
        let dummy = r#"
# ML_params
/*  cu    cu_dH    cc    cc_dH    ci    ci_dH  */
     0        0   930     3000   -90     -220

# NINIO
/*  m    m_dH     max  */
   60     320     300

# Misc
/* all parameters are pairs of 'energy enthalpy' */
   410    360    50    370    107
"#;

        let tables = EnergyTables::from_reader(Cursor::new(dummy)).unwrap();
        assert_eq!(tables.ml_params.closing_en37, 930);
        assert_eq!(tables.ml_params.intern_en37, -90);
        assert_eq!(tables.ninio.en37, 60);
        assert_eq!(tables.ninio.max, 300);
        assert_eq!(tables.misc.terminal_au_en37, 50);
        assert_eq!(tables.misc.lxc, 107.0);
    }

    #[test]
    fn test_sequence_parsing() {
        let dummy = r#"
# Hexaloops
ACAGUACU     280   -1680
ACAGUGAU     360   -1140

# Tetraloops
CCGAGG     350    -660
CUUCGG     370   -1530

# Triloops
CAACG     680    2370
GUUAC     690    1080
"#;

        let tables = EnergyTables::from_reader(Cursor::new(dummy)).unwrap();
        assert_eq!(tables.hairpin_sequences[&NucleotideVec::try_from("CCGAGG").unwrap()], (350, -660));
        assert_eq!(tables.hairpin_sequences[&NucleotideVec::try_from("CAACG").unwrap()], (680, 2370));
        assert_eq!(tables.hairpin_sequences[&NucleotideVec::try_from("ACAGUACU").unwrap()], (280, -1680));
    }

    #[test]
    fn test_data_line_outside_section() {
        let err = EnergyTables::from_reader(Cursor::new("  -240 -330\n")).unwrap_err();
        assert!(matches!(err, ParamError::Parse(_)));
    }

    #[test]
    fn test_builtin_turner_values() {
        let t = EnergyTables::turner();
        assert_eq!(t.stack[PairType::CG as usize][PairType::CG as usize], Some(-240));
        assert_eq!(t.stack[PairType::GC as usize][PairType::GC as usize], Some(-340));
        assert_eq!(t.stack[PairType::NS as usize][PairType::CG as usize], Some(-140));
        assert_eq!(t.hairpin[3], Some(540));
        assert_eq!(t.hairpin[0], None);
        assert_eq!(t.bulge[1], Some(380));
        assert_eq!(t.interior[4], Some(110));
        assert_eq!(t.misc.terminal_au_en37, 50);
        assert_eq!(t.ml_params.closing_en37, 930);
        assert_eq!(t.hairpin_sequences[&NucleotideVec::try_from("CUUCGG").unwrap()], (370, -1530));
    }

    #[test]
    fn test_builtin_interior_estimates() {
        use Base::A;
        use PairType::*;
        let t = EnergyTables::turner();
        // strong/strong, strong/weak, weak/weak closings
        assert_eq!(t.int11[CG as usize][CG as usize][A as usize][A as usize], Some(90));
        assert_eq!(t.int11[CG as usize][AU as usize][A as usize][A as usize], Some(140));
        assert_eq!(t.int11[AU as usize][AU as usize][A as usize][A as usize], Some(190));
        assert_eq!(t.int21[AU as usize][AU as usize][A as usize][A as usize][A as usize], Some(330));
        assert_eq!(t.int22[GC as usize][UA as usize][A as usize][A as usize][A as usize][A as usize], Some(200));
    }

    #[test]
    fn test_file_overrides_builtin() {
        let mut t = EnergyTables::turner();
        let dummy = "# int11\n  11    12    13    14    15\n";
        t.parse(Cursor::new(dummy)).unwrap();
        use Base::*;
        use PairType::CG;
        assert_eq!(t.int11[CG as usize][CG as usize][N as usize][N as usize], Some(11));
        assert_eq!(t.int11[CG as usize][CG as usize][N as usize][U as usize], Some(15));
        // untouched entries keep the estimate
        assert_eq!(t.int11[CG as usize][CG as usize][A as usize][A as usize], Some(90));
    }
}
