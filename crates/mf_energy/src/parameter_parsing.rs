//! Stateful line parsers for the ViennaRNA-style parameter file format.
//!
//! Row and column orders below are fixed by the file format; the counters in
//! each parser track how far into a section the reader has advanced.

use crate::{Base, NucleotideVec};
use crate::PairType;
use crate::energy_tables::{EnergyTables, MLParams, Misc, Ninio, ParamError};

const PARAM_FILE_PAIR_ORDER: [PairType; 7] = [
    PairType::CG,
    PairType::GC,
    PairType::GU,
    PairType::UG,
    PairType::AU,
    PairType::UA,
    PairType::NS,
];

const PARAM_FILE_MM_ORDER: [Base; 5] = [
    Base::N,
    Base::A,
    Base::C,
    Base::G,
    Base::U,
];

// 2x2 interior loop sections carry no nonstandard pair and no N rows.
const PARAM_FILE_PAIR_ORDER_NO_NS: [PairType; 6] = [
    PairType::CG,
    PairType::GC,
    PairType::GU,
    PairType::UG,
    PairType::AU,
    PairType::UA,
];

const PARAM_FILE_MM_ORDER_NO_N: [Base; 4] = [
    Base::A,
    Base::C,
    Base::G,
    Base::U,
];

pub trait SectionParser {
    fn parse_line(&mut self, line: &str, tables: &mut EnergyTables) -> Result<(), ParamError>;
}

fn parse_token(section: &'static str, line: &str, token: &str) -> Result<Option<i32>, ParamError> {
    if token == "INF" {
        return Ok(None);
    }
    token.parse::<i32>().map(Some).map_err(|_| {
        ParamError::Parse(format!(
            "Failed to parse integer in {} while parsing line {:?}, token {:?}",
            section, line, token
        ))
    })
}

macro_rules! impl_stack_parser {
    ($struct_name:ident, $field:ident) => {
        #[derive(Default, Debug)]
        pub struct $struct_name {
            outer: usize,
        }

        impl SectionParser for $struct_name {
            fn parse_line(&mut self, line: &str, tables: &mut EnergyTables) -> Result<(), ParamError> {
                for (inner, token) in line
                    .split_whitespace()
                    .take(PARAM_FILE_PAIR_ORDER.len())
                    .enumerate()
                {
                    let val = parse_token(stringify!($field), line, token)?;
                    let i1 = PARAM_FILE_PAIR_ORDER[self.outer] as usize;
                    let i2 = PARAM_FILE_PAIR_ORDER[inner] as usize;
                    tables.$field[i1][i2] = val;
                }
                self.outer += 1;
                Ok(())
            }
        }
    };
}

impl_stack_parser!(Stack, stack);
impl_stack_parser!(StackEnthalpies, stack_enthalpies);

macro_rules! impl_mismatch_parser {
    ($struct_name:ident, $field:ident) => {
        #[derive(Default, Debug)]
        pub struct $struct_name {
            outer: usize,
            m5: usize,
        }

        impl SectionParser for $struct_name {
            fn parse_line(&mut self, line: &str, tables: &mut EnergyTables) -> Result<(), ParamError> {
                for (m3, token) in line.split_whitespace()
                    .take(PARAM_FILE_MM_ORDER.len()).enumerate()
                {
                    let val = parse_token(stringify!($field), line, token)?;
                    let i1 = PARAM_FILE_PAIR_ORDER[self.outer] as usize;
                    let i2 = PARAM_FILE_MM_ORDER[self.m5] as usize;
                    let i3 = PARAM_FILE_MM_ORDER[m3] as usize;
                    tables.$field[i1][i2][i3] = val;
                }
                self.m5 += 1;
                if self.m5 == PARAM_FILE_MM_ORDER.len() {
                    self.outer += 1;
                    self.m5 = 0;
                }
                Ok(())
            }
        }
    };
}

impl_mismatch_parser!(MismatchHairpin, mismatch_hairpin);
impl_mismatch_parser!(MismatchHairpinEnthalpies, mismatch_hairpin_enthalpies);
impl_mismatch_parser!(MismatchInterior, mismatch_interior);
impl_mismatch_parser!(MismatchInteriorEnthalpies, mismatch_interior_enthalpies);
impl_mismatch_parser!(MismatchInterior1n, mismatch_interior_1n);
impl_mismatch_parser!(MismatchInterior1nEnthalpies, mismatch_interior_1n_enthalpies);
impl_mismatch_parser!(MismatchInterior23, mismatch_interior_23);
impl_mismatch_parser!(MismatchInterior23Enthalpies, mismatch_interior_23_enthalpies);
impl_mismatch_parser!(MismatchMulti, mismatch_multi);
impl_mismatch_parser!(MismatchMultiEnthalpies, mismatch_multi_enthalpies);
impl_mismatch_parser!(MismatchExterior, mismatch_exterior);
impl_mismatch_parser!(MismatchExteriorEnthalpies, mismatch_exterior_enthalpies);

macro_rules! impl_dangle_parser {
    ($struct_name:ident, $field:ident) => {
        #[derive(Default, Debug)]
        pub struct $struct_name {
            outer: usize,
        }

        impl SectionParser for $struct_name {
            fn parse_line(&mut self, line: &str, tables: &mut EnergyTables) -> Result<(), ParamError> {
                for (m5, token) in line.split_whitespace()
                    .take(PARAM_FILE_MM_ORDER.len()).enumerate()
                {
                    let val = parse_token(stringify!($field), line, token)?;
                    let i1 = PARAM_FILE_PAIR_ORDER[self.outer] as usize;
                    let i2 = PARAM_FILE_MM_ORDER[m5] as usize;
                    tables.$field[i1][i2] = val;
                }
                self.outer += 1;
                Ok(())
            }
        }
    };
}

impl_dangle_parser!(Dangle5, dangle5);
impl_dangle_parser!(Dangle5Enthalpies, dangle5_enthalpies);
impl_dangle_parser!(Dangle3, dangle3);
impl_dangle_parser!(Dangle3Enthalpies, dangle3_enthalpies);

macro_rules! impl_int11_parser {
    ($struct_name:ident, $field:ident) => {
        #[derive(Default, Debug)]
        pub struct $struct_name {
            outer: usize,
            inner: usize,
            mm5: usize,
        }

        impl SectionParser for $struct_name {
            fn parse_line(&mut self, line: &str, tables: &mut EnergyTables) -> Result<(), ParamError> {
                for (mm3, token) in line.split_whitespace()
                    .take(PARAM_FILE_MM_ORDER.len()).enumerate()
                {
                    let val = parse_token(stringify!($field), line, token)?;
                    let i1 = PARAM_FILE_PAIR_ORDER[self.outer] as usize;
                    let i2 = PARAM_FILE_PAIR_ORDER[self.inner] as usize;
                    let i3 = PARAM_FILE_MM_ORDER[self.mm5] as usize;
                    let i4 = PARAM_FILE_MM_ORDER[mm3] as usize;
                    tables.$field[i1][i2][i3][i4] = val;
                }

                self.mm5 += 1;
                if self.mm5 == PARAM_FILE_MM_ORDER.len() {
                    self.mm5 = 0;
                    self.inner += 1;
                }
                if self.inner == PARAM_FILE_PAIR_ORDER.len() {
                    self.outer += 1;
                    self.inner = 0;
                }
                Ok(())
            }
        }
    };
}

impl_int11_parser!(Int11, int11);
impl_int11_parser!(Int11Enthalpies, int11_enthalpies);

macro_rules! impl_int21_parser {
    ($struct_name:ident, $field:ident) => {
        #[derive(Default, Debug)]
        pub struct $struct_name {
            outer: usize,
            inner: usize,
            mm55: usize,
            mm53: usize,
        }

        impl SectionParser for $struct_name {
            fn parse_line(&mut self, line: &str, tables: &mut EnergyTables) -> Result<(), ParamError> {
                for (mm3, token) in line.split_whitespace()
                    .take(PARAM_FILE_MM_ORDER.len()).enumerate()
                {
                    let val = parse_token(stringify!($field), line, token)?;
                    let i1 = PARAM_FILE_PAIR_ORDER[self.outer] as usize;
                    let i2 = PARAM_FILE_PAIR_ORDER[self.inner] as usize;
                    let i3 = PARAM_FILE_MM_ORDER[self.mm55] as usize;
                    let i4 = PARAM_FILE_MM_ORDER[self.mm53] as usize;
                    let i5 = PARAM_FILE_MM_ORDER[mm3] as usize;
                    tables.$field[i1][i2][i3][i4][i5] = val;
                }
                self.mm53 += 1;
                if self.mm53 == PARAM_FILE_MM_ORDER.len() {
                    self.mm55 += 1;
                    self.mm53 = 0;
                }
                if self.mm55 == PARAM_FILE_MM_ORDER.len() {
                    self.mm55 = 0;
                    self.inner += 1;
                }
                if self.inner == PARAM_FILE_PAIR_ORDER.len() {
                    self.outer += 1;
                    self.inner = 0;
                }
                Ok(())
            }
        }
    };
}

impl_int21_parser!(Int21, int21);
impl_int21_parser!(Int21Enthalpies, int21_enthalpies);

macro_rules! impl_int22_parser {
    ($struct_name:ident, $field:ident) => {
        #[derive(Default, Debug)]
        pub struct $struct_name {
            outer: usize,
            inner: usize,
            mm55: usize,
            mm53: usize,
            mm35: usize,
        }

        impl SectionParser for $struct_name {
            fn parse_line(&mut self, line: &str, tables: &mut EnergyTables) -> Result<(), ParamError> {
                for (mm33, token) in line.split_whitespace()
                    .take(PARAM_FILE_MM_ORDER_NO_N.len()).enumerate()
                {
                    let val = parse_token(stringify!($field), line, token)?;
                    let i1 = PARAM_FILE_PAIR_ORDER_NO_NS[self.outer] as usize;
                    let i2 = PARAM_FILE_PAIR_ORDER_NO_NS[self.inner] as usize;
                    let i3 = PARAM_FILE_MM_ORDER_NO_N[self.mm55] as usize;
                    let i4 = PARAM_FILE_MM_ORDER_NO_N[self.mm53] as usize;
                    let i5 = PARAM_FILE_MM_ORDER_NO_N[self.mm35] as usize;
                    let i6 = PARAM_FILE_MM_ORDER_NO_N[mm33] as usize;
                    tables.$field[i1][i2][i3][i4][i5][i6] = val;
                }
                self.mm35 += 1;
                if self.mm35 == PARAM_FILE_MM_ORDER_NO_N.len() {
                    self.mm53 += 1;
                    self.mm35 = 0;
                }
                if self.mm53 == PARAM_FILE_MM_ORDER_NO_N.len() {
                    self.mm55 += 1;
                    self.mm53 = 0;
                }
                if self.mm55 == PARAM_FILE_MM_ORDER_NO_N.len() {
                    self.mm55 = 0;
                    self.inner += 1;
                }
                if self.inner == PARAM_FILE_PAIR_ORDER_NO_NS.len() {
                    self.outer += 1;
                    self.inner = 0;
                }
                Ok(())
            }
        }
    };
}

impl_int22_parser!(Int22, int22);
impl_int22_parser!(Int22Enthalpies, int22_enthalpies);

macro_rules! impl_loop_parser {
    ($struct_name:ident, $field:ident) => {
        #[derive(Default, Debug)]
        pub struct $struct_name {
            base: usize,
        }

        impl SectionParser for $struct_name {
            fn parse_line(&mut self, line: &str, tables: &mut EnergyTables) -> Result<(), ParamError> {
                let mut idx = 0;
                for token in line.split_whitespace() {
                    let val = parse_token(stringify!($field), line, token)?;
                    if self.base + idx > 30 {
                        return Err(ParamError::InvalidLength(stringify!($field), 31, self.base + idx + 1));
                    }
                    tables.$field[self.base + idx] = val;
                    idx += 1;
                }
                self.base += idx;
                Ok(())
            }
        }
    };
}

impl_loop_parser!(Hairpin, hairpin);
impl_loop_parser!(HairpinEnthalpies, hairpin_enthalpies);
impl_loop_parser!(Bulge, bulge);
impl_loop_parser!(BulgeEnthalpies, bulge_enthalpies);
impl_loop_parser!(Interior, interior);
impl_loop_parser!(InteriorEnthalpies, interior_enthalpies);

macro_rules! impl_scalar_parser {
    ($struct_name:ident, $build:expr, $count:expr, $assign:expr) => {
        #[derive(Default, Debug)]
        pub struct $struct_name {
            buffer: Vec<i32>,
        }

        impl SectionParser for $struct_name {
            fn parse_line(&mut self, line: &str, tables: &mut EnergyTables) -> Result<(), ParamError> {
                for token in line.split_whitespace() {
                    match parse_token(stringify!($struct_name), line, token)? {
                        Some(v) => self.buffer.push(v),
                        None => self.buffer.push(crate::energy_tables::INF),
                    }
                }
                if self.buffer.len() >= $count {
                    let built = ($build)(&self.buffer[..$count])?;
                    ($assign)(tables, built);
                }
                Ok(())
            }
        }
    };
}

impl_scalar_parser!(
    MLParamsSection,
    MLParams::from_param_slice,
    6,
    |t: &mut EnergyTables, v| t.ml_params = v
);
impl_scalar_parser!(
    NinioSection,
    Ninio::from_param_slice,
    3,
    |t: &mut EnergyTables, v| t.ninio = v
);

#[derive(Default, Debug)]
pub struct MiscSection {
    ints: Vec<i32>,
    lxc: Option<f64>,
}

impl SectionParser for MiscSection {
    fn parse_line(&mut self, line: &str, tables: &mut EnergyTables) -> Result<(), ParamError> {
        for token in line.split_whitespace() {
            if self.ints.len() < 4 {
                match parse_token("Misc", line, token)? {
                    Some(v) => self.ints.push(v),
                    None => self.ints.push(crate::energy_tables::INF),
                }
            } else if self.lxc.is_none() {
                self.lxc = Some(token.parse::<f64>().map_err(|_| {
                    ParamError::Parse(format!("Failed to parse lxc token {:?}", token))
                })?);
            }
        }
        if self.ints.len() >= 4 {
            tables.misc = Misc::from_tokens(&self.ints, self.lxc)?;
        }
        Ok(())
    }
}

#[derive(Default, Debug)]
pub struct HairpinSequences {}

impl SectionParser for HairpinSequences {
    fn parse_line(&mut self, line: &str, tables: &mut EnergyTables) -> Result<(), ParamError> {
        let mut parts = line.split_whitespace();
        if let (Some(seq), Some(g), Some(h)) = (parts.next(), parts.next(), parts.next()) {
            let g = parse_token("hairpin_sequences", line, g)?
                .ok_or(ParamError::Parse(format!("INF motif energy in {:?}", line)))?;
            let h = parse_token("hairpin_sequences", line, h)?
                .ok_or(ParamError::Parse(format!("INF motif enthalpy in {:?}", line)))?;
            let key = NucleotideVec::try_from(seq)
                .map_err(|e| ParamError::Parse(format!("{} in {:?}", e, line)))?;
            tables.hairpin_sequences.insert(key, (g, h));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ParamFileSection {
    None,
    Stack(Stack),
    StackEnthalpies(StackEnthalpies),
    MismatchHairpin(MismatchHairpin),
    MismatchHairpinEnthalpies(MismatchHairpinEnthalpies),
    MismatchInterior(MismatchInterior),
    MismatchInteriorEnthalpies(MismatchInteriorEnthalpies),
    MismatchInterior1n(MismatchInterior1n),
    MismatchInterior1nEnthalpies(MismatchInterior1nEnthalpies),
    MismatchInterior23(MismatchInterior23),
    MismatchInterior23Enthalpies(MismatchInterior23Enthalpies),
    MismatchMulti(MismatchMulti),
    MismatchMultiEnthalpies(MismatchMultiEnthalpies),
    MismatchExterior(MismatchExterior),
    MismatchExteriorEnthalpies(MismatchExteriorEnthalpies),
    Dangle5(Dangle5),
    Dangle5Enthalpies(Dangle5Enthalpies),
    Dangle3(Dangle3),
    Dangle3Enthalpies(Dangle3Enthalpies),
    Int11(Int11),
    Int11Enthalpies(Int11Enthalpies),
    Int21(Int21),
    Int21Enthalpies(Int21Enthalpies),
    Int22(Int22),
    Int22Enthalpies(Int22Enthalpies),
    Hairpin(Hairpin),
    HairpinEnthalpies(HairpinEnthalpies),
    Bulge(Bulge),
    BulgeEnthalpies(BulgeEnthalpies),
    Interior(Interior),
    InteriorEnthalpies(InteriorEnthalpies),
    MLParamsSection(MLParamsSection),
    NinioSection(NinioSection),
    MiscSection(MiscSection),
    HairpinSequences(HairpinSequences),
}

macro_rules! section_match {
    ($s:expr, $($field:literal, $struct:ident),+ $(,)?) => {
        match $s {
            $(
                $field => Ok(ParamFileSection::$struct($struct::default())),
            )+
            _ => Err(()),
        }
    };
}

impl TryFrom<&str> for ParamFileSection {
    type Error = ();

    fn try_from(s: &str) -> Result<Self, ()> {
        let key = s.trim();
        section_match!(key,
            "stack", Stack,
            "stack_enthalpies", StackEnthalpies,
            "mismatch_hairpin", MismatchHairpin,
            "mismatch_hairpin_enthalpies", MismatchHairpinEnthalpies,
            "mismatch_interior", MismatchInterior,
            "mismatch_interior_enthalpies", MismatchInteriorEnthalpies,
            "mismatch_interior_1n", MismatchInterior1n,
            "mismatch_interior_1n_enthalpies", MismatchInterior1nEnthalpies,
            "mismatch_interior_23", MismatchInterior23,
            "mismatch_interior_23_enthalpies", MismatchInterior23Enthalpies,
            "mismatch_multi", MismatchMulti,
            "mismatch_multi_enthalpies", MismatchMultiEnthalpies,
            "mismatch_exterior", MismatchExterior,
            "mismatch_exterior_enthalpies", MismatchExteriorEnthalpies,
            "dangle5", Dangle5,
            "dangle5_enthalpies", Dangle5Enthalpies,
            "dangle3", Dangle3,
            "dangle3_enthalpies", Dangle3Enthalpies,
            "int11", Int11,
            "int11_enthalpies", Int11Enthalpies,
            "int21", Int21,
            "int21_enthalpies", Int21Enthalpies,
            "int22", Int22,
            "int22_enthalpies", Int22Enthalpies,
            "hairpin", Hairpin,
            "hairpin_enthalpies", HairpinEnthalpies,
            "bulge", Bulge,
            "bulge_enthalpies", BulgeEnthalpies,
            "interior", Interior,
            "interior_enthalpies", InteriorEnthalpies,
            "ML_params", MLParamsSection,
            "NINIO", NinioSection,
            "Misc", MiscSection,
            "Hexaloops", HairpinSequences,
            "Tetraloops", HairpinSequences,
            "Triloops", HairpinSequences,
        )
    }
}
