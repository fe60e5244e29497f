use std::path::PathBuf;

use mf_energy::EnergyTables;
use mf_energy::ScaledParams;

use crate::FoldError;

/// How dangling ends and terminal mismatches enter the recursions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dangles {
    /// No dangling end contributions at all.
    None,
    /// A base may dangle on at most one adjacent stem; the cheaper side wins.
    Split,
    /// Both neighboring bases always contribute (mismatch style).
    #[default]
    Both,
    /// Like `Split`, plus coaxial stacking of adjacent stems.
    Coaxial,
}

impl Dangles {
    pub fn model(&self) -> u8 {
        match self {
            Dangles::None => 0,
            Dangles::Split => 1,
            Dangles::Both => 2,
            Dangles::Coaxial => 3,
        }
    }
}

impl TryFrom<u8> for Dangles {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Dangles::None),
            1 => Ok(Dangles::Split),
            2 => Ok(Dangles::Both),
            3 => Ok(Dangles::Coaxial),
            _ => Err(format!("Unknown dangle model: {}", v)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FoldOptions {
    pub temperature: f64,
    pub dangles: Dangles,
    /// Force every helix to be at least two pairs long.
    pub no_lonely_pairs: bool,
    /// Forbid G-U and U-G pairs from closing hairpin and multibranch loops.
    pub no_gu_closure: bool,
    /// Allow G-quadruplexes as structure elements.
    pub with_gquad: bool,
    /// Use the tabulated tri-/tetra-/hexaloop motif energies.
    pub special_hairpins: bool,
    /// Load parameters from this file instead of the built-in tables.
    pub parameter_file: Option<PathBuf>,
}

impl Default for FoldOptions {
    fn default() -> Self {
        FoldOptions {
            temperature: 37.0,
            dangles: Dangles::Both,
            no_lonely_pairs: false,
            no_gu_closure: false,
            with_gquad: false,
            special_hairpins: true,
            parameter_file: None,
        }
    }
}

impl FoldOptions {
    /// Build the rescaled parameter bundle these options describe.
    pub fn scaled_params(&self) -> Result<ScaledParams, FoldError> {
        let tables = match &self.parameter_file {
            Some(path) => EnergyTables::from_parameter_file(path)?,
            None => EnergyTables::turner(),
        };
        Ok(ScaledParams::new(&tables, self.temperature)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let o = FoldOptions::default();
        assert_eq!(o.temperature, 37.0);
        assert_eq!(o.dangles, Dangles::Both);
        assert!(!o.no_lonely_pairs);
        assert!(!o.no_gu_closure);
        assert!(!o.with_gquad);
        assert!(o.special_hairpins);
    }

    #[test]
    fn test_dangles_from_model_number() {
        assert_eq!(Dangles::try_from(0).unwrap(), Dangles::None);
        assert_eq!(Dangles::try_from(2).unwrap(), Dangles::Both);
        assert_eq!(Dangles::try_from(3).unwrap(), Dangles::Coaxial);
        assert!(Dangles::try_from(4).is_err());
    }
}
