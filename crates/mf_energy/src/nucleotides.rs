use std::fmt;
use std::borrow::Borrow;
use std::ops::Deref;

use log::warn;
use colored::*;

#[derive(Debug)]
pub enum SequenceError {
    Plain(String),
    InvalidChar(char),
    Empty,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::Plain(s) => {
                write!(f, "ERROR: {}", s)
            }
            SequenceError::InvalidChar(c) => {
                write!(f, "Unsupported nucleotide: '{}'", c)
            }
            SequenceError::Empty => {
                write!(f, "Empty sequence")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// `N` sits at index 0 so that `Base as usize` addresses the 5-wide
/// mismatch table axes directly.
#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq)]
pub enum Base { N, A, C, G, U }
pub const BCOUNT: usize = 5; // 5 Base variants for tables.

impl TryFrom<char> for Base {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'U' | 'T' => Ok(Base::U),
            'N' => Ok(Base::N),
            _ => Err(SequenceError::InvalidChar(c)),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Base::N => 'N',
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        };
        write!(f, "{}", c)
    }
}

#[derive(Clone, Hash, Debug, Eq, PartialEq)]
pub struct NucleotideVec(pub Vec<Base>);

impl Deref for NucleotideVec {
    type Target = [Base];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<[Base]> for NucleotideVec {
    fn borrow(&self) -> &[Base] {
        &self.0
    }
}

impl TryFrom<&str> for NucleotideVec {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for c in s.chars() {
            vec.push(Base::try_from(c)?);
        }
        Ok(NucleotideVec(vec))
    }
}

impl fmt::Display for NucleotideVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

impl NucleotideVec {
    pub fn from_lossy(s: &str) -> Self {
        let vec = s.chars().map(|c| {
            Base::try_from(c).unwrap_or_else(|e| {
                warn!("{} {} -> converted to 'N'", "WARNING:".red(), e);
                Base::N
            })
        }).collect();
        NucleotideVec(vec)
    }
}

/// Lossy conversion helper for tests and one-off callers.
pub fn basify(s: &str) -> Vec<Base> {
    NucleotideVec::from_lossy(s).0
}

/// The six canonical pair types plus a nonstandard catch-all, numbered so
/// that index 0 stays free for "no pair" and every type above `UG` pays the
/// terminal AU penalty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PairType { CG = 1, GC, GU, UG, AU, UA, NS }
pub const PCOUNT: usize = 8; // pair axis width incl. the unused 0 slot

const PAIR_LOOKUP: [[Option<PairType>; BCOUNT]; BCOUNT] = {
    use Base::*;
    use PairType::*;
    let mut table = [[None; BCOUNT]; BCOUNT];
    table[C as usize][G as usize] = Some(CG);
    table[G as usize][C as usize] = Some(GC);
    table[G as usize][U as usize] = Some(GU);
    table[U as usize][G as usize] = Some(UG);
    table[A as usize][U as usize] = Some(AU);
    table[U as usize][A as usize] = Some(UA);
    table
};

impl PairType {
    pub fn of(b5: Base, b3: Base) -> Option<PairType> {
        PAIR_LOOKUP[b5 as usize][b3 as usize]
    }

    /// The same pair read from the opposite strand.
    pub fn reversed(&self) -> PairType {
        use PairType::*;
        match self {
            CG => GC,
            GC => CG,
            GU => UG,
            UG => GU,
            AU => UA,
            UA => AU,
            NS => NS,
        }
    }

    /// AU, UA, GU, UG and nonstandard pairs pay the terminal AU penalty.
    pub fn is_weak(&self) -> bool {
        (*self as usize) > PairType::GC as usize
    }

    pub fn is_wobble(&self) -> bool {
        matches!(self, PairType::GU | PairType::UG)
    }
}

impl fmt::Display for PairType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PairType::CG => "C-G",
            PairType::GC => "G-C",
            PairType::GU => "G-U",
            PairType::UG => "U-G",
            PairType::AU => "A-U",
            PairType::UA => "U-A",
            PairType::NS => "N-N",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Base::*;

    #[test]
    fn test_base_from_char() {
        assert_eq!(Base::try_from('a').unwrap(), A);
        assert_eq!(Base::try_from('T').unwrap(), U);
        assert_eq!(Base::try_from('n').unwrap(), N);
        assert!(Base::try_from('&').is_err());
    }

    #[test]
    fn test_nucleotide_vec_roundtrip() {
        let seq = NucleotideVec::try_from("GACU").unwrap();
        assert_eq!(seq.to_string(), "GACU");
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn test_pair_lookup() {
        assert_eq!(PairType::of(G, C), Some(PairType::GC));
        assert_eq!(PairType::of(U, G), Some(PairType::UG));
        assert_eq!(PairType::of(A, A), None);
        assert_eq!(PairType::of(N, U), None);
    }

    #[test]
    fn test_pair_numbering() {
        // the fixed numbering that all parameter tables are laid out in
        assert_eq!(PairType::CG as usize, 1);
        assert_eq!(PairType::GC as usize, 2);
        assert_eq!(PairType::GU as usize, 3);
        assert_eq!(PairType::UG as usize, 4);
        assert_eq!(PairType::AU as usize, 5);
        assert_eq!(PairType::UA as usize, 6);
        assert_eq!(PairType::NS as usize, 7);
    }

    #[test]
    fn test_weak_pairs() {
        assert!(!PairType::CG.is_weak());
        assert!(!PairType::GC.is_weak());
        assert!(PairType::GU.is_weak());
        assert!(PairType::UG.is_weak());
        assert!(PairType::AU.is_weak());
        assert!(PairType::UA.is_weak());
        assert!(PairType::NS.is_weak());
    }

    #[test]
    fn test_reversed() {
        assert_eq!(PairType::CG.reversed(), PairType::GC);
        assert_eq!(PairType::AU.reversed(), PairType::UA);
        assert_eq!(PairType::GU.reversed(), PairType::UG);
        assert_eq!(PairType::NS.reversed(), PairType::NS);
    }
}
