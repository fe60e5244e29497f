use std::fmt;

use mf_energy::ParamError;
use mf_energy::SequenceError;

use crate::SectorKind;

#[derive(Debug)]
pub enum FoldError {
    /// Bad sequence: empty input or characters outside the alphabet.
    InvalidInput(SequenceError),
    /// The triangular index for this length would overflow.
    LengthExceeded(usize),
    /// Parameter set could not be built.
    Param(ParamError),
    /// Backtracking could not reproduce a filled cell. Always a bug in the
    /// recursions or the parameter set, never a user error.
    BacktrackInconsistent {
        i: usize,
        j: usize,
        kind: SectorKind,
        expected: i32,
    },
}

impl fmt::Display for FoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldError::InvalidInput(e) => write!(f, "Invalid input: {}", e),
            FoldError::LengthExceeded(n) => {
                write!(f, "Sequence length {} exceeds the addressable range", n)
            }
            FoldError::Param(e) => write!(f, "{}", e),
            FoldError::BacktrackInconsistent { i, j, kind, expected } => {
                write!(
                    f,
                    "Backtracking failed to reproduce {:?}[{},{}] = {} -- this is a bug",
                    kind, i, j, expected
                )
            }
        }
    }
}

impl std::error::Error for FoldError {}

impl From<SequenceError> for FoldError {
    fn from(e: SequenceError) -> Self {
        FoldError::InvalidInput(e)
    }
}

impl From<ParamError> for FoldError {
    fn from(e: ParamError) -> Self {
        FoldError::Param(e)
    }
}
