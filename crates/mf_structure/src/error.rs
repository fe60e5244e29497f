use std::fmt;

#[derive(Debug)]
pub enum StructureError {
    UnmatchedOpen(usize),          // '(' at this position was never closed
    UnmatchedClose(usize),         // ')' at this position has no matching '('
    InvalidToken(char, usize),     // invalid char and position
    ConflictingPair(usize),        // position claimed by two pairs
    InvalidPairTable(usize),       // self-pairing entry
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::UnmatchedOpen(i) => {
                write!(f, "Unmatched '(' at position {}", i)
            }
            StructureError::UnmatchedClose(i) => {
                write!(f, "Unmatched ')' at position {}", i)
            }
            StructureError::InvalidToken(c, i) => {
                write!(f, "Invalid character '{}' in structure at position {}", c, i)
            }
            StructureError::ConflictingPair(i) => {
                write!(f, "Position {} participates in more than one pair", i)
            }
            StructureError::InvalidPairTable(i) => {
                write!(f, "Pair table entry {} pairs with itself", i)
            }
        }
    }
}

impl std::error::Error for StructureError {}
