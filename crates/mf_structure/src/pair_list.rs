use std::convert::TryFrom;

use crate::DotBracket;
use crate::DotBracketVec;
use crate::PairTable;
use crate::StructureError;

const HELIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// An ordered list of base pairs, 1-based as produced by backtracking.
///
/// An entry with `i == j` marks a single G of a G-quadruplex run rather
/// than a pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairList(pub Vec<(usize, usize)>);

impl PairList {
    pub fn new() -> Self {
        PairList(Vec::new())
    }

    pub fn push(&mut self, i: usize, j: usize) {
        debug_assert!(i <= j, "pairs are stored with i <= j");
        self.0.push((i, j));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(usize, usize)> {
        self.0.iter()
    }

    pub fn to_dotbracket(&self, n: usize) -> DotBracketVec {
        let mut out = vec![DotBracket::Unpaired; n];
        for &(i, j) in &self.0 {
            if i == j {
                out[i - 1] = DotBracket::Gquad;
            } else {
                out[i - 1] = DotBracket::Open;
                out[j - 1] = DotBracket::Close;
            }
        }
        DotBracketVec(out)
    }

    /// Letter-encoded rendering: every helix gets one letter from a rotating
    /// alphabet, and pairs stacking directly onto an already-lettered pair
    /// inherit its letter. Assignment is deterministic in discovery order.
    pub fn to_letters(&self, n: usize) -> String {
        let mut out = vec![' '; n];
        let mut helices = 0usize;

        for &(i, j) in &self.0 {
            if i == j {
                out[i - 1] = '+';
                continue;
            }
            if i > 1 && j < n && out[i - 2] != ' ' && out[j] == out[i - 2] {
                out[i - 1] = out[i - 2];
                out[j - 1] = out[i - 2];
                continue;
            }
            if out[i] != ' ' && j >= 2 && out[j - 2] == out[i] {
                out[i - 1] = out[i];
                out[j - 1] = out[i];
                continue;
            }
            let letter = HELIX_ALPHABET[helices % HELIX_ALPHABET.len()] as char;
            helices += 1;
            out[i - 1] = letter;
            out[j - 1] = letter;
        }
        out.into_iter().collect()
    }
}

impl TryFrom<&PairList> for PairTable {
    type Error = StructureError;

    fn try_from(pl: &PairList) -> Result<Self, Self::Error> {
        let n = pl.iter().map(|&(_, j)| j).max().unwrap_or(0);
        let mut table = vec![None; n];
        for &(i, j) in pl.iter() {
            if i == j {
                continue; // G-quadruplex marks carry no partner
            }
            if table[i - 1].is_some() {
                return Err(StructureError::ConflictingPair(i - 1));
            }
            if table[j - 1].is_some() {
                return Err(StructureError::ConflictingPair(j - 1));
            }
            table[i - 1] = Some(j - 1);
            table[j - 1] = Some(i - 1);
        }
        Ok(PairTable(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_list_to_dotbracket() {
        let mut pl = PairList::new();
        pl.push(1, 6);
        pl.push(2, 5);
        assert_eq!(format!("{}", pl.to_dotbracket(7)), "((..)).");
    }

    #[test]
    fn test_pair_list_gquad_marks() {
        let mut pl = PairList::new();
        pl.push(2, 2);
        pl.push(3, 3);
        assert_eq!(format!("{}", pl.to_dotbracket(4)), ".++.");
    }

    #[test]
    fn test_pair_list_to_letters_single_helix() {
        let mut pl = PairList::new();
        pl.push(1, 8);
        pl.push(2, 7);
        pl.push(3, 6);
        assert_eq!(pl.to_letters(8), "AAA  AAA");
    }

    #[test]
    fn test_pair_list_to_letters_two_helices() {
        // two hairpins, discovery order fixes A then B
        let mut pl = PairList::new();
        pl.push(1, 6);
        pl.push(2, 5);
        pl.push(7, 12);
        pl.push(8, 11);
        assert_eq!(pl.to_letters(12), "AA  AABB  BB");
    }

    #[test]
    fn test_pair_table_from_pair_list() {
        let mut pl = PairList::new();
        pl.push(1, 6);
        pl.push(2, 5);
        let pt = PairTable::try_from(&pl).unwrap();
        assert_eq!(pt[0], Some(5));
        assert_eq!(pt[4], Some(1));
        assert_eq!(pt[2], None);
    }

    #[test]
    fn test_pair_table_from_conflicting_list() {
        let mut pl = PairList::new();
        pl.push(1, 6);
        pl.push(1, 5);
        assert!(PairTable::try_from(&pl).is_err());
    }
}
