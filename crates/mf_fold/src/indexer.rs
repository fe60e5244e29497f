use crate::FoldError;

/// The largest n with n * (n + 1) / 2 still representable in an i32-sized
/// triangle, i.e. floor(sqrt(i32::MAX)).
const MAX_LENGTH: usize = 46340;

/// Offset table for the shared upper-triangular matrix layout: cell (i, j)
/// with 1 <= i <= j <= n lives at `at(i, j)`. Readers must never swap the
/// arguments; the lower triangle does not exist.
#[derive(Debug, Clone)]
pub struct TriIndex {
    n: usize,
    offsets: Vec<usize>,
}

impl TriIndex {
    pub fn new(n: usize) -> Result<Self, FoldError> {
        if n > MAX_LENGTH {
            return Err(FoldError::LengthExceeded(n));
        }
        let mut offsets = Vec::with_capacity(n + 1);
        for j in 0..=n {
            offsets.push(j * (j.saturating_sub(1)) / 2);
        }
        Ok(TriIndex { n, offsets })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of cells a triangular vector needs (offset 0 stays unused).
    pub fn cells(&self) -> usize {
        self.n * (self.n + 1) / 2 + 1
    }

    #[inline]
    pub fn at(&self, i: usize, j: usize) -> usize {
        debug_assert!(1 <= i && i <= j && j <= self.n, "triangle indices ({}, {})", i, j);
        self.offsets[j] + i
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_unique() {
        let idx = TriIndex::new(6).unwrap();
        let mut seen = std::collections::HashSet::new();
        for j in 1..=6 {
            for i in 1..=j {
                assert!(seen.insert(idx.at(i, j)), "offset collision at ({}, {})", i, j);
                assert!(idx.at(i, j) < idx.cells());
            }
        }
    }

    #[test]
    fn test_known_offsets() {
        let idx = TriIndex::new(5).unwrap();
        assert_eq!(idx.at(1, 1), 1);
        assert_eq!(idx.at(1, 2), 2);
        assert_eq!(idx.at(2, 2), 3);
        assert_eq!(idx.at(1, 5), 11);
        assert_eq!(idx.at(5, 5), 15);
        assert_eq!(idx.cells(), 16);
    }

    #[test]
    fn test_length_limit() {
        assert!(TriIndex::new(46340).is_ok());
        assert!(matches!(TriIndex::new(46341), Err(FoldError::LengthExceeded(_))));
    }

    #[test]
    #[should_panic(expected = "triangle indices")]
    #[cfg(debug_assertions)]
    fn test_swapped_indices_panic() {
        let idx = TriIndex::new(5).unwrap();
        idx.at(4, 2);
    }
}
