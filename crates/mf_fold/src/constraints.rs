use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use mf_structure::StructureError;

/// Per-position and per-pair folding restrictions. Fill and backtrack go
/// through the same predicates, so both stages see an identical search
/// space.
#[derive(Debug, Clone)]
pub struct HardConstraints {
    n: usize,
    /// pairs ruled out entirely, keyed (i, j) with i < j
    forbidden_pairs: FxHashSet<(usize, usize)>,
    /// position may stay unpaired
    up_ok: Vec<bool>,
    /// position must be the 5' partner of some pair
    must_pair_downstream: Vec<bool>,
    /// position must be the 3' partner of some pair
    must_pair_upstream: Vec<bool>,
    /// pairs enforced by a '(' ... ')' constraint, keyed by 5' position
    enforced: FxHashMap<usize, usize>,
}

impl HardConstraints {
    /// No restrictions at all.
    pub fn permissive(n: usize) -> Self {
        HardConstraints {
            n,
            forbidden_pairs: FxHashSet::default(),
            up_ok: vec![true; n + 2],
            must_pair_downstream: vec![false; n + 2],
            must_pair_upstream: vec![false; n + 2],
            enforced: FxHashMap::default(),
        }
    }

    /// Build from a constraint string:
    /// `.` no constraint, `x` unpaired, `|` paired, `<` paired downstream,
    /// `>` paired upstream, `(`/`)` this exact pair.
    pub fn from_string(constraint: &str) -> Result<Self, StructureError> {
        let n = constraint.chars().count();
        let mut hc = HardConstraints::permissive(n);
        let mut stack: Vec<usize> = Vec::new();

        for (k, ch) in constraint.chars().enumerate() {
            let pos = k + 1; // 1-based
            match ch {
                '.' => {}
                'x' => {
                    // forbid every pair involving pos
                    for other in 1..=n {
                        if other < pos {
                            hc.forbidden_pairs.insert((other, pos));
                        } else if other > pos {
                            hc.forbidden_pairs.insert((pos, other));
                        }
                    }
                }
                '|' => {
                    hc.up_ok[pos] = false;
                }
                '<' => {
                    hc.up_ok[pos] = false;
                    hc.must_pair_downstream[pos] = true;
                }
                '>' => {
                    hc.up_ok[pos] = false;
                    hc.must_pair_upstream[pos] = true;
                }
                '(' => {
                    hc.up_ok[pos] = false;
                    stack.push(pos);
                }
                ')' => {
                    hc.up_ok[pos] = false;
                    let open = stack.pop().ok_or(StructureError::UnmatchedClose(k))?;
                    hc.enforced.insert(open, pos);
                }
                c => return Err(StructureError::InvalidToken(c, k)),
            }
        }
        if let Some(open) = stack.pop() {
            return Err(StructureError::UnmatchedOpen(open - 1));
        }
        Ok(hc)
    }

    /// May (i, j) pair, 1 <= i < j <= n?
    pub fn pair_allowed(&self, i: usize, j: usize) -> bool {
        if self.forbidden_pairs.contains(&(i, j)) {
            return false;
        }
        if self.must_pair_downstream[j] || self.must_pair_upstream[i] {
            return false;
        }
        // an enforced pair excludes all pairs crossing or shadowing it
        for (&a, &b) in &self.enforced {
            if (i, j) == (a, b) {
                continue;
            }
            let i_inside = a <= i && i <= b;
            let j_inside = a <= j && j <= b;
            if i_inside != j_inside {
                return false; // crossing
            }
            if i == a || i == b || j == a || j == b {
                return false; // would steal an enforced partner
            }
        }
        true
    }

    /// May position `i` stay unpaired?
    pub fn unpaired_allowed(&self, i: usize) -> bool {
        self.up_ok[i]
    }

    /// May the whole run `[i, i + len)` stay unpaired?
    pub fn unpaired_run_allowed(&self, i: usize, len: usize) -> bool {
        (i..i + len).all(|k| k <= self.n && self.up_ok[k])
    }
}

/// Additive energy adjustments in centi-kcal/mol, consulted at every
/// decomposition point during fill and backtrack.
#[derive(Debug, Clone, Default)]
pub struct SoftConstraints {
    /// energy added when position i (1-based) stays unpaired
    pub unpaired: Option<Vec<i32>>,
    /// energy added when (i, j) pairs
    pub paired: Option<FxHashMap<(usize, usize), i32>>,
}

impl SoftConstraints {
    pub fn unpaired_at(&self, i: usize) -> i32 {
        match &self.unpaired {
            Some(v) => v.get(i).copied().unwrap_or(0),
            None => 0,
        }
    }

    pub fn unpaired_run(&self, i: usize, len: usize) -> i32 {
        match &self.unpaired {
            Some(_) => (i..i + len).map(|k| self.unpaired_at(k)).sum(),
            None => 0,
        }
    }

    pub fn pair(&self, i: usize, j: usize) -> i32 {
        match &self.paired {
            Some(m) => m.get(&(i, j)).copied().unwrap_or(0),
            None => 0,
        }
    }
}

/// Hard and soft constraints bundled the way the folding context takes them.
#[derive(Debug, Clone)]
pub struct Constraints {
    pub hard: Option<HardConstraints>,
    pub soft: SoftConstraints,
}

impl Default for Constraints {
    fn default() -> Self {
        Constraints { hard: None, soft: SoftConstraints::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissive() {
        let hc = HardConstraints::permissive(10);
        assert!(hc.pair_allowed(1, 10));
        assert!(hc.unpaired_allowed(5));
        assert!(hc.unpaired_run_allowed(1, 10));
    }

    #[test]
    fn test_forced_unpaired() {
        let hc = HardConstraints::from_string("..x...").unwrap();
        assert!(!hc.pair_allowed(3, 6));
        assert!(!hc.pair_allowed(1, 3));
        assert!(hc.pair_allowed(1, 6));
        assert!(hc.unpaired_allowed(3));
    }

    #[test]
    fn test_forced_paired() {
        let hc = HardConstraints::from_string(".|....").unwrap();
        assert!(!hc.unpaired_allowed(2));
        assert!(hc.pair_allowed(2, 6));
        assert!(!hc.unpaired_run_allowed(1, 3));
    }

    #[test]
    fn test_pair_direction() {
        let hc = HardConstraints::from_string("<....>").unwrap();
        // 1 pairs downstream, 6 pairs upstream: (1, 6) satisfies both
        assert!(hc.pair_allowed(1, 6));
        assert!(!hc.unpaired_allowed(1));
        assert!(!hc.unpaired_allowed(6));

        let hc = HardConstraints::from_string(">.....").unwrap();
        // 1 must pair upstream, but nothing sits upstream of it
        assert!(!hc.pair_allowed(1, 6));

        let hc = HardConstraints::from_string(".....<").unwrap();
        assert!(!hc.pair_allowed(1, 6));
    }

    #[test]
    fn test_enforced_bracket_pair() {
        let hc = HardConstraints::from_string("(....)").unwrap();
        assert!(hc.pair_allowed(1, 6));
        assert!(!hc.pair_allowed(1, 4)); // steals the enforced partner
        assert!(!hc.pair_allowed(3, 6));
        assert!(hc.pair_allowed(2, 5)); // nested is fine
        assert!(!hc.unpaired_allowed(1));
    }

    #[test]
    fn test_unbalanced_constraint_string() {
        assert!(HardConstraints::from_string("(..").is_err());
        assert!(HardConstraints::from_string("..)").is_err());
    }

    #[test]
    fn test_soft_constraints() {
        let mut sc = SoftConstraints::default();
        assert_eq!(sc.unpaired_run(1, 5), 0);
        assert_eq!(sc.pair(1, 5), 0);
        sc.unpaired = Some(vec![0, 10, 20, 30]);
        assert_eq!(sc.unpaired_at(2), 20);
        assert_eq!(sc.unpaired_run(1, 3), 60);
        let mut m = FxHashMap::default();
        m.insert((1, 5), -40);
        sc.paired = Some(m);
        assert_eq!(sc.pair(1, 5), -40);
        assert_eq!(sc.pair(2, 5), 0);
    }
}
