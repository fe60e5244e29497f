/// FoldError.
mod error;

/// Model options: temperature, dangle model, recursion toggles.
mod options;

/// Shared triangular matrix layout.
mod indexer;

/// Hard and soft constraints, consulted by fill and backtrack alike.
mod constraints;

/// G-quadruplex layer: candidate matrix and pattern recovery.
mod gquad;

/// The folding context: one sequence, one set of matrices.
mod context;

/// Matrix fill for linear folds.
mod fill;

/// The circular closure on top of the linear fill.
mod circular;

/// Structure recovery from filled matrices.
mod backtrack;

/// Independent re-evaluation of a finished structure, loop by loop.
mod eval;

pub use error::*;
pub use options::*;
pub use indexer::*;
pub use constraints::*;
pub use context::*;
pub use backtrack::SectorKind;
pub use eval::*;

use mf_energy::ScaledParams;

/// Fold a sequence into its minimum free energy structure.
///
/// Returns the energy in kcal/mol and the dot-bracket string.
pub fn fold(sequence: &str, options: &FoldOptions) -> Result<(f32, String), FoldError> {
    let params = options.scaled_params()?;
    let result = fold_with_params(sequence, options, &params, &Constraints::default(), false)?;
    Ok((result.energy_kcal(), result.structure.to_string()))
}

/// Fold a circular sequence: position `n` is adjacent to position 1.
pub fn fold_circular(sequence: &str, options: &FoldOptions) -> Result<(f32, String), FoldError> {
    let params = options.scaled_params()?;
    let result = fold_with_params(sequence, options, &params, &Constraints::default(), true)?;
    Ok((result.energy_kcal(), result.structure.to_string()))
}

/// Fold with a caller-provided parameter set and constraints. The parameter
/// set is shared read-only; everything mutable lives in the per-call context.
pub fn fold_with_params(
    sequence: &str,
    options: &FoldOptions,
    params: &ScaledParams,
    constraints: &Constraints,
    circular: bool,
) -> Result<FoldResult, FoldError> {
    let mut ctx = FoldContext::new(sequence, params, options.clone(), constraints, circular)?;
    ctx.fill();
    ctx.backtrack()?;
    let result = ctx.into_result();
    if result.energy >= mf_energy::INF {
        log::warn!("no feasible structure under the given constraints");
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_energy::basify;
    use mf_energy::INF;
    use mf_structure::PairTable;

    fn fold37(seq: &str) -> (i32, String) {
        let params = ScaledParams::turner37();
        let r = fold_with_params(seq, &FoldOptions::default(), &params, &Constraints::default(), false)
            .unwrap();
        (r.energy, r.structure.to_string())
    }

    fn fold_opts(seq: &str, opts: &FoldOptions, circular: bool) -> FoldResult {
        let params = opts.scaled_params().unwrap();
        fold_with_params(seq, opts, &params, &Constraints::default(), circular).unwrap()
    }

    /// The reported minimum must equal the independently re-evaluated loop
    /// sum of the backtracked structure.
    fn assert_roundtrip(seq: &str, opts: &FoldOptions) {
        let params = opts.scaled_params().unwrap();
        let r = fold_with_params(seq, opts, &params, &Constraints::default(), false).unwrap();
        let pt = PairTable::try_from(&r.structure).expect("balanced structure");
        let eval = energy_of_structure(&basify(seq), &pt, &params, opts.dangles, opts.special_hairpins);
        assert_eq!(r.energy, eval, "fold vs re-evaluation mismatch for {}", seq);
    }

    #[test]
    fn test_too_short_to_pair() {
        assert_eq!(fold37("AAAA"), (0, "....".to_string()));
        assert_eq!(fold37("GCGC"), (0, "....".to_string()));
        assert_eq!(fold37("A"), (0, ".".to_string()));
    }

    #[test]
    fn test_all_a_has_no_structure() {
        let (e, db) = fold37(&"A".repeat(20));
        assert_eq!(e, 0);
        assert_eq!(db, ".".repeat(20));
    }

    #[test]
    fn test_simple_stem_loop() {
        // three GG/CC stacks and a GAAAAC tetraloop-sized hairpin
        assert_eq!(fold37("GGGGAAAACCCC"), (-540, "((((....))))".to_string()));
        // two CC/GG stacks and a CAAAG triloop
        assert_eq!(fold37("CCCAAAGGG"), (-120, "(((...)))".to_string()));
    }

    #[test]
    fn test_tetraloop_motif() {
        // CUUCGG is tabulated: 370 replaces initiation + mismatch (460)
        let (e, db) = fold37("GGCUUCGGCC");
        assert_eq!(db, "(((....)))");
        assert_eq!(e, 370 - 330 - 340);

        let opts = FoldOptions { special_hairpins: false, ..FoldOptions::default() };
        let r = fold_opts("GGCUUCGGCC", &opts, false);
        assert_eq!(r.structure.to_string(), "(((....)))");
        assert_eq!(r.energy, 460 - 330 - 340);
    }

    #[test]
    fn test_two_stems_in_exterior_loop() {
        // the arms cannot cross-hybridize, so both hairpins fold and the
        // 3' dangle of the first stem meets the 5' dangle of the second
        let (e, db) = fold37("GGGAAACCCGCGAAACGC");
        assert_eq!(db, "(((...)))(((...)))");
        assert_eq!(e, (-120 - 130) + (-40 - 30));
    }

    #[test]
    fn test_terminal_au_on_weak_closings() {
        let params = ScaledParams::turner37();
        let mut ctx = FoldContext::new(
            "AGGGAAACCCU",
            &params,
            FoldOptions::default(),
            &Constraints::default(),
            false,
        )
        .unwrap();
        ctx.fill();
        // c[1, 11]: A-U on top of the GGG/CCC helix; the AU penalty is not
        // part of C, it is paid by the exterior stem
        let helix = 540 - 330 - 330 - 210;
        assert_eq!(ctx.c[ctx.at(1, 11)], helix);
        assert_eq!(ctx.f5[11], helix + 50);
    }

    #[test]
    fn test_dangle_model_monotonicity() {
        for seq in ["GGGGAAAACCCC", "GGGAAACCCGCGAAACGC", "GGCUUCGGCC"] {
            let d0 = fold_opts(seq, &FoldOptions { dangles: Dangles::None, ..Default::default() }, false);
            let d2 = fold_opts(seq, &FoldOptions { dangles: Dangles::Both, ..Default::default() }, false);
            assert!(d0.energy >= d2.energy, "{}: {} < {}", seq, d0.energy, d2.energy);
        }
    }

    #[test]
    fn test_strand_reversal_keeps_energy() {
        // GGG/CCC arms swap roles under reversal; both read -120
        let fwd = fold37("GGGAAACCC");
        let rev = fold37("CCCAAAGGG");
        assert_eq!(fwd.0, rev.0);
    }

    #[test]
    fn test_idempotence() {
        let a = fold37("GGGGAAAACCCCAGGGGAAAACCCCA");
        let b = fold37("GGGGAAAACCCCAGGGGAAAACCCCA");
        assert_eq!(a, b);
    }

    #[test]
    fn test_roundtrip_against_loop_evaluation() {
        let sequences = [
            "GGGGAAAACCCC",
            "CCCAAAGGG",
            "GGCUUCGGCC",
            "GGGAAACCCGCGAAACGC",
            // multibranch candidates
            "GGGGGAAGGGGAAAACCCCAAGGGGAAAACCCCAACCCCC",
            "GCGCUUAUAGCUCAGUUGGUUAGAGCACAUCACUCAUAAU",
        ];
        for seq in sequences {
            assert_roundtrip(seq, &FoldOptions::default());
            assert_roundtrip(seq, &FoldOptions { dangles: Dangles::None, ..Default::default() });
            assert_roundtrip(seq, &FoldOptions { special_hairpins: false, ..Default::default() });
        }
    }

    #[test]
    fn test_roundtrip_at_other_temperatures() {
        for t in [15.0, 25.0, 55.0] {
            let opts = FoldOptions { temperature: t, ..Default::default() };
            assert_roundtrip("GGGGAAAACCCCAGGGGAAAACCCCA", &opts);
        }
    }

    #[test]
    fn test_structures_are_balanced_and_noncrossing() {
        for seq in ["GGGGAAAACCCC", "GGGGGAAGGGGAAAACCCCAAGGGGAAAACCCCAACCCCC"] {
            let (_, db) = fold37(seq);
            // dot-bracket parsing rejects unbalanced strings outright
            let pt = PairTable::try_from(db.as_str()).unwrap();
            assert!(pt.is_well_formed(0, pt.len()));
        }
    }

    #[test]
    fn test_split_and_coaxial_models_run() {
        for dangles in [Dangles::Split, Dangles::Coaxial] {
            let opts = FoldOptions { dangles, ..Default::default() };
            let a = fold_opts("GGGAAACCCGCGAAACGC", &opts, false);
            let b = fold_opts("GGGAAACCCGCGAAACGC", &opts, false);
            assert_eq!(a.energy, b.energy);
            assert_eq!(a.structure, b.structure);
            assert!(PairTable::try_from(&a.structure).is_ok());
            assert!(a.energy <= 0);
        }
    }

    #[test]
    fn test_no_lonely_pairs_invariant() {
        for seq in ["GGGGAAAACCCC", "GGGAAACCCGCGAAACGC", "GAAAAAAC"] {
            let opts = FoldOptions { no_lonely_pairs: true, ..Default::default() };
            let r = fold_opts(seq, &opts, false);
            let pairs: std::collections::HashSet<_> = r.pairs.iter().copied().collect();
            for &(i, j) in r.pairs.iter() {
                let stacked_inside = pairs.contains(&(i + 1, j - 1));
                let stacked_outside = i > 1 && pairs.contains(&(i - 1, j + 1));
                assert!(stacked_inside || stacked_outside, "lonely pair ({}, {}) in {}", i, j, seq);
            }
            let plain = fold_opts(seq, &FoldOptions::default(), false);
            assert!(r.energy >= plain.energy);
        }
    }

    #[test]
    fn test_no_gu_closure() {
        let params = ScaledParams::turner37();
        let fill = |no_gu: bool| {
            let opts = FoldOptions { no_gu_closure: no_gu, ..Default::default() };
            let mut ctx =
                FoldContext::new("AGAAAUU", &params, opts, &Constraints::default(), false).unwrap();
            ctx.fill();
            ctx
        };

        let plain = fill(false);
        // G-U closed triloop: initiation + terminal AU
        assert_eq!(plain.c[plain.at(2, 6)], 540 + 50);
        // A-U closing: min(hairpin, stack onto the G-U pair)
        assert_eq!(plain.c[plain.at(1, 7)], (540 + 50 - 60).min(540));

        let strict = fill(true);
        // the wobble pair may no longer close its hairpin
        assert_eq!(strict.c[strict.at(2, 6)], INF);
        assert_eq!(strict.c[strict.at(1, 7)], 540);
    }

    #[test]
    fn test_circular_wrap_hairpin() {
        let opts = FoldOptions::default();
        let r = fold_opts("GGGGGGAAACCCCCCAAA", &opts, true);
        assert_eq!(r.energy, -1110 + 540);
        assert_eq!(r.structure.to_string(), "((((((...))))))...");
    }

    #[test]
    fn test_circular_wrap_interior() {
        let opts = FoldOptions::default();
        let r = fold_opts("GGGGAAACCCCAGGGGAAACCCCA", &opts, true);
        assert_eq!(r.energy, -450 - 450 + 90);
        assert_eq!(r.structure.to_string(), "((((...)))).((((...)))).");
    }

    #[test]
    fn test_circular_open_chain_beats_strained_folds() {
        // the only helix would leave too little room for the wrap loop
        let opts = FoldOptions::default();
        let r = fold_opts("GGGGAAAACCCC", &opts, true);
        assert_eq!(r.energy, 0);
        assert_eq!(r.structure.to_string(), "............");
    }

    #[test]
    fn test_circular_is_no_better_than_linear() {
        for seq in ["GGGGGGAAACCCCCCAAA", "GGGGAAACCCCAGGGGAAACCCCA"] {
            let lin = fold_opts(seq, &FoldOptions::default(), false);
            let circ = fold_opts(seq, &FoldOptions::default(), true);
            assert!(circ.energy >= lin.energy, "{}", seq);
        }
    }

    #[test]
    fn test_gquad_in_exterior_loop() {
        let opts = FoldOptions { with_gquad: true, ..Default::default() };
        let r = fold_opts("AAGGAGGAGGAGGAA", &opts, false);
        assert_eq!(r.energy, -1800);
        assert_eq!(r.structure.to_string(), "..++.++.++.++..");
    }

    #[test]
    fn test_gquad_enclosed_by_pair() {
        let opts = FoldOptions { with_gquad: true, ..Default::default() };
        let params = opts.scaled_params().unwrap();
        let constraints = Constraints {
            hard: Some(HardConstraints::from_string("(..............)").unwrap()),
            soft: SoftConstraints::default(),
        };
        let r = fold_with_params("GAAAGGAGGAGGAGGC", &opts, &params, &constraints, false).unwrap();
        // quadruplex framed like an interior loop under the enforced pair
        assert_eq!(r.energy, -1800 + 110);
        assert_eq!(r.structure.to_string(), "(...++.++.++.++)");
    }

    #[test]
    fn test_hard_constraint_blocks_pairs() {
        let params = ScaledParams::turner37();
        let constraints = Constraints {
            hard: Some(HardConstraints::from_string("xxxx........").unwrap()),
            soft: SoftConstraints::default(),
        };
        let r = fold_with_params("GGGGAAAACCCC", &FoldOptions::default(), &params, &constraints, false)
            .unwrap();
        assert_eq!(r.energy, 0);
        assert_eq!(r.structure.to_string(), "............");
    }

    #[test]
    fn test_hard_constraint_enforces_pair() {
        let params = ScaledParams::turner37();
        let constraints = Constraints {
            hard: Some(HardConstraints::from_string("(..........)").unwrap()),
            soft: SoftConstraints::default(),
        };
        let r = fold_with_params("GGGGAAAACCCC", &FoldOptions::default(), &params, &constraints, false)
            .unwrap();
        assert_eq!(r.energy, -540);
        assert_eq!(r.structure.to_string(), "((((....))))");
    }

    #[test]
    fn test_infeasible_constraints_return_inf() {
        let params = ScaledParams::turner37();
        let constraints = Constraints {
            hard: Some(HardConstraints::from_string("||||||||").unwrap()),
            soft: SoftConstraints::default(),
        };
        let r = fold_with_params("AAAAAAAA", &FoldOptions::default(), &params, &constraints, false)
            .unwrap();
        assert!(r.energy >= INF);
        assert!(r.pairs.is_empty());
        assert!(r.energy_kcal().is_infinite());
    }

    #[test]
    fn test_soft_pair_bonus_steers_the_fold() {
        let params = ScaledParams::turner37();
        let mut paired = rustc_hash::FxHashMap::default();
        paired.insert((1usize, 12usize), -1000);
        let constraints = Constraints {
            hard: None,
            soft: SoftConstraints { unpaired: None, paired: Some(paired) },
        };
        let r = fold_with_params("GGGGAAAACCCC", &FoldOptions::default(), &params, &constraints, false)
            .unwrap();
        assert_eq!(r.energy, -540 - 1000);
        assert_eq!(r.structure.to_string(), "((((....))))");
    }

    #[test]
    fn test_backtrack_inconsistency_is_loud() {
        let params = ScaledParams::turner37();
        let mut ctx = FoldContext::new(
            "GGGGAAAACCCC",
            &params,
            FoldOptions::default(),
            &Constraints::default(),
            false,
        )
        .unwrap();
        ctx.fill();
        ctx.f5[12] -= 1; // sabotage
        let err = ctx.backtrack().unwrap_err();
        assert!(matches!(err, FoldError::BacktrackInconsistent { kind: SectorKind::F5, .. }));
    }

    #[test]
    fn test_public_fold_api() {
        let (e, db) = fold("GGGGAAAACCCC", &FoldOptions::default()).unwrap();
        assert_eq!(db, "((((....))))");
        assert!((e - (-5.40)).abs() < 1e-6);

        let (e, db) = fold_circular("GGGGGGAAACCCCCCAAA", &FoldOptions::default()).unwrap();
        assert_eq!(db, "((((((...))))))...");
        assert!((e - (-5.70)).abs() < 1e-6);
    }

    #[test]
    fn test_letter_structure_rendering() {
        let opts = FoldOptions::default();
        let r = fold_opts("GGGAAACCCGCGAAACGC", &opts, false);
        let letters = r.letters();
        assert_eq!(letters.len(), 18);
        assert!(letters.starts_with("AAA"));
        assert!(letters.contains('B'));
    }
}
