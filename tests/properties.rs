use std::collections::HashSet;

use proptest::collection::vec;
use proptest::prelude::*;

use cnfstate::cnf::cnf::{Cnf, Lit};
use cnfstate::cnf::dimacs::{parse_dimacs_str, to_dimacs};
use cnfstate::engine::{Formula, FormulaValue, VarValue};

fn arb_cnf() -> impl Strategy<Value = Cnf> {
    (1u32..=6).prop_flat_map(|n| {
        vec(vec((1..=n, any::<bool>()), 1..=n as usize), 0..10).prop_map(move |raw| {
            let mut cnf = Cnf::new(n);
            for lits in raw {
                let mut seen = HashSet::new();
                let clause = lits
                    .into_iter()
                    .filter(|&(v, _)| seen.insert(v))
                    .map(|(v, s)| Lit::new(v, s))
                    .collect();
                cnf.add_clause(clause);
            }
            cnf
        })
    })
}

fn arb_cnf_with_moves() -> impl Strategy<Value = (Cnf, Vec<(u32, bool)>)> {
    arb_cnf().prop_flat_map(|cnf| {
        let n = cnf.num_vars;
        (Just(cnf), vec((1..=n, any::<bool>()), 0..24))
    })
}

fn build(cnf: &Cnf) -> Formula {
    Formula::try_from(cnf).expect("generated cnf is well formed")
}

proptest! {
    #[test]
    fn counts_match_header(cnf in arb_cnf()) {
        let f: Formula = to_dimacs(&cnf).parse().expect("formula");
        prop_assert_eq!(f.num_variables(), cnf.num_vars);
        prop_assert_eq!(f.num_clauses(), cnf.num_clauses());
        prop_assert_eq!(parse_dimacs_str(&to_dimacs(&cnf)).expect("parse"), cnf);
    }

    #[test]
    fn value_tracks_reference_evaluation((cnf, moves) in arb_cnf_with_moves()) {
        let mut f = build(&cnf);
        let mut shadow = vec![VarValue::Unassigned; cnf.num_vars as usize];
        prop_assert_eq!(f.value(), cnf.eval_formula_partial(&shadow));

        for (var, b) in moves {
            let slot = var as usize - 1;
            let got = if shadow[slot].is_assigned() {
                shadow[slot] = VarValue::Unassigned;
                f.unset(var)
            } else {
                shadow[slot] = VarValue::from_bool(b);
                f.set(var, VarValue::from_bool(b))
            };
            let expected = cnf.eval_formula_partial(&shadow);
            prop_assert_eq!(got, Ok(expected));
            prop_assert_eq!(f.value(), expected);
            for v in 1..=cnf.num_vars {
                prop_assert_eq!(f.var_value(v), shadow[v as usize - 1]);
            }
        }
        prop_assert_eq!(f.var_value(0), VarValue::Unassigned);
        prop_assert_eq!(f.var_value(cnf.num_vars + 1), VarValue::Unassigned);
    }

    #[test]
    fn unset_undoes_set((cnf, moves) in arb_cnf_with_moves()) {
        let mut f = build(&cnf);
        for (var, b) in moves {
            if f.var_value(var).is_assigned() {
                continue;
            }
            let before = f.value();
            f.set(var, VarValue::from_bool(b)).expect("set");
            prop_assert_eq!(f.unset(var), Ok(before));
            prop_assert_eq!(f.var_value(var), VarValue::Unassigned);
            // keep the assignment growing so later checks start from new states
            f.set(var, VarValue::from_bool(!b)).expect("set");
        }
    }

    #[test]
    fn falsified_is_sticky_under_set((cnf, moves) in arb_cnf_with_moves()) {
        let mut f = build(&cnf);
        let mut falsified = false;
        for (var, b) in moves {
            if f.var_value(var).is_assigned() {
                continue;
            }
            let value = f.set(var, VarValue::from_bool(b)).expect("set");
            if falsified {
                prop_assert_eq!(value, FormulaValue::Falsified);
            }
            falsified = value == FormulaValue::Falsified;
        }
    }

    #[test]
    fn complete_assignment_is_never_undetermined(
        cnf in arb_cnf(),
        bits in vec(any::<bool>(), 6),
    ) {
        let mut f = build(&cnf);
        for var in 1..=cnf.num_vars {
            f.set(var, VarValue::from_bool(bits[var as usize - 1])).expect("set");
        }
        prop_assert!(f.is_complete());
        prop_assert_ne!(f.value(), FormulaValue::Undetermined);
    }
}
