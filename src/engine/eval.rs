use crate::cnf::incidence::{IncidenceTable, Polarity};

use super::value::{FormulaValue, VarValue};

#[derive(Debug, Clone, Copy, Default)]
struct ClauseTally {
    satisfied: bool,
    open: bool,
}

/// Recomputes the formula value from scratch. `assignment[v - 1]` is the
/// value of variable `v`.
///
/// Each clause folds over the variables that occur in it: one true literal
/// satisfies it, otherwise one unassigned literal keeps it open, otherwise
/// every literal is false and it is falsified. Absent variables never touch
/// the tally.
pub fn evaluate(table: &IncidenceTable, assignment: &[VarValue]) -> FormulaValue {
    debug_assert_eq!(assignment.len(), table.num_vars() as usize);

    let mut tallies = vec![ClauseTally::default(); table.num_clauses()];
    for (var, row) in table.rows() {
        let value = assignment[var as usize - 1];
        for (tally, &polarity) in tallies.iter_mut().zip(row) {
            match contribution(value, polarity) {
                Contribution::Absent => {}
                Contribution::True => tally.satisfied = true,
                Contribution::Open => tally.open = true,
                Contribution::False => {}
            }
        }
    }

    let mut all_sat = true;
    for tally in &tallies {
        if tally.satisfied {
            continue;
        }
        if !tally.open {
            return FormulaValue::Falsified;
        }
        all_sat = false;
    }
    if all_sat {
        FormulaValue::Satisfied
    } else {
        FormulaValue::Undetermined
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contribution {
    Absent,
    True,
    Open,
    False,
}

fn contribution(value: VarValue, polarity: Polarity) -> Contribution {
    match (polarity, value) {
        (Polarity::Absent, _) => Contribution::Absent,
        (_, VarValue::Unassigned) => Contribution::Open,
        (Polarity::Positive, VarValue::True) | (Polarity::Negative, VarValue::False) => {
            Contribution::True
        }
        _ => Contribution::False,
    }
}
