use crate::engine::value::{FormulaValue, VarValue};

/// Signed reference to a 1-based variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lit {
    pub var: u32,
    pub sign: bool,
}

impl Lit {
    pub fn new(var: u32, sign: bool) -> Self {
        Self { var, sign }
    }

    pub fn neg(self) -> Self {
        Self {
            var: self.var,
            sign: !self.sign,
        }
    }

    /// `None` for 0 (the clause terminator) or a magnitude beyond `u32`.
    pub fn from_dimacs(v: i64) -> Option<Self> {
        if v == 0 {
            return None;
        }
        let var = u32::try_from(v.unsigned_abs()).ok()?;
        Some(Self::new(var, v > 0))
    }

    pub fn to_dimacs(self) -> i64 {
        let v = i64::from(self.var);
        if self.sign { v } else { -v }
    }
}

/// Clause-major formula as read from (or written to) DIMACS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cnf {
    pub num_vars: u32,
    pub clauses: Vec<Vec<Lit>>,
}

impl Cnf {
    pub fn new(num_vars: u32) -> Self {
        Self {
            num_vars,
            clauses: Vec::new(),
        }
    }

    pub fn add_clause(&mut self, clause: Vec<Lit>) {
        self.clauses.push(clause);
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn max_clause_width(&self) -> usize {
        self.clauses.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// `assignment[v - 1]` holds the value of variable `v`.
    pub fn eval_lit_partial(lit: Lit, assignment: &[VarValue]) -> VarValue {
        let idx = lit.var as usize;
        if idx == 0 || idx > assignment.len() {
            return VarValue::Unassigned;
        }
        match assignment[idx - 1].as_bool() {
            Some(v) => VarValue::from_bool(v == lit.sign),
            None => VarValue::Unassigned,
        }
    }

    pub fn eval_clause_partial(clause: &[Lit], assignment: &[VarValue]) -> FormulaValue {
        let mut any_open = false;
        for &lit in clause {
            match Self::eval_lit_partial(lit, assignment) {
                VarValue::True => return FormulaValue::Satisfied,
                VarValue::False => {}
                VarValue::Unassigned => any_open = true,
            }
        }
        if any_open {
            FormulaValue::Undetermined
        } else {
            FormulaValue::Falsified
        }
    }

    /// Clause-by-clause evaluation, independent of the incidence table.
    pub fn eval_formula_partial(&self, assignment: &[VarValue]) -> FormulaValue {
        let mut all_sat = true;
        for clause in &self.clauses {
            match Self::eval_clause_partial(clause, assignment) {
                FormulaValue::Satisfied => {}
                FormulaValue::Falsified => return FormulaValue::Falsified,
                FormulaValue::Undetermined => all_sat = false,
            }
        }
        if all_sat {
            FormulaValue::Satisfied
        } else {
            FormulaValue::Undetermined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cnf, Lit};
    use crate::engine::value::{FormulaValue, VarValue};

    #[test]
    fn dimacs_ints() {
        assert_eq!(Lit::from_dimacs(0), None);
        assert_eq!(Lit::from_dimacs(-3), Some(Lit::new(3, false)));
        assert_eq!(Lit::from_dimacs(5).map(Lit::to_dimacs), Some(5));
        assert_eq!(Lit::new(2, true).neg().to_dimacs(), -2);
        assert_eq!(Lit::from_dimacs(i64::MIN), None);
    }

    #[test]
    fn partial_eval_of_xor_pair() {
        let mut cnf = Cnf::new(2);
        cnf.add_clause(vec![Lit::new(1, true), Lit::new(2, true)]);
        cnf.add_clause(vec![Lit::new(1, false), Lit::new(2, false)]);

        let open = [VarValue::Unassigned, VarValue::Unassigned];
        assert_eq!(cnf.eval_formula_partial(&open), FormulaValue::Undetermined);

        let both = [VarValue::True, VarValue::True];
        assert_eq!(cnf.eval_formula_partial(&both), FormulaValue::Falsified);

        let mixed = [VarValue::True, VarValue::False];
        assert_eq!(cnf.eval_formula_partial(&mixed), FormulaValue::Satisfied);
        assert_eq!(cnf.max_clause_width(), 2);
    }
}
