use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use log::{debug, trace};

use crate::cnf::cnf::{Cnf, Lit};
use crate::cnf::dimacs::{parse_dimacs_reader, parse_dimacs_str, read_dimacs_file};
use crate::cnf::incidence::IncidenceTable;
use crate::error::{AssignError, FormatError};

use super::eval::evaluate;
use super::value::{FormulaValue, VarValue};

/// A CNF formula together with a partial assignment of its variables.
///
/// The clause structure is fixed at construction. Only `set`/`unset` change
/// the assignment, and each of them recomputes the formula value, so
/// [`Formula::value`] always reflects the current assignment.
#[derive(Debug, Clone)]
pub struct Formula {
    table: IncidenceTable,
    assignment: Vec<VarValue>,
    value: FormulaValue,
}

impl Formula {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FormatError> {
        let cnf = read_dimacs_file(path)?;
        Self::try_from(&cnf)
    }

    pub fn from_reader<R: BufRead>(r: R) -> Result<Self, FormatError> {
        let cnf = parse_dimacs_reader(r)?;
        Self::try_from(&cnf)
    }

    pub fn num_variables(&self) -> u32 {
        self.table.num_vars()
    }

    pub fn num_clauses(&self) -> usize {
        self.table.num_clauses()
    }

    pub fn value(&self) -> FormulaValue {
        self.value
    }

    /// Value of `var`; `Unassigned` for any index outside `1..=num_variables()`.
    pub fn var_value(&self, var: u32) -> VarValue {
        if self.in_range(var) {
            self.assignment[var as usize - 1]
        } else {
            VarValue::Unassigned
        }
    }

    pub fn set(&mut self, var: u32, value: VarValue) -> Result<FormulaValue, AssignError> {
        self.check_range(var)?;
        if !value.is_assigned() {
            return Err(AssignError::InvalidValue(0));
        }
        if self.var_value(var).is_assigned() {
            return Err(AssignError::AlreadyAssigned { var });
        }
        self.assignment[var as usize - 1] = value;
        self.refresh();
        trace!("set x{} := {:?} -> {}", var, value, self.value);
        Ok(self.value)
    }

    pub fn unset(&mut self, var: u32) -> Result<FormulaValue, AssignError> {
        self.check_range(var)?;
        if !self.var_value(var).is_assigned() {
            return Err(AssignError::NotAssigned { var });
        }
        self.assignment[var as usize - 1] = VarValue::Unassigned;
        self.refresh();
        trace!("unset x{} -> {}", var, self.value);
        Ok(self.value)
    }

    /// Sets the literal's variable so that `lit` becomes true.
    pub fn assign(&mut self, lit: Lit) -> Result<FormulaValue, AssignError> {
        self.set(lit.var, VarValue::from_bool(lit.sign))
    }

    pub fn assigned_count(&self) -> usize {
        self.assignment.iter().filter(|v| v.is_assigned()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.assigned_count() == self.assignment.len()
    }

    fn in_range(&self, var: u32) -> bool {
        var >= 1 && var <= self.num_variables()
    }

    fn check_range(&self, var: u32) -> Result<(), AssignError> {
        if self.in_range(var) {
            Ok(())
        } else {
            Err(AssignError::VariableOutOfRange {
                var,
                num_vars: self.num_variables(),
            })
        }
    }

    fn refresh(&mut self) {
        self.value = evaluate(&self.table, &self.assignment);
    }
}

impl TryFrom<&Cnf> for Formula {
    type Error = FormatError;

    fn try_from(cnf: &Cnf) -> Result<Self, Self::Error> {
        let table = IncidenceTable::try_from(cnf)?;
        let assignment = vec![VarValue::Unassigned; table.num_vars() as usize];
        let value = evaluate(&table, &assignment);
        debug!(
            "formula ready: vars={} clauses={} value={}",
            table.num_vars(),
            table.num_clauses(),
            value
        );
        Ok(Self {
            table,
            assignment,
            value,
        })
    }
}

impl FromStr for Formula {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cnf = parse_dimacs_str(s)?;
        Self::try_from(&cnf)
    }
}
