use std::collections::HashSet;

use crate::error::FormatError;

use super::cnf::Cnf;

/// Signed participation of one variable in one clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Polarity {
    Negative,
    #[default]
    Absent,
    Positive,
}

impl Polarity {
    pub fn as_int(self) -> i8 {
        match self {
            Self::Negative => -1,
            Self::Absent => 0,
            Self::Positive => 1,
        }
    }
}

/// Variable-major `[num_vars][num_clauses]` table stored as one flat buffer.
/// Row `v - 1` holds variable `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceTable {
    num_vars: u32,
    num_clauses: usize,
    cells: Vec<Polarity>,
}

impl IncidenceTable {
    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    pub fn num_clauses(&self) -> usize {
        self.num_clauses
    }

    /// Participation of each clause for 1-based `var`.
    pub fn row(&self, var: u32) -> &[Polarity] {
        let start = (var as usize - 1) * self.num_clauses;
        &self.cells[start..start + self.num_clauses]
    }

    pub fn get(&self, var: u32, clause: usize) -> Polarity {
        self.row(var)[clause]
    }

    /// Iterates `(var, row)` in variable order.
    pub fn rows(&self) -> impl Iterator<Item = (u32, &[Polarity])> + '_ {
        (1..=self.num_vars).map(move |v| (v, self.row(v)))
    }
}

impl TryFrom<&Cnf> for IncidenceTable {
    type Error = FormatError;

    /// Transposes the clause list, rejecting clauses the reader would reject.
    fn try_from(cnf: &Cnf) -> Result<Self, Self::Error> {
        let num_clauses = cnf.clauses.len();
        let mut cells = vec![Polarity::Absent; cnf.num_vars as usize * num_clauses];
        let mut seen = HashSet::new();

        for (c, clause) in cnf.clauses.iter().enumerate() {
            if clause.is_empty() {
                return Err(FormatError::EmptyClause { clause: c + 1 });
            }
            seen.clear();
            for lit in clause {
                if lit.var == 0 || lit.var > cnf.num_vars {
                    return Err(FormatError::LiteralOutOfRange {
                        clause: c + 1,
                        lit: lit.to_dimacs(),
                        num_vars: cnf.num_vars,
                    });
                }
                if !seen.insert(lit.var) {
                    return Err(FormatError::DuplicateVariable {
                        clause: c + 1,
                        var: lit.var,
                    });
                }
                let idx = (lit.var as usize - 1) * num_clauses + c;
                cells[idx] = if lit.sign {
                    Polarity::Positive
                } else {
                    Polarity::Negative
                };
            }
        }

        Ok(Self {
            num_vars: cnf.num_vars,
            num_clauses,
            cells,
        })
    }
}
