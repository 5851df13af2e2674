use thiserror::Error;

/// Rejection of a DIMACS input. Any variant means no formula was built.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to read cnf input: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing header, expected: p cnf <vars> <clauses>")]
    MissingHeader,
    #[error("line {line}: invalid header, expected: p cnf <vars> <clauses>")]
    InvalidHeader { line: usize },
    #[error("line {line}: second header line")]
    DuplicateHeader { line: usize },
    #[error("line {line}: clause data before header")]
    DataBeforeHeader { line: usize },
    #[error("line {line}: invalid literal token '{token}'")]
    InvalidToken { line: usize, token: String },
    #[error("clause {clause}: literal {lit} outside declared range 1..={num_vars}")]
    LiteralOutOfRange { clause: usize, lit: i64, num_vars: u32 },
    #[error("clause {clause}: variable {var} occurs more than once")]
    DuplicateVariable { clause: usize, var: u32 },
    #[error("clause {clause}: empty clause")]
    EmptyClause { clause: usize },
    #[error("last clause is missing its terminating 0")]
    UnterminatedClause,
    #[error("header declares {declared} clauses, found {found}")]
    ClauseCountMismatch { declared: usize, found: usize },
}

/// Contract violation on `set`/`unset`. The assignment is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error("variable {var} out of range 1..={num_vars}")]
    VariableOutOfRange { var: u32, num_vars: u32 },
    #[error("value {0} is not -1 or 1")]
    InvalidValue(i64),
    #[error("variable {var} is already assigned")]
    AlreadyAssigned { var: u32 },
    #[error("variable {var} is not assigned")]
    NotAssigned { var: u32 },
}
