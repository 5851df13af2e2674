//! A CNF formula loaded from DIMACS text, paired with a partial assignment
//! whose three-valued truth is re-derived on every `set`/`unset`.

pub mod cnf;
pub mod engine;
pub mod error;
pub mod generate;

pub use cnf::{Cnf, Lit};
pub use engine::{Formula, FormulaValue, VarValue};
pub use error::{AssignError, FormatError};
