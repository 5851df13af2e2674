pub mod eval;
pub mod formula;
pub mod value;

pub use formula::Formula;
pub use value::{FormulaValue, VarValue};
