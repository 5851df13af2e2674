use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::FormatError;

use super::cnf::{Cnf, Lit};

pub fn parse_dimacs_str(s: &str) -> Result<Cnf, FormatError> {
    parse_dimacs_reader(std::io::Cursor::new(s.as_bytes()))
}

pub fn read_dimacs_file<P: AsRef<Path>>(path: P) -> Result<Cnf, FormatError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let cnf = parse_dimacs_reader(BufReader::new(file))?;
    debug!(
        "read {}: vars={} clauses={}",
        path.display(),
        cnf.num_vars,
        cnf.num_clauses()
    );
    Ok(cnf)
}

/// Strict reader: the clause count must match the header, a variable may
/// occur once per clause, and every clause is non-empty and `0`-terminated.
/// Clauses may span lines; `c` lines are skipped wherever they appear.
pub fn parse_dimacs_reader<R: BufRead>(r: R) -> Result<Cnf, FormatError> {
    let mut header: Option<(u32, usize)> = None;
    let mut cnf = Cnf::new(0);
    let mut current = Vec::<Lit>::new();
    let mut seen = HashSet::<u32>::new();

    for (idx, line) in r.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        if line.starts_with('c') {
            continue;
        }
        let clean = line.trim();
        if clean.is_empty() {
            continue;
        }

        if clean.starts_with('p') {
            if header.is_some() {
                return Err(FormatError::DuplicateHeader { line: line_no });
            }
            let (num_vars, num_clauses) = parse_header(clean, line_no)?;
            cnf.num_vars = num_vars;
            header = Some((num_vars, num_clauses));
            continue;
        }

        let Some((num_vars, _)) = header else {
            return Err(FormatError::DataBeforeHeader { line: line_no });
        };

        for token in clean.split_whitespace() {
            let value = token
                .parse::<i64>()
                .map_err(|_| FormatError::InvalidToken {
                    line: line_no,
                    token: token.to_owned(),
                })?;
            let clause_no = cnf.num_clauses() + 1;

            if value == 0 {
                if current.is_empty() {
                    return Err(FormatError::EmptyClause { clause: clause_no });
                }
                cnf.add_clause(std::mem::take(&mut current));
                seen.clear();
                continue;
            }

            let lit = match Lit::from_dimacs(value) {
                Some(lit) if lit.var <= num_vars => lit,
                _ => {
                    return Err(FormatError::LiteralOutOfRange {
                        clause: clause_no,
                        lit: value,
                        num_vars,
                    });
                }
            };
            if !seen.insert(lit.var) {
                return Err(FormatError::DuplicateVariable {
                    clause: clause_no,
                    var: lit.var,
                });
            }
            current.push(lit);
        }
    }

    let Some((_, declared)) = header else {
        return Err(FormatError::MissingHeader);
    };
    if !current.is_empty() {
        return Err(FormatError::UnterminatedClause);
    }
    if cnf.num_clauses() != declared {
        return Err(FormatError::ClauseCountMismatch {
            declared,
            found: cnf.num_clauses(),
        });
    }
    Ok(cnf)
}

fn parse_header(line: &str, line_no: usize) -> Result<(u32, usize), FormatError> {
    let invalid = || FormatError::InvalidHeader { line: line_no };
    let parts = line.split_whitespace().collect::<Vec<_>>();
    if parts.len() != 4 || parts[0] != "p" || parts[1] != "cnf" {
        return Err(invalid());
    }
    let num_vars = parts[2].parse::<u32>().map_err(|_| invalid())?;
    let num_clauses = parts[3].parse::<usize>().map_err(|_| invalid())?;
    Ok((num_vars, num_clauses))
}

pub fn to_dimacs(cnf: &Cnf) -> String {
    let mut out = String::new();
    out.push_str(&format!("p cnf {} {}\n", cnf.num_vars, cnf.num_clauses()));
    for clause in &cnf.clauses {
        for &lit in clause {
            out.push_str(&format!("{} ", lit.to_dimacs()));
        }
        out.push_str("0\n");
    }
    out
}

pub fn write_dimacs<P: AsRef<Path>>(path: P, cnf: &Cnf) -> std::io::Result<()> {
    std::fs::write(path, to_dimacs(cnf))
}
