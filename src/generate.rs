use anyhow::{Result, bail};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cnf::cnf::{Cnf, Lit};

/// Uniform random k-CNF: every clause picks `k` distinct variables and a
/// random sign for each. Same seed, same formula.
pub fn random_kcnf(num_vars: u32, num_clauses: usize, k: usize, seed: u64) -> Result<Cnf> {
    if k == 0 {
        bail!("clause width k must be positive");
    }
    if k > num_vars as usize {
        bail!("clause width {} exceeds variable count {}", k, num_vars);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cnf = Cnf::new(num_vars);
    let mut picked = vec![false; num_vars as usize + 1];

    for _ in 0..num_clauses {
        let mut clause = Vec::with_capacity(k);
        while clause.len() < k {
            let var = rng.random_range(1..=num_vars);
            if picked[var as usize] {
                continue;
            }
            picked[var as usize] = true;
            clause.push(Lit::new(var, rng.random::<bool>()));
        }
        for lit in &clause {
            picked[lit.var as usize] = false;
        }
        clause.sort_unstable_by_key(|lit| lit.var);
        cnf.add_clause(clause);
    }
    Ok(cnf)
}
