use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use log::info;

use cnfstate::cnf::cnf::Lit;
use cnfstate::cnf::dimacs::write_dimacs;
use cnfstate::engine::Formula;
use cnfstate::generate::random_kcnf;

#[derive(Debug, Parser)]
#[command(name = "cnfstate")]
#[command(about = "Load a DIMACS CNF and track its value under a partial assignment")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Print counts and the value with nothing assigned.
    Info { path: String },
    /// Assign DIMACS literals in order, printing the value after each one.
    Eval {
        path: String,
        #[arg(allow_negative_numbers = true)]
        lits: Vec<i64>,
    },
    /// Write a seeded random k-CNF.
    Gen {
        #[arg(long)]
        vars: u32,
        #[arg(long)]
        clauses: usize,
        #[arg(long, default_value_t = 3)]
        k: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command {
        Cmd::Info { path } => info_cmd(&path)?,
        Cmd::Eval { path, lits } => eval_cmd(&path, &lits)?,
        Cmd::Gen {
            vars,
            clauses,
            k,
            seed,
            out,
        } => gen_cmd(vars, clauses, k, seed, &out)?,
    }
    Ok(())
}

fn load(path: &str) -> Result<Formula> {
    Formula::open(path).with_context(|| format!("invalid cnf input: {}", path))
}

fn info_cmd(path: &str) -> Result<()> {
    let formula = load(path)?;
    println!(
        "vars={} clauses={} value={}",
        formula.num_variables(),
        formula.num_clauses(),
        formula.value().as_int()
    );
    Ok(())
}

fn eval_cmd(path: &str, lits: &[i64]) -> Result<()> {
    let mut formula = load(path)?;
    if lits.is_empty() {
        bail!("no literals given");
    }
    for &raw in lits {
        let lit = Lit::from_dimacs(raw).ok_or_else(|| anyhow!("invalid literal {}", raw))?;
        let value = formula
            .assign(lit)
            .with_context(|| format!("cannot assign literal {}", raw))?;
        println!("{} -> {}", raw, value.as_int());
    }
    info!(
        "assigned {}/{} variables, value {}",
        formula.assigned_count(),
        formula.num_variables(),
        formula.value()
    );
    Ok(())
}

fn gen_cmd(vars: u32, clauses: usize, k: usize, seed: u64, out: &str) -> Result<()> {
    let cnf = random_kcnf(vars, clauses, k, seed)?;
    write_dimacs(out, &cnf).with_context(|| format!("failed to write {}", out))?;
    println!(
        "GEN: wrote {} | vars={} clauses={} k={} seed={}",
        out,
        cnf.num_vars,
        cnf.num_clauses(),
        k,
        seed
    );
    Ok(())
}
