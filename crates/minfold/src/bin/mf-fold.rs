use clap::Parser;
use colored::*;
use anyhow::Result;
use env_logger::{Builder, Env};
use std::io::Write;

use mf_energy::NucleotideVec;
use mf_fold::fold_with_params;
use mf_fold::Constraints;
use mf_fold::HardConstraints;

use minfold::fold_args::ModelArguments;
use minfold::input_parsers::read_fasta_like_input;

#[derive(Debug, Parser)]
#[command(name = "mf-fold")]
#[command(version, about = "Minimum free energy RNA secondary structure prediction")]
pub struct Cli {
    /// Input file (FASTA-like), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: String,

    /// Fold the sequence as a circle (position n is adjacent to position 1).
    #[arg(short, long)]
    circ: bool,

    /// Structure constraint string ('.', 'x', '|', '<', '>', '(', ')').
    #[arg(short = 'C', long, value_name = "CONSTRAINT")]
    constraint: Option<String>,

    /// Also print the letter-coded helix rendering.
    #[arg(long)]
    letters: bool,

    #[command(flatten, next_help_heading = "Energy model parameters")]
    model: ModelArguments,
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();
    let options = cli.model.build_options()?;
    let params = options.scaled_params()?;

    let (header, sequence) = read_fasta_like_input(&cli.input)?;
    let nucleotides = NucleotideVec::try_from(sequence.as_str())?;

    let constraints = match &cli.constraint {
        Some(s) => Constraints {
            hard: Some(HardConstraints::from_string(s)?),
            soft: Default::default(),
        },
        None => Constraints::default(),
    };

    let result = fold_with_params(&sequence, &options, &params, &constraints, cli.circ)?;

    if let Some(h) = header {
        println!("{}", h.yellow());
    }
    println!("{}", nucleotides);
    if result.energy_kcal().is_infinite() {
        println!("{} {}", result.structure, "(no feasible structure)".red());
    } else {
        println!("{} ({:6.2})", result.structure, result.energy_kcal());
    }
    if cli.letters {
        println!("{}", result.letters());
    }
    Ok(())
}
