use std::{env, process::ExitCode, str::FromStr};

use log::info;
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;
use toroidal_life::{GridSimulator, Named, Pattern};

const USAGE: &str = "usage: toroidal-life [example|random|PATTERN] [GENERATIONS] [SEED]";

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Life(#[from] toroidal_life::Error),
    #[error("expected a non-negative number, got {0:?}")]
    BadNumber(String),
    #[error("too many arguments")]
    TooManyArgs,
}

enum Seed {
    /// Vertical bar in the middle of a 20x20 grid.
    Example,
    Random,
    Named(Named),
}

impl FromStr for Seed {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "example" => Seed::Example,
            "random" => Seed::Random,
            name => Seed::Named(name.parse()?),
        })
    }
}

fn number(arg: Option<&String>) -> Result<Option<u64>, CliError> {
    arg.map(|s| s.parse().map_err(|_| CliError::BadNumber(s.clone())))
        .transpose()
}

fn seeded(seed: &Seed, rng_seed: Option<u64>) -> Result<GridSimulator, CliError> {
    let sim = match seed {
        Seed::Example => {
            let mut sim = GridSimulator::new(20, 20)?;
            let bar = Pattern::from_str(".o.\n.o.\n.o.")?;
            sim.set_pattern(&bar, (8, 8))?;
            sim
        }
        Seed::Random => {
            let mut sim = GridSimulator::new(30, 30)?;
            let mut rng = match rng_seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };
            sim.randomize(0.3, &mut rng)?;
            sim
        }
        Seed::Named(named) => {
            let pattern = named.pattern();
            let (rows, cols) = (
                (pattern.rows() + 10).max(20),
                (pattern.cols() + 10).max(20),
            );
            let mut sim = GridSimulator::new(rows, cols)?;
            let at = ((rows - pattern.rows()) / 2, (cols - pattern.cols()) / 2);
            sim.set_pattern(&pattern, at)?;
            sim
        }
    };
    Ok(sim)
}

fn run(args: &[String]) -> Result<(), CliError> {
    if args.len() > 3 {
        return Err(CliError::TooManyArgs);
    }
    let seed = match args.first() {
        Some(arg) => arg.parse()?,
        None => Seed::Example,
    };
    let generations = number(args.get(1))?.unwrap_or(2);
    let mut sim = seeded(&seed, number(args.get(2))?)?;
    info!(
        "running {}x{} grid for {generations} generations",
        sim.rows(),
        sim.cols()
    );
    for generation in 0..=generations {
        if generation > 0 {
            sim.advance();
        }
        println!("Generation {generation}:");
        println!("{}", sim.snapshot());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = env::args().skip(1).collect::<Vec<_>>();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}
